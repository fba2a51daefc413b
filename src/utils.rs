//! Utility functions used by the derivation engine.

use crate::consts::BLOCK_COUNTER_LEN;

/// Encodes a PBKDF2 block index as the 4-byte big-endian `INT(i)` suffix.
#[inline(always)]
#[must_use]
pub const fn encode_block_counter(block_index: u32) -> [u8; BLOCK_COUNTER_LEN] {
    block_index.to_be_bytes()
}

/// XORs `block` into `acc` byte by byte.
///
/// Only the common prefix is touched; callers pass equal-length slices.
/// Auto-vectorized by LLVM for the 20–64 byte MAC widths used here.
#[inline(always)]
pub fn xor_in_place(acc: &mut [u8], block: &[u8]) {
    for (a, b) in acc.iter_mut().zip(block) {
        *a ^= b;
    }
}
