//! # Constants
//!
//! This module defines the fixed parameters of the PBKDF2 construction and the
//! defaults used by [`Pbkdf2Builder`](crate::Pbkdf2Builder).

/// Minimum allowed PBKDF2 iteration count.
///
/// Must be at least `1`. A count of `0` is rejected with
/// [`Pbkdf2Error::InvalidArgument`](crate::Pbkdf2Error::InvalidArgument).
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Default PBKDF2 iteration count for the builder.
///
/// Set to `600_000`, the OWASP figure for PBKDF2-HMAC-SHA256.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 600_000;

/// Default derived key length (32 bytes = 256-bit key).
pub const DEFAULT_PBKDF2_LENGTH: usize = 32;

/// Default salt size (16 bytes) for generated salts.
pub const DEFAULT_SALT_SIZE: usize = 16;

/// Width of the big-endian block counter appended to the salt.
pub const BLOCK_COUNTER_LEN: usize = 4;

/// Largest MAC output the engine's scratch buffers hold (SHA-512).
pub const MAX_MAC_OUTPUT_LEN: usize = 64;

/// Largest number of output blocks a single derivation may produce.
pub const MAX_BLOCK_COUNT: u32 = u32::MAX;

/// Keying material used in place of an empty password.
///
/// HMAC zero-extends short keys, so an empty key and a single zero byte key
/// are the same key.
pub const EMPTY_PASSWORD_KEY: [u8; 1] = [0u8; 1];
