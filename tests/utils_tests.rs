//! tests/utils_tests.rs
//! Unit tests for utility functions

use pbkdf2_engine::utils::{encode_block_counter, xor_in_place};

#[test]
fn block_counter_is_big_endian() {
    assert_eq!(encode_block_counter(1), [0x00, 0x00, 0x00, 0x01]);
    assert_eq!(encode_block_counter(2), [0x00, 0x00, 0x00, 0x02]);
    assert_eq!(encode_block_counter(0x0102_0304), [0x01, 0x02, 0x03, 0x04]);
    assert_eq!(encode_block_counter(u32::MAX), [0xFF; 4]);
}

#[test]
fn xor_in_place_basic() {
    let mut acc = [0b1010_1010u8; 20];
    let block = [0b0101_0101u8; 20];

    xor_in_place(&mut acc, &block);
    assert_eq!(acc, [0xFF; 20]);

    xor_in_place(&mut acc, &block);
    assert_eq!(acc, [0b1010_1010u8; 20]);
}

#[test]
fn xor_in_place_self_inverse() {
    let original: Vec<u8> = (0..64).collect();
    let mut acc = original.clone();
    let block: Vec<u8> = (0..64).map(|i: u8| i.wrapping_mul(37)).collect();

    xor_in_place(&mut acc, &block);
    assert_ne!(acc, original);
    xor_in_place(&mut acc, &block);
    assert_eq!(acc, original);
}

#[test]
fn xor_in_place_only_touches_common_prefix() {
    let mut acc = [0u8; 8];
    xor_in_place(&mut acc, &[0xFF; 3]);
    assert_eq!(acc, [0xFF, 0xFF, 0xFF, 0, 0, 0, 0, 0]);

    let mut short = [0u8; 2];
    xor_in_place(&mut short, &[0x0F; 8]);
    assert_eq!(short, [0x0F, 0x0F]);
}

#[test]
fn xor_in_place_empty() {
    let mut acc: [u8; 0] = [];
    xor_in_place(&mut acc, &[]);
    assert!(acc.is_empty());
}
