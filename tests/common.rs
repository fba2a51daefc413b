//! tests/common.rs
//! Common constants and utilities shared across test files

use pbkdf2_engine::MacAlgorithm;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

/// Fast iteration count for tests - performance testing is in benches/
/// Most tests use this value to keep test execution fast.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATIONS: u32 = 5;

/// Standard test password used across test files
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &[u8] = b"correct horse battery staple";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_SALT: &[u8] = b"NaCl-and-pepper";

/// Common iteration count vectors for testing various iteration values
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATION_VALUES: &[u32] = &[1, 2, TEST_ITERATIONS, 10];

/// Output lengths around every supported block width (20, 32, 48, 64)
#[allow(dead_code)] // Used across multiple test files
pub const TEST_OUTPUT_LENGTHS: &[usize] = &[1, 19, 20, 21, 31, 32, 33, 48, 63, 64, 65, 100, 129];

/// Independent PBKDF2 implementation (RustCrypto `pbkdf2`) used as an oracle.
/// An absent salt is the empty salt.
#[allow(dead_code)] // Used across multiple test files
pub fn reference_pbkdf2(
    algorithm: MacAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    len: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; len];
    match algorithm {
        MacAlgorithm::HmacSha1 => pbkdf2::pbkdf2_hmac::<Sha1>(password, salt, iterations, &mut out),
        MacAlgorithm::HmacSha256 => {
            pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut out)
        }
        MacAlgorithm::HmacSha384 => {
            pbkdf2::pbkdf2_hmac::<Sha384>(password, salt, iterations, &mut out)
        }
        MacAlgorithm::HmacSha512 => {
            pbkdf2::pbkdf2_hmac::<Sha512>(password, salt, iterations, &mut out)
        }
    }
    out
}
