// src/crypto/mod.rs

//! Low-level crypto primitives: the PRF capability, the algorithm set and the PBKDF2 engine.
//!
//! See crate root for re-exports (e.g., `derive`, `Pbkdf2Builder`).

pub mod algorithm;
pub mod hmac;
pub mod kdf;
#[cfg(feature = "rand")]
pub mod rng;
