// src/crypto/rng.rs
//! Secure randomness for salts
//!
//! Adds `T::random()` to every `fixed_alias!` type (Salt16, DerivedKey32, …)
//! and [`random_salt`] for variable-length salts, both backed by a thread-local `OsRng`.

use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;
use std::cell::RefCell;

use crate::error::Pbkdf2Error;

/// Extension trait – gives `.random()` to all fixed-size secret types
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type
    fn random() -> Result<Self, Pbkdf2Error>;
}

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

fn fill_random(bytes: &mut [u8]) -> Result<(), Pbkdf2Error> {
    RNG.with(|rng_cell| {
        rng_cell
            .borrow_mut()
            .try_fill_bytes(bytes)
            .map_err(|e| Pbkdf2Error::Failure(format!("OS RNG unavailable: {e}")))
    })
}

impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline(always)]
    fn random() -> Result<Self, Pbkdf2Error> {
        let mut bytes = [0u8; N];
        fill_random(&mut bytes)?;
        Ok(Fixed::new(bytes))
    }
}

/// Fresh random salt of `len` bytes.
pub fn random_salt(len: usize) -> Result<Vec<u8>, Pbkdf2Error> {
    let mut salt = vec![0u8; len];
    fill_random(&mut salt)?;
    Ok(salt)
}
