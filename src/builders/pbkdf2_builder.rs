//! src/builders/pbkdf2_builder.rs
//! PBKDF2 parameter builder over the one-shot engine

use crate::aliases::{PasswordBytes, SpanBuffer};
use crate::consts::{DEFAULT_PBKDF2_ITERATIONS, DEFAULT_PBKDF2_LENGTH};
use crate::crypto::algorithm::MacAlgorithm;
use crate::crypto::kdf::pbkdf2::{derive, derive_secure_pbkdf2_key};
use crate::error::Pbkdf2Error;

/// PBKDF2 key derivation builder
///
/// Defaults: HMAC-SHA256, [`DEFAULT_PBKDF2_ITERATIONS`] iterations, no salt.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). Derivation borrows the builder
/// immutably, so one configured builder can serve concurrent callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pbkdf2Builder {
    algorithm: MacAlgorithm,
    iterations: u32,
    salt: Option<Vec<u8>>,
}

impl Pbkdf2Builder {
    /// Create builder with defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithm: MacAlgorithm::default(),
            iterations: DEFAULT_PBKDF2_ITERATIONS,
            salt: None,
        }
    }

    /// Set the PRF
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: MacAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set custom iteration count (minimum 1)
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    /// Set custom salt — accepts `Vec<u8>`, `&[u8]`, `[u8; N]`, ...
    #[must_use]
    pub fn with_salt(mut self, salt: impl AsRef<[u8]>) -> Self {
        self.salt = Some(salt.as_ref().to_vec());
        self
    }

    /// Derive without a salt
    #[must_use]
    pub fn without_salt(mut self) -> Self {
        self.salt = None;
        self
    }

    /// Use a fresh random salt of [`DEFAULT_SALT_SIZE`](crate::consts::DEFAULT_SALT_SIZE) bytes
    ///
    /// # Errors
    ///
    /// Returns [`Pbkdf2Error::Failure`] if the OS RNG is unavailable.
    #[cfg(feature = "rand")]
    pub fn with_random_salt(self) -> Result<Self, Pbkdf2Error> {
        self.with_random_salt_len(crate::consts::DEFAULT_SALT_SIZE)
    }

    /// Use a fresh random salt of `len` bytes
    ///
    /// # Errors
    ///
    /// Returns [`Pbkdf2Error::Failure`] if the OS RNG is unavailable.
    #[cfg(feature = "rand")]
    pub fn with_random_salt_len(mut self, len: usize) -> Result<Self, Pbkdf2Error> {
        self.salt = Some(crate::crypto::rng::random_salt(len)?);
        Ok(self)
    }

    /// Current PRF
    #[must_use]
    pub const fn algorithm(&self) -> MacAlgorithm {
        self.algorithm
    }

    /// Current iteration count
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Current salt, if any (for serialization)
    #[must_use]
    pub fn salt(&self) -> Option<&[u8]> {
        self.salt.as_deref()
    }

    /// Derive into any caller-owned buffer, filling it completely
    #[inline(always)]
    pub fn derive_into(&self, password: &[u8], out: &mut [u8]) -> Result<(), Pbkdf2Error> {
        derive(
            self.algorithm,
            password,
            self.salt.as_deref(),
            self.iterations,
            out,
        )
    }

    /// Convenience: derive `len` bytes into a fresh vector
    pub fn derive_vec(&self, password: &[u8], len: usize) -> Result<Vec<u8>, Pbkdf2Error> {
        let mut out = vec![0u8; len];
        self.derive_into(password, &mut out)?;
        Ok(out)
    }

    /// Derive a [`DEFAULT_PBKDF2_LENGTH`]-byte key into a fresh vector
    pub fn derive_key(&self, password: &[u8]) -> Result<Vec<u8>, Pbkdf2Error> {
        self.derive_vec(password, DEFAULT_PBKDF2_LENGTH)
    }

    /// Derive key directly into caller-provided secure buffer — **preferred**
    #[inline(always)]
    pub fn derive_secure<const N: usize>(
        &self,
        password: &PasswordBytes,
        out_key: &mut SpanBuffer<N>,
    ) -> Result<(), Pbkdf2Error> {
        derive_secure_pbkdf2_key(
            self.algorithm,
            password,
            self.salt.as_deref(),
            self.iterations,
            out_key,
        )
    }

    /// Convenience: derive and return a fresh secure key
    #[inline(always)]
    pub fn derive_secure_new<const N: usize>(
        &self,
        password: &PasswordBytes,
    ) -> Result<SpanBuffer<N>, Pbkdf2Error> {
        let mut key = SpanBuffer::<N>::new([0u8; N]);
        self.derive_secure(password, &mut key)?;
        Ok(key)
    }
}

impl Default for Pbkdf2Builder {
    fn default() -> Self {
        Self::new()
    }
}
