//! # Error Types
//!
//! This module defines the error type returned by every derivation entry point.
//! All operations return [`Result<T, Pbkdf2Error>`](Pbkdf2Error).

use thiserror::Error;

/// The error type for all PBKDF2 operations.
///
/// Validation failures ([`InvalidArgument`](Pbkdf2Error::InvalidArgument) and
/// [`UnsupportedAlgorithm`](Pbkdf2Error::UnsupportedAlgorithm)) are reported
/// before any MAC call is made and before the destination is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Pbkdf2Error {
    /// A caller-supplied argument is missing or malformed.
    ///
    /// Raised for:
    /// - an empty algorithm name
    /// - an iteration count of zero
    /// - a destination needing more than `u32::MAX` output blocks
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No MAC provider is available for the requested algorithm name.
    ///
    /// Callers can use this to fall back to another algorithm rather than
    /// treating the call as a programming error.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The underlying MAC primitive failed mid-derivation.
    ///
    /// The destination buffer must be treated as unspecified.
    #[error("PBKDF2 failure: {0}")]
    Failure(String),
}

impl Pbkdf2Error {
    /// `true` for [`Pbkdf2Error::InvalidArgument`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// `true` for [`Pbkdf2Error::UnsupportedAlgorithm`].
    #[must_use]
    pub const fn is_unsupported_algorithm(&self) -> bool {
        matches!(self, Self::UnsupportedAlgorithm(_))
    }
}

impl From<&'static str> for Pbkdf2Error {
    fn from(msg: &'static str) -> Self {
        Pbkdf2Error::Failure(msg.to_string())
    }
}
