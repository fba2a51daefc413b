//! src/crypto/algorithm.rs
//! Closed set of PBKDF2 pseudorandom functions

use std::fmt;
use std::str::FromStr;

use crate::error::Pbkdf2Error;

/// PRF family used as PBKDF2's inner function.
///
/// Unknown names are rejected when parsing, so a `MacAlgorithm` value always
/// maps to an available provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MacAlgorithm {
    /// HMAC-SHA1 (20-byte blocks)
    HmacSha1,
    /// HMAC-SHA256 (32-byte blocks)
    #[default]
    HmacSha256,
    /// HMAC-SHA384 (48-byte blocks)
    HmacSha384,
    /// HMAC-SHA512 (64-byte blocks)
    HmacSha512,
}

impl MacAlgorithm {
    /// Every supported algorithm, narrowest output first.
    pub const ALL: [MacAlgorithm; 4] = [
        MacAlgorithm::HmacSha1,
        MacAlgorithm::HmacSha256,
        MacAlgorithm::HmacSha384,
        MacAlgorithm::HmacSha512,
    ];

    /// MAC output length in bytes (`hLen`).
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            MacAlgorithm::HmacSha1 => 20,
            MacAlgorithm::HmacSha256 => 32,
            MacAlgorithm::HmacSha384 => 48,
            MacAlgorithm::HmacSha512 => 64,
        }
    }

    /// Canonical algorithm name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MacAlgorithm::HmacSha1 => "HmacSHA1",
            MacAlgorithm::HmacSha256 => "HmacSHA256",
            MacAlgorithm::HmacSha384 => "HmacSHA384",
            MacAlgorithm::HmacSha512 => "HmacSHA512",
        }
    }

    /// Resolve an algorithm name.
    ///
    /// Matching is case-insensitive, the `Hmac` prefix is optional and `-` / `_`
    /// separators are ignored: `"SHA-256"`, `"hmac_sha256"` and `"HmacSHA256"`
    /// all resolve to [`MacAlgorithm::HmacSha256`].
    ///
    /// # Errors
    ///
    /// - [`Pbkdf2Error::InvalidArgument`] for an empty (or all-whitespace) name
    /// - [`Pbkdf2Error::UnsupportedAlgorithm`] for any other unknown name
    pub fn from_name(name: &str) -> Result<Self, Pbkdf2Error> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Pbkdf2Error::InvalidArgument(
                "algorithm name must not be empty".into(),
            ));
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let digest = normalized.strip_prefix("HMAC").unwrap_or(&normalized);

        match digest {
            "SHA1" => Ok(MacAlgorithm::HmacSha1),
            "SHA256" => Ok(MacAlgorithm::HmacSha256),
            "SHA384" => Ok(MacAlgorithm::HmacSha384),
            "SHA512" => Ok(MacAlgorithm::HmacSha512),
            _ => Err(Pbkdf2Error::UnsupportedAlgorithm(trimmed.to_string())),
        }
    }
}

impl FromStr for MacAlgorithm {
    type Err = Pbkdf2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
