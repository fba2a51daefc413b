// src/crypto/hmac.rs

//! MAC provider capability and the HMAC-SHA implementations of it.
//!
//! The engine keys a provider once per derivation and clones the keyed state for
//! every MAC invocation, so `init` runs exactly once per call.

use hmac::digest::OutputSizeUser;
use hmac::Mac;

use crate::aliases::{HmacSha1, HmacSha256, HmacSha384, HmacSha512};
use crate::crypto::algorithm::MacAlgorithm;
use crate::error::Pbkdf2Error;

/// Keyed pseudorandom function driven by the PBKDF2 engine.
///
/// `init(key) -> state`, `update(state, bytes)`, `finish(state) -> bytes`.
/// Implement this for a custom PRF and call [`derive_with`](crate::derive_with).
pub trait MacProvider: Clone {
    /// Length in bytes of one MAC output (`hLen`).
    fn output_len() -> usize;

    /// Name reported in log events. Defaults to the Rust type name.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Key a fresh state.
    fn init(key: &[u8]) -> Result<Self, Pbkdf2Error>;

    /// Absorb `data` into the state.
    fn update(&mut self, data: &[u8]);

    /// Consume the state and write exactly [`output_len`](Self::output_len) bytes into `out`.
    fn finish_into(self, out: &mut [u8]);
}

macro_rules! impl_hmac_provider {
    ($($mac:ty => $algorithm:expr),+ $(,)?) => {$(
        impl MacProvider for $mac {
            #[inline(always)]
            fn output_len() -> usize {
                <$mac as OutputSizeUser>::output_size()
            }

            fn name() -> &'static str {
                $algorithm.name()
            }

            #[inline(always)]
            fn init(key: &[u8]) -> Result<Self, Pbkdf2Error> {
                <$mac as Mac>::new_from_slice(key)
                    .map_err(|e| Pbkdf2Error::Failure(format!("HMAC key init failed: {e}")))
            }

            #[inline(always)]
            fn update(&mut self, data: &[u8]) {
                Mac::update(self, data);
            }

            #[inline(always)]
            fn finish_into(self, out: &mut [u8]) {
                out.copy_from_slice(&Mac::finalize(self).into_bytes());
            }
        }
    )+};
}

impl_hmac_provider!(
    HmacSha1 => MacAlgorithm::HmacSha1,
    HmacSha256 => MacAlgorithm::HmacSha256,
    HmacSha384 => MacAlgorithm::HmacSha384,
    HmacSha512 => MacAlgorithm::HmacSha512,
);
