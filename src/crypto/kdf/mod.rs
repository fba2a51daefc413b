//! # Key Derivation Functions (KDF)
//!
//! - [`pbkdf2`] - one-shot PBKDF2 over any [`MacProvider`](crate::crypto::hmac::MacProvider)
//!
//! Most callers use [`derive`](crate::derive) or [`Pbkdf2Builder`](crate::Pbkdf2Builder);
//! [`derive_with`](pbkdf2::derive_with) is exposed for custom PRFs.

pub mod pbkdf2;
