//! # Secure-Gate Type Aliases
//!
//! This module provides type aliases for secure memory management using [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Fixed and dynamic secrets are zeroized on drop when the `zeroize` feature is on.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha1`], [`HmacSha256`], [`HmacSha384`], [`HmacSha512`] - the built-in MAC providers
//!
//! ### Generic Secure Buffers
//! - [`SpanBuffer<N>`] - Generic secure stack buffer for any size `N`
//! - [`MacBlock64`] - scratch space for one MAC output (U and T blocks)
//!
//! ### Dynamic Secrets
//! - [`PasswordBytes`] - Secure password byte wrapper
//!
//! ### Fixed-Size Secrets
//! - [`DerivedKey32`] - 32-byte derived key
//! - [`DerivedKey64`] - 64-byte derived key
//! - [`Salt16`] - 16-byte salt
//!
//! ## Usage
//!
//! All secure types require explicit `.expose_secret()` or `.expose_secret_mut()` to access
//! the underlying data, ensuring no accidental secret exposure.

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

use crate::consts::MAX_MAC_OUTPUT_LEN;

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitives
// ─────────────────────────────────────────────────────────────────────────────
use hmac::Hmac;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

pub type HmacSha1 = Hmac<Sha1>;
pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha384 = Hmac<Sha384>;
pub type HmacSha512 = Hmac<Sha512>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type MacBlock64 = SpanBuffer<MAX_MAC_OUTPUT_LEN>; // one U_i or T block

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(PasswordBytes, Vec<u8>);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets — alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(DerivedKey32, 32); // AES-256 / HMAC-SHA256 sized key
fixed_alias!(DerivedKey64, 64); // HMAC-SHA512 sized key
fixed_alias!(Salt16, 16);
