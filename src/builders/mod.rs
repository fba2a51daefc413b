//! # Builders
//!
//! - [`pbkdf2_builder`] - fluent PBKDF2 parameters (algorithm, iterations, salt)
//!
//! Builders hold the parameters that stay fixed across derivations so call
//! sites only pass the password and the output buffer.

pub mod pbkdf2_builder;
