// src/lib.rs

pub mod aliases;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod utils;

// High-level API
pub use builders::pbkdf2_builder::Pbkdf2Builder;
pub use crypto::algorithm::MacAlgorithm;
pub use error::Pbkdf2Error;

// Engine entry points
pub use crypto::hmac::MacProvider;
pub use crypto::kdf::pbkdf2::{derive, derive_named, derive_secure_pbkdf2_key, derive_with};
