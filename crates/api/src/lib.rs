// Path: crates/api/src/lib.rs

//! # Factom DID API Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]
#![deny(missing_docs)]
//! # Factom DID API
//!
//! The crypto provider seam of the Factom DID client. This crate defines
//! the stable contract a signature-scheme implementation must satisfy; the
//! shipped implementations live in `factom-did-crypto`.

/// Defines unified traits for cryptographic primitives.
pub mod crypto;
/// Re-exports all core error types from the central `factom-did-types` crate.
pub mod error;

/// A curated set of the most commonly used traits.
pub mod prelude {
    pub use crate::crypto::{
        SerializableKey, Signature, SigningKey, SigningKeyPair, VerifyingKey,
    };
    pub use crate::error::ErrorCode;
}
