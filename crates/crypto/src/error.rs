// Path: crates/crypto/src/error.rs
//! Local error types for the `factom-did-crypto` crate.

// Re-export the canonical error type from the API crate.
pub use factom_did_api::error::CryptoError;
