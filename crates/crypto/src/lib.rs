// Path: crates/crypto/src/lib.rs
//! # Factom DID Crypto Crate Lints
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
        clippy::indexing_slicing
    )
)]
//! # Factom DID Cryptography
//!
//! Implementations of the signature schemes published in DID documents:
//! Ed25519, ECDSA over secp256k1, and RSA. The [`sign::KeyMaterial`] facade
//! dispatches the document core onto the per-scheme modules.

pub mod error;
pub mod sign;
