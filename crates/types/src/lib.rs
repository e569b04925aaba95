// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Factom DID Types
//!
//! This crate is the foundational library for the Factom DID client,
//! containing the protocol constants, the scheme and entry-kind registries,
//! input validators, the chain-entry wire schema, and all error enums.
//!
//! ## Architectural Role
//!
//! As the base crate, `factom-did-types` has minimal dependencies and is
//! itself a dependency for every other crate in the workspace. This structure
//! prevents circular dependencies and provides a stable, canonical definition
//! for shared types like `KeyType`, `EntryData` and the error enums.

/// The DID method name every identifier in this deployment is prefixed with.
pub const DID_METHOD_NAME: &str = "did:factom";

/// The schema version of the chain entries produced by this library.
pub const ENTRY_SCHEMA_VERSION: &str = "1.0.0";

/// The version of the DID method specification implemented by this library.
pub const DID_METHOD_SPEC_VERSION: &str = "0.2.0";

/// The hard cap, in bytes, on a serialized chain entry (ext-ids + content).
pub const ENTRY_SIZE_LIMIT: usize = 10240;

/// The number of random bytes in a DID nonce. The lowercase hex encoding of
/// the nonce is the identifier suffix of the DID.
pub const NONCE_LENGTH: usize = 32;

/// The signature-scheme, entry-kind and key-purpose registries.
pub mod did;
/// A unified set of all error types used across the workspace.
pub mod error;
/// The wire schema for chain entries and their canonical JSON content.
pub mod entry;
/// Shape validators for aliases, DID strings and service endpoints.
pub mod validation;
