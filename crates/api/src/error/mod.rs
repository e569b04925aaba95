// Path: crates/api/src/error/mod.rs
//! Re-exports all core error types from the central `factom-did-types` crate.

pub use factom_did_types::error::{
    CryptoError, DocumentError, EntryError, ErrorCode, ValidationError,
};
