// Path: crates/client/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
//! # Factom DID Client Crate Lints
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

//! # Factom DID Client
//!
//! Construction, mutation and serialization of DID documents published as
//! entries on the Factom chain. A [`Document`] is grown with builder calls,
//! frozen into a create entry, or evolved through a [`DocumentUpdater`]
//! that records an add/revoke delta and signs it with a management key of
//! sufficient priority.
//!
//! ```
//! use factom_did_client::{Document, KeyType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let document = Document::new()
//!     .management_key("my-management-key", 0, KeyType::EdDSA, None)?;
//! let entry = document.export_entry_data()?;
//! assert_eq!(entry.ext_ids[0], b"DIDManagement");
//! # Ok(())
//! # }
//! ```

/// The DID document aggregate and its builder surface.
pub mod document;
/// Chain-entry serialization and the signing envelope.
mod entry;
/// Management and DID key entities.
pub mod keys;
/// The published service entity.
pub mod service;
/// The transactional add/revoke updater.
pub mod updater;

pub use document::Document;
pub use keys::{DidKey, ManagementKey};
pub use service::Service;
pub use updater::DocumentUpdater;

// Re-export the registry and wire types callers interact with.
pub use factom_did_types::did::{EntryType, KeyPurpose, KeyType};
pub use factom_did_types::entry::EntryData;
pub use factom_did_types::error::{DocumentError, EntryError, ValidationError};
