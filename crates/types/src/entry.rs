// Path: crates/types/src/entry.rs

//! Wire schema for chain entries.
//!
//! A chain entry is a list of byte-string external identifiers plus a
//! content payload. The content of create and update entries is canonical
//! JSON: UTF-8, no insignificant whitespace, and object keys in the exact
//! order declared by the structs below. `serde_json` preserves struct field
//! order, so serializing these structs yields the canonical encoding
//! directly; any deviation here is a consensus break for downstream
//! resolvers.

use crate::did::{KeyPurpose, KeyType};
use serde::{Deserialize, Serialize};

/// A chain entry ready for submission: external identifiers plus content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryData {
    /// The external identifiers, in publication order.
    pub ext_ids: Vec<Vec<u8>>,
    /// The content payload.
    pub content: Vec<u8>,
}

impl EntryData {
    /// Returns the total on-chain footprint of the entry: the sum of all
    /// external-id lengths plus the content length.
    pub fn total_size(&self) -> usize {
        let ext: usize = self.ext_ids.iter().map(Vec::len).sum();
        ext + self.content.len()
    }
}

/// A management or DID key as it appears in entry content.
///
/// Exactly one of `public_key_base58` and `public_key_pem` is set,
/// according to the scheme. Optional fields are omitted entirely when
/// unset, never emitted as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    /// The fully-qualified key id: `<did-id>#<alias>`.
    pub id: String,
    /// The scheme wire name, e.g. `Ed25519VerificationKey`.
    #[serde(rename = "type")]
    pub key_type: KeyType,
    /// The DID controlling this key.
    pub controller: String,
    /// The base58-encoded public key (EdDSA and ECDSA schemes).
    #[serde(rename = "publicKeyBase58", skip_serializing_if = "Option::is_none")]
    pub public_key_base58: Option<String>,
    /// The PEM-encoded public key (RSA scheme).
    #[serde(rename = "publicKeyPem", skip_serializing_if = "Option::is_none")]
    pub public_key_pem: Option<String>,
    /// The purposes of a DID key, in insertion order. Absent on management keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<Vec<KeyPurpose>>,
    /// The minimum priority required to revoke or replace this DID key.
    #[serde(rename = "priorityRequirement", skip_serializing_if = "Option::is_none")]
    pub priority_requirement: Option<u32>,
    /// The signing priority of a management key. Absent on DID keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

/// A service as it appears in entry content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// The fully-qualified service id: `<did-id>#<alias>`.
    pub id: String,
    /// The service type, e.g. `PhotoStreamService`.
    #[serde(rename = "type")]
    pub service_type: String,
    /// The absolute http/https endpoint of the service.
    #[serde(rename = "serviceEndpoint")]
    pub endpoint: String,
    /// The minimum priority required to revoke this service.
    #[serde(rename = "priorityRequirement", skip_serializing_if = "Option::is_none")]
    pub priority_requirement: Option<u32>,
}

/// The content of a create entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEntryContent {
    /// The method specification version the document was created under.
    #[serde(rename = "didMethodVersion")]
    pub did_method_version: String,
    /// The management keys of the document, in insertion order.
    #[serde(rename = "managementKey")]
    pub management_key: Vec<KeyEntry>,
    /// The DID keys of the document. Omitted when empty.
    #[serde(
        rename = "didKey",
        skip_serializing_if = "Vec::is_empty",
        default
    )]
    pub did_key: Vec<KeyEntry>,
    /// The services of the document. Omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub service: Vec<ServiceEntry>,
}

/// The content of an update entry: at most an `add` and a `revoke` block,
/// each present only when non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEntryContent {
    /// Elements added by this update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add: Option<AddedElements>,
    /// Elements revoked by this update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoke: Option<RevokedElements>,
}

/// The `add` block of an update entry. Added elements use the same
/// fully-qualified form as create entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AddedElements {
    /// Added management keys, in insertion order.
    #[serde(
        rename = "managementKey",
        skip_serializing_if = "Vec::is_empty",
        default
    )]
    pub management_key: Vec<KeyEntry>,
    /// Added DID keys, in insertion order.
    #[serde(
        rename = "didKey",
        skip_serializing_if = "Vec::is_empty",
        default
    )]
    pub did_key: Vec<KeyEntry>,
    /// Added services, in insertion order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub service: Vec<ServiceEntry>,
}

/// The `revoke` block of an update entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RevokedElements {
    /// Revoked management keys, in revocation order.
    #[serde(
        rename = "managementKey",
        skip_serializing_if = "Vec::is_empty",
        default
    )]
    pub management_key: Vec<RevocationReference>,
    /// Revoked DID keys, in revocation order.
    #[serde(
        rename = "didKey",
        skip_serializing_if = "Vec::is_empty",
        default
    )]
    pub did_key: Vec<RevocationReference>,
    /// Revoked services, in revocation order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub service: Vec<RevocationReference>,
}

/// A reference to a revoked element. Revocations carry the bare alias, not
/// the fully-qualified `#` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationReference {
    /// The alias of the revoked element.
    pub id: String,
}

/// The content of a method version upgrade entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionUpgradeContent {
    /// The method specification version the document is upgraded to.
    #[serde(rename = "didMethodVersion")]
    pub did_method_version: String,
}
