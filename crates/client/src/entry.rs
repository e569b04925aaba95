// Path: crates/client/src/entry.rs

//! Chain-entry serialization and the signing envelope.
//!
//! All entry kinds share one envelope: the content is canonical JSON and
//! signed entries carry, as `ext_ids[3]`, a management-key signature over
//! the byte-wise concatenation `ext_ids[0] || ext_ids[1] || ext_ids[2] ||
//! content`, with no separators. Every serialized entry is checked against
//! the on-chain size cap before it is handed to the caller.

use crate::document::Document;
use crate::keys::{DidKey, ManagementKey};
use crate::service::Service;
use crate::updater::DocumentUpdater;
use factom_did_types::did::{EntryType, KeyType};
use factom_did_types::entry::{
    AddedElements, CreateEntryContent, EntryData, KeyEntry, RevocationReference, RevokedElements,
    ServiceEntry, UpdateEntryContent, VersionUpgradeContent,
};
use factom_did_types::error::{EntryError, ValidationError};
use factom_did_types::{DID_METHOD_SPEC_VERSION, ENTRY_SCHEMA_VERSION, ENTRY_SIZE_LIMIT};
use log::debug;

fn qualified_id(did_id: &str, alias: &str) -> String {
    format!("{}#{}", did_id, alias)
}

fn public_key_fields(key_type: KeyType, encoded: String) -> (Option<String>, Option<String>) {
    match key_type {
        KeyType::RSA => (None, Some(encoded)),
        KeyType::EdDSA | KeyType::ECDSA => (Some(encoded), None),
    }
}

fn management_key_entry(key: &ManagementKey, did_id: &str) -> KeyEntry {
    let (public_key_base58, public_key_pem) =
        public_key_fields(key.key_type(), key.encode_public_key());
    KeyEntry {
        id: qualified_id(did_id, key.alias()),
        key_type: key.key_type(),
        controller: key.controller().to_string(),
        public_key_base58,
        public_key_pem,
        purpose: None,
        priority_requirement: None,
        priority: Some(key.priority()),
    }
}

fn did_key_entry(key: &DidKey, did_id: &str) -> KeyEntry {
    let (public_key_base58, public_key_pem) =
        public_key_fields(key.key_type(), key.encode_public_key());
    KeyEntry {
        id: qualified_id(did_id, key.alias()),
        key_type: key.key_type(),
        controller: key.controller().to_string(),
        public_key_base58,
        public_key_pem,
        purpose: Some(key.purpose().to_vec()),
        priority_requirement: key.priority_requirement(),
        priority: None,
    }
}

fn service_entry(service: &Service, did_id: &str) -> ServiceEntry {
    ServiceEntry {
        id: qualified_id(did_id, service.alias()),
        service_type: service.service_type().to_string(),
        endpoint: service.endpoint().to_string(),
        priority_requirement: service.priority_requirement(),
    }
}

fn check_size(entry: EntryData) -> Result<EntryData, EntryError> {
    let size = entry.total_size();
    if size > ENTRY_SIZE_LIMIT {
        return Err(EntryError::TooLarge {
            size,
            limit: ENTRY_SIZE_LIMIT,
        });
    }
    Ok(entry)
}

/// Builds the signed 4-part envelope shared by update, version upgrade and
/// deactivation entries.
fn signed_envelope(
    entry_type: EntryType,
    key_id: &str,
    signer: &ManagementKey,
    content: Vec<u8>,
) -> Result<EntryData, EntryError> {
    let tag = entry_type.as_str().as_bytes().to_vec();
    let version = ENTRY_SCHEMA_VERSION.as_bytes().to_vec();
    let key_id = key_id.as_bytes().to_vec();

    let mut message =
        Vec::with_capacity(tag.len() + version.len() + key_id.len() + content.len());
    message.extend_from_slice(&tag);
    message.extend_from_slice(&version);
    message.extend_from_slice(&key_id);
    message.extend_from_slice(&content);

    let signature = signer.sign(&message)?;
    Ok(EntryData {
        ext_ids: vec![tag, version, key_id, signature],
        content,
    })
}

/// Revocations are published as bare aliases, without the `#` qualifier.
fn revocation_references<T>(revoked: &[(String, T)]) -> Vec<RevocationReference> {
    revoked
        .iter()
        .map(|(alias, _)| RevocationReference { id: alias.clone() })
        .collect()
}

/// The most restrictive signing priority demanded by the recorded changes,
/// or `None` when the changes impose no constraint.
fn required_priority(updater: &DocumentUpdater) -> Option<u32> {
    let working = updater.document();
    let mut required: Option<u32> = None;
    let mut tighten = |p: u32| {
        required = Some(required.map_or(p, |r| r.min(p)));
    };

    // Added management keys constrain the signer to their own priority.
    for alias in &updater.additions().management {
        if let Some(key) = working.management_key_by_alias(alias) {
            tighten(key.priority());
        }
    }
    // So do revoked management keys.
    for (_, priority) in &updater.revocations().management {
        tighten(*priority);
    }
    // Revoked DID keys and services constrain through their requirement,
    // when they carry one. Added ones impose nothing.
    for (_, requirement) in &updater.revocations().did {
        if let Some(q) = requirement {
            tighten(*q);
        }
    }
    for (_, requirement) in &updater.revocations().service {
        if let Some(q) = requirement {
            tighten(*q);
        }
    }
    required
}

/// Selects the signing key: the management key with the smallest priority
/// value that satisfies the constraint, first position winning ties.
fn select_signing_key(keys: &[ManagementKey], required: Option<u32>) -> Option<&ManagementKey> {
    let mut best: Option<&ManagementKey> = None;
    for key in keys {
        if required.is_some_and(|r| key.priority() > r) {
            continue;
        }
        if best.map_or(true, |b| key.priority() < b.priority()) {
            best = Some(key);
        }
    }
    best
}

pub(crate) fn create_entry(document: &Document) -> Result<EntryData, EntryError> {
    if document.management_keys().is_empty() {
        return Err(EntryError::NoManagementKey);
    }
    if !document.management_keys().iter().any(|k| k.priority() == 0) {
        return Err(EntryError::NoTopPriorityKey);
    }

    let content = CreateEntryContent {
        did_method_version: DID_METHOD_SPEC_VERSION.to_string(),
        management_key: document
            .management_keys()
            .iter()
            .map(|k| management_key_entry(k, document.id()))
            .collect(),
        did_key: document
            .did_keys()
            .iter()
            .map(|k| did_key_entry(k, document.id()))
            .collect(),
        service: document
            .services()
            .iter()
            .map(|s| service_entry(s, document.id()))
            .collect(),
    };
    let content = serde_json::to_vec(&content)?;

    debug!("exporting create entry for {}", document.id());
    check_size(EntryData {
        ext_ids: vec![
            EntryType::Create.as_str().as_bytes().to_vec(),
            ENTRY_SCHEMA_VERSION.as_bytes().to_vec(),
            document.nonce().as_bytes().to_vec(),
        ],
        content,
    })
}

pub(crate) fn update_entry(updater: &DocumentUpdater) -> Result<Option<EntryData>, EntryError> {
    if !updater.has_changes() {
        return Ok(None);
    }

    let working = updater.document();
    if working.management_keys().is_empty() {
        return Err(EntryError::NoManagementKey);
    }
    let revoked_top_priority = updater
        .revocations()
        .management
        .iter()
        .any(|(_, priority)| *priority == 0);
    if revoked_top_priority && !working.management_keys().iter().any(|k| k.priority() == 0) {
        return Err(EntryError::NoTopPriorityKey);
    }

    let required = required_priority(updater);
    let signer = select_signing_key(updater.original_management(), required).ok_or(
        EntryError::InsufficientAuthority {
            required: required.unwrap_or_default(),
        },
    )?;
    debug!(
        "signing update for {} with '{}' (priority {})",
        working.id(),
        signer.alias(),
        signer.priority()
    );

    let additions = updater.additions();
    let add = if additions.is_empty() {
        None
    } else {
        Some(AddedElements {
            management_key: additions
                .management
                .iter()
                .filter_map(|alias| working.management_key_by_alias(alias))
                .map(|k| management_key_entry(k, working.id()))
                .collect(),
            did_key: additions
                .did
                .iter()
                .filter_map(|alias| working.did_key_by_alias(alias))
                .map(|k| did_key_entry(k, working.id()))
                .collect(),
            service: additions
                .service
                .iter()
                .filter_map(|alias| working.service_by_alias(alias))
                .map(|s| service_entry(s, working.id()))
                .collect(),
        })
    };

    let revocations = updater.revocations();
    let revoke = if revocations.is_empty() {
        None
    } else {
        Some(RevokedElements {
            management_key: revocation_references(&revocations.management),
            did_key: revocation_references(&revocations.did),
            service: revocation_references(&revocations.service),
        })
    };

    let content = serde_json::to_vec(&UpdateEntryContent { add, revoke })?;
    let key_id = qualified_id(working.id(), signer.alias());
    let entry = signed_envelope(EntryType::Update, &key_id, signer, content)?;
    check_size(entry).map(Some)
}

pub(crate) fn version_upgrade_entry(
    document: &Document,
    new_version: &str,
) -> Result<EntryData, EntryError> {
    if new_version.is_empty() {
        return Err(ValidationError::EmptyMethodVersion.into());
    }
    if document.management_keys().is_empty() {
        return Err(EntryError::NoManagementKey);
    }
    let signer = select_signing_key(document.management_keys(), None)
        .ok_or(EntryError::NoManagementKey)?;

    let content = serde_json::to_vec(&VersionUpgradeContent {
        did_method_version: new_version.to_string(),
    })?;
    let key_id = qualified_id(document.id(), signer.alias());
    let entry = signed_envelope(EntryType::VersionUpgrade, &key_id, signer, content)?;
    check_size(entry)
}

pub(crate) fn deactivation_entry(document: &Document) -> Result<EntryData, EntryError> {
    if document.management_keys().is_empty() {
        return Err(EntryError::NoManagementKey);
    }
    // Deactivation is irreversible; only a top-priority key may sign it.
    let signer = document
        .management_keys()
        .iter()
        .find(|k| k.priority() == 0)
        .ok_or(EntryError::NoTopPriorityKey)?;

    let key_id = qualified_id(document.id(), signer.alias());
    let entry = signed_envelope(EntryType::Deactivation, &key_id, signer, Vec::new())?;
    check_size(entry)
}
