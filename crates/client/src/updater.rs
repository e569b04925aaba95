// Path: crates/client/src/updater.rs

//! The transactional add/revoke updater.
//!
//! An updater snapshots a document and accumulates intents against the
//! working copy; the original stays frozen. Additions and revocations are
//! recorded in insertion order, and an alias added and then revoked within
//! the same updater cancels out entirely: it is dropped from the additions
//! and never reaches the revocation list.

use crate::document::Document;
use crate::entry;
use crate::keys::ManagementKey;
use factom_did_types::did::{KeyPurpose, KeyType};
use factom_did_types::entry::EntryData;
use factom_did_types::error::{DocumentError, EntryError};

/// Aliases of elements added through the updater, in insertion order.
#[derive(Default)]
pub(crate) struct Additions {
    pub(crate) management: Vec<String>,
    pub(crate) did: Vec<String>,
    pub(crate) service: Vec<String>,
}

impl Additions {
    pub(crate) fn is_empty(&self) -> bool {
        self.management.is_empty() && self.did.is_empty() && self.service.is_empty()
    }

    fn drop_alias(list: &mut Vec<String>, alias: &str) -> bool {
        match list.iter().position(|a| a == alias) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// Revoked aliases, in revocation order, each with the authorization
/// constraint captured at revocation time: the key priority for management
/// keys, the optional priority requirement for DID keys and services.
#[derive(Default)]
pub(crate) struct Revocations {
    pub(crate) management: Vec<(String, u32)>,
    pub(crate) did: Vec<(String, Option<u32>)>,
    pub(crate) service: Vec<(String, Option<u32>)>,
}

impl Revocations {
    pub(crate) fn is_empty(&self) -> bool {
        self.management.is_empty() && self.did.is_empty() && self.service.is_empty()
    }
}

/// A transactional view over a document, recording an add/revoke delta.
pub struct DocumentUpdater {
    document: Document,
    original_management: Vec<ManagementKey>,
    additions: Additions,
    revocations: Revocations,
}

impl DocumentUpdater {
    pub(crate) fn new(original: &Document) -> Self {
        Self {
            document: original.clone(),
            original_management: original.management_keys().to_vec(),
            additions: Additions::default(),
            revocations: Revocations::default(),
        }
    }

    /// Adds a management key to the working document and records the
    /// addition.
    pub fn add_management_key(
        &mut self,
        alias: &str,
        priority: u32,
        key_type: KeyType,
        controller: Option<&str>,
    ) -> Result<&mut Self, DocumentError> {
        self.document
            .add_management_key(alias, priority, key_type, controller)?;
        self.additions.management.push(alias.to_string());
        Ok(self)
    }

    /// Adds a DID key to the working document and records the addition.
    pub fn add_did_key(
        &mut self,
        alias: &str,
        purpose: impl IntoIterator<Item = KeyPurpose>,
        key_type: KeyType,
        controller: Option<&str>,
        priority_requirement: Option<u32>,
    ) -> Result<&mut Self, DocumentError> {
        self.document
            .add_did_key(alias, purpose, key_type, controller, priority_requirement)?;
        self.additions.did.push(alias.to_string());
        Ok(self)
    }

    /// Adds a service to the working document and records the addition.
    pub fn add_service(
        &mut self,
        alias: &str,
        service_type: &str,
        endpoint: &str,
        priority_requirement: Option<u32>,
    ) -> Result<&mut Self, DocumentError> {
        self.document
            .add_service(alias, service_type, endpoint, priority_requirement)?;
        self.additions.service.push(alias.to_string());
        Ok(self)
    }

    /// Revokes a management key by alias. Stored aliases are lowercase by
    /// construction, so a lookup with any other casing fails.
    pub fn revoke_management_key(&mut self, alias: &str) -> Result<&mut Self, DocumentError> {
        let removed = self
            .document
            .remove_management_key(alias)
            .ok_or_else(|| DocumentError::UnknownAlias(alias.to_string()))?;
        if !Additions::drop_alias(&mut self.additions.management, alias) {
            self.revocations
                .management
                .push((removed.alias().to_string(), removed.priority()));
        }
        Ok(self)
    }

    /// Revokes a DID key by alias.
    pub fn revoke_did_key(&mut self, alias: &str) -> Result<&mut Self, DocumentError> {
        let removed = self
            .document
            .remove_did_key(alias)
            .ok_or_else(|| DocumentError::UnknownAlias(alias.to_string()))?;
        if !Additions::drop_alias(&mut self.additions.did, alias) {
            self.revocations
                .did
                .push((removed.alias().to_string(), removed.priority_requirement()));
        }
        Ok(self)
    }

    /// Revokes a service by alias.
    pub fn revoke_service(&mut self, alias: &str) -> Result<&mut Self, DocumentError> {
        let removed = self
            .document
            .remove_service(alias)
            .ok_or_else(|| DocumentError::UnknownAlias(alias.to_string()))?;
        if !Additions::drop_alias(&mut self.additions.service, alias) {
            self.revocations
                .service
                .push((removed.alias().to_string(), removed.priority_requirement()));
        }
        Ok(self)
    }

    /// Revokes a management key and re-adds it under the same alias,
    /// priority, scheme and controller with a freshly generated key pair.
    pub fn rotate_management_key(&mut self, alias: &str) -> Result<&mut Self, DocumentError> {
        let (priority, key_type, controller) = {
            let key = self
                .document
                .management_key_by_alias(alias)
                .ok_or_else(|| DocumentError::UnknownAlias(alias.to_string()))?;
            (key.priority(), key.key_type(), key.controller().to_string())
        };
        self.revoke_management_key(alias)?;
        self.add_management_key(alias, priority, key_type, Some(&controller))
    }

    /// Returns the working document with all recorded changes applied.
    /// May be called any number of times; every call returns the same
    /// snapshot.
    pub fn get_updated(&self) -> Document {
        self.document.clone()
    }

    /// Serializes the signed update entry for the recorded delta, or
    /// `None` when there is nothing to publish.
    pub fn export_entry_data(&self) -> Result<Option<EntryData>, EntryError> {
        entry::update_entry(self)
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    pub(crate) fn original_management(&self) -> &[ManagementKey] {
        &self.original_management
    }

    pub(crate) fn additions(&self) -> &Additions {
        &self.additions
    }

    pub(crate) fn revocations(&self) -> &Revocations {
        &self.revocations
    }

    pub(crate) fn has_changes(&self) -> bool {
        !self.additions.is_empty() || !self.revocations.is_empty()
    }
}
