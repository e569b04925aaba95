// Path: crates/client/src/document.rs

//! The DID document aggregate.
//!
//! A document owns its management keys, DID keys and services in insertion
//! order and enforces one alias namespace across all three element kinds.
//! Failed operations leave the document unchanged; a fresh document draws
//! its identity nonce from OS randomness at construction.

use crate::entry;
use crate::keys::{DidKey, ManagementKey};
use crate::service::Service;
use crate::updater::DocumentUpdater;
use factom_did_types::did::{KeyPurpose, KeyType};
use factom_did_types::entry::EntryData;
use factom_did_types::error::{DocumentError, EntryError};
use factom_did_types::{DID_METHOD_NAME, NONCE_LENGTH};
use rand::rngs::OsRng;
use rand::RngCore;

/// A DID document under construction or evolution.
#[derive(Clone)]
pub struct Document {
    id: String,
    nonce: String,
    management_keys: Vec<ManagementKey>,
    did_keys: Vec<DidKey>,
    services: Vec<Service>,
}

impl Document {
    /// Creates an empty document with a freshly drawn identity nonce.
    pub fn new() -> Self {
        let mut nonce_bytes = [0u8; NONCE_LENGTH];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = hex::encode(nonce_bytes);
        let id = format!("{}:{}", DID_METHOD_NAME, nonce);
        Self {
            id,
            nonce,
            management_keys: Vec::new(),
            did_keys: Vec::new(),
            services: Vec::new(),
        }
    }

    /// The full DID string: `<method-name>:<nonce-hex>`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The 64-character hex nonce that is the identifier suffix of the DID.
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// The management keys, in insertion order.
    pub fn management_keys(&self) -> &[ManagementKey] {
        &self.management_keys
    }

    /// The DID keys, in insertion order.
    pub fn did_keys(&self) -> &[DidKey] {
        &self.did_keys
    }

    /// The services, in insertion order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Returns true when the alias already belongs to any element of the
    /// document. The namespace spans all three element kinds.
    pub fn alias_in_use(&self, alias: &str) -> bool {
        self.management_keys.iter().any(|k| k.alias() == alias)
            || self.did_keys.iter().any(|k| k.alias() == alias)
            || self.services.iter().any(|s| s.alias() == alias)
    }

    fn reserve_alias(&self, alias: &str) -> Result<(), DocumentError> {
        if self.alias_in_use(alias) {
            Err(DocumentError::AliasInUse(alias.to_string()))
        } else {
            Ok(())
        }
    }

    /// Adds a management key with a freshly generated key pair. A `None`
    /// controller defaults to the document itself.
    pub fn add_management_key(
        &mut self,
        alias: &str,
        priority: u32,
        key_type: KeyType,
        controller: Option<&str>,
    ) -> Result<(), DocumentError> {
        self.reserve_alias(alias)?;
        let controller = controller.unwrap_or(&self.id);
        let key = ManagementKey::new(alias, priority, key_type, controller, None, None)?;
        self.management_keys.push(key);
        Ok(())
    }

    /// Adds a DID key with a freshly generated key pair. Purposes are
    /// deduplicated in insertion order; an empty purpose set is rejected.
    pub fn add_did_key(
        &mut self,
        alias: &str,
        purpose: impl IntoIterator<Item = KeyPurpose>,
        key_type: KeyType,
        controller: Option<&str>,
        priority_requirement: Option<u32>,
    ) -> Result<(), DocumentError> {
        self.reserve_alias(alias)?;
        let controller = controller.unwrap_or(&self.id);
        let key = DidKey::new(
            alias,
            purpose,
            key_type,
            controller,
            priority_requirement,
            None,
            None,
        )?;
        self.did_keys.push(key);
        Ok(())
    }

    /// Adds a service.
    pub fn add_service(
        &mut self,
        alias: &str,
        service_type: &str,
        endpoint: &str,
        priority_requirement: Option<u32>,
    ) -> Result<(), DocumentError> {
        self.reserve_alias(alias)?;
        let service = Service::new(alias, service_type, endpoint, priority_requirement)?;
        self.services.push(service);
        Ok(())
    }

    /// Builder form of [`Self::add_management_key`], for chained calls.
    pub fn management_key(
        mut self,
        alias: &str,
        priority: u32,
        key_type: KeyType,
        controller: Option<&str>,
    ) -> Result<Self, DocumentError> {
        self.add_management_key(alias, priority, key_type, controller)?;
        Ok(self)
    }

    /// Builder form of [`Self::add_did_key`], for chained calls.
    pub fn did_key(
        mut self,
        alias: &str,
        purpose: impl IntoIterator<Item = KeyPurpose>,
        key_type: KeyType,
        controller: Option<&str>,
        priority_requirement: Option<u32>,
    ) -> Result<Self, DocumentError> {
        self.add_did_key(alias, purpose, key_type, controller, priority_requirement)?;
        Ok(self)
    }

    /// Builder form of [`Self::add_service`], for chained calls.
    pub fn service(
        mut self,
        alias: &str,
        service_type: &str,
        endpoint: &str,
        priority_requirement: Option<u32>,
    ) -> Result<Self, DocumentError> {
        self.add_service(alias, service_type, endpoint, priority_requirement)?;
        Ok(self)
    }

    /// Serializes the create entry establishing this document on chain.
    ///
    /// Preconditions: at least one management key, at least one of them at
    /// priority 0, and the serialized entry within the size cap.
    pub fn export_entry_data(&self) -> Result<EntryData, EntryError> {
        entry::create_entry(self)
    }

    /// Serializes a method version upgrade entry, signed by the document's
    /// highest-authority management key.
    pub fn export_version_upgrade_entry(&self, new_version: &str) -> Result<EntryData, EntryError> {
        entry::version_upgrade_entry(self, new_version)
    }

    /// Serializes a deactivation entry, signed by a priority-0 management
    /// key.
    pub fn export_deactivation_entry(&self) -> Result<EntryData, EntryError> {
        entry::deactivation_entry(self)
    }

    /// Derives a transactional updater over a deep copy of this document.
    /// Fails when the document has no management keys to authorize changes.
    pub fn update(&self) -> Result<DocumentUpdater, DocumentError> {
        if self.management_keys.is_empty() {
            return Err(DocumentError::NoManagementKey);
        }
        Ok(DocumentUpdater::new(self))
    }

    pub(crate) fn management_key_by_alias(&self, alias: &str) -> Option<&ManagementKey> {
        self.management_keys.iter().find(|k| k.alias() == alias)
    }

    pub(crate) fn did_key_by_alias(&self, alias: &str) -> Option<&DidKey> {
        self.did_keys.iter().find(|k| k.alias() == alias)
    }

    pub(crate) fn service_by_alias(&self, alias: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.alias() == alias)
    }

    pub(crate) fn remove_management_key(&mut self, alias: &str) -> Option<ManagementKey> {
        let pos = self.management_keys.iter().position(|k| k.alias() == alias)?;
        Some(self.management_keys.remove(pos))
    }

    pub(crate) fn remove_did_key(&mut self, alias: &str) -> Option<DidKey> {
        let pos = self.did_keys.iter().position(|k| k.alias() == alias)?;
        Some(self.did_keys.remove(pos))
    }

    pub(crate) fn remove_service(&mut self, alias: &str) -> Option<Service> {
        let pos = self.services.iter().position(|s| s.alias() == alias)?;
        Some(self.services.remove(pos))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
