// Path: crates/client/src/keys.rs

//! Management and DID key entities.
//!
//! Both entities share a validated, immutable-after-construction core. The
//! key-material rules are: no material supplied generates a fresh pair, a
//! private key alone derives its public half, both halves together must
//! agree, and a public key alone yields a verification-only entity.
//!
//! A management key and a DID key never compare equal: no `PartialEq` is
//! implemented across the two types, so a heterogeneous comparison is a
//! compile error rather than a silent `false`.

use factom_did_crypto::sign::KeyMaterial;
use factom_did_types::did::{KeyPurpose, KeyType};
use factom_did_types::error::{CryptoError, DocumentError, ValidationError};
use factom_did_types::validation::{validate_alias, validate_did};

/// The shared core of a key entity.
#[derive(Clone)]
pub(crate) struct KeyData {
    alias: String,
    key_type: KeyType,
    controller: String,
    priority_requirement: Option<u32>,
    material: KeyMaterial,
}

impl KeyData {
    /// Validates the identifier fields and resolves the key material per
    /// the construction rules. Checks run in order: shape validation, then
    /// key format, then public/private agreement.
    fn new(
        alias: &str,
        key_type: KeyType,
        controller: &str,
        priority_requirement: Option<u32>,
        public_key: Option<&[u8]>,
        private_key: Option<&[u8]>,
    ) -> Result<Self, DocumentError> {
        validate_alias(alias)?;
        validate_did(controller)?;

        let material = match (public_key, private_key) {
            (None, None) => KeyMaterial::generate(key_type)?,
            (None, Some(private)) => KeyMaterial::from_private_key(key_type, private)?,
            (Some(public), None) => KeyMaterial::from_public_key(key_type, public)?,
            (Some(public), Some(private)) => {
                let material = KeyMaterial::from_private_key(key_type, private)?;
                let matches = KeyMaterial::normalize_public_key(key_type, public)
                    .map(|bytes| bytes == material.public_key_bytes())
                    .unwrap_or(false);
                if !matches {
                    return Err(CryptoError::KeyMismatch.into());
                }
                material
            }
        };

        Ok(Self {
            alias: alias.to_string(),
            key_type,
            controller: controller.to_string(),
            priority_requirement,
            material,
        })
    }
}

impl PartialEq for KeyData {
    fn eq(&self, other: &Self) -> bool {
        self.alias == other.alias
            && self.key_type == other.key_type
            && self.controller == other.controller
            && self.priority_requirement == other.priority_requirement
            && self.material.public_key_bytes() == other.material.public_key_bytes()
    }
}

macro_rules! key_accessors {
    () => {
        /// The alias of the key, unique within its document.
        pub fn alias(&self) -> &str {
            &self.data.alias
        }

        /// The signature scheme of the key.
        pub fn key_type(&self) -> KeyType {
            self.data.key_type
        }

        /// The DID controlling the key.
        pub fn controller(&self) -> &str {
            &self.data.controller
        }

        /// The canonical public-key bytes.
        pub fn public_key_bytes(&self) -> Vec<u8> {
            self.data.material.public_key_bytes()
        }

        /// The private-key bytes, or `None` on a verification-only key.
        pub fn private_key_bytes(&self) -> Option<Vec<u8>> {
            self.data.material.private_key_bytes()
        }

        /// The wire encoding of the public key: base58 for EdDSA and
        /// ECDSA, PEM for RSA.
        pub fn encode_public_key(&self) -> String {
            self.data.material.encode_public_key()
        }

        /// Signs a message, failing on a verification-only key.
        pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
            self.data.material.sign(message)
        }

        /// Verifies a signature over a message.
        pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
            self.data.material.verify(message, signature)
        }
    };
}

/// A key authorized to sign document updates. Its priority governs its
/// authority: lower values are more authoritative, 0 is the highest.
#[derive(Clone)]
pub struct ManagementKey {
    data: KeyData,
    priority: u32,
}

impl ManagementKey {
    /// Constructs a management key. Pass `None` for both key arguments to
    /// generate a fresh pair.
    pub fn new(
        alias: &str,
        priority: u32,
        key_type: KeyType,
        controller: &str,
        public_key: Option<&[u8]>,
        private_key: Option<&[u8]>,
    ) -> Result<Self, DocumentError> {
        let data = KeyData::new(alias, key_type, controller, None, public_key, private_key)?;
        Ok(Self { data, priority })
    }

    /// The signing priority of the key.
    pub fn priority(&self) -> u32 {
        self.priority
    }

    key_accessors!();
}

impl PartialEq for ManagementKey {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.priority == other.priority
    }
}

/// A verification key published in the document for external use.
#[derive(Clone)]
pub struct DidKey {
    data: KeyData,
    purpose: Vec<KeyPurpose>,
}

impl DidKey {
    /// Constructs a DID key. The purpose collection is deduplicated in
    /// insertion order and must not be empty. Pass `None` for both key
    /// arguments to generate a fresh pair.
    pub fn new(
        alias: &str,
        purpose: impl IntoIterator<Item = KeyPurpose>,
        key_type: KeyType,
        controller: &str,
        priority_requirement: Option<u32>,
        public_key: Option<&[u8]>,
        private_key: Option<&[u8]>,
    ) -> Result<Self, DocumentError> {
        let mut purposes: Vec<KeyPurpose> = Vec::new();
        for p in purpose {
            if !purposes.contains(&p) {
                purposes.push(p);
            }
        }
        if purposes.is_empty() {
            return Err(ValidationError::EmptyPurpose.into());
        }

        let data = KeyData::new(
            alias,
            key_type,
            controller,
            priority_requirement,
            public_key,
            private_key,
        )?;
        Ok(Self {
            data,
            purpose: purposes,
        })
    }

    /// The purposes of the key, in insertion order.
    pub fn purpose(&self) -> &[KeyPurpose] {
        &self.purpose
    }

    /// The minimum priority a management key needs to revoke this key.
    pub fn priority_requirement(&self) -> Option<u32> {
        self.data.priority_requirement
    }

    key_accessors!();
}

impl PartialEq for DidKey {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.purpose == other.purpose
    }
}
