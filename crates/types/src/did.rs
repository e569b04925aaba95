// Path: crates/types/src/did.rs

//! Registries for the signature schemes, entry kinds and key purposes
//! understood by the DID method.
//!
//! The wire names defined here are consensus-critical: resolvers match on
//! them byte-for-byte, so they are kept in one place and every other crate
//! goes through this module.

use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The signature scheme of a management or DID key.
///
/// The scheme determines both the key-material format accepted at
/// construction and the wire encoding of the public key in serialized
/// entries: base58 for `EdDSA` and `ECDSA`, PEM for `RSA`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum KeyType {
    /// Ed25519 per RFC 8032.
    EdDSA,
    /// ECDSA over secp256k1 with RFC 6979 deterministic nonces and SHA-256.
    ECDSA,
    /// RSA PKCS#1 v1.5 with SHA-256 and keys of at least 2048 bits.
    RSA,
}

impl KeyType {
    /// Returns the `type` value emitted in document fragments, i.e. the
    /// scheme name with the `VerificationKey` suffix.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::EdDSA => "Ed25519VerificationKey",
            Self::ECDSA => "ECDSASecp256k1VerificationKey",
            Self::RSA => "RSAVerificationKey",
        }
    }

    /// Parses a wire name back into a scheme.
    pub fn from_wire_name(s: &str) -> Result<Self, ValidationError> {
        match s {
            "Ed25519VerificationKey" => Ok(Self::EdDSA),
            "ECDSASecp256k1VerificationKey" => Ok(Self::ECDSA),
            "RSAVerificationKey" => Ok(Self::RSA),
            other => Err(ValidationError::UnknownKeyType(other.to_string())),
        }
    }
}

impl Serialize for KeyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for KeyType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_wire_name(&s).map_err(serde::de::Error::custom)
    }
}

/// The kind of a chain entry, as published in `ext_ids[0]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EntryType {
    /// Establishes a new DID document.
    Create,
    /// Records an add/revoke delta against a published document.
    Update,
    /// Upgrades the method specification version of a published document.
    VersionUpgrade,
    /// Deactivates a published document.
    Deactivation,
}

impl EntryType {
    /// Returns the external-id tag of this entry kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "DIDManagement",
            Self::Update => "DIDUpdate",
            Self::VersionUpgrade => "DIDMethodVersionUpgrade",
            Self::Deactivation => "DIDDeactivation",
        }
    }
}

/// The purpose of a DID key, published so external parties know what the
/// key may be used for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum KeyPurpose {
    /// A general-purpose public key.
    #[serde(rename = "publicKey")]
    PublicKey,
    /// A key usable for authentication challenges.
    #[serde(rename = "authentication")]
    Authentication,
}

impl KeyPurpose {
    /// Returns the wire name of this purpose.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublicKey => "publicKey",
            Self::Authentication => "authentication",
        }
    }

    /// Parses a wire name back into a purpose.
    pub fn from_wire_name(s: &str) -> Result<Self, ValidationError> {
        match s {
            "publicKey" => Ok(Self::PublicKey),
            "authentication" => Ok(Self::Authentication),
            other => Err(ValidationError::UnknownPurpose(other.to_string())),
        }
    }
}
