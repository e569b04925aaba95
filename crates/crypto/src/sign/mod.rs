// Path: crates/crypto/src/sign/mod.rs
//! Signature algorithm implementations and the scheme-dispatch facade.
//!
//! The per-scheme modules implement the `factom-did-api` traits with
//! concrete key types. [`KeyMaterial`] is the single entry point the
//! document core uses: it owns a public key, optionally the matching
//! private key, and dispatches every operation onto the right scheme.

use crate::error::CryptoError;
use factom_did_api::crypto::{SerializableKey, SigningKey, SigningKeyPair, VerifyingKey};
use factom_did_types::did::KeyType;

/// ECDSA over secp256k1 (k256).
pub mod ecdsa;
/// Ed25519 (dcrypt).
pub mod eddsa;
/// RSA PKCS#1 v1.5 (rsa).
pub mod rsa;

use self::ecdsa::{Secp256k1KeyPair, Secp256k1PrivateKey, Secp256k1PublicKey, Secp256k1Signature};
use self::eddsa::{Ed25519KeyPair, Ed25519PrivateKey, Ed25519PublicKey, Ed25519Signature};
use self::rsa::{RsaKeyPair, RsaPrivateKey, RsaPublicKey, RsaSignature};

/// The key material of a document element: a public key and, unless the
/// key is verification-only, the matching private key.
///
/// The variant fixes the signature scheme for the lifetime of the value;
/// the document core never needs to know which scheme it holds.
#[derive(Clone)]
pub enum KeyMaterial {
    /// Ed25519 material.
    EdDsa {
        /// The public key.
        public: Ed25519PublicKey,
        /// The private key, absent on verification-only material.
        private: Option<Ed25519PrivateKey>,
    },
    /// secp256k1 ECDSA material.
    EcdsaSecp256k1 {
        /// The public key.
        public: Secp256k1PublicKey,
        /// The private key, absent on verification-only material.
        private: Option<Secp256k1PrivateKey>,
    },
    /// RSA material.
    Rsa {
        /// The public key.
        public: RsaPublicKey,
        /// The private key, absent on verification-only material.
        private: Option<RsaPrivateKey>,
    },
}

impl KeyMaterial {
    /// Generates fresh key material for the given scheme from OS randomness.
    pub fn generate(key_type: KeyType) -> Result<Self, CryptoError> {
        match key_type {
            KeyType::EdDSA => {
                let pair = Ed25519KeyPair::generate()?;
                Ok(Self::EdDsa {
                    public: pair.public_key(),
                    private: Some(pair.private_key()),
                })
            }
            KeyType::ECDSA => {
                let pair = Secp256k1KeyPair::generate()?;
                Ok(Self::EcdsaSecp256k1 {
                    public: pair.public_key(),
                    private: Some(pair.private_key()),
                })
            }
            KeyType::RSA => {
                let pair = RsaKeyPair::generate()?;
                Ok(Self::Rsa {
                    public: pair.public_key(),
                    private: Some(pair.private_key()),
                })
            }
        }
    }

    /// Builds key material from private-key bytes, deriving the public key.
    ///
    /// Accepted formats: a 32-byte seed (EdDSA), a 32-byte secret scalar
    /// (ECDSA), or a PEM/DER encoded key of at least 2048 bits (RSA).
    pub fn from_private_key(key_type: KeyType, bytes: &[u8]) -> Result<Self, CryptoError> {
        match key_type {
            KeyType::EdDSA => {
                let private = Ed25519PrivateKey::from_bytes(bytes)?;
                Ok(Self::EdDsa {
                    public: private.public_key()?,
                    private: Some(private),
                })
            }
            KeyType::ECDSA => {
                let private = Secp256k1PrivateKey::from_bytes(bytes)?;
                Ok(Self::EcdsaSecp256k1 {
                    public: private.public_key()?,
                    private: Some(private),
                })
            }
            KeyType::RSA => {
                let private = RsaPrivateKey::from_bytes(bytes)?;
                Ok(Self::Rsa {
                    public: private.public_key()?,
                    private: Some(private),
                })
            }
        }
    }

    /// Builds verification-only key material from public-key bytes.
    pub fn from_public_key(key_type: KeyType, bytes: &[u8]) -> Result<Self, CryptoError> {
        match key_type {
            KeyType::EdDSA => Ok(Self::EdDsa {
                public: Ed25519PublicKey::from_bytes(bytes)?,
                private: None,
            }),
            KeyType::ECDSA => Ok(Self::EcdsaSecp256k1 {
                public: Secp256k1PublicKey::from_bytes(bytes)?,
                private: None,
            }),
            KeyType::RSA => Ok(Self::Rsa {
                public: RsaPublicKey::from_bytes(bytes)?,
                private: None,
            }),
        }
    }

    /// Parses public-key bytes and returns their canonical encoding, i.e.
    /// the bytes [`Self::public_key_bytes`] would report for the same key.
    pub fn normalize_public_key(key_type: KeyType, bytes: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::from_public_key(key_type, bytes).map(|material| material.public_key_bytes())
    }

    /// Returns the scheme of this material.
    pub fn key_type(&self) -> KeyType {
        match self {
            Self::EdDsa { .. } => KeyType::EdDSA,
            Self::EcdsaSecp256k1 { .. } => KeyType::ECDSA,
            Self::Rsa { .. } => KeyType::RSA,
        }
    }

    /// Returns the canonical public-key bytes: the 32-byte point (EdDSA),
    /// the 33-byte compressed SEC1 point (ECDSA) or the SPKI DER (RSA).
    pub fn public_key_bytes(&self) -> Vec<u8> {
        match self {
            Self::EdDsa { public, .. } => public.to_bytes(),
            Self::EcdsaSecp256k1 { public, .. } => public.to_bytes(),
            Self::Rsa { public, .. } => public.to_bytes(),
        }
    }

    /// Returns the private-key bytes, or `None` on verification-only
    /// material: the seed (EdDSA), the secret scalar (ECDSA) or the PKCS#8
    /// DER (RSA).
    pub fn private_key_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Self::EdDsa { private, .. } => private.as_ref().map(SerializableKey::to_bytes),
            Self::EcdsaSecp256k1 { private, .. } => {
                private.as_ref().map(SerializableKey::to_bytes)
            }
            Self::Rsa { private, .. } => private.as_ref().map(SerializableKey::to_bytes),
        }
    }

    /// Returns true when the material can sign.
    pub fn has_private_key(&self) -> bool {
        match self {
            Self::EdDsa { private, .. } => private.is_some(),
            Self::EcdsaSecp256k1 { private, .. } => private.is_some(),
            Self::Rsa { private, .. } => private.is_some(),
        }
    }

    /// Signs a message, failing with [`CryptoError::MissingPrivateKey`] on
    /// verification-only material.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match self {
            Self::EdDsa { private, .. } => {
                let private = private.as_ref().ok_or(CryptoError::MissingPrivateKey)?;
                Ok(private.sign(message)?.to_bytes())
            }
            Self::EcdsaSecp256k1 { private, .. } => {
                let private = private.as_ref().ok_or(CryptoError::MissingPrivateKey)?;
                Ok(private.sign(message)?.to_bytes())
            }
            Self::Rsa { private, .. } => {
                let private = private.as_ref().ok_or(CryptoError::MissingPrivateKey)?;
                Ok(private.sign(message)?.to_bytes())
            }
        }
    }

    /// Verifies a signature over a message. Malformed signature bytes count
    /// as a mismatch, not an error.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        match self {
            Self::EdDsa { public, .. } => Ed25519Signature::from_bytes(signature)
                .map(|sig| public.verify(message, &sig).is_ok())
                .unwrap_or(false),
            Self::EcdsaSecp256k1 { public, .. } => Secp256k1Signature::from_bytes(signature)
                .map(|sig| public.verify(message, &sig).is_ok())
                .unwrap_or(false),
            Self::Rsa { public, .. } => RsaSignature::from_bytes(signature)
                .map(|sig| public.verify(message, &sig).is_ok())
                .unwrap_or(false),
        }
    }

    /// Returns the wire encoding of the public key published in document
    /// fragments: base58 for EdDSA and ECDSA, PEM for RSA.
    pub fn encode_public_key(&self) -> String {
        match self {
            Self::EdDsa { public, .. } => bs58::encode(public.to_bytes()).into_string(),
            Self::EcdsaSecp256k1 { public, .. } => bs58::encode(public.to_bytes()).into_string(),
            Self::Rsa { public, .. } => public.pem().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sign_verify_all_schemes() {
        let message = b"hello-DIDs";
        for key_type in [KeyType::EdDSA, KeyType::ECDSA, KeyType::RSA] {
            let material = KeyMaterial::generate(key_type).unwrap();
            assert_eq!(material.key_type(), key_type);
            assert!(material.has_private_key());

            let signature = material.sign(message).unwrap();
            assert!(material.verify(message, &signature));
            assert!(!material.verify(b"hello", &signature));
            assert!(!material.verify(message, b"not-a-signature"));
        }
    }

    #[test]
    fn test_private_round_trip_derives_same_public() {
        for key_type in [KeyType::EdDSA, KeyType::ECDSA, KeyType::RSA] {
            let material = KeyMaterial::generate(key_type).unwrap();
            let private = material.private_key_bytes().unwrap();
            let rebuilt = KeyMaterial::from_private_key(key_type, &private).unwrap();
            assert_eq!(rebuilt.public_key_bytes(), material.public_key_bytes());
        }
    }

    #[test]
    fn test_verification_only_material_cannot_sign() {
        let material = KeyMaterial::generate(KeyType::EdDSA).unwrap();
        let public_only =
            KeyMaterial::from_public_key(KeyType::EdDSA, &material.public_key_bytes()).unwrap();
        assert!(!public_only.has_private_key());
        assert!(matches!(
            public_only.sign(b"message"),
            Err(CryptoError::MissingPrivateKey)
        ));

        // But it can still verify what the full material signed.
        let signature = material.sign(b"message").unwrap();
        assert!(public_only.verify(b"message", &signature));
    }

    #[test]
    fn test_wire_encoding_by_scheme() {
        let ed = KeyMaterial::generate(KeyType::EdDSA).unwrap();
        let decoded = bs58::decode(ed.encode_public_key()).into_vec().unwrap();
        assert_eq!(decoded, ed.public_key_bytes());

        let rsa = KeyMaterial::generate(KeyType::RSA).unwrap();
        assert!(rsa.encode_public_key().starts_with("-----BEGIN PUBLIC KEY-----"));
    }

    #[test]
    fn test_normalize_public_key_rejects_garbage() {
        assert!(KeyMaterial::normalize_public_key(KeyType::EdDSA, b"asdfasdfasdfa").is_err());
        assert!(KeyMaterial::normalize_public_key(KeyType::ECDSA, b"asdfasdfasdfa").is_err());
    }
}
