// Path: crates/crypto/src/sign/eddsa/mod.rs
//! Ed25519 signatures (RFC 8032) using dcrypt.
//!
//! The private half of a pair is serialized as the 32-byte seed; the public
//! half as the 32-byte compressed point. Signatures are 64 bytes.

use crate::error::CryptoError;
use factom_did_api::crypto::{
    SerializableKey, Signature, SigningKey, SigningKeyPair, VerifyingKey,
};
use rand::rngs::OsRng;

use dcrypt::sign::eddsa;
use dcrypt::Signature as DcryptSignature;

/// The length of an Ed25519 seed and public key, in bytes.
pub const ED25519_KEY_LENGTH: usize = 32;

/// An Ed25519 key pair.
#[derive(Clone)]
pub struct Ed25519KeyPair {
    public_key: eddsa::Ed25519PublicKey,
    secret_key: eddsa::Ed25519SecretKey,
}

/// An Ed25519 signature.
pub struct Ed25519Signature(eddsa::Ed25519Signature);

/// An Ed25519 public key.
#[derive(Clone)]
pub struct Ed25519PublicKey(eddsa::Ed25519PublicKey);

/// An Ed25519 private key, held as its seed.
#[derive(Clone, Debug)]
pub struct Ed25519PrivateKey(eddsa::Ed25519SecretKey);

impl Ed25519KeyPair {
    /// Generates a new key pair from OS randomness.
    pub fn generate() -> Result<Self, CryptoError> {
        let mut rng = OsRng;
        let (public_key, secret_key) =
            eddsa::Ed25519::keypair(&mut rng).map_err(CryptoError::from)?;
        Ok(Self {
            public_key,
            secret_key,
        })
    }

    /// Reconstructs a key pair from an existing private key.
    pub fn from_private_key(private_key: &Ed25519PrivateKey) -> Result<Self, CryptoError> {
        let secret_key = private_key.0.clone();
        let public_key = secret_key.public_key().map_err(CryptoError::from)?;
        Ok(Self {
            public_key,
            secret_key,
        })
    }
}

impl SigningKeyPair for Ed25519KeyPair {
    type PublicKey = Ed25519PublicKey;
    type PrivateKey = Ed25519PrivateKey;
    type Signature = Ed25519Signature;

    fn public_key(&self) -> Self::PublicKey {
        Ed25519PublicKey(self.public_key.clone())
    }

    fn private_key(&self) -> Self::PrivateKey {
        Ed25519PrivateKey(self.secret_key.clone())
    }

    fn sign(&self, message: &[u8]) -> Result<Self::Signature, CryptoError> {
        let signature = eddsa::Ed25519::sign(message, &self.secret_key)?;
        Ok(Ed25519Signature(signature))
    }
}

impl VerifyingKey for Ed25519PublicKey {
    type Signature = Ed25519Signature;

    fn verify(&self, message: &[u8], signature: &Self::Signature) -> Result<(), CryptoError> {
        eddsa::Ed25519::verify(message, &signature.0, &self.0)
            .map_err(|_| CryptoError::VerificationFailed)
    }
}

impl SerializableKey for Ed25519PublicKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        eddsa::Ed25519PublicKey::from_bytes(bytes)
            .map(Ed25519PublicKey)
            .map_err(|e| CryptoError::InvalidKey(format!("Malformed Ed25519 public key: {:?}", e)))
    }
}

impl SigningKey for Ed25519PrivateKey {
    type Signature = Ed25519Signature;

    fn sign(&self, message: &[u8]) -> Result<Self::Signature, CryptoError> {
        let signature = eddsa::Ed25519::sign(message, &self.0)?;
        Ok(Ed25519Signature(signature))
    }
}

impl SerializableKey for Ed25519PrivateKey {
    fn to_bytes(&self) -> Vec<u8> {
        // Export just the seed.
        self.0.seed().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != ED25519_KEY_LENGTH {
            return Err(CryptoError::InvalidKey(
                "Invalid EdDSA private key: expected a 32-byte seed".to_string(),
            ));
        }
        let mut seed = [0u8; ED25519_KEY_LENGTH];
        seed.copy_from_slice(bytes);

        eddsa::Ed25519SecretKey::from_seed(&seed)
            .map(Ed25519PrivateKey)
            .map_err(|e| CryptoError::InvalidKey(format!("Malformed Ed25519 seed: {:?}", e)))
    }
}

impl Ed25519PrivateKey {
    /// Derives the public key corresponding to this private key.
    pub fn public_key(&self) -> Result<Ed25519PublicKey, CryptoError> {
        self.0
            .public_key()
            .map(Ed25519PublicKey)
            .map_err(CryptoError::from)
    }
}

impl SerializableKey for Ed25519Signature {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        eddsa::Ed25519Signature::from_bytes(bytes)
            .map(Ed25519Signature)
            .map_err(|e| {
                CryptoError::InvalidSignature(format!("Malformed Ed25519 signature: {:?}", e))
            })
    }
}

impl Signature for Ed25519Signature {}

#[cfg(test)]
mod tests;
