// Path: crates/crypto/src/sign/ecdsa/mod.rs
//! ECDSA over secp256k1 using k256.
//!
//! Signing hashes the message with SHA-256 and draws the nonce
//! deterministically per RFC 6979, so equal messages under equal keys
//! produce equal signatures. The private half is the 32-byte secret scalar;
//! the public half is the 33-byte compressed SEC1 point. Signatures are the
//! 64-byte fixed `r || s` encoding with low-S normalization.

use crate::error::CryptoError;
use factom_did_api::crypto::{
    SerializableKey, Signature, SigningKey, SigningKeyPair, VerifyingKey,
};
use k256::ecdsa::signature::{Signer, Verifier};
use k256::ecdsa::{Signature as EcdsaSignature, SigningKey as EcdsaSigningKey};
use rand::rngs::OsRng;

/// The length of a secp256k1 secret scalar, in bytes.
pub const SECP256K1_KEY_LENGTH: usize = 32;

/// A secp256k1 key pair.
#[derive(Clone)]
pub struct Secp256k1KeyPair {
    public_key: k256::ecdsa::VerifyingKey,
    secret_key: EcdsaSigningKey,
}

/// A secp256k1 ECDSA signature.
pub struct Secp256k1Signature(EcdsaSignature);

/// A secp256k1 public key.
#[derive(Clone)]
pub struct Secp256k1PublicKey(k256::ecdsa::VerifyingKey);

/// A secp256k1 private key, held as its secret scalar.
#[derive(Clone)]
pub struct Secp256k1PrivateKey(EcdsaSigningKey);

impl Secp256k1KeyPair {
    /// Generates a new key pair from OS randomness.
    pub fn generate() -> Result<Self, CryptoError> {
        let secret_key = EcdsaSigningKey::random(&mut OsRng);
        let public_key = *secret_key.verifying_key();
        Ok(Self {
            public_key,
            secret_key,
        })
    }

    /// Reconstructs a key pair from an existing private key.
    pub fn from_private_key(private_key: &Secp256k1PrivateKey) -> Result<Self, CryptoError> {
        let secret_key = private_key.0.clone();
        let public_key = *secret_key.verifying_key();
        Ok(Self {
            public_key,
            secret_key,
        })
    }
}

impl SigningKeyPair for Secp256k1KeyPair {
    type PublicKey = Secp256k1PublicKey;
    type PrivateKey = Secp256k1PrivateKey;
    type Signature = Secp256k1Signature;

    fn public_key(&self) -> Self::PublicKey {
        Secp256k1PublicKey(self.public_key)
    }

    fn private_key(&self) -> Self::PrivateKey {
        Secp256k1PrivateKey(self.secret_key.clone())
    }

    fn sign(&self, message: &[u8]) -> Result<Self::Signature, CryptoError> {
        self.private_key().sign(message)
    }
}

impl VerifyingKey for Secp256k1PublicKey {
    type Signature = Secp256k1Signature;

    fn verify(&self, message: &[u8], signature: &Self::Signature) -> Result<(), CryptoError> {
        self.0
            .verify(message, &signature.0)
            .map_err(|_| CryptoError::VerificationFailed)
    }
}

impl SerializableKey for Secp256k1PublicKey {
    fn to_bytes(&self) -> Vec<u8> {
        // Compressed SEC1 encoding.
        self.0.to_encoded_point(true).as_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        k256::ecdsa::VerifyingKey::from_sec1_bytes(bytes)
            .map(Secp256k1PublicKey)
            .map_err(|e| {
                CryptoError::InvalidKey(format!("Malformed secp256k1 public key: {}", e))
            })
    }
}

impl SigningKey for Secp256k1PrivateKey {
    type Signature = Secp256k1Signature;

    fn sign(&self, message: &[u8]) -> Result<Self::Signature, CryptoError> {
        let signature: EcdsaSignature = self
            .0
            .try_sign(message)
            .map_err(|e| CryptoError::OperationFailed(e.to_string()))?;
        Ok(Secp256k1Signature(signature))
    }
}

impl SerializableKey for Secp256k1PrivateKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != SECP256K1_KEY_LENGTH {
            return Err(CryptoError::InvalidKey(
                "Invalid ECDSA private key: expected a 32-byte secret scalar".to_string(),
            ));
        }
        // from_slice rejects zero and scalars at or above the curve order.
        EcdsaSigningKey::from_slice(bytes)
            .map(Secp256k1PrivateKey)
            .map_err(|e| {
                CryptoError::InvalidKey(format!("Malformed secp256k1 secret scalar: {}", e))
            })
    }
}

impl Secp256k1PrivateKey {
    /// Derives the public key corresponding to this private key.
    pub fn public_key(&self) -> Result<Secp256k1PublicKey, CryptoError> {
        Ok(Secp256k1PublicKey(*self.0.verifying_key()))
    }
}

impl SerializableKey for Secp256k1Signature {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        EcdsaSignature::from_slice(bytes)
            .map(Secp256k1Signature)
            .map_err(|e| {
                CryptoError::InvalidSignature(format!("Malformed secp256k1 signature: {}", e))
            })
    }
}

impl Signature for Secp256k1Signature {}

#[cfg(test)]
mod tests;
