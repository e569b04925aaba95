// Path: crates/crypto/src/sign/rsa/mod.rs
//! RSA PKCS#1 v1.5 signatures over SHA-256.
//!
//! Keys must be at least 2048 bits. Private keys are accepted as PEM
//! (PKCS#1 or PKCS#8) or DER and serialized back out as PKCS#8 DER; public
//! keys are normalized to the SubjectPublicKeyInfo (SPKI) encoding, so two
//! encodings of the same key always compare equal.

use crate::error::CryptoError;
use factom_did_api::crypto::{
    SerializableKey, Signature, SigningKey, SigningKeyPair, VerifyingKey,
};
use rand::rngs::OsRng;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::traits::PublicKeyParts;

/// The minimum accepted RSA modulus size, in bits.
pub const MIN_RSA_BITS: usize = 2048;

/// An RSA key pair.
#[derive(Clone)]
pub struct RsaKeyPair {
    public_key: RsaPublicKey,
    secret_key: RsaPrivateKey,
}

/// An RSA PKCS#1 v1.5 signature.
pub struct RsaSignature(rsa::pkcs1v15::Signature);

/// An RSA public key, normalized to its SPKI DER encoding.
#[derive(Clone)]
pub struct RsaPublicKey {
    key: rsa::RsaPublicKey,
    der: Vec<u8>,
    pem: String,
}

/// An RSA private key.
#[derive(Clone, Debug)]
pub struct RsaPrivateKey {
    key: rsa::RsaPrivateKey,
    der: Vec<u8>,
}

fn unsupported_format() -> CryptoError {
    CryptoError::InvalidKey("RSA key format is not supported".to_string())
}

impl RsaKeyPair {
    /// Generates a new 2048-bit key pair. This is the only key generation
    /// with non-trivial latency in the library.
    pub fn generate() -> Result<Self, CryptoError> {
        let key = rsa::RsaPrivateKey::new(&mut OsRng, MIN_RSA_BITS)
            .map_err(|e| CryptoError::OperationFailed(e.to_string()))?;
        Self::from_private_key(&RsaPrivateKey::from_key(key)?)
    }

    /// Reconstructs a key pair from an existing private key.
    pub fn from_private_key(private_key: &RsaPrivateKey) -> Result<Self, CryptoError> {
        Ok(Self {
            public_key: private_key.public_key()?,
            secret_key: private_key.clone(),
        })
    }
}

impl SigningKeyPair for RsaKeyPair {
    type PublicKey = RsaPublicKey;
    type PrivateKey = RsaPrivateKey;
    type Signature = RsaSignature;

    fn public_key(&self) -> Self::PublicKey {
        self.public_key.clone()
    }

    fn private_key(&self) -> Self::PrivateKey {
        self.secret_key.clone()
    }

    fn sign(&self, message: &[u8]) -> Result<Self::Signature, CryptoError> {
        self.secret_key.sign(message)
    }
}

impl VerifyingKey for RsaPublicKey {
    type Signature = RsaSignature;

    fn verify(&self, message: &[u8], signature: &Self::Signature) -> Result<(), CryptoError> {
        rsa::pkcs1v15::VerifyingKey::<Sha256>::new(self.key.clone())
            .verify(message, &signature.0)
            .map_err(|_| CryptoError::VerificationFailed)
    }
}

impl SerializableKey for RsaPublicKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.der.clone()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let key = if bytes.starts_with(b"-----BEGIN") {
            let pem = std::str::from_utf8(bytes).map_err(|_| unsupported_format())?;
            rsa::RsaPublicKey::from_public_key_pem(pem)
                .or_else(|_| rsa::RsaPublicKey::from_pkcs1_pem(pem))
        } else {
            rsa::RsaPublicKey::from_public_key_der(bytes)
                .or_else(|_| rsa::RsaPublicKey::from_pkcs1_der(bytes))
        }
        .map_err(|_| unsupported_format())?;
        Self::from_key(key)
    }
}

impl RsaPublicKey {
    fn from_key(key: rsa::RsaPublicKey) -> Result<Self, CryptoError> {
        if key.size() * 8 < MIN_RSA_BITS {
            return Err(CryptoError::InvalidKey(format!(
                "RSA keys must be at least {} bits",
                MIN_RSA_BITS
            )));
        }
        let der = key
            .to_public_key_der()
            .map_err(|e| CryptoError::OperationFailed(e.to_string()))?
            .into_vec();
        let pem = key
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| CryptoError::OperationFailed(e.to_string()))?;
        Ok(Self { key, der, pem })
    }

    /// Returns the PEM (SPKI) encoding published in document fragments.
    pub fn pem(&self) -> &str {
        &self.pem
    }
}

impl SigningKey for RsaPrivateKey {
    type Signature = RsaSignature;

    fn sign(&self, message: &[u8]) -> Result<Self::Signature, CryptoError> {
        let signature = rsa::pkcs1v15::SigningKey::<Sha256>::new(self.key.clone())
            .try_sign(message)
            .map_err(|e| CryptoError::OperationFailed(e.to_string()))?;
        Ok(RsaSignature(signature))
    }
}

impl SerializableKey for RsaPrivateKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.der.clone()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let key = if bytes.starts_with(b"-----BEGIN") {
            let pem = std::str::from_utf8(bytes).map_err(|_| unsupported_format())?;
            rsa::RsaPrivateKey::from_pkcs8_pem(pem)
                .or_else(|_| rsa::RsaPrivateKey::from_pkcs1_pem(pem))
        } else {
            rsa::RsaPrivateKey::from_pkcs8_der(bytes)
                .or_else(|_| rsa::RsaPrivateKey::from_pkcs1_der(bytes))
        }
        .map_err(|_| unsupported_format())?;
        Self::from_key(key)
    }
}

impl RsaPrivateKey {
    fn from_key(key: rsa::RsaPrivateKey) -> Result<Self, CryptoError> {
        if key.size() * 8 < MIN_RSA_BITS {
            return Err(CryptoError::InvalidKey(format!(
                "RSA keys must be at least {} bits",
                MIN_RSA_BITS
            )));
        }
        let der = key
            .to_pkcs8_der()
            .map_err(|e| CryptoError::OperationFailed(e.to_string()))?
            .as_bytes()
            .to_vec();
        Ok(Self { key, der })
    }

    /// Derives the public key corresponding to this private key.
    pub fn public_key(&self) -> Result<RsaPublicKey, CryptoError> {
        RsaPublicKey::from_key(self.key.to_public_key())
    }
}

impl SerializableKey for RsaSignature {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        rsa::pkcs1v15::Signature::try_from(bytes)
            .map(RsaSignature)
            .map_err(|e| CryptoError::InvalidSignature(format!("Malformed RSA signature: {}", e)))
    }
}

impl Signature for RsaSignature {}

#[cfg(test)]
mod tests;
