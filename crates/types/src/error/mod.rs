// Path: crates/types/src/error/mod.rs
//! Core error types for the Factom DID client.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors raised when an input violates a static shape rule.
///
/// Each variant carries the offending value so callers can report which
/// field failed without re-parsing the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The alias is empty or contains characters outside `[a-z0-9-]`.
    #[error("Invalid alias: {0}. Aliases may contain only lowercase letters, digits and hyphens")]
    InvalidAlias(String),
    /// The DID string does not match `<method-name>:<64 lowercase hex chars>`.
    #[error("Invalid DID string: {0}")]
    InvalidDid(String),
    /// The service endpoint is not an absolute http/https URL with a host.
    #[error("Invalid service endpoint URL: {0}")]
    InvalidUrl(String),
    /// The signature scheme name is not part of the registry.
    #[error("Unknown signature scheme: {0}")]
    UnknownKeyType(String),
    /// The key purpose name is not part of the registry.
    #[error("Unknown key purpose: {0}")]
    UnknownPurpose(String),
    /// A DID key was constructed with an empty purpose set.
    #[error("A DID key requires at least one purpose")]
    EmptyPurpose,
    /// A service was constructed with an empty service type.
    #[error("Service type must not be empty")]
    EmptyServiceType,
    /// A method version upgrade was requested with an empty version string.
    #[error("Method specification version must not be empty")]
    EmptyMethodVersion,
}

impl ErrorCode for ValidationError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidAlias(_) => "VALIDATION_INVALID_ALIAS",
            Self::InvalidDid(_) => "VALIDATION_INVALID_DID",
            Self::InvalidUrl(_) => "VALIDATION_INVALID_URL",
            Self::UnknownKeyType(_) => "VALIDATION_UNKNOWN_KEY_TYPE",
            Self::UnknownPurpose(_) => "VALIDATION_UNKNOWN_PURPOSE",
            Self::EmptyPurpose => "VALIDATION_EMPTY_PURPOSE",
            Self::EmptyServiceType => "VALIDATION_EMPTY_SERVICE_TYPE",
            Self::EmptyMethodVersion => "VALIDATION_EMPTY_METHOD_VERSION",
        }
    }
}

/// Errors raised by the cryptographic provider.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// The signature failed cryptographic verification.
    #[error("Signature verification failed")]
    VerificationFailed,
    /// The provided key material is malformed or invalid for the declared scheme.
    #[error("Invalid cryptographic key: {0}")]
    InvalidKey(String),
    /// The provided signature material is malformed for the declared scheme.
    #[error("Invalid signature format: {0}")]
    InvalidSignature(String),
    /// The supplied public key does not match the one derived from the
    /// supplied private key.
    #[error("The provided public key does not match the one derived from the provided private key")]
    KeyMismatch,
    /// A signing operation was requested on a verification-only key.
    #[error("Signing requires a private key")]
    MissingPrivateKey,
    /// A generic failure in an underlying cryptographic library.
    #[error("Cryptographic operation failed: {0}")]
    OperationFailed(String),
}

impl ErrorCode for CryptoError {
    fn code(&self) -> &'static str {
        match self {
            Self::VerificationFailed => "CRYPTO_VERIFICATION_FAILED",
            Self::InvalidKey(_) => "CRYPTO_INVALID_KEY",
            Self::InvalidSignature(_) => "CRYPTO_INVALID_SIGNATURE",
            Self::KeyMismatch => "CRYPTO_KEY_MISMATCH",
            Self::MissingPrivateKey => "CRYPTO_MISSING_PRIVATE_KEY",
            Self::OperationFailed(_) => "CRYPTO_OPERATION_FAILED",
        }
    }
}

impl From<dcrypt::Error> for CryptoError {
    fn from(e: dcrypt::Error) -> Self {
        CryptoError::OperationFailed(e.to_string())
    }
}

/// Errors raised while building or mutating a DID document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The alias already belongs to another element of the document.
    #[error("Alias already in use: {0}")]
    AliasInUse(String),
    /// A revocation targeted an alias not present in the document.
    #[error("Unknown alias: {0}")]
    UnknownAlias(String),
    /// The document has no management keys.
    #[error("The document has no management keys")]
    NoManagementKey,
    /// An input failed shape validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A key construction or signing operation failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl ErrorCode for DocumentError {
    fn code(&self) -> &'static str {
        match self {
            Self::AliasInUse(_) => "DOCUMENT_ALIAS_IN_USE",
            Self::UnknownAlias(_) => "DOCUMENT_UNKNOWN_ALIAS",
            Self::NoManagementKey => "DOCUMENT_NO_MANAGEMENT_KEY",
            Self::Validation(e) => e.code(),
            Self::Crypto(e) => e.code(),
        }
    }
}

/// Errors raised while serializing or signing a chain entry.
#[derive(Error, Debug)]
pub enum EntryError {
    /// The serialized entry exceeds the on-chain size cap.
    #[error("Entry size {size} exceeds the {limit} byte limit")]
    TooLarge {
        /// The total size of the serialized entry in bytes.
        size: usize,
        /// The hard cap the entry must fit within.
        limit: usize,
    },
    /// No management key of the original document satisfies the signing
    /// priority required by the recorded changes.
    #[error("No management key with priority at most {required} is available to sign the update")]
    InsufficientAuthority {
        /// The most restrictive priority required by the changes.
        required: u32,
    },
    /// The entry would establish or leave behind a document with zero
    /// management keys.
    #[error("The document must retain at least one management key")]
    NoManagementKey,
    /// The entry requires a priority-0 management key and none is present.
    #[error("The document must contain at least one management key with priority 0")]
    NoTopPriorityKey,
    /// The entry content could not be serialized to canonical JSON.
    #[error("Entry serialization failed: {0}")]
    Serialization(String),
    /// An input failed shape validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A signing operation failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl ErrorCode for EntryError {
    fn code(&self) -> &'static str {
        match self {
            Self::TooLarge { .. } => "ENTRY_TOO_LARGE",
            Self::InsufficientAuthority { .. } => "ENTRY_INSUFFICIENT_AUTHORITY",
            Self::NoManagementKey => "ENTRY_NO_MANAGEMENT_KEY",
            Self::NoTopPriorityKey => "ENTRY_NO_TOP_PRIORITY_KEY",
            Self::Serialization(_) => "ENTRY_SERIALIZATION_FAILED",
            Self::Validation(e) => e.code(),
            Self::Crypto(e) => e.code(),
        }
    }
}

impl From<serde_json::Error> for EntryError {
    fn from(e: serde_json::Error) -> Self {
        EntryError::Serialization(e.to_string())
    }
}
