// Path: crates/types/src/validation.rs

//! Shape validators for the identifier grammar of the DID method.
//!
//! Aliases, DID strings and endpoint URLs are validated once, at
//! construction time. Everything past a constructor can therefore assume
//! well-formed identifiers.

use crate::error::ValidationError;
use crate::DID_METHOD_NAME;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static ALIAS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("alias regex is valid"));

static DID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^{}:[a-f0-9]{{64}}$",
        regex::escape(DID_METHOD_NAME)
    ))
    .expect("DID regex is valid")
});

/// Validates an element alias: non-empty, lowercase latin letters, digits
/// and hyphens only.
pub fn validate_alias(alias: &str) -> Result<(), ValidationError> {
    if ALIAS_RE.is_match(alias) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAlias(alias.to_string()))
    }
}

/// Validates a full DID string, i.e. the method name followed by a 64
/// character lowercase hex identifier.
pub fn validate_did(did: &str) -> Result<(), ValidationError> {
    if DID_RE.is_match(did) {
        Ok(())
    } else {
        Err(ValidationError::InvalidDid(did.to_string()))
    }
}

/// Validates a service endpoint: an absolute http or https URL with a
/// non-empty host.
pub fn validate_url(endpoint: &str) -> Result<(), ValidationError> {
    let parsed =
        Url::parse(endpoint).map_err(|_| ValidationError::InvalidUrl(endpoint.to_string()))?;
    let scheme_ok = matches!(parsed.scheme(), "http" | "https");
    let host_ok = parsed.host_str().is_some_and(|h| !h.is_empty());
    if scheme_ok && host_ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidUrl(endpoint.to_string()))
    }
}
