// Path: crates/client/src/service.rs

//! The published service entity: a typed endpoint associated with the DID.

use factom_did_types::error::{DocumentError, ValidationError};
use factom_did_types::validation::{validate_alias, validate_url};

/// A service endpoint published in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Service {
    alias: String,
    service_type: String,
    endpoint: String,
    priority_requirement: Option<u32>,
}

impl Service {
    /// Constructs a service. The alias must satisfy the alias grammar, the
    /// service type must be non-empty and the endpoint must be an absolute
    /// http/https URL.
    pub fn new(
        alias: &str,
        service_type: &str,
        endpoint: &str,
        priority_requirement: Option<u32>,
    ) -> Result<Self, DocumentError> {
        validate_alias(alias)?;
        if service_type.is_empty() {
            return Err(ValidationError::EmptyServiceType.into());
        }
        validate_url(endpoint)?;

        Ok(Self {
            alias: alias.to_string(),
            service_type: service_type.to_string(),
            endpoint: endpoint.to_string(),
            priority_requirement,
        })
    }

    /// The alias of the service, unique within its document.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The service type, e.g. `PhotoStreamService`.
    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    /// The absolute endpoint URL of the service.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The minimum priority a management key needs to revoke this service.
    pub fn priority_requirement(&self) -> Option<u32> {
        self.priority_requirement
    }
}
