//! Structured domain error carrying both an internal and a transport code.

use domain::{DomainError, DEFAULT_INTERNAL_CODE};
use thiserror::Error;
use tonic::Code;

use crate::config::ResponseConfig;

/// Internal codes assigned to [`DomainError`] variants.
pub mod internal_codes {
    pub const VALIDATION: i32 = 1001;
    pub const NOT_FOUND: i32 = 1002;
    pub const CONFLICT: i32 = 1003;
    pub const UNAUTHORIZED: i32 = 1004;
    pub const FORBIDDEN: i32 = 1005;
    pub const INTERNAL: i32 = 1006;
    pub const UNCLASSIFIED: i32 = 1099;
}

/// Application error with an internal code and the gRPC code to report.
///
/// `internal_code` is application-defined and distinct from
/// `network_error`, the code the transport sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DError {
    pub internal_code: i32,
    pub network_error: Code,
    pub message: String,
}

impl DError {
    pub fn new(internal_code: i32, network_error: Code, message: impl Into<String>) -> Self {
        Self {
            internal_code,
            network_error,
            message: message.into(),
        }
    }

    /// Error without an application-specific code.
    pub fn uncoded(network_error: Code, message: impl Into<String>) -> Self {
        Self::new(DEFAULT_INTERNAL_CODE, network_error, message)
    }
}

impl From<DomainError> for DError {
    fn from(err: DomainError) -> Self {
        let (internal_code, network_error) = match &err {
            DomainError::Validation(_) => (internal_codes::VALIDATION, Code::InvalidArgument),
            DomainError::NotFound(_) => (internal_codes::NOT_FOUND, Code::NotFound),
            DomainError::Conflict(_) => (internal_codes::CONFLICT, Code::AlreadyExists),
            DomainError::Unauthorized => (internal_codes::UNAUTHORIZED, Code::Unauthenticated),
            DomainError::Forbidden => (internal_codes::FORBIDDEN, Code::PermissionDenied),
            DomainError::Internal(_) => (internal_codes::INTERNAL, Code::Internal),
            DomainError::Unclassified(_) => (internal_codes::UNCLASSIFIED, Code::Unknown),
        };
        let message = match err {
            DomainError::Internal(_) | DomainError::Unclassified(_) => {
                tracing::error!("Domain failure hidden from client: {}", err);
                ResponseConfig::default().unclassified_message
            }
            other => other.to_string(),
        };
        Self::new(internal_code, network_error, message)
    }
}
