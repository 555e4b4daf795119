//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, gRPC, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Entity already exists (conflict)
    #[error("{0} already exists")]
    Conflict(String),

    /// Unauthorized access attempt
    #[error("Unauthorized")]
    Unauthorized,

    /// Forbidden action
    #[error("Forbidden")]
    Forbidden,

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error that nobody classified; only produced by `fail_any`
    #[error("Unclassified error: {0}")]
    Unclassified(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }

    /// Create a conflict error
    pub fn conflict(entity: impl Into<String>) -> Self {
        DomainError::Conflict(entity.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }

    /// Create an unclassified error
    pub fn unclassified(msg: impl Into<String>) -> Self {
        DomainError::Unclassified(msg.into())
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let codes: Vec<String> = errs.iter().map(|e| e.code.to_string()).collect();
                format!("{} ({})", field, codes.join(", "))
            })
            .collect();
        fields.sort();
        DomainError::Validation(format!("invalid fields: {}", fields.join("; ")))
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = std::result::Result<T, DomainError>;
