//! Unified error handling for HTTP and gRPC.
//!
//! Provides a single error type that can be converted to:
//! - Axum HTTP responses
//! - Tonic gRPC status codes
//! - A structured [`DError`]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, DEFAULT_INTERNAL_CODE};
use serde::Serialize;
use thiserror::Error;
use tonic::Status;

use crate::codes::{grpc_code_for, http_status_for};
use crate::config::ResponseConfig;
use crate::d_error::DError;
use crate::grpc::{Metadata, StatusObject};

/// Boxed error accepted by the unclassified escape hatches.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Application error types with support for both HTTP and gRPC.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Authentication required")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Structured failures
    #[error("{0}")]
    Domain(DError),

    #[error("{message}")]
    Status { status: StatusCode, message: String },

    // gRPC specific
    #[error("Service unavailable")]
    ServiceUnavailable(String),

    #[error("gRPC error: {0}")]
    Grpc(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),

    #[error("Unclassified error: {0}")]
    Unclassified(BoxError),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    internal_code: Option<i32>,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Forbidden => "FORBIDDEN",
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Domain(_) => "DOMAIN_ERROR",
            AppError::Status { .. } => "REQUEST_FAILED",
            AppError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            AppError::Grpc(_) => "GRPC_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
            AppError::Unclassified(_) => "UNCLASSIFIED_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Domain(err) => http_status_for(err.network_error),
            AppError::Status { status, .. } => *status,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get gRPC status code
    pub fn grpc_code(&self) -> tonic::Code {
        match self {
            AppError::Unauthorized => tonic::Code::Unauthenticated,
            AppError::Forbidden => tonic::Code::PermissionDenied,
            AppError::NotFound => tonic::Code::NotFound,
            AppError::Conflict(_) => tonic::Code::AlreadyExists,
            AppError::Validation(_) | AppError::BadRequest(_) => tonic::Code::InvalidArgument,
            AppError::Domain(err) => err.network_error,
            AppError::Status { status, .. } => grpc_code_for(*status),
            AppError::ServiceUnavailable(_) => tonic::Code::Unavailable,
            AppError::Unclassified(_) => tonic::Code::Unknown,
            _ => tonic::Code::Internal,
        }
    }

    /// Application-defined code, when the error carries one
    pub fn internal_code(&self) -> Option<i32> {
        match self {
            AppError::Domain(err) => Some(err.internal_code),
            _ => None,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        self.user_message_with(&ResponseConfig::default())
    }

    /// Get user-facing message, redacting per `config`
    pub fn user_message_with(&self, config: &ResponseConfig) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Conflict(msg) => {
                // Avoid duplicating "already exists" when converted from gRPC
                if msg.ends_with("already exists") {
                    msg.clone()
                } else {
                    format!("{} already exists", msg)
                }
            }
            AppError::Domain(err) => err.message.clone(),
            AppError::Status { message, .. } => message.clone(),

            // Hide details for internal errors
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::ServiceUnavailable(service) => {
                tracing::error!("Service unavailable: {}", service);
                format!("Service {} is unavailable", service)
            }
            AppError::Grpc(msg) => {
                tracing::error!("gRPC error: {}", msg);
                "A service communication error occurred".to_string()
            }
            AppError::Unclassified(err) => {
                tracing::error!("Unclassified error: {}", err);
                config.unclassified_text(err)
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }

    /// Build the HTTP response, redacting per `config`
    pub fn into_response_with(self, config: &ResponseConfig) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message_with(config),
                internal_code: self.internal_code(),
            },
        };

        (status, Json(body)).into_response()
    }

    /// Build the gRPC status, redacting per `config`
    pub fn into_status_with(self, config: &ResponseConfig) -> Status {
        let code = self.grpc_code();
        let message = self.user_message_with(config);
        match self.internal_code() {
            Some(internal_code) => StatusObject::builder()
                .with_code(code)
                .with_details(message)
                .with_metadata(Metadata::with_internal_code(internal_code))
                .build()
                .into(),
            None => Status::new(code, message),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_response_with(&ResponseConfig::default())
    }
}

// =============================================================================
// gRPC Status (Tonic)
// =============================================================================

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        err.into_status_with(&ResponseConfig::default())
    }
}

impl From<Status> for AppError {
    fn from(status: Status) -> Self {
        let carried = Metadata::from_metadata_map(status.metadata()).internal_code();
        if let Some(internal_code) = carried {
            return AppError::Domain(DError::new(
                internal_code,
                status.code(),
                status.message(),
            ));
        }

        match status.code() {
            tonic::Code::Unauthenticated => AppError::Unauthorized,
            tonic::Code::PermissionDenied => AppError::Forbidden,
            tonic::Code::NotFound => AppError::NotFound,
            tonic::Code::AlreadyExists => AppError::Conflict(status.message().to_string()),
            tonic::Code::InvalidArgument => AppError::Validation(status.message().to_string()),
            tonic::Code::Unavailable => AppError::ServiceUnavailable(status.message().to_string()),
            _ => AppError::Grpc(status.message().to_string()),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::NotFound(_) => AppError::NotFound,
            DomainError::Conflict(msg) => AppError::Conflict(msg),
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::Forbidden => AppError::Forbidden,
            DomainError::Internal(msg) => AppError::Internal(msg),
            DomainError::Unclassified(msg) => AppError::Unclassified(msg.into()),
        }
    }
}

impl From<DError> for AppError {
    fn from(err: DError) -> Self {
        AppError::Domain(err)
    }
}

impl From<AppError> for DError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Domain(err) => err,
            other => DError::new(DEFAULT_INTERNAL_CODE, other.grpc_code(), other.user_message()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn grpc(msg: impl Into<String>) -> Self {
        AppError::Grpc(msg.into())
    }

    pub fn service_unavailable(service: impl Into<String>) -> Self {
        AppError::ServiceUnavailable(service.into())
    }

    pub fn unclassified(err: impl Into<BoxError>) -> Self {
        AppError::Unclassified(err.into())
    }

    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Status {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::d_error::internal_codes;

    #[test]
    fn test_domain_error_keeps_internal_code_on_grpc() {
        let status: Status = AppError::Domain(DError::new(7, tonic::Code::NotFound, "boom")).into();

        assert_eq!(status.code(), tonic::Code::NotFound);
        assert_eq!(status.message(), "boom");
        assert_eq!(
            status.metadata().get("internalcode").and_then(|v| v.to_str().ok()),
            Some("7")
        );
    }

    #[test]
    fn test_status_with_internal_code_becomes_domain() {
        let status: Status = StatusObject::builder()
            .with_code(tonic::Code::FailedPrecondition)
            .with_details("quota")
            .with_metadata(Metadata::with_internal_code(55))
            .build()
            .into();

        match AppError::from(status) {
            AppError::Domain(err) => {
                assert_eq!(err.internal_code, 55);
                assert_eq!(err.network_error, tonic::Code::FailedPrecondition);
                assert_eq!(err.message, "quota");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_plain_status_mapping() {
        let err = AppError::from(Status::already_exists("email already exists"));
        assert_eq!(err.user_message(), "email already exists");
        assert!(matches!(AppError::from(Status::not_found("x")), AppError::NotFound));
    }

    #[test]
    fn test_http_status_of_structured_errors() {
        let domain = AppError::Domain(DError::new(1, tonic::Code::ResourceExhausted, "slow down"));
        assert_eq!(domain.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(domain.internal_code(), Some(1));

        let explicit = AppError::with_status(StatusCode::PAYMENT_REQUIRED, "pay up");
        assert_eq!(explicit.status(), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(explicit.grpc_code(), tonic::Code::FailedPrecondition);
        assert_eq!(explicit.user_message(), "pay up");
    }

    #[test]
    fn test_unclassified_is_redacted_by_default() {
        let err = AppError::unclassified("connection string leaked");
        assert_eq!(err.user_message(), "An internal error occurred");

        let verbose = ResponseConfig {
            redact_unclassified: false,
            ..ResponseConfig::default()
        };
        assert_eq!(err.user_message_with(&verbose), "connection string leaked");
        assert_eq!(err.grpc_code(), tonic::Code::Unknown);
    }

    #[test]
    fn test_domain_error_conversion() {
        assert!(matches!(
            AppError::from(DomainError::validation("bad")),
            AppError::Validation(_)
        ));
        assert!(matches!(
            AppError::from(DomainError::unclassified("?")),
            AppError::Unclassified(_)
        ));
    }

    #[test]
    fn test_app_error_to_d_error() {
        let d = DError::from(AppError::NotFound);
        assert_eq!(d.internal_code, 0);
        assert_eq!(d.network_error, tonic::Code::NotFound);

        let original = DError::new(internal_codes::CONFLICT, tonic::Code::AlreadyExists, "dup");
        assert_eq!(DError::from(AppError::from(original.clone())), original);
    }

    #[test]
    fn test_ok_or_not_found() {
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
        assert!(matches!(None::<u8>.ok_or_not_found(), Err(AppError::NotFound)));
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(AppError::internal("x").status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::service_unavailable("ledger").user_message(),
            "Service ledger is unavailable"
        );
        assert_eq!(AppError::grpc("eof").grpc_code(), tonic::Code::Internal);
    }
}
