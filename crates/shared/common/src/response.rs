//! Application response for HTTP handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, OperationResult, ResultOperator};
use serde::Serialize;

use crate::config::ResponseConfig;
use crate::d_error::DError;
use crate::error::{AppError, BoxError};

/// Standard API success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Success-or-failure response for application (HTTP) handlers.
///
/// The error channel defaults to [`AppError`].
#[derive(Debug)]
#[must_use]
pub struct AResponse<T, E = AppError> {
    inner: OperationResult<T, E>,
}

impl<T, E> AResponse<T, E> {
    /// Valid response carrying `value`.
    pub fn accept(value: T) -> Self {
        Self {
            inner: OperationResult::accept(value),
        }
    }

    /// Failed response carrying `error`.
    pub fn fail(error: E) -> Self {
        Self {
            inner: OperationResult::fail(error),
        }
    }

    /// Transform the value, leaving a failure untouched.
    pub fn map<U, F>(self, f: F) -> AResponse<U, E>
    where
        F: FnOnce(T) -> U,
    {
        AResponse {
            inner: self.inner.map(f),
        }
    }
}

impl<E> AResponse<(), E> {
    /// Valid response without any content.
    pub fn accept_empty() -> Self {
        Self::accept(())
    }
}

impl<T> AResponse<T, AppError> {
    /// Failed response from an arbitrary error. Prefer a typed [`AppError`].
    pub fn fail_any(error: impl Into<BoxError>) -> Self {
        Self::fail(AppError::Unclassified(error.into()))
    }

    /// Failed response built from a [`DError`].
    pub fn fail_with_d_error(error: impl Into<DError>) -> Self {
        Self::fail(AppError::Domain(error.into()))
    }

    /// Failed response from a message and an explicit HTTP status.
    pub fn fail_with_message(message: impl Into<String>, status: StatusCode) -> Self {
        Self::fail(AppError::with_status(status, message))
    }

    /// Failed response from a domain error.
    pub fn fail_with_domain(error: DomainError) -> Self {
        Self::fail(error.into())
    }
}

impl<T: Serialize> AResponse<T, AppError> {
    /// Build the HTTP response, redacting per `config`.
    pub fn into_http_with(self, config: &ResponseConfig) -> Response {
        match self.into_result() {
            Ok(value) => (StatusCode::OK, Json(ApiResponse::success(value))).into_response(),
            Err(err) => err.into_response_with(config),
        }
    }
}

impl<T, E> ResultOperator<T, E> for AResponse<T, E> {
    fn operation(&self) -> &OperationResult<T, E> {
        &self.inner
    }

    fn into_operation(self) -> OperationResult<T, E> {
        self.inner
    }
}

impl<T, E> From<Result<T, E>> for AResponse<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self {
            inner: result.into(),
        }
    }
}

impl<T, E> IntoResponse for AResponse<T, E>
where
    T: Serialize,
    E: IntoResponse,
{
    fn into_response(self) -> Response {
        match self.into_result() {
            Ok(value) => (StatusCode::OK, Json(ApiResponse::success(value))).into_response(),
            Err(err) => err.into_response(),
        }
    }
}
