//! Response formatted for gRPC handlers.

use domain::{OperationResult, ResultOperator, DEFAULT_INTERNAL_CODE};
use thiserror::Error;
use tonic::{Code, Response, Status};
use tracing::error;

use super::metadata::Metadata;
use super::status::StatusObject;
use crate::config::ResponseConfig;
use crate::d_error::DError;
use crate::error::BoxError;

/// Error channel of a [`GResponse`].
#[derive(Error, Debug)]
pub enum GrpcFailure {
    /// Structured, wire-ready status
    #[error("{0}")]
    Status(StatusObject),

    /// Error that bypassed the status shape through `fail_any`
    #[error("unclassified: {0}")]
    Unclassified(BoxError),
}

impl GrpcFailure {
    /// The status object, for structured failures.
    pub fn status(&self) -> Option<&StatusObject> {
        match self {
            GrpcFailure::Status(status) => Some(status),
            GrpcFailure::Unclassified(_) => None,
        }
    }

    pub fn is_unclassified(&self) -> bool {
        matches!(self, GrpcFailure::Unclassified(_))
    }

    /// Convert into a tonic status.
    ///
    /// Structured failures keep their code, details and metadata. Unclassified
    /// failures become [`Code::Unknown`].
    pub fn into_status_with(self, config: &ResponseConfig) -> Status {
        match self {
            GrpcFailure::Status(status) => status.into(),
            GrpcFailure::Unclassified(err) => {
                error!("Unclassified gRPC failure: {}", err);
                Status::new(Code::Unknown, config.unclassified_text(&err))
            }
        }
    }
}

fn status_with_internal_code(code: Code, details: String, internal_code: i32) -> StatusObject {
    StatusObject::builder()
        .with_code(code)
        .with_details(details)
        .with_metadata(Metadata::with_internal_code(internal_code))
        .build()
}

/// Success-or-failure response shaped for a gRPC status layer.
///
/// Every structured failure factory produces the same envelope: a gRPC code,
/// a details string and metadata carrying `internalCode`.
#[derive(Debug)]
#[must_use]
pub struct GResponse<T> {
    inner: OperationResult<T, GrpcFailure>,
}

impl<T> GResponse<T> {
    /// Valid response carrying `value`.
    pub fn accept(value: T) -> Self {
        Self {
            inner: OperationResult::accept(value),
        }
    }

    /// Failed response from a full or partial status object.
    ///
    /// Accepts a [`StatusObject`], a [`StatusBuilder`](super::StatusBuilder)
    /// or a tonic [`Status`].
    pub fn fail(error: impl Into<StatusObject>) -> Self {
        Self {
            inner: OperationResult::fail(GrpcFailure::Status(error.into())),
        }
    }

    /// Failed response from an arbitrary error.
    ///
    /// Bypasses the status shape; keep for errors nobody has classified.
    pub fn fail_any(error: impl Into<BoxError>) -> Self {
        Self {
            inner: OperationResult::fail(GrpcFailure::Unclassified(error.into())),
        }
    }

    /// Failed response built from a [`DError`].
    pub fn fail_with_d_error(error: impl Into<DError>) -> Self {
        let error = error.into();
        Self::fail(status_with_internal_code(
            error.network_error,
            error.message,
            error.internal_code,
        ))
    }

    /// Failed response from a message and a status, with internal code `0`.
    pub fn fail_with_message(message: impl Into<String>, status: Code) -> Self {
        Self::fail_with_message_and_code(message, status, DEFAULT_INTERNAL_CODE)
    }

    /// Failed response from a message, a status and an internal code.
    pub fn fail_with_message_and_code(
        message: impl Into<String>,
        status: Code,
        internal_code: i32,
    ) -> Self {
        Self::fail(status_with_internal_code(status, message.into(), internal_code))
    }

    /// Transform the value, leaving a failure untouched.
    pub fn map<U, F>(self, f: F) -> GResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        GResponse {
            inner: self.inner.map(f),
        }
    }

    /// Hand over to tonic using the default [`ResponseConfig`].
    pub fn into_grpc(self) -> Result<Response<T>, Status> {
        self.into_grpc_with(&ResponseConfig::default())
    }

    /// Hand over to tonic: success becomes a response, failure a status.
    pub fn into_grpc_with(self, config: &ResponseConfig) -> Result<Response<T>, Status> {
        match self.into_result() {
            Ok(value) => Ok(Response::new(value)),
            Err(failure) => Err(failure.into_status_with(config)),
        }
    }
}

impl GResponse<()> {
    /// Valid response without any content.
    pub fn accept_empty() -> Self {
        Self::accept(())
    }
}

impl<T> ResultOperator<T, GrpcFailure> for GResponse<T> {
    fn operation(&self) -> &OperationResult<T, GrpcFailure> {
        &self.inner
    }

    fn into_operation(self) -> OperationResult<T, GrpcFailure> {
        self.inner
    }
}

impl<T> From<Result<T, Status>> for GResponse<T> {
    fn from(result: Result<T, Status>) -> Self {
        match result {
            Ok(value) => Self::accept(value),
            Err(status) => Self::fail(status),
        }
    }
}
