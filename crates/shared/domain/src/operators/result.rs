//! Transport-free result used inside the domain layer.

use std::fmt;

use super::operation_result::{OperationResult, ResultOperator};
use crate::error::DomainError;

/// Outcome of a domain operation that never leaves the process.
///
/// The error channel defaults to [`DomainError`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Result<T, E = DomainError> {
    inner: OperationResult<T, E>,
}

impl<T, E> Result<T, E> {
    /// Successful result carrying `value`.
    pub fn accept(value: T) -> Self {
        Self {
            inner: OperationResult::accept(value),
        }
    }

    /// Failed result carrying `error`.
    pub fn fail(error: E) -> Self {
        Self {
            inner: OperationResult::fail(error),
        }
    }

    /// Transform the value, leaving a failure untouched.
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Result {
            inner: self.inner.map(f),
        }
    }
}

impl<E> Result<(), E> {
    /// Successful result for operations without a payload.
    pub fn accept_empty() -> Self {
        Self::accept(())
    }
}

impl<T> Result<T, DomainError> {
    /// Failure from an arbitrary error. Prefer a typed [`DomainError`].
    pub fn fail_any(error: impl fmt::Display) -> Self {
        Self::fail(DomainError::unclassified(error.to_string()))
    }

    /// Failure from a plain message, reported as an internal error.
    pub fn fail_with_message(message: impl Into<String>) -> Self {
        Self::fail(DomainError::internal(message))
    }
}

impl<T, E> ResultOperator<T, E> for Result<T, E> {
    fn operation(&self) -> &OperationResult<T, E> {
        &self.inner
    }

    fn into_operation(self) -> OperationResult<T, E> {
        self.inner
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        Self {
            inner: result.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_and_fail() {
        let ok: Result<&str> = Result::accept("done");
        assert!(ok.is_success());
        assert_eq!(*ok.value(), "done");

        let err: Result<&str> = Result::fail(DomainError::not_found("order"));
        assert!(!err.is_success());
        assert_eq!(err.error(), &DomainError::not_found("order"));
    }

    #[test]
    fn test_accept_empty_is_success() {
        let result: Result<()> = Result::accept_empty();
        assert!(result.is_success());
        assert_eq!(result.value(), &());
    }

    #[test]
    fn test_fail_any_is_unclassified() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");
        let result: Result<u32> = Result::fail_any(io);

        assert_eq!(
            result.error(),
            &DomainError::Unclassified("socket closed".to_string())
        );
    }

    #[test]
    fn test_fail_with_message_is_internal() {
        let result: Result<u32> = Result::fail_with_message("ledger out of sync");
        assert_eq!(result.into_error(), DomainError::internal("ledger out of sync"));
    }

    #[test]
    #[should_panic(expected = "accessed error on a successful result")]
    fn test_error_on_success_panics() {
        let result: Result<u32> = Result::accept(1);
        let _ = result.error();
    }

    #[test]
    fn test_from_std_result() {
        let parsed: Result<i64, std::num::ParseIntError> = "12".parse::<i64>().into();
        assert_eq!(parsed.into_result(), Ok(12));
    }
}
