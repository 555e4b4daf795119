//! Base success-or-failure container shared by every response flavour.
//!
//! An [`OperationResult`] holds exactly one of a value or an error. The
//! specialised responses (`Result`, `AResponse`, `GResponse`) wrap it and
//! expose the same accessors through [`ResultOperator`].

use crate::constants::{MISUSE_ERROR_ON_SUCCESS, MISUSE_VALUE_ON_ERROR};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome<T, E> {
    Value(T),
    Error(E),
}

/// Either a value or an error, never both and never neither.
///
/// Built only through [`OperationResult::accept`] and
/// [`OperationResult::fail`]; nothing is reassigned after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct OperationResult<T, E> {
    outcome: Outcome<T, E>,
}

impl<T, E> OperationResult<T, E> {
    /// Successful result wrapping `value`.
    pub fn accept(value: T) -> Self {
        Self {
            outcome: Outcome::Value(value),
        }
    }

    /// Failed result wrapping `error`.
    pub fn fail(error: E) -> Self {
        Self {
            outcome: Outcome::Error(error),
        }
    }

    /// Borrow both channels as a standard result.
    pub fn as_result(&self) -> std::result::Result<&T, &E> {
        match &self.outcome {
            Outcome::Value(value) => Ok(value),
            Outcome::Error(error) => Err(error),
        }
    }

    /// Transform the value, leaving a failure untouched.
    pub fn map<U, F>(self, f: F) -> OperationResult<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.outcome {
            Outcome::Value(value) => OperationResult::accept(f(value)),
            Outcome::Error(error) => OperationResult::fail(error),
        }
    }

    /// Transform the error, leaving a success untouched.
    pub fn map_err<F2, F>(self, f: F) -> OperationResult<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self.outcome {
            Outcome::Value(value) => OperationResult::accept(value),
            Outcome::Error(error) => OperationResult::fail(f(error)),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for OperationResult<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::accept(value),
            Err(error) => Self::fail(error),
        }
    }
}

impl<T, E> From<OperationResult<T, E>> for std::result::Result<T, E> {
    fn from(result: OperationResult<T, E>) -> Self {
        result.into_result()
    }
}

/// Accessor contract shared by [`OperationResult`] and its specialisations.
///
/// Implementors only provide the two conversions to the underlying
/// [`OperationResult`]; every accessor is derived from them.
///
/// Reading the wrong channel with [`value`](Self::value),
/// [`error`](Self::error), [`into_value`](Self::into_value) or
/// [`into_error`](Self::into_error) is a programming error and panics. Use the
/// `try_*` accessors or [`into_result`](Self::into_result) when the outcome is
/// not known.
pub trait ResultOperator<T, E>: Sized {
    /// Borrow the underlying result.
    fn operation(&self) -> &OperationResult<T, E>;

    /// Unwrap into the underlying result.
    fn into_operation(self) -> OperationResult<T, E>;

    /// True when the value channel is populated.
    fn is_success(&self) -> bool {
        matches!(self.operation().outcome, Outcome::Value(_))
    }

    /// True when the error channel is populated.
    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The value, if this is a success.
    fn try_value<'a>(&'a self) -> Option<&'a T>
    where
        E: 'a,
    {
        self.operation().as_result().ok()
    }

    /// The error, if this is a failure.
    fn try_error<'a>(&'a self) -> Option<&'a E>
    where
        T: 'a,
    {
        self.operation().as_result().err()
    }

    /// The value.
    ///
    /// # Panics
    /// Panics when called on a failed result.
    #[track_caller]
    fn value<'a>(&'a self) -> &'a T
    where
        E: 'a,
    {
        match self.try_value() {
            Some(value) => value,
            None => panic!("{}", MISUSE_VALUE_ON_ERROR),
        }
    }

    /// The error.
    ///
    /// # Panics
    /// Panics when called on a successful result.
    #[track_caller]
    fn error<'a>(&'a self) -> &'a E
    where
        T: 'a,
    {
        match self.try_error() {
            Some(error) => error,
            None => panic!("{}", MISUSE_ERROR_ON_SUCCESS),
        }
    }

    /// Consume and return the value.
    ///
    /// # Panics
    /// Panics when called on a failed result.
    #[track_caller]
    fn into_value(self) -> T {
        match self.into_result() {
            Ok(value) => value,
            Err(_) => panic!("{}", MISUSE_VALUE_ON_ERROR),
        }
    }

    /// Consume and return the error.
    ///
    /// # Panics
    /// Panics when called on a successful result.
    #[track_caller]
    fn into_error(self) -> E {
        match self.into_result() {
            Ok(_) => panic!("{}", MISUSE_ERROR_ON_SUCCESS),
            Err(error) => error,
        }
    }

    /// Consume into a standard result. Never panics.
    fn into_result(self) -> std::result::Result<T, E> {
        match self.into_operation().outcome {
            Outcome::Value(value) => Ok(value),
            Outcome::Error(error) => Err(error),
        }
    }
}

impl<T, E> ResultOperator<T, E> for OperationResult<T, E> {
    fn operation(&self) -> &OperationResult<T, E> {
        self
    }

    fn into_operation(self) -> OperationResult<T, E> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_populates_value_only() {
        let result: OperationResult<i32, String> = OperationResult::accept(42);

        assert!(result.is_success());
        assert!(!result.is_failure());
        assert_eq!(result.value(), &42);
        assert_eq!(result.try_error(), None);
    }

    #[test]
    fn test_fail_populates_error_only() {
        let result: OperationResult<i32, String> = OperationResult::fail("nope".to_string());

        assert!(result.is_failure());
        assert_eq!(result.error(), "nope");
        assert_eq!(result.try_value(), None);
    }

    #[test]
    #[should_panic(expected = "accessed value on an error result")]
    fn test_value_on_failure_panics() {
        let result: OperationResult<i32, &str> = OperationResult::fail("nope");
        let _ = result.value();
    }

    #[test]
    #[should_panic(expected = "accessed error on a successful result")]
    fn test_error_on_success_panics() {
        let result: OperationResult<i32, &str> = OperationResult::accept(1);
        let _ = result.error();
    }

    #[test]
    #[should_panic(expected = "accessed value on an error result")]
    fn test_into_value_on_failure_panics() {
        let result: OperationResult<i32, &str> = OperationResult::fail("nope");
        let _ = result.into_value();
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let result: OperationResult<Vec<u8>, ()> = OperationResult::accept(vec![1, 2, 3]);

        let first = result.value().clone();
        let second = result.value().clone();
        assert_eq!(first, second);
        assert!(result.is_success());
    }

    #[test]
    fn test_map_and_map_err() {
        let ok: OperationResult<i32, String> = OperationResult::accept(2);
        assert_eq!(ok.map(|v| v * 10).into_value(), 20);

        let err: OperationResult<i32, String> = OperationResult::fail("x".to_string());
        let mapped = err.map(|v| v * 10).map_err(|e| e.len());
        assert_eq!(mapped.into_error(), 1);
    }

    #[test]
    fn test_std_result_conversions() {
        let from_ok: OperationResult<u8, String> = Ok(7).into();
        assert_eq!(from_ok.value(), &7);

        let from_err: OperationResult<u8, String> = Err("bad".to_string()).into();
        let back: std::result::Result<u8, String> = from_err.into();
        assert_eq!(back, Err("bad".to_string()));
    }

    fn first_readable<'a, R, T, E>(result: &'a R) -> Option<&'a T>
    where
        R: ResultOperator<T, E>,
        E: 'a,
    {
        result.try_value()
    }

    #[test]
    fn test_accessors_through_generic_caller() {
        let text = String::from("borrowed");
        let ok: OperationResult<&str, &String> = OperationResult::accept(text.as_str());
        let err: OperationResult<&str, &String> = OperationResult::fail(&text);

        assert_eq!(first_readable(&ok), Some(&"borrowed"));
        assert_eq!(first_readable(&err), None);
        assert_eq!(*err.error(), &text);
        assert_eq!(err.try_error(), Some(&&text));
    }
}
