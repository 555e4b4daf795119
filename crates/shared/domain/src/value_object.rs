//! Value object base abstraction: identity by value.

use std::fmt::Debug;

use validator::Validate;

use crate::error::{DomainError, DomainResult};

/// A domain object defined entirely by its attributes.
///
/// Value objects are immutable; "changing" one means building a new one.
pub trait ValueObject: Clone + PartialEq + Debug {
    /// Structural equality.
    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Invariant check run by [`validated`](Self::validated).
    fn validate(&self) -> DomainResult<()> {
        Ok(())
    }

    /// Return `self` if its invariants hold.
    fn validated(self) -> DomainResult<Self> {
        ValueObject::validate(&self)?;
        Ok(self)
    }
}

/// Run `validator` rules and map failures into [`DomainError::Validation`].
///
/// Intended as the body of [`ValueObject::validate`] for types that derive
/// `Validate`.
pub fn check_rules<V: Validate>(value: &V) -> DomainResult<()> {
    value.validate().map_err(DomainError::from)
}
