//! Identifier contract for entities.

use std::fmt::Display;
use std::hash::Hash;

/// Anything that can identify an entity.
///
/// Two entities are the same entity exactly when their identifiers are equal.
pub trait Identifier: Clone + Eq + Hash + Display {
    /// Compare with another identifier of the same kind.
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Identifier for String {}

impl Identifier for u64 {}

impl Identifier for i64 {}
