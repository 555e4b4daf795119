//! Entity base abstraction: identity by id.

use crate::values::Identifier;

/// A domain object whose identity is its id, not its attributes.
///
/// Two entities with different attributes but the same id are the same
/// entity at different points in time.
pub trait Entity {
    /// Identifier type
    type Id: Identifier;

    /// The entity's identifier.
    fn id(&self) -> &Self::Id;

    /// Check whether `other` is the same entity.
    fn same_identity(&self, other: &Self) -> bool {
        self.id().equals(other.id())
    }
}
