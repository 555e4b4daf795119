//! Identity values for entities.

pub mod entity_id;
pub mod identifier;

pub use entity_id::EntityId;
pub use identifier::Identifier;
