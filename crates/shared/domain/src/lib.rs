//! Domain layer - Core business abstractions and result types.
//!
//! This crate contains pure domain building blocks with no transport
//! dependencies:
//! - [`Entity`] and [`ValueObject`] base abstractions
//! - [`EntityId`] and the [`Identifier`] contract
//! - [`OperationResult`], the success-or-failure container, and its
//!   transport-free specialisation [`Result`]
//!
//! The gRPC and HTTP flavoured responses live in the `common` crate.

pub mod constants;
pub mod entity;
pub mod error;
pub mod operators;
pub mod value_object;
pub mod values;

pub use constants::*;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use operators::{OperationResult, Result, ResultOperator};
pub use value_object::{check_rules, ValueObject};
pub use values::{EntityId, Identifier};
