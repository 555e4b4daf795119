//! Common utilities shared across all services.
//!
//! This crate provides:
//! - Unified error handling for HTTP and gRPC ([`AppError`], [`DError`])
//! - Transport-shaped responses: [`AResponse`] for HTTP handlers and
//!   [`GResponse`] for gRPC handlers
//! - The gRPC status envelope ([`StatusObject`], [`Metadata`])
//! - Configuration structures and tracing setup

pub mod codes;
pub mod config;
pub mod d_error;
pub mod error;
pub mod grpc;
pub mod response;
pub mod telemetry;

pub use config::{ResponseConfig, ServiceConfig};
pub use d_error::DError;
pub use error::{AppError, AppResult, BoxError, OptionExt};
pub use grpc::{GResponse, GrpcFailure, Metadata, StatusBuilder, StatusObject, INTERNAL_CODE_KEY};
pub use response::{AResponse, ApiResponse};
pub use telemetry::init_tracing;

/// Re-exported so callers need only this crate for the accessor trait.
pub use domain::ResultOperator;
