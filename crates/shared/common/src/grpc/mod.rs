//! gRPC-shaped responses and the status envelope they carry.

pub mod metadata;
pub mod response;
pub mod status;

pub use metadata::{Metadata, INTERNAL_CODE_KEY};
pub use response::{GResponse, GrpcFailure};
pub use status::{StatusBuilder, StatusObject};
