//! gRPC-shaped error envelope: code, details and metadata.

use std::fmt;

use tonic::{Code, Status};

use super::metadata::Metadata;

/// Status object handed to a gRPC server adapter.
///
/// Every structured failure of a `GResponse` has this shape, so the adapter
/// can put it on the wire as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusObject {
    code: Code,
    details: String,
    metadata: Metadata,
}

impl StatusObject {
    /// Status with empty metadata.
    pub fn new(code: Code, details: impl Into<String>) -> Self {
        Self {
            code,
            details: details.into(),
            metadata: Metadata::new(),
        }
    }

    /// Start a builder; unset fields take their defaults on `build`.
    pub fn builder() -> StatusBuilder {
        StatusBuilder::new()
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Internal code carried in metadata, if any.
    pub fn internal_code(&self) -> Option<i32> {
        self.metadata.internal_code()
    }
}

impl fmt::Display for StatusObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.details)
    }
}

impl From<StatusObject> for Status {
    fn from(status: StatusObject) -> Self {
        Status::with_metadata(
            status.code,
            status.details,
            status.metadata.to_metadata_map(),
        )
    }
}

impl From<&Status> for StatusObject {
    fn from(status: &Status) -> Self {
        Self {
            code: status.code(),
            details: status.message().to_string(),
            metadata: Metadata::from_metadata_map(status.metadata()),
        }
    }
}

impl From<Status> for StatusObject {
    fn from(status: Status) -> Self {
        Self::from(&status)
    }
}

/// Builder for possibly-partial status objects.
///
/// Missing code becomes [`Code::Unknown`], missing details become an empty
/// string and missing metadata becomes empty metadata.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct StatusBuilder {
    code: Option<Code>,
    details: Option<String>,
    metadata: Option<Metadata>,
}

impl StatusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(mut self, code: Code) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn build(self) -> StatusObject {
        StatusObject {
            code: self.code.unwrap_or(Code::Unknown),
            details: self.details.unwrap_or_default(),
            metadata: self.metadata.unwrap_or_default(),
        }
    }
}

impl From<StatusBuilder> for StatusObject {
    fn from(builder: StatusBuilder) -> Self {
        builder.build()
    }
}
