//! Function Platform Port
//!
//! The four remote calls reconciliation needs: list, describe, patch, and
//! operation status. All are blocking.

use crate::domain::entities::{InstanceDescriptor, Operation};

/// Errors from the platform boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// CLI invocation failed to start or exited non-zero
    CommandFailed(String),
    /// HTTP request could not be sent or completed
    Transport(String),
    /// Server answered with a non-success status
    Http { status: u16, body: String },
    /// Response body was not what we expected
    InvalidResponse(String),
    /// No access token could be acquired
    Unauthenticated(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandFailed(msg) => write!(f, "command failed: {}", msg),
            Self::Transport(msg) => write!(f, "transport error: {}", msg),
            Self::Http { status, body } => write!(f, "HTTP {}: {}", status, body),
            Self::InvalidResponse(msg) => write!(f, "invalid response: {}", msg),
            Self::Unauthenticated(msg) => write!(f, "unauthenticated: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {}

/// Deployed function platform
///
/// Implementations:
/// - `GcloudPlatform` - `gcloud` CLI for reads, REST API for writes
/// - in-memory fakes in tests
///
/// `Send + Sync` so operations can be polled from scoped threads.
pub trait FunctionPlatform: Send + Sync {
    /// List resource names of every deployed instance, one per line as the
    /// platform prints them (trailing terminators allowed).
    fn list_instances(&self) -> Result<Vec<String>, PlatformError>;

    /// Describe one instance
    fn describe(&self, function: &str, region: &str) -> Result<InstanceDescriptor, PlatformError>;

    /// Partially update `sourceRepository.url` of an instance using the
    /// given descriptor as body; returns the started operation.
    fn patch_source(
        &self,
        function: &str,
        region: &str,
        body: &InstanceDescriptor,
    ) -> Result<Operation, PlatformError>;

    /// Fetch the current status of an operation
    fn get_operation(&self, name: &str) -> Result<Operation, PlatformError>;
}

impl<T: FunctionPlatform + ?Sized> FunctionPlatform for &T {
    fn list_instances(&self) -> Result<Vec<String>, PlatformError> {
        (**self).list_instances()
    }

    fn describe(&self, function: &str, region: &str) -> Result<InstanceDescriptor, PlatformError> {
        (**self).describe(function, region)
    }

    fn patch_source(
        &self,
        function: &str,
        region: &str,
        body: &InstanceDescriptor,
    ) -> Result<Operation, PlatformError> {
        (**self).patch_source(function, region, body)
    }

    fn get_operation(&self, name: &str) -> Result<Operation, PlatformError> {
        (**self).get_operation(name)
    }
}
