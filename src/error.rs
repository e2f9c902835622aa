//! Error types for funcsync
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{HistoryError, PlatformError, RegistryError};

/// Result type alias for funcsync operations
pub type FuncsyncResult<T> = Result<T, FuncsyncError>;

/// Main error type for funcsync operations
#[derive(Error, Debug)]
pub enum FuncsyncError {
    /// The inventory listing call failed
    #[error("failed to list deployed functions: {0}")]
    Listing(#[source] PlatformError),

    /// A resource identifier or deployed URL did not have the expected shape
    #[error("malformed identifier '{value}': expected {expected}")]
    MalformedIdentifier { value: String, expected: &'static str },

    /// Describing a single instance failed
    #[error("failed to describe {function} in {region}: {source}")]
    Describe {
        function: String,
        region: String,
        #[source]
        source: PlatformError,
    },

    /// Scoped diff between two revisions failed
    #[error("failed to diff {path} between {from} and {to}: {source}")]
    History {
        path: String,
        from: String,
        to: String,
        #[source]
        source: HistoryError,
    },

    /// Patch call failed
    #[error("failed to dispatch redeploy of {function} in {region}: {source}")]
    Dispatch {
        function: String,
        region: String,
        #[source]
        source: PlatformError,
    },

    /// Managed functions could not be enumerated
    #[error("failed to enumerate managed functions: {0}")]
    Registry(#[from] RegistryError),

    /// No platform project could be selected for the run
    #[error("no project configured for branch '{branch}' and no default_project set")]
    NoProject { branch: String },

    /// Current revision could not be determined
    #[error("could not determine current revision: {0}")]
    Revision(String),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
