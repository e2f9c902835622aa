//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `gcloud/` - Cloud Functions platform (gcloud CLI + REST)
//! - `git` - Source history from a local checkout
//! - `registry` - Managed functions from the functions directory
//! - `events/` - Console and NDJSON event sinks

pub mod events;
pub mod gcloud;
pub mod git;
pub mod registry;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use gcloud::{GcloudCli, GcloudPlatform};
pub use git::GitHistory;
pub use registry::DirectoryRegistry;
