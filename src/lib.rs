//! funcsync - keep source-repository Cloud Functions on their branch's latest commit
//!
//! Functions deployed from a source repository are pinned to the commit their
//! branch pointed at when they were deployed. funcsync lists every deployed
//! instance, decides per region whether the function's own subtree changed
//! since that commit, forces the platform to re-resolve the branch for stale
//! instances, and waits for the resulting operations.
//!
//! ## Layers
//!
//! - `domain` - entities, ports, and the reconciliation rules
//! - `application` - the refresh use case and its steps
//! - `infrastructure` - gcloud, git, and filesystem adapters, event sinks
//! - `config` - layered configuration
//! - `presentation` - CLI definition, wiring, and rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{RefreshOptions, RefreshReport, RefreshUseCase};
pub use config::Config;
pub use domain::services::Verdict;
pub use error::{FuncsyncError, FuncsyncResult};
