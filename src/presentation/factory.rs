//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::RefreshUseCase;
use crate::config::Config;
use crate::infrastructure::gcloud::{GcloudCli, GcloudPlatform};
use crate::infrastructure::{DirectoryRegistry, GitHistory};

/// Type alias for the concrete RefreshUseCase with all dependencies
pub type ConcreteRefreshUseCase = RefreshUseCase<GcloudPlatform, GitHistory, DirectoryRegistry>;

/// Platform adapter bound to `project`, honoring `api_endpoint`
pub fn create_platform(config: &Config, project: &str) -> GcloudPlatform {
    let platform = GcloudPlatform::new(GcloudCli::new(project));
    match &config.api_endpoint {
        Some(endpoint) => platform.with_endpoint(endpoint.trim_end_matches('/')),
        None => platform,
    }
}

/// Create a refresh use case for `project` with all dependencies wired up
pub fn create_refresh_use_case(config: &Config, project: &str) -> ConcreteRefreshUseCase {
    let history = GitHistory::new(&config.repository_root);
    let registry = DirectoryRegistry::new(&config.repository_root, &config.functions_dir);
    RefreshUseCase::new(create_platform(config, project), history, registry)
}
