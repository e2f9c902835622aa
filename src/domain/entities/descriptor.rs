//! Instance Descriptor
//!
//! Full state of one deployed instance as returned by the describe call.
//! Only the fields reconciliation needs are typed; everything else is kept
//! verbatim so the descriptor can be sent back as a patch body unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Source repository binding of a function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRepository {
    /// Moving-reference URL the platform resolves on deploy
    #[serde(default)]
    pub url: String,
    /// Concrete revision the reference resolved to (server-computed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SourceRepository {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            deployed_url: None,
            extra: Map::new(),
        }
    }

    pub fn with_deployed_url(mut self, deployed_url: impl Into<String>) -> Self {
        self.deployed_url = Some(deployed_url.into());
        self
    }
}

/// Describe output for one function instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_repository: Option<SourceRepository>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InstanceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_repository: None,
            extra: Map::new(),
        }
    }

    pub fn with_source_repository(mut self, repo: SourceRepository) -> Self {
        self.source_repository = Some(repo);
        self
    }

    /// Resolved source URL, if the instance is source-controlled.
    ///
    /// An empty string counts as absent.
    pub fn deployed_url(&self) -> Option<&str> {
        self.source_repository
            .as_ref()
            .and_then(|repo| repo.deployed_url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }

    /// Copy of this descriptor with `sourceRepository.deployedUrl` removed.
    ///
    /// Sending the descriptor back without the resolved URL makes the
    /// platform re-resolve the moving reference.
    pub fn without_deployed_url(&self) -> Self {
        let mut patched = self.clone();
        if let Some(repo) = patched.source_repository.as_mut() {
            repo.deployed_url = None;
        }
        patched
    }
}
