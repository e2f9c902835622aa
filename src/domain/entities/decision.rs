//! Reconciliation decisions
//!
//! Derived per (function, region) during a run; never persisted.

use std::fmt;

use super::DeployedInstance;
use crate::domain::value_objects::Revision;

/// What to do with a deployed instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Skip,
    Redeploy,
}

/// Why a decision was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Instance has no resolved source URL
    NotSourceControlled,
    /// Deployed revision equals the current revision
    AlreadyCurrent,
    /// Revisions differ but the function's own path did not change
    NoRelevantChange,
    /// Function's path changed between the deployed and current revisions
    SourceChanged,
}

impl Reason {
    /// Stable identifier used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::NotSourceControlled => "not_source_controlled",
            Reason::AlreadyCurrent => "already_current",
            Reason::NoRelevantChange => "no_relevant_change",
            Reason::SourceChanged => "source_changed",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Reason::NotSourceControlled => "not deployed from a source repository",
            Reason::AlreadyCurrent => "already at current revision",
            Reason::NoRelevantChange => "no changes under function path",
            Reason::SourceChanged => "function source changed",
        };
        f.write_str(text)
    }
}

/// Outcome of reconciling one deployed instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub instance: DeployedInstance,
    pub action: Action,
    pub reason: Reason,
    /// Revision the instance currently runs, when known
    pub deployed_revision: Option<Revision>,
}

impl Decision {
    pub fn skip(instance: DeployedInstance, reason: Reason) -> Self {
        Self {
            instance,
            action: Action::Skip,
            reason,
            deployed_revision: None,
        }
    }

    pub fn redeploy(instance: DeployedInstance, deployed_revision: Revision) -> Self {
        Self {
            instance,
            action: Action::Redeploy,
            reason: Reason::SourceChanged,
            deployed_revision: Some(deployed_revision),
        }
    }

    pub fn with_deployed_revision(mut self, revision: Revision) -> Self {
        self.deployed_revision = Some(revision);
        self
    }

    pub fn is_redeploy(&self) -> bool {
        self.action == Action::Redeploy
    }
}
