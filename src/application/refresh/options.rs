//! Refresh Options
//!
//! Configuration types for a reconciliation run.

use crate::application::tracker::PollOptions;
use crate::domain::value_objects::Revision;

/// Options for the refresh use case
#[derive(Debug, Clone)]
pub struct RefreshOptions {
    /// Platform project the run targets (reported only; the platform adapter
    /// is already bound to it)
    pub project: String,
    /// Revision to reconcile against; the repository's checkout when `None`
    pub revision: Option<Revision>,
    /// Decide only, never dispatch
    pub dry_run: bool,
    /// Operation polling behaviour
    pub poll: PollOptions,
}

impl RefreshOptions {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            revision: None,
            dry_run: false,
            poll: PollOptions::default(),
        }
    }

    pub fn with_revision(mut self, revision: impl Into<Revision>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_poll(mut self, poll: PollOptions) -> Self {
        self.poll = poll;
        self
    }
}
