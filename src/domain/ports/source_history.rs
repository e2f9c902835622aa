//! Source History Port
//!
//! Scoped content comparison between two repository revisions.

use crate::domain::value_objects::Revision;

/// Errors from the version-control boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// `git` could not be run
    CommandFailed(String),
    /// Revision is not known to the local repository (e.g. shallow clone)
    UnknownRevision(String),
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandFailed(msg) => write!(f, "git failed: {}", msg),
            Self::UnknownRevision(rev) => write!(f, "unknown revision: {}", rev),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Read access to repository history
pub trait SourceHistory {
    /// Revision currently checked out
    fn current_revision(&self) -> Result<Revision, HistoryError>;

    /// Expand a user-supplied revision to its full commit id
    fn resolve_revision(&self, revision: &Revision) -> Result<Revision, HistoryError> {
        Ok(revision.clone())
    }

    /// Whether anything under `path` differs between `from` and `to`.
    ///
    /// Only the subtree is compared, never the whole repository.
    fn path_changed(&self, from: &Revision, to: &Revision, path: &str)
        -> Result<bool, HistoryError>;
}
