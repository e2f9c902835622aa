//! Revision Value Object
//!
//! A commit identifier in the backing repository, either the current
//! checkout or the one a deployed instance was resolved to.

use std::fmt;

use crate::error::FuncsyncError;

/// Commit identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    /// Path segment that precedes the commit in a resolved source URL
    const MARKER: &'static str = "revisions";
    const EXPECTED: &'static str = ".../revisions/{commit}/...";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    /// Extract the resolved commit from a `deployedUrl`, e.g.
    /// `https://source.developers.google.com/projects/p/repos/r/revisions/abc123/paths/billing`.
    pub fn from_deployed_url(url: &str) -> Result<Self, FuncsyncError> {
        let malformed = || FuncsyncError::MalformedIdentifier {
            value: url.to_string(),
            expected: Self::EXPECTED,
        };

        let mut segments = url.trim().split('/');
        segments
            .by_ref()
            .find(|segment| *segment == Self::MARKER)
            .ok_or_else(malformed)?;

        match segments.next() {
            Some(commit) if !commit.is_empty() => Ok(Self::new(commit)),
            _ => Err(malformed()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether both ids name the same commit, allowing one to be an
    /// abbreviation (at least 7 hex digits) of the other
    pub fn same_commit(&self, other: &Revision) -> bool {
        const MIN_ABBREV: usize = 7;

        let (a, b) = (self.0.to_ascii_lowercase(), other.0.to_ascii_lowercase());
        if a == b {
            return true;
        }
        let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        short.len() >= MIN_ABBREV && long.starts_with(&short)
    }

    /// Abbreviated form for progress output
    pub fn short(&self) -> &str {
        self.0.get(..7).unwrap_or(&self.0)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Revision {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Revision {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
