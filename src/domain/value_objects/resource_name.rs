//! Function Resource Name Value Object
//!
//! Structured form of the identifiers returned by the listing call:
//! `projects/{project}/locations/{region}/functions/{function}`.

use std::fmt;
use std::str::FromStr;

use crate::error::FuncsyncError;

/// Parsed function resource name
///
/// Every field is validated non-empty; any other shape is a
/// `MalformedIdentifier` rather than a silently misindexed segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceName {
    project: String,
    region: String,
    function: String,
}

impl ResourceName {
    /// Shape accepted by [`ResourceName::parse`], used in error messages
    pub const EXPECTED: &'static str = "projects/{project}/locations/{region}/functions/{name}";

    pub fn new(
        project: impl Into<String>,
        region: impl Into<String>,
        function: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            region: region.into(),
            function: function.into(),
        }
    }

    /// Parse a resource name, tolerating surrounding whitespace and a
    /// trailing line terminator from raw command output.
    pub fn parse(raw: &str) -> Result<Self, FuncsyncError> {
        let trimmed = raw.trim();
        let malformed = || FuncsyncError::MalformedIdentifier {
            value: trimmed.to_string(),
            expected: Self::EXPECTED,
        };

        let segments: Vec<&str> = trimmed.split('/').collect();
        match segments.as_slice() {
            ["projects", project, "locations", region, "functions", function]
                if !project.is_empty() && !region.is_empty() && !function.is_empty() =>
            {
                Ok(Self::new(*project, *region, *function))
            }
            _ => Err(malformed()),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn function(&self) -> &str {
        &self.function
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "projects/{}/locations/{}/functions/{}",
            self.project, self.region, self.function
        )
    }
}

impl FromStr for ResourceName {
    type Err = FuncsyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
