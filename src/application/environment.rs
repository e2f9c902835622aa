//! Target environment selection
//!
//! Maps the branch being reconciled to the platform project it deploys to.

use std::collections::BTreeMap;

use crate::error::{FuncsyncError, FuncsyncResult};

/// Pick the project for a run.
///
/// Precedence: explicit project, then the branch's entry in
/// `environments`, then `default_project`.
pub fn select_project(
    explicit: Option<&str>,
    branch: Option<&str>,
    environments: &BTreeMap<String, String>,
    default_project: Option<&str>,
) -> FuncsyncResult<String> {
    if let Some(project) = explicit.filter(|p| !p.is_empty()) {
        return Ok(project.to_string());
    }

    if let Some(project) = branch.and_then(|b| environments.get(b)) {
        return Ok(project.clone());
    }

    default_project
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .ok_or_else(|| FuncsyncError::NoProject {
            branch: branch.unwrap_or("<unknown>").to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environments() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("master".to_string(), "acme-prod".to_string()),
            ("staging".to_string(), "acme-staging".to_string()),
        ])
    }

    #[test]
    fn explicit_project_wins() {
        let project =
            select_project(Some("acme-sandbox"), Some("master"), &environments(), None).unwrap();
        assert_eq!(project, "acme-sandbox");
    }

    #[test]
    fn branch_mapping_is_used() {
        let project =
            select_project(None, Some("staging"), &environments(), Some("acme-dev")).unwrap();
        assert_eq!(project, "acme-staging");
    }

    #[test]
    fn unmapped_branch_falls_back_to_default() {
        let project =
            select_project(None, Some("feature/x"), &environments(), Some("acme-dev")).unwrap();
        assert_eq!(project, "acme-dev");
    }

    #[test]
    fn no_match_and_no_default_is_an_error() {
        let err = select_project(None, Some("feature/x"), &environments(), None).unwrap_err();
        assert!(matches!(err, FuncsyncError::NoProject { ref branch } if branch == "feature/x"));
    }
}
