//! Git-backed source history

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::{HistoryError, SourceHistory};
use crate::domain::value_objects::Revision;

/// Reads history from a local git checkout
#[derive(Debug, Clone)]
pub struct GitHistory {
    root: PathBuf,
}

impl GitHistory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn git(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.root).stdin(Stdio::null());
        cmd
    }

    fn capture(&self, args: &[&str]) -> Result<String, HistoryError> {
        let output = self
            .git()
            .args(args)
            .output()
            .map_err(|e| HistoryError::CommandFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HistoryError::CommandFailed(stderr.trim().to_string()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Name of the checked-out branch, `None` when detached
    pub fn current_branch(&self) -> Result<Option<String>, HistoryError> {
        let branch = self.capture(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(Some(branch).filter(|b| b != "HEAD" && !b.is_empty()))
    }
}

impl SourceHistory for GitHistory {
    fn current_revision(&self) -> Result<Revision, HistoryError> {
        self.capture(&["rev-parse", "HEAD"]).map(Revision::new)
    }

    fn resolve_revision(&self, revision: &Revision) -> Result<Revision, HistoryError> {
        let spec = format!("{}^{{commit}}", revision.as_str());
        self.capture(&["rev-parse", "--verify", "--quiet", &spec])
            .map(Revision::new)
            .map_err(|_| HistoryError::UnknownRevision(revision.to_string()))
    }

    fn path_changed(
        &self,
        from: &Revision,
        to: &Revision,
        path: &str,
    ) -> Result<bool, HistoryError> {
        let output = self
            .git()
            .args(["diff", "--quiet", from.as_str(), to.as_str(), "--", path])
            .stdout(Stdio::null())
            .output()
            .map_err(|e| HistoryError::CommandFailed(e.to_string()))?;

        // `diff --quiet` exits 1 when there are differences
        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                if stderr.contains("bad revision") || stderr.contains("unknown revision") {
                    Err(HistoryError::UnknownRevision(from.to_string()))
                } else {
                    Err(HistoryError::CommandFailed(stderr.trim().to_string()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args([
                "-c",
                "user.name=funcsync",
                "-c",
                "user.email=funcsync@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    fn commit_all(dir: &Path, message: &str) -> Revision {
        git(dir, &["add", "-A"]);
        git(dir, &["commit", "-q", "-m", message]);
        GitHistory::new(dir).current_revision().unwrap()
    }

    /// Repo with `functions/billing` and `functions/reports`, then a second
    /// commit touching only billing.
    fn repo() -> (TempDir, Revision, Revision) {
        let dir = tempfile::tempdir().unwrap();
        git(dir.path(), &["init", "-q"]);
        fs::create_dir_all(dir.path().join("functions/billing")).unwrap();
        fs::create_dir_all(dir.path().join("functions/reports")).unwrap();
        fs::write(dir.path().join("functions/billing/main.py"), "v1\n").unwrap();
        fs::write(dir.path().join("functions/reports/main.py"), "v1\n").unwrap();
        let first = commit_all(dir.path(), "initial");

        fs::write(dir.path().join("functions/billing/main.py"), "v2\n").unwrap();
        let second = commit_all(dir.path(), "billing v2");
        (dir, first, second)
    }

    #[test]
    fn current_revision_is_head() {
        let (dir, _, second) = repo();
        let history = GitHistory::new(dir.path());
        assert_eq!(history.current_revision().unwrap(), second);
        assert_eq!(history.current_revision().unwrap().as_str().len(), 40);
    }

    #[test]
    fn path_changed_is_scoped_to_subtree() {
        let (dir, first, second) = repo();
        let history = GitHistory::new(dir.path());

        assert!(history
            .path_changed(&first, &second, "functions/billing")
            .unwrap());
        assert!(!history
            .path_changed(&first, &second, "functions/reports")
            .unwrap());
    }

    #[test]
    fn resolve_revision_expands_abbreviation() {
        let (dir, first, _) = repo();
        let history = GitHistory::new(dir.path());

        let resolved = history.resolve_revision(&Revision::new(first.short())).unwrap();
        assert_eq!(resolved, first);
        assert!(matches!(
            history.resolve_revision(&Revision::new("no-such-branch")),
            Err(HistoryError::UnknownRevision(_))
        ));
    }

    #[test]
    fn unknown_revision_is_reported() {
        let (dir, _, second) = repo();
        let history = GitHistory::new(dir.path());
        let missing = Revision::new("0000000000000000000000000000000000000000");

        let err = history
            .path_changed(&missing, &second, "functions/billing")
            .unwrap_err();
        assert!(matches!(err, HistoryError::UnknownRevision(_) | HistoryError::CommandFailed(_)));
    }

    #[test]
    fn not_a_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GitHistory::new(dir.path()).current_revision().is_err());
    }
}
