//! gcloud CLI runner
//!
//! Thin wrapper over the `gcloud` binary for the read-only calls and for
//! credential handling.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::PlatformError;

/// Runs `gcloud` commands against one project
#[derive(Debug, Clone)]
pub struct GcloudCli {
    binary: String,
    project: String,
}

impl GcloudCli {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            binary: "gcloud".to_string(),
            project: project.into(),
        }
    }

    /// Use a different executable (tests, wrappers)
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// Check if gcloud is installed and runnable
    pub fn check_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Run gcloud with `args` and return stdout
    pub fn run<I, S>(&self, args: I) -> Result<String, PlatformError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        tracing::debug!(command = ?cmd, "running gcloud");

        let output = cmd
            .output()
            .map_err(|e| PlatformError::CommandFailed(format!("{}: {}", self.binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PlatformError::CommandFailed(format!(
                "{} exited with {:?}: {}",
                self.binary,
                output.status.code(),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// `gcloud functions list`, one resource name per line
    pub fn list_functions(&self) -> Result<String, PlatformError> {
        self.run([
            "functions",
            "list",
            "--project",
            self.project.as_str(),
            "--format=value(name)",
        ])
    }

    /// `gcloud functions describe` as JSON
    pub fn describe_function(&self, function: &str, region: &str) -> Result<String, PlatformError> {
        self.run([
            "functions",
            "describe",
            function,
            "--region",
            region,
            "--project",
            self.project.as_str(),
            "--format=json",
        ])
    }

    /// Activate a service-account key for subsequent calls
    pub fn activate_service_account(&self, key_file: &Path) -> Result<(), PlatformError> {
        let key_arg = format!("--key-file={}", key_file.display());
        self.run(["auth", "activate-service-account", key_arg.as_str()])?;
        tracing::info!(key_file = %key_file.display(), "activated service account");
        Ok(())
    }

    /// Bearer token of the active account
    pub fn access_token(&self) -> Result<String, PlatformError> {
        let token = self
            .run(["auth", "print-access-token"])
            .map_err(|e| PlatformError::Unauthenticated(e.to_string()))?;
        let token = token.trim();
        if token.is_empty() {
            return Err(PlatformError::Unauthenticated(
                "gcloud returned an empty access token".to_string(),
            ));
        }
        Ok(token.to_string())
    }
}
