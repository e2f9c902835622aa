//! Platform operations
//!
//! Asynchronous handles returned by the patch call and polled until done.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::DeployedInstance;

/// Error payload carried by a finished operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Value>,
}

impl OperationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "[{}] {}", code, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Operation status as returned by the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OperationError>,
}

impl Operation {
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
            error: None,
        }
    }

    pub fn succeeded(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: true,
            error: None,
        }
    }

    pub fn failed(name: impl Into<String>, error: OperationError) -> Self {
        Self {
            name: name.into(),
            done: true,
            error: Some(error),
        }
    }
}

/// An operation started by a redeploy, tied back to its instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedOperation {
    pub instance: DeployedInstance,
    pub name: String,
}

/// Terminal state of a tracked operation
#[derive(Debug, Clone, PartialEq)]
pub enum OperationStatus {
    Succeeded,
    /// Platform finished the operation with an error payload
    Failed(OperationError),
    /// The status call itself failed
    PollFailed(String),
    /// Still pending when the configured poll timeout expired
    TimedOut,
}

impl OperationStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationStatus::Succeeded)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationStatus::Succeeded => f.write_str("succeeded"),
            OperationStatus::Failed(err) => write!(f, "failed: {}", err),
            OperationStatus::PollFailed(msg) => write!(f, "status check failed: {}", msg),
            OperationStatus::TimedOut => f.write_str("timed out waiting for completion"),
        }
    }
}

/// Final record for one dispatched operation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationOutcome {
    pub operation: DispatchedOperation,
    pub status: OperationStatus,
    /// Number of status calls made
    pub polls: u32,
}

impl OperationOutcome {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
