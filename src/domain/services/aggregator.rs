//! Failure aggregation
//!
//! Collapses every per-instance outcome of a run into one binary verdict.

use std::fmt;

use super::reconciler::RegionFailure;
use crate::domain::entities::OperationOutcome;

/// One failure listed in the final report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    /// `function (region)` the failure belongs to
    pub instance: String,
    /// Operation name, when the failure came from a dispatched operation
    pub operation: Option<String>,
    pub detail: String,
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operation {
            Some(op) => write!(f, "{} [{}]: {}", self.instance, op, self.detail),
            None => write!(f, "{}: {}", self.instance, self.detail),
        }
    }
}

/// Run-level verdict; there is no partial success
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure(Vec<FailureReport>),
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success)
    }

    /// Process exit code for this verdict
    pub fn exit_code(&self) -> u8 {
        match self {
            Verdict::Success => 0,
            Verdict::Failure(_) => 1,
        }
    }

    pub fn failures(&self) -> &[FailureReport] {
        match self {
            Verdict::Success => &[],
            Verdict::Failure(reports) => reports,
        }
    }
}

/// Aggregate region failures and operation outcomes, preserving their order.
pub fn aggregate(region_failures: &[RegionFailure], outcomes: &[OperationOutcome]) -> Verdict {
    let regions = region_failures.iter().map(|failure| FailureReport {
        instance: failure.instance.to_string(),
        operation: None,
        detail: failure.error.to_string(),
    });

    let operations = outcomes
        .iter()
        .filter(|outcome| !outcome.is_success())
        .map(|outcome| FailureReport {
            instance: outcome.operation.instance.to_string(),
            operation: Some(outcome.operation.name.clone()),
            detail: outcome.status.to_string(),
        });

    let reports: Vec<FailureReport> = regions.chain(operations).collect();
    if reports.is_empty() {
        Verdict::Success
    } else {
        Verdict::Failure(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        DeployedInstance, DispatchedOperation, OperationError, OperationStatus,
    };
    use crate::error::FuncsyncError;

    fn outcome(function: &str, op: &str, status: OperationStatus) -> OperationOutcome {
        OperationOutcome {
            operation: DispatchedOperation {
                instance: DeployedInstance::new(function, "us-east1"),
                name: op.to_string(),
            },
            status,
            polls: 1,
        }
    }

    #[test]
    fn nothing_to_aggregate_is_success() {
        let verdict = aggregate(&[], &[]);
        assert!(verdict.is_success());
        assert_eq!(verdict.exit_code(), 0);
    }

    #[test]
    fn all_succeeded_is_success() {
        let verdict = aggregate(
            &[],
            &[
                outcome("billing", "operations/1", OperationStatus::Succeeded),
                outcome("reports", "operations/2", OperationStatus::Succeeded),
            ],
        );
        assert_eq!(verdict, Verdict::Success);
    }

    #[test]
    fn any_operation_error_fails_the_run_and_lists_it() {
        let verdict = aggregate(
            &[],
            &[
                outcome(
                    "billing",
                    "operations/1",
                    OperationStatus::Failed(OperationError::new("Build failed").with_code(3)),
                ),
                outcome("reports", "operations/2", OperationStatus::Succeeded),
            ],
        );
        assert_eq!(verdict.exit_code(), 1);
        let failures = verdict.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].to_string(),
            "billing (us-east1) [operations/1]: failed: [3] Build failed"
        );
    }

    #[test]
    fn region_failures_come_first() {
        let region = RegionFailure {
            instance: DeployedInstance::new("ledger", "eu-west1"),
            error: FuncsyncError::Revision("boom".to_string()),
        };
        let verdict = aggregate(
            &[region],
            &[outcome("billing", "operations/1", OperationStatus::TimedOut)],
        );
        let failures = verdict.failures();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].instance, "ledger (eu-west1)");
        assert!(failures[0].operation.is_none());
        assert_eq!(failures[1].operation.as_deref(), Some("operations/1"));
    }
}
