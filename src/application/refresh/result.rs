//! Refresh Result
//!
//! Everything a run decided and observed, plus its verdict.

use crate::domain::entities::{Decision, DispatchedOperation, OperationOutcome};
use crate::domain::services::{RegionFailure, Verdict};
use crate::domain::value_objects::Revision;

/// Result of a refresh run
#[derive(Debug)]
pub struct RefreshReport {
    /// Revision the run reconciled against
    pub revision: Revision,
    /// Managed functions with no deployed instance
    pub not_deployed: Vec<String>,
    /// One decision per successfully reconciled instance
    pub decisions: Vec<Decision>,
    /// Instances whose reconciliation failed
    pub region_failures: Vec<RegionFailure>,
    /// Operations started by redeploys, in dispatch order
    pub dispatched: Vec<DispatchedOperation>,
    /// Terminal outcome per dispatched operation, same order
    pub outcomes: Vec<OperationOutcome>,
    pub verdict: Verdict,
}

impl RefreshReport {
    pub fn new(revision: Revision) -> Self {
        Self {
            revision,
            not_deployed: Vec::new(),
            decisions: Vec::new(),
            region_failures: Vec::new(),
            dispatched: Vec::new(),
            outcomes: Vec::new(),
            verdict: Verdict::Success,
        }
    }

    pub fn is_success(&self) -> bool {
        self.verdict.is_success()
    }

    pub fn redeploy_count(&self) -> usize {
        self.decisions.iter().filter(|d| d.is_redeploy()).count()
    }

    pub fn skip_count(&self) -> usize {
        self.decisions.len() - self.redeploy_count()
    }

    pub fn exit_code(&self) -> u8 {
        self.verdict.exit_code()
    }
}
