//! Reconcile Event Port
//!
//! Observable progress of a run: console progress, NDJSON for CI, or nothing.

use crate::domain::entities::{Decision, DeployedInstance, OperationStatus};
use crate::domain::value_objects::Revision;

/// Event emitted during a run
#[derive(Debug, Clone)]
pub enum ReconcileEvent {
    /// Run started
    Started {
        project: String,
        revision: Revision,
        managed_count: usize,
    },

    /// Inventory listing completed
    InventoryCollected {
        function_count: usize,
        instance_count: usize,
    },

    /// Managed function has no deployed instance anywhere
    FunctionNotDeployed { function: String },

    /// Decision made for one instance
    Decided { decision: Decision },

    /// Reconciling one instance failed; other instances continue
    RegionFailed {
        instance: DeployedInstance,
        error: String,
    },

    /// Redeploy accepted by the platform
    Dispatched {
        instance: DeployedInstance,
        operation: String,
    },

    /// Operation reached a terminal state
    OperationFinished {
        instance: DeployedInstance,
        operation: String,
        status: OperationStatus,
    },

    /// Run completed
    Completed {
        redeployed: usize,
        skipped: usize,
        failed: usize,
    },
}

/// Trait for receiving reconcile events
///
/// Implementations:
/// - ConsoleEventSink: human-readable progress
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait ReconcileEventSink: Send + Sync {
    /// Handle a reconcile event
    fn on_event(&self, event: ReconcileEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ReconcileEventSink for NoopEventSink {
    fn on_event(&self, _event: ReconcileEvent) {}
}
