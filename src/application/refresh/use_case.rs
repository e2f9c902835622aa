//! Refresh Use Case
//!
//! Orchestrates a reconciliation run:
//! 1. Enumerate managed functions
//! 2. Collect the deployed inventory
//! 3. Reconcile each managed function, region by region
//! 4. Dispatch a re-resolution per Redeploy decision
//! 5. Wait for every dispatched operation
//! 6. Aggregate everything into one verdict
//!
//! Listing and dispatch failures abort the run with an error. Per-region
//! reconciliation failures and failed operations only affect the verdict.

use crate::application::dispatch::Dispatcher;
use crate::application::inventory::collect_inventory;
use crate::application::tracker::OperationTracker;
use crate::domain::ports::{
    FunctionPlatform, FunctionRegistry, ReconcileEvent, ReconcileEventSink, SourceHistory,
};
use crate::domain::services::{aggregate, FunctionReconciliation, Reconciler};
use crate::error::{FuncsyncError, FuncsyncResult};

use super::options::RefreshOptions;
use super::result::RefreshReport;

/// Refresh use case, parameterized by its ports
pub struct RefreshUseCase<P, H, R>
where
    P: FunctionPlatform,
    H: SourceHistory,
    R: FunctionRegistry,
{
    platform: P,
    history: H,
    registry: R,
}

impl<P, H, R> RefreshUseCase<P, H, R>
where
    P: FunctionPlatform,
    H: SourceHistory,
    R: FunctionRegistry,
{
    pub fn new(platform: P, history: H, registry: R) -> Self {
        Self {
            platform,
            history,
            registry,
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Execute one run, reporting progress to `events`
    pub fn execute(
        &self,
        options: &RefreshOptions,
        events: &dyn ReconcileEventSink,
    ) -> FuncsyncResult<RefreshReport> {
        let revision = match &options.revision {
            Some(revision) => self.history.resolve_revision(revision),
            None => self.history.current_revision(),
        }
        .map_err(|e| FuncsyncError::Revision(e.to_string()))?;

        let managed = self.registry.managed_functions()?;
        events.on_event(ReconcileEvent::Started {
            project: options.project.clone(),
            revision: revision.clone(),
            managed_count: managed.len(),
        });

        let inventory = collect_inventory(&self.platform)?;
        events.on_event(ReconcileEvent::InventoryCollected {
            function_count: inventory.function_count(),
            instance_count: inventory.instance_count(),
        });

        let mut report = RefreshReport::new(revision);
        let reconciler = Reconciler::new(&self.platform, &self.history);

        for function in &managed {
            let path = self.registry.function_path(function);
            match reconciler.reconcile_function(function, &path, &inventory, &report.revision) {
                FunctionReconciliation::NotDeployed => {
                    tracing::info!(function = %function, "managed function is not deployed");
                    events.on_event(ReconcileEvent::FunctionNotDeployed {
                        function: function.clone(),
                    });
                    report.not_deployed.push(function.clone());
                }
                FunctionReconciliation::Regions(results) => {
                    for result in results {
                        match result {
                            Ok(decision) => {
                                events.on_event(ReconcileEvent::Decided {
                                    decision: decision.clone(),
                                });
                                report.decisions.push(decision);
                            }
                            Err(failure) => {
                                tracing::warn!(
                                    instance = %failure.instance,
                                    error = %failure.error,
                                    "reconciliation failed"
                                );
                                events.on_event(ReconcileEvent::RegionFailed {
                                    instance: failure.instance.clone(),
                                    error: failure.error.to_string(),
                                });
                                report.region_failures.push(failure);
                            }
                        }
                    }
                }
            }
        }

        if !options.dry_run {
            let dispatcher = Dispatcher::new(&self.platform);
            for decision in report.decisions.iter().filter(|d| d.is_redeploy()) {
                let operation = dispatcher.dispatch(&decision.instance)?;
                events.on_event(ReconcileEvent::Dispatched {
                    instance: operation.instance.clone(),
                    operation: operation.name.clone(),
                });
                report.dispatched.push(operation);
            }

            let tracker = OperationTracker::new(&self.platform, options.poll);
            report.outcomes = tracker.wait_all(&report.dispatched, |outcome| {
                events.on_event(ReconcileEvent::OperationFinished {
                    instance: outcome.operation.instance.clone(),
                    operation: outcome.operation.name.clone(),
                    status: outcome.status.clone(),
                });
            });
        }

        report.verdict = aggregate(&report.region_failures, &report.outcomes);
        events.on_event(ReconcileEvent::Completed {
            redeployed: report.dispatched.len(),
            skipped: report.skip_count(),
            failed: report.verdict.failures().len(),
        });

        Ok(report)
    }
}
