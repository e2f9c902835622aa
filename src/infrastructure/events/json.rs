//! JSON Event Sink
//!
//! Outputs reconcile events as NDJSON for CI/automation consumption.

use crate::domain::entities::{Action, OperationStatus};
use crate::domain::ports::{ReconcileEvent, ReconcileEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    /// Add an RFC 3339 `timestamp` field to every event
    timestamps: bool,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            timestamps: true,
        }
    }

    pub fn without_timestamps(mut self) -> Self {
        self.timestamps = false;
        self
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if self.timestamps {
            if let Some(object) = event.as_object_mut() {
                object.insert(
                    "timestamp".to_string(),
                    chrono::Utc::now().to_rfc3339().into(),
                );
            }
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn status_fields(status: &OperationStatus) -> (&'static str, Option<serde_json::Value>) {
    match status {
        OperationStatus::Succeeded => ("succeeded", None),
        OperationStatus::Failed(err) => (
            "failed",
            Some(serde_json::to_value(err).unwrap_or_else(|_| err.to_string().into())),
        ),
        OperationStatus::PollFailed(msg) => ("poll_failed", Some(msg.clone().into())),
        OperationStatus::TimedOut => ("timed_out", None),
    }
}

impl ReconcileEventSink for JsonEventSink {
    fn on_event(&self, event: ReconcileEvent) {
        let json = match event {
            ReconcileEvent::Started {
                project,
                revision,
                managed_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "run",
                    "project": project,
                    "revision": revision.as_str(),
                    "managed_count": managed_count,
                })
            }

            ReconcileEvent::InventoryCollected {
                function_count,
                instance_count,
            } => {
                serde_json::json!({
                    "event": "inventory",
                    "command": "run",
                    "functions": function_count,
                    "instances": instance_count,
                })
            }

            ReconcileEvent::FunctionNotDeployed { function } => {
                serde_json::json!({
                    "event": "not_deployed",
                    "command": "run",
                    "function": function,
                })
            }

            ReconcileEvent::Decided { decision } => {
                let action = match decision.action {
                    Action::Skip => "skip",
                    Action::Redeploy => "redeploy",
                };
                serde_json::json!({
                    "event": "decision",
                    "command": "run",
                    "function": decision.instance.function,
                    "region": decision.instance.region,
                    "action": action,
                    "reason": decision.reason.as_str(),
                    "deployed_revision": decision.deployed_revision.as_ref().map(|r| r.as_str()),
                })
            }

            ReconcileEvent::RegionFailed { instance, error } => {
                serde_json::json!({
                    "event": "item_error",
                    "command": "run",
                    "function": instance.function,
                    "region": instance.region,
                    "error": error,
                })
            }

            ReconcileEvent::Dispatched {
                instance,
                operation,
            } => {
                serde_json::json!({
                    "event": "dispatched",
                    "command": "run",
                    "function": instance.function,
                    "region": instance.region,
                    "operation": operation,
                })
            }

            ReconcileEvent::OperationFinished {
                instance,
                operation,
                status,
            } => {
                let (status, error) = status_fields(&status);
                serde_json::json!({
                    "event": "operation_done",
                    "command": "run",
                    "function": instance.function,
                    "region": instance.region,
                    "operation": operation,
                    "status": status,
                    "error": error,
                })
            }

            ReconcileEvent::Completed {
                redeployed,
                skipped,
                failed,
            } => {
                let status = if failed == 0 { "success" } else { "failure" };
                serde_json::json!({
                    "event": "complete",
                    "command": "run",
                    "status": status,
                    "redeployed": redeployed,
                    "skipped": skipped,
                    "failed": failed,
                })
            }
        };

        self.write_event(json);
    }
}
