//! Console Event Sink
//!
//! Human-readable progress, one line per event.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::entities::{Action, OperationStatus};
use crate::domain::ports::{ReconcileEvent, ReconcileEventSink};
use crate::presentation::theme::{colors, Icon, Style};

/// Event sink that prints progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    style: Style,
}

impl ConsoleEventSink {
    pub fn stdout(style: Style) -> Self {
        Self::with_writer(io::stdout(), style)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, style: Style) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            style,
        }
    }

    /// Render one event as a single line
    pub fn render(&self, event: &ReconcileEvent) -> String {
        let s = &self.style;
        match event {
            ReconcileEvent::Started {
                project,
                revision,
                managed_count,
            } => format!(
                "{} funcsync {} project {} at {} ({} managed functions)",
                s.icon(Icon::Deploy),
                s.dim("·"),
                s.paint(project, colors::INFO),
                revision.short(),
                managed_count
            ),

            ReconcileEvent::InventoryCollected {
                function_count,
                instance_count,
            } => format!(
                "{} Found {} deployed instances of {} functions",
                s.icon(Icon::Success),
                instance_count,
                function_count
            ),

            ReconcileEvent::FunctionNotDeployed { function } => format!(
                "{} {}: not deployed, skipping",
                s.icon(Icon::Pending),
                function
            ),

            ReconcileEvent::Decided { decision } => match decision.action {
                Action::Skip => format!(
                    "{} {}: {}",
                    s.icon(Icon::Pending),
                    decision.instance,
                    s.dim(&decision.reason.to_string())
                ),
                Action::Redeploy => format!(
                    "{} {}: {} since {}, redeploying",
                    s.icon(Icon::Arrow),
                    decision.instance,
                    decision.reason,
                    decision
                        .deployed_revision
                        .as_ref()
                        .map(|r| r.short().to_string())
                        .unwrap_or_default()
                ),
            },

            ReconcileEvent::RegionFailed { instance, error } => format!(
                "{} {}: {}",
                s.icon(Icon::Error),
                instance,
                s.paint(error, colors::ERROR)
            ),

            ReconcileEvent::Dispatched {
                instance,
                operation,
            } => format!(
                "{} {}: started {}",
                s.icon(Icon::Progress),
                instance,
                s.dim(operation)
            ),

            ReconcileEvent::OperationFinished {
                instance,
                operation,
                status,
            } => match status {
                OperationStatus::Succeeded => format!(
                    "{} {}: {} completed",
                    s.icon(Icon::Success),
                    instance,
                    operation
                ),
                failed => format!(
                    "{} {}: {} {}",
                    s.icon(Icon::Error),
                    instance,
                    operation,
                    s.paint(&failed.to_string(), colors::ERROR)
                ),
            },

            ReconcileEvent::Completed {
                redeployed,
                skipped,
                failed,
            } => format!(
                "\nRedeployed: {}  Skipped: {}  Failed: {}",
                redeployed, skipped, failed
            ),
        }
    }
}

impl ReconcileEventSink for ConsoleEventSink {
    fn on_event(&self, event: ReconcileEvent) {
        let line = self.render(&event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
