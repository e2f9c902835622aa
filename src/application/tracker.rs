//! Operation tracking
//!
//! Polls dispatched operations until the platform reports them done.
//! Each operation is polled on its own scoped thread; outcomes are returned
//! in dispatch order once every poller has joined.

use std::thread;
use std::time::{Duration, Instant};

use crate::domain::entities::{DispatchedOperation, OperationOutcome, OperationStatus};
use crate::domain::ports::FunctionPlatform;

/// Default wait between two status calls for the same operation
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Polling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    pub interval: Duration,
    /// `None` waits forever for a stuck operation
    pub timeout: Option<Duration>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
        }
    }
}

impl PollOptions {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct OperationTracker<'a, P>
where
    P: FunctionPlatform + ?Sized,
{
    platform: &'a P,
    options: PollOptions,
}

impl<'a, P> OperationTracker<'a, P>
where
    P: FunctionPlatform + ?Sized,
{
    pub fn new(platform: &'a P, options: PollOptions) -> Self {
        Self { platform, options }
    }

    /// Block until one operation reaches a terminal state
    pub fn wait(&self, operation: &DispatchedOperation) -> OperationOutcome {
        let started = Instant::now();
        let mut polls: u32 = 0;

        let status = loop {
            polls = polls.saturating_add(1);
            match self.platform.get_operation(&operation.name) {
                Ok(op) if op.done => {
                    break match op.error {
                        Some(error) => OperationStatus::Failed(error),
                        None => OperationStatus::Succeeded,
                    };
                }
                Ok(_) => {}
                Err(err) => break OperationStatus::PollFailed(err.to_string()),
            }

            if let Some(timeout) = self.options.timeout {
                if started.elapsed() >= timeout {
                    break OperationStatus::TimedOut;
                }
            }

            tracing::debug!(operation = %operation.name, polls, "operation still running");
            thread::sleep(self.options.interval);
        };

        tracing::debug!(operation = %operation.name, %status, polls, "operation finished");
        OperationOutcome {
            operation: operation.clone(),
            status,
            polls,
        }
    }

    /// Wait for every operation concurrently.
    ///
    /// `on_finished` runs on the polling thread as soon as each operation
    /// finishes; the returned outcomes follow the order of `operations`.
    pub fn wait_all<F>(&self, operations: &[DispatchedOperation], on_finished: F) -> Vec<OperationOutcome>
    where
        F: Fn(&OperationOutcome) + Sync,
    {
        let on_finished = &on_finished;
        thread::scope(|scope| {
            let handles: Vec<_> = operations
                .iter()
                .map(|operation| {
                    let handle = scope.spawn(move || {
                        let outcome = self.wait(operation);
                        on_finished(&outcome);
                        outcome
                    });
                    (operation, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(operation, handle)| {
                    handle.join().unwrap_or_else(|_| OperationOutcome {
                        operation: operation.clone(),
                        status: OperationStatus::PollFailed("poller thread panicked".to_string()),
                        polls: 0,
                    })
                })
                .collect()
        })
    }
}
