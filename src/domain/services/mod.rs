//! Domain Services
//!
//! Business logic that operates on domain entities. I/O only ever happens
//! through ports handed in by the caller.

mod aggregator;
mod reconciler;

pub use aggregator::{aggregate, FailureReport, Verdict};
pub use reconciler::{decide, FunctionReconciliation, Reconciler, RegionFailure};
