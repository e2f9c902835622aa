//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RefreshUseCase` - List, reconcile, dispatch, track, aggregate
//!
//! ## Services
//!
//! - `collect_inventory` - Build the function -> regions map
//! - `Dispatcher` - Trigger re-resolution of one instance
//! - `OperationTracker` - Wait for dispatched operations
//! - `select_project` - Map a branch to its platform project

pub mod dispatch;
pub mod environment;
pub mod inventory;
pub mod refresh;
pub mod tracker;

pub use dispatch::Dispatcher;
pub use environment::select_project;
pub use inventory::collect_inventory;
pub use refresh::{RefreshOptions, RefreshReport, RefreshUseCase};
pub use tracker::{OperationTracker, PollOptions, DEFAULT_POLL_INTERVAL};
