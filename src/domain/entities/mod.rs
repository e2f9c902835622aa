//! Domain Entities
//!
//! - `Inventory` / `DeployedInstance` - where functions are deployed
//! - `InstanceDescriptor` - describe output for one instance
//! - `Decision` - per-instance reconciliation result
//! - `Operation` - pollable platform handle and its outcome

mod decision;
mod descriptor;
mod inventory;
mod operation;

pub use decision::{Action, Decision, Reason};
pub use descriptor::{InstanceDescriptor, SourceRepository};
pub use inventory::{DeployedInstance, Inventory};
pub use operation::{
    DispatchedOperation, Operation, OperationError, OperationOutcome, OperationStatus,
};
