//! Domain Layer
//!
//! The reconciliation core of funcsync.
//!
//! ## Structure
//!
//! - `entities/` - Inventory, descriptors, decisions, operations
//! - `value_objects/` - Immutable value types (ResourceName, Revision)
//! - `services/` - Reconciler and failure aggregation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - the platform and git are only reached through ports
//! 2. **Pure decisions** - `decide` is a function of descriptor and revisions
//! 3. **Ports & Adapters** - all I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
