//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod function_platform;
pub mod function_registry;
pub mod reconcile_events;
pub mod source_history;

pub use function_platform::{FunctionPlatform, PlatformError};
pub use function_registry::{FunctionRegistry, RegistryError};
pub use reconcile_events::{NoopEventSink, ReconcileEvent, ReconcileEventSink};
pub use source_history::{HistoryError, SourceHistory};
