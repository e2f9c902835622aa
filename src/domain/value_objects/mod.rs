//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod resource_name;
mod revision;

pub use resource_name::ResourceName;
pub use revision::Revision;
