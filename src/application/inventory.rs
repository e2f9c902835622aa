//! Inventory collection
//!
//! Turns the raw listing output into an immutable function -> regions map.

use crate::domain::entities::Inventory;
use crate::domain::ports::FunctionPlatform;
use crate::domain::value_objects::ResourceName;
use crate::error::{FuncsyncError, FuncsyncResult};

/// List every deployed instance and group regions by function name.
///
/// Blank lines (including a trailing line terminator) are ignored; any other
/// line that is not a function resource name fails the whole collection.
pub fn collect_inventory<P>(platform: &P) -> FuncsyncResult<Inventory>
where
    P: FunctionPlatform + ?Sized,
{
    let listing = platform.list_instances().map_err(FuncsyncError::Listing)?;

    let resources = listing
        .iter()
        .flat_map(|chunk| chunk.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ResourceName::parse)
        .collect::<FuncsyncResult<Vec<_>>>()?;

    let inventory = Inventory::from_resources(resources);
    tracing::debug!(
        functions = inventory.function_count(),
        instances = inventory.instance_count(),
        "collected inventory"
    );
    Ok(inventory)
}
