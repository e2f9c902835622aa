//! Deployed function inventory
//!
//! Built once per run by the inventory collector and read-only afterwards.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::value_objects::ResourceName;

/// One regional copy of a deployed function
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeployedInstance {
    pub function: String,
    pub region: String,
}

impl DeployedInstance {
    pub fn new(function: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            region: region.into(),
        }
    }
}

impl std::fmt::Display for DeployedInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.function, self.region)
    }
}

/// Mapping from function name to the set of regions it is deployed in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    regions: BTreeMap<String, BTreeSet<String>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from parsed resource names; duplicates collapse.
    pub fn from_resources<I>(resources: I) -> Self
    where
        I: IntoIterator<Item = ResourceName>,
    {
        let mut regions: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for resource in resources {
            regions
                .entry(resource.function().to_string())
                .or_default()
                .insert(resource.region().to_string());
        }
        Self { regions }
    }

    /// Regions a function is deployed in, or `None` if it is not deployed at all
    pub fn regions_of(&self, function: &str) -> Option<&BTreeSet<String>> {
        self.regions.get(function)
    }

    pub fn contains(&self, function: &str) -> bool {
        self.regions.contains_key(function)
    }

    /// Every deployed instance, ordered by function then region
    pub fn instances(&self) -> impl Iterator<Item = DeployedInstance> + '_ {
        self.regions.iter().flat_map(|(function, regions)| {
            regions
                .iter()
                .map(move |region| DeployedInstance::new(function.clone(), region.clone()))
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn function_count(&self) -> usize {
        self.regions.len()
    }

    pub fn instance_count(&self) -> usize {
        self.regions.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
