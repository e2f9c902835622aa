//! Staleness reconciliation
//!
//! Decides, per deployed region of a managed function, whether the instance
//! must be re-resolved against the current revision. Decisions for different
//! regions are independent; a failure in one never stops the others.

use crate::domain::entities::{Decision, DeployedInstance, InstanceDescriptor, Inventory, Reason};
use crate::domain::ports::{FunctionPlatform, SourceHistory};
use crate::domain::value_objects::Revision;
use crate::error::{FuncsyncError, FuncsyncResult};

/// A region whose reconciliation failed
#[derive(Debug)]
pub struct RegionFailure {
    pub instance: DeployedInstance,
    pub error: FuncsyncError,
}

/// Result of reconciling one managed function
#[derive(Debug)]
pub enum FunctionReconciliation {
    /// Function has no entry in the inventory
    NotDeployed,
    /// One entry per deployed region, in region order
    Regions(Vec<Result<Decision, RegionFailure>>),
}

impl FunctionReconciliation {
    pub fn decisions(&self) -> impl Iterator<Item = &Decision> {
        self.regions().iter().filter_map(|r| r.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &RegionFailure> {
        self.regions().iter().filter_map(|r| r.as_ref().err())
    }

    fn regions(&self) -> &[Result<Decision, RegionFailure>] {
        match self {
            FunctionReconciliation::NotDeployed => &[],
            FunctionReconciliation::Regions(results) => results,
        }
    }
}

/// Decide what to do with one instance given its descriptor.
///
/// `path_changed` is only consulted when the revisions differ.
pub fn decide<F>(
    instance: DeployedInstance,
    descriptor: &InstanceDescriptor,
    current: &Revision,
    path_changed: F,
) -> FuncsyncResult<Decision>
where
    F: FnOnce(&Revision) -> FuncsyncResult<bool>,
{
    let Some(deployed_url) = descriptor.deployed_url() else {
        return Ok(Decision::skip(instance, Reason::NotSourceControlled));
    };

    let deployed = Revision::from_deployed_url(deployed_url)?;
    if deployed.same_commit(current) {
        return Ok(Decision::skip(instance, Reason::AlreadyCurrent).with_deployed_revision(deployed));
    }

    if path_changed(&deployed)? {
        Ok(Decision::redeploy(instance, deployed))
    } else {
        Ok(Decision::skip(instance, Reason::NoRelevantChange).with_deployed_revision(deployed))
    }
}

/// Reconciler over a platform and repository history
pub struct Reconciler<'a, P, H>
where
    P: FunctionPlatform + ?Sized,
    H: SourceHistory + ?Sized,
{
    platform: &'a P,
    history: &'a H,
}

impl<'a, P, H> Reconciler<'a, P, H>
where
    P: FunctionPlatform + ?Sized,
    H: SourceHistory + ?Sized,
{
    pub fn new(platform: &'a P, history: &'a H) -> Self {
        Self { platform, history }
    }

    /// Reconcile every deployed region of `function`.
    ///
    /// `path` is the repository-relative subtree compared between revisions.
    pub fn reconcile_function(
        &self,
        function: &str,
        path: &str,
        inventory: &Inventory,
        current: &Revision,
    ) -> FunctionReconciliation {
        let Some(regions) = inventory.regions_of(function) else {
            return FunctionReconciliation::NotDeployed;
        };

        let results = regions
            .iter()
            .map(|region| {
                let instance = DeployedInstance::new(function, region.as_str());
                self.reconcile_instance(&instance, path, current)
                    .map_err(|error| RegionFailure { instance, error })
            })
            .collect();

        FunctionReconciliation::Regions(results)
    }

    /// Reconcile a single (function, region) instance
    pub fn reconcile_instance(
        &self,
        instance: &DeployedInstance,
        path: &str,
        current: &Revision,
    ) -> FuncsyncResult<Decision> {
        let descriptor = self
            .platform
            .describe(&instance.function, &instance.region)
            .map_err(|source| FuncsyncError::Describe {
                function: instance.function.clone(),
                region: instance.region.clone(),
                source,
            })?;

        decide(instance.clone(), &descriptor, current, |deployed| {
            self.history
                .path_changed(deployed, current, path)
                .map_err(|source| FuncsyncError::History {
                    path: path.to_string(),
                    from: deployed.to_string(),
                    to: current.to_string(),
                    source,
                })
        })
    }
}
