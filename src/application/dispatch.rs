//! Redeploy dispatch
//!
//! Forces the platform to re-resolve an instance's moving reference by
//! patching `sourceRepository.url` with the resolved URL stripped.

use crate::domain::entities::{DeployedInstance, DispatchedOperation};
use crate::domain::ports::FunctionPlatform;
use crate::error::{FuncsyncError, FuncsyncResult};

/// Issues at most one patch per call; callers pass each Redeploy decision once.
pub struct Dispatcher<'a, P>
where
    P: FunctionPlatform + ?Sized,
{
    platform: &'a P,
}

impl<'a, P> Dispatcher<'a, P>
where
    P: FunctionPlatform + ?Sized,
{
    pub fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    /// Re-resolve one instance and return the started operation.
    ///
    /// The descriptor is fetched fresh right before the patch.
    pub fn dispatch(&self, instance: &DeployedInstance) -> FuncsyncResult<DispatchedOperation> {
        let dispatch_error = |source| FuncsyncError::Dispatch {
            function: instance.function.clone(),
            region: instance.region.clone(),
            source,
        };

        let descriptor = self
            .platform
            .describe(&instance.function, &instance.region)
            .map_err(dispatch_error)?;
        let body = descriptor.without_deployed_url();

        let operation = self
            .platform
            .patch_source(&instance.function, &instance.region, &body)
            .map_err(dispatch_error)?;

        tracing::info!(
            function = %instance.function,
            region = %instance.region,
            operation = %operation.name,
            "redeploy dispatched"
        );

        Ok(DispatchedOperation {
            instance: instance.clone(),
            name: operation.name,
        })
    }
}
