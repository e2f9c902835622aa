//! Property tests for per-instance decisions.

use proptest::prelude::*;

use funcsync::domain::entities::{
    Action, DeployedInstance, InstanceDescriptor, Reason, SourceRepository,
};
use funcsync::domain::services::decide;
use funcsync::domain::value_objects::Revision;

fn commit() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9a-f]{40}").unwrap()
}

fn descriptor(deployed: Option<&str>) -> InstanceDescriptor {
    let repo = SourceRepository::new("https://repo/moveable-aliases/master/paths/billing");
    let repo = match deployed {
        Some(sha) => repo.with_deployed_url(format!("https://repo/revisions/{}/paths/billing", sha)),
        None => repo,
    };
    InstanceDescriptor::new("projects/p/locations/us-east1/functions/billing")
        .with_source_repository(repo)
}

fn instance() -> DeployedInstance {
    DeployedInstance::new("billing", "us-east1")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Without a deployed URL the instance is skipped whatever the history says.
    #[test]
    fn property_unresolved_source_is_never_redeployed(current in commit(), changed in any::<bool>()) {
        let decision = decide(instance(), &descriptor(None), &Revision::new(current), |_| Ok(changed)).unwrap();
        prop_assert_eq!(decision.action, Action::Skip);
        prop_assert_eq!(decision.reason, Reason::NotSourceControlled);
    }

    /// PROPERTY: An instance at the current revision is skipped without consulting history.
    #[test]
    fn property_current_instance_skips_without_diff(sha in commit()) {
        let decision = decide(instance(), &descriptor(Some(&sha)), &Revision::new(sha.clone()), |_| {
            panic!("history must not be consulted")
        })
        .unwrap();
        prop_assert_eq!(decision.reason, Reason::AlreadyCurrent);
    }

    /// PROPERTY: For differing revisions the scoped diff alone decides.
    #[test]
    fn property_scoped_diff_decides(deployed in commit(), current in commit(), changed in any::<bool>()) {
        prop_assume!(deployed != current);
        let decision = decide(
            instance(),
            &descriptor(Some(&deployed)),
            &Revision::new(current),
            |from| {
                assert_eq!(from.as_str(), deployed.as_str());
                Ok(changed)
            },
        )
        .unwrap();
        prop_assert_eq!(decision.is_redeploy(), changed);
        prop_assert_eq!(decision.deployed_revision, Some(Revision::new(deployed.clone())));
    }
}
