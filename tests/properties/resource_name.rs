//! Property tests for resource names and deployed-URL revisions.

use proptest::prelude::*;

use funcsync::domain::entities::Inventory;
use funcsync::domain::value_objects::{ResourceName, Revision};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,20}").unwrap()
}

fn commit() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9a-f]{7,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing the display form yields the same name.
    #[test]
    fn property_resource_name_parses_its_display(
        project in segment(),
        region in segment(),
        function in segment(),
    ) {
        let name = ResourceName::new(project.clone(), region.clone(), function.clone());
        let parsed = ResourceName::parse(&format!("{}\n", name)).unwrap();
        prop_assert_eq!(parsed.project(), project.as_str());
        prop_assert_eq!(parsed.region(), region.as_str());
        prop_assert_eq!(parsed.function(), function.as_str());
    }

    /// PROPERTY: Arbitrary input never panics the parser.
    #[test]
    fn property_resource_name_parse_never_panics(raw in ".{0,120}") {
        let _ = ResourceName::parse(&raw);
    }

    /// PROPERTY: The commit after `revisions/` is recovered from any deployed URL.
    #[test]
    fn property_revision_extracted_from_deployed_url(
        repo in segment(),
        sha in commit(),
        path in proptest::collection::vec(segment(), 0..3),
    ) {
        let mut url = format!(
            "https://source.developers.google.com/projects/p/repos/{}/revisions/{}",
            repo, sha
        );
        if !path.is_empty() {
            url.push_str("/paths/");
            url.push_str(&path.join("/"));
        }
        prop_assert_eq!(Revision::from_deployed_url(&url).unwrap(), Revision::new(sha));
    }

    /// PROPERTY: Inventory counts match the distinct (function, region) pairs.
    #[test]
    fn property_inventory_collapses_duplicates(
        pairs in proptest::collection::vec((segment(), segment()), 0..20),
    ) {
        let names = pairs
            .iter()
            .chain(pairs.iter())
            .map(|(function, region)| ResourceName::new("p", region.clone(), function.clone()));
        let inventory = Inventory::from_resources(names);

        let distinct: std::collections::BTreeSet<_> = pairs.iter().cloned().collect();
        prop_assert_eq!(inventory.instance_count(), distinct.len());
        for (function, region) in &distinct {
            prop_assert!(inventory.regions_of(function).unwrap().contains(region));
        }
    }
}
