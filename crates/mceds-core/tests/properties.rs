//! Property tests for the invariants every run must hold

use mceds_common::types::{DomainSet, RawMap};
use mceds_core::{Analysis, RunConfig, ScopeMode};
use proptest::collection::{btree_map, btree_set};
use proptest::prelude::*;

fn raw_map() -> impl Strategy<Value = RawMap> {
    btree_map(
        "EC[1-3]",
        btree_map("P[1-6]", btree_set("d[1-6]", 0..4), 0..5),
        0..4,
    )
    .prop_map(|classes| {
        let mut raw = RawMap::new();
        for (class, structures) in classes {
            raw.entry_or_default(class.as_str());
            for (pdb, domains) in structures {
                raw.insert_structure(class.as_str(), pdb, domains.into_iter().collect::<DomainSet>());
            }
        }
        raw
    })
}

fn scope() -> impl Strategy<Value = ScopeMode> {
    prop_oneof![Just(ScopeMode::Global), Just(ScopeMode::ClassLocal)]
}

proptest! {
    #[test]
    fn prop_signatures_are_subsets_of_raw(raw in raw_map(), scope in scope()) {
        let analysis = Analysis::run(&raw, &RunConfig::new(scope)).unwrap();
        for (class, pdb, signature) in analysis.refined().structures() {
            let domains = raw.structure(class.as_str(), pdb.as_str()).unwrap();
            prop_assert!(signature.is_subset(domains));
            prop_assert!(!signature.is_empty());
        }
    }

    #[test]
    fn prop_seeds_are_nonempty_subsets_of_some_structure(raw in raw_map(), scope in scope()) {
        let analysis = Analysis::run(&raw, &RunConfig::new(scope)).unwrap();
        for (class, table) in analysis.seeds() {
            let structures = raw.get(class.as_str()).unwrap();
            for seed in table.seeds() {
                prop_assert!(structures.values().any(|domains| seed.is_contained_in(domains)));
            }
        }
    }

    #[test]
    fn prop_run_is_deterministic(raw in raw_map(), scope in scope()) {
        let config = RunConfig::new(scope);
        let first = Analysis::run(&raw, &config).unwrap();
        let second = Analysis::run(&raw, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_unique_never_exceeds_observed(raw in raw_map(), scope in scope()) {
        let analysis = Analysis::run(&raw, &RunConfig::new(scope)).unwrap();
        prop_assert!(analysis.unique_domain_count() <= analysis.total_domain_count());
        prop_assert!(analysis.unique_domains().is_subset(analysis.observed_domains()));
    }

    #[test]
    fn prop_unmatched_structures_have_no_signature(raw in raw_map(), scope in scope()) {
        let analysis = Analysis::run(&raw, &RunConfig::new(scope)).unwrap();
        for (class, pdb, domains) in raw.structures() {
            let table = analysis.seeds().get(class.as_str()).unwrap();
            let has_signature = analysis.refined().structure(class.as_str(), pdb.as_str()).is_some();
            prop_assert_eq!(table.covers(domains), has_signature);
        }
    }

    #[test]
    fn prop_every_class_is_refined(raw in raw_map(), scope in scope()) {
        let analysis = Analysis::run(&raw, &RunConfig::new(scope)).unwrap();
        let input: Vec<_> = raw.classes().collect();
        let refined: Vec<_> = analysis.refined().classes().collect();
        prop_assert_eq!(input, refined);
    }
}
