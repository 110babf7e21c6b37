//! Property tests for module file set extraction.

use std::collections::HashSet;
use std::path::PathBuf;

use proptest::prelude::*;

use bundle_overlay::domain::entities::ModuleRecord;
use bundle_overlay::ModuleFileSet;

fn maybe_path() -> impl Strategy<Value = Option<PathBuf>> {
    prop_oneof![
        Just(None),
        Just(Some(PathBuf::new())),
        "/[a-c]{1,2}(/[a-c]{1,2}){0,2}\\.ts".prop_map(|s| Some(PathBuf::from(s))),
    ]
}

fn module() -> impl Strategy<Value = ModuleRecord> {
    (maybe_path(), maybe_path()).prop_map(|(resource, context)| ModuleRecord { resource, context })
}

fn expected_path(module: &ModuleRecord) -> Option<PathBuf> {
    let non_empty = |p: &Option<PathBuf>| p.clone().filter(|p| !p.as_os_str().is_empty());
    non_empty(&module.resource).or_else(|| non_empty(&module.context))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the set holds exactly the resource-else-context paths, no empties.
    #[test]
    fn property_set_matches_resource_else_context(modules in proptest::collection::vec(module(), 0..24)) {
        let set = ModuleFileSet::from_modules(&modules);

        let expected: HashSet<PathBuf> = modules.iter().filter_map(expected_path).collect();
        let actual: HashSet<PathBuf> = set.iter().cloned().collect();

        prop_assert_eq!(&actual, &expected);
        prop_assert_eq!(set.len(), expected.len());
        prop_assert!(set.iter().all(|p| !p.as_os_str().is_empty()));
    }

    /// PROPERTY: first-seen order is kept and duplicates collapse.
    #[test]
    fn property_set_keeps_first_seen_order(modules in proptest::collection::vec(module(), 0..24)) {
        let set = ModuleFileSet::from_modules(&modules);

        let mut seen = HashSet::new();
        let ordered: Vec<PathBuf> = modules
            .iter()
            .filter_map(expected_path)
            .filter(|p| seen.insert(p.clone()))
            .collect();

        prop_assert_eq!(set.into_vec(), ordered);
    }
}
