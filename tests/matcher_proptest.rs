//! Property-based tests for the resource matchers.
//!
//! These check the matchers against direct definitions:
//! - `path(p)` matches exactly when the resource path is `p`
//! - `props(E)` matches exactly when every entry of `E` is stored unchanged
//! - children matchers agree with list/set comparisons of child names
//! - `paths(...)` matches exactly the same sequence of paths

use proptest::prelude::*;
use resource_matchers::prelude::*;

/// Generate absolute resource paths
fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9_]{0,6}", 1..4).prop_map(|segments| format!("/{}", segments.join("/")))
}

/// Generate scalar and array property values
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,5}".prop_map(Value::from),
        prop::collection::vec(any::<i32>(), 0..4).prop_map(Value::from),
        prop::collection::vec("[a-z]{1,3}", 0..4).prop_map(Value::from),
    ]
}

/// Generate small property maps with distinct keys
fn map_strategy() -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::btree_map("k[0-9]", value_strategy(), 0..5).prop_map(|m| m.into_iter().collect())
}

/// Generate lists of distinct child names
fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("c[0-9]", 0..5).prop_map(|s| s.into_iter().collect())
}

mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn path_matches_iff_equal(actual in path_strategy(), expected in path_strategy()) {
            let resource = MemoryResource::new(actual.clone());
            prop_assert_eq!(path(expected.clone()).matches(&resource), actual == expected);
            prop_assert!(path(actual).matches(&resource));
        }

        #[test]
        fn name_is_last_segment(p in path_strategy()) {
            let resource = MemoryResource::new(p.clone());
            let last = p.rsplit('/').next().unwrap_or_default().to_string();
            prop_assert!(name(last).matches(&resource));
        }

        #[test]
        fn props_subset_semantics(stored in map_strategy(), expected in map_strategy()) {
            let resource = MemoryResource::new("/r").with_properties(stored.iter().cloned().collect::<ValueMap>());
            let stored_map: ValueMap = stored.into_iter().collect();
            let expected_map: ValueMap = expected.into_iter().collect();

            let direct = expected_map.iter().all(|(k, v)| stored_map.get(k) == Some(v));
            prop_assert_eq!(props(expected_map).matches(&resource), direct);
            prop_assert!(props(stored_map).matches(&resource));
        }

        #[test]
        fn children_modes(actual in names_strategy(), expected in names_strategy(), reverse in any::<bool>()) {
            let mut expected = expected;
            if reverse {
                expected.reverse();
            }
            let parent = MemoryResource::new("/p").with_children(&actual);
            let contains_all = expected.iter().all(|n| actual.contains(n));
            let same_set = contains_all && actual.iter().all(|n| expected.contains(n));

            prop_assert_eq!(has_children(expected.clone()).matches(&parent), contains_all);
            prop_assert_eq!(contains_children_in_any_order(expected.clone()).matches(&parent), same_set);
            prop_assert_eq!(contains_children(expected.clone()).matches(&parent), actual == expected);
        }

        #[test]
        fn sequence_paths_exact(ps in prop::collection::vec(path_strategy(), 0..5), drop_last in any::<bool>()) {
            let resources: Vec<MemoryResource> = ps.iter().map(MemoryResource::new).collect();
            prop_assert!(paths(ps.clone()).matches(&ResourceIter::new(resources.iter())));

            if drop_last && !ps.is_empty() {
                let truncated = &ps[..ps.len() - 1];
                prop_assert!(!paths(truncated.to_vec()).matches(&resources));
            }
        }
    }
}
