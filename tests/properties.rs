//! Property tests for the value store.

use lazy_value_registry::{AdHoc, ValueRegistry, ValueSet};
use proptest::prelude::*;

proptest! {
    #[test]
    fn distinct_values_come_back_in_insertion_order(
        inputs in proptest::collection::hash_set(any::<i32>(), 0..64)
    ) {
        let inputs: Vec<i32> = inputs.into_iter().collect();
        let mut registry: ValueSet<i32> = ValueSet::named("distinct");
        registry.add_values(inputs.clone()).unwrap();

        prop_assert_eq!(registry.values(), inputs);
        prop_assert!(!registry.is_populated());
    }

    #[test]
    fn silent_duplicate_leaves_values_unchanged(
        inputs in proptest::collection::hash_set(any::<i32>(), 1..64),
        pick in any::<prop::sample::Index>()
    ) {
        let inputs: Vec<i32> = inputs.into_iter().collect();
        let mut registry: ValueSet<i32> =
            ValueRegistry::new(AdHoc::named("quiet").with_fail_silently(true));
        registry.add_values(inputs.clone()).unwrap();
        let before = registry.values();

        let duplicate = inputs[pick.index(inputs.len())];
        prop_assert!(registry.add_value(duplicate).is_ok());
        prop_assert_eq!(registry.values(), before);
    }

    #[test]
    fn strict_duplicate_is_rejected(
        inputs in proptest::collection::hash_set(any::<i32>(), 1..64),
        pick in any::<prop::sample::Index>()
    ) {
        let inputs: Vec<i32> = inputs.into_iter().collect();
        let mut registry: ValueSet<i32> = ValueSet::named("strict");
        registry.add_values(inputs.clone()).unwrap();

        let duplicate = inputs[pick.index(inputs.len())];
        prop_assert!(registry.add_value(duplicate).unwrap_err().is_invalid_value());
        prop_assert_eq!(registry.len(), inputs.len());
    }
}
