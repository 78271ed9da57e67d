//! Property-based tests for the persistent containers.
//!
//! Tests the following properties:
//! - insert/iterate ordering and length
//! - remove/update against a Vec model
//! - the unchanged-instance shortcut
//! - hash/equality consistency under dispatch

use flatval::{DispatchRegistry, NonBlankTrimmedString, Optional, PersistentSet};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating values
// =============================================================================

/// Generate small integers for set elements
fn arb_small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn arb_int_vec(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(arb_small_int(), 0..=max_len)
}

/// Generate non-blank text, possibly padded with whitespace
fn arb_text() -> impl Strategy<Value = String> {
    ("[ \t]{0,2}", "[a-z]{1,6}", "[ \t]{0,2}").prop_map(|(lead, body, trail)| format!("{}{}{}", lead, body, trail))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// of(items) iterates in input order with len = items.len()
    #[test]
    fn of_preserves_order(items in arb_int_vec(20)) {
        let set = PersistentSet::of(items.clone());
        prop_assert_eq!(set.len(), items.len());
        prop_assert_eq!(set.to_vec(), items);
    }

    /// insert(x) puts x first and keeps the rest
    #[test]
    fn insert_prepends(items in arb_int_vec(20), x in arb_small_int()) {
        let set = PersistentSet::of(items.clone());
        let extended = set.insert(x);
        let mut expected = vec![x];
        expected.extend(items.iter().copied());
        prop_assert_eq!(extended.to_vec(), expected);
        prop_assert_eq!(set.to_vec(), items);
    }

    /// remove(p) agrees with Vec::retain(!p)
    #[test]
    fn remove_matches_model(items in arb_int_vec(20), divisor in 2i64..5) {
        let set = PersistentSet::of(items.clone());
        let removed = set.remove(|value| value % divisor == 0);
        let mut expected = items.clone();
        expected.retain(|value| value % divisor != 0);
        prop_assert_eq!(removed.to_vec(), expected);
        prop_assert_eq!(set.to_vec(), items);
    }

    /// remove(p) with no match returns the same instance
    #[test]
    fn remove_without_match_is_identity(items in arb_int_vec(20)) {
        let registry = DispatchRegistry::new();
        let set = PersistentSet::of(items);
        let same = set.remove(|value| *value > 5000);
        prop_assert!(same.ptr_eq(&set));
        prop_assert!(registry.are_equal(&same, &set));
    }

    /// insert then remove of the inserted element restores the original
    #[test]
    fn insert_remove_round_trip(items in arb_int_vec(20)) {
        let registry = DispatchRegistry::new();
        let set = PersistentSet::of(items);
        let restored = set.insert(5000).remove(|value| *value == 5000);
        prop_assert!(registry.are_equal(&restored, &set));
    }

    /// update(p, f) agrees with mapping the Vec model
    #[test]
    fn update_matches_model(items in arb_int_vec(20)) {
        let set = PersistentSet::of(items.clone());
        let updated = set.update(|value| *value < 0, |value| -value);
        let expected: Vec<i64> = items.iter().map(|value| value.abs()).collect();
        prop_assert_eq!(updated.to_vec(), expected);
    }

    /// Equal sets hash equal
    #[test]
    fn equal_sets_hash_equal(items in prop::collection::vec(arb_text(), 0..8)) {
        let registry = DispatchRegistry::new();
        let a: PersistentSet<NonBlankTrimmedString> =
            items.iter().map(|item| NonBlankTrimmedString::new(item).unwrap()).collect();
        let b: PersistentSet<NonBlankTrimmedString> =
            items.iter().map(|item| NonBlankTrimmedString::new(item.trim()).unwrap()).collect();
        prop_assert!(registry.are_equal(&a, &b));
        prop_assert_eq!(registry.hash_of(&a), registry.hash_of(&b));
    }

    /// Optional map law: Present(v).map(f) == Present(f(v))
    #[test]
    fn optional_map_law(v in arb_small_int()) {
        let registry = DispatchRegistry::new();
        let mapped = Optional::present(v).map(|v| v * 3);
        prop_assert!(registry.are_equal(&mapped, &Optional::present(v * 3)));
        prop_assert!(!registry.are_equal(&mapped, &Optional::<i64>::missing()));
    }
}
