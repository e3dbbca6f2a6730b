//! Property tests for counting, round trips and transform laws.

use proptest::prelude::*;
use sugars_collection::{Collection, Key};

fn list(values: &[i64]) -> Collection<Key, i64> {
    Collection::new(values.to_vec())
}

proptest! {
    /// count and is_empty agree with the source sequence.
    #[test]
    fn prop_count_matches_length(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let c = list(&values);
        prop_assert_eq!(c.count(), values.len());
        prop_assert_eq!(c.is_empty(), values.is_empty());
    }

    /// Rebuilding from `all()` yields an equal collection.
    #[test]
    fn prop_round_trip_through_all(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let c = list(&values);
        let again = Collection::new(c.all().clone());
        prop_assert_eq!(again, c);
    }

    /// Filtering twice with the same predicate changes nothing.
    #[test]
    fn prop_filter_is_idempotent(
        values in prop::collection::vec(any::<i64>(), 0..64),
        threshold: i64
    ) {
        let c = list(&values);
        let once = c.filter(|v| *v > threshold);
        let twice = once.filter(|v| *v > threshold);
        prop_assert_eq!(twice, once);
    }

    /// first and last of a list are the sequence's ends.
    #[test]
    fn prop_first_and_last_of_list(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let c = list(&values);
        prop_assert_eq!(c.first(), values.first());
        prop_assert_eq!(c.last(), values.last());
    }

    /// Merging two lists concatenates them.
    #[test]
    fn prop_merge_of_lists_concatenates(
        left in prop::collection::vec(any::<i64>(), 0..32),
        right in prop::collection::vec(any::<i64>(), 0..32)
    ) {
        let merged = list(&left).merge(right.clone());
        let expected: Vec<i64> = left.iter().chain(right.iter()).copied().collect();
        prop_assert_eq!(merged, list(&expected));
    }

    /// map keeps every key of its source.
    #[test]
    fn prop_map_preserves_keys(
        values in prop::collection::vec(any::<i64>(), 0..64),
        threshold: i64
    ) {
        let c = list(&values).filter(|v| *v > threshold);
        let mapped = c.map(|v, _| v.wrapping_mul(2));
        prop_assert_eq!(mapped.keys(), c.keys());
    }

    /// JSON text of a list parses back to the same list.
    #[test]
    fn prop_json_round_trip(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let c = list(&values);
        let text = c.to_json().expect("integers serialize");
        let back: Collection<Key, i64> = Collection::from_json_str(&text).expect("own output parses");
        prop_assert_eq!(back, c);
    }
}
