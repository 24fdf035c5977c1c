//! Property-based tests for the ordered list sorter.
//!
//! Uses proptest to validate:
//! - Output equals the std sort of the concatenated input
//! - Output length equals total input length
//! - Stable tie order matches a stable std sort by key

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::panic)]

use ordered_sort::{Error, OrderedListSorter, SorterConfig, TieOrder};
use proptest::prelude::*;

fn sorted_list() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-500i32..500, 1..40).prop_map(|mut list| {
        list.sort_unstable();
        list
    })
}

fn sorted_lists() -> impl Strategy<Value = Vec<Vec<i32>>> {
    prop::collection::vec(sorted_list(), 1..8)
}

proptest! {
    /// Property: merged output is the sorted concatenation of the inputs
    #[test]
    fn prop_matches_std_sort(lists in sorted_lists()) {
        let merged = ordered_sort::sort(&lists).unwrap();

        let mut expected: Vec<i32> = lists.concat();
        expected.sort_unstable();

        prop_assert_eq!(merged, expected);
    }

    /// Property: with stable ties, records keep input order within a key
    #[test]
    fn prop_stable_matches_std_stable_sort(lists in sorted_lists()) {
        let tagged: Vec<Vec<(i32, usize, usize)>> = lists
            .iter()
            .enumerate()
            .map(|(list, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(position, value)| (*value, list, position))
                    .collect()
            })
            .collect();

        let sorter = OrderedListSorter::with_config(
            SorterConfig::builder().with_tie_order(TieOrder::Stable).build().unwrap(),
        );
        let merged = sorter.sort_by_key(&tagged, |(key, _, _): &(i32, usize, usize)| *key).unwrap();

        let mut expected: Vec<(i32, usize, usize)> = tagged.concat();
        expected.sort_by_key(|(key, _, _)| *key);

        prop_assert_eq!(merged, expected);
    }

    /// Property: reversed ties are exactly the stable order with each key run reversed
    #[test]
    fn prop_reversed_is_stable_runs_reversed(lists in sorted_lists()) {
        let tagged: Vec<Vec<(i32, usize)>> = lists
            .iter()
            .enumerate()
            .map(|(list, values)| values.iter().map(|value| (*value, list)).collect())
            .collect();

        let reversed = OrderedListSorter::new()
            .sort_by_key(&tagged, |(key, _): &(i32, usize)| *key)
            .unwrap();

        let mut expected: Vec<(i32, usize)> = tagged.concat();
        expected.sort_by_key(|(key, _)| *key);
        let expected: Vec<(i32, usize)> = expected
            .chunk_by(|left, right| left.0 == right.0)
            .flat_map(|run| run.iter().rev().copied())
            .collect();

        prop_assert_eq!(reversed, expected);
    }

    /// Property: an empty list anywhere is reported with its index
    #[test]
    fn prop_empty_list_reported(lists in sorted_lists(), index in 0usize..8) {
        let mut lists = lists;
        let index = index % (lists.len() + 1);
        lists.insert(index, Vec::new());

        prop_assert_eq!(ordered_sort::sort(&lists), Err(Error::EmptyList { list: index }));
    }
}
