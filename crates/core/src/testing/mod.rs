//! Property-based tests for the collection primitives
//!
//! Generators live in [`generators`] so the invariants below read as plain
//! statements about arbitrary inputs.

use crate::collections::*;
use crate::functional::{identity, negate};
use crate::mapping::{defaults, extend};
use crate::types::Nested;
use indexmap::IndexMap;
use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::collection::vec;

    /// Lists of small integers, so that duplicates are common
    pub fn small_int_list() -> impl Strategy<Value = Vec<i32>> {
        vec(0i32..20, 0..40)
    }

    /// Generate lists of values for testing collections
    pub fn non_empty_list<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Vec<T>> {
        vec(element, 1..=100)
    }

    /// Several lists at once, for the variadic operations
    pub fn list_of_lists() -> impl Strategy<Value = Vec<Vec<i32>>> {
        vec(small_int_list(), 0..5)
    }

    /// Arbitrarily nested integer lists
    pub fn nested_ints() -> impl Strategy<Value = Nested<i32>> {
        let leaf = (0i32..100).prop_map(Nested::Item);
        leaf.prop_recursive(4, 64, 6, |inner| vec(inner, 0..6).prop_map(Nested::List))
    }

    /// Insertion-ordered maps with short keys
    pub fn index_map() -> impl Strategy<Value = IndexMap<String, i32>> {
        proptest::collection::hash_map("[a-e]{1,2}", any::<i32>(), 0..10)
            .prop_map(|map| map.into_iter().collect())
    }
}

fn leaf_count(node: &Nested<i32>) -> usize {
    match node {
        Nested::Item(_) => 1,
        Nested::List(items) => items.iter().map(leaf_count).sum(),
    }
}

fn as_slices(lists: &[Vec<i32>]) -> Vec<&[i32]> {
    lists.iter().map(Vec::as_slice).collect()
}

#[cfg(test)]
mod property_tests {
    use super::generators::*;
    use super::*;
    use proptest::proptest;

    proptest! {
        /// Mapping the identity function reproduces the input
        #[test]
        fn map_identity_is_identity(values in small_int_list()) {
            prop_assert_eq!(map(&values, |v| identity(*v)), values);
        }

        /// Seeded and first-element reductions agree on sums
        #[test]
        fn reduce_forms_agree(values in non_empty_list(-1000i64..1000)) {
            let seeded = reduce(&values, |total, n| total + n, 0i64);
            let unseeded = reduce_first(&values, |total, n| total + n);
            prop_assert_eq!(Some(seeded), unseeded);
        }

        /// `filter` and `reject` split the input without losing elements
        #[test]
        fn filter_and_reject_partition(values in small_int_list(), modulus in 1i32..5) {
            let kept = filter(&values, |n| n % modulus == 0);
            let dropped = reject(&values, |n| n % modulus == 0);

            prop_assert_eq!(kept.len() + dropped.len(), values.len());
            prop_assert!(every(&kept, |n| n % modulus == 0));
            prop_assert!(!some(&dropped, |n| n % modulus == 0));
        }

        /// `some` is the dual of `every`
        #[test]
        fn some_is_dual_of_every(values in small_int_list(), threshold in 0i32..20) {
            let any_above = some(&values, |n| *n > threshold);
            let none_above = every(&values, negate(|n: &i32| *n > threshold));
            prop_assert_eq!(any_above, !none_above);
        }

        /// `index_of` finds the first occurrence
        #[test]
        fn index_of_finds_first(values in small_int_list(), target in 0i32..20) {
            let expected = values.iter().position(|v| *v == target);
            prop_assert_eq!(index_of(&values, &target), expected);
            prop_assert_eq!(contains(&values, &target), expected.is_some());
        }

        /// `uniq` keeps each value once, in first-occurrence order
        #[test]
        fn uniq_is_first_occurrence_order(values in small_int_list()) {
            let distinct = uniq(&values);

            for value in &values {
                prop_assert!(contains(&distinct, value));
            }
            let positions = map(&distinct, |v| index_of(&values, v));
            let mut sorted = positions.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(positions, sorted);
        }

        /// The unsorted `uniq_by` agrees with `uniq` on the identity key
        #[test]
        fn uniq_by_identity_matches_uniq(values in small_int_list()) {
            prop_assert_eq!(uniq_by(&values, false, |v| *v), uniq(&values));

            let mut ordered = values.clone();
            ordered.sort();
            prop_assert_eq!(uniq_by(&ordered, true, |v| *v), uniq(&ordered));
        }

        /// `shuffle` returns a permutation and leaves the input alone
        #[test]
        fn shuffle_is_permutation(values in small_int_list()) {
            let before = values.clone();
            let mut shuffled = shuffle(&values);

            prop_assert_eq!(&values, &before);
            shuffled.sort();
            let mut expected = before;
            expected.sort();
            prop_assert_eq!(shuffled, expected);
        }

        /// `sort_by` is a sorted permutation of its input
        #[test]
        fn sort_by_orders_by_key(values in small_int_list()) {
            let sorted = sort_by(&values, |v| -v);
            prop_assert!(sorted.windows(2).all(|pair| pair[0] >= pair[1]));
            prop_assert_eq!(sorted.len(), values.len());
        }

        /// `flatten` keeps every leaf
        #[test]
        fn flatten_keeps_all_leaves(nested in prop::collection::vec(nested_ints(), 0..5)) {
            let expected: usize = nested.iter().map(leaf_count).sum();
            prop_assert_eq!(flatten(&nested).len(), expected);
        }

        /// `zip` has one row per index of the longest input
        #[test]
        fn zip_shape(lists in list_of_lists()) {
            let slices = as_slices(&lists);
            let rows = zip(&slices);
            let longest = lists.iter().map(Vec::len).max().unwrap_or(0);

            prop_assert_eq!(rows.len(), longest);
            prop_assert!(every(&rows, |row| row.len() == lists.len()));
        }

        /// Every value in the intersection occurs in every input, once
        #[test]
        fn intersection_values_are_shared(lists in list_of_lists()) {
            let slices = as_slices(&lists);
            let shared = intersection(&slices);

            prop_assert_eq!(uniq(&shared), shared.clone());
            for value in &shared {
                prop_assert!(every(&slices, |list| contains(list, value)));
            }
        }

        /// `difference` drops exactly the values found in the others
        #[test]
        fn difference_excludes_others(values in small_int_list(), lists in list_of_lists()) {
            let others = as_slices(&lists);
            let remaining = difference(&values, &others);

            for value in &remaining {
                prop_assert!(!some(&others, |list| contains(list, value)));
            }
            let excluded = filter(&values, |v| some(&others, |list| contains(list, v)));
            prop_assert_eq!(remaining.len() + excluded.len(), values.len());
        }

        /// After `extend`, every key holds the value of its last source
        #[test]
        fn extend_last_source_wins(target in index_map(), first in index_map(), second in index_map()) {
            let mut merged = target.clone();
            extend(&mut merged, &[&first, &second]);

            for (key, value) in &second {
                prop_assert_eq!(merged.get(key), Some(value));
            }
            for (key, value) in &target {
                if !first.contains_key(key) && !second.contains_key(key) {
                    prop_assert_eq!(merged.get(key), Some(value));
                }
            }
        }

        /// `defaults` never changes a key the target already had
        #[test]
        fn defaults_never_overwrites(target in index_map(), source in index_map()) {
            let mut merged = target.clone();
            defaults(&mut merged, &[&source]);

            for (key, value) in &target {
                prop_assert_eq!(merged.get(key), Some(value));
            }
            for key in source.keys() {
                prop_assert!(merged.contains_key(key));
            }
        }
    }
}
