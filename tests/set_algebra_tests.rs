//! Integration tests for set algebra across variants.
//!
//! Any variant may appear on either side of an operation; the result always
//! takes the receiver's variant and ordering.

use rstest::rstest;
use syncset::set::{BasicSet, OrderedSet, Set, SetAlgebra, UnorderedSet};

fn sorted(mut members: Vec<i32>) -> Vec<i32> {
    members.sort_unstable();
    members
}

// =============================================================================
// Union
// =============================================================================

#[rstest]
fn test_union_contains_both_operands() {
    let left = UnorderedSet::from_items([1, 2, 3]);
    let right = UnorderedSet::from_items([3, 4]);
    let union = left.union(&right);
    assert_eq!(sorted(union.slice()), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_union_leaves_operands_untouched() {
    let left = OrderedSet::from_items([1, 2]);
    let right = BasicSet::from_items([2, 3]);
    let _ = left.union(&right);
    assert_eq!(left.slice(), vec![1, 2]);
    assert_eq!(sorted(right.slice()), vec![2, 3]);
}

#[rstest]
fn test_ordered_union_with_unordered() {
    let ordered = OrderedSet::from_items([2, 3, 4]);
    let unordered = UnorderedSet::from_items([1, 2, 3]);

    let union = ordered.union(&unordered);
    assert_eq!(union.size(), 4);
    for member in 1..=4 {
        assert!(union.contains(&member));
    }
    assert_eq!(union.slice(), vec![2, 3, 4, 1]);
}

#[rstest]
fn test_ordered_union_with_ordered_appends_in_operand_order() {
    let left = OrderedSet::from_items([1, 2]);
    let right = OrderedSet::from_items([5, 2, 4, 3]);
    assert_eq!(left.union(&right).slice(), vec![1, 2, 5, 4, 3]);
}

#[rstest]
fn test_unordered_union_with_ordered_yields_unordered() {
    let unordered = UnorderedSet::from_items([1]);
    let ordered = OrderedSet::from_items([2, 3]);
    let union: UnorderedSet<i32> = unordered.union(&ordered);
    assert_eq!(union.size(), 3);
}

// =============================================================================
// Intersection
// =============================================================================

#[rstest]
#[case(&[1, 2, 3], &[2, 3, 4], &[2, 3])]
#[case(&[1, 2], &[3, 4], &[])]
#[case(&[], &[1], &[])]
#[case(&[5, 6], &[5, 6], &[5, 6])]
fn test_intersection(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
    let left = UnorderedSet::from_items(left.iter().copied());
    let right = BasicSet::from_items(right.iter().copied());
    assert_eq!(sorted(left.intersection(&right).slice()), expected.to_vec());
}

#[rstest]
fn test_ordered_intersection_keeps_receiver_order() {
    let ordered = OrderedSet::from_items([4, 3, 2, 1]);
    let other = UnorderedSet::from_items([1, 3, 5]);
    assert_eq!(ordered.intersection(&other).slice(), vec![3, 1]);
}

// =============================================================================
// Difference
// =============================================================================

#[rstest]
fn test_difference_is_symmetric() {
    let left = UnorderedSet::from_items([1, 2, 3]);
    let right = UnorderedSet::from_items([2, 3, 4]);

    let difference = left.difference(&right);
    assert_eq!(difference.size(), 2);
    assert_eq!(sorted(difference.slice()), vec![1, 4]);

    let reverse = right.difference(&left);
    assert_eq!(sorted(reverse.slice()), vec![1, 4]);
}

#[rstest]
fn test_ordered_difference_order() {
    let ordered = OrderedSet::from_items([1, 2, 3]);
    let other = OrderedSet::from_items([4, 3, 2, 5]);
    assert_eq!(ordered.difference(&other).slice(), vec![1, 4, 5]);
}

#[rstest]
fn test_subtract_keeps_only_receiver_members() {
    let ordered = OrderedSet::from_items([1, 2, 3]);
    let other = UnorderedSet::from_items([2, 3, 4]);
    assert_eq!(ordered.subtract(&other).slice(), vec![1]);
}

// =============================================================================
// Subset and Superset
// =============================================================================

#[rstest]
#[case(&[1, 2], &[1, 2, 3], true)]
#[case(&[1, 2, 3], &[1, 2], false)]
#[case(&[], &[], true)]
#[case(&[1], &[2], false)]
#[case(&[1, 2], &[2, 1], true)]
fn test_subset_superset_duality(
    #[case] left: &[i32],
    #[case] right: &[i32],
    #[case] expected: bool,
) {
    let left = OrderedSet::from_items(left.iter().copied());
    let right = UnorderedSet::from_items(right.iter().copied());
    assert_eq!(left.is_subset_of(&right), expected);
    assert_eq!(right.is_superset_of(&left), expected);
}

#[rstest]
fn test_trait_objects_mix_variants() {
    let unordered = UnorderedSet::from_items([1, 2]);
    let ordered = OrderedSet::from_items([1, 2, 3]);
    let basic = BasicSet::from_items([1, 2, 3, 4]);

    let chain: [&dyn Set<i32>; 3] = [&unordered, &ordered, &basic];
    for window in chain.windows(2) {
        assert!(window[0].is_subset_of(window[1]));
        assert!(!window[1].is_subset_of(window[0]));
    }
}

#[rstest]
fn test_union_cardinality_identity() {
    let left = UnorderedSet::from_items([1, 2, 3, 4, 5]);
    let right = OrderedSet::from_items([4, 5, 6]);
    let union = left.union(&right);
    let intersection = left.intersection(&right);
    assert_eq!(union.size(), left.size() + right.size() - intersection.size());
}
