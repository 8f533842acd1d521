//! Thread-safe set collections.
//!
//! This module provides three interchangeable set implementations, each
//! guarding its storage with its own reader/writer lock:
//!
//! - [`UnorderedSet`]: hash-backed membership store, iteration order unspecified
//! - [`OrderedSet`]: hash-backed membership store that replays insertion order
//! - [`BasicSet`]: legacy name for an unordered set, kept for existing
//!   serialized payloads and call sites
//!
//! # Shared Capabilities
//!
//! Every variant implements [`Set`], the object-safe capability used to pass
//! "another set" into an operation, and [`SetAlgebra`], which derives union,
//! intersection, difference and the subset relations from a small number of
//! primitives. Operations that produce a new set always use the receiver's
//! variant, so an ordered receiver yields an ordered result.
//!
//! ```rust
//! use syncset::set::{OrderedSet, SetAlgebra, UnorderedSet};
//!
//! let ordered: OrderedSet<i32> = [2, 3, 4].into_iter().collect();
//! let unordered: UnorderedSet<i32> = [1, 2, 3].into_iter().collect();
//!
//! let union = ordered.union(&unordered);
//! assert_eq!(union.slice(), vec![2, 3, 4, 1]);
//! ```
//!
//! # Locking
//!
//! Mutating operations hold the write lock for their full duration and read
//! operations hold the read lock. Set algebra reads each operand through its
//! public operations one after the other and never holds two locks at once,
//! so the result is not an atomic snapshot when an operand is mutated
//! concurrently.

mod basic;
#[cfg(feature = "serde")]
mod json;
mod order_list;
mod ordered;
mod unordered;

pub use basic::BasicSet;
pub use ordered::OrderedSet;
pub use unordered::UnorderedSet;

// =============================================================================
// Hash Builder Selection
// =============================================================================

/// Hash builder used when a set is created without an explicit hasher.
///
/// With the `ahash` feature this is `ahash::RandomState`, with the `fxhash`
/// feature it is `rustc_hash::FxBuildHasher`, and otherwise the standard
/// library's `RandomState`. `ahash` wins when both features are enabled.
#[cfg(feature = "ahash")]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used when a set is created without an explicit hasher.
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used when a set is created without an explicit hasher.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

// =============================================================================
// Capability Traits
// =============================================================================

/// The read capability shared by every set variant.
///
/// This trait is object safe so that any variant can be handed to another
/// variant's operations as `&dyn Set<T>`.
///
/// # Examples
///
/// ```rust
/// use syncset::set::{BasicSet, OrderedSet, Set};
///
/// let small: OrderedSet<i32> = [1, 2].into_iter().collect();
/// let large: BasicSet<i32> = [1, 2, 3].into_iter().collect();
///
/// let sets: [&dyn Set<i32>; 2] = [&small, &large];
/// assert!(sets[0].is_subset_of(sets[1]));
/// assert!(!sets[1].is_subset_of(sets[0]));
/// ```
pub trait Set<T> {
    /// Returns `true` if `item` is a member of the set.
    fn contains(&self, item: &T) -> bool;

    /// Returns the number of members.
    fn size(&self) -> usize;

    /// Returns an owned snapshot of the members.
    ///
    /// Ordered variants return members in insertion order.
    fn slice(&self) -> Vec<T>;

    /// Returns `true` if every member of `self` is also a member of `other`.
    fn is_subset_of(&self, other: &dyn Set<T>) -> bool {
        self.slice().iter().all(|item| other.contains(item))
    }
}

/// Set algebra derived from construction, insertion and removal.
///
/// Results are new sets of the receiver's variant; neither operand is
/// modified.
pub trait SetAlgebra<T>: Set<T> + Sized {
    /// Builds a new set of this variant from `items`.
    fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self;

    /// Adds every item, ignoring those already present.
    fn add_items<I: IntoIterator<Item = T>>(&self, items: I);

    /// Removes every item, ignoring those not present.
    fn remove_items<'a, I>(&self, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a;

    /// Returns the members of either set.
    ///
    /// The receiver's members come first, followed by members of `other` in
    /// the order `other` reports them.
    fn union(&self, other: &dyn Set<T>) -> Self {
        let result = Self::from_items(self.slice());
        result.add_items(other.slice());
        result
    }

    /// Returns the members of the receiver that are also in `other`.
    fn intersection(&self, other: &dyn Set<T>) -> Self {
        Self::from_items(
            self.slice()
                .into_iter()
                .filter(|item| other.contains(item)),
        )
    }

    /// Returns the symmetric difference: members of exactly one of the sets.
    ///
    /// Computed as `(self ∪ other) − (self ∩ other)`. Use
    /// [`subtract`](SetAlgebra::subtract) for the members of the receiver
    /// that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::set::{SetAlgebra, UnorderedSet};
    ///
    /// let left: UnorderedSet<i32> = [1, 2, 3].into_iter().collect();
    /// let right: UnorderedSet<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// let difference = left.difference(&right);
    /// assert_eq!(difference.size(), 2);
    /// assert!(difference.contains(&1));
    /// assert!(difference.contains(&4));
    /// ```
    fn difference(&self, other: &dyn Set<T>) -> Self {
        let result = self.union(other);
        result.remove_items(&self.intersection(other).slice());
        result
    }

    /// Returns the members of the receiver that are not in `other`.
    fn subtract(&self, other: &dyn Set<T>) -> Self {
        Self::from_items(
            self.slice()
                .into_iter()
                .filter(|item| !other.contains(item)),
        )
    }

    /// Returns `true` if `other` is a subset of the receiver.
    fn is_superset_of(&self, other: &dyn Set<T>) -> bool {
        other.is_subset_of(self)
    }

    /// Returns `true` if the sets share no members.
    fn is_disjoint(&self, other: &dyn Set<T>) -> bool {
        !self.slice().iter().any(|item| other.contains(item))
    }
}

// Every variant is shareable across threads without further wrapping.
static_assertions::assert_impl_all!(UnorderedSet<String>: Send, Sync);
static_assertions::assert_impl_all!(OrderedSet<String>: Send, Sync);
static_assertions::assert_impl_all!(BasicSet<String>: Send, Sync);
static_assertions::assert_obj_safe!(Set<i32>);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_union_with_self_does_not_deadlock() {
        let set: UnorderedSet<i32> = [1, 2, 3].into_iter().collect();
        let union = set.union(&set);
        assert_eq!(union.size(), 3);
    }

    #[rstest]
    fn test_difference_with_self_is_empty() {
        let set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
        assert!(set.difference(&set).is_empty());
    }

    #[rstest]
    fn test_subtract_is_asymmetric() {
        let left: UnorderedSet<i32> = [1, 2, 3].into_iter().collect();
        let right: BasicSet<i32> = [2, 3, 4].into_iter().collect();

        let result = left.subtract(&right);
        assert_eq!(result.size(), 1);
        assert!(result.contains(&1));
        assert!(!result.contains(&4));
    }

    #[rstest]
    #[case(&[1, 2], &[3, 4], true)]
    #[case(&[1, 2], &[2, 3], false)]
    #[case(&[], &[1], true)]
    fn test_is_disjoint(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: bool) {
        let left: UnorderedSet<i32> = left.iter().copied().collect();
        let right: OrderedSet<i32> = right.iter().copied().collect();
        assert_eq!(left.is_disjoint(&right), expected);
    }

    #[rstest]
    fn test_empty_set_is_subset_of_everything() {
        let empty: OrderedSet<i32> = OrderedSet::new();
        let other: UnorderedSet<i32> = [1].into_iter().collect();
        assert!(empty.is_subset_of(&other));
        assert!(empty.is_subset_of(&empty));
        assert!(other.is_superset_of(&empty));
    }
}
