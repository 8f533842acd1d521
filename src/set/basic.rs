//! Legacy unordered set.
//!
//! [`BasicSet`] predates [`UnorderedSet`] and behaves identically. It stays
//! available so that existing call sites and structures embedding it keep
//! compiling and keep reading the same serialized payloads.
//!
//! Older releases needed a lazily-set readiness flag so that decoding into a
//! never-constructed value would allocate storage first. Here every
//! construction path, including [`Default`], `Deserialize` and
//! [`BasicSet::from_json`], yields fully initialized storage, so a
//! `BasicSet` field of a deserialized struct is usable immediately.
//!
//! New code should use [`UnorderedSet`].

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::{DefaultHashBuilder, Set, SetAlgebra, UnorderedSet};

/// Legacy thread-safe set with unspecified iteration order.
///
/// # Examples
///
/// ```rust
/// use syncset::set::BasicSet;
///
/// let set = BasicSet::from_items(["good", "bye"]);
/// assert!(set.contains(&"bye"));
/// assert_eq!(set.size(), 2);
/// ```
pub struct BasicSet<T, S = DefaultHashBuilder> {
    set: UnorderedSet<T, S>,
}

impl<T> BasicSet<T, DefaultHashBuilder> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            set: UnorderedSet::new(),
        }
    }

    /// Creates a set holding `items`, with duplicates collapsed.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self
    where
        T: Eq + Hash,
    {
        Self {
            set: UnorderedSet::from_items(items),
        }
    }
}

impl<T, S> BasicSet<T, S> {
    /// Creates an empty set that hashes with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            set: UnorderedSet::with_hasher(hasher),
        }
    }

    /// Returns the number of members.
    #[inline]
    pub fn size(&self) -> usize {
        self.set.size()
    }

    /// Alias of [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.set.size()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Converts into the current unordered set type.
    pub fn into_unordered(self) -> UnorderedSet<T, S> {
        self.set
    }
}

impl<T, S> BasicSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Inserts one member, returning `true` if it was not already present.
    pub fn insert(&self, item: T) -> bool {
        self.set.insert(item)
    }

    /// Removes every member and releases the table's storage.
    pub fn clear(&self) {
        self.set.clear();
    }

    /// Inserts every item. Items already present are left as they are.
    pub fn add<I: IntoIterator<Item = T>>(&self, items: I) {
        self.set.add(items);
    }

    /// Removes one member, returning `true` if it was present.
    pub fn remove_one<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.set.remove_one(item)
    }

    /// Removes every item. Absent items are ignored.
    pub fn remove<'a, I>(&self, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.set.remove(items);
    }

    /// Returns `true` if `item` is a member.
    #[inline]
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.set.contains(item)
    }
}

impl<T, S> BasicSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Returns an owned snapshot of the members in arbitrary order.
    pub fn slice(&self) -> Vec<T> {
        self.set.slice()
    }
}

impl<T, S> Set<T> for BasicSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn contains(&self, item: &T) -> bool {
        self.set.contains(item)
    }

    fn size(&self) -> usize {
        self.set.size()
    }

    fn slice(&self) -> Vec<T> {
        self.set.slice()
    }
}

impl<T, S> SetAlgebra<T> for BasicSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self {
        items.into_iter().collect()
    }

    fn add_items<I: IntoIterator<Item = T>>(&self, items: I) {
        self.set.add(items);
    }

    fn remove_items<'a, I>(&self, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.set.remove(items);
    }
}

impl<T, S: Default> Default for BasicSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self {
            set: UnorderedSet::default(),
        }
    }
}

impl<T: Clone, S: Clone> Clone for BasicSet<T, S> {
    fn clone(&self) -> Self {
        Self {
            set: self.set.clone(),
        }
    }
}

impl<T, S> From<UnorderedSet<T, S>> for BasicSet<T, S> {
    fn from(set: UnorderedSet<T, S>) -> Self {
        Self { set }
    }
}

impl<T, S> FromIterator<T> for BasicSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            set: iter.into_iter().collect(),
        }
    }
}

impl<T, S> Extend<T> for BasicSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.set.extend(iter);
    }
}

impl<T, S> IntoIterator for BasicSet<T, S> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.into_iter()
    }
}

impl<T, S> PartialEq for BasicSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.set == other.set
    }
}

impl<T, S> Eq for BasicSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for BasicSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.set, formatter)
    }
}

impl<T: fmt::Display, S> fmt::Display for BasicSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.set, formatter)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T, S> serde::Serialize for BasicSet<T, S>
where
    T: serde::Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        serde::Serialize::serialize(&self.set, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for BasicSet<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <UnorderedSet<T, S> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(feature = "serde")]
impl<T, S> BasicSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Encodes the members as a JSON array in arbitrary order.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Encode`](crate::SetError::Encode) if a member
    /// cannot be represented as JSON.
    pub fn to_json(&self) -> crate::Result<Vec<u8>>
    where
        T: serde::Serialize,
    {
        self.set.to_json()
    }

    /// Decodes a JSON array and adds its elements to this set.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Decode`](crate::SetError::Decode) if `bytes` is
    /// not an array of `T`. The set is unchanged in that case.
    pub fn extend_from_json(&self, bytes: &[u8]) -> crate::Result<()>
    where
        T: serde::de::DeserializeOwned,
    {
        self.set.extend_from_json(bytes)
    }

    /// Creates a set directly from a JSON array.
    ///
    /// This is the construction path for payloads written by older
    /// releases; no separate initialization step is needed afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Decode`](crate::SetError::Decode) if `bytes` is
    /// not an array of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::set::BasicSet;
    ///
    /// let set: BasicSet<String> = BasicSet::from_json(br#"["good", "bye"]"#).unwrap();
    /// assert_eq!(set.size(), 2);
    /// set.add(["hello".to_string()]);
    /// assert_eq!(set.size(), 3);
    /// ```
    pub fn from_json(bytes: &[u8]) -> crate::Result<Self>
    where
        T: serde::de::DeserializeOwned,
        S: Default,
    {
        UnorderedSet::<T, S>::from_json(bytes).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_is_ready_for_use() {
        let set: BasicSet<i32> = BasicSet::default();
        set.add([1, 2, 2]);
        assert_eq!(set.size(), 2);
    }

    #[rstest]
    fn test_remove_absent_is_noop() {
        let set = BasicSet::from_items([1, 2, 3]);
        set.remove(&[4]);
        assert_eq!(set.size(), 3);
        assert!(set.remove_one(&2));
        assert_eq!(set.size(), 2);
    }

    #[rstest]
    fn test_clear_empties() {
        let set = BasicSet::from_items(["a", "b"]);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&"a"));
    }

    #[rstest]
    fn test_round_trip_through_unordered() {
        let legacy = BasicSet::from_items([1, 2]);
        let current = legacy.into_unordered();
        assert_eq!(current.size(), 2);
        let legacy = BasicSet::from(current);
        assert!(legacy.contains(&1));
    }

    #[rstest]
    fn test_equality_ignores_order() {
        assert_eq!(BasicSet::from_items([1, 2]), BasicSet::from_items([2, 1]));
    }
}
