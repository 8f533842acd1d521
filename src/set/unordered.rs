//! Unordered thread-safe set.
//!
//! [`UnorderedSet`] is a `HashSet` behind a `parking_lot::RwLock`. All
//! operations take `&self`, so a set can be shared between threads through a
//! plain reference or an `Arc` without an outer lock.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(1)*      |
//! | `remove_one`   | O(1)*      |
//! | `contains`     | O(1)*      |
//! | `size`         | O(1)       |
//! | `clear`        | O(n)       |
//! | `slice`        | O(n)       |
//!
//! \* amortized, assuming a well-distributed hash

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use parking_lot::RwLock;

use super::{DefaultHashBuilder, Set, SetAlgebra};

/// A thread-safe set with unspecified iteration order.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Eq`, `Hash` and `Clone`.
/// * `S` - The hash builder, [`DefaultHashBuilder`] unless specified.
///
/// # Examples
///
/// ```rust
/// use syncset::set::UnorderedSet;
///
/// let set = UnorderedSet::new();
/// set.add([1, 2, 3]);
/// set.add([3]);
///
/// assert_eq!(set.size(), 3);
/// assert!(set.contains(&2));
///
/// set.remove(&[2, 7]);
/// assert_eq!(set.size(), 2);
/// assert!(!set.contains(&2));
/// ```
pub struct UnorderedSet<T, S = DefaultHashBuilder> {
    items: RwLock<HashSet<T, S>>,
}

impl<T> UnorderedSet<T, DefaultHashBuilder> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for `capacity` members.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a set holding `items`, with duplicates collapsed.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self
    where
        T: Eq + Hash,
    {
        items.into_iter().collect()
    }
}

impl<T, S> UnorderedSet<T, S> {
    /// Creates an empty set that hashes with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            items: RwLock::new(HashSet::with_hasher(hasher)),
        }
    }

    /// Creates an empty set with room for `capacity` members that hashes
    /// with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            items: RwLock::new(HashSet::with_capacity_and_hasher(capacity, hasher)),
        }
    }

    /// Returns the number of members.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.read().len()
    }

    /// Alias of [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl<T, S> UnorderedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Inserts one member, returning `true` if it was not already present.
    pub fn insert(&self, item: T) -> bool {
        self.items.write().insert(item)
    }

    /// Removes every member and releases the table's storage.
    ///
    /// Snapshots previously returned by [`slice`](Self::slice) are owned
    /// vectors and are unaffected.
    pub fn clear(&self) {
        let mut items = self.items.write();
        tracing::trace!(removed = items.len(), "clearing unordered set");
        items.clear();
        items.shrink_to_fit();
    }

    /// Inserts every item. Items already present are left as they are.
    pub fn add<I: IntoIterator<Item = T>>(&self, items: I) {
        let mut guard = self.items.write();
        guard.extend(items);
    }

    /// Removes one member, returning `true` if it was present.
    pub fn remove_one<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.write().remove(item)
    }

    /// Removes every item. Absent items are ignored.
    pub fn remove<'a, I>(&self, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut guard = self.items.write();
        for item in items {
            guard.remove(item);
        }
    }

    /// Returns `true` if `item` is a member.
    ///
    /// Lookup uses the element's own equality, so with `String` members a
    /// `&str` can be passed directly.
    #[inline]
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.read().contains(item)
    }
}

impl<T, S> UnorderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Returns an owned snapshot of the members in arbitrary order.
    pub fn slice(&self) -> Vec<T> {
        self.items.read().iter().cloned().collect()
    }
}

// =============================================================================
// Capability Traits
// =============================================================================

impl<T, S> Set<T> for UnorderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn contains(&self, item: &T) -> bool {
        Self::contains(self, item)
    }

    fn size(&self) -> usize {
        Self::size(self)
    }

    fn slice(&self) -> Vec<T> {
        Self::slice(self)
    }
}

impl<T, S> SetAlgebra<T> for UnorderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self {
        items.into_iter().collect()
    }

    fn add_items<I: IntoIterator<Item = T>>(&self, items: I) {
        self.add(items);
    }

    fn remove_items<'a, I>(&self, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.remove(items);
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for UnorderedSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Clone, S: Clone> Clone for UnorderedSet<T, S> {
    fn clone(&self) -> Self {
        Self {
            items: RwLock::new(self.items.read().clone()),
        }
    }
}

impl<T, S> FromIterator<T> for UnorderedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl<T, S> Extend<T> for UnorderedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.get_mut().extend(iter);
    }
}

impl<T, S> IntoIterator for UnorderedSet<T, S> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_inner().into_iter()
    }
}

impl<T, S> PartialEq for UnorderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        let members = self.slice();
        members.len() == other.size() && members.iter().all(|member| other.contains(member))
    }
}

impl<T, S> Eq for UnorderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for UnorderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.items.read().iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for UnorderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for member in self.items.read().iter() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{member}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T, S> serde::Serialize for UnorderedSet<T, S>
where
    T: serde::Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        let items = self.items.read();
        super::json::serialize_members(items.iter(), items.len(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for UnorderedSet<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(super::json::SetVisitor::new())
    }
}

#[cfg(feature = "serde")]
impl<T, S> UnorderedSet<T, S>
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
        super::json::encode(self)
    }

    /// Decodes a JSON array and adds its elements to this set.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Decode`](crate::SetError::Decode) if `bytes` is
    /// not an array of `T`. The set is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::set::UnorderedSet;
    ///
    /// let set = UnorderedSet::from_items([1]);
    /// set.extend_from_json(b"[1, 2, 3]").unwrap();
    /// assert_eq!(set.size(), 3);
    ///
    /// assert!(set.extend_from_json(b"{\"not\": \"an array\"}").is_err());
    /// assert_eq!(set.size(), 3);
    /// ```
    pub fn extend_from_json(&self, bytes: &[u8]) -> crate::Result<()>
    where
        T: serde::de::DeserializeOwned,
    {
        let members = super::json::decode(bytes)?;
        self.add(members);
        Ok(())
    }

    /// Creates a set from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Decode`](crate::SetError::Decode) if `bytes` is
    /// not an array of `T`.
    pub fn from_json(bytes: &[u8]) -> crate::Result<Self>
    where
        T: serde::de::DeserializeOwned,
        S: Default,
    {
        let members: Vec<T> = super::json::decode(bytes)?;
        Ok(members.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
