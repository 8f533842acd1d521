//! Insertion-ordered thread-safe set.
//!
//! [`OrderedSet`] pairs a hash index with an arena-backed circular list. The
//! index maps each member to the handle of its list node, so membership tests
//! stay O(1) while iteration replays insertion order.
//!
//! # Ordering Rules
//!
//! - A new member is appended after the current newest member.
//! - Adding a member that is already present does not move it.
//! - A removed member forgets its position; adding it again appends it.
//!
//! ```rust
//! use syncset::set::OrderedSet;
//!
//! let set = OrderedSet::from_items([1, 2, 3]);
//! set.remove(&[2]);
//! set.add([2, 1]);
//! assert_eq!(set.slice(), vec![1, 3, 2]);
//! ```
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(1)*      |
//! | `remove_one`   | O(1)*      |
//! | `contains`     | O(1)*      |
//! | `size`         | O(1)       |
//! | `first`/`last` | O(1)       |
//! | `slice`        | O(n)       |
//!
//! \* amortized, assuming a well-distributed hash

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use parking_lot::RwLock;

use super::order_list::{Handle, OrderList};
use super::{DefaultHashBuilder, Set, SetAlgebra};

/// Index and order list, always updated together under one lock.
#[derive(Clone)]
struct Ordered<T, S> {
    index: HashMap<T, Handle, S>,
    order: OrderList<T>,
}

impl<T, S> Ordered<T, S> {
    fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            index: HashMap::with_capacity_and_hasher(capacity, hasher),
            order: OrderList::new(),
        }
    }
}

impl<T, S> Ordered<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn clear(&mut self) {
        self.index.clear();
        self.index.shrink_to_fit();
        self.order.clear();
    }

    fn insert(&mut self, item: T) -> bool {
        if self.index.contains_key(&item) {
            return false;
        }
        let handle = self.order.push_back(item.clone());
        self.index.insert(item, handle);
        debug_assert_eq!(self.index.len(), self.order.len());
        true
    }

    fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(handle) = self.index.remove(item) else {
            return false;
        };
        let unlinked = self.order.unlink(handle);
        debug_assert!(unlinked.is_some(), "index referred to an unlinked node");
        debug_assert_eq!(self.index.len(), self.order.len());
        true
    }
}

/// A thread-safe set that iterates in insertion order.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Eq`, `Hash` and `Clone`.
/// * `S` - The hash builder, [`DefaultHashBuilder`] unless specified.
///
/// # Examples
///
/// ```rust
/// use syncset::set::OrderedSet;
///
/// let set = OrderedSet::new();
/// set.add(["c", "a", "b", "a"]);
///
/// assert_eq!(set.slice(), vec!["c", "a", "b"]);
/// assert_eq!(set.first(), Some("c"));
/// assert_eq!(set.last(), Some("b"));
/// ```
pub struct OrderedSet<T, S = DefaultHashBuilder> {
    inner: RwLock<Ordered<T, S>>,
}

impl<T> OrderedSet<T, DefaultHashBuilder> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with index room for `capacity` members.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a set holding `items` in first-occurrence order.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self
    where
        T: Eq + Hash + Clone,
    {
        items.into_iter().collect()
    }
}

impl<T, S> OrderedSet<T, S> {
    /// Creates an empty set that hashes with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty set with index room for `capacity` members that
    /// hashes with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: RwLock::new(Ordered::with_capacity_and_hasher(capacity, hasher)),
        }
    }

    /// Returns the number of members.
    #[inline]
    pub fn size(&self) -> usize {
        self.inner.read().order.len()
    }

    /// Alias of [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T, S> OrderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Appends one member, returning `true` if it was not already present.
    ///
    /// An existing member keeps its position.
    pub fn insert(&self, item: T) -> bool {
        self.inner.write().insert(item)
    }

    /// Removes every member and releases both the index and the order list.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        tracing::trace!(removed = inner.order.len(), "clearing ordered set");
        inner.clear();
    }

    /// Appends every item that is not already present, in iteration order.
    pub fn add<I: IntoIterator<Item = T>>(&self, items: I) {
        let mut inner = self.inner.write();
        for item in items {
            inner.insert(item);
        }
    }

    /// Removes one member, returning `true` if it was present.
    pub fn remove_one<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().remove(item)
    }

    /// Removes every item. Absent items are ignored.
    pub fn remove<'a, I>(&self, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut inner = self.inner.write();
        for item in items {
            inner.remove(item);
        }
    }

    /// Returns `true` if `item` is a member.
    #[inline]
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().index.contains_key(item)
    }

    /// Returns an owned snapshot of the members in insertion order.
    pub fn slice(&self) -> Vec<T> {
        self.inner.read().order.iter().cloned().collect()
    }

    /// Returns the oldest member.
    pub fn first(&self) -> Option<T> {
        self.inner.read().order.first().cloned()
    }

    /// Returns the newest member.
    pub fn last(&self) -> Option<T> {
        self.inner.read().order.last().cloned()
    }
}

// =============================================================================
// Capability Traits
// =============================================================================

impl<T, S> Set<T> for OrderedSet<T, S>
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

impl<T, S> SetAlgebra<T> for OrderedSet<T, S>
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

impl<T, S: Default> Default for OrderedSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Clone, S: Clone> Clone for OrderedSet<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: RwLock::new(self.inner.read().clone()),
        }
    }
}

impl<T, S> FromIterator<T> for OrderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for OrderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let inner = self.inner.get_mut();
        for item in iter {
            inner.insert(item);
        }
    }
}

impl<T, S> IntoIterator for OrderedSet<T, S> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_inner().order.into_values().into_iter()
    }
}

/// Two ordered sets are equal when they hold the same members in the same
/// order.
impl<T, S> PartialEq for OrderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.slice() == other.slice()
    }
}

impl<T, S> Eq for OrderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for OrderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_set()
            .entries(self.inner.read().order.iter())
            .finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for OrderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let inner = self.inner.read();
        for (position, member) in inner.order.iter().enumerate() {
            if position > 0 {
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
impl<T, S> serde::Serialize for OrderedSet<T, S>
where
    T: serde::Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        let inner = self.inner.read();
        super::json::serialize_members(inner.order.iter(), inner.order.len(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for OrderedSet<T, S>
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
impl<T, S> OrderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Encodes the members as a JSON array in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Encode`](crate::SetError::Encode) if a member
    /// cannot be represented as JSON.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::set::OrderedSet;
    ///
    /// let set = OrderedSet::from_items([3, 1, 2]);
    /// assert_eq!(set.to_json().unwrap(), b"[3,1,2]");
    /// ```
    pub fn to_json(&self) -> crate::Result<Vec<u8>>
    where
        T: serde::Serialize,
    {
        super::json::encode(self)
    }

    /// Decodes a JSON array and appends its new elements in array order.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Decode`](crate::SetError::Decode) if `bytes` is
    /// not an array of `T`. The set is unchanged in that case.
    pub fn extend_from_json(&self, bytes: &[u8]) -> crate::Result<()>
    where
        T: serde::de::DeserializeOwned,
    {
        let members = super::json::decode(bytes)?;
        self.add(members);
        Ok(())
    }

    /// Creates a set from a JSON array, keeping array order.
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
