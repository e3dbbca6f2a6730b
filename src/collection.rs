// -----------------------------------------------------------------------------
// src/collection.rs
// -----------------------------------------------------------------------------

use crate::entries::IntoEntries;
use crate::key::CollectionKey;
use crate::truthy::Truthy;
use indexmap::IndexMap;
use log::trace;

/// An insertion-ordered collection of key/value pairs.
///
/// `Collection` wraps an [`IndexMap`] and offers read, transform and
/// aggregate operations over it. Keys are positions `0..n` when the
/// collection is built from a plain sequence; keys of a mapping or another
/// collection are kept as they are.
///
/// ### Immutability
/// Every transform (`filter`, `map`, `merge`, `keys`, `reversed`) borrows the
/// receiver and returns a new collection. Nothing hands out mutable access to
/// the pairs, and [`each`](Collection::each) only runs the caller's side
/// effects.
///
/// ### Index keys and named keys
/// Keys report through [`CollectionKey::as_index`] whether they stand for a
/// position. Index keys are renumbered by [`merge`](Collection::merge) and
/// [`reversed`](Collection::reversed); named keys keep their identity. A
/// collection whose keys are exactly `0, 1, 2, ...` in order is a list and
/// serializes to a JSON array, anything else to a JSON object.
///
/// ### Examples
/// ```rust
/// use sugars_collection::{Collection, Key};
///
/// let numbers: Collection<usize, i32> = Collection::new(vec![1, 2, 3]);
/// let big = numbers.filter(|n| *n > 1);
/// assert_eq!(big.first(), None);
/// assert_eq!(big.get(&1), Some(&2));
///
/// let merged: Collection<Key, i32> = Collection::new(vec![1, 2]).merge(vec![3, 4]);
/// assert_eq!(merged.to_string(), "[1,2,3,4]");
/// ```
#[derive(Debug, Clone)]
pub struct Collection<K, V> {
    items: IndexMap<K, V>,
}

impl<K: CollectionKey, V> Collection<K, V> {
    /// Creates a collection from a sequence, a keyed mapping or another collection.
    #[inline]
    pub fn new(items: impl IntoEntries<K, V>) -> Self {
        let items = items.into_entries();
        trace!("collection built with {} entries", items.len());
        Collection { items }
    }

    /// Creates an empty collection.
    #[inline]
    pub fn empty() -> Self {
        Collection {
            items: IndexMap::new(),
        }
    }

    /// Creates a collection keyed by position from any iterator of values.
    pub fn from_values<I: IntoIterator<Item = V>>(values: I) -> Self {
        let items = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (K::from_index(index), value))
            .collect();
        Collection { items }
    }

    /// Creates a collection from a hashbrown HashMap.
    ///
    /// Entries follow the map's own iteration order.
    #[cfg(feature = "hashbrown")]
    #[inline]
    pub fn from_hashmap<S>(map: ::hashbrown::HashMap<K, V, S>) -> Self {
        Self::new(map)
    }

    /// Returns the full key/value set in insertion order.
    #[inline]
    pub fn all(&self) -> &IndexMap<K, V> {
        &self.items
    }

    /// Consumes the collection, returning the underlying map.
    #[inline]
    pub fn into_inner(self) -> IndexMap<K, V> {
        self.items
    }

    /// Returns the number of entries.
    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the collection has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.items.get(key)
    }

    /// Checks whether `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    /// Checks whether the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.items
            .keys()
            .enumerate()
            .all(|(position, key)| key.as_index() == Some(position))
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.items.iter()
    }

    /// Returns the value at index key 0, if any.
    ///
    /// This is a key lookup, not a positional one: once `filter` has dropped
    /// the entry at 0 there is no first value.
    #[inline]
    pub fn first(&self) -> Option<&V> {
        self.items.get(&K::from_index(0))
    }

    /// Returns a clone of [`first`](Collection::first), or `default`.
    #[inline]
    pub fn first_or(&self, default: V) -> V
    where
        V: Clone,
    {
        self.first().cloned().unwrap_or(default)
    }

    /// Returns the value at index key 0 of the [`reversed`](Collection::reversed) collection.
    ///
    /// For a list this is the final value. In general it is the last value
    /// held under an index key; named keys are never returned.
    pub fn last(&self) -> Option<&V> {
        let zero = K::from_index(0);
        self.reversed_entries()
            .find(|(key, _)| *key == zero)
            .map(|(_, value)| value)
    }

    /// Returns a clone of [`last`](Collection::last), or `default`.
    #[inline]
    pub fn last_or(&self, default: V) -> V
    where
        V: Clone,
    {
        self.last().cloned().unwrap_or(default)
    }

    /// Returns a new collection with the entries in reverse order.
    ///
    /// Index keys are renumbered from 0 in the new order; named keys are kept.
    pub fn reversed(&self) -> Self
    where
        V: Clone,
    {
        let items = self
            .reversed_entries()
            .map(|(key, value)| (key, value.clone()))
            .collect();
        Collection { items }
    }

    fn reversed_entries(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        let mut next = 0;
        self.items.iter().rev().map(move |(key, value)| {
            if key.as_index().is_some() {
                let renumbered = K::from_index(next);
                next += 1;
                (renumbered, value)
            } else {
                (key.clone(), value)
            }
        })
    }

    /// Returns the keys as a new collection indexed from 0.
    pub fn keys(&self) -> Collection<usize, K> {
        Collection::from_values(self.items.keys().cloned())
    }

    /// Returns the values as a new collection indexed from 0.
    pub fn values(&self) -> Collection<usize, V>
    where
        V: Clone,
    {
        Collection::from_values(self.items.values().cloned())
    }

    /// Calls `callback` with every value and its key, in order.
    pub fn each<F: FnMut(&V, &K)>(&self, mut callback: F) -> &Self {
        for (key, value) in &self.items {
            callback(value, key);
        }
        self
    }

    /// Returns the entries whose value satisfies `predicate`, keys untouched.
    pub fn filter<F: FnMut(&V) -> bool>(&self, mut predicate: F) -> Self
    where
        V: Clone,
    {
        let items = self
            .items
            .iter()
            .filter(|(_, value)| predicate(*value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Collection { items }
    }

    /// Returns the entries whose value is [truthy](Truthy), keys untouched.
    pub fn filter_truthy(&self) -> Self
    where
        V: Truthy + Clone,
    {
        self.filter(|value| value.is_truthy())
    }

    /// Maps every value, keeping each result under the key of its source.
    pub fn map<U, F: FnMut(&V, &K) -> U>(&self, mut transform: F) -> Collection<K, U> {
        let items = self
            .items
            .iter()
            .map(|(key, value)| (key.clone(), transform(value, key)))
            .collect();
        Collection { items }
    }

    /// Maps every value, propagating the first error.
    pub fn try_map<U, E, F: FnMut(&V, &K) -> Result<U, E>>(
        &self,
        mut transform: F,
    ) -> Result<Collection<K, U>, E> {
        let mut items = IndexMap::with_capacity(self.items.len());
        for (key, value) in &self.items {
            items.insert(key.clone(), transform(value, key)?);
        }
        Ok(Collection { items })
    }

    /// Combines this collection with `other`.
    ///
    /// Index-keyed entries of both sides are appended in order and
    /// renumbered from 0. Named entries are inserted, a later value
    /// overwriting an earlier one under the same name while keeping the
    /// earlier position.
    pub fn merge(&self, other: impl IntoEntries<K, V>) -> Self
    where
        V: Clone,
    {
        let other = other.into_entries();
        let mut items = IndexMap::with_capacity(self.items.len() + other.len());
        let mut next = 0;
        let ours = self
            .items
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()));
        for (key, value) in ours.chain(other) {
            if key.as_index().is_some() {
                items.insert(K::from_index(next), value);
                next += 1;
            } else {
                items.insert(key, value);
            }
        }
        trace!(
            "merged collection of {} entries into {} entries",
            self.items.len(),
            items.len()
        );
        Collection { items }
    }
}

impl<K, V> Default for Collection<K, V> {
    #[inline]
    fn default() -> Self {
        Collection {
            items: IndexMap::new(),
        }
    }
}

// Equality is order-sensitive, unlike `IndexMap`'s.
impl<K: CollectionKey, V: PartialEq> PartialEq for Collection<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.items.iter().eq(other.items.iter())
    }
}

impl<K: CollectionKey, V: Eq> Eq for Collection<K, V> {}

impl<K: CollectionKey, V> From<Vec<V>> for Collection<K, V> {
    #[inline]
    fn from(values: Vec<V>) -> Self {
        Self::new(values)
    }
}

impl<K: CollectionKey, V> From<IndexMap<K, V>> for Collection<K, V> {
    #[inline]
    fn from(items: IndexMap<K, V>) -> Self {
        Collection { items }
    }
}

impl<K, V> From<Collection<K, V>> for IndexMap<K, V> {
    #[inline]
    fn from(collection: Collection<K, V>) -> Self {
        collection.items
    }
}

impl<K: CollectionKey, V> FromIterator<(K, V)> for Collection<K, V> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Collection {
            items: iter.into_iter().collect(),
        }
    }
}

impl<K, V> IntoIterator for Collection<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Collection<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
