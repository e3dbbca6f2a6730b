//! Conversion of native sequences and mappings into collection entries.

use crate::collection::Collection;
use crate::key::CollectionKey;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Anything a [`Collection`] can be built from or merged with.
///
/// Sequences are keyed by position starting at 0. Mappings keep their keys.
/// Another collection hands over its current pairs.
pub trait IntoEntries<K, V> {
    /// Converts `self` into ordered key/value pairs.
    fn into_entries(self) -> IndexMap<K, V>;
}

impl<K: CollectionKey, V> IntoEntries<K, V> for Vec<V> {
    fn into_entries(self) -> IndexMap<K, V> {
        self.into_iter()
            .enumerate()
            .map(|(index, value)| (K::from_index(index), value))
            .collect()
    }
}

impl<K: CollectionKey, V, const N: usize> IntoEntries<K, V> for [V; N] {
    fn into_entries(self) -> IndexMap<K, V> {
        Vec::from(self).into_entries()
    }
}

impl<K: CollectionKey, V: Clone> IntoEntries<K, V> for &[V] {
    fn into_entries(self) -> IndexMap<K, V> {
        self.to_vec().into_entries()
    }
}

impl<K: CollectionKey, V> IntoEntries<K, V> for IndexMap<K, V> {
    #[inline]
    fn into_entries(self) -> IndexMap<K, V> {
        self
    }
}

impl<K: CollectionKey, V> IntoEntries<K, V> for BTreeMap<K, V> {
    fn into_entries(self) -> IndexMap<K, V> {
        self.into_iter().collect()
    }
}

#[cfg(feature = "hashbrown")]
impl<K: CollectionKey, V, S> IntoEntries<K, V> for ::hashbrown::HashMap<K, V, S> {
    fn into_entries(self) -> IndexMap<K, V> {
        self.into_iter().collect()
    }
}

impl<K: CollectionKey, V> IntoEntries<K, V> for Collection<K, V> {
    #[inline]
    fn into_entries(self) -> IndexMap<K, V> {
        self.into_inner()
    }
}

impl<K: CollectionKey, V: Clone> IntoEntries<K, V> for &Collection<K, V> {
    #[inline]
    fn into_entries(self) -> IndexMap<K, V> {
        self.all().clone()
    }
}
