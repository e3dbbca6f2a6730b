//! The "countable" capability.

use crate::collection::Collection;
use crate::key::CollectionKey;
use indexmap::IndexMap;

/// Types that expose how many elements they hold.
pub trait Countable {
    /// Returns the number of elements.
    fn count(&self) -> usize;
}

impl<T> Countable for [T] {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for Vec<T> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Countable for IndexMap<K, V, S> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K: CollectionKey, V> Countable for Collection<K, V> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}
