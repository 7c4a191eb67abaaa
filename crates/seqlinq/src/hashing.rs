//! Comparer-aware hash set backing the set operators.

use ahash::RandomState;
use hashbrown::hash_table::{Entry, HashTable};
use seqlinq_compare::{hash_one, EqualityComparer};

/// A hash set whose equality and hashing come from an [`EqualityComparer`].
#[derive(Clone)]
pub(crate) struct KeySet<K, C> {
    table: HashTable<K>,
    state: RandomState,
    comparer: C,
}

impl<K, C: EqualityComparer<K>> KeySet<K, C> {
    pub(crate) fn new(comparer: C) -> Self {
        KeySet {
            table: HashTable::new(),
            state: RandomState::new(),
            comparer,
        }
    }

    /// Inserts `key`, returning `false` if an equal key was already present.
    pub(crate) fn insert(&mut self, key: K) -> bool {
        let hash = hash_one(&self.state, &self.comparer, &key);
        let (state, comparer) = (&self.state, &self.comparer);
        match self.table.entry(
            hash,
            |k| comparer.equals(k, &key),
            |k| hash_one(state, comparer, k),
        ) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(key);
                true
            }
        }
    }

    /// Removes an equal key, returning `true` if one was present.
    pub(crate) fn remove(&mut self, key: &K) -> bool {
        let hash = hash_one(&self.state, &self.comparer, key);
        let (state, comparer) = (&self.state, &self.comparer);
        match self.table.entry(
            hash,
            |k| comparer.equals(k, key),
            |k| hash_one(state, comparer, k),
        ) {
            Entry::Occupied(entry) => {
                entry.remove();
                true
            }
            Entry::Vacant(_) => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, key: &K) -> bool {
        let hash = hash_one(&self.state, &self.comparer, key);
        self.table
            .find(hash, |k| self.comparer.equals(k, key))
            .is_some()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }
}

impl<K, C: EqualityComparer<K>> Extend<K> for KeySet<K, C> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}
