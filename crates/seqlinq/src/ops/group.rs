//! Grouping: lookups, `group_by` and the keyed aggregations.

use std::hash::Hash;

use ahash::RandomState;
use hashbrown::hash_table::{Entry, HashTable};
use seqlinq_compare::{DefaultEquality, EqualityComparer};

use super::Deferred;
use crate::lookup::{Grouping, Lookup};
use crate::seq::Seq;

impl<I: Iterator> Seq<I> {
    /// Builds a [`Lookup`] of the elements keyed by `key`.
    pub fn to_lookup<K, F>(self, key: F) -> Lookup<K, I::Item>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        Lookup::build(self.iter, key, |item| item, DefaultEquality)
    }

    /// Builds a [`Lookup`] of projected elements keyed by `key`.
    pub fn to_lookup_element<K, T, F, E>(self, key: F, element: E) -> Lookup<K, T>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
        E: FnMut(I::Item) -> T,
    {
        Lookup::build(self.iter, key, element, DefaultEquality)
    }

    /// Builds a [`Lookup`] whose keys are compared with `comparer`.
    pub fn to_lookup_with<K, T, F, E, C>(self, key: F, element: E, comparer: C) -> Lookup<K, T, C>
    where
        F: FnMut(&I::Item) -> K,
        E: FnMut(I::Item) -> T,
        C: EqualityComparer<K>,
    {
        Lookup::build(self.iter, key, element, comparer)
    }

    /// Groups the elements by `key`, in first-seen key order.
    ///
    /// The whole source is read on the first pull.
    ///
    /// ```
    /// use seqlinq::IntoSeq;
    ///
    /// let groups: Vec<(bool, Vec<i32>)> = (1..=6)
    ///     .into_seq()
    ///     .group_by(|n| n % 2 == 0)
    ///     .select(|g| g.into_parts())
    ///     .to_vec();
    ///
    /// assert_eq!(groups, vec![(false, vec![1, 3, 5]), (true, vec![2, 4, 6])]);
    /// ```
    pub fn group_by<K, F>(self, key: F) -> Seq<impl Iterator<Item = Grouping<K, I::Item>>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        self.group_by_with(key, |item| item, DefaultEquality)
    }

    /// Groups projected elements by `key`.
    pub fn group_by_element<K, T, F, E>(
        self,
        key: F,
        element: E,
    ) -> Seq<impl Iterator<Item = Grouping<K, T>>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
        E: FnMut(I::Item) -> T,
    {
        self.group_by_with(key, element, DefaultEquality)
    }

    /// Groups projected elements, comparing keys with `comparer`.
    pub fn group_by_with<K, T, F, E, C>(
        self,
        key: F,
        element: E,
        comparer: C,
    ) -> Seq<impl Iterator<Item = Grouping<K, T>>>
    where
        F: FnMut(&I::Item) -> K,
        E: FnMut(I::Item) -> T,
        C: EqualityComparer<K>,
    {
        let source = self.iter;
        Seq::new(Deferred::new(move || {
            Lookup::build(source, key, element, comparer).into_iter()
        }))
    }

    /// Groups by `key` and projects every group with `result`.
    pub fn group_by_result<K, F, RF, R>(self, key: F, mut result: RF) -> Seq<impl Iterator<Item = R>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
        RF: FnMut(K, Vec<I::Item>) -> R,
    {
        let source = self.iter;
        Seq::new(Deferred::new(move || {
            Lookup::build(source, key, |item| item, DefaultEquality)
                .into_iter()
                .map(move |group| {
                    let (key, elements) = group.into_parts();
                    result(key, elements)
                })
        }))
    }

    /// Counts the elements per key, in first-seen key order.
    pub fn count_by<K, F>(self, key: F) -> Seq<impl Iterator<Item = (K, usize)>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        self.aggregate_by(key, 0usize, |count, _| count + 1)
    }

    /// Folds the elements of every key, starting each key from `seed`.
    ///
    /// ```
    /// use seqlinq::IntoSeq;
    ///
    /// let sales = [("north", 3), ("south", 5), ("north", 4)];
    /// let totals = sales
    ///     .into_seq()
    ///     .aggregate_by(|s| s.0, 0, |sum, s| sum + s.1)
    ///     .to_vec();
    ///
    /// assert_eq!(totals, vec![("north", 7), ("south", 5)]);
    /// ```
    pub fn aggregate_by<K, S, F, A>(
        self,
        key: F,
        seed: S,
        func: A,
    ) -> Seq<impl Iterator<Item = (K, S)>>
    where
        K: Eq + Hash,
        S: Clone,
        F: FnMut(&I::Item) -> K,
        A: FnMut(S, I::Item) -> S,
    {
        let source = self.iter;
        Seq::new(Deferred::new(move || {
            accumulate(source, key, seed, func).into_iter()
        }))
    }
}

/// Folds `source` per key, keeping keys in first-seen order.
fn accumulate<I, K, S, F, A>(source: I, mut key: F, seed: S, mut func: A) -> Vec<(K, S)>
where
    I: Iterator,
    K: Eq + Hash,
    S: Clone,
    F: FnMut(&I::Item) -> K,
    A: FnMut(S, I::Item) -> S,
{
    let state = RandomState::new();
    let mut index: HashTable<usize> = HashTable::new();
    let mut entries: Vec<(K, S)> = Vec::new();

    for item in source {
        let k = key(&item);
        let hash = state.hash_one(&k);
        match index.entry(
            hash,
            |&i| entries[i].0 == k,
            |&i| state.hash_one(&entries[i].0),
        ) {
            Entry::Occupied(entry) => {
                let acc = &mut entries[*entry.get()].1;
                let prev = std::mem::replace(acc, seed.clone());
                *acc = func(prev, item);
            }
            Entry::Vacant(slot) => {
                slot.insert(entries.len());
                let acc = func(seed.clone(), item);
                entries.push((k, acc));
            }
        }
    }

    tracing::trace!(groups = entries.len(), "accumulated by key");
    entries
}
