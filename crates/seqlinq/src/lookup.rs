//! Key-grouping structures.
//!
//! A [`Lookup`] maps each distinct key to the [`Grouping`] of elements that
//! produced it. Groupings keep the order in which their key was first seen,
//! and elements keep source order inside each grouping.

use std::fmt;
use std::ops::Index;

use ahash::RandomState;
use hashbrown::hash_table::{Entry, HashTable};
use seqlinq_compare::{hash_one, DefaultEquality, EqualityComparer};

/// A key and the elements that share it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grouping<K, T> {
    key: K,
    elements: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    /// Creates a grouping from a key and its elements.
    pub fn new(key: K, elements: Vec<T>) -> Self {
        Grouping { key, elements }
    }

    /// Returns the key shared by every element.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the elements in source order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the grouping holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Splits the grouping into its key and elements.
    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.elements)
    }

    /// Drops the key and returns the elements.
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Grouping<K, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// A one-to-many map from keys to groupings.
///
/// Built by [`Seq::to_lookup`](crate::Seq::to_lookup) and friends; key
/// equality comes from the comparer `C`.
///
/// ```
/// use seqlinq::IntoSeq;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let lookup = words.into_seq().to_lookup(|w| w.chars().next());
///
/// assert_eq!(lookup.len(), 3);
/// assert_eq!(lookup[&Some('b')], ["banana", "blueberry"]);
/// assert!(lookup.get(&Some('z')).is_empty());
/// ```
#[derive(Clone)]
pub struct Lookup<K, T, C = DefaultEquality> {
    groups: Vec<Grouping<K, T>>,
    index: HashTable<usize>,
    state: RandomState,
    comparer: C,
}

impl<K, T> Lookup<K, T, DefaultEquality> {
    /// Creates an empty lookup using the key's `Eq` and `Hash`.
    pub fn new() -> Self {
        Lookup::with_comparer(DefaultEquality)
    }
}

impl<K, T> Default for Lookup<K, T, DefaultEquality> {
    fn default() -> Self {
        Lookup::new()
    }
}

impl<K, T, C> Lookup<K, T, C> {
    /// Creates an empty lookup using `comparer` for key equality.
    pub fn with_comparer(comparer: C) -> Self {
        Lookup {
            groups: Vec::new(),
            index: HashTable::new(),
            state: RandomState::new(),
            comparer,
        }
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if the lookup holds no keys.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over the groupings in first-seen key order.
    pub fn iter(&self) -> std::slice::Iter<'_, Grouping<K, T>> {
        self.groups.iter()
    }

    /// Iterates over the keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.groups.iter().map(Grouping::key)
    }

    /// Projects every grouping through `selector`.
    pub fn apply_result_selector<R, F>(&self, mut selector: F) -> Vec<R>
    where
        F: FnMut(&K, &[T]) -> R,
    {
        self.groups
            .iter()
            .map(|g| selector(&g.key, &g.elements))
            .collect()
    }

    pub(crate) fn group_at(&self, position: usize) -> &Grouping<K, T> {
        &self.groups[position]
    }
}

impl<K, T, C: EqualityComparer<K>> Lookup<K, T, C> {
    /// Appends `element` to the grouping for `key`, creating it if needed.
    pub fn insert(&mut self, key: K, element: T) {
        let hash = hash_one(&self.state, &self.comparer, &key);
        let (groups, state, comparer) = (&mut self.groups, &self.state, &self.comparer);
        match self.index.entry(
            hash,
            |&i| comparer.equals(&groups[i].key, &key),
            |&i| hash_one(state, comparer, &groups[i].key),
        ) {
            Entry::Occupied(entry) => groups[*entry.get()].elements.push(element),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push(Grouping::new(key, vec![element]));
            }
        }
    }

    /// Returns the position of the grouping for `key`.
    pub(crate) fn position(&self, key: &K) -> Option<usize> {
        let hash = hash_one(&self.state, &self.comparer, key);
        self.index
            .find(hash, |&i| self.comparer.equals(&self.groups[i].key, key))
            .copied()
    }

    /// Returns the elements for `key`, or an empty slice.
    pub fn get(&self, key: &K) -> &[T] {
        self.grouping(key).map(Grouping::elements).unwrap_or(&[])
    }

    /// Returns the grouping for `key`, if any element produced it.
    pub fn grouping(&self, key: &K) -> Option<&Grouping<K, T>> {
        self.position(key).map(|i| &self.groups[i])
    }

    /// Returns `true` if some element produced `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Builds a lookup from `source`.
    pub(crate) fn build<I, KF, EF>(source: I, key: KF, element: EF, comparer: C) -> Self
    where
        I: IntoIterator,
        KF: FnMut(&I::Item) -> K,
        EF: FnMut(I::Item) -> T,
    {
        let mut lookup = Lookup::with_comparer(comparer);
        lookup.fill(source, key, element);
        lookup
    }

    /// Inserts every element of `source` under its selected key.
    pub(crate) fn fill<I, KF, EF>(&mut self, source: I, mut key: KF, mut element: EF)
    where
        I: IntoIterator,
        KF: FnMut(&I::Item) -> K,
        EF: FnMut(I::Item) -> T,
    {
        let mut count = 0usize;
        for item in source {
            let k = key(&item);
            self.insert(k, element(item));
            count += 1;
        }
        tracing::trace!(elements = count, groups = self.len(), "filled lookup");
    }
}

impl<K, T, C: EqualityComparer<K>> Index<&K> for Lookup<K, T, C> {
    type Output = [T];

    fn index(&self, key: &K) -> &[T] {
        self.get(key)
    }
}

impl<K, T, C> IntoIterator for Lookup<K, T, C> {
    type Item = Grouping<K, T>;
    type IntoIter = std::vec::IntoIter<Grouping<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, K, T, C> IntoIterator for &'a Lookup<K, T, C> {
    type Item = &'a Grouping<K, T>;
    type IntoIter = std::slice::Iter<'a, Grouping<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl<K: fmt::Debug, T: fmt::Debug, C> fmt::Debug for Lookup<K, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.groups.iter().map(|g| (&g.key, &g.elements)))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<K: serde::Serialize, T: serde::Serialize, C> serde::Serialize for Lookup<K, T, C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.groups.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqlinq_compare::CaseInsensitive;

    fn sample() -> Lookup<usize, &'static str> {
        let words = ["one", "two", "three", "four", "five", "six"];
        Lookup::build(words, |w| w.len(), |w| w, DefaultEquality)
    }

    #[test]
    fn groups_in_first_seen_order() {
        let lookup = sample();
        let keys: Vec<_> = lookup.keys().copied().collect();
        assert_eq!(keys, vec![3, 5, 4]);
    }

    #[test]
    fn elements_keep_source_order() {
        let lookup = sample();
        assert_eq!(lookup.get(&3), ["one", "two", "six"]);
        assert_eq!(lookup[&4], ["four", "five"]);
    }

    #[test]
    fn missing_key_is_empty() {
        let lookup = sample();
        assert!(lookup.get(&10).is_empty());
        assert!(!lookup.contains_key(&10));
        assert!(lookup.grouping(&10).is_none());
    }

    #[test]
    fn comparer_folds_keys() {
        let mut lookup = Lookup::with_comparer(CaseInsensitive);
        lookup.insert("Red".to_string(), 1);
        lookup.insert("RED".to_string(), 2);
        lookup.insert("blue".to_string(), 3);

        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get(&"red".to_string()), [1, 2]);
        // The first spelling of the key wins.
        assert_eq!(lookup.grouping(&"red".to_string()).map(|g| g.key().as_str()), Some("Red"));
    }

    #[test]
    fn apply_result_selector_projects() {
        let lookup = sample();
        let counts = lookup.apply_result_selector(|k, v| (*k, v.len()));
        assert_eq!(counts, vec![(3, 3), (5, 1), (4, 2)]);
    }

    #[test]
    fn into_iter_yields_groupings() {
        let groups: Vec<_> = sample().into_iter().map(Grouping::into_parts).collect();
        assert_eq!(groups[1], (5, vec!["three"]));
    }

    #[test]
    fn debug_lists_groups() {
        let mut lookup = Lookup::new();
        lookup.insert('a', 1);
        assert_eq!(format!("{:?}", lookup), "{'a': [1]}");
    }
}
