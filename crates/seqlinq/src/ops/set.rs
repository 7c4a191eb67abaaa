//! Set operators: `distinct`, `union`, `intersect` and `except`.
//!
//! All of them are deferred and keep the order of the first sequence. Keys
//! are tracked in a [`KeySet`] so any [`EqualityComparer`] can drive them.

use std::hash::Hash;

use seqlinq_compare::{DefaultEquality, EqualityComparer};

use crate::hashing::KeySet;
use crate::seq::Seq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Yield an element the first time its key is seen.
    Admit,
    /// Yield an element if its key is still in the set, removing it.
    Consume,
}

/// Iterator behind every set operator.
///
/// `seed` holds the keys of the second sequence, if any; they are loaded
/// into the set on the first pull.
pub struct SetFilter<I, F, K, C, S> {
    source: I,
    key: F,
    seed: Option<S>,
    set: KeySet<K, C>,
    mode: Mode,
}

impl<I, F, K, C, S> Iterator for SetFilter<I, F, K, C, S>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: EqualityComparer<K>,
    S: Iterator<Item = K>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(seed) = self.seed.take() {
            self.set.extend(seed);
        }
        loop {
            let item = self.source.next()?;
            let key = (self.key)(&item);
            let keep = match self.mode {
                Mode::Admit => self.set.insert(key),
                Mode::Consume => self.set.remove(&key),
            };
            if keep {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I: Iterator> Seq<I> {
    fn set_filter<S, F, K, C>(
        self,
        seed: S,
        key: F,
        comparer: C,
        mode: Mode,
    ) -> Seq<SetFilter<I, F, K, C, S::IntoIter>>
    where
        S: IntoIterator<Item = K>,
        F: FnMut(&I::Item) -> K,
        C: EqualityComparer<K>,
    {
        Seq::new(SetFilter {
            source: self.iter,
            key,
            seed: Some(seed.into_iter()),
            set: KeySet::new(comparer),
            mode,
        })
    }

    /// Removes duplicate elements, keeping the first occurrence.
    pub fn distinct(self) -> Seq<impl Iterator<Item = I::Item>>
    where
        I::Item: Clone + Eq + Hash,
    {
        self.distinct_with(DefaultEquality)
    }

    /// Removes elements whose key was already produced by an earlier element.
    ///
    /// ```
    /// use seqlinq::IntoSeq;
    ///
    /// let v = ["ant", "bee", "cow", "bull"].into_seq().distinct_by(|w| w.len()).to_vec();
    /// assert_eq!(v, vec!["ant", "bull"]);
    /// ```
    pub fn distinct_by<K, F>(
        self,
        key: F,
    ) -> Seq<SetFilter<I, F, K, DefaultEquality, std::iter::Empty<K>>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        self.set_filter(std::iter::empty(), key, DefaultEquality, Mode::Admit)
    }

    /// Removes duplicates as decided by `comparer`.
    pub fn distinct_with<C>(self, comparer: C) -> Seq<impl Iterator<Item = I::Item>>
    where
        I::Item: Clone,
        C: EqualityComparer<I::Item>,
    {
        self.set_filter(
            std::iter::empty(),
            <I::Item as Clone>::clone,
            comparer,
            Mode::Admit,
        )
    }

    /// Yields the distinct elements of both sequences, first sequence first.
    pub fn union<U>(self, other: U) -> Seq<impl Iterator<Item = I::Item>>
    where
        U: IntoIterator<Item = I::Item>,
        I::Item: Clone + Eq + Hash,
    {
        self.concat(other).distinct()
    }

    /// Union where elements are distinct by `key`.
    pub fn union_by<U, K, F>(self, other: U, key: F) -> Seq<impl Iterator<Item = I::Item>>
    where
        U: IntoIterator<Item = I::Item>,
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        self.concat(other).distinct_by(key)
    }

    /// Union using `comparer`.
    pub fn union_with<U, C>(self, other: U, comparer: C) -> Seq<impl Iterator<Item = I::Item>>
    where
        U: IntoIterator<Item = I::Item>,
        I::Item: Clone,
        C: EqualityComparer<I::Item>,
    {
        self.concat(other).distinct_with(comparer)
    }

    /// Yields the distinct elements that also appear in `other`.
    ///
    /// `other` is read in full on the first pull.
    pub fn intersect<U>(self, other: U) -> Seq<impl Iterator<Item = I::Item>>
    where
        U: IntoIterator<Item = I::Item>,
        I::Item: Clone + Eq + Hash,
    {
        self.intersect_with(other, DefaultEquality)
    }

    /// Yields the elements whose key is among `keys`, each key at most once.
    pub fn intersect_by<S, K, F>(self, keys: S, key: F) -> Seq<impl Iterator<Item = I::Item>>
    where
        S: IntoIterator<Item = K>,
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        self.set_filter(keys, key, DefaultEquality, Mode::Consume)
    }

    /// Intersection using `comparer`.
    pub fn intersect_with<U, C>(self, other: U, comparer: C) -> Seq<impl Iterator<Item = I::Item>>
    where
        U: IntoIterator<Item = I::Item>,
        I::Item: Clone,
        C: EqualityComparer<I::Item>,
    {
        self.set_filter(other, <I::Item as Clone>::clone, comparer, Mode::Consume)
    }

    /// Yields the distinct elements that do not appear in `other`.
    ///
    /// `other` is read in full on the first pull.
    ///
    /// ```
    /// use seqlinq::IntoSeq;
    ///
    /// let v = [1, 2, 2, 3, 4].into_seq().except([2, 4]).to_vec();
    /// assert_eq!(v, vec![1, 3]);
    /// ```
    pub fn except<U>(self, other: U) -> Seq<impl Iterator<Item = I::Item>>
    where
        U: IntoIterator<Item = I::Item>,
        I::Item: Clone + Eq + Hash,
    {
        self.except_with(other, DefaultEquality)
    }

    /// Yields the elements whose key is not among `keys`, each key at most
    /// once.
    pub fn except_by<S, K, F>(self, keys: S, key: F) -> Seq<impl Iterator<Item = I::Item>>
    where
        S: IntoIterator<Item = K>,
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        self.set_filter(keys, key, DefaultEquality, Mode::Admit)
    }

    /// Difference using `comparer`.
    pub fn except_with<U, C>(self, other: U, comparer: C) -> Seq<impl Iterator<Item = I::Item>>
    where
        U: IntoIterator<Item = I::Item>,
        I::Item: Clone,
        C: EqualityComparer<I::Item>,
    {
        self.set_filter(other, <I::Item as Clone>::clone, comparer, Mode::Admit)
    }
}
