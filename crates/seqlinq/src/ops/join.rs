//! Equi-joins: `join`, `group_join` and `left_join`.
//!
//! The inner sequence is hashed into a [`Lookup`] the first time the outer
//! sequence produces an element. Results follow outer order, then inner
//! order within each key.

use std::hash::Hash;

use seqlinq_compare::{DefaultEquality, EqualityComparer};

use crate::lookup::Lookup;
use crate::seq::Seq;

/// Inner side of a join, hashed on demand.
struct InnerLookup<J, IK, K, U, C> {
    pending: Option<(J, IK)>,
    lookup: Lookup<K, U, C>,
}

impl<J, IK, K, C> InnerLookup<J, IK, K, J::Item, C>
where
    J: Iterator,
    IK: FnMut(&J::Item) -> K,
    C: EqualityComparer<K>,
{
    fn new(inner: J, key: IK, comparer: C) -> Self {
        InnerLookup {
            pending: Some((inner, key)),
            lookup: Lookup::with_comparer(comparer),
        }
    }

    fn ready(&mut self) -> &Lookup<K, J::Item, C> {
        if let Some((inner, key)) = self.pending.take() {
            self.lookup.fill(inner, key, |u| u);
        }
        &self.lookup
    }
}

/// Iterator for [`Seq::join`].
pub struct Join<I: Iterator, J: Iterator, OK, IK, K, C, RF> {
    outer: I,
    outer_key: OK,
    inner: InnerLookup<J, IK, K, J::Item, C>,
    result: RF,
    current: Option<(I::Item, usize, usize)>,
}

impl<I, J, OK, IK, K, C, RF, R> Iterator for Join<I, J, OK, IK, K, C, RF>
where
    I: Iterator,
    J: Iterator,
    OK: FnMut(&I::Item) -> K,
    IK: FnMut(&J::Item) -> K,
    C: EqualityComparer<K>,
    RF: FnMut(&I::Item, &J::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            if let Some((item, group, pos)) = &mut self.current {
                let grouping = self.inner.lookup.group_at(*group);
                if let Some(matched) = grouping.elements().get(*pos) {
                    *pos += 1;
                    return Some((self.result)(item, matched));
                }
                self.current = None;
            }
            let item = self.outer.next()?;
            let key = (self.outer_key)(&item);
            if let Some(group) = self.inner.ready().position(&key) {
                self.current = Some((item, group, 0));
            }
        }
    }
}

/// Iterator for [`Seq::group_join`].
pub struct GroupJoin<I, J: Iterator, OK, IK, K, C, RF> {
    outer: I,
    outer_key: OK,
    inner: InnerLookup<J, IK, K, J::Item, C>,
    result: RF,
}

impl<I, J, OK, IK, K, C, RF, R> Iterator for GroupJoin<I, J, OK, IK, K, C, RF>
where
    I: Iterator,
    J: Iterator,
    OK: FnMut(&I::Item) -> K,
    IK: FnMut(&J::Item) -> K,
    C: EqualityComparer<K>,
    RF: FnMut(I::Item, &[J::Item]) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let item = self.outer.next()?;
        let key = (self.outer_key)(&item);
        let matches = self.inner.ready().get(&key);
        Some((self.result)(item, matches))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.outer.size_hint()
    }
}

/// Iterator for [`Seq::left_join`].
pub struct LeftJoin<I: Iterator, J: Iterator, OK, IK, K, C, RF> {
    outer: I,
    outer_key: OK,
    inner: InnerLookup<J, IK, K, J::Item, C>,
    result: RF,
    current: Option<(I::Item, usize, usize)>,
}

impl<I, J, OK, IK, K, C, RF, R> Iterator for LeftJoin<I, J, OK, IK, K, C, RF>
where
    I: Iterator,
    J: Iterator,
    OK: FnMut(&I::Item) -> K,
    IK: FnMut(&J::Item) -> K,
    C: EqualityComparer<K>,
    RF: FnMut(&I::Item, Option<&J::Item>) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            if let Some((item, group, pos)) = &mut self.current {
                let grouping = self.inner.lookup.group_at(*group);
                if let Some(matched) = grouping.elements().get(*pos) {
                    *pos += 1;
                    return Some((self.result)(item, Some(matched)));
                }
                self.current = None;
            }
            let item = self.outer.next()?;
            let key = (self.outer_key)(&item);
            match self.inner.ready().position(&key) {
                Some(group) => self.current = Some((item, group, 0)),
                None => return Some((self.result)(&item, None)),
            }
        }
    }
}

impl<I: Iterator> Seq<I> {
    /// Correlates elements of two sequences on matching keys.
    ///
    /// ```
    /// use seqlinq::IntoSeq;
    ///
    /// let people = [(1, "ada"), (2, "bob")];
    /// let pets = [("rex", 2), ("tom", 1), ("kit", 2)];
    ///
    /// let pairs = people
    ///     .into_seq()
    ///     .join(pets, |p| p.0, |pet| pet.1, |p, pet| (p.1, pet.0))
    ///     .to_vec();
    ///
    /// assert_eq!(pairs, vec![("ada", "tom"), ("bob", "rex"), ("bob", "kit")]);
    /// ```
    pub fn join<J, OK, IK, K, RF, R>(
        self,
        inner: J,
        outer_key: OK,
        inner_key: IK,
        result: RF,
    ) -> Seq<Join<I, J::IntoIter, OK, IK, K, DefaultEquality, RF>>
    where
        J: IntoIterator,
        OK: FnMut(&I::Item) -> K,
        IK: FnMut(&J::Item) -> K,
        K: Eq + Hash,
        RF: FnMut(&I::Item, &J::Item) -> R,
    {
        self.join_with(inner, outer_key, inner_key, result, DefaultEquality)
    }

    /// Like [`join`](Seq::join), comparing keys with `comparer`.
    pub fn join_with<J, OK, IK, K, C, RF, R>(
        self,
        inner: J,
        outer_key: OK,
        inner_key: IK,
        result: RF,
        comparer: C,
    ) -> Seq<Join<I, J::IntoIter, OK, IK, K, C, RF>>
    where
        J: IntoIterator,
        OK: FnMut(&I::Item) -> K,
        IK: FnMut(&J::Item) -> K,
        C: EqualityComparer<K>,
        RF: FnMut(&I::Item, &J::Item) -> R,
    {
        Seq::new(Join {
            outer: self.iter,
            outer_key,
            inner: InnerLookup::new(inner.into_iter(), inner_key, comparer),
            result,
            current: None,
        })
    }

    /// Pairs every outer element with the slice of inner elements sharing
    /// its key. Outer elements without matches get an empty slice.
    pub fn group_join<J, OK, IK, K, RF, R>(
        self,
        inner: J,
        outer_key: OK,
        inner_key: IK,
        result: RF,
    ) -> Seq<GroupJoin<I, J::IntoIter, OK, IK, K, DefaultEquality, RF>>
    where
        J: IntoIterator,
        OK: FnMut(&I::Item) -> K,
        IK: FnMut(&J::Item) -> K,
        K: Eq + Hash,
        RF: FnMut(I::Item, &[J::Item]) -> R,
    {
        self.group_join_with(inner, outer_key, inner_key, result, DefaultEquality)
    }

    /// Like [`group_join`](Seq::group_join), comparing keys with `comparer`.
    pub fn group_join_with<J, OK, IK, K, C, RF, R>(
        self,
        inner: J,
        outer_key: OK,
        inner_key: IK,
        result: RF,
        comparer: C,
    ) -> Seq<GroupJoin<I, J::IntoIter, OK, IK, K, C, RF>>
    where
        J: IntoIterator,
        OK: FnMut(&I::Item) -> K,
        IK: FnMut(&J::Item) -> K,
        C: EqualityComparer<K>,
        RF: FnMut(I::Item, &[J::Item]) -> R,
    {
        Seq::new(GroupJoin {
            outer: self.iter,
            outer_key,
            inner: InnerLookup::new(inner.into_iter(), inner_key, comparer),
            result,
        })
    }

    /// Like [`join`](Seq::join), but outer elements without a match are
    /// yielded once with `None`.
    pub fn left_join<J, OK, IK, K, RF, R>(
        self,
        inner: J,
        outer_key: OK,
        inner_key: IK,
        result: RF,
    ) -> Seq<LeftJoin<I, J::IntoIter, OK, IK, K, DefaultEquality, RF>>
    where
        J: IntoIterator,
        OK: FnMut(&I::Item) -> K,
        IK: FnMut(&J::Item) -> K,
        K: Eq + Hash,
        RF: FnMut(&I::Item, Option<&J::Item>) -> R,
    {
        self.left_join_with(inner, outer_key, inner_key, result, DefaultEquality)
    }

    /// Like [`left_join`](Seq::left_join), comparing keys with `comparer`.
    pub fn left_join_with<J, OK, IK, K, C, RF, R>(
        self,
        inner: J,
        outer_key: OK,
        inner_key: IK,
        result: RF,
        comparer: C,
    ) -> Seq<LeftJoin<I, J::IntoIter, OK, IK, K, C, RF>>
    where
        J: IntoIterator,
        OK: FnMut(&I::Item) -> K,
        IK: FnMut(&J::Item) -> K,
        C: EqualityComparer<K>,
        RF: FnMut(&I::Item, Option<&J::Item>) -> R,
    {
        Seq::new(LeftJoin {
            outer: self.iter,
            outer_key,
            inner: InnerLookup::new(inner.into_iter(), inner_key, comparer),
            result,
            current: None,
        })
    }
}
