//! Combining sequences: concatenation, zipping, defaults and reversal.

use std::iter::{Chain, Once, Zip};

use super::Deferred;
use crate::seq::Seq;

impl<I: Iterator> Seq<I> {
    /// Yields the elements of `self`, then those of `other`.
    pub fn concat<U>(self, other: U) -> Seq<Chain<I, U::IntoIter>>
    where
        U: IntoIterator<Item = I::Item>,
    {
        Seq::new(self.iter.chain(other))
    }

    /// Adds `value` after the last element.
    pub fn append(self, value: I::Item) -> Seq<Chain<I, Once<I::Item>>> {
        Seq::new(self.iter.chain(std::iter::once(value)))
    }

    /// Adds `value` before the first element.
    pub fn prepend(self, value: I::Item) -> Seq<Chain<Once<I::Item>, I>> {
        Seq::new(std::iter::once(value).chain(self.iter))
    }

    /// Yields `T::default()` once if the sequence is empty.
    pub fn default_if_empty(self) -> Seq<DefaultIfEmpty<I>>
    where
        I::Item: Default,
    {
        self.default_if_empty_with(<I::Item as Default>::default())
    }

    /// Yields `value` once if the sequence is empty.
    ///
    /// ```
    /// use seqlinq::IntoSeq;
    ///
    /// let v = Vec::<i32>::new().into_seq().default_if_empty_with(-1).to_vec();
    /// assert_eq!(v, vec![-1]);
    /// ```
    pub fn default_if_empty_with(self, value: I::Item) -> Seq<DefaultIfEmpty<I>> {
        Seq::new(DefaultIfEmpty {
            source: self.iter,
            fallback: Some(value),
        })
    }

    /// Pairs elements of both sequences, stopping at the shorter one.
    pub fn zip<U: IntoIterator>(self, other: U) -> Seq<Zip<I, U::IntoIter>> {
        Seq::new(self.iter.zip(other))
    }

    /// Combines elements of both sequences with `f`.
    pub fn zip_with<U, R, F>(self, other: U, mut f: F) -> Seq<impl Iterator<Item = R>>
    where
        U: IntoIterator,
        F: FnMut(I::Item, U::Item) -> R,
    {
        Seq::new(self.iter.zip(other).map(move |(a, b)| f(a, b)))
    }

    /// Builds triples from three sequences, stopping at the shortest one.
    pub fn zip3<U, V>(
        self,
        second: U,
        third: V,
    ) -> Seq<impl Iterator<Item = (I::Item, U::Item, V::Item)>>
    where
        U: IntoIterator,
        V: IntoIterator,
    {
        Seq::new(
            self.iter
                .zip(second)
                .zip(third)
                .map(|((a, b), c)| (a, b, c)),
        )
    }

    /// Yields the elements in reverse order.
    ///
    /// The source is buffered on the first pull.
    pub fn reverse(self) -> Seq<impl Iterator<Item = I::Item>> {
        let source = self.iter;
        Seq::new(Deferred::new(move || {
            let mut buffer: Vec<_> = source.collect();
            buffer.reverse();
            buffer.into_iter()
        }))
    }
}

/// Iterator for [`Seq::default_if_empty`] and
/// [`Seq::default_if_empty_with`].
pub struct DefaultIfEmpty<I: Iterator> {
    source: I,
    fallback: Option<I::Item>,
}

impl<I: Iterator> Iterator for DefaultIfEmpty<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.source.next() {
            Some(item) => {
                self.fallback = None;
                Some(item)
            }
            None => self.fallback.take(),
        }
    }
}
