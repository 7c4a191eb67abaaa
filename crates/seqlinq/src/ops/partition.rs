//! Partitioning: `skip`, `take`, their `while`/`last` forms, and `chunk`.

use std::collections::VecDeque;
use std::iter::{Skip, SkipWhile, Take, TakeWhile};

use super::Deferred;
use crate::error::{Result, SeqError};
use crate::seq::Seq;

impl<I: Iterator> Seq<I> {
    /// Bypasses the first `count` elements.
    pub fn skip(self, count: usize) -> Seq<Skip<I>> {
        Seq::new(self.iter.skip(count))
    }

    /// Bypasses elements while `predicate` holds, then yields the rest.
    pub fn skip_while<P>(self, predicate: P) -> Seq<SkipWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq::new(self.iter.skip_while(predicate))
    }

    /// Like [`skip_while`](Seq::skip_while), passing the element position.
    pub fn skip_while_indexed<P>(self, mut predicate: P) -> Seq<impl Iterator<Item = I::Item>>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        Seq::new(
            self.iter
                .enumerate()
                .skip_while(move |(i, item)| predicate(item, *i))
                .map(|(_, item)| item),
        )
    }

    /// Drops the last `count` elements.
    ///
    /// Holds at most `count + 1` elements in memory.
    pub fn skip_last(self, count: usize) -> Seq<SkipLast<I>> {
        Seq::new(SkipLast {
            source: self.iter,
            buffer: VecDeque::with_capacity(count.saturating_add(1).min(1024)),
            count,
        })
    }

    /// Yields the first `count` elements.
    pub fn take(self, count: usize) -> Seq<Take<I>> {
        Seq::new(self.iter.take(count))
    }

    /// Yields elements while `predicate` holds.
    pub fn take_while<P>(self, predicate: P) -> Seq<TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq::new(self.iter.take_while(predicate))
    }

    /// Like [`take_while`](Seq::take_while), passing the element position.
    pub fn take_while_indexed<P>(self, mut predicate: P) -> Seq<impl Iterator<Item = I::Item>>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        Seq::new(
            self.iter
                .enumerate()
                .take_while(move |(i, item)| predicate(item, *i))
                .map(|(_, item)| item),
        )
    }

    /// Yields the last `count` elements.
    ///
    /// The whole source is consumed on the first pull. With `count == 0` the
    /// source is never touched.
    pub fn take_last(self, count: usize) -> Seq<impl Iterator<Item = I::Item>> {
        let source = self.iter;
        Seq::new(Deferred::new(move || {
            let mut buffer = VecDeque::new();
            if count > 0 {
                for item in source {
                    if buffer.len() == count {
                        buffer.pop_front();
                    }
                    buffer.push_back(item);
                }
            }
            buffer.into_iter()
        }))
    }

    /// Splits the sequence into vectors of `size` elements.
    ///
    /// The last chunk holds the remainder and may be shorter.
    ///
    /// ```
    /// use seqlinq::IntoSeq;
    ///
    /// let chunks = (1..=5).into_seq().chunk(2)?.to_vec();
    /// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// # Ok::<(), seqlinq::SeqError>(())
    /// ```
    pub fn chunk(self, size: usize) -> Result<Seq<Chunk<I>>> {
        if size == 0 {
            return Err(SeqError::invalid_argument("size", "must be at least 1"));
        }
        Ok(Seq::new(Chunk {
            source: self.iter,
            size,
        }))
    }
}

/// Iterator for [`Seq::skip_last`].
pub struct SkipLast<I: Iterator> {
    source: I,
    buffer: VecDeque<I::Item>,
    count: usize,
}

impl<I: Iterator> Iterator for SkipLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.source.next()?;
            self.buffer.push_back(item);
            if self.buffer.len() > self.count {
                return self.buffer.pop_front();
            }
        }
    }
}

/// Iterator for [`Seq::chunk`].
pub struct Chunk<I> {
    source: I,
    size: usize,
}

impl<I: Iterator> Iterator for Chunk<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let first = self.source.next()?;
        let mut chunk = Vec::with_capacity(self.size.min(1024));
        chunk.push(first);
        chunk.extend(self.source.by_ref().take(self.size - 1));
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|n| n.div_ceil(self.size)),
        )
    }
}
