//! The sequence wrapper and its generators.
//!
//! [`Seq`] wraps any [`Iterator`] and carries the operators as inherent
//! methods. It is itself an iterator, so a query can be consumed with `for`,
//! `collect` or any other iterator API.

use crate::error::{Result, SeqError};

/// A sequence of elements with LINQ-style operators.
///
/// Deferred operators return a new `Seq` without touching the source;
/// immediate operators (aggregates, element access, conversions) consume it.
///
/// ```
/// use seqlinq::IntoSeq;
///
/// let evens: Vec<i32> = (1..=10)
///     .into_seq()
///     .where_(|n| n % 2 == 0)
///     .select(|n| n * n)
///     .to_vec();
///
/// assert_eq!(evens, vec![4, 16, 36, 64, 100]);
/// ```
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Seq<I> {
    pub(crate) iter: I,
}

impl<I: Iterator> Seq<I> {
    /// Wraps an iterator.
    pub fn new(iter: I) -> Self {
        Seq { iter }
    }

    /// Returns the sequence unchanged.
    ///
    /// Useful to hide the concrete type of a more specific wrapper such as
    /// an ordered sequence.
    pub fn as_enumerable(self) -> Seq<I> {
        self
    }

    /// Unwraps the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }

    /// Returns the element count if it is known without iterating.
    pub fn try_get_non_enumerated_count(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower),
            _ => None,
        }
    }
}

impl<I: Iterator> Iterator for Seq<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Seq<I> {
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.next_back()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Seq<I> {}

/// Conversion into a [`Seq`].
///
/// Implemented for everything that is [`IntoIterator`].
pub trait IntoSeq: IntoIterator + Sized {
    /// Wraps `self` in a sequence.
    fn into_seq(self) -> Seq<Self::IntoIter> {
        Seq::new(self.into_iter())
    }
}

impl<T: IntoIterator> IntoSeq for T {}

/// Wraps any iterable in a sequence.
pub fn from<T: IntoIterator>(source: T) -> Seq<T::IntoIter> {
    Seq::new(source.into_iter())
}

/// Returns a sequence with no elements.
pub fn empty<T>() -> Seq<std::iter::Empty<T>> {
    Seq::new(std::iter::empty())
}

/// Returns `count` consecutive integers starting at `start`.
///
/// Fails when `count` is negative or the last value would exceed `i32::MAX`.
///
/// ```
/// let squares: Vec<i32> = seqlinq::range(1, 4)?.select(|n| n * n).to_vec();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// # Ok::<(), seqlinq::SeqError>(())
/// ```
pub fn range(start: i32, count: i32) -> Result<Seq<impl Iterator<Item = i32> + Clone>> {
    if count < 0 {
        return Err(SeqError::invalid_argument("count", "must not be negative"));
    }
    let end = i64::from(start) + i64::from(count);
    if end - 1 > i64::from(i32::MAX) {
        return Err(SeqError::invalid_argument(
            "count",
            format!("start {start} plus count {count} exceeds i32::MAX"),
        ));
    }
    Ok(Seq::new((i64::from(start)..end).map(|v| v as i32)))
}

/// Returns `value` repeated `count` times.
pub fn repeat<T: Clone>(value: T, count: usize) -> Seq<std::iter::Take<std::iter::Repeat<T>>> {
    Seq::new(std::iter::repeat(value).take(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_seq_wraps_iterables() {
        let v: Vec<_> = vec![1, 2, 3].into_seq().collect();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn empty_has_no_elements() {
        assert_eq!(empty::<u8>().count(), 0);
    }

    #[test]
    fn range_yields_count_values() {
        let v: Vec<_> = range(-2, 5).unwrap().collect();
        assert_eq!(v, vec![-2, -1, 0, 1, 2]);
        assert_eq!(range(7, 0).unwrap().count(), 0);
    }

    #[test]
    fn range_up_to_max() {
        let v: Vec<_> = range(i32::MAX - 1, 2).unwrap().collect();
        assert_eq!(v, vec![i32::MAX - 1, i32::MAX]);
    }

    #[test]
    fn range_rejects_bad_arguments() {
        assert!(matches!(range(0, -1), Err(SeqError::InvalidArgument { .. })));
        assert!(matches!(
            range(i32::MAX, 2),
            Err(SeqError::InvalidArgument { name: "count", .. })
        ));
    }

    #[test]
    fn repeat_clones_value() {
        let v: Vec<_> = repeat("x", 3).collect();
        assert_eq!(v, vec!["x", "x", "x"]);
    }

    #[test]
    fn as_enumerable_and_into_inner() {
        let ordered = [3, 1, 2].into_seq().order();
        assert_eq!(ordered.as_enumerable().to_vec(), vec![1, 2, 3]);

        let mut inner = vec![1, 2].into_seq().select(|n| n * 10).into_inner();
        assert_eq!(inner.next(), Some(10));
        assert_eq!(inner.collect::<Vec<_>>(), vec![20]);
    }

    #[test]
    fn non_enumerated_count() {
        assert_eq!(vec![1, 2, 3].into_seq().try_get_non_enumerated_count(), Some(3));
        assert_eq!(
            (0..10).into_seq().where_(|n| n % 2 == 0).try_get_non_enumerated_count(),
            None
        );
    }

    #[test]
    fn seq_is_double_ended_when_source_is() {
        let mut s = vec![1, 2, 3].into_seq();
        assert_eq!(s.next_back(), Some(3));
        assert_eq!(s.len(), 2);
    }
}
