//! Aggregates, quantifiers and extremes. All of them are immediate.

use std::cmp::Ordering;

use seqlinq_compare::{Comparer, EqualityComparer};

use crate::error::{Result, SeqError};
use crate::num::{Averageable, Summable};
use crate::seq::Seq;

impl<I: Iterator> Seq<I> {
    /// Folds the sequence, using the first element as the seed.
    pub fn aggregate<F>(mut self, func: F) -> Result<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        let first = self.iter.next().ok_or(SeqError::Empty)?;
        Ok(self.iter.fold(first, func))
    }

    /// Folds the sequence starting from `seed`.
    pub fn aggregate_seed<S, F>(self, seed: S, func: F) -> S
    where
        F: FnMut(S, I::Item) -> S,
    {
        self.iter.fold(seed, func)
    }

    /// Folds the sequence starting from `seed`, then projects the result.
    pub fn aggregate_seed_select<S, F, R, RF>(self, seed: S, func: F, result: RF) -> R
    where
        F: FnMut(S, I::Item) -> S,
        RF: FnOnce(S) -> R,
    {
        result(self.iter.fold(seed, func))
    }

    /// Counts the elements.
    pub fn count(self) -> usize {
        self.iter.count()
    }

    /// Counts the elements that satisfy `predicate`.
    pub fn count_where<P>(self, mut predicate: P) -> usize
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.filter(|item| predicate(item)).count()
    }

    /// Counts the elements as a `u64`.
    pub fn long_count(self) -> u64 {
        self.iter.fold(0u64, |n, _| n + 1)
    }

    /// Counts the elements that satisfy `predicate`, as a `u64`.
    pub fn long_count_where<P>(self, mut predicate: P) -> u64
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter
            .fold(0u64, |n, item| if predicate(&item) { n + 1 } else { n })
    }

    /// Adds up the elements. The empty sum is zero.
    ///
    /// ```
    /// use seqlinq::{IntoSeq, SeqError};
    ///
    /// assert_eq!([1, 2, 3].into_seq().sum()?, 6);
    /// assert!(matches!([i8::MAX, 1].into_seq().sum(), Err(SeqError::Overflow)));
    /// # Ok::<(), SeqError>(())
    /// ```
    pub fn sum(mut self) -> Result<I::Item>
    where
        I::Item: Summable,
    {
        self.iter.try_fold(<I::Item as Summable>::ZERO, |acc, item| {
            acc.checked_add(item).ok_or(SeqError::Overflow)
        })
    }

    /// Adds up the projected elements.
    pub fn sum_of<N, F>(self, selector: F) -> Result<N>
    where
        N: Summable,
        F: FnMut(I::Item) -> N,
    {
        self.select(selector).sum()
    }

    /// Returns the arithmetic mean of the elements.
    pub fn average(self) -> Result<f64>
    where
        I::Item: Averageable,
    {
        let mut count = 0usize;
        let mut total = <<I::Item as Averageable>::Acc as Summable>::ZERO;
        for item in self.iter {
            total = total.checked_add(item.widen()).ok_or(SeqError::Overflow)?;
            count += 1;
        }
        if count == 0 {
            return Err(SeqError::Empty);
        }
        Ok(<I::Item as Averageable>::mean(total, count))
    }

    /// Returns the arithmetic mean of the projected elements.
    pub fn average_of<N, F>(self, selector: F) -> Result<f64>
    where
        N: Averageable,
        F: FnMut(I::Item) -> N,
    {
        self.select(selector).average()
    }

    /// Returns the smallest element. Ties keep the first one.
    pub fn min(self) -> Result<I::Item>
    where
        I::Item: Ord,
    {
        self.extreme(|item, best| item.cmp(best) == Ordering::Less)
    }

    /// Returns the largest element. Ties keep the first one.
    pub fn max(self) -> Result<I::Item>
    where
        I::Item: Ord,
    {
        self.extreme(|item, best| item.cmp(best) == Ordering::Greater)
    }

    /// Returns the smallest element according to `comparer`.
    ///
    /// ```
    /// use seqlinq::{FloatComparer, IntoSeq};
    ///
    /// let low = [2.5, f64::NAN, -1.0].into_seq().min_with(FloatComparer)?;
    /// assert!(low.is_nan());
    /// # Ok::<(), seqlinq::SeqError>(())
    /// ```
    pub fn min_with<C>(self, comparer: C) -> Result<I::Item>
    where
        C: Comparer<I::Item>,
    {
        self.extreme(|item, best| comparer.compare(item, best) == Ordering::Less)
    }

    /// Returns the largest element according to `comparer`.
    pub fn max_with<C>(self, comparer: C) -> Result<I::Item>
    where
        C: Comparer<I::Item>,
    {
        self.extreme(|item, best| comparer.compare(item, best) == Ordering::Greater)
    }

    /// Returns the smallest projected value.
    pub fn min_of<R, F>(self, selector: F) -> Result<R>
    where
        R: Ord,
        F: FnMut(I::Item) -> R,
    {
        self.select(selector).min()
    }

    /// Returns the largest projected value.
    pub fn max_of<R, F>(self, selector: F) -> Result<R>
    where
        R: Ord,
        F: FnMut(I::Item) -> R,
    {
        self.select(selector).max()
    }

    /// Returns the element with the smallest key. Ties keep the first one.
    pub fn min_by<K, F>(self, key: F) -> Result<I::Item>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        self.extreme_by_key(key, Ordering::Less)
    }

    /// Returns the element with the largest key. Ties keep the first one.
    ///
    /// ```
    /// use seqlinq::IntoSeq;
    ///
    /// let oldest = [("ada", 36), ("bob", 51), ("cy", 51)].into_seq().max_by(|p| p.1)?;
    /// assert_eq!(oldest.0, "bob");
    /// # Ok::<(), seqlinq::SeqError>(())
    /// ```
    pub fn max_by<K, F>(self, key: F) -> Result<I::Item>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        self.extreme_by_key(key, Ordering::Greater)
    }

    fn extreme<B>(mut self, mut better: B) -> Result<I::Item>
    where
        B: FnMut(&I::Item, &I::Item) -> bool,
    {
        let first = self.iter.next().ok_or(SeqError::Empty)?;
        Ok(self
            .iter
            .fold(first, |best, item| if better(&item, &best) { item } else { best }))
    }

    fn extreme_by_key<K, F>(mut self, mut key: F, wanted: Ordering) -> Result<I::Item>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let first = self.iter.next().ok_or(SeqError::Empty)?;
        let first_key = key(&first);
        let (best, _) = self.iter.fold((first, first_key), |(best, best_key), item| {
            let item_key = key(&item);
            if item_key.cmp(&best_key) == wanted {
                (item, item_key)
            } else {
                (best, best_key)
            }
        });
        Ok(best)
    }

    /// Returns `true` if an element equals `value`.
    pub fn contains(mut self, value: &I::Item) -> bool
    where
        I::Item: PartialEq,
    {
        self.iter.any(|item| item == *value)
    }

    /// Returns `true` if an element equals `value` according to `comparer`.
    pub fn contains_with<C>(mut self, value: &I::Item, comparer: C) -> bool
    where
        C: EqualityComparer<I::Item>,
    {
        self.iter.any(|item| comparer.equals(&item, value))
    }

    /// Returns `true` if both sequences have equal elements in the same
    /// order and the same length.
    pub fn sequence_equal<U>(self, other: U) -> bool
    where
        U: IntoIterator,
        I::Item: PartialEq<U::Item>,
    {
        self.iter.eq(other)
    }

    /// Like [`sequence_equal`](Seq::sequence_equal), comparing elements with
    /// `comparer`.
    pub fn sequence_equal_with<U, C>(self, other: U, comparer: C) -> bool
    where
        U: IntoIterator<Item = I::Item>,
        C: EqualityComparer<I::Item>,
    {
        let mut other = other.into_iter();
        for item in self.iter {
            match other.next() {
                Some(theirs) if comparer.equals(&item, &theirs) => {}
                _ => return false,
            }
        }
        other.next().is_none()
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// The empty sequence satisfies any predicate.
    pub fn all<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        self.iter.all(predicate)
    }

    /// Returns `true` if the sequence has at least one element.
    pub fn any(mut self) -> bool {
        self.iter.next().is_some()
    }

    /// Returns `true` if some element satisfies `predicate`.
    pub fn any_where<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        self.iter.any(predicate)
    }
}

#[cfg(test)]
mod tests {
    use crate::{IntoSeq, SeqError};
    use seqlinq_compare::{CaseInsensitive, DefaultComparer, Directed};

    #[test]
    fn aggregate_forms() {
        assert_eq!([1, 2, 3, 4].into_seq().aggregate(|a, b| a * b).unwrap(), 24);
        assert!(matches!(
            Vec::<i32>::new().into_seq().aggregate(|a, b| a + b),
            Err(SeqError::Empty)
        ));

        let s = ["a", "b"].into_seq().aggregate_seed(String::new(), |s, x| s + x);
        assert_eq!(s, "ab");

        let n = ["a", "bb"]
            .into_seq()
            .aggregate_seed_select(0, |n, s| n + s.len(), |n| n * 10);
        assert_eq!(n, 30);
    }

    #[test]
    fn counts() {
        assert_eq!((0..10).into_seq().count(), 10);
        assert_eq!((0..10).into_seq().count_where(|n| n % 3 == 0), 4);
        assert_eq!((0..10).into_seq().long_count(), 10u64);
        assert_eq!((0..10).into_seq().long_count_where(|n| *n > 6), 3u64);
    }

    #[test]
    fn sums() {
        assert_eq!(Vec::<i64>::new().into_seq().sum().unwrap(), 0);
        assert_eq!([0.5f32, 0.25].into_seq().sum().unwrap(), 0.75);
        assert_eq!(["ab", "cde"].into_seq().sum_of(|s| s.len()).unwrap(), 5);
        assert!(matches!(
            [u32::MAX, 1].into_seq().sum(),
            Err(SeqError::Overflow)
        ));
    }

    #[test]
    fn averages() {
        assert_eq!([1, 2].into_seq().average().unwrap(), 1.5);
        assert_eq!([i64::MAX, i64::MAX].into_seq().average().unwrap(), i64::MAX as f64);
        assert_eq!(
            [(1, 2.0f32), (2, 4.0)].into_seq().average_of(|p| p.1).unwrap(),
            3.0
        );
        assert!(matches!(
            Vec::<u8>::new().into_seq().average(),
            Err(SeqError::Empty)
        ));
    }

    #[test]
    fn extremes_keep_first_tie() {
        let people = [("ada", 3), ("bob", 1), ("cy", 3), ("di", 1)];
        assert_eq!(people.into_seq().min_by(|p| p.1).unwrap().0, "bob");
        assert_eq!(people.into_seq().max_by(|p| p.1).unwrap().0, "ada");
        assert_eq!(people.into_seq().min_of(|p| p.0).unwrap(), "ada");
        assert_eq!(people.into_seq().max_of(|p| p.1).unwrap(), 3);
    }

    #[test]
    fn min_and_max() {
        assert_eq!([4, 2, 8].into_seq().min().unwrap(), 2);
        assert_eq!([4, 2, 8].into_seq().max().unwrap(), 8);
        assert!(matches!(Vec::<u8>::new().into_seq().max(), Err(SeqError::Empty)));

        let v = ["b", "A", "a"].into_seq().min_with(CaseInsensitive).unwrap();
        assert_eq!(v, "A");
        let v = [1, 5, 3]
            .into_seq()
            .max_with(Directed::desc(DefaultComparer))
            .unwrap();
        assert_eq!(v, 1);
    }

    #[test]
    fn membership() {
        assert!([1, 2, 3].into_seq().contains(&2));
        assert!(!Vec::<i32>::new().into_seq().contains(&2));
        assert!(["Ab"].into_seq().contains_with(&"aB", CaseInsensitive));
    }

    #[test]
    fn sequence_equality() {
        assert!([1, 2].into_seq().sequence_equal(vec![1, 2]));
        assert!(![1, 2].into_seq().sequence_equal(vec![1, 2, 3]));
        assert!(![1, 2, 3].into_seq().sequence_equal(vec![1, 2]));
        assert!(["a", "B"]
            .into_seq()
            .sequence_equal_with(["A", "b"], CaseInsensitive));
        assert!(!["a"].into_seq().sequence_equal_with(["A", "b"], CaseInsensitive));
    }

    #[test]
    fn quantifiers() {
        assert!(Vec::<i32>::new().into_seq().all(|_| false));
        assert!([2, 4].into_seq().all(|n| n % 2 == 0));
        assert!(!Vec::<i32>::new().into_seq().any());
        assert!([1].into_seq().any());
        assert!([1, 2].into_seq().any_where(|n| n == 2));
        assert!(![1, 2].into_seq().any_where(|n| n > 2));
    }
}
