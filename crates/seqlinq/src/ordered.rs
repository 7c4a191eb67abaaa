//! Deferred, stable, multi-key sorting.
//!
//! `order_by` and friends return an [`OrderedEnumerable`]. Nothing is read
//! until the first pull; then the whole source is buffered and sorted once
//! with the composed comparer. `then_by` adds a tie-breaker to that
//! comparer, so `order_by(a).then_by(b)` sorts by `a`, then `b`.

use seqlinq_compare::{Comparer, DefaultComparer, Directed, KeyComparer, ThenComparer};

use crate::seq::Seq;

/// A sequence sorted on first pull.
pub type OrderedEnumerable<I, C> = Seq<Ordered<I, C>>;

/// Iterator behind [`OrderedEnumerable`].
pub struct Ordered<I: Iterator, C> {
    source: Option<I>,
    comparer: C,
    sorted: std::vec::IntoIter<I::Item>,
}

impl<I: Iterator, C> Ordered<I, C> {
    fn new(source: I, comparer: C) -> Self {
        Ordered {
            source: Some(source),
            comparer,
            sorted: Vec::new().into_iter(),
        }
    }

    /// Returns the composed comparer.
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Adds a tie-breaking comparer.
    ///
    /// Once iteration has started, only the remaining elements are sorted
    /// again, by the full chain.
    fn then<N>(self, next: N) -> Ordered<I, ThenComparer<C, N>>
    where
        C: Comparer<I::Item>,
        N: Comparer<I::Item>,
    {
        let comparer = ThenComparer::new(self.comparer, next);
        let sorted = if self.source.is_some() {
            self.sorted
        } else {
            let mut rest: Vec<_> = self.sorted.collect();
            rest.sort_by(|a, b| comparer.compare(a, b));
            rest.into_iter()
        };
        Ordered {
            source: self.source,
            comparer,
            sorted,
        }
    }
}

impl<I, C> Iterator for Ordered<I, C>
where
    I: Iterator,
    C: Comparer<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(source) = self.source.take() {
            let mut buffer: Vec<_> = source.collect();
            buffer.sort_by(|a, b| self.comparer.compare(a, b));
            tracing::trace!(len = buffer.len(), "sorted ordered sequence");
            self.sorted = buffer.into_iter();
        }
        self.sorted.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => self.sorted.size_hint(),
        }
    }
}

impl<I: Iterator> Seq<I> {
    /// Sorts the elements in ascending order.
    pub fn order(self) -> OrderedEnumerable<I, DefaultComparer>
    where
        I::Item: Ord,
    {
        self.order_with(DefaultComparer)
    }

    /// Sorts the elements in descending order.
    pub fn order_descending(self) -> OrderedEnumerable<I, Directed<DefaultComparer>>
    where
        I::Item: Ord,
    {
        self.order_with(Directed::desc(DefaultComparer))
    }

    /// Sorts the elements with `comparer`.
    pub fn order_with<C>(self, comparer: C) -> OrderedEnumerable<I, C>
    where
        C: Comparer<I::Item>,
    {
        Seq::new(Ordered::new(self.iter, comparer))
    }

    /// Sorts by a key in ascending order.
    ///
    /// ```
    /// use seqlinq::IntoSeq;
    ///
    /// let people = [("cy", 30), ("ada", 25), ("bob", 30)];
    /// let names: Vec<&str> = people
    ///     .into_seq()
    ///     .order_by_descending(|p| p.1)
    ///     .then_by(|p| p.0)
    ///     .select(|p| p.0)
    ///     .to_vec();
    ///
    /// assert_eq!(names, vec!["bob", "cy", "ada"]);
    /// ```
    pub fn order_by<K, F>(self, key: F) -> OrderedEnumerable<I, KeyComparer<F, K>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K,
    {
        self.order_with(KeyComparer::new(key))
    }

    /// Sorts by a key in descending order.
    pub fn order_by_descending<K, F>(
        self,
        key: F,
    ) -> OrderedEnumerable<I, Directed<KeyComparer<F, K>>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K,
    {
        self.order_with(Directed::desc(KeyComparer::new(key)))
    }

    /// Sorts by a key compared with `comparer`.
    pub fn order_by_with<K, F, KC>(
        self,
        key: F,
        comparer: KC,
    ) -> OrderedEnumerable<I, KeyComparer<F, K, KC>>
    where
        F: Fn(&I::Item) -> K,
        KC: Comparer<K>,
    {
        self.order_with(KeyComparer::with_comparer(key, comparer))
    }

    /// Sorts by a key compared with `comparer`, in descending order.
    pub fn order_by_descending_with<K, F, KC>(
        self,
        key: F,
        comparer: KC,
    ) -> OrderedEnumerable<I, Directed<KeyComparer<F, K, KC>>>
    where
        F: Fn(&I::Item) -> K,
        KC: Comparer<K>,
    {
        self.order_with(Directed::desc(KeyComparer::with_comparer(key, comparer)))
    }
}

impl<I, C> OrderedEnumerable<I, C>
where
    I: Iterator,
    C: Comparer<I::Item>,
{
    /// Breaks ties with `comparer`.
    pub fn then_with<N>(self, comparer: N) -> OrderedEnumerable<I, ThenComparer<C, N>>
    where
        N: Comparer<I::Item>,
    {
        Seq::new(self.iter.then(comparer))
    }

    /// Breaks ties by a key in ascending order.
    pub fn then_by<K, F>(self, key: F) -> OrderedEnumerable<I, ThenComparer<C, KeyComparer<F, K>>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K,
    {
        self.then_with(KeyComparer::new(key))
    }

    /// Breaks ties by a key in descending order.
    pub fn then_by_descending<K, F>(
        self,
        key: F,
    ) -> OrderedEnumerable<I, ThenComparer<C, Directed<KeyComparer<F, K>>>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K,
    {
        self.then_with(Directed::desc(KeyComparer::new(key)))
    }

    /// Breaks ties by a key compared with `comparer`.
    pub fn then_by_with<K, F, KC>(
        self,
        key: F,
        comparer: KC,
    ) -> OrderedEnumerable<I, ThenComparer<C, KeyComparer<F, K, KC>>>
    where
        F: Fn(&I::Item) -> K,
        KC: Comparer<K>,
    {
        self.then_with(KeyComparer::with_comparer(key, comparer))
    }

    /// Breaks ties by a key compared with `comparer`, in descending order.
    pub fn then_by_descending_with<K, F, KC>(
        self,
        key: F,
        comparer: KC,
    ) -> OrderedEnumerable<I, ThenComparer<C, Directed<KeyComparer<F, K, KC>>>>
    where
        F: Fn(&I::Item) -> K,
        KC: Comparer<K>,
    {
        self.then_with(Directed::desc(KeyComparer::with_comparer(key, comparer)))
    }
}

#[cfg(test)]
mod tests {
    use crate::IntoSeq;
    use seqlinq_compare::{CaseInsensitive, FloatComparer};
    use std::cell::Cell;

    #[test]
    fn order_and_descending() {
        assert_eq!([3, 1, 2].into_seq().order().to_vec(), vec![1, 2, 3]);
        assert_eq!([3, 1, 2].into_seq().order_descending().to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn sort_is_stable() {
        let v = [("b", 1), ("a", 2), ("c", 1), ("d", 2)]
            .into_seq()
            .order_by(|p| p.1)
            .select(|p| p.0)
            .to_vec();
        assert_eq!(v, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn then_by_chains_keys() {
        let v = [(2, 'b'), (1, 'z'), (2, 'a'), (1, 'y')]
            .into_seq()
            .order_by(|p| p.0)
            .then_by_descending(|p| p.1)
            .to_vec();
        assert_eq!(v, vec![(1, 'z'), (1, 'y'), (2, 'b'), (2, 'a')]);
    }

    #[test]
    fn key_comparers() {
        let v = ["b", "A", "c"]
            .into_seq()
            .order_by_with(|s| *s, CaseInsensitive)
            .to_vec();
        assert_eq!(v, vec!["A", "b", "c"]);

        let v = [1.5, f64::NAN, -2.0]
            .into_seq()
            .order_by_descending_with(|f| *f, FloatComparer)
            .to_vec();
        assert_eq!(v[..2], [1.5, -2.0]);
        assert!(v[2].is_nan());

        let v = [("x", "B"), ("x", "a"), ("w", "c")]
            .into_seq()
            .order_by(|p| p.0)
            .then_by_with(|p| p.1, CaseInsensitive)
            .to_vec();
        assert_eq!(v, vec![("w", "c"), ("x", "a"), ("x", "B")]);

        let v = [(1, "a"), (1, "B")]
            .into_seq()
            .order_by(|p| p.0)
            .then_by_descending_with(|p| p.1, CaseInsensitive)
            .to_vec();
        assert_eq!(v, vec![(1, "B"), (1, "a")]);
    }

    #[test]
    fn then_with_closure_comparer() {
        let v = ["ccc", "a", "bb", "aa"]
            .into_seq()
            .order_by(|s| s.len())
            .then_with(|a: &&str, b: &&str| b.cmp(a))
            .to_vec();
        assert_eq!(v, vec!["a", "bb", "aa", "ccc"]);
    }

    #[test]
    fn exposes_composed_comparer() {
        use seqlinq_compare::{Comparer, Dir};
        use std::cmp::Ordering;

        let ordered = [2, 1].into_seq().order_descending().into_inner();
        assert_eq!(ordered.comparer().dir(), Dir::Desc);
        assert_eq!(ordered.comparer().compare(&1, &2), Ordering::Greater);

        let chained = [(1, 'a')]
            .into_seq()
            .order_by(|p| p.0)
            .then_by_descending(|p| p.1)
            .into_inner();
        assert_eq!(chained.comparer().compare(&(1, 'a'), &(1, 'b')), Ordering::Greater);
        assert_eq!(chained.comparer().compare(&(0, 'a'), &(1, 'b')), Ordering::Less);
    }

    #[test]
    fn sort_is_deferred() {
        let pulled = Cell::new(0);
        let ordered = [2, 1]
            .into_seq()
            .select(|n| {
                pulled.set(pulled.get() + 1);
                n
            })
            .order();
        assert_eq!(pulled.get(), 0);
        assert_eq!(ordered.to_vec(), vec![1, 2]);
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn then_by_after_start_sorts_the_rest() {
        let mut ordered = [(1, 'b'), (0, 'x'), (1, 'a'), (1, 'c')]
            .into_seq()
            .order_by(|p| p.0);
        assert_eq!(ordered.next(), Some((0, 'x')));

        let rest = ordered.then_by_descending(|p| p.1).to_vec();
        assert_eq!(rest, vec![(1, 'c'), (1, 'b'), (1, 'a')]);
    }
}
