//! Filtering and projection: `where_`, `select`, `select_many` and kin.

use std::iter::{Enumerate, Filter, FlatMap, Map};

use crate::seq::Seq;

impl<I: Iterator> Seq<I> {
    /// Keeps the elements that satisfy `predicate`.
    ///
    /// Named with a trailing underscore because `where` is a keyword.
    pub fn where_<P>(self, predicate: P) -> Seq<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq::new(self.iter.filter(predicate))
    }

    /// Keeps the elements that satisfy `predicate`, which also receives the
    /// element's position in the source.
    pub fn where_indexed<P>(self, mut predicate: P) -> Seq<impl Iterator<Item = I::Item>>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        Seq::new(
            self.iter
                .enumerate()
                .filter_map(move |(i, item)| predicate(&item, i).then_some(item)),
        )
    }

    /// Projects each element.
    pub fn select<R, F>(self, selector: F) -> Seq<Map<I, F>>
    where
        F: FnMut(I::Item) -> R,
    {
        Seq::new(self.iter.map(selector))
    }

    /// Projects each element together with its position.
    pub fn select_indexed<R, F>(self, mut selector: F) -> Seq<impl Iterator<Item = R>>
    where
        F: FnMut(I::Item, usize) -> R,
    {
        Seq::new(self.iter.enumerate().map(move |(i, item)| selector(item, i)))
    }

    /// Projects each element to a sequence and flattens the results.
    pub fn select_many<U, F>(self, selector: F) -> Seq<FlatMap<I, U, F>>
    where
        U: IntoIterator,
        F: FnMut(I::Item) -> U,
    {
        Seq::new(self.iter.flat_map(selector))
    }

    /// Like [`select_many`](Seq::select_many), passing the element position.
    pub fn select_many_indexed<U, F>(self, mut selector: F) -> Seq<impl Iterator<Item = U::Item>>
    where
        U: IntoIterator,
        F: FnMut(I::Item, usize) -> U,
    {
        Seq::new(
            self.iter
                .enumerate()
                .flat_map(move |(i, item)| selector(item, i)),
        )
    }

    /// Flattens a per-element collection, then combines every inner element
    /// with the element that produced it.
    ///
    /// ```
    /// use seqlinq::IntoSeq;
    ///
    /// let owners = [("ada", vec!["cat", "owl"]), ("bob", vec![]), ("cy", vec!["dog"])];
    /// let pets: Vec<String> = owners
    ///     .into_seq()
    ///     .select_many_with(|o| o.1.clone(), |o, pet| format!("{}:{}", o.0, pet))
    ///     .to_vec();
    ///
    /// assert_eq!(pets, vec!["ada:cat", "ada:owl", "cy:dog"]);
    /// ```
    pub fn select_many_with<U, CF, RF, R>(
        self,
        collection: CF,
        result: RF,
    ) -> Seq<SelectManyWith<I, U::IntoIter, CF, RF>>
    where
        U: IntoIterator,
        CF: FnMut(&I::Item) -> U,
        RF: FnMut(&I::Item, U::Item) -> R,
    {
        Seq::new(SelectManyWith {
            source: self.iter,
            collection,
            result,
            current: None,
        })
    }

    /// Pairs every element with its position.
    pub fn index(self) -> Seq<Enumerate<I>> {
        Seq::new(self.iter.enumerate())
    }

    /// Converts every element with [`Into`].
    pub fn cast<U>(self) -> Seq<impl Iterator<Item = U>>
    where
        I::Item: Into<U>,
    {
        Seq::new(self.iter.map(Into::into))
    }

    /// Keeps the elements that convert to `U`, converted.
    ///
    /// ```
    /// use seqlinq::IntoSeq;
    ///
    /// let small: Vec<u8> = [1i32, 300, -4, 255].into_seq().of_type::<u8>().to_vec();
    /// assert_eq!(small, vec![1, 255]);
    /// ```
    pub fn of_type<U>(self) -> Seq<impl Iterator<Item = U>>
    where
        I::Item: TryInto<U>,
    {
        Seq::new(self.iter.filter_map(|item| item.try_into().ok()))
    }
}

/// Iterator for [`Seq::select_many_with`].
pub struct SelectManyWith<I: Iterator, J, CF, RF> {
    source: I,
    collection: CF,
    result: RF,
    current: Option<(I::Item, J)>,
}

impl<I, J, U, CF, RF, R> Iterator for SelectManyWith<I, J, CF, RF>
where
    I: Iterator,
    J: Iterator,
    U: IntoIterator<IntoIter = J>,
    CF: FnMut(&I::Item) -> U,
    RF: FnMut(&I::Item, J::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            if let Some((item, inner)) = self.current.as_mut() {
                if let Some(value) = inner.next() {
                    return Some((self.result)(item, value));
                }
            }
            let item = self.source.next()?;
            let inner = (self.collection)(&item).into_iter();
            self.current = Some((item, inner));
        }
    }
}
