//! Element access: `first`, `last`, `single` and `element_at`.

use crate::error::{Result, SeqError};
use crate::seq::Seq;

impl<I: Iterator> Seq<I> {
    /// Returns the first element.
    pub fn first(mut self) -> Result<I::Item> {
        self.iter.next().ok_or(SeqError::Empty)
    }

    /// Returns the first element that satisfies `predicate`.
    pub fn first_where<P>(mut self, predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.find(predicate).ok_or(SeqError::NoMatch)
    }

    /// Returns the first element, or the default value.
    pub fn first_or_default(self) -> I::Item
    where
        I::Item: Default,
    {
        self.first().unwrap_or_default()
    }

    /// Returns the first match, or the default value.
    pub fn first_or_default_where<P>(self, predicate: P) -> I::Item
    where
        I::Item: Default,
        P: FnMut(&I::Item) -> bool,
    {
        self.first_where(predicate).unwrap_or_default()
    }

    /// Returns the first element, or `fallback`.
    pub fn first_or(mut self, fallback: I::Item) -> I::Item {
        self.iter.next().unwrap_or(fallback)
    }

    /// Returns the last element.
    pub fn last(self) -> Result<I::Item> {
        self.iter.last().ok_or(SeqError::Empty)
    }

    /// Returns the last element that satisfies `predicate`.
    pub fn last_where<P>(self, mut predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter
            .filter(|item| predicate(item))
            .last()
            .ok_or(SeqError::NoMatch)
    }

    /// Returns the last element, or the default value.
    pub fn last_or_default(self) -> I::Item
    where
        I::Item: Default,
    {
        self.last().unwrap_or_default()
    }

    /// Returns the last match, or the default value.
    pub fn last_or_default_where<P>(self, predicate: P) -> I::Item
    where
        I::Item: Default,
        P: FnMut(&I::Item) -> bool,
    {
        self.last_where(predicate).unwrap_or_default()
    }

    /// Returns the last element, or `fallback`.
    pub fn last_or(self, fallback: I::Item) -> I::Item {
        self.iter.last().unwrap_or(fallback)
    }

    /// Returns the only element.
    ///
    /// Fails with [`SeqError::Empty`] or [`SeqError::MoreThanOne`].
    pub fn single(self) -> Result<I::Item> {
        match self.single_or_none()? {
            Some(item) => Ok(item),
            None => Err(SeqError::Empty),
        }
    }

    /// Returns the only element that satisfies `predicate`.
    ///
    /// ```
    /// use seqlinq::{IntoSeq, SeqError};
    ///
    /// assert_eq!([1, 2, 3].into_seq().single_where(|n| n % 2 == 0)?, 2);
    /// assert!(matches!(
    ///     [1, 2, 3].into_seq().single_where(|n| n % 2 == 1),
    ///     Err(SeqError::MoreThanOneMatch)
    /// ));
    /// # Ok::<(), SeqError>(())
    /// ```
    pub fn single_where<P>(self, predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        match self.single_match_or_none(predicate)? {
            Some(item) => Ok(item),
            None => Err(SeqError::NoMatch),
        }
    }

    /// Returns the only element, or the default value if there is none.
    ///
    /// More than one element is still an error.
    pub fn single_or_default(self) -> Result<I::Item>
    where
        I::Item: Default,
    {
        Ok(self.single_or_none()?.unwrap_or_default())
    }

    /// Returns the only match, or the default value if there is none.
    ///
    /// More than one match is still an error.
    pub fn single_or_default_where<P>(self, predicate: P) -> Result<I::Item>
    where
        I::Item: Default,
        P: FnMut(&I::Item) -> bool,
    {
        Ok(self.single_match_or_none(predicate)?.unwrap_or_default())
    }

    fn single_or_none(mut self) -> Result<Option<I::Item>> {
        let Some(item) = self.iter.next() else {
            return Ok(None);
        };
        if self.iter.next().is_some() {
            return Err(SeqError::MoreThanOne);
        }
        Ok(Some(item))
    }

    fn single_match_or_none<P>(mut self, mut predicate: P) -> Result<Option<I::Item>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        let Some(item) = self.iter.find(&mut predicate) else {
            return Ok(None);
        };
        if self.iter.any(|other| predicate(&other)) {
            return Err(SeqError::MoreThanOneMatch);
        }
        Ok(Some(item))
    }

    /// Returns the element at `index`.
    pub fn element_at(mut self, index: usize) -> Result<I::Item> {
        self.iter
            .nth(index)
            .ok_or(SeqError::IndexOutOfRange { index })
    }

    /// Returns the element at `index`, or the default value.
    pub fn element_at_or_default(mut self, index: usize) -> I::Item
    where
        I::Item: Default,
    {
        self.iter.nth(index).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::{IntoSeq, SeqError};

    #[test]
    fn first_forms() {
        assert_eq!([5, 6].into_seq().first().unwrap(), 5);
        assert!(matches!(Vec::<i32>::new().into_seq().first(), Err(SeqError::Empty)));
        assert_eq!([5, 6].into_seq().first_where(|n| *n > 5).unwrap(), 6);
        assert!(matches!(
            [5, 6].into_seq().first_where(|n| *n > 9),
            Err(SeqError::NoMatch)
        ));
        assert_eq!(Vec::<i32>::new().into_seq().first_or_default(), 0);
        assert_eq!([5, 6].into_seq().first_or_default_where(|n| *n > 9), 0);
        assert_eq!(Vec::<&str>::new().into_seq().first_or("none"), "none");
    }

    #[test]
    fn last_forms() {
        assert_eq!([5, 6, 7].into_seq().last().unwrap(), 7);
        assert!(matches!(Vec::<i32>::new().into_seq().last(), Err(SeqError::Empty)));
        assert_eq!([5, 6, 7].into_seq().last_where(|n| *n < 7).unwrap(), 6);
        assert!(matches!(
            [5].into_seq().last_where(|n| *n < 0),
            Err(SeqError::NoMatch)
        ));
        assert_eq!(Vec::<String>::new().into_seq().last_or_default(), "");
        assert_eq!([1, 2].into_seq().last_or_default_where(|n| *n > 5), 0);
        assert_eq!([1, 2].into_seq().last_or(9), 2);
    }

    #[test]
    fn single_forms() {
        assert_eq!([4].into_seq().single().unwrap(), 4);
        assert!(matches!(Vec::<i32>::new().into_seq().single(), Err(SeqError::Empty)));
        assert!(matches!([1, 2].into_seq().single(), Err(SeqError::MoreThanOne)));
        assert!(matches!(
            [1, 2].into_seq().single_where(|n| *n > 5),
            Err(SeqError::NoMatch)
        ));
    }

    #[test]
    fn single_or_default_still_rejects_many() {
        assert_eq!(Vec::<u8>::new().into_seq().single_or_default().unwrap(), 0);
        assert!(matches!(
            [1u8, 2].into_seq().single_or_default(),
            Err(SeqError::MoreThanOne)
        ));
        assert_eq!([1, 2].into_seq().single_or_default_where(|n| *n > 1).unwrap(), 2);
        assert_eq!([1, 2].into_seq().single_or_default_where(|n| *n > 5).unwrap(), 0);
        assert!(matches!(
            [1, 2].into_seq().single_or_default_where(|n| *n > 0),
            Err(SeqError::MoreThanOneMatch)
        ));
    }

    #[test]
    fn element_at_forms() {
        assert_eq!(['a', 'b'].into_seq().element_at(1).unwrap(), 'b');
        assert!(matches!(
            ['a'].into_seq().element_at(3),
            Err(SeqError::IndexOutOfRange { index: 3 })
        ));
        assert_eq!(['a'].into_seq().element_at_or_default(3), '\0');
    }
}
