//! Cursor-style enumeration.
//!
//! An [`Enumerator`] is positioned *before* the first element when created.
//! [`move_next`](Enumerator::move_next) advances it and reports whether an
//! element is available; [`current`](Enumerator::current) borrows that
//! element. An [`Enumerable`] hands out fresh enumerators, so it can be
//! walked any number of times.
//!
//! Both traits bridge into [`Seq`]: [`Enumerator::into_seq`] and
//! [`Enumerable::to_seq`] go one way, [`Seq::into_enumerator`] the other.
//!
//! ```
//! use seqlinq::{Enumerable, Enumerator};
//!
//! let data = vec![1, 2, 3];
//! let mut e = data.enumerator();
//! let mut total = 0;
//! while e.move_next() {
//!     total += *e.current()?;
//! }
//! assert_eq!(total, 6);
//!
//! e.reset()?;
//! assert!(e.move_next());
//! assert_eq!(*e.current()?, 1);
//!
//! let doubled: Vec<i32> = data.to_seq().select(|n| n * 2).to_vec();
//! assert_eq!(doubled, vec![2, 4, 6]);
//! # Ok::<(), seqlinq::SeqError>(())
//! ```

use std::iter::Fuse;
use std::marker::PhantomData;
use std::sync::mpsc::Receiver;

use crate::error::{Result, SeqError};
use crate::seq::Seq;

/// A cursor over a sequence of elements.
pub trait Enumerator {
    /// Element type.
    type Item;

    /// Advances to the next element. Returns `false` once past the end.
    fn move_next(&mut self) -> bool;

    /// Borrows the element at the current position.
    ///
    /// Fails with [`SeqError::NoCurrent`] before the first `move_next` and
    /// after the end.
    fn current(&self) -> Result<&Self::Item>;

    /// Rewinds to before the first element.
    fn reset(&mut self) -> Result<()> {
        Err(SeqError::ResetNotSupported)
    }

    /// Turns the enumerator into a [`Seq`] yielding clones of its elements.
    fn into_seq(self) -> Seq<EnumeratorIter<Self>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Seq::new(EnumeratorIter { inner: self })
    }
}

/// A source that hands out enumerators.
pub trait Enumerable {
    /// Element type.
    type Item;

    /// Enumerator returned by [`enumerator`](Enumerable::enumerator).
    type Enumerator<'a>: Enumerator<Item = Self::Item>
    where
        Self: 'a;

    /// Returns a fresh enumerator positioned before the first element.
    fn enumerator(&self) -> Self::Enumerator<'_>;

    /// Returns a [`Seq`] over clones of the elements.
    fn to_seq(&self) -> Seq<EnumeratorIter<Self::Enumerator<'_>>>
    where
        Self::Item: Clone,
    {
        self.enumerator().into_seq()
    }
}

/// Iterator adapter over an [`Enumerator`].
pub struct EnumeratorIter<E> {
    inner: E,
}

impl<E: Enumerator> Iterator for EnumeratorIter<E>
where
    E::Item: Clone,
{
    type Item = E::Item;

    fn next(&mut self) -> Option<E::Item> {
        if self.inner.move_next() {
            self.inner.current().ok().cloned()
        } else {
            None
        }
    }
}

/// Position of an index-based cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Before,
    At(usize),
    After,
}

impl Cursor {
    fn advance(&mut self, len: usize) -> bool {
        let next = match *self {
            Cursor::Before => 0,
            Cursor::At(i) => i + 1,
            Cursor::After => return false,
        };
        if next < len {
            *self = Cursor::At(next);
            true
        } else {
            *self = Cursor::After;
            false
        }
    }

    fn index(self) -> Option<usize> {
        match self {
            Cursor::At(i) => Some(i),
            Cursor::Before | Cursor::After => None,
        }
    }
}

/// Resettable enumerator over a borrowed slice.
#[derive(Debug, Clone)]
pub struct SliceEnumerator<'a, T> {
    slice: &'a [T],
    cursor: Cursor,
}

impl<'a, T> SliceEnumerator<'a, T> {
    /// Creates an enumerator positioned before the first element.
    pub fn new(slice: &'a [T]) -> Self {
        SliceEnumerator {
            slice,
            cursor: Cursor::Before,
        }
    }
}

impl<T> Enumerator for SliceEnumerator<'_, T> {
    type Item = T;

    fn move_next(&mut self) -> bool {
        self.cursor.advance(self.slice.len())
    }

    fn current(&self) -> Result<&T> {
        self.cursor
            .index()
            .and_then(|i| self.slice.get(i))
            .ok_or(SeqError::NoCurrent)
    }

    fn reset(&mut self) -> Result<()> {
        self.cursor = Cursor::Before;
        Ok(())
    }
}

/// Resettable enumerator over owned, buffered elements.
#[derive(Debug, Clone)]
pub struct BufferedEnumerator<T> {
    items: Vec<T>,
    cursor: Cursor,
}

impl<T> BufferedEnumerator<T> {
    /// Creates an enumerator over `items`.
    pub fn new(items: Vec<T>) -> Self {
        BufferedEnumerator {
            items,
            cursor: Cursor::Before,
        }
    }
}

impl<T> Enumerator for BufferedEnumerator<T> {
    type Item = T;

    fn move_next(&mut self) -> bool {
        self.cursor.advance(self.items.len())
    }

    fn current(&self) -> Result<&T> {
        self.cursor
            .index()
            .and_then(|i| self.items.get(i))
            .ok_or(SeqError::NoCurrent)
    }

    fn reset(&mut self) -> Result<()> {
        self.cursor = Cursor::Before;
        Ok(())
    }
}

/// Enumerator over an [`Iterator`].
///
/// Built with [`new`](IterEnumerator::new) it is forward-only; built with
/// [`resettable`](IterEnumerator::resettable) it keeps a clone of the
/// starting iterator to rewind to.
pub struct IterEnumerator<I: Iterator> {
    iter: Fuse<I>,
    current: Option<I::Item>,
    origin: Option<(I, fn(&I) -> I)>,
}

impl<I: Iterator> IterEnumerator<I> {
    /// Wraps `iter`; [`reset`](Enumerator::reset) is not supported.
    pub fn new(iter: I) -> Self {
        IterEnumerator {
            iter: iter.fuse(),
            current: None,
            origin: None,
        }
    }

    /// Wraps `iter`, keeping a copy so the enumerator can be reset.
    pub fn resettable(iter: I) -> Self
    where
        I: Clone,
    {
        let rewind: fn(&I) -> I = <I as Clone>::clone;
        IterEnumerator {
            origin: Some((iter.clone(), rewind)),
            iter: iter.fuse(),
            current: None,
        }
    }
}

impl<I: Iterator> Enumerator for IterEnumerator<I> {
    type Item = I::Item;

    fn move_next(&mut self) -> bool {
        self.current = self.iter.next();
        self.current.is_some()
    }

    fn current(&self) -> Result<&I::Item> {
        self.current.as_ref().ok_or(SeqError::NoCurrent)
    }

    fn reset(&mut self) -> Result<()> {
        let (origin, rewind) = self.origin.as_ref().ok_or(SeqError::ResetNotSupported)?;
        self.iter = rewind(origin).fuse();
        self.current = None;
        Ok(())
    }
}

/// Forward-only enumerator over the receiving end of a channel.
///
/// [`move_next`](Enumerator::move_next) blocks until a value arrives and
/// returns `false` once every sender is gone.
pub struct ChannelEnumerator<T> {
    receiver: Receiver<T>,
    current: Option<T>,
}

impl<T> ChannelEnumerator<T> {
    /// Wraps `receiver`.
    pub fn new(receiver: Receiver<T>) -> Self {
        ChannelEnumerator {
            receiver,
            current: None,
        }
    }
}

impl<T> Enumerator for ChannelEnumerator<T> {
    type Item = T;

    fn move_next(&mut self) -> bool {
        self.current = self.receiver.recv().ok();
        self.current.is_some()
    }

    fn current(&self) -> Result<&T> {
        self.current.as_ref().ok_or(SeqError::NoCurrent)
    }
}

/// Enumerable that calls a factory for every enumerator.
///
/// ```
/// use seqlinq::{Enumerable, FactoryEnumerable};
///
/// let evens = FactoryEnumerable::new(|| (0..10).step_by(2));
/// assert_eq!(evens.to_seq().sum()?, 20);
/// assert_eq!(evens.to_seq().count(), 5);
/// # Ok::<(), seqlinq::SeqError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FactoryEnumerable<F> {
    factory: F,
}

impl<F> FactoryEnumerable<F> {
    /// Wraps `factory`.
    pub fn new(factory: F) -> Self {
        FactoryEnumerable { factory }
    }
}

impl<F, S> Enumerable for FactoryEnumerable<F>
where
    F: Fn() -> S,
    S: IntoIterator,
{
    type Item = S::Item;
    type Enumerator<'a>
        = FactoryEnumerator<'a, F, S::IntoIter>
    where
        Self: 'a;

    fn enumerator(&self) -> Self::Enumerator<'_> {
        FactoryEnumerator {
            factory: &self.factory,
            inner: IterEnumerator::new((self.factory)().into_iter()),
        }
    }
}

/// Enumerator for [`FactoryEnumerable`]; resets by calling the factory again.
pub struct FactoryEnumerator<'a, F, I: Iterator> {
    factory: &'a F,
    inner: IterEnumerator<I>,
}

impl<F, S, I> Enumerator for FactoryEnumerator<'_, F, I>
where
    F: Fn() -> S,
    S: IntoIterator<IntoIter = I>,
    I: Iterator,
{
    type Item = I::Item;

    fn move_next(&mut self) -> bool {
        self.inner.move_next()
    }

    fn current(&self) -> Result<&I::Item> {
        self.inner.current()
    }

    fn reset(&mut self) -> Result<()> {
        self.inner = IterEnumerator::new((self.factory)().into_iter());
        Ok(())
    }
}

/// Enumerable over a push-style producer.
///
/// The producer receives a sink and calls it once per element. The sink
/// returns `false` when no more elements are wanted; the producer should
/// then stop. Each enumerator runs the producer once and buffers what it
/// pushed.
///
/// ```
/// use seqlinq::{Enumerable, PushEnumerable};
///
/// let naturals = PushEnumerable::new(|sink: &mut dyn FnMut(u64) -> bool| {
///     let mut n = 0;
///     while sink(n) {
///         n += 1;
///     }
/// })
/// .limit(4);
///
/// assert_eq!(naturals.to_seq().to_vec(), vec![0, 1, 2, 3]);
/// ```
pub struct PushEnumerable<T, P> {
    producer: P,
    limit: Option<usize>,
    _item: PhantomData<fn() -> T>,
}

impl<T, P> PushEnumerable<T, P>
where
    P: Fn(&mut dyn FnMut(T) -> bool),
{
    /// Wraps `producer`.
    pub fn new(producer: P) -> Self {
        PushEnumerable {
            producer,
            limit: None,
            _item: PhantomData,
        }
    }

    /// Asks the producer to stop after `count` elements.
    pub fn limit(mut self, count: usize) -> Self {
        self.limit = Some(count);
        self
    }

    fn collect(&self) -> Vec<T> {
        let mut items = Vec::new();
        if self.limit != Some(0) {
            let limit = self.limit;
            let mut sink = |item: T| {
                let full = |len: usize| limit.is_some_and(|n| len >= n);
                if full(items.len()) {
                    return false;
                }
                items.push(item);
                !full(items.len())
            };
            (self.producer)(&mut sink);
        }
        tracing::trace!(len = items.len(), "buffered pushed elements");
        items
    }
}

impl<T, P> Enumerable for PushEnumerable<T, P>
where
    P: Fn(&mut dyn FnMut(T) -> bool),
{
    type Item = T;
    type Enumerator<'a>
        = BufferedEnumerator<T>
    where
        Self: 'a;

    fn enumerator(&self) -> BufferedEnumerator<T> {
        BufferedEnumerator::new(self.collect())
    }
}

impl<T> Enumerable for [T] {
    type Item = T;
    type Enumerator<'a>
        = SliceEnumerator<'a, T>
    where
        Self: 'a;

    fn enumerator(&self) -> SliceEnumerator<'_, T> {
        SliceEnumerator::new(self)
    }
}

impl<T> Enumerable for Vec<T> {
    type Item = T;
    type Enumerator<'a>
        = SliceEnumerator<'a, T>
    where
        Self: 'a;

    fn enumerator(&self) -> SliceEnumerator<'_, T> {
        SliceEnumerator::new(self)
    }
}

impl<I: Iterator> Seq<I> {
    /// Turns the sequence into a forward-only [`Enumerator`].
    pub fn into_enumerator(self) -> IterEnumerator<I> {
        IterEnumerator::new(self.iter)
    }
}
