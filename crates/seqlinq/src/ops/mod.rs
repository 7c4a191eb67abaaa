//! Operators on [`Seq`](crate::Seq), one module per operator family.
//!
//! Every module adds an inherent `impl` block to `Seq`. Adapters that need
//! state beyond what `std::iter` offers are defined next to their operator.

mod aggregate;
mod combine;
mod convert;
mod element;
mod group;
mod join;
mod partition;
mod projection;
mod set;

pub use combine::DefaultIfEmpty;
pub use join::{GroupJoin, Join, LeftJoin};
pub use partition::{Chunk, SkipLast};
pub use projection::SelectManyWith;
pub use set::SetFilter;

/// Runs `factory` on the first pull and iterates what it returns.
///
/// Buffering operators use this to stay deferred: nothing is consumed until
/// the result is iterated.
pub(crate) struct Deferred<F, J> {
    factory: Option<F>,
    iter: Option<J>,
}

impl<F, J> Deferred<F, J> {
    pub(crate) fn new(factory: F) -> Self {
        Deferred {
            factory: Some(factory),
            iter: None,
        }
    }
}

impl<F, J> Iterator for Deferred<F, J>
where
    F: FnOnce() -> J,
    J: Iterator,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<J::Item> {
        if let Some(factory) = self.factory.take() {
            self.iter = Some(factory());
        }
        self.iter.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.iter {
            Some(iter) => iter.size_hint(),
            None => (0, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn deferred_runs_factory_once_on_first_pull() {
        let calls = Cell::new(0);
        let mut d = Deferred::new(|| {
            calls.set(calls.get() + 1);
            vec![1, 2].into_iter()
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(d.next(), Some(1));
        assert_eq!(d.next(), Some(2));
        assert_eq!(d.next(), None);
        assert_eq!(calls.get(), 1);
    }
}
