use std::fmt;

use crate::iter::Iterum;
use crate::option::Maybe;

/// An iterum that yields values while a predicate holds.
///
/// The first value that fails the predicate is consumed and dropped, and
/// every later call returns `Nil`.
///
/// Created by [`Iterum::take_while`].
#[derive(Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct TakeWhile<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> TakeWhile<I, P> {
    pub(crate) const fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            done: false,
        }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for TakeWhile<I, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TakeWhile")
            .field("iter", &self.iter)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<I, P> Iterum for TakeWhile<I, P>
where
    I: Iterum,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        if self.done {
            return Maybe::Nil;
        }
        match self.iter.next() {
            Maybe::Some(item) if (self.predicate)(&item) => Maybe::Some(item),
            _ => {
                self.done = true;
                Maybe::Nil
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}
