use crate::iter::{Diterum, Iterum};
use crate::option::Maybe;

/// A double-ended iterum with its ends swapped.
///
/// Created by [`Diterum::rev`].
#[derive(Debug, Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Rev<I> {
    iter: I,
}

impl<I> Rev<I> {
    pub(crate) const fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: Diterum> Iterum for Rev<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        self.iter.next_back()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: Diterum> Diterum for Rev<I> {
    #[inline]
    fn next_back(&mut self) -> Maybe<I::Item> {
        self.iter.next()
    }

    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}
