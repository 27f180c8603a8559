use std::fmt;

use crate::iter::{Diterum, Iterum};
use crate::option::Maybe;

/// An iterum that transforms each value with a function.
///
/// Created by [`Iterum::map`].
#[derive(Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
    iter: I,
    function: F,
}

impl<I, F> Map<I, F> {
    pub(crate) const fn new(iter: I, function: F) -> Self {
        Self { iter, function }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Map").field("iter", &self.iter).finish_non_exhaustive()
    }
}

impl<B, I, F> Iterum for Map<I, F>
where
    I: Iterum,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Maybe<B> {
        self.iter.next().map(&mut self.function)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<B, I, F> Diterum for Map<I, F>
where
    I: Diterum,
    F: FnMut(I::Item) -> B,
{
    #[inline]
    fn next_back(&mut self) -> Maybe<B> {
        self.iter.next_back().map(&mut self.function)
    }

    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}
