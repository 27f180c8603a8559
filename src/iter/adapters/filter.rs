use std::fmt;

use crate::iter::Iterum;
use crate::option::Maybe;

/// An iterum that keeps only the values satisfying a predicate.
///
/// Created by [`Iterum::filter`].
#[derive(Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) const fn new(iter: I, predicate: P) -> Self {
        Self { iter, predicate }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Filter").field("iter", &self.iter).finish_non_exhaustive()
    }
}

impl<I, P> Iterum for Filter<I, P>
where
    I: Iterum,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        self.iter.find(&mut self.predicate)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}
