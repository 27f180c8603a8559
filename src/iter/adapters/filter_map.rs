use std::fmt;

use crate::iter::Iterum;
use crate::option::Maybe;

/// An iterum that maps values and keeps the `Some` results.
///
/// Created by [`Iterum::filter_map`].
#[derive(Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct FilterMap<I, F> {
    iter: I,
    function: F,
}

impl<I, F> FilterMap<I, F> {
    pub(crate) const fn new(iter: I, function: F) -> Self {
        Self { iter, function }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for FilterMap<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FilterMap").field("iter", &self.iter).finish_non_exhaustive()
    }
}

impl<B, I, F> Iterum for FilterMap<I, F>
where
    I: Iterum,
    F: FnMut(I::Item) -> Maybe<B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Maybe<B> {
        self.iter.find_map(&mut self.function)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}
