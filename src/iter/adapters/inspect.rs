use std::fmt;

use crate::iter::{Diterum, Iterum};
use crate::option::Maybe;

/// An iterum that calls a function with each value before passing it on.
///
/// Created by [`Iterum::inspect`].
#[derive(Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Inspect<I, F> {
    iter: I,
    function: F,
}

impl<I, F> Inspect<I, F> {
    pub(crate) const fn new(iter: I, function: F) -> Self {
        Self { iter, function }
    }

    fn observe<T>(&mut self, item: Maybe<T>) -> Maybe<T>
    where
        F: FnMut(&T),
    {
        if let Maybe::Some(value) = &item {
            (self.function)(value);
        }
        item
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Inspect<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Inspect").field("iter", &self.iter).finish_non_exhaustive()
    }
}

impl<I, F> Iterum for Inspect<I, F>
where
    I: Iterum,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        let item = self.iter.next();
        self.observe(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> Diterum for Inspect<I, F>
where
    I: Diterum,
    F: FnMut(&I::Item),
{
    #[inline]
    fn next_back(&mut self) -> Maybe<I::Item> {
        let item = self.iter.next_back();
        self.observe(item)
    }

    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}
