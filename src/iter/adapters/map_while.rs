use std::fmt;

use crate::iter::Iterum;
use crate::option::Maybe;

/// An iterum that maps values until the function first returns `Nil`.
///
/// Created by [`Iterum::map_while`].
#[derive(Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct MapWhile<I, F> {
    iter: I,
    function: F,
    done: bool,
}

impl<I, F> MapWhile<I, F> {
    pub(crate) const fn new(iter: I, function: F) -> Self {
        Self {
            iter,
            function,
            done: false,
        }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for MapWhile<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapWhile")
            .field("iter", &self.iter)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<B, I, F> Iterum for MapWhile<I, F>
where
    I: Iterum,
    F: FnMut(I::Item) -> Maybe<B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Maybe<B> {
        if self.done {
            return Maybe::Nil;
        }
        let mapped = self.iter.next().and_then(&mut self.function);
        if mapped.is_nil() {
            self.done = true;
        }
        mapped
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
