use std::fmt;

use crate::iter::Iterum;
use crate::option::Maybe;

/// An iterum that threads mutable state through its values.
///
/// Stops for good the first time the function returns `Nil`.
///
/// Created by [`Iterum::scan`].
#[derive(Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Scan<I, S, F> {
    iter: I,
    state: S,
    function: F,
    done: bool,
}

impl<I, S, F> Scan<I, S, F> {
    pub(crate) const fn new(iter: I, state: S, function: F) -> Self {
        Self {
            iter,
            state,
            function,
            done: false,
        }
    }

    /// Returns the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let mut running = iterum([1, 2, 3]).scan(0, |total, x| {
    ///     *total += x;
    ///     Maybe::Some(*total)
    /// });
    /// running.next();
    /// running.next();
    /// assert_eq!(*running.state(), 3);
    /// ```
    #[inline]
    pub const fn state(&self) -> &S {
        &self.state
    }
}

impl<I: fmt::Debug, S: fmt::Debug, F> fmt::Debug for Scan<I, S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Scan")
            .field("iter", &self.iter)
            .field("state", &self.state)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<B, I, S, F> Iterum for Scan<I, S, F>
where
    I: Iterum,
    F: FnMut(&mut S, I::Item) -> Maybe<B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Maybe<B> {
        if self.done {
            return Maybe::Nil;
        }
        let Maybe::Some(item) = self.iter.next() else {
            return Maybe::Nil;
        };
        let produced = (self.function)(&mut self.state, item);
        if produced.is_nil() {
            self.done = true;
        }
        produced
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
