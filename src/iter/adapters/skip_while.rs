use std::fmt;

use crate::iter::Iterum;
use crate::option::Maybe;

/// An iterum that discards values while a predicate holds, then yields the
/// rest unchanged.
///
/// The predicate is never called again once it has failed.
///
/// Created by [`Iterum::skip_while`].
#[derive(Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct SkipWhile<I, P> {
    iter: I,
    predicate: P,
    skipping: bool,
}

impl<I, P> SkipWhile<I, P> {
    pub(crate) const fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            skipping: true,
        }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for SkipWhile<I, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SkipWhile")
            .field("iter", &self.iter)
            .field("skipping", &self.skipping)
            .finish_non_exhaustive()
    }
}

impl<I, P> Iterum for SkipWhile<I, P>
where
    I: Iterum,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        if !self.skipping {
            return self.iter.next();
        }
        loop {
            match self.iter.next() {
                Maybe::Some(item) if (self.predicate)(&item) => {}
                other => {
                    self.skipping = false;
                    return other;
                }
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if self.skipping { (0, upper) } else { (lower, upper) }
    }
}
