use crate::iter::Iterum;
use crate::option::Maybe;

/// An iterum that yields at most `n` values.
///
/// Created by [`Iterum::take`].
#[derive(Debug, Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Take<I> {
    iter: I,
    remaining: usize,
}

impl<I> Take<I> {
    pub(crate) const fn new(iter: I, remaining: usize) -> Self {
        Self { iter, remaining }
    }
}

impl<I: Iterum> Iterum for Take<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        if self.remaining == 0 {
            return Maybe::Nil;
        }
        self.remaining -= 1;
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let upper = upper.map_or(self.remaining, |upper| upper.min(self.remaining));
        (lower.min(self.remaining), Some(upper))
    }
}
