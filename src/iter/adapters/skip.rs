use crate::iter::Iterum;
use crate::option::Maybe;

/// An iterum that discards the first `n` values.
///
/// The discarded values are pulled on the first call to `next`.
///
/// Created by [`Iterum::skip`].
#[derive(Debug, Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Skip<I> {
    iter: I,
    remaining: usize,
}

impl<I> Skip<I> {
    pub(crate) const fn new(iter: I, remaining: usize) -> Self {
        Self { iter, remaining }
    }
}

impl<I: Iterum> Iterum for Skip<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        if self.remaining > 0 {
            let skipped = std::mem::take(&mut self.remaining);
            return self.iter.nth(skipped);
        }
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_sub(self.remaining),
            upper.map(|upper| upper.saturating_sub(self.remaining)),
        )
    }
}
