use crate::iter::Iterum;
use crate::option::Maybe;

/// An iterum that pairs the values of two iterums.
///
/// The left side is pulled first. The right side is pulled only when the
/// left produced a value, so no right-hand value is lost when the left runs
/// out first.
///
/// Created by [`Iterum::zip`].
#[derive(Debug, Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Zip<A, B> {
    left: A,
    right: B,
}

impl<A, B> Zip<A, B> {
    pub(crate) const fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: Iterum, B: Iterum> Iterum for Zip<A, B> {
    type Item = (A::Item, B::Item);

    #[inline]
    fn next(&mut self) -> Maybe<(A::Item, B::Item)> {
        let left = self.left.next();
        left.and_then(|left| self.right.next().map(|right| (left, right)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_lower, left_upper) = self.left.size_hint();
        let (right_lower, right_upper) = self.right.size_hint();
        let upper = match (left_upper, right_upper) {
            (Some(left), Some(right)) => Some(left.min(right)),
            (bound @ Some(_), None) | (None, bound) => bound,
        };
        (left_lower.min(right_lower), upper)
    }
}
