use crate::iter::Iterum;
use crate::option::Maybe;

/// An iterum that repeats the values of a cloneable iterum endlessly.
///
/// Created by [`Iterum::cycle`].
#[derive(Debug, Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Cycle<I> {
    original: I,
    current: I,
}

impl<I: Clone> Cycle<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            original: iter.clone(),
            current: iter,
        }
    }
}

impl<I> Iterum for Cycle<I>
where
    I: Iterum + Clone,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        match self.current.next() {
            Maybe::Nil => {
                self.current = self.original.clone();
                self.current.next()
            }
            Maybe::Some(item) => Maybe::Some(item),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.original.size_hint() {
            empty @ (0, Some(0)) => empty,
            (0, _) => (0, None),
            _ => (usize::MAX, None),
        }
    }
}
