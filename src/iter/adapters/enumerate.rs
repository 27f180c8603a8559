use crate::iter::{Diterum, Iterum};
use crate::option::Maybe;

/// An iterum that pairs each value with its zero-based index.
///
/// Created by [`Iterum::enumerate`].
#[derive(Debug, Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Enumerate<I> {
    iter: I,
    count: usize,
}

impl<I> Enumerate<I> {
    pub(crate) const fn new(iter: I) -> Self {
        Self { iter, count: 0 }
    }
}

impl<I: Iterum> Iterum for Enumerate<I> {
    type Item = (usize, I::Item);

    #[inline]
    fn next(&mut self) -> Maybe<(usize, I::Item)> {
        let item = self.iter.next();
        item.map(|item| {
            let index = self.count;
            self.count += 1;
            (index, item)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Indices from the back are computed from the remaining length, so they
/// agree with the indices the front would have assigned.
impl<I: Diterum> Diterum for Enumerate<I> {
    #[inline]
    fn next_back(&mut self) -> Maybe<(usize, I::Item)> {
        let length = self.iter.len();
        let item = self.iter.next_back();
        item.map(|item| (self.count + length - 1, item))
    }

    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}
