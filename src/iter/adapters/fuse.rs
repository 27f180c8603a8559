use crate::iter::{Diterum, Iterum};
use crate::option::Maybe;

/// An iterum that returns `Nil` forever once its source has returned `Nil`.
///
/// Created by [`Iterum::fuse`].
#[derive(Debug, Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Fuse<I> {
    iter: I,
    done: bool,
}

impl<I> Fuse<I> {
    pub(crate) const fn new(iter: I) -> Self {
        Self { iter, done: false }
    }

    const fn latch<T>(&mut self, item: Maybe<T>) -> Maybe<T> {
        if item.is_nil() {
            self.done = true;
        }
        item
    }
}

impl<I: Iterum> Iterum for Fuse<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        if self.done {
            return Maybe::Nil;
        }
        let item = self.iter.next();
        self.latch(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.iter.size_hint()
        }
    }
}

impl<I: Diterum> Diterum for Fuse<I> {
    #[inline]
    fn next_back(&mut self) -> Maybe<I::Item> {
        if self.done {
            return Maybe::Nil;
        }
        let item = self.iter.next_back();
        self.latch(item)
    }

    #[inline]
    fn len(&self) -> usize {
        if self.done { 0 } else { self.iter.len() }
    }
}
