//! Iteration over the zero or one values of a [`Maybe`].

use super::Maybe;
use crate::iter::{Diterum, IntoIterum, Iterum};

/// An iterum over the value held by a [`Maybe`], if any.
///
/// Created by [`Maybe::iter`] or [`IntoIterum::into_iterum`].
///
/// # Examples
///
/// ```rust
/// use iterum::prelude::*;
///
/// let total: i32 = iterum([1, 2])
///     .chain(Maybe::Some(3))
///     .chain(Maybe::Nil)
///     .sum()
///     .unwrap();
/// assert_eq!(total, 6);
/// ```
#[derive(Debug, Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct MaybeIter<T> {
    inner: Maybe<T>,
}

impl<T> MaybeIter<T> {
    pub(crate) const fn new(inner: Maybe<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterum for MaybeIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = self.len();
        (length, Some(length))
    }
}

impl<T> Diterum for MaybeIter<T> {
    #[inline]
    fn next_back(&mut self) -> Maybe<T> {
        self.inner.take()
    }

    #[inline]
    fn len(&self) -> usize {
        usize::from(self.inner.is_some())
    }
}

impl<T> IntoIterum for Maybe<T> {
    type Item = T;
    type IntoIterum = MaybeIter<T>;

    #[inline]
    fn into_iterum(self) -> MaybeIter<T> {
        MaybeIter::new(self)
    }
}
