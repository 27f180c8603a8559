use std::fmt;

use super::Map;
use crate::iter::{IntoIterum, Iterum};
use crate::option::Maybe;

/// An iterum that yields the values of each nested iterable in turn.
///
/// Created by [`Iterum::flatten`].
#[derive(Debug, Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Flatten<I, U> {
    outer: I,
    front: Maybe<U>,
}

impl<I, U> Flatten<I, U> {
    pub(crate) const fn new(outer: I) -> Self {
        Self {
            outer,
            front: Maybe::Nil,
        }
    }
}

impl<I, U> Iterum for Flatten<I, U>
where
    I: Iterum,
    I::Item: IntoIterum<IntoIterum = U>,
    U: Iterum,
{
    type Item = U::Item;

    fn next(&mut self) -> Maybe<U::Item> {
        loop {
            if let Maybe::Some(inner) = &mut self.front {
                match inner.next() {
                    found @ Maybe::Some(_) => return found,
                    Maybe::Nil => self.front = Maybe::Nil,
                }
            }
            match self.outer.next() {
                Maybe::Some(next) => self.front = Maybe::Some(next.into_iterum()),
                Maybe::Nil => return Maybe::Nil,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (front_lower, front_upper) = match &self.front {
            Maybe::Some(inner) => inner.size_hint(),
            Maybe::Nil => (0, Some(0)),
        };
        match self.outer.size_hint() {
            (0, Some(0)) => (front_lower, front_upper),
            _ => (front_lower, None),
        }
    }
}

/// An iterum that maps each value to an iterable and yields the values of
/// each in turn.
///
/// Created by [`Iterum::flat_map`].
#[derive(Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct FlatMap<I, F, U> {
    inner: Flatten<Map<I, F>, U>,
}

impl<I, F, U> FlatMap<I, F, U> {
    pub(crate) const fn new(iter: I, function: F) -> Self {
        Self {
            inner: Flatten::new(Map::new(iter, function)),
        }
    }
}

impl<I: fmt::Debug, F, U: fmt::Debug> fmt::Debug for FlatMap<I, F, U> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FlatMap")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<I, F, V, U> Iterum for FlatMap<I, F, U>
where
    I: Iterum,
    F: FnMut(I::Item) -> V,
    V: IntoIterum<IntoIterum = U>,
    U: Iterum,
{
    type Item = U::Item;

    #[inline]
    fn next(&mut self) -> Maybe<U::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
