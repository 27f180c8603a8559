//! Sources, conversions and the bridge to `std::iter`.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Range, RangeInclusive};

use super::{Diterum, Fuse, Iterum};
use crate::option::Maybe;

/// Conversion into an [`Iterum`].
///
/// Every iterum converts into itself. Vectors, arrays and [`Maybe`] also
/// convert, so they can be passed directly to [`Iterum::chain`],
/// [`Iterum::zip`], [`Iterum::flat_map`] and the comparison methods.
///
/// # Examples
///
/// ```rust
/// use iterum::prelude::*;
///
/// let pairs: Vec<(i32, char)> = iterum([1, 2, 3]).zip(vec!['a', 'b']).collect();
/// assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
/// ```
pub trait IntoIterum {
    /// The type of value produced.
    type Item;
    /// The iterum this converts into.
    type IntoIterum: Iterum<Item = Self::Item>;

    /// Performs the conversion.
    fn into_iterum(self) -> Self::IntoIterum;
}

impl<I: Iterum> IntoIterum for I {
    type Item = I::Item;
    type IntoIterum = Self;

    #[inline]
    fn into_iterum(self) -> Self {
        self
    }
}

impl<T> IntoIterum for Vec<T> {
    type Item = T;
    type IntoIterum = Iter<std::vec::IntoIter<T>>;

    #[inline]
    fn into_iterum(self) -> Self::IntoIterum {
        Iter::new(self.into_iter())
    }
}

impl<T, const N: usize> IntoIterum for [T; N] {
    type Item = T;
    type IntoIterum = Iter<std::array::IntoIter<T, N>>;

    #[inline]
    fn into_iterum(self) -> Self::IntoIterum {
        Iter::new(self.into_iter())
    }
}

impl<'a, T> IntoIterum for &'a [T] {
    type Item = &'a T;
    type IntoIterum = Iter<std::slice::Iter<'a, T>>;

    #[inline]
    fn into_iterum(self) -> Self::IntoIterum {
        Iter::new(self.iter())
    }
}

impl<'a, T> IntoIterum for &'a Vec<T> {
    type Item = &'a T;
    type IntoIterum = Iter<std::slice::Iter<'a, T>>;

    #[inline]
    fn into_iterum(self) -> Self::IntoIterum {
        Iter::new(self.iter())
    }
}

impl<T> IntoIterum for Range<T>
where
    Self: Iterator<Item = T>,
{
    type Item = T;
    type IntoIterum = Iter<Self>;

    #[inline]
    fn into_iterum(self) -> Self::IntoIterum {
        Iter::new(self)
    }
}

impl<T> IntoIterum for RangeInclusive<T>
where
    Self: Iterator<Item = T>,
{
    type Item = T;
    type IntoIterum = Iter<Self>;

    #[inline]
    fn into_iterum(self) -> Self::IntoIterum {
        Iter::new(self)
    }
}

// =============================================================================
// Iter
// =============================================================================

/// An iterum over any [`std::iter::Iterator`].
///
/// Created by [`iterum`] or [`diterum`]. It is a [`Diterum`] whenever the
/// wrapped iterator is double-ended and exact-size.
#[derive(Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Iter<I> {
    iter: I,
}

impl<I> Iter<I> {
    const fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Returns the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: fmt::Debug> fmt::Debug for Iter<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Iter").field(&self.iter).finish()
    }
}

impl<I: Iterator> Iterum for Iter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        self.iter.next().into()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I> Diterum for Iter<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    #[inline]
    fn next_back(&mut self) -> Maybe<I::Item> {
        self.iter.next_back().into()
    }

    #[inline]
    fn len(&self) -> usize {
        ExactSizeIterator::len(&self.iter)
    }
}

/// Wraps any iterable as an [`Iterum`].
///
/// # Examples
///
/// ```rust
/// use iterum::prelude::*;
///
/// let mut letters = iterum("abc".chars());
/// assert_eq!(letters.next(), Maybe::Some('a'));
/// assert_eq!(letters.collect::<String>(), "bc");
/// ```
#[inline]
pub fn iterum<T: IntoIterator>(source: T) -> Iter<T::IntoIter> {
    Iter::new(source.into_iter())
}

/// Wraps a double-ended, exact-size iterable as a [`Diterum`].
///
/// This is [`iterum`] with the bounds stated up front, so a source that
/// cannot be consumed from the back is rejected where it is wrapped.
///
/// # Examples
///
/// ```rust
/// use iterum::prelude::*;
///
/// let mut values = diterum(vec![1, 2, 3]);
/// assert_eq!(values.next_back(), Maybe::Some(3));
/// assert_eq!(values.len(), 2);
/// ```
#[inline]
pub fn diterum<T>(source: T) -> Iter<T::IntoIter>
where
    T: IntoIterator,
    T::IntoIter: DoubleEndedIterator + ExactSizeIterator,
{
    Iter::new(source.into_iter())
}

// =============================================================================
// FromFn
// =============================================================================

/// An iterum driven by a closure.
///
/// Created by [`from_fn`].
#[derive(Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct FromFn<F> {
    function: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<T, F> Iterum for FromFn<F>
where
    F: FnMut() -> Maybe<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        (self.function)()
    }
}

/// Creates an iterum whose `next` calls `function`.
///
/// # Examples
///
/// ```rust
/// use iterum::prelude::*;
///
/// let mut state = 1;
/// let powers: Vec<u32> = from_fn(|| {
///     state *= 2;
///     if state > 32 { Maybe::Nil } else { Maybe::Some(state) }
/// })
/// .collect();
/// assert_eq!(powers, vec![2, 4, 8, 16, 32]);
/// ```
#[inline]
pub const fn from_fn<T, F>(function: F) -> FromFn<F>
where
    F: FnMut() -> Maybe<T>,
{
    FromFn { function }
}

// =============================================================================
// StdIter
// =============================================================================

/// A [`std::iter::Iterator`] over an [`Iterum`].
///
/// Created by [`Iterum::std`]. Double-ended iterums bridge to
/// [`DoubleEndedIterator`] and [`ExactSizeIterator`] as well.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct StdIter<I> {
    iter: I,
}

impl<I> StdIter<I> {
    pub(crate) const fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Returns the wrapped iterum.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterum> Iterator for StdIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next().into()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: Diterum> DoubleEndedIterator for StdIter<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.next_back().into()
    }
}

impl<I: Diterum> ExactSizeIterator for StdIter<I> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<I: Iterum> FusedIterator for StdIter<Fuse<I>> {}
