//! The double-ended, exact-size iteration protocol.

use super::{Iterum, Rev};
use crate::option::Maybe;

/// An [`Iterum`] that can also be consumed from the back and knows exactly
/// how many values remain.
///
/// Values taken from either end are removed from the same pool: once the
/// front and back meet, both ends produce `Nil`. [`len`](Diterum::len)
/// always equals the number of values still to be produced.
///
/// # Examples
///
/// ```rust
/// use iterum::prelude::*;
///
/// let mut values = diterum([1, 2, 3, 4, 5]);
/// assert_eq!(values.len(), 5);
/// assert_eq!(values.next(), Maybe::Some(1));
/// assert_eq!(values.next_back(), Maybe::Some(5));
/// assert_eq!(values.len(), 3);
///
/// let rest: Vec<i32> = values.rev().collect();
/// assert_eq!(rest, vec![4, 3, 2]);
/// ```
pub trait Diterum: Iterum {
    /// Removes and returns the value at the back, or `Nil` when drained.
    fn next_back(&mut self) -> Maybe<Self::Item>;

    /// Returns the exact number of remaining values.
    fn len(&self) -> usize;

    /// Returns `true` when no values remain.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swaps the two ends.
    #[inline]
    fn rev(self) -> Rev<Self>
    where
        Self: Sized,
    {
        Rev::new(self)
    }

    /// Folds from the back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let digits = diterum(['1', '2', '3']).rfold(String::new(), |mut text, c| {
    ///     text.push(c);
    ///     text
    /// });
    /// assert_eq!(digits, "321");
    /// ```
    #[inline]
    fn rfold<B, F>(self, init: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.rev().fold(init, function)
    }

    /// Folds from the back while `function` succeeds; the first `Err` ends
    /// the fold with `Nil`.
    #[inline]
    fn try_rfold<B, E, F>(&mut self, init: B, function: F) -> Maybe<B>
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> Result<B, E>,
    {
        self.by_ref().rev().try_fold(init, function)
    }

    /// Folds from the back, converting only the errors accepted by `catches`
    /// into `Nil`.
    ///
    /// # Errors
    ///
    /// Returns the first error that `catches` rejects.
    #[inline]
    fn try_rfold_catching<B, E, F, C>(
        &mut self,
        init: B,
        function: F,
        catches: C,
    ) -> Result<Maybe<B>, E>
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> Result<B, E>,
        C: FnMut(&E) -> bool,
    {
        self.by_ref().rev().try_fold_catching(init, function, catches)
    }

    /// Returns the last value satisfying `predicate`, searching from the
    /// back.
    #[inline]
    fn rfind<P>(&mut self, predicate: P) -> Maybe<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.by_ref().rev().find(predicate)
    }

    /// Returns the `n`th value from the back, zero-based.
    #[inline]
    fn nth_back(&mut self, n: usize) -> Maybe<Self::Item>
    where
        Self: Sized,
    {
        self.by_ref().rev().nth(n)
    }

    /// Searches from the back, returning the front-based index of the match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let mut values = diterum([1, 2, 3, 2, 1]);
    /// assert_eq!(values.rposition(|x| x == 2), Maybe::Some(3));
    /// ```
    #[inline]
    fn rposition<P>(&mut self, predicate: P) -> Maybe<usize>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        let length = self.len();
        self.by_ref()
            .rev()
            .position(predicate)
            .map(|offset| length - offset - 1)
    }
}

impl<I: Diterum + ?Sized> Diterum for &mut I {
    #[inline]
    fn next_back(&mut self) -> Maybe<I::Item> {
        (**self).next_back()
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<I: Diterum + ?Sized> Diterum for Box<I> {
    #[inline]
    fn next_back(&mut self) -> Maybe<I::Item> {
        (**self).next_back()
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::diterum;
    use rstest::rstest;

    #[rstest]
    fn test_interleaved_ends_share_one_pool() {
        let mut values = diterum([1, 2, 3, 4, 5, 6]);
        assert_eq!(values.next(), Maybe::Some(1));
        assert_eq!(values.next_back(), Maybe::Some(6));
        assert_eq!(values.next(), Maybe::Some(2));
        assert_eq!(values.next_back(), Maybe::Some(5));
        assert_eq!(values.len(), 2);
        assert_eq!(values.next(), Maybe::Some(3));
        assert_eq!(values.next_back(), Maybe::Some(4));
        assert!(values.is_empty());
        assert_eq!(values.next(), Maybe::Nil);
        assert_eq!(values.next_back(), Maybe::Nil);
    }

    #[rstest]
    #[case(0, Maybe::Some(5))]
    #[case(4, Maybe::Some(1))]
    #[case(5, Maybe::Nil)]
    fn test_nth_back(#[case] n: usize, #[case] expected: Maybe<i32>) {
        assert_eq!(diterum([1, 2, 3, 4, 5]).nth_back(n), expected);
    }

    #[rstest]
    fn test_rfind_leaves_front_untouched() {
        let mut values = diterum([1, 2, 3, 4]);
        assert_eq!(values.rfind(|x| x % 2 == 1), Maybe::Some(3));
        assert_eq!(values.next(), Maybe::Some(1));
        assert_eq!(values.len(), 1);
    }

    #[rstest]
    fn test_try_rfold_stops_at_first_error() {
        let mut values = diterum([1, 0, 3]);
        let folded = values.try_rfold(0, |total, x| if x == 0 { Err(()) } else { Ok(total + x) });
        assert_eq!(folded, Maybe::Nil);
        assert_eq!(values.next_back(), Maybe::Some(1));
    }
}
