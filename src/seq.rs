//! Stepped integer ranges.
//!
//! This module provides:
//!
//! - [`Seq`]: a bounded range with an exclusive end and a non-zero step,
//!   consumable from both ends
//! - [`InfSeq`]: an unbounded range counting from a start by a step
//! - [`seq`], [`seq_to`] and [`seq_from`]: shorthand constructors
//!
//! Both ranges keep O(1) state no matter how long they are. Steps may be
//! negative for signed element types, in which case the range counts down.
//!
//! # Examples
//!
//! ```rust
//! use iterum::prelude::*;
//!
//! let mut values = seq(1, 15, 5);
//! assert_eq!(values.len(), 3);
//! assert_eq!(values.next_back(), Maybe::Some(11));
//! assert_eq!(values.next(), Maybe::Some(1));
//! assert_eq!(values.next(), Maybe::Some(6));
//! assert_eq!(values.next(), Maybe::Nil);
//!
//! let countdown: Vec<i32> = seq(10, 0, -3).collect();
//! assert_eq!(countdown, vec![10, 7, 4, 1]);
//!
//! let odd: Vec<u8> = seq_from(1, 2).take(4).collect();
//! assert_eq!(odd, vec![1, 3, 5, 7]);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Range, RangeFrom};

use crate::iter::{Diterum, InvalidStepError, Iterum};
use crate::option::Maybe;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integers that can be counted by [`Seq`] and [`InfSeq`].
///
/// Range arithmetic happens in `i128`, so advancing past the last element
/// of a range never overflows the element type.
pub trait SeqInt: Copy + sealed::Sealed {
    /// Zero.
    const ZERO: Self;
    /// One.
    const ONE: Self;
    /// The smallest value of the type, widened.
    const LOWEST: i128;
    /// The largest value of the type, widened.
    const HIGHEST: i128;

    /// Widens to `i128`.
    fn widen(self) -> i128;

    /// Narrows from `i128`, producing `Nil` when `value` is out of range.
    fn narrow(value: i128) -> Maybe<Self>;
}

macro_rules! impl_seq_int {
    ($($int:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $int {}

            #[allow(
                clippy::cast_lossless,
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_sign_loss
            )]
            impl SeqInt for $int {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const LOWEST: i128 = $int::MIN as i128;
                const HIGHEST: i128 = $int::MAX as i128;

                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn narrow(value: i128) -> Maybe<Self> {
                    if (<Self as SeqInt>::LOWEST..=<Self as SeqInt>::HIGHEST).contains(&value) {
                        Maybe::Some(value as Self)
                    } else {
                        Maybe::Nil
                    }
                }
            }
        )*

    };
}

impl_seq_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Computes the last value reachable from `front` before `end`.
///
/// The remainder takes the sign of `step`, so the same formula serves
/// ascending and descending ranges.
const fn compute_back(front: i128, end: i128, step: i128) -> i128 {
    let remainder = ((end - front) % step + step) % step;
    if remainder == 0 {
        end - step
    } else {
        end - remainder
    }
}

// =============================================================================
// Seq
// =============================================================================

/// A bounded stepped range with an exclusive end.
///
/// `Seq` is a [`Diterum`]: values can be taken from both ends, and
/// [`len`](Diterum::len) is computed arithmetically.
///
/// # Examples
///
/// ```rust
/// use iterum::prelude::*;
///
/// let forward: Vec<i64> = Seq::new(3, 9, 3).collect();
/// let backward: Vec<i64> = Seq::new(3, 9, 3).rev().collect();
/// assert_eq!(forward, vec![3, 6]);
/// assert_eq!(backward, vec![6, 3]);
///
/// assert!(Seq::try_new(0u8, 10, 0).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Seq<T> {
    front: i128,
    back: i128,
    step: i128,
    element: PhantomData<T>,
}

impl<T: SeqInt> Seq<T> {
    /// Creates a range from `start` up to (but excluding) `end`, counting by
    /// `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero. Use [`Seq::try_new`] to handle that case.
    #[track_caller]
    pub fn new(start: T, end: T, step: T) -> Self {
        match Self::try_new(start, end, step) {
            Ok(range) => range,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a range from `start` up to (but excluding) `end`, counting by
    /// `step`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStepError`] if `step` is zero.
    pub fn try_new(start: T, end: T, step: T) -> Result<Self, InvalidStepError> {
        let step = step.widen();
        if step == 0 {
            trace_debug!(operation = "Seq", "rejected zero step");
            return Err(InvalidStepError { operation: "Seq" });
        }
        Ok(Self::from_widened(start.widen(), end.widen(), step))
    }

    const fn from_widened(front: i128, end: i128, step: i128) -> Self {
        Self {
            front,
            back: compute_back(front, end, step),
            step,
            element: PhantomData,
        }
    }

    const fn is_exhausted(&self) -> bool {
        self.step.signum() * (self.back - self.front) < 0
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Seq")
            .field("start", &self.front)
            .field("end", &(self.back + self.step))
            .field("step", &self.step)
            .finish()
    }
}

impl<T: SeqInt> Iterum for Seq<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        if self.is_exhausted() {
            return Maybe::Nil;
        }
        let value = self.front;
        self.front += self.step;
        T::narrow(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = self.len();
        (length, Some(length))
    }
}

impl<T: SeqInt> Diterum for Seq<T> {
    #[inline]
    fn next_back(&mut self) -> Maybe<T> {
        if self.is_exhausted() {
            return Maybe::Nil;
        }
        let value = self.back;
        self.back -= self.step;
        T::narrow(value)
    }

    fn len(&self) -> usize {
        if self.is_exhausted() {
            return 0;
        }
        usize::try_from((self.back + self.step - self.front) / self.step).unwrap_or(usize::MAX)
    }
}

impl<T: SeqInt> From<Range<T>> for Seq<T> {
    fn from(range: Range<T>) -> Self {
        Self::from_widened(range.start.widen(), range.end.widen(), 1)
    }
}

/// Creates a [`Seq`] from `start` up to (but excluding) `end`, counting by
/// `step`.
///
/// # Panics
///
/// Panics if `step` is zero.
#[track_caller]
pub fn seq<T: SeqInt>(start: T, end: T, step: T) -> Seq<T> {
    Seq::new(start, end, step)
}

/// Creates a [`Seq`] counting from zero up to (but excluding) `end`.
///
/// # Examples
///
/// ```rust
/// use iterum::prelude::*;
///
/// let mut values = seq_to(3usize);
/// assert_eq!(values.len(), 3);
/// assert_eq!(values.next_back(), Maybe::Some(2));
/// assert_eq!(values.next(), Maybe::Some(0));
/// ```
pub fn seq_to<T: SeqInt>(end: T) -> Seq<T> {
    Seq::from(T::ZERO..end)
}

// =============================================================================
// InfSeq
// =============================================================================

/// An unbounded stepped range.
///
/// Produces a value on every call until the next value would leave the
/// range of `T`; from then on it produces `Nil`.
///
/// # Examples
///
/// ```rust
/// use iterum::prelude::*;
///
/// let mut values = InfSeq::new(-10, -1);
/// assert_eq!(values.next(), Maybe::Some(-10));
/// assert_eq!(values.next(), Maybe::Some(-11));
/// assert_eq!(values.next(), Maybe::Some(-12));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct InfSeq<T> {
    front: i128,
    step: i128,
    element: PhantomData<T>,
}

impl<T: SeqInt> InfSeq<T> {
    /// Creates an unbounded range from `start`, counting by `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero. Use [`InfSeq::try_new`] to handle that case.
    #[track_caller]
    pub fn new(start: T, step: T) -> Self {
        match Self::try_new(start, step) {
            Ok(range) => range,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates an unbounded range from `start`, counting by `step`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStepError`] if `step` is zero.
    pub fn try_new(start: T, step: T) -> Result<Self, InvalidStepError> {
        let step = step.widen();
        if step == 0 {
            trace_debug!(operation = "InfSeq", "rejected zero step");
            return Err(InvalidStepError {
                operation: "InfSeq",
            });
        }
        Ok(Self::from_widened(start.widen(), step))
    }

    const fn from_widened(front: i128, step: i128) -> Self {
        Self {
            front,
            step,
            element: PhantomData,
        }
    }
}

impl<T> fmt::Debug for InfSeq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("InfSeq")
            .field("start", &self.front)
            .field("step", &self.step)
            .finish()
    }
}

impl<T: SeqInt> Iterum for InfSeq<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        let value = T::narrow(self.front);
        if value.is_some() {
            self.front += self.step;
        }
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if T::narrow(self.front).is_nil() {
            return (0, Some(0));
        }
        let remaining = if self.step > 0 {
            (T::HIGHEST - self.front) / self.step + 1
        } else {
            (self.front - T::LOWEST) / -self.step + 1
        };
        usize::try_from(remaining)
            .map_or((usize::MAX, None), |remaining| (remaining, Some(remaining)))
    }
}

impl<T: SeqInt> From<RangeFrom<T>> for InfSeq<T> {
    fn from(range: RangeFrom<T>) -> Self {
        Self::from_widened(range.start.widen(), 1)
    }
}

/// Creates an [`InfSeq`] from `start`, counting by `step`.
///
/// # Panics
///
/// Panics if `step` is zero.
#[track_caller]
pub fn seq_from<T: SeqInt>(start: T, step: T) -> InfSeq<T> {
    InfSeq::new(start, step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 15, 5, 11)]
    #[case(3, 9, 3, 6)]
    #[case(10, 0, -3, 1)]
    #[case(0, 10, -1, 11)]
    #[case(-3, 3, 2, 1)]
    fn test_compute_back(
        #[case] front: i128,
        #[case] end: i128,
        #[case] step: i128,
        #[case] expected: i128,
    ) {
        assert_eq!(compute_back(front, end, step), expected);
    }

    #[rstest]
    #[case(seq(0, 0, 1), 0)]
    #[case(seq(5, 0, 1), 0)]
    #[case(seq(0, 10, -1), 0)]
    #[case(seq(1, 15, 5), 3)]
    #[case(seq(10, 0, -3), 4)]
    #[case(seq(-5, 5, 1), 10)]
    fn test_len(#[case] range: Seq<i32>, #[case] expected: usize) {
        assert_eq!(range.len(), expected);
        assert_eq!(range.clone().count(), expected);
    }

    #[rstest]
    fn test_debug_shows_remaining_range() {
        let mut values = seq(0, 10, 3);
        values.next();
        assert_eq!(format!("{values:?}"), "Seq { start: 3, end: 12, step: 3 }");
    }

    #[rstest]
    fn test_equality_tracks_position() {
        let mut advanced = seq(0, 6, 2);
        advanced.next();
        assert_eq!(advanced, seq(2, 6, 2));
        assert_ne!(advanced, seq(0, 6, 2));
    }

    #[rstest]
    fn test_unsigned_range_ends_at_type_bound() {
        let tail: Vec<u8> = seq(250, 255, 2).collect();
        assert_eq!(tail, vec![250, 252, 254]);
        assert_eq!(seq(250u8, 255, 2).rev().collect::<Vec<_>>(), vec![254, 252, 250]);
    }

    #[rstest]
    #[should_panic(expected = "Seq: step must be non-zero")]
    fn test_zero_step_panics() {
        let _ = seq(0, 10, 0);
    }

    #[rstest]
    fn test_inf_seq_size_hint_counts_to_type_bound() {
        assert_eq!(seq_from(250u8, 2).size_hint(), (3, Some(3)));
        assert_eq!(seq_from(-3i8, -1).size_hint(), (126, Some(126)));
    }

    #[rstest]
    fn test_from_ranges() {
        assert_eq!(Seq::from(2..5).collect::<Vec<i32>>(), vec![2, 3, 4]);
        assert_eq!(InfSeq::from(7u16..).take(2).collect::<Vec<_>>(), vec![7, 8]);
    }
}
