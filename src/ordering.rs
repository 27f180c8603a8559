//! Three-valued comparison results.
//!
//! [`Ordering`] is the result of comparing two values, or two sequences via
//! [`Iterum::cmp`](crate::iter::Iterum::cmp). [`compare`] and
//! [`partial_compare`] produce one from any pair of comparable values.
//!
//! # Examples
//!
//! ```rust
//! use iterum::{Maybe, Ordering, compare, partial_compare};
//!
//! assert_eq!(compare(&1, &2), Ordering::Less);
//! assert_eq!(compare(&1, &1), Ordering::Equal);
//! assert_eq!(compare(&2, &1), Ordering::Greater);
//!
//! // Incomparable values produce Nil instead of failing
//! assert_eq!(partial_compare(&f64::NAN, &1.0), Maybe::Nil);
//! ```

use std::cmp;

use crate::option::Maybe;

/// The result of a comparison between two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ordering {
    /// The compared value is less than the other.
    Less,
    /// The compared value is equal to the other.
    Equal,
    /// The compared value is greater than the other.
    Greater,
}

impl Ordering {
    /// Returns `true` for `Less`.
    #[inline]
    #[must_use]
    pub const fn is_lt(self) -> bool {
        matches!(self, Self::Less)
    }

    /// Returns `true` for `Less` or `Equal`.
    #[inline]
    #[must_use]
    pub const fn is_le(self) -> bool {
        !matches!(self, Self::Greater)
    }

    /// Returns `true` for `Equal`.
    #[inline]
    #[must_use]
    pub const fn is_eq(self) -> bool {
        matches!(self, Self::Equal)
    }

    /// Returns `true` for `Less` or `Greater`.
    #[inline]
    #[must_use]
    pub const fn is_ne(self) -> bool {
        !matches!(self, Self::Equal)
    }

    /// Returns `true` for `Greater`.
    #[inline]
    #[must_use]
    pub const fn is_gt(self) -> bool {
        matches!(self, Self::Greater)
    }

    /// Returns `true` for `Greater` or `Equal`.
    #[inline]
    #[must_use]
    pub const fn is_ge(self) -> bool {
        !matches!(self, Self::Less)
    }

    /// Swaps `Less` and `Greater`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::Ordering;
    ///
    /// assert_eq!(Ordering::Less.reverse(), Ordering::Greater);
    /// assert_eq!(Ordering::Equal.reverse(), Ordering::Equal);
    /// ```
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Equal => Self::Equal,
            Self::Greater => Self::Less,
        }
    }

    /// Returns `self` unless it is `Equal`, in which case returns `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::Ordering;
    ///
    /// assert_eq!(Ordering::Equal.then(Ordering::Less), Ordering::Less);
    /// assert_eq!(Ordering::Greater.then(Ordering::Less), Ordering::Greater);
    /// ```
    #[inline]
    #[must_use]
    pub const fn then(self, other: Self) -> Self {
        match self {
            Self::Equal => other,
            _ => self,
        }
    }

    /// Returns `self` unless it is `Equal`, in which case calls `function`.
    #[inline]
    #[must_use]
    pub fn then_with<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Equal => function(),
            _ => self,
        }
    }
}

impl From<cmp::Ordering> for Ordering {
    #[inline]
    fn from(ordering: cmp::Ordering) -> Self {
        match ordering {
            cmp::Ordering::Less => Self::Less,
            cmp::Ordering::Equal => Self::Equal,
            cmp::Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Ordering> for cmp::Ordering {
    #[inline]
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

/// Compares two totally ordered values.
///
/// # Examples
///
/// ```rust
/// use iterum::{Ordering, compare};
///
/// assert_eq!(compare("apple", "banana"), Ordering::Less);
/// ```
#[inline]
pub fn compare<T>(left: &T, right: &T) -> Ordering
where
    T: Ord + ?Sized,
{
    left.cmp(right).into()
}

/// Compares two partially ordered values, producing `Nil` when they are
/// incomparable.
///
/// # Examples
///
/// ```rust
/// use iterum::{Maybe, Ordering, partial_compare};
///
/// assert_eq!(partial_compare(&1.0, &2.0), Maybe::Some(Ordering::Less));
/// assert_eq!(partial_compare(&1.0, &f64::NAN), Maybe::Nil);
/// ```
#[inline]
pub fn partial_compare<T, U>(left: &T, right: &U) -> Maybe<Ordering>
where
    T: PartialOrd<U> + ?Sized,
    U: ?Sized,
{
    Maybe::<cmp::Ordering>::from(left.partial_cmp(right)).map(Ordering::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn test_compare_integers(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(compare(&left, &right), expected);
        assert_eq!(compare(&right, &left), expected.reverse());
    }

    #[rstest]
    #[case(Ordering::Less)]
    #[case(Ordering::Equal)]
    #[case(Ordering::Greater)]
    fn test_std_conversion_roundtrip(#[case] ordering: Ordering) {
        let standard: cmp::Ordering = ordering.into();
        assert_eq!(Ordering::from(standard), ordering);
    }

    #[rstest]
    fn test_predicates_agree_with_std() {
        for ordering in [Ordering::Less, Ordering::Equal, Ordering::Greater] {
            let standard: cmp::Ordering = ordering.into();
            assert_eq!(ordering.is_lt(), standard.is_lt());
            assert_eq!(ordering.is_le(), standard.is_le());
            assert_eq!(ordering.is_eq(), standard.is_eq());
            assert_eq!(ordering.is_ne(), standard.is_ne());
            assert_eq!(ordering.is_gt(), standard.is_gt());
            assert_eq!(ordering.is_ge(), standard.is_ge());
        }
    }

    #[rstest]
    fn test_then_with_is_lazy_when_decided() {
        let result = Ordering::Less.then_with(|| panic!("must not be called"));
        assert_eq!(result, Ordering::Less);
    }
}
