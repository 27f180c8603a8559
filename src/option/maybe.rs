//! Maybe type - an optional value that is either `Some` or `Nil`.
//!
//! `Maybe<T>` is the value every operation in this library uses to speak
//! about presence and absence. `Nil` is not an error: combinators propagate
//! it without failing. Only [`Maybe::unwrap`] and [`Maybe::expect`] panic,
//! and only when the caller asserted, incorrectly, that a value is present.
//!
//! # Examples
//!
//! ```rust
//! use iterum::option::Maybe;
//!
//! let some = Maybe::Some(3);
//! let nil: Maybe<i32> = Maybe::Nil;
//!
//! assert_eq!(some.map(|x| x * 2), Maybe::Some(6));
//! assert_eq!(nil.map(|x| x * 2), Maybe::Nil);
//!
//! // Pattern matching
//! match some {
//!     Maybe::Some(n) => println!("got {n}"),
//!     Maybe::Nil => println!("got nothing"),
//! }
//! ```

use std::borrow::Cow;

use super::error::{ExpectNilError, UnwrapNilError};
use super::swap::Swap;

/// An optional value: either `Some(T)` or `Nil`.
///
/// `Nil` carries no payload and is compared by variant only; it orders before
/// every `Some`.
///
/// # Examples
///
/// ```rust
/// use iterum::option::Maybe;
///
/// let value = Maybe::Some(10).filter(|x| *x > 5).unwrap_or(0);
/// assert_eq!(value, 10);
///
/// let value = Maybe::Some(1).filter(|x| *x > 5).unwrap_or(0);
/// assert_eq!(value, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    Nil,
    /// Exactly one value.
    Some(T),
}

static_assertions::assert_eq_size!(Maybe<&u8>, &u8);
static_assertions::assert_eq_size!(Maybe<Box<u64>>, Box<u64>);
static_assertions::assert_impl_all!(Maybe<i32>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert!(Maybe::Some(2).is_some());
    /// assert!(!Maybe::<i32>::Nil.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert!(Maybe::<i32>::Nil.is_nil());
    /// assert!(!Maybe::Some(2).is_nil());
    /// ```
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` if this is `Some` and the value satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert!(Maybe::Some(2).is_some_and(|x| x > 1));
    /// assert!(!Maybe::Some(0).is_some_and(|x| x > 1));
    /// assert!(!Maybe::<i32>::Nil.is_some_and(|x| x > 1));
    /// ```
    #[inline]
    pub fn is_some_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::Nil => false,
        }
    }

    // =========================================================================
    // Reference Conversion
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::Nil => Maybe::Nil,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// let mut slot = Maybe::Some(2);
    /// if let Maybe::Some(value) = slot.as_mut() {
    ///     *value += 40;
    /// }
    /// assert_eq!(slot, Maybe::Some(42));
    /// ```
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::Nil => Maybe::Nil,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with the [`UnwrapNilError`] message if this is `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert_eq!(Maybe::Some("air").unwrap(), "air");
    /// ```
    ///
    /// ```should_panic
    /// use iterum::option::Maybe;
    ///
    /// let nothing: Maybe<&str> = Maybe::Nil;
    /// nothing.unwrap(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nil => unwrap_failed(),
        }
    }

    /// Returns the contained value, panicking with `message` on `Nil`.
    ///
    /// # Panics
    ///
    /// Panics with an [`ExpectNilError`] carrying `message` if this is `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert_eq!(Maybe::Some("value").expect("fruits are healthy"), "value");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nil => expect_failed(message),
        }
    }

    /// Returns the contained value, or [`UnwrapNilError`] on `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::{Maybe, UnwrapNilError};
    ///
    /// assert_eq!(Maybe::Some(1).try_unwrap(), Ok(1));
    /// assert_eq!(Maybe::<i32>::Nil.try_unwrap(), Err(UnwrapNilError));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `UnwrapNilError` when this is `Nil`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapNilError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::Nil => Err(UnwrapNilError),
        }
    }

    /// Returns the contained value, or an [`ExpectNilError`] carrying
    /// `message` on `Nil`.
    ///
    /// # Errors
    ///
    /// Returns `ExpectNilError` when this is `Nil`.
    #[inline]
    pub fn try_expect(self, message: impl Into<Cow<'static, str>>) -> Result<T, ExpectNilError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::Nil => Err(ExpectNilError::new(message)),
        }
    }

    /// Returns the contained value or `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert_eq!(Maybe::Some("car").unwrap_or("bike"), "car");
    /// assert_eq!(Maybe::Nil.unwrap_or("bike"), "bike");
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nil => default,
        }
    }

    /// Returns the contained value or computes one from `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// let k = 10;
    /// assert_eq!(Maybe::Some(4).unwrap_or_else(|| 2 * k), 4);
    /// assert_eq!(Maybe::Nil.unwrap_or_else(|| 2 * k), 20);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::Nil => function(),
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Some(value) => value,
            Self::Nil => T::default(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// let text = Maybe::Some("Hello, World!");
    /// assert_eq!(text.map(|s| s.len()), Maybe::Some(13));
    /// assert_eq!(Maybe::<&str>::Nil.map(|s| s.len()), Maybe::Nil);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::Nil => Maybe::Nil,
        }
    }

    /// Applies `function` to the contained value, or returns `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert_eq!(Maybe::Some("foo").map_or(42, |s| s.len()), 3);
    /// assert_eq!(Maybe::<&str>::Nil.map_or(42, |s| s.len()), 42);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nil => default,
        }
    }

    /// Applies `function` to the contained value, or computes a default.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nil => default(),
        }
    }

    /// Converts into a `Result`, mapping `Nil` to `Err(error)`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` when this is `Nil`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Ok(value),
            Self::Nil => Err(error),
        }
    }

    /// Converts into a `Result`, computing the error for `Nil`.
    ///
    /// # Errors
    ///
    /// Returns `Err(function())` when this is `Nil`.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Ok(value),
            Self::Nil => Err(function()),
        }
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `Nil` if this is `Nil`, otherwise returns `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert_eq!(Maybe::Some(2).and(Maybe::Some("foo")), Maybe::Some("foo"));
    /// assert_eq!(Maybe::<i32>::Nil.and(Maybe::Some("foo")), Maybe::Nil);
    /// assert_eq!(Maybe::Some(2).and(Maybe::<&str>::Nil), Maybe::Nil);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(_) => other,
            Self::Nil => Maybe::Nil,
        }
    }

    /// Chains a computation that may itself produce `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// fn checked_square(x: u32) -> Maybe<u32> {
    ///     x.checked_mul(x).map_or(Maybe::Nil, Maybe::Some)
    /// }
    ///
    /// assert_eq!(Maybe::Some(2).and_then(checked_square), Maybe::Some(4));
    /// assert_eq!(Maybe::Some(1_000_000).and_then(checked_square), Maybe::Nil);
    /// assert_eq!(Maybe::Nil.and_then(checked_square), Maybe::Nil);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nil => Maybe::Nil,
        }
    }

    /// Returns this value if it is `Some`, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert_eq!(Maybe::Some(2).or(Maybe::Some(100)), Maybe::Some(2));
    /// assert_eq!(Maybe::Nil.or(Maybe::Some(100)), Maybe::Some(100));
    /// ```
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::Nil => other,
        }
    }

    /// Returns this value if it is `Some`, otherwise calls `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// let nobody = || Maybe::<&str>::Nil;
    /// let vikings = || Maybe::Some("vikings");
    ///
    /// assert_eq!(Maybe::Some("barbarians").or_else(vikings), Maybe::Some("barbarians"));
    /// assert_eq!(Maybe::Nil.or_else(vikings), Maybe::Some("vikings"));
    /// assert_eq!(Maybe::Nil.or_else(nobody), Maybe::Nil);
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::Nil => function(),
        }
    }

    /// Returns `Some` if exactly one of `self` and `other` is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert_eq!(Maybe::Some(2).xor(Maybe::Nil), Maybe::Some(2));
    /// assert_eq!(Maybe::Nil.xor(Maybe::Some(2)), Maybe::Some(2));
    /// assert_eq!(Maybe::Some(2).xor(Maybe::Some(2)), Maybe::Nil);
    /// assert_eq!(Maybe::<i32>::Nil.xor(Maybe::Nil), Maybe::Nil);
    /// ```
    #[inline]
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::Nil) | (Self::Nil, Self::Some(value)) => Self::Some(value),
            _ => Self::Nil,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// let is_even = |n: &i32| n % 2 == 0;
    ///
    /// assert_eq!(Maybe::Nil.filter(is_even), Maybe::Nil);
    /// assert_eq!(Maybe::Some(3).filter(is_even), Maybe::Nil);
    /// assert_eq!(Maybe::Some(4).filter(is_even), Maybe::Some(4));
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::Nil,
        }
    }

    /// Pairs this value with `other` when both are `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert_eq!(Maybe::Some(1).zip(Maybe::Some("hi")), Maybe::Some((1, "hi")));
    /// assert_eq!(Maybe::Some(1).zip(Maybe::<u8>::Nil), Maybe::Nil);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Some(left), Maybe::Some(right)) => Maybe::Some((left, right)),
            _ => Maybe::Nil,
        }
    }

    // =========================================================================
    // Slot Operations (in place)
    // =========================================================================

    /// Stores `value` in the slot, dropping any previous value, and returns a
    /// mutable reference to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// let mut slot = Maybe::Nil;
    /// let value = slot.insert(1);
    /// assert_eq!(*value, 1);
    /// *value = 3;
    /// assert_eq!(slot, Maybe::Some(3));
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Self::Some(value);
        match self {
            Self::Some(stored) => stored,
            Self::Nil => unreachable!("slot was just filled"),
        }
    }

    /// Stores `value` only when the slot is `Nil`, then returns a mutable
    /// reference to the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// let mut slot = Maybe::Nil;
    /// assert_eq!(*slot.get_or_insert(5), 5);
    ///
    /// let mut slot = Maybe::Some(3);
    /// assert_eq!(*slot.get_or_insert(5), 3);
    /// ```
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Stores the result of `function` only when the slot is `Nil`, then
    /// returns a mutable reference to the stored value.
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, function: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.is_nil() {
            *self = Self::Some(function());
        }
        match self {
            Self::Some(stored) => stored,
            Self::Nil => unreachable!("slot was just filled"),
        }
    }

    /// Stores `value` in the slot and returns the previous state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// let mut slot = Maybe::Some(2);
    /// assert_eq!(slot.replace(5), Maybe::Some(2));
    /// assert_eq!(slot, Maybe::Some(5));
    /// ```
    #[inline]
    pub const fn replace(&mut self, value: T) -> Self {
        std::mem::replace(self, Self::Some(value))
    }

    /// Resets the slot to `Nil` and returns the previous state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// let mut slot = Maybe::Some(2);
    /// assert_eq!(slot.take(), Maybe::Some(2));
    /// assert_eq!(slot, Maybe::Nil);
    /// assert_eq!(slot.take(), Maybe::Nil);
    /// ```
    #[inline]
    pub const fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Nil)
    }

    // =========================================================================
    // Slot Operations (paired report)
    // =========================================================================

    /// Value-level [`insert`](Self::insert): the slot becomes `Some(value)`
    /// and `value` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// let (slot, value) = Maybe::Some(10).swap_insert(5).into();
    /// assert_eq!(slot, Maybe::Some(5));
    /// assert_eq!(value, 5);
    /// ```
    #[inline]
    pub fn swap_insert(self, value: T) -> Swap<Self, T>
    where
        T: Clone,
    {
        Swap::new(Self::Some(value.clone()), value)
    }

    /// Value-level [`get_or_insert`](Self::get_or_insert): the slot keeps its
    /// value if it has one, and the stored value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// let swap = Maybe::Some(10).swap_get_or_insert(5);
    /// assert_eq!((swap.inserted, swap.returned), (Maybe::Some(10), 10));
    ///
    /// let swap = Maybe::Nil.swap_get_or_insert(5);
    /// assert_eq!((swap.inserted, swap.returned), (Maybe::Some(5), 5));
    /// ```
    #[inline]
    pub fn swap_get_or_insert(self, value: T) -> Swap<Self, T>
    where
        T: Clone,
    {
        self.swap_get_or_insert_with(|| value)
    }

    /// Value-level [`get_or_insert_with`](Self::get_or_insert_with).
    #[inline]
    pub fn swap_get_or_insert_with<F>(self, function: F) -> Swap<Self, T>
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        let stored = self.unwrap_or_else(function);
        Swap::new(Self::Some(stored.clone()), stored)
    }

    /// Value-level [`replace`](Self::replace): the slot becomes
    /// `Some(value)` and the old state is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// let (new, old) = Maybe::Nil.swap_replace(5).into();
    /// assert_eq!(new, Maybe::Some(5));
    /// assert_eq!(old, Maybe::Nil);
    /// ```
    #[inline]
    pub const fn swap_replace(self, value: T) -> Swap<Self, Self> {
        Swap::new(Self::Some(value), self)
    }

    /// Value-level [`take`](Self::take): the slot becomes `Nil` and the old
    /// state is returned.
    #[inline]
    pub const fn swap_take(self) -> Swap<Self, Self> {
        Swap::new(Self::Nil, self)
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterum over a reference to the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let some = Maybe::Some(4);
    /// let mut values = some.iter();
    /// assert_eq!(values.next(), Maybe::Some(&4));
    /// assert_eq!(values.next(), Maybe::Nil);
    /// ```
    #[cfg(feature = "iter")]
    #[inline]
    #[allow(clippy::iter_not_returning_iterator)]
    pub const fn iter(&self) -> super::MaybeIter<&T> {
        super::MaybeIter::new(self.as_ref())
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert_eq!(Maybe::Some(Maybe::Some(6)).flatten(), Maybe::Some(6));
    /// assert_eq!(Maybe::Some(Maybe::<i32>::Nil).flatten(), Maybe::Nil);
    /// assert_eq!(Maybe::<Maybe<i32>>::Nil.flatten(), Maybe::Nil);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Some(inner) => inner,
            Self::Nil => Maybe::Nil,
        }
    }
}

impl<A, B> Maybe<(A, B)> {
    /// Splits a `Maybe` of a pair into a pair of `Maybe`s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert_eq!(Maybe::Some((1, "hi")).unzip(), (Maybe::Some(1), Maybe::Some("hi")));
    /// assert_eq!(Maybe::<(i32, &str)>::Nil.unzip(), (Maybe::Nil, Maybe::Nil));
    /// ```
    #[inline]
    pub fn unzip(self) -> (Maybe<A>, Maybe<B>) {
        match self {
            Self::Some((left, right)) => (Maybe::Some(left), Maybe::Some(right)),
            Self::Nil => (Maybe::Nil, Maybe::Nil),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_failed() -> ! {
    panic!("{}", UnwrapNilError)
}

#[cold]
#[inline(never)]
#[track_caller]
fn expect_failed(message: &str) -> ! {
    panic!("{}", ExpectNilError::new(message.to_owned()))
}

// =============================================================================
// Default and From Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    /// Returns `Nil`.
    #[inline]
    fn default() -> Self {
        Self::Nil
    }
}

impl<T> From<T> for Maybe<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts a standard `Option`: `Some(v)` becomes `Some(v)`, `None`
    /// becomes `Nil`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nil, Self::Some)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::Nil => None,
        }
    }
}

impl<T> From<&Maybe<T>> for bool {
    /// Boolean coercion: `Some` is truthy, `Nil` is falsy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::option::Maybe;
    ///
    /// assert!(bool::from(&Maybe::Some(0)));
    /// assert!(!bool::from(&Maybe::<i32>::Nil));
    /// ```
    #[inline]
    fn from(maybe: &Maybe<T>) -> Self {
        maybe.is_some()
    }
}
