use crate::iter::{Iterum, PeekPastEndError};
use crate::option::Maybe;

/// An iterum with one value of lookahead.
///
/// The lookahead slot has three states: not yet probed, holding a value, or
/// holding `Nil` because the source was found drained. Once the source has
/// been found drained the adapter stays drained.
///
/// Created by [`Iterum::peekable`].
///
/// # Examples
///
/// ```rust
/// use iterum::prelude::*;
///
/// let mut values = iterum([1, 2, 3]).peekable();
/// assert_eq!(values.peek(), Maybe::Some(&1));
///
/// if let Maybe::Some(front) = values.peek_mut() {
///     *front *= 10;
/// }
/// assert_eq!(values.next(), Maybe::Some(10));
///
/// assert_eq!(values.next_if(|x| *x > 5), Maybe::Nil);
/// assert_eq!(values.next_if_eq(&2), Maybe::Some(2));
/// ```
#[derive(Debug, Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Peekable<I: Iterum> {
    iter: I,
    lookahead: Maybe<Maybe<I::Item>>,
}

impl<I: Iterum> Peekable<I> {
    pub(crate) const fn new(iter: I) -> Self {
        Self {
            iter,
            lookahead: Maybe::Nil,
        }
    }

    fn probe(&mut self) -> &mut Maybe<I::Item> {
        let iter = &mut self.iter;
        self.lookahead.get_or_insert_with(|| iter.next())
    }

    /// Returns a reference to the next value without advancing.
    #[inline]
    pub fn peek(&mut self) -> Maybe<&I::Item> {
        self.probe().as_ref()
    }

    /// Returns a mutable reference to the next value without advancing.
    #[inline]
    pub fn peek_mut(&mut self) -> Maybe<&mut I::Item> {
        self.probe().as_mut()
    }

    /// Replaces the next value.
    ///
    /// # Errors
    ///
    /// Returns [`PeekPastEndError`] when the source is drained, since there
    /// is no value to replace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let mut values = iterum([1]).peekable();
    /// assert_eq!(values.set_peek(7), Ok(()));
    /// assert_eq!(values.next(), Maybe::Some(7));
    /// assert!(values.set_peek(8).is_err());
    /// ```
    pub fn set_peek(&mut self, value: I::Item) -> Result<(), PeekPastEndError> {
        match self.probe() {
            Maybe::Some(slot) => {
                *slot = value;
                Ok(())
            }
            Maybe::Nil => {
                trace_debug!("set_peek on a drained peekable");
                Err(PeekPastEndError)
            }
        }
    }

    /// Consumes and returns the next value if `predicate` accepts it.
    ///
    /// A rejected value stays in the lookahead slot.
    pub fn next_if<P>(&mut self, predicate: P) -> Maybe<I::Item>
    where
        P: FnOnce(&I::Item) -> bool,
    {
        match self.next() {
            Maybe::Some(item) if predicate(&item) => Maybe::Some(item),
            other => {
                self.lookahead = Maybe::Some(other);
                Maybe::Nil
            }
        }
    }

    /// Consumes and returns the next value if it equals `expected`.
    #[inline]
    pub fn next_if_eq<T>(&mut self, expected: &T) -> Maybe<I::Item>
    where
        T: ?Sized,
        I::Item: PartialEq<T>,
    {
        self.next_if(|item| item == expected)
    }
}

impl<I: Iterum> Iterum for Peekable<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        match self.lookahead.take() {
            Maybe::Nil => self.iter.next(),
            Maybe::Some(Maybe::Nil) => {
                self.lookahead = Maybe::Some(Maybe::Nil);
                Maybe::Nil
            }
            Maybe::Some(found) => found,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let peeked = match &self.lookahead {
            Maybe::Some(Maybe::Nil) => return (0, Some(0)),
            Maybe::Some(Maybe::Some(_)) => 1,
            Maybe::Nil => 0,
        };
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_add(peeked),
            upper.and_then(|upper| upper.checked_add(peeked)),
        )
    }
}
