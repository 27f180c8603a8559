//! The single-ended iteration protocol.

use std::ops::{Add, Mul};

use super::adapters::{
    Chain, Cycle, Enumerate, Filter, FilterMap, FlatMap, Flatten, Fuse, Inspect, Map, MapWhile,
    Peekable, Scan, Skip, SkipWhile, StepBy, Take, TakeWhile, Zip,
};
use super::{IntoIterum, InvalidStepError, StdIter};
use crate::option::Maybe;
use crate::ordering::{Ordering, compare, partial_compare};

/// A lazy, pull-based producer of values.
///
/// Implementors provide [`next`](Iterum::next), which returns
/// `Maybe::Some(value)` while values remain and `Maybe::Nil` once the
/// producer is drained. Every other operation is provided in terms of it.
///
/// Calling `next` again after `Nil` is allowed. Whether more values follow
/// depends on the implementor; wrap in [`fuse`](Iterum::fuse) to pin the
/// result to `Nil`.
///
/// # Laws
///
/// Every adapter preserves the pull discipline: it calls its upstream's
/// `next` only as often as it needs to produce its own next value, so side
/// effects upstream happen in order and no earlier than required.
///
/// # Examples
///
/// ```rust
/// use iterum::prelude::*;
///
/// struct Countdown(u32);
///
/// impl Iterum for Countdown {
///     type Item = u32;
///
///     fn next(&mut self) -> Maybe<u32> {
///         if self.0 == 0 {
///             Maybe::Nil
///         } else {
///             self.0 -= 1;
///             Maybe::Some(self.0 + 1)
///         }
///     }
/// }
///
/// let launched: Vec<u32> = Countdown(3).collect();
/// assert_eq!(launched, vec![3, 2, 1]);
/// assert_eq!(Countdown(4).filter(|x| x % 2 == 0).sum(), Maybe::Some(6));
/// ```
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub trait Iterum {
    /// The type of value produced.
    type Item;

    /// Advances and returns the next value, or `Nil` when drained.
    fn next(&mut self) -> Maybe<Self::Item>;

    /// Returns bounds on the number of remaining values.
    ///
    /// The default `(0, None)` is always correct.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    // =========================================================================
    // Terminal operations
    // =========================================================================

    /// Tests whether every value satisfies `predicate`.
    ///
    /// Stops at the first failure, leaving the rest of the values unconsumed.
    /// Returns `true` for an empty iterum.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let mut values = iterum([1, 2, 3, 4]);
    /// assert!(!values.all(|x| x < 2));
    /// assert_eq!(values.next(), Maybe::Some(3));
    /// ```
    #[inline]
    fn all<F>(&mut self, mut predicate: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        while let Maybe::Some(item) = self.next() {
            if !predicate(item) {
                return false;
            }
        }
        true
    }

    /// Tests whether any value satisfies `predicate`.
    ///
    /// Stops at the first success. Returns `false` for an empty iterum.
    #[inline]
    fn any<F>(&mut self, mut predicate: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        while let Maybe::Some(item) = self.next() {
            if predicate(item) {
                return true;
            }
        }
        false
    }

    /// Lexicographically compares with another sequence.
    ///
    /// Both sides are advanced in lockstep. The first unequal pair decides;
    /// otherwise the shorter sequence is `Less`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// assert_eq!(iterum([1, 2]).cmp([1, 2, 3]), Ordering::Less);
    /// assert_eq!(iterum([1, 3]).cmp([1, 2, 3]), Ordering::Greater);
    /// assert_eq!(iterum([1, 2]).cmp([1, 2]), Ordering::Equal);
    /// ```
    fn cmp<U>(self, other: U) -> Ordering
    where
        Self: Sized,
        U: IntoIterum<Item = Self::Item>,
        Self::Item: Ord,
    {
        self.cmp_by(other, |left, right| compare(&left, &right))
    }

    /// Lexicographically compares with another sequence using `comparator`.
    fn cmp_by<U, F>(mut self, other: U, mut comparator: F) -> Ordering
    where
        Self: Sized,
        U: IntoIterum,
        F: FnMut(Self::Item, U::Item) -> Ordering,
    {
        let mut other = other.into_iterum();
        loop {
            match (self.next(), other.next()) {
                (Maybe::Some(left), Maybe::Some(right)) => match comparator(left, right) {
                    Ordering::Equal => {}
                    decided => return decided,
                },
                (Maybe::Some(_), Maybe::Nil) => return Ordering::Greater,
                (Maybe::Nil, Maybe::Some(_)) => return Ordering::Less,
                (Maybe::Nil, Maybe::Nil) => return Ordering::Equal,
            }
        }
    }

    /// Lexicographically compares with another sequence of partially ordered
    /// values, producing `Nil` at the first incomparable pair.
    fn partial_cmp<U>(self, other: U) -> Maybe<Ordering>
    where
        Self: Sized,
        U: IntoIterum,
        Self::Item: PartialOrd<U::Item>,
    {
        self.partial_cmp_by(other, |left, right| partial_compare(&left, &right))
    }

    /// Lexicographically compares with another sequence using a partial
    /// `comparator`.
    fn partial_cmp_by<U, F>(mut self, other: U, mut comparator: F) -> Maybe<Ordering>
    where
        Self: Sized,
        U: IntoIterum,
        F: FnMut(Self::Item, U::Item) -> Maybe<Ordering>,
    {
        let mut other = other.into_iterum();
        loop {
            match (self.next(), other.next()) {
                (Maybe::Some(left), Maybe::Some(right)) => match comparator(left, right) {
                    Maybe::Some(Ordering::Equal) => {}
                    decided => return decided,
                },
                (Maybe::Some(_), Maybe::Nil) => return Maybe::Some(Ordering::Greater),
                (Maybe::Nil, Maybe::Some(_)) => return Maybe::Some(Ordering::Less),
                (Maybe::Nil, Maybe::Nil) => return Maybe::Some(Ordering::Equal),
            }
        }
    }

    /// Tests whether both sequences hold equal values in the same order.
    fn eq<U>(self, other: U) -> bool
    where
        Self: Sized,
        U: IntoIterum,
        Self::Item: PartialEq<U::Item>,
    {
        self.eq_by(other, |left, right| left == right)
    }

    /// Tests sequence equality using `predicate` to compare elements.
    fn eq_by<U, F>(mut self, other: U, mut predicate: F) -> bool
    where
        Self: Sized,
        U: IntoIterum,
        F: FnMut(Self::Item, U::Item) -> bool,
    {
        let mut other = other.into_iterum();
        loop {
            match (self.next(), other.next()) {
                (Maybe::Some(left), Maybe::Some(right)) => {
                    if !predicate(left, right) {
                        return false;
                    }
                }
                (Maybe::Nil, Maybe::Nil) => return true,
                _ => return false,
            }
        }
    }

    /// Tests whether the sequences differ.
    fn ne<U>(self, other: U) -> bool
    where
        Self: Sized,
        U: IntoIterum,
        Self::Item: PartialEq<U::Item>,
    {
        !self.eq(other)
    }

    /// Tests whether this sequence is lexicographically less than `other`.
    fn lt<U>(self, other: U) -> bool
    where
        Self: Sized,
        U: IntoIterum,
        Self::Item: PartialOrd<U::Item>,
    {
        self.partial_cmp(other) == Maybe::Some(Ordering::Less)
    }

    /// Tests whether this sequence is lexicographically less than or equal
    /// to `other`.
    fn le<U>(self, other: U) -> bool
    where
        Self: Sized,
        U: IntoIterum,
        Self::Item: PartialOrd<U::Item>,
    {
        matches!(
            self.partial_cmp(other),
            Maybe::Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// Tests whether this sequence is lexicographically greater than `other`.
    fn gt<U>(self, other: U) -> bool
    where
        Self: Sized,
        U: IntoIterum,
        Self::Item: PartialOrd<U::Item>,
    {
        self.partial_cmp(other) == Maybe::Some(Ordering::Greater)
    }

    /// Tests whether this sequence is lexicographically greater than or
    /// equal to `other`.
    fn ge<U>(self, other: U) -> bool
    where
        Self: Sized,
        U: IntoIterum,
        Self::Item: PartialOrd<U::Item>,
    {
        matches!(
            self.partial_cmp(other),
            Maybe::Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// Gathers every value into a collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    /// use std::collections::HashSet;
    ///
    /// let unique: HashSet<i32> = iterum([1, 2, 2, 3]).collect();
    /// assert_eq!(unique.len(), 3);
    /// ```
    #[inline]
    fn collect<B>(self) -> B
    where
        Self: Sized,
        B: FromIterator<Self::Item>,
    {
        self.std().collect()
    }

    /// Consumes the iterum, counting its values.
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |count, _| count + 1)
    }

    /// Returns the first value satisfying `predicate`.
    ///
    /// Values after the match stay unconsumed.
    #[inline]
    fn find<P>(&mut self, mut predicate: P) -> Maybe<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Maybe::Some(item) = self.next() {
            if predicate(&item) {
                return Maybe::Some(item);
            }
        }
        Maybe::Nil
    }

    /// Returns the first `Some` produced by `function`.
    #[inline]
    fn find_map<B, F>(&mut self, mut function: F) -> Maybe<B>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Maybe<B>,
    {
        while let Maybe::Some(item) = self.next() {
            if let found @ Maybe::Some(_) = function(item) {
                return found;
            }
        }
        Maybe::Nil
    }

    /// Folds every value into an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let product = iterum(1..=4).fold(1, |accumulator, x| accumulator * x);
    /// assert_eq!(product, 24);
    /// ```
    #[inline]
    fn fold<B, F>(mut self, init: B, mut function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut accumulator = init;
        while let Maybe::Some(item) = self.next() {
            accumulator = function(accumulator, item);
        }
        accumulator
    }

    /// Calls `function` on every value.
    #[inline]
    fn for_each<F>(self, mut function: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.fold((), |(), item| function(item));
    }

    /// Consumes the iterum, returning its final value.
    #[inline]
    fn last(self) -> Maybe<Self::Item>
    where
        Self: Sized,
    {
        self.fold(Maybe::Nil, |_, item| Maybe::Some(item))
    }

    /// Returns the greatest value. Among equal maxima the last one wins.
    #[inline]
    fn max(self) -> Maybe<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.max_by(compare)
    }

    /// Returns the value that `comparator` ranks greatest. Among equal maxima
    /// the last one wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let longest = iterum(["ab", "cd", "e"])
    ///     .max_by(|left, right| compare(&left.len(), &right.len()));
    /// assert_eq!(longest, Maybe::Some("cd"));
    /// ```
    fn max_by<F>(mut self, mut comparator: F) -> Maybe<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let first = self.next();
        first.map(|first| {
            self.fold(first, |maximum, item| match comparator(&maximum, &item) {
                Ordering::Greater => maximum,
                Ordering::Less | Ordering::Equal => item,
            })
        })
    }

    /// Returns the value with the greatest key. Among equal keys the last
    /// value wins.
    fn max_by_key<K, F>(self, mut key: F) -> Maybe<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|item| (key(&item), item))
            .max_by(|(left, _), (right, _)| compare(left, right))
            .map(|(_, item)| item)
    }

    /// Returns the least value. Among equal minima the first one wins.
    #[inline]
    fn min(self) -> Maybe<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.min_by(compare)
    }

    /// Returns the value that `comparator` ranks least. Among equal minima
    /// the first one wins.
    fn min_by<F>(mut self, mut comparator: F) -> Maybe<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let first = self.next();
        first.map(|first| {
            self.fold(first, |minimum, item| match comparator(&minimum, &item) {
                Ordering::Greater => item,
                Ordering::Less | Ordering::Equal => minimum,
            })
        })
    }

    /// Returns the value with the least key. Among equal keys the first
    /// value wins.
    fn min_by_key<K, F>(self, mut key: F) -> Maybe<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|item| (key(&item), item))
            .min_by(|(left, _), (right, _)| compare(left, right))
            .map(|(_, item)| item)
    }

    /// Returns the `n`th value, zero-based, consuming everything up to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let mut values = iterum([10, 20, 30]);
    /// assert_eq!(values.nth(1), Maybe::Some(20));
    /// assert_eq!(values.nth(1), Maybe::Nil);
    /// ```
    #[inline]
    fn nth(&mut self, n: usize) -> Maybe<Self::Item>
    where
        Self: Sized,
    {
        let mut remaining = n;
        while let Maybe::Some(item) = self.next() {
            if remaining == 0 {
                return Maybe::Some(item);
            }
            remaining -= 1;
        }
        Maybe::Nil
    }

    /// Splits the values by `predicate` into `(matched, unmatched)`.
    fn partition<B, F>(self, mut predicate: F) -> (B, B)
    where
        Self: Sized,
        B: Default + Extend<Self::Item>,
        F: FnMut(&Self::Item) -> bool,
    {
        let mut matched = B::default();
        let mut unmatched = B::default();
        self.for_each(|item| {
            if predicate(&item) {
                matched.extend(std::iter::once(item));
            } else {
                unmatched.extend(std::iter::once(item));
            }
        });
        (matched, unmatched)
    }

    /// Returns the zero-based index of the first value satisfying
    /// `predicate`.
    #[inline]
    fn position<P>(&mut self, mut predicate: P) -> Maybe<usize>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        let mut index = 0;
        while let Maybe::Some(item) = self.next() {
            if predicate(item) {
                return Maybe::Some(index);
            }
            index += 1;
        }
        Maybe::Nil
    }

    /// Multiplies every value together, or `Nil` if there are none.
    #[inline]
    fn product(self) -> Maybe<Self::Item>
    where
        Self: Sized,
        Self::Item: Mul<Output = Self::Item>,
    {
        self.reduce(|accumulator, item| accumulator * item)
    }

    /// Folds using the first value as the initial accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// assert_eq!(iterum([3, 9, 4]).reduce(i32::max), Maybe::Some(9));
    /// assert_eq!(iterum(Vec::<i32>::new()).reduce(i32::max), Maybe::Nil);
    /// ```
    #[inline]
    fn reduce<F>(mut self, function: F) -> Maybe<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let first = self.next();
        first.map(|first| self.fold(first, function))
    }

    /// Adds every value together, or `Nil` if there are none.
    #[inline]
    fn sum(self) -> Maybe<Self::Item>
    where
        Self: Sized,
        Self::Item: Add<Output = Self::Item>,
    {
        self.reduce(|accumulator, item| accumulator + item)
    }

    /// Folds while `function` succeeds.
    ///
    /// The first `Err` ends the fold with `Nil`. Values after the failing one
    /// stay unconsumed, so a later call resumes from there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let mut values = iterum([1, 2, 0, 4]);
    /// let checked = |total: i32, x: i32| if x == 0 { Err("zero") } else { Ok(total + x) };
    ///
    /// assert_eq!(values.try_fold(0, checked), Maybe::Nil);
    /// assert_eq!(values.try_fold(0, checked), Maybe::Some(4));
    /// ```
    #[inline]
    fn try_fold<B, E, F>(&mut self, init: B, function: F) -> Maybe<B>
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> Result<B, E>,
    {
        self.try_fold_catching(init, function, |_| true)
            .unwrap_or(Maybe::Nil)
    }

    /// Folds while `function` succeeds, converting only the errors accepted
    /// by `catches` into `Nil`.
    ///
    /// # Errors
    ///
    /// Returns the first error that `catches` rejects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let checked = |total: i32, x: i32| match x {
    ///     0 => Err("zero"),
    ///     x if x < 0 => Err("negative"),
    ///     x => Ok(total + x),
    /// };
    ///
    /// let caught = iterum([1, 0, 3]).try_fold_catching(0, checked, |error| *error == "zero");
    /// assert_eq!(caught, Ok(Maybe::Nil));
    ///
    /// let escaped = iterum([1, -1, 3]).try_fold_catching(0, checked, |error| *error == "zero");
    /// assert_eq!(escaped, Err("negative"));
    /// ```
    fn try_fold_catching<B, E, F, C>(
        &mut self,
        init: B,
        mut function: F,
        mut catches: C,
    ) -> Result<Maybe<B>, E>
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> Result<B, E>,
        C: FnMut(&E) -> bool,
    {
        let mut accumulator = init;
        while let Maybe::Some(item) = self.next() {
            match function(accumulator, item) {
                Ok(next) => accumulator = next,
                Err(error) if catches(&error) => {
                    trace_event!("try_fold stopped on a caught error");
                    return Ok(Maybe::Nil);
                }
                Err(error) => return Err(error),
            }
        }
        Ok(Maybe::Some(accumulator))
    }

    /// Calls a fallible `function` on each value, stopping at the first
    /// error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    #[inline]
    fn try_for_each<E, F>(&mut self, mut function: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        while let Maybe::Some(item) = self.next() {
            function(item)?;
        }
        Ok(())
    }

    /// Splits an iterum of pairs into two collections.
    fn unzip<A, B, FromA, FromB>(self) -> (FromA, FromB)
    where
        Self: Sized + Iterum<Item = (A, B)>,
        FromA: Default + Extend<A>,
        FromB: Default + Extend<B>,
    {
        let mut lefts = FromA::default();
        let mut rights = FromB::default();
        self.for_each(|(left, right)| {
            lefts.extend(std::iter::once(left));
            rights.extend(std::iter::once(right));
        });
        (lefts, rights)
    }

    // =========================================================================
    // Adapters
    // =========================================================================

    /// Borrows the iterum so an adapter chain can consume part of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let mut values = iterum([1, 2, 3, 4]);
    /// let head: Vec<i32> = values.by_ref().take(2).collect();
    /// assert_eq!(head, vec![1, 2]);
    /// assert_eq!(values.next(), Maybe::Some(3));
    /// ```
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Yields every value of `self`, then every value of `other`.
    #[inline]
    fn chain<U>(self, other: U) -> Chain<Self, U::IntoIterum>
    where
        Self: Sized,
        U: IntoIterum<Item = Self::Item>,
    {
        Chain::new(self, other.into_iterum())
    }

    /// Repeats the values endlessly.
    ///
    /// An empty source stays empty.
    #[inline]
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized + Clone,
    {
        Cycle::new(self)
    }

    /// Pairs each value with its zero-based index.
    #[inline]
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Yields only the values satisfying `predicate`.
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Maps and filters in one step, keeping the `Some` results.
    #[inline]
    fn filter_map<B, F>(self, function: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Maybe<B>,
    {
        FilterMap::new(self, function)
    }

    /// Maps each value to an iterable and yields their values in turn.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let expanded: Vec<i32> = iterum([1, 2, 3]).flat_map(|x| vec![x; x as usize]).collect();
    /// assert_eq!(expanded, vec![1, 2, 2, 3, 3, 3]);
    /// ```
    #[inline]
    fn flat_map<U, F>(self, function: F) -> FlatMap<Self, F, U::IntoIterum>
    where
        Self: Sized,
        U: IntoIterum,
        F: FnMut(Self::Item) -> U,
    {
        FlatMap::new(self, function)
    }

    /// Yields the values of each nested iterable in turn.
    #[inline]
    fn flatten(self) -> Flatten<Self, <Self::Item as IntoIterum>::IntoIterum>
    where
        Self: Sized,
        Self::Item: IntoIterum,
    {
        Flatten::new(self)
    }

    /// Pins the result to `Nil` after the first `Nil`.
    #[inline]
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Calls `function` with a reference to each value as it passes.
    #[inline]
    fn inspect<F>(self, function: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        Inspect::new(self, function)
    }

    /// Transforms each value with `function`.
    #[inline]
    fn map<B, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, function)
    }

    /// Maps values until `function` first returns `Nil`.
    #[inline]
    fn map_while<B, F>(self, function: F) -> MapWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Maybe<B>,
    {
        MapWhile::new(self, function)
    }

    /// Adds one value of lookahead.
    #[inline]
    fn peekable(self) -> Peekable<Self>
    where
        Self: Sized,
    {
        Peekable::new(self)
    }

    /// Threads mutable state through the values, stopping at the first `Nil`
    /// produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let running: Vec<i32> = iterum([1, 2, 3, 4])
    ///     .scan(0, |total, x| {
    ///         *total += x;
    ///         if *total > 6 { Maybe::Nil } else { Maybe::Some(*total) }
    ///     })
    ///     .collect();
    /// assert_eq!(running, vec![1, 3, 6]);
    /// ```
    #[inline]
    fn scan<S, B, F>(self, init: S, function: F) -> Scan<Self, S, F>
    where
        Self: Sized,
        F: FnMut(&mut S, Self::Item) -> Maybe<B>,
    {
        Scan::new(self, init, function)
    }

    /// Skips the first `n` values.
    #[inline]
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Skips values while `predicate` holds, then yields everything.
    #[inline]
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Yields the first value and then every `step`th value after it.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero. Use [`try_step_by`](Iterum::try_step_by)
    /// to handle that case.
    #[inline]
    #[track_caller]
    fn step_by(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        match StepBy::new(self, step) {
            Ok(stepped) => stepped,
            Err(error) => panic!("{error}"),
        }
    }

    /// Yields the first value and then every `step`th value after it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStepError`] if `step` is zero.
    #[inline]
    fn try_step_by(self, step: usize) -> Result<StepBy<Self>, InvalidStepError>
    where
        Self: Sized,
    {
        StepBy::new(self, step)
    }

    /// Yields at most the first `n` values.
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Yields values while `predicate` holds, then stops for good.
    #[inline]
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Pairs values from `self` and `other` until either runs out.
    ///
    /// `self` is pulled first; `other` is pulled only when `self` produced a
    /// value.
    #[inline]
    fn zip<U>(self, other: U) -> Zip<Self, U::IntoIterum>
    where
        Self: Sized,
        U: IntoIterum,
    {
        Zip::new(self, other.into_iterum())
    }

    /// Bridges into a [`std::iter::Iterator`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterum::prelude::*;
    ///
    /// let mut total = 0;
    /// for x in iterum([1, 2, 3]).std() {
    ///     total += x;
    /// }
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    fn std(self) -> StdIter<Self>
    where
        Self: Sized,
    {
        StdIter::new(self)
    }
}

impl<I: Iterum + ?Sized> Iterum for &mut I {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        (**self).next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

impl<I: Iterum + ?Sized> Iterum for Box<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        (**self).next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}
