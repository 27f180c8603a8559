//! The paired report of a slot update.

/// The result of a value-level slot update on [`Maybe`](super::Maybe).
///
/// `inserted` is the state the slot holds after the update and `returned` is
/// the value handed back to the caller. A `Swap` destructures into a tuple.
///
/// # Examples
///
/// ```rust
/// use iterum::option::{Maybe, Swap};
///
/// let swap = Maybe::Some(2).swap_replace(5);
/// assert_eq!(swap, Swap::new(Maybe::Some(5), Maybe::Some(2)));
///
/// let (slot, old) = swap.into();
/// assert_eq!(slot, Maybe::Some(5));
/// assert_eq!(old, Maybe::Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swap<I, R> {
    /// Value inserted into the slot.
    pub inserted: I,
    /// Value returned from the slot.
    pub returned: R,
}

impl<I, R> Swap<I, R> {
    /// Creates a new pair.
    #[inline]
    pub const fn new(inserted: I, returned: R) -> Self {
        Self { inserted, returned }
    }

    /// Splits the pair into a tuple.
    #[inline]
    pub fn into_parts(self) -> (I, R) {
        (self.inserted, self.returned)
    }
}

impl<I, R> From<Swap<I, R>> for (I, R) {
    #[inline]
    fn from(swap: Swap<I, R>) -> Self {
        swap.into_parts()
    }
}

impl<I, R> From<(I, R)> for Swap<I, R> {
    #[inline]
    fn from((inserted, returned): (I, R)) -> Self {
        Self::new(inserted, returned)
    }
}
