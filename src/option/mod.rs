//! Optional values as an explicit sum type.
//!
//! This module provides:
//!
//! - [`Maybe`]: either `Some(value)` or `Nil`
//! - [`Swap`]: the `(inserted, returned)` pair reported by value-level slot
//!   updates such as [`Maybe::swap_replace`]
//! - [`UnwrapNilError`] and [`ExpectNilError`]: the programmer errors raised
//!   when a `Nil` is asserted to hold a value
//!
//! `Nil` is ordinary data. Every combinator on [`Maybe`] is total, the only
//! operations that can fail are [`Maybe::unwrap`] and [`Maybe::expect`].
//!
//! # Examples
//!
//! ```rust
//! use iterum::option::Maybe;
//!
//! fn checked_div(numerator: i32, denominator: i32) -> Maybe<i32> {
//!     if denominator == 0 {
//!         Maybe::Nil
//!     } else {
//!         Maybe::Some(numerator / denominator)
//!     }
//! }
//!
//! let result = checked_div(10, 2)
//!     .and_then(|x| checked_div(x, 0))
//!     .or_else(|| Maybe::Some(-1));
//! assert_eq!(result, Maybe::Some(-1));
//! ```

mod error;
#[cfg(feature = "iter")]
mod iter;
mod maybe;
mod swap;

pub use error::{ExpectNilError, UnwrapNilError};
#[cfg(feature = "iter")]
pub use iter::MaybeIter;
pub use maybe::Maybe;
pub use swap::Swap;
