//! # iterum
//!
//! A lazy, pull-based iteration protocol built on an explicit optional-value
//! algebra.
//!
//! ## Overview
//!
//! Instead of signalling "end of sequence" or "no value" implicitly, every
//! operation in this library speaks [`Maybe`]: either `Some(value)` or `Nil`.
//! On top of that the library provides:
//!
//! - **Option algebra**: [`Maybe`] and its combinators, plus the paired
//!   [`Swap`] report for slot-style updates
//! - **Ordering**: a three-valued [`Ordering`] with [`compare`] helpers
//! - **Iteration protocol**: the [`Iterum`](iter::Iterum) trait, one required
//!   method and a large provided surface
//! - **Adapters**: map, filter, scan, zip, peekable, step-by, ... each a small
//!   state machine wrapping the previous stage
//! - **Double-ended iteration**: [`Diterum`](iter::Diterum) with `next_back`
//!   and an exact `len`
//! - **Stepped ranges**: bounded [`Seq`](seq::Seq) and unbounded
//!   [`InfSeq`](seq::InfSeq) integer generators
//!
//! ## Feature Flags
//!
//! - `iter`: Iteration protocol and adapters
//! - `seq`: Stepped-range generators (implies `iter`)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`, `Ordering` and `Swap`
//! - `tracing`: Emit `tracing` events for rejected constructions and caught
//!   errors
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "seq")]
//! # {
//! use iterum::prelude::*;
//!
//! let squares: Vec<i32> = iterum(0..5)
//!     .map(|x| x * x + 1)
//!     .filter(|x| x % 2 == 1)
//!     .collect();
//! assert_eq!(squares, vec![1, 5, 17]);
//!
//! let mut evens = seq(0, 10, 2);
//! assert_eq!(evens.len(), 5);
//! assert_eq!(evens.next_back(), Maybe::Some(8));
//! assert_eq!(evens.next(), Maybe::Some(0));
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

#[macro_use]
mod trace;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and constructors.
///
/// # Usage
///
/// ```rust
/// use iterum::prelude::*;
/// ```
pub mod prelude {
    pub use crate::option::*;
    pub use crate::ordering::*;

    #[cfg(feature = "iter")]
    pub use crate::iter::*;

    #[cfg(feature = "seq")]
    pub use crate::seq::*;
}

pub mod option;
pub mod ordering;

#[cfg(feature = "iter")]
pub mod iter;

#[cfg(feature = "seq")]
pub mod seq;

pub use option::{ExpectNilError, Maybe, Swap, UnwrapNilError};
pub use ordering::{Ordering, compare, partial_compare};

#[cfg(feature = "iter")]
pub use iter::{Diterum, IntoIterum, Iterum, diterum, iterum};

#[cfg(feature = "seq")]
pub use seq::{InfSeq, Seq, seq, seq_from, seq_to};
