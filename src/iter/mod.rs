//! The lazy iteration protocol.
//!
//! This module provides:
//!
//! - [`Iterum`]: the single-ended protocol, one required method
//!   (`next`) and a provided surface of terminal operations and adapters
//! - [`Diterum`]: the double-ended, exact-size extension
//! - Sources: [`iterum`], [`diterum`], [`from_fn`], and the [`IntoIterum`]
//!   conversion
//! - [`StdIter`]: a bridge back into [`std::iter::Iterator`]
//! - One adapter type per transformation ([`Map`], [`Filter`], [`Scan`], ...)
//!
//! Adapters wrap the stage before them and do nothing until a terminal
//! operation (or a manual `next`) pulls values through the chain.
//!
//! # Examples
//!
//! ```rust
//! use iterum::prelude::*;
//!
//! let mut values = iterum([1, 2, 3, 4, 5])
//!     .skip_while(|x| *x < 2)
//!     .step_by(2)
//!     .peekable();
//!
//! assert_eq!(values.peek(), Maybe::Some(&2));
//! assert_eq!(values.next(), Maybe::Some(2));
//! assert_eq!(values.next(), Maybe::Some(4));
//! assert_eq!(values.next(), Maybe::Nil);
//!
//! // Double-ended sources can be consumed from both ends
//! let mut letters = diterum(vec!['a', 'b', 'c']);
//! assert_eq!(letters.len(), 3);
//! assert_eq!(letters.next_back(), Maybe::Some('c'));
//! assert_eq!(letters.rev().collect::<String>(), "ba");
//! ```

mod adapters;
mod diterum;
mod error;
#[allow(clippy::module_inception)]
mod iterum;
mod source;

pub use adapters::{
    Chain, Cycle, Enumerate, Filter, FilterMap, FlatMap, Flatten, Fuse, Inspect, Map, MapWhile,
    Peekable, Rev, Scan, Skip, SkipWhile, StepBy, Take, TakeWhile, Zip,
};
pub use diterum::Diterum;
pub use error::{InvalidStepError, PeekPastEndError};
pub use iterum::Iterum;
pub use source::{FromFn, IntoIterum, Iter, StdIter, diterum, from_fn, iterum};
