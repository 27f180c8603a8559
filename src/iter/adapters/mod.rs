//! Adapter types returned by the provided methods of
//! [`Iterum`](super::Iterum) and [`Diterum`](super::Diterum).
//!
//! Each adapter owns the stage before it and pulls from it only when its own
//! `next` is called.

mod chain;
mod cycle;
mod enumerate;
mod filter;
mod filter_map;
mod flatten;
mod fuse;
mod inspect;
mod map;
mod map_while;
mod peekable;
mod rev;
mod scan;
mod skip;
mod skip_while;
mod step_by;
mod take;
mod take_while;
mod zip;

pub use chain::Chain;
pub use cycle::Cycle;
pub use enumerate::Enumerate;
pub use filter::Filter;
pub use filter_map::FilterMap;
pub use flatten::{FlatMap, Flatten};
pub use fuse::Fuse;
pub use inspect::Inspect;
pub use map::Map;
pub use map_while::MapWhile;
pub use peekable::Peekable;
pub use rev::Rev;
pub use scan::Scan;
pub use skip::Skip;
pub use skip_while::SkipWhile;
pub use step_by::StepBy;
pub use take::Take;
pub use take_while::TakeWhile;
pub use zip::Zip;
