//! Optional `tracing` instrumentation.
//!
//! With the `tracing` feature enabled these macros forward to the matching
//! `tracing` macros. Without it they expand to nothing, so the arguments are
//! never evaluated.

#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! trace_debug {
    ($($argument:tt)*) => {
        ::tracing::debug!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! trace_debug {
    ($($argument:tt)*) => {};
}

#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ::tracing::trace!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {};
}
