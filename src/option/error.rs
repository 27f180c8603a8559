//! Errors raised when a `Nil` is asserted to hold a value.

use std::borrow::Cow;

/// Raised by [`Maybe::unwrap`](super::Maybe::unwrap) on `Nil`.
///
/// `unwrap` panics with this error's `Display` text;
/// [`Maybe::try_unwrap`](super::Maybe::try_unwrap) returns it instead.
///
/// # Examples
///
/// ```rust
/// use iterum::option::{Maybe, UnwrapNilError};
///
/// let nothing: Maybe<i32> = Maybe::Nil;
/// assert_eq!(nothing.try_unwrap(), Err(UnwrapNilError));
/// assert_eq!(UnwrapNilError.to_string(), "Attempted to unwrap nil");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnwrapNilError;

impl std::fmt::Display for UnwrapNilError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Attempted to unwrap nil")
    }
}

impl std::error::Error for UnwrapNilError {}

/// Raised by [`Maybe::expect`](super::Maybe::expect) on `Nil`.
///
/// Carries the caller's message. The default message is
/// `"Expected some but option is nil"`.
///
/// # Examples
///
/// ```rust
/// use iterum::option::{ExpectNilError, Maybe};
///
/// let nothing: Maybe<i32> = Maybe::Nil;
/// let error = nothing.try_expect("config value").unwrap_err();
/// assert_eq!(error.message(), "config value");
/// assert_eq!(
///     ExpectNilError::default().to_string(),
///     "Expected some but option is nil"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectNilError {
    message: Cow<'static, str>,
}

impl ExpectNilError {
    /// Creates an error carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message given to `expect`.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for ExpectNilError {
    fn default() -> Self {
        Self::new("Expected some but option is nil")
    }
}

impl std::fmt::Display for ExpectNilError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for ExpectNilError {}
