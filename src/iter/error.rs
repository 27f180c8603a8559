//! Error types for constructing and driving iterums.

/// Represents a rejected step size.
///
/// Stepping by zero never advances, so [`Iterum::try_step_by`] and the
/// stepped-range constructors refuse it at construction time instead of
/// looping forever on the first `next`.
///
/// [`Iterum::try_step_by`]: super::Iterum::try_step_by
///
/// # Examples
///
/// ```rust
/// use iterum::iter::{InvalidStepError, Iterum, iterum};
///
/// let error = iterum([1, 2, 3]).try_step_by(0).unwrap_err();
/// assert_eq!(error, InvalidStepError { operation: "step_by" });
/// assert_eq!(format!("{error}"), "step_by: step must be non-zero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStepError {
    /// The constructor that rejected the step.
    pub operation: &'static str,
}

impl std::fmt::Display for InvalidStepError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: step must be non-zero", self.operation)
    }
}

impl std::error::Error for InvalidStepError {}

/// Represents an attempt to overwrite the lookahead of an exhausted
/// [`Peekable`](super::Peekable).
///
/// # Examples
///
/// ```rust
/// use iterum::iter::{Iterum, PeekPastEndError, iterum};
///
/// let mut values = iterum(Vec::<i32>::new()).peekable();
/// assert_eq!(values.set_peek(1), Err(PeekPastEndError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeekPastEndError;

impl std::fmt::Display for PeekPastEndError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Cannot set peek value past end of the iterum")
    }
}

impl std::error::Error for PeekPastEndError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("step_by", "step_by: step must be non-zero")]
    #[case("Seq", "Seq: step must be non-zero")]
    fn test_invalid_step_error_display(#[case] operation: &'static str, #[case] expected: &str) {
        assert_eq!(InvalidStepError { operation }.to_string(), expected);
    }

    #[rstest]
    fn test_peek_past_end_error_display() {
        assert_eq!(
            PeekPastEndError.to_string(),
            "Cannot set peek value past end of the iterum"
        );
    }
}
