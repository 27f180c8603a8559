use crate::iter::{InvalidStepError, Iterum};
use crate::option::Maybe;

/// An iterum that yields the first value and then every `step`th value.
///
/// Created by [`Iterum::step_by`] or [`Iterum::try_step_by`].
#[derive(Debug, Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct StepBy<I> {
    iter: I,
    step: usize,
    first_take: bool,
}

impl<I> StepBy<I> {
    pub(crate) fn new(iter: I, step: usize) -> Result<Self, InvalidStepError> {
        if step == 0 {
            trace_debug!(step, "rejected step_by");
            return Err(InvalidStepError {
                operation: "step_by",
            });
        }
        Ok(Self {
            iter,
            step,
            first_take: true,
        })
    }
}

impl<I: Iterum> Iterum for StepBy<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        if self.first_take {
            self.first_take = false;
            self.iter.next()
        } else {
            self.iter.nth(self.step - 1)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let strided = |length: usize| {
            if self.first_take {
                length.div_ceil(self.step)
            } else {
                length / self.step
            }
        };
        (strided(lower), upper.map(strided))
    }
}
