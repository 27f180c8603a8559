//! Property-based tests for stepped ranges.
//!
//! Every `Seq` is checked against the `std` range it describes:
//!
//! - Forward values equal `(start..end).step_by(step)` (or its descending
//!   counterpart)
//! - Backward values are the forward values reversed
//! - `len` equals the number of values produced

#![cfg(feature = "seq")]

use iterum::prelude::*;
use proptest::prelude::*;

/// The values of a stepped range, built from `std` ranges.
fn expected_values(start: i32, end: i32, step: i32) -> Vec<i32> {
    let stride = step.unsigned_abs() as usize;
    if step > 0 {
        (start..end).step_by(stride).collect()
    } else {
        ((end + 1)..=start).rev().step_by(stride).collect()
    }
}

fn arb_step() -> impl Strategy<Value = i32> {
    prop_oneof![1..20i32, -20..0i32]
}

proptest! {
    #[test]
    fn prop_forward_matches_std(start in -200..200i32, end in -200..200i32, step in arb_step()) {
        let actual: Vec<i32> = seq(start, end, step).collect();
        prop_assert_eq!(actual, expected_values(start, end, step));
    }

    #[test]
    fn prop_backward_is_reversed_forward(start in -200..200i32, end in -200..200i32, step in arb_step()) {
        let mut expected = expected_values(start, end, step);
        expected.reverse();
        let actual: Vec<i32> = seq(start, end, step).rev().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_len_matches_count(start in -200..200i32, end in -200..200i32, step in arb_step()) {
        let range = seq(start, end, step);
        prop_assert_eq!(range.len(), range.clone().count());
        prop_assert_eq!(range.size_hint(), (range.len(), Some(range.len())));
    }

    #[test]
    fn prop_len_tracks_interleaved_pulls(
        start in -50..50i32,
        end in -50..50i32,
        step in arb_step(),
        pulls in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let mut range = seq(start, end, step);
        let mut remaining = range.len();
        for from_front in pulls {
            let pulled = if from_front { range.next() } else { range.next_back() };
            if pulled.is_some() {
                remaining -= 1;
            }
            prop_assert_eq!(range.len(), remaining);
        }
    }

    #[test]
    fn prop_unsigned_matches_std(start in 0..300u16, end in 0..300u16, step in 1..20u16) {
        let actual: Vec<u16> = seq(start, end, step).collect();
        let expected: Vec<u16> = (start..end).step_by(usize::from(step)).collect();
        prop_assert_eq!(actual, expected);
    }
}
