//! Integration tests for the adapters returned by `Iterum`.

#![cfg(feature = "iter")]

use std::cell::{Cell, RefCell};

use iterum::prelude::*;
use rstest::rstest;

/// A source that resumes after reporting `Nil`: it yields `1`, `Nil`, `3`,
/// `Nil`, ...
fn flaky() -> impl Iterum<Item = i32> {
    let mut calls = 0;
    from_fn(move || {
        calls += 1;
        if calls % 2 == 0 {
            Maybe::Nil
        } else {
            Maybe::Some(calls)
        }
    })
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn test_adapters_do_nothing_until_pulled() {
    let calls = Cell::new(0);
    let chain = iterum([1, 2, 3])
        .map(|x| {
            calls.set(calls.get() + 1);
            x * 2
        })
        .filter(|x| *x > 2);
    assert_eq!(calls.get(), 0);

    let collected: Vec<i32> = chain.collect();
    assert_eq!(collected, vec![4, 6]);
    assert_eq!(calls.get(), 3);
}

#[rstest]
fn test_side_effects_follow_pull_order() {
    let log = RefCell::new(Vec::new());
    let mut values = iterum([1, 2, 3])
        .inspect(|x| log.borrow_mut().push(format!("inspect {x}")))
        .map(|x| {
            log.borrow_mut().push(format!("map {x}"));
            x
        });

    assert_eq!(values.next(), Maybe::Some(1));
    assert_eq!(*log.borrow(), vec!["inspect 1", "map 1"]);
}

// =============================================================================
// Filtering and mapping
// =============================================================================

#[rstest]
fn test_filter_map_keeps_some_results() {
    let parsed: Vec<i32> = iterum(["1", "two", "3"])
        .filter_map(|text| Maybe::<i32>::from(text.parse().ok()))
        .collect();
    assert_eq!(parsed, vec![1, 3]);
}

#[rstest]
fn test_take_while_stays_stopped() {
    let mut values = iterum([1, 2, 5, 1, 2]).take_while(|x| *x < 3);
    assert_eq!(values.next(), Maybe::Some(1));
    assert_eq!(values.next(), Maybe::Some(2));
    assert_eq!(values.next(), Maybe::Nil);
    assert_eq!(values.next(), Maybe::Nil);
    assert_eq!(values.next(), Maybe::Nil);
}

#[rstest]
fn test_map_while_stays_stopped() {
    let mut values = iterum([4, 2, 0, 8]).map_while(|x| {
        if x == 0 {
            Maybe::Nil
        } else {
            Maybe::Some(8 / x)
        }
    });
    assert_eq!(values.next(), Maybe::Some(2));
    assert_eq!(values.next(), Maybe::Some(4));
    assert_eq!(values.next(), Maybe::Nil);
    assert_eq!(values.next(), Maybe::Nil);
}

#[rstest]
fn test_take_while_leaves_source_after_rejected_value() {
    let mut source = iterum([1, 2, 5, 6]);
    let taken: Vec<i32> = source.by_ref().take_while(|x| *x < 3).collect();
    assert_eq!(taken, vec![1, 2]);
    assert_eq!(source.next(), Maybe::Some(6));
    assert_eq!(source.next(), Maybe::Nil);
}

#[rstest]
fn test_map_while_leaves_source_after_rejected_value() {
    let mut source = iterum([4, 2, 0, 8]);
    let mapped: Vec<i32> = source
        .by_ref()
        .map_while(|x| if x == 0 { Maybe::Nil } else { Maybe::Some(8 / x) })
        .collect();
    assert_eq!(mapped, vec![2, 4]);
    assert_eq!(source.next(), Maybe::Some(8));
    assert_eq!(source.next(), Maybe::Nil);
}

#[rstest]
fn test_fuse_pins_nil() {
    let mut unfused = flaky();
    assert_eq!(unfused.next(), Maybe::Some(1));
    assert_eq!(unfused.next(), Maybe::Nil);
    assert_eq!(unfused.next(), Maybe::Some(3));

    let mut fused = flaky().fuse();
    assert_eq!(fused.next(), Maybe::Some(1));
    assert_eq!(fused.next(), Maybe::Nil);
    assert_eq!(fused.next(), Maybe::Nil);
    assert_eq!(fused.size_hint(), (0, Some(0)));
}

#[rstest]
fn test_skip_while_stops_calling_predicate() {
    let calls = Cell::new(0);
    let values: Vec<i32> = iterum([1, 2, 3, 1, 2])
        .skip_while(|x| {
            calls.set(calls.get() + 1);
            *x < 3
        })
        .collect();
    assert_eq!(values, vec![3, 1, 2]);
    assert_eq!(calls.get(), 3);
}

#[rstest]
#[case(0, vec![1, 2, 3, 4])]
#[case(2, vec![3, 4])]
#[case(9, vec![])]
fn test_skip(#[case] n: usize, #[case] expected: Vec<i32>) {
    assert_eq!(iterum([1, 2, 3, 4]).skip(n).collect::<Vec<_>>(), expected);
}

#[rstest]
#[case(0, vec![])]
#[case(2, vec![1, 2])]
#[case(9, vec![1, 2, 3, 4])]
fn test_take(#[case] n: usize, #[case] expected: Vec<i32>) {
    let values = iterum([1, 2, 3, 4]).take(n);
    assert_eq!(values.size_hint(), (expected.len(), Some(expected.len())));
    assert_eq!(values.collect::<Vec<_>>(), expected);
}

// =============================================================================
// Stepping
// =============================================================================

#[rstest]
#[case(1, vec![0, 1, 2, 3, 4, 5, 6])]
#[case(3, vec![0, 3, 6])]
#[case(10, vec![0])]
fn test_step_by(#[case] step: usize, #[case] expected: Vec<i32>) {
    let values = iterum(0..7).step_by(step);
    assert_eq!(values.size_hint(), (expected.len(), Some(expected.len())));
    assert_eq!(values.collect::<Vec<_>>(), expected);
}

#[rstest]
#[should_panic(expected = "step_by: step must be non-zero")]
fn test_step_by_zero_panics() {
    let _ = iterum([1, 2, 3]).step_by(0);
}

#[rstest]
fn test_try_step_by_zero_is_error() {
    assert_eq!(
        iterum([1, 2, 3]).try_step_by(0).err(),
        Some(InvalidStepError { operation: "step_by" })
    );
}

// =============================================================================
// Peekable
// =============================================================================

#[rstest]
fn test_peek_is_idempotent() {
    let pulled = Cell::new(0);
    let mut values = iterum([1, 2])
        .inspect(|_| pulled.set(pulled.get() + 1))
        .peekable();

    assert_eq!(values.peek(), Maybe::Some(&1));
    assert_eq!(values.peek(), Maybe::Some(&1));
    assert_eq!(pulled.get(), 1);
    assert_eq!(values.next(), Maybe::Some(1));
    assert_eq!(values.next(), Maybe::Some(2));
    assert_eq!(values.peek(), Maybe::Nil);
}

#[rstest]
fn test_set_peek_probes_first() {
    let mut values = iterum([1, 2]).peekable();
    assert_eq!(values.set_peek(10), Ok(()));
    assert_eq!(values.next(), Maybe::Some(10));
    assert_eq!(values.next(), Maybe::Some(2));
}

#[rstest]
fn test_set_peek_past_end_fails() {
    let mut values = iterum([1]).peekable();
    values.next();
    assert_eq!(values.set_peek(5), Err(PeekPastEndError));
    assert_eq!(values.next(), Maybe::Nil);
}

#[rstest]
fn test_peekable_stays_drained() {
    let mut values = flaky().peekable();
    assert_eq!(values.next(), Maybe::Some(1));
    assert_eq!(values.peek(), Maybe::Nil);
    assert_eq!(values.next(), Maybe::Nil);
    assert_eq!(values.next(), Maybe::Nil);
}

#[rstest]
fn test_peek_mut_rewrites_next_value() {
    let mut values = iterum([1, 2]).peekable();
    if let Maybe::Some(first) = values.peek_mut() {
        *first *= 10;
    }
    let collected: Vec<i32> = values.collect();
    assert_eq!(collected, vec![10, 2]);
}

#[rstest]
fn test_next_if_keeps_rejected_value() {
    let mut values = iterum([1, 2, 3]).peekable();
    assert_eq!(values.next_if(|x| *x == 1), Maybe::Some(1));
    assert_eq!(values.next_if(|x| *x == 1), Maybe::Nil);
    assert_eq!(values.next_if_eq(&2), Maybe::Some(2));
    assert_eq!(values.size_hint(), (1, Some(1)));
}

// =============================================================================
// Stateful and combining adapters
// =============================================================================

#[rstest]
fn test_scan_exposes_state() {
    let mut running = iterum([1, 2, 3, 4]).scan(1, |product, x| {
        *product *= x;
        if *product > 6 {
            Maybe::Nil
        } else {
            Maybe::Some(*product)
        }
    });
    assert_eq!(running.next(), Maybe::Some(1));
    assert_eq!(running.next(), Maybe::Some(2));
    assert_eq!(running.next(), Maybe::Some(6));
    assert_eq!(running.next(), Maybe::Nil);
    assert_eq!(*running.state(), 24);
    assert_eq!(running.next(), Maybe::Nil);
}

#[rstest]
fn test_zip_leaves_left_one_ahead() {
    let mut counter = seq_from(0, 1);
    let pairs: Vec<(i32, i32)> = counter.by_ref().zip([1, 2, 3]).collect();
    assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3)]);
    assert_eq!(counter.next(), Maybe::Some(4));
}

#[rstest]
fn test_zip_does_not_pull_right_when_left_is_done() {
    let mut right = iterum([7, 8, 9]);
    let pairs: Vec<(i32, i32)> = iterum([1]).zip(right.by_ref()).collect();
    assert_eq!(pairs, vec![(1, 7)]);
    assert_eq!(right.next(), Maybe::Some(8));
}

#[rstest]
fn test_chain_accepts_collections_and_maybe() {
    let values: Vec<i32> = iterum([1, 2])
        .chain(vec![3])
        .chain(Maybe::Some(4))
        .chain(Maybe::Nil)
        .collect();
    assert_eq!(values, vec![1, 2, 3, 4]);
}

#[rstest]
fn test_flatten_skips_empty_inner() {
    let nested = vec![vec![1], vec![], vec![2, 3], vec![]];
    let flat: Vec<i32> = iterum(nested).flatten().collect();
    assert_eq!(flat, vec![1, 2, 3]);
}

#[rstest]
fn test_flatten_maybe_values() {
    let present: Vec<i32> = iterum([Maybe::Some(1), Maybe::Nil, Maybe::Some(3)])
        .flatten()
        .collect();
    assert_eq!(present, vec![1, 3]);
}

#[rstest]
fn test_flat_map_with_seq() {
    let expanded: Vec<u8> = iterum([1u8, 2, 3]).flat_map(seq_to).collect();
    assert_eq!(expanded, vec![0, 0, 1, 0, 1, 2]);
}

#[rstest]
fn test_enumerate() {
    let indexed: Vec<(usize, char)> = iterum(['a', 'b']).enumerate().collect();
    assert_eq!(indexed, vec![(0, 'a'), (1, 'b')]);
}

#[rstest]
fn test_cycle_repeats() {
    let values: Vec<i32> = iterum([1, 2, 3]).cycle().take(7).collect();
    assert_eq!(values, vec![1, 2, 3, 1, 2, 3, 1]);
}

#[rstest]
fn test_cycle_of_empty_is_empty() {
    let mut values = iterum(Vec::<i32>::new()).cycle();
    assert_eq!(values.size_hint(), (0, Some(0)));
    assert_eq!(values.next(), Maybe::Nil);
}

#[rstest]
fn test_map_and_enumerate_run_backwards() {
    let mut values = diterum([1, 2, 3]).map(|x| x * 100).enumerate();
    assert_eq!(values.next_back(), Maybe::Some((2, 300)));
    assert_eq!(values.next(), Maybe::Some((0, 100)));
    let rest: Vec<(usize, i32)> = values.rev().collect();
    assert_eq!(rest, vec![(1, 200)]);
}
