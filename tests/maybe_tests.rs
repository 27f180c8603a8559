//! Integration tests for `Maybe`.
//!
//! Covers presence checks, extraction (including the panicking paths), the
//! boolean combinators and both flavours of slot update.

#![cfg(feature = "iter")]

use iterum::prelude::*;
use rstest::rstest;

// =============================================================================
// Presence and extraction
// =============================================================================

#[rstest]
#[case(Maybe::Some(1), true)]
#[case(Maybe::Nil, false)]
fn test_is_some_and_is_nil_are_complementary(#[case] value: Maybe<i32>, #[case] some: bool) {
    assert_eq!(value.is_some(), some);
    assert_eq!(value.is_nil(), !some);
    assert_eq!(bool::from(&value), some);
}

#[rstest]
fn test_unwrap_returns_value() {
    assert_eq!(Maybe::Some("x").unwrap(), "x");
}

#[rstest]
#[should_panic(expected = "Attempted to unwrap nil")]
fn test_unwrap_on_nil_panics() {
    let nil: Maybe<i32> = Maybe::Nil;
    let _ = nil.unwrap();
}

#[rstest]
#[should_panic(expected = "configuration must be loaded")]
fn test_expect_on_nil_panics_with_message() {
    let nil: Maybe<i32> = Maybe::Nil;
    let _ = nil.expect("configuration must be loaded");
}

#[rstest]
fn test_try_unwrap_reports_error() {
    let nil: Maybe<i32> = Maybe::Nil;
    assert_eq!(nil.try_unwrap(), Err(UnwrapNilError));
    assert_eq!(
        nil.try_expect("missing").unwrap_err().to_string(),
        "missing"
    );
    assert_eq!(Maybe::Some(5).try_unwrap(), Ok(5));
}

#[rstest]
#[case(Maybe::Some(4), 4)]
#[case(Maybe::Nil, 0)]
fn test_unwrap_or_default(#[case] value: Maybe<i32>, #[case] expected: i32) {
    assert_eq!(value.unwrap_or_default(), expected);
    assert_eq!(value.unwrap_or(0), expected);
    assert_eq!(value.unwrap_or_else(|| 0), expected);
}

#[rstest]
fn test_is_some_and() {
    assert!(Maybe::Some(3).is_some_and(|x| x > 2));
    assert!(!Maybe::Some(1).is_some_and(|x| x > 2));
    assert!(!Maybe::<i32>::Nil.is_some_and(|_| true));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
#[case(Maybe::Some(1), Maybe::Some(2), Maybe::Some(2))]
#[case(Maybe::Some(1), Maybe::Nil, Maybe::Nil)]
#[case(Maybe::Nil, Maybe::Some(2), Maybe::Nil)]
#[case(Maybe::Nil, Maybe::Nil, Maybe::Nil)]
fn test_and(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(left.and(right), expected);
}

#[rstest]
#[case(Maybe::Some(1), Maybe::Some(2), Maybe::Some(1))]
#[case(Maybe::Some(1), Maybe::Nil, Maybe::Some(1))]
#[case(Maybe::Nil, Maybe::Some(2), Maybe::Some(2))]
#[case(Maybe::Nil, Maybe::Nil, Maybe::Nil)]
fn test_or(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(left.or(right), expected);
}

#[rstest]
#[case(Maybe::Some(1), Maybe::Some(2), Maybe::Nil)]
#[case(Maybe::Some(1), Maybe::Nil, Maybe::Some(1))]
#[case(Maybe::Nil, Maybe::Some(2), Maybe::Some(2))]
#[case(Maybe::Nil, Maybe::Nil, Maybe::Nil)]
fn test_xor(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(left.xor(right), expected);
}

#[rstest]
fn test_and_then_chains_fallible_steps() {
    let parse = |text: &str| Maybe::<i32>::from(text.parse::<i32>().ok());
    let halve = |x: i32| if x % 2 == 0 { Maybe::Some(x / 2) } else { Maybe::Nil };

    assert_eq!(parse("8").and_then(halve), Maybe::Some(4));
    assert_eq!(parse("7").and_then(halve), Maybe::Nil);
    assert_eq!(parse("x").and_then(halve), Maybe::Nil);
}

#[rstest]
fn test_map_or_else_is_lazy() {
    let value = Maybe::Some(2).map_or_else(|| panic!("default must not run"), |x| x * 3);
    assert_eq!(value, 6);
}

#[rstest]
fn test_ok_or() {
    assert_eq!(Maybe::Some(1).ok_or("none"), Ok(1));
    assert_eq!(Maybe::<i32>::Nil.ok_or_else(|| "none"), Err("none"));
}

#[rstest]
fn test_zip_and_unzip() {
    let zipped = Maybe::Some(1).zip(Maybe::Some('a'));
    assert_eq!(zipped, Maybe::Some((1, 'a')));
    assert_eq!(zipped.unzip(), (Maybe::Some(1), Maybe::Some('a')));
    assert_eq!(Maybe::Some(1).zip(Maybe::<char>::Nil), Maybe::Nil);
}

#[rstest]
fn test_flatten() {
    assert_eq!(Maybe::Some(Maybe::Some(1)).flatten(), Maybe::Some(1));
    assert_eq!(Maybe::Some(Maybe::<i32>::Nil).flatten(), Maybe::Nil);
    assert_eq!(Maybe::<Maybe<i32>>::Nil.flatten(), Maybe::Nil);
}

// =============================================================================
// Slot updates
// =============================================================================

#[rstest]
fn test_take_leaves_nil_behind() {
    let mut slot = Maybe::Some(9);
    assert_eq!(slot.take(), Maybe::Some(9));
    assert_eq!(slot, Maybe::Nil);
    assert_eq!(slot.take(), Maybe::Nil);
}

#[rstest]
fn test_replace_returns_previous() {
    let mut slot = Maybe::Nil;
    assert_eq!(slot.replace(1), Maybe::Nil);
    assert_eq!(slot.replace(2), Maybe::Some(1));
    assert_eq!(slot, Maybe::Some(2));
}

#[rstest]
fn test_get_or_insert_only_fills_nil() {
    let mut slot = Maybe::Nil;
    assert_eq!(*slot.get_or_insert(5), 5);
    assert_eq!(*slot.get_or_insert(6), 5);
}

#[rstest]
#[case(Maybe::Some(1), Swap::new(Maybe::Some(1), 1))]
#[case(Maybe::Nil, Swap::new(Maybe::Some(7), 7))]
fn test_swap_get_or_insert(#[case] slot: Maybe<i32>, #[case] expected: Swap<Maybe<i32>, i32>) {
    assert_eq!(slot.swap_get_or_insert(7), expected);
}

#[rstest]
fn test_swap_insert_reports_new_state_and_value() {
    let Swap { inserted, returned } = Maybe::Some(1).swap_insert(2);
    assert_eq!(inserted, Maybe::Some(2));
    assert_eq!(returned, 2);
}

#[rstest]
fn test_swap_replace_destructures_into_tuple() {
    let (slot, old): (Maybe<i32>, Maybe<i32>) = Maybe::Nil.swap_replace(3).into();
    assert_eq!(slot, Maybe::Some(3));
    assert_eq!(old, Maybe::Nil);
}
