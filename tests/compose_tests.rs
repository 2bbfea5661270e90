//! Tests for the composition helpers used together with the containers.

#![cfg(all(feature = "control", feature = "compose"))]

use biased::prelude::*;
use rstest::rstest;

fn parse(text: &str) -> Maybe<i32> {
    Maybe::of_nullable(text.trim().parse().ok())
}

#[rstest]
fn pipe_threads_a_value_through_converters() {
    let result = pipe!(" 21 ", parse, |maybe: Maybe<i32>| maybe.map(|n| n * 2), Maybe::to_validation);
    assert_eq!(result, Validation::pass(42));
}

#[rstest]
fn compose_builds_a_reusable_pipeline() {
    let checked = compose!(Maybe::to_either, |maybe: Maybe<i32>| maybe.filter(|n| *n > 0), parse);
    assert_eq!(checked("5"), Either::right(5));
    assert_eq!(checked("-5"), Either::left(NullError::value()));
    assert_eq!(checked("x"), Either::left(NullError::value()));
}

#[rstest]
fn constant_recovers_with_fixed_value() {
    let fallback = constant(0);
    let recovered: Either<&str, i32> = Either::left("e").recover_with_left(fallback);
    assert_eq!(recovered, Either::right(0));
}

#[rstest]
fn flip_swaps_fold_arguments() {
    let subtract = |accumulator: i32, value: i32| accumulator - value;
    assert_eq!(Maybe::just(3).fold_left(10, subtract), 7);
    assert_eq!(Maybe::just(3).fold_right(10, flip(subtract)), 7);
}

#[rstest]
fn identity_is_a_no_op_mapper() {
    let failed: Validation<&str, i32> = Validation::fail("e");
    assert_eq!(failed.clone().map(identity), failed);
}
