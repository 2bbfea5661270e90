//! Tests for the conversions between `Maybe`, `Either` and `Validation`.

#![cfg(feature = "control")]

use biased::control::{Either, Failures, Maybe, NullError, Validation};
use rstest::rstest;

// =============================================================================
// Maybe ->
// =============================================================================

#[rstest]
#[case(Maybe::just(1), Either::right(1), Validation::pass(1))]
#[case(Maybe::nothing(), Either::left(NullError::value()), Validation::fail(NullError::value()))]
fn maybe_into_others(
    #[case] maybe: Maybe<i32>,
    #[case] either: Either<NullError, i32>,
    #[case] validation: Validation<NullError, i32>,
) {
    assert_eq!(maybe.to_either(), either);
    assert_eq!(maybe.to_validation(), validation);
    assert_eq!(Either::from_maybe(maybe), either);
    assert_eq!(Validation::from_maybe(maybe), validation);
    assert_eq!(Either::<NullError, i32>::from(maybe), either);
    assert_eq!(Validation::<NullError, i32>::from(maybe), validation);
}

#[rstest]
fn maybe_and_option_interconvert() {
    let option: Option<i32> = Maybe::just(1).into();
    assert_eq!(option, Some(1));
    assert_eq!(Maybe::from(None::<i32>), Maybe::nothing());
}

// =============================================================================
// Either ->
// =============================================================================

#[rstest]
#[case(Either::right(2), Maybe::just(2), Validation::pass(2))]
#[case(Either::left("e"), Maybe::nothing(), Validation::fail("e"))]
fn either_into_others(
    #[case] either: Either<&'static str, i32>,
    #[case] maybe: Maybe<i32>,
    #[case] validation: Validation<&'static str, i32>,
) {
    assert_eq!(either.to_maybe(), maybe);
    assert_eq!(either.to_validation(), validation);
    assert_eq!(Maybe::from_either(either), maybe);
    assert_eq!(Validation::from_either(either), validation);
    assert_eq!(Maybe::<i32>::from(either), maybe);
    assert_eq!(Validation::<&str, i32>::from(either), validation);
}

#[rstest]
fn left_does_not_survive_a_trip_through_maybe() {
    let original: Either<&str, i32> = Either::left("e");
    let degraded = original.to_maybe();
    assert_eq!(degraded, Maybe::nothing());
    assert_eq!(degraded.to_either(), Either::left(NullError::value()));
}

#[rstest]
fn right_survives_a_trip_through_maybe() {
    let original: Either<&str, i32> = Either::right(3);
    assert_eq!(original.to_maybe().to_either(), Either::right(3));
}

// =============================================================================
// Validation ->
// =============================================================================

#[rstest]
fn validation_to_either_keeps_first_failure() {
    let failed: Validation<&str, i32> = Validation::fail_all(Failures::new("first", ["second"]));
    assert_eq!(failed.clone().to_either(), Either::left("first"));
    assert_eq!(Either::from_validation(failed.clone()), Either::left("first"));
    assert_eq!(Either::<&str, i32>::from(failed.clone()), Either::left("first"));
    assert_eq!(failed.get_failures().map(Failures::len), Some(2));
}

#[rstest]
#[case(Validation::pass(5), Maybe::just(5), Either::right(5))]
#[case(Validation::fail("e"), Maybe::nothing(), Either::left("e"))]
fn validation_into_others(
    #[case] validation: Validation<&'static str, i32>,
    #[case] maybe: Maybe<i32>,
    #[case] either: Either<&'static str, i32>,
) {
    assert_eq!(validation.clone().to_maybe(), maybe);
    assert_eq!(Maybe::from_validation(validation.clone()), maybe);
    assert_eq!(Maybe::<i32>::from(validation.clone()), maybe);
    assert_eq!(validation.to_either(), either);
}

#[rstest]
fn either_to_validation_and_back_is_lossless_for_single_failure() {
    let original: Either<&str, i32> = Either::left("e");
    assert_eq!(original.to_validation().to_either(), original);
}
