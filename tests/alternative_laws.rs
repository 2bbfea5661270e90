//! Property-based tests for the Alt and Alternative laws.
//!
//! - **Associativity**: `a.alt(b).alt(c) == a.alt(b.alt(c))`
//! - **Distributivity**: `a.alt(b).fmap(f) == a.fmap(f).alt(b.fmap(f))`
//! - **Identity** (`Maybe` only): `empty().alt(a) == a == a.alt(empty())`

#![cfg(all(feature = "control", feature = "typeclass"))]

mod common;

use biased::control::{Either, Maybe, Validation};
use biased::typeclass::{Alt, Alternative, Functor};
use common::strategies::{either, maybe, validation};
use proptest::prelude::*;

fn halve(n: i32) -> i32 {
    n / 2
}

proptest! {
    #[test]
    fn prop_maybe_alt_associative(a in maybe(), b in maybe(), c in maybe()) {
        prop_assert_eq!(a.alt(b).alt(c), a.alt(b.alt(c)));
    }

    #[test]
    fn prop_maybe_alt_distributive(a in maybe(), b in maybe()) {
        prop_assert_eq!(a.alt(b).fmap(halve), a.fmap(halve).alt(b.fmap(halve)));
    }

    #[test]
    fn prop_maybe_empty_is_identity(a in maybe()) {
        prop_assert_eq!(<Maybe<i32> as Alternative>::empty().alt(a), a);
        prop_assert_eq!(a.alt(<Maybe<i32> as Alternative>::empty()), a);
    }

    #[test]
    fn prop_maybe_just_wins(value in any::<i32>(), other in maybe()) {
        prop_assert_eq!(Maybe::just(value).alt(other), Maybe::just(value));
        prop_assert_eq!(Maybe::nothing().alt(Maybe::just(value)), Maybe::just(value));
    }

    #[test]
    fn prop_maybe_choice_picks_first_just(values in proptest::collection::vec(maybe(), 0..6)) {
        let expected = values.iter().copied().find(Maybe::is_just).unwrap_or_default();
        prop_assert_eq!(<Maybe<i32> as Alternative>::choice(values), expected);
    }

    #[test]
    fn prop_either_alt_associative(a in either(), b in either(), c in either()) {
        let left = Alt::alt(Alt::alt(a.clone(), b.clone()), c.clone());
        let right = Alt::alt(a, Alt::alt(b, c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_alt_distributive(a in either(), b in either()) {
        let left = a.clone().alt(b.clone()).fmap(halve);
        let right = a.fmap(halve).alt(b.fmap(halve));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_right_wins(value in any::<i32>(), other in either()) {
        prop_assert_eq!(Either::<String, i32>::right(value).alt(other), Either::right(value));
    }

    #[test]
    fn prop_validation_alt_associative(a in validation(), b in validation(), c in validation()) {
        let left = Alt::alt(Alt::alt(a.clone(), b.clone()), c.clone());
        let right = Alt::alt(a, Alt::alt(b, c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_validation_alt_does_not_accumulate(a in validation(), b in validation()) {
        let expected = if a.is_success() { a.clone() } else { b.clone() };
        prop_assert_eq!(Validation::alt(a, b), expected);
    }
}
