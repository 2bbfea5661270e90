//! Shared law checks for the integration tests.
//!
//! Equality is checked with `PartialEq` and hashing with the standard
//! `DefaultHasher`, the same way a caller would observe both.

#![allow(dead_code)]

use std::collections::hash_map::DefaultHasher;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

pub fn assert_reflexive<T: PartialEq + Debug>(value: &T) {
    assert_eq!(value, value);
}

pub fn assert_symmetric<T: PartialEq + Debug>(first: &T, second: &T) {
    assert_eq!(first == second, second == first, "{first:?} vs {second:?}");
}

pub fn assert_transitive<T: PartialEq + Debug>(first: &T, second: &T, third: &T) {
    if first == second && second == third {
        assert_eq!(first, third);
    }
}

/// Equal values must hash equal.
pub fn assert_hash_consistent<T: PartialEq + Hash + Debug>(first: &T, second: &T) {
    if first == second {
        assert_eq!(hash_of(first), hash_of(second), "{first:?} and {second:?} hash apart");
    }
}

pub fn assert_associative<T, C>(first: T, second: T, third: T, combine: C)
where
    T: Clone + PartialEq + Debug,
    C: Fn(T, T) -> T,
{
    let left = combine(combine(first.clone(), second.clone()), third.clone());
    let right = combine(first, combine(second, third));
    assert_eq!(left, right);
}

pub mod strategies {
    use biased::control::{Either, Failures, Maybe, Validation};
    use proptest::collection::vec;
    use proptest::prelude::*;

    pub fn maybe() -> impl Strategy<Value = Maybe<i32>> {
        any::<Option<i32>>().prop_map(Maybe::of_nullable)
    }

    pub fn either() -> impl Strategy<Value = Either<String, i32>> {
        prop_oneof![
            any::<String>().prop_map(Either::<String, i32>::left),
            any::<i32>().prop_map(Either::<String, i32>::right),
        ]
    }

    pub fn failures() -> impl Strategy<Value = Failures<u8>> {
        (any::<u8>(), vec(any::<u8>(), 0..6)).prop_map(|(head, tail)| Failures::new(head, tail))
    }

    pub fn validation() -> impl Strategy<Value = Validation<u8, i32>> {
        prop_oneof![
            failures().prop_map(Validation::<u8, i32>::fail_all),
            any::<i32>().prop_map(Validation::<u8, i32>::pass),
        ]
    }
}
