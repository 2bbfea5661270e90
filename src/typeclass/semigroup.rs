//! Semigroup type class - types with an associative binary operation.
//!
//! For [`Validation`](crate::control::Validation), `combine` is
//! `concat`: the one operation in this crate that accumulates failures
//! instead of short-circuiting.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use biased::control::{Failures, Validation};
//! use biased::typeclass::Semigroup;
//!
//! let checks: Vec<Validation<&str, ()>> = vec![
//!     Validation::pass(()),
//!     Validation::fail("too short"),
//!     Validation::fail("no digit"),
//! ];
//! assert_eq!(
//!     Semigroup::reduce_all(checks),
//!     Some(Validation::fail_all(Failures::new("too short", ["no digit"])))
//! );
//! ```

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines `self` with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Combines every value from left to right, or `None` if there are
    /// none.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Text
// =============================================================================

/// Concatenation. Gives `Maybe<String>` and `fold_map` a value to combine.
impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// =============================================================================
// Container Implementations
// =============================================================================

#[cfg(feature = "control")]
mod containers {
    use super::Semigroup;
    use crate::control::{Failures, Maybe, Validation};

    impl<F> Semigroup for Failures<F> {
        fn combine(self, other: Self) -> Self {
            self.concat(other)
        }
    }

    impl<F, S> Semigroup for Validation<F, S> {
        fn combine(self, other: Self) -> Self {
            self.concat(other)
        }
    }

    /// Combines the values of two `Just`s; `Nothing` is skipped.
    impl<V: Semigroup> Semigroup for Maybe<V> {
        fn combine(self, other: Self) -> Self {
            match (self, other) {
                (Self::Just(left), Self::Just(right)) => Self::Just(left.combine(right)),
                (just @ Self::Just(_), Self::Nothing) | (Self::Nothing, just) => just,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_ref_leaves_operands_untouched() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        assert_eq!(left.combine_ref(&right), "Hello, World!");
        assert_eq!(left, "Hello, ");
    }

    #[rstest]
    fn combine_n_repeats() {
        assert_eq!(String::from("ab").combine_n(3), "ababab");
    }

    #[rstest]
    #[should_panic(expected = "combine_n requires count > 0")]
    fn combine_n_rejects_zero() {
        let _ = String::from("ab").combine_n(0);
    }

    #[rstest]
    fn reduce_all_of_nothing_is_none() {
        assert_eq!(<String as Semigroup>::reduce_all(Vec::new()), None);
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn maybe_combine_skips_nothing() {
        use crate::control::Maybe;

        let just = Maybe::just(String::from("a"));
        assert_eq!(just.clone().combine(Maybe::nothing()), just);
        assert_eq!(Maybe::nothing().combine(just.clone()), just);
        assert_eq!(just.clone().combine(just), Maybe::just(String::from("aa")));
    }
}

#[cfg(all(test, feature = "control"))]
mod property_tests {
    use super::*;
    use crate::control::{Failures, Validation};
    use proptest::prelude::*;

    fn validation() -> impl Strategy<Value = Validation<u8, bool>> {
        prop_oneof![
            any::<bool>().prop_map(Validation::pass),
            proptest::collection::vec(any::<u8>(), 1..4)
                .prop_map(|failures| Validation::try_fail_all(failures).unwrap()),
        ]
    }

    proptest! {
        #[test]
        fn prop_validation_combine_associative(
            first in validation(),
            second in validation(),
            third in validation()
        ) {
            let left = first.clone().combine(second.clone()).combine(third.clone());
            let right = first.combine(second.combine(third));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_failures_combine_preserves_length(
            first in proptest::collection::vec(any::<u8>(), 1..5),
            second in proptest::collection::vec(any::<u8>(), 1..5)
        ) {
            let expected = first.len() + second.len();
            let combined = Failures::try_from_vec(first).unwrap()
                .combine(Failures::try_from_vec(second).unwrap());
            prop_assert_eq!(combined.len(), expected);
        }
    }
}
