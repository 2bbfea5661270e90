//! Alt and Alternative type classes - choosing between containers.
//!
//! [`Alt`] picks the first container that holds a biased value. All three
//! containers are `Alt`. [`Alternative`] adds an identity element for `alt`;
//! only `Maybe` has one (`Nothing`), since a `Left` or a `Failure` cannot be
//! fabricated without a failure value.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.alt(b).alt(c) == a.alt(b.alt(c))
//! ```
//!
//! ## Identity (Alternative)
//!
//! ```text
//! empty().alt(a) == a
//! a.alt(empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use biased::control::Maybe;
//! use biased::typeclass::Alternative;
//!
//! let first = <Maybe<i32> as Alternative>::choice([Maybe::nothing(), Maybe::just(2), Maybe::just(3)]);
//! assert_eq!(first, Maybe::just(2));
//! ```

use super::applicative::Applicative;
use super::functor::Functor;

/// Choice between two containers of the same type.
pub trait Alt: Functor {
    /// Returns `self` if it holds a biased value, otherwise `alternative`.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Alias for [`alt`](Alt::alt).
    #[inline]
    #[must_use]
    fn coalesce(self, alternative: Self) -> Self
    where
        Self: Sized,
    {
        self.alt(alternative)
    }
}

/// [`Alt`] with an identity element.
pub trait Alternative: Alt + Applicative {
    /// The identity of [`alt`](Alt::alt).
    #[must_use]
    fn empty() -> Self;

    /// `pure(())` when `condition` holds, `empty` otherwise.
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self::WithType<()>: Alternative,
    {
        if condition {
            Self::pure(())
        } else {
            <Self::WithType<()> as Alternative>::empty()
        }
    }

    /// The first alternative holding a biased value, or `empty`.
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        alternatives.into_iter().fold(Self::empty(), Alt::alt)
    }
}

#[cfg(feature = "control")]
mod containers {
    use super::{Alt, Alternative};
    use crate::control::{Either, Maybe, Validation};

    impl<V> Alt for Maybe<V> {
        #[inline]
        fn alt(self, alternative: Self) -> Self {
            Self::alt(self, alternative)
        }
    }

    impl<V> Alternative for Maybe<V> {
        #[inline]
        fn empty() -> Self {
            Self::Nothing
        }
    }

    impl<L, R> Alt for Either<L, R> {
        #[inline]
        fn alt(self, alternative: Self) -> Self {
            Self::alt(self, alternative)
        }
    }

    impl<E, S> Alt for Validation<E, S> {
        #[inline]
        fn alt(self, alternative: Self) -> Self {
            Self::alt(self, alternative)
        }
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Either, Maybe, Validation};
    use rstest::rstest;

    #[rstest]
    fn guard_yields_unit_or_nothing() {
        assert_eq!(<Maybe<i32> as Alternative>::guard(true), Maybe::just(()));
        assert_eq!(<Maybe<i32> as Alternative>::guard(false), Maybe::nothing());
    }

    #[rstest]
    fn choice_of_nothing_is_empty() {
        let none: Vec<Maybe<i32>> = Vec::new();
        assert_eq!(Maybe::choice(none), Maybe::nothing());
    }

    #[rstest]
    fn alt_keeps_first_success_for_validation() {
        let first: Validation<&str, i32> = Validation::pass(1);
        assert_eq!(Alt::alt(first, Validation::pass(2)), Validation::pass(1));
    }

    #[rstest]
    fn coalesce_falls_through_left() {
        let left: Either<&str, i32> = Either::left("e");
        assert_eq!(Alt::coalesce(left, Either::right(5)), Either::right(5));
    }
}
