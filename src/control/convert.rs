//! Conversions between [`Maybe`], [`Either`] and [`Validation`].
//!
//! | From \ To  | Maybe                 | Either                      | Validation                  |
//! |------------|-----------------------|-----------------------------|-----------------------------|
//! | Maybe      | identity              | `Nothing` → `Left(NullError)` | `Nothing` → `Failure(NullError)` |
//! | Either     | `Left` → `Nothing`    | identity                    | `Left(l)` → `Failure([l])`  |
//! | Validation | `Failure` → `Nothing` | `Failure(fs)` → `Left(first)` | identity                  |
//!
//! Every conversion into `Maybe` forgets the failure, and
//! `Validation` → `Either` keeps only the first failure. None of these
//! round-trip through the lossy direction:
//!
//! ```rust
//! use biased::control::{Either, Maybe, NullError};
//!
//! let original: Either<&str, i32> = Either::left("e");
//! let degraded = original.to_maybe().to_either();
//! assert_eq!(degraded, Either::left(NullError::value()));
//! ```

use super::either::Either;
use super::error::NullError;
use super::maybe::Maybe;
use super::validation::Validation;

// =============================================================================
// Maybe
// =============================================================================

impl<V> Maybe<V> {
    /// `Just(v)` becomes `Right(v)`; `Nothing` becomes
    /// `Left(NullError::value())`.
    #[inline]
    pub fn to_either(self) -> Either<NullError, V> {
        Either::of(NullError::value(), self.to_option())
    }

    /// `Just(v)` becomes `Success(v)`; `Nothing` becomes
    /// `Failure(NullError::value())`.
    #[inline]
    pub fn to_validation(self) -> Validation<NullError, V> {
        Validation::of(NullError::value(), self.to_option())
    }

    /// `Right(v)` becomes `Just(v)`; a `Left` becomes `Nothing`.
    #[inline]
    pub fn from_either<L>(either: Either<L, V>) -> Self {
        either.to_maybe()
    }

    /// `Success(v)` becomes `Just(v)`; a `Failure` becomes `Nothing`.
    #[inline]
    pub fn from_validation<F>(validation: Validation<F, V>) -> Self {
        validation.to_maybe()
    }
}

// =============================================================================
// Either
// =============================================================================

impl<L, R> Either<L, R> {
    /// `Right(r)` becomes `Just(r)`; the left value is dropped.
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        Maybe::of_nullable(self.right_value())
    }

    /// `Right(r)` becomes `Success(r)`; `Left(l)` becomes a single failure.
    #[inline]
    pub fn to_validation(self) -> Validation<L, R> {
        match self {
            Self::Left(value) => Validation::fail(value),
            Self::Right(value) => Validation::pass(value),
        }
    }

    /// A `Failure` keeps only its first failure as the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::{Either, Failures, Validation};
    ///
    /// let failed: Validation<&str, i32> = Validation::fail_all(Failures::new("e1", ["e2"]));
    /// assert_eq!(Either::from_validation(failed), Either::left("e1"));
    /// ```
    #[inline]
    pub fn from_validation(validation: Validation<L, R>) -> Self {
        validation.to_either()
    }
}

impl<R> Either<NullError, R> {
    /// `Just(r)` becomes `Right(r)`; `Nothing` becomes
    /// `Left(NullError::value())`.
    #[inline]
    pub fn from_maybe(maybe: Maybe<R>) -> Self {
        maybe.to_either()
    }
}

// =============================================================================
// Validation
// =============================================================================

impl<F, S> Validation<F, S> {
    /// `Success(s)` becomes `Just(s)`; the failures are dropped.
    #[inline]
    pub fn to_maybe(self) -> Maybe<S> {
        match self {
            Self::Success(value) => Maybe::Just(value),
            Self::Failure(_) => Maybe::Nothing,
        }
    }

    /// `Success(s)` becomes `Right(s)`; a `Failure` keeps its first failure
    /// and discards the rest.
    #[inline]
    pub fn to_either(self) -> Either<F, S> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(failures) => Either::Left(failures.into_first()),
        }
    }

    /// `Right(s)` becomes `Success(s)`; `Left(l)` becomes a single failure.
    #[inline]
    pub fn from_either(either: Either<F, S>) -> Self {
        either.to_validation()
    }
}

impl<S> Validation<NullError, S> {
    /// `Just(s)` becomes `Success(s)`; `Nothing` becomes
    /// `Failure(NullError::value())`.
    #[inline]
    pub fn from_maybe(maybe: Maybe<S>) -> Self {
        maybe.to_validation()
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl<V> From<Option<V>> for Maybe<V> {
    #[inline]
    fn from(value: Option<V>) -> Self {
        Self::of_nullable(value)
    }
}

impl<V> From<Maybe<V>> for Option<V> {
    #[inline]
    fn from(maybe: Maybe<V>) -> Self {
        maybe.to_option()
    }
}

impl<L, V> From<Either<L, V>> for Maybe<V> {
    #[inline]
    fn from(either: Either<L, V>) -> Self {
        either.to_maybe()
    }
}

impl<F, V> From<Validation<F, V>> for Maybe<V> {
    #[inline]
    fn from(validation: Validation<F, V>) -> Self {
        validation.to_maybe()
    }
}

impl<R> From<Maybe<R>> for Either<NullError, R> {
    #[inline]
    fn from(maybe: Maybe<R>) -> Self {
        maybe.to_either()
    }
}

impl<L, R> From<Validation<L, R>> for Either<L, R> {
    #[inline]
    fn from(validation: Validation<L, R>) -> Self {
        validation.to_either()
    }
}

impl<F, S> From<Either<F, S>> for Validation<F, S> {
    #[inline]
    fn from(either: Either<F, S>) -> Self {
        either.to_validation()
    }
}

impl<S> From<Maybe<S>> for Validation<NullError, S> {
    #[inline]
    fn from(maybe: Maybe<S>) -> Self {
        maybe.to_validation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Failures;
    use rstest::rstest;

    #[rstest]
    fn test_left_degrades_through_maybe() {
        let left: Either<&str, i32> = Either::left("e");
        let maybe = left.to_maybe();
        assert_eq!(maybe, Maybe::nothing());
        assert_eq!(maybe.to_either(), Either::left(NullError::value()));
    }

    #[rstest]
    fn test_validation_to_either_keeps_first_failure() {
        let failed: Validation<&str, i32> = Validation::fail_all(Failures::new("e1", ["e2", "e3"]));
        assert_eq!(failed.to_either(), Either::left("e1"));
    }

    #[rstest]
    fn test_nothing_to_validation_synthesizes_null_error() {
        let nothing: Maybe<i32> = Maybe::nothing();
        assert_eq!(nothing.to_validation(), Validation::fail(NullError::value()));
    }

    #[rstest]
    fn test_from_impls_agree_with_methods() {
        let right: Either<&str, i32> = Either::right(3);
        assert_eq!(Maybe::from(right), Maybe::just(3));
        assert_eq!(Validation::from(right), Validation::pass(3));
        assert_eq!(Maybe::from(Some(1)), Maybe::just(1));
        let option: Option<i32> = Maybe::just(1).into();
        assert_eq!(option, Some(1));
    }
}
