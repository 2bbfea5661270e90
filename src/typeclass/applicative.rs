//! Apply and Applicative type classes.
//!
//! [`Apply`] applies a function held in one container to the value held in
//! another. [`Applicative`] adds `pure`, which lifts a plain value.
//!
//! For `Either` and `Validation`, `ap` is fail-fast and the receiver's
//! failure takes precedence over the function's failure.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! v.ap(pure(|x| x)) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(x).ap(pure(f)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use biased::control::{Either, Maybe};
//! use biased::typeclass::Applicative;
//!
//! let sum = Maybe::just(1).map2(Maybe::just(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::just(3));
//!
//! let left: Either<&str, i32> = Either::left("first");
//! assert_eq!(left.map2(Either::left("second"), |a: i32, b: i32| a + b), Either::left("first"));
//! ```

use super::functor::Functor;

/// Application of a contained function to a contained value.
pub trait Apply: Functor {
    /// Applies the function held by `function` to the value held by `self`.
    fn ap<B, G>(self, function: Self::WithType<G>) -> Self::WithType<B>
    where
        G: FnOnce(Self::Inner) -> B;
}

/// [`Apply`] with a way to lift plain values.
pub trait Applicative: Apply {
    /// Lifts `value` into the biased arm.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values with `function`; fails fast on the first failure.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the first value, requiring both to be present.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the second value, requiring both to be present.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

#[cfg(feature = "control")]
mod containers {
    use super::{Applicative, Apply};
    use crate::control::{Either, Maybe, Validation};

    // =========================================================================
    // Maybe<V> Implementation
    // =========================================================================

    impl<V> Apply for Maybe<V> {
        #[inline]
        fn ap<B, G>(self, function: Maybe<G>) -> Maybe<B>
        where
            G: FnOnce(V) -> B,
        {
            Self::ap(self, function)
        }
    }

    impl<V> Applicative for Maybe<V> {
        #[inline]
        fn pure<B>(value: B) -> Maybe<B> {
            Maybe::just(value)
        }

        #[inline]
        fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
        where
            F: FnOnce(V, B) -> C,
        {
            match (self, other) {
                (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
                _ => Maybe::Nothing,
            }
        }
    }

    // =========================================================================
    // Either<L, R> Implementation
    // =========================================================================

    impl<L, R> Apply for Either<L, R> {
        #[inline]
        fn ap<B, G>(self, function: Either<L, G>) -> Either<L, B>
        where
            G: FnOnce(R) -> B,
        {
            Self::ap(self, function)
        }
    }

    impl<L, R> Applicative for Either<L, R> {
        #[inline]
        fn pure<B>(value: B) -> Either<L, B> {
            Either::right(value)
        }

        #[inline]
        fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
        where
            F: FnOnce(R, B) -> C,
        {
            match (self, other) {
                (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
                (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            }
        }
    }

    // =========================================================================
    // Validation<E, S> Implementation
    // =========================================================================

    impl<E, S> Apply for Validation<E, S> {
        #[inline]
        fn ap<B, G>(self, function: Validation<E, G>) -> Validation<E, B>
        where
            G: FnOnce(S) -> B,
        {
            Self::ap(self, function)
        }
    }

    impl<E, S> Applicative for Validation<E, S> {
        #[inline]
        fn pure<B>(value: B) -> Validation<E, B> {
            Validation::pass(value)
        }

        #[inline]
        fn map2<B, C, F>(self, other: Validation<E, B>, function: F) -> Validation<E, C>
        where
            F: FnOnce(S, B) -> C,
        {
            match (self, other) {
                (Self::Failure(failures), _) | (Self::Success(_), Validation::Failure(failures)) => {
                    Validation::Failure(failures)
                }
                (Self::Success(a), Validation::Success(b)) => Validation::Success(function(a, b)),
            }
        }
    }
}
