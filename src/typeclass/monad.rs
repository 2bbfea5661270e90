//! Chain and Monad type classes - sequencing dependent computations.
//!
//! [`Chain`] feeds the biased value into a function that returns a new
//! container of the same kind. A failure short-circuits: the function is not
//! called and the failure is propagated unchanged. [`Monad`] is any
//! [`Applicative`] that is also a [`Chain`].
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).chain(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.chain(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use biased::control::Validation;
//! use biased::typeclass::Chain;
//!
//! fn positive(n: i32) -> Validation<&'static str, i32> {
//!     if n > 0 { Validation::pass(n) } else { Validation::fail("not positive") }
//! }
//!
//! assert_eq!(Validation::pass(3).then(positive(-1)), Validation::fail("not positive"));
//! ```

use super::applicative::{Applicative, Apply};

/// Sequencing of dependent computations.
pub trait Chain: Apply {
    /// Feeds the biased value into `function`.
    fn chain<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`chain`](Chain::chain).
    #[inline]
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.chain(function)
    }

    /// Alias for [`chain`](Chain::chain).
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.chain(function)
    }

    /// Sequences `next` after `self`, discarding the biased value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.chain(|_| next)
    }
}

/// An [`Applicative`] that is also a [`Chain`].
pub trait Monad: Applicative + Chain {}

impl<T: Applicative + Chain> Monad for T {}

#[cfg(feature = "control")]
mod containers {
    use super::Chain;
    use crate::control::{Either, Maybe, Validation};

    impl<V> Chain for Maybe<V> {
        #[inline]
        fn chain<B, F>(self, function: F) -> Maybe<B>
        where
            F: FnOnce(V) -> Maybe<B>,
        {
            Self::chain(self, function)
        }
    }

    impl<L, R> Chain for Either<L, R> {
        #[inline]
        fn chain<B, F>(self, function: F) -> Either<L, B>
        where
            F: FnOnce(R) -> Either<L, B>,
        {
            Self::chain(self, function)
        }
    }

    impl<E, S> Chain for Validation<E, S> {
        #[inline]
        fn chain<B, F>(self, function: F) -> Validation<E, B>
        where
            F: FnOnce(S) -> Validation<E, B>,
        {
            Self::chain(self, function)
        }
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Either, Maybe};
    use rstest::rstest;

    #[rstest]
    fn then_propagates_failure_of_next() {
        let next: Either<&str, i32> = Either::left("stop");
        assert_eq!(Either::<&str, i32>::right(1).then(next), Either::left("stop"));
    }

    #[rstest]
    fn then_short_circuits_on_failure() {
        let start: Maybe<i32> = Maybe::nothing();
        assert_eq!(start.then(Maybe::just("x")), Maybe::nothing());
    }

    #[rstest]
    fn generic_monad_code_runs_against_maybe() {
        fn halve<M: Monad<Inner = i32>>(value: M) -> M::WithType<i32> {
            value.chain(|n| M::pure(n / 2))
        }

        assert_eq!(halve(Maybe::just(8)), Maybe::just(4));
        assert_eq!(halve(Either::<&str, i32>::left("e")), Either::left("e"));
    }
}
