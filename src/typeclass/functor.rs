//! Functor type class - mapping over the biased value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use biased::control::{Either, Maybe};
//! use biased::typeclass::Functor;
//!
//! fn describe<T: Functor<Inner = i32>>(container: T) -> T::WithType<String> {
//!     container.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Maybe::just(7)), Maybe::just("#7".to_string()));
//! assert_eq!(describe(Either::<&str, i32>::left("e")), Either::left("e"));
//! ```

use super::higher::TypeConstructor;

/// Types whose biased value can be mapped.
///
/// The failure side (`Nothing`, `Left`, `Failure`) passes through untouched.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the biased value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the biased value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the biased value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

#[cfg(feature = "control")]
mod containers {
    use super::Functor;
    use crate::control::{Either, Maybe, Validation};

    impl<V> Functor for Maybe<V> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Maybe<B>
        where
            F: FnOnce(V) -> B,
        {
            self.map(function)
        }
    }

    impl<L, R> Functor for Either<L, R> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Either<L, B>
        where
            F: FnOnce(R) -> B,
        {
            self.map(function)
        }
    }

    impl<E, S> Functor for Validation<E, S> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Validation<E, B>
        where
            F: FnOnce(S) -> B,
        {
            self.map(function)
        }
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Either, Maybe, Validation};
    use rstest::rstest;

    #[rstest]
    fn replace_keeps_the_failure_side() {
        let left: Either<&str, i32> = Either::left("e");
        assert_eq!(left.replace("x"), Either::left("e"));
        assert_eq!(Maybe::just(1).replace("x"), Maybe::just("x"));
    }

    #[rstest]
    fn void_discards_success() {
        let success: Validation<&str, i32> = Validation::pass(9);
        assert_eq!(success.void(), Validation::pass(()));
    }

    #[rstest]
    fn fmap_agrees_with_inherent_map() {
        let double = |n: i32| n * 2;
        assert_eq!(Functor::fmap(Maybe::just(4), double), Maybe::just(4).map(double));
    }
}
