//! Extend type class - mapping with access to the whole container.
//!
//! `extend` hands the entire container, not just the biased value, to the
//! function and wraps the result back into the biased arm. A failure passes
//! through without calling the function.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! w.extend(g).extend(f) == w.extend(|w1| f(w1.extend(g)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use biased::control::Either;
//! use biased::typeclass::Extend;
//!
//! let right: Either<&str, i32> = Either::right(2);
//! assert_eq!(right.duplicate(), Either::right(Either::right(2)));
//! ```

use super::functor::Functor;

/// Types that can be extended with a function over the whole container.
pub trait Extend: Functor {
    /// Applies `function` to the whole container when it holds a biased
    /// value.
    fn extend<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self) -> B;

    /// Nests the container inside its own biased arm.
    #[inline]
    fn duplicate(self) -> Self::WithType<Self>
    where
        Self: Sized,
    {
        Extend::extend(self, |whole| whole)
    }
}

#[cfg(feature = "control")]
mod containers {
    use super::Extend;
    use crate::control::{Either, Maybe, Validation};

    impl<V> Extend for Maybe<V> {
        #[inline]
        fn extend<B, F>(self, function: F) -> Maybe<B>
        where
            F: FnOnce(Self) -> B,
        {
            Self::extend(self, function)
        }
    }

    impl<L, R> Extend for Either<L, R> {
        #[inline]
        fn extend<B, F>(self, function: F) -> Either<L, B>
        where
            F: FnOnce(Self) -> B,
        {
            Self::extend(self, function)
        }
    }

    impl<E, S> Extend for Validation<E, S> {
        #[inline]
        fn extend<B, F>(self, function: F) -> Validation<E, B>
        where
            F: FnOnce(Self) -> B,
        {
            Self::extend(self, function)
        }
    }
}
