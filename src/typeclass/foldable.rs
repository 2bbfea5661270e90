//! Foldable type class - collapsing a container into a summary value.
//!
//! Each biased container holds at most one foldable element: the `Just`,
//! `Right` or `Success` value. Folding a failure returns the initial value
//! unchanged.
//!
//! # Laws
//!
//! ## `fold_map` consistency
//!
//! ```text
//! fa.fold_map(f) == fa.fold_left(M::empty(), |acc, a| acc.combine(f(a)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use biased::control::{Either, Maybe};
//! use biased::typeclass::Foldable;
//!
//! fn total<T: Foldable<Inner = u32>>(container: T) -> u32 {
//!     container.fold_left(100, |accumulator, element| accumulator + element)
//! }
//!
//! assert_eq!(total(Maybe::just(5)), 105);
//! assert_eq!(total(Either::<&str, u32>::left("e")), 100);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// Types that can be folded into a single value.
pub trait Foldable: TypeConstructor {
    /// Folds from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element into a monoid and combines the results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns `true` if there is no element to fold.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            accumulator.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns `true` if every element satisfies `predicate`; vacuously
    /// `true` for a failure.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

#[cfg(feature = "control")]
mod containers {
    use super::Foldable;
    use crate::control::{Either, Maybe, Validation};

    impl<V> Foldable for Maybe<V> {
        #[inline]
        fn fold_left<B, F>(self, init: B, function: F) -> B
        where
            F: FnMut(B, V) -> B,
        {
            Self::fold_left(self, init, function)
        }

        #[inline]
        fn fold_right<B, F>(self, init: B, function: F) -> B
        where
            F: FnMut(V, B) -> B,
        {
            Self::fold_right(self, init, function)
        }

        #[inline]
        fn is_empty(&self) -> bool {
            self.is_nothing()
        }

        #[inline]
        fn length(&self) -> usize {
            usize::from(self.is_just())
        }
    }

    impl<L, R> Foldable for Either<L, R> {
        #[inline]
        fn fold_left<B, F>(self, init: B, function: F) -> B
        where
            F: FnMut(B, R) -> B,
        {
            Self::fold_left(self, init, function)
        }

        #[inline]
        fn fold_right<B, F>(self, init: B, function: F) -> B
        where
            F: FnMut(R, B) -> B,
        {
            Self::fold_right(self, init, function)
        }

        #[inline]
        fn is_empty(&self) -> bool {
            self.is_left()
        }

        #[inline]
        fn length(&self) -> usize {
            usize::from(self.is_right())
        }
    }

    impl<E, S> Foldable for Validation<E, S> {
        #[inline]
        fn fold_left<B, F>(self, init: B, function: F) -> B
        where
            F: FnMut(B, S) -> B,
        {
            Self::fold_left(self, init, function)
        }

        #[inline]
        fn fold_right<B, F>(self, init: B, function: F) -> B
        where
            F: FnMut(S, B) -> B,
        {
            Self::fold_right(self, init, function)
        }

        #[inline]
        fn is_empty(&self) -> bool {
            self.is_failure()
        }

        #[inline]
        fn length(&self) -> usize {
            usize::from(self.is_success())
        }
    }
}
