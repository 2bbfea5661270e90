//! Bifunctor type class - mapping over both sides of a two-sided container.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! x.bimap(identity, identity) == x
//! ```
//!
//! ## Composition
//!
//! ```text
//! x.bimap(f1, g1).bimap(f2, g2) == x.bimap(|a| f2(f1(a)), |b| g2(g1(b)))
//! ```
//!
//! ## Consistency
//!
//! ```text
//! x.bimap(f, g) == x.first(f).second(g)
//! ```
//!
//! `Validation` exposes `bimap`, `first` and `second` as inherent methods
//! only: its failure mapper works on the whole `Failures<F>` sequence, which
//! does not fit the element-wise `Target<C, D>` shape of this trait.
//!
//! # Examples
//!
//! ```rust
//! use biased::control::Either;
//! use biased::typeclass::Bifunctor;
//!
//! fn lengths<T: Bifunctor<String, String>>(value: T) -> T::Target<usize, usize> {
//!     value.bimap(|left| left.len(), |right| right.len())
//! }
//!
//! let left: Either<String, String> = Either::left("error".to_string());
//! assert_eq!(lengths(left), Either::left(5));
//! ```

use crate::compose::identity;

/// Types with two independently mappable sides.
pub trait Bifunctor<A, B> {
    /// The same container with both sides replaced.
    type Target<C, D>;

    /// Maps whichever side is populated.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first side only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, identity)
    }

    /// Maps the second side only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(identity, function)
    }
}

#[cfg(feature = "control")]
impl<L, R> Bifunctor<L, R> for crate::control::Either<L, R> {
    type Target<C, D> = crate::control::Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }
}
