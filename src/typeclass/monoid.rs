//! Monoid type class - semigroups with an identity element.
//!
//! `Validation` and `Failures` are semigroups but not monoids: neither has
//! an empty value. `Maybe<V>` is a monoid whenever `V` is a semigroup, with
//! `Nothing` as the identity.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use biased::control::Maybe;
//! use biased::typeclass::Monoid;
//!
//! let words = vec![Maybe::just(String::from("a")), Maybe::nothing(), Maybe::just(String::from("b"))];
//! assert_eq!(Monoid::combine_all(words), Maybe::just(String::from("ab")));
//! ```

use super::semigroup::Semigroup;

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Combines every value from left to right, starting from `empty`.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

#[cfg(feature = "control")]
impl<V: Semigroup> Monoid for crate::control::Maybe<V> {
    fn empty() -> Self {
        Self::Nothing
    }
}
