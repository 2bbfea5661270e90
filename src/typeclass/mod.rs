//! Type class traits shared by the biased containers.
//!
//! - [`Functor`]: mapping over the biased value
//! - [`Apply`], [`Applicative`]: applying a contained function; lifting values
//! - [`Chain`], [`Monad`]: sequencing dependent computations
//! - [`Alt`], [`Alternative`]: choosing the first success
//! - [`Extend`]: mapping with access to the whole container
//! - [`Bifunctor`]: mapping both sides of `Either`
//! - [`Foldable`]: collapsing into a summary value
//! - [`Semigroup`], [`Monoid`]: associative combination
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types to name "the same container holding another type", which
//! is all `Functor`, `Apply` and `Chain` need.
//!
//! Every container also exposes the same operations as inherent methods, so
//! the traits are only needed when writing code generic over the container.
//!
//! # Examples
//!
//! ```rust
//! use biased::control::{Either, Maybe, Validation};
//! use biased::typeclass::Monad;
//!
//! fn increment<M: Monad<Inner = i32>>(value: M) -> M::WithType<i32> {
//!     value.chain(|n| M::pure(n + 1))
//! }
//!
//! assert_eq!(increment(Maybe::just(1)), Maybe::just(2));
//! assert_eq!(increment(Either::<&str, i32>::left("e")), Either::left("e"));
//! assert_eq!(increment(Validation::<&str, i32>::pass(0)), Validation::pass(1));
//! ```

mod alternative;
mod applicative;
mod bifunctor;
mod extend;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use alternative::{Alt, Alternative};
pub use applicative::{Applicative, Apply};
pub use bifunctor::Bifunctor;
pub use extend::Extend;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::{Chain, Monad};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
