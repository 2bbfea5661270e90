//! # biased
//!
//! Three biased algebraic containers sharing one operation surface:
//!
//! - [`Maybe<V>`](control::Maybe): a value that may be absent.
//! - [`Either<L, R>`](control::Either): a right-biased disjunction.
//! - [`Validation<F, S>`](control::Validation): a success-biased result whose
//!   failures accumulate.
//!
//! Each container supports `map`, `ap`, `chain`, `alt`, `extend`, `filter`,
//! `fold` and `recover`, and converts into the other two. They differ only in
//! how a failure is represented and combined: absence, a single left value,
//! or a non-empty ordered list of failures merged with `concat`.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Functor, Apply, Chain, Alt, Extend, Bifunctor, Foldable,
//!   Semigroup and their relatives
//! - `compose`: `compose!`, `pipe!`, `identity`, `constant`, `flip`
//! - `control`: the containers themselves
//! - `serde`: `Serialize`/`Deserialize` for the containers and error types
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use biased::prelude::*;
//!
//! fn field(name: &'static str, value: Option<&str>) -> Validation<String, String> {
//!     Maybe::of_nullable(value)
//!         .filter(|text| !text.is_empty())
//!         .to_validation()
//!         .first(|failures| failures.map(|_| format!("{name} is required")))
//!         .map(str::to_string)
//! }
//!
//! let form = field("user", Some("ada")).concat(field("email", None)).concat(field("phone", Some("")));
//! assert_eq!(
//!     form.get_failures().map(Failures::to_vec),
//!     Some(vec!["email is required".to_string(), "phone is required".to_string()])
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the type class traits and the composition
/// helpers.
///
/// ```rust
/// use biased::prelude::*;
///
/// let value = pipe!(Some(2), Maybe::of_nullable, Maybe::to_either);
/// assert_eq!(value, Either::right(2));
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;
