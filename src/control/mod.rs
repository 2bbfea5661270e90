//! The three biased containers and the conversions between them.
//!
//! - [`Maybe`]: a value that may be absent.
//! - [`Either`]: a right-biased disjunction, `Left` conventionally a failure.
//! - [`Validation`]: a success-biased result whose failures accumulate
//!   through [`Validation::concat`].
//!
//! All three share one operation surface (`map`, `ap`, `chain`, `alt`,
//! `extend`, `filter`, `fold`, `recover`) and differ only in how failure is
//! represented: absence, a single value, or a non-empty [`Failures`] list.
//!
//! # Examples
//!
//! ```rust
//! use biased::control::{Either, Maybe, NullError, Validation};
//!
//! let lookup = |key: &str| Maybe::of_nullable(match key {
//!     "port" => Some(8080),
//!     _ => None,
//! });
//!
//! assert_eq!(lookup("port").to_either(), Either::right(8080));
//! assert_eq!(lookup("host").to_validation(), Validation::fail(NullError::value()));
//! ```

mod attempt;
mod convert;
mod either;
mod error;
mod guard;
mod maybe;
mod validation;

pub use either::Either;
pub use error::{ArgumentNullError, NullError, NullReason, PanicError, VariantError};
pub use guard::require_non_null;
pub use maybe::Maybe;
pub use validation::{Failures, Validation};

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Clone, Copy, std::hash::Hash);
static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync, Clone, std::hash::Hash);
static_assertions::assert_impl_all!(Validation<String, i32>: Send, Sync, Clone, std::hash::Hash);
static_assertions::assert_impl_all!(NullError: std::error::Error, Send, Sync, Copy);
static_assertions::assert_impl_all!(PanicError: std::error::Error, Send, Sync);
