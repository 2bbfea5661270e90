//! Generic function-composition collaborators.
//!
//! The containers only need a handful of combinators: [`identity`] for the
//! default `Bifunctor` implementations, [`constant`] (a.k.a. `always`), and
//! the [`pipe!`](crate::pipe!)/[`compose!`](crate::compose!) macros for
//! building pipelines of container operations.
//!
//! # Examples
//!
//! ```rust
//! use biased::compose::{constant, identity};
//! use biased::control::Either;
//!
//! let left: Either<&str, i32> = Either::left("error");
//! assert_eq!(left.bimap(constant(0_u8), identity), Either::left(0));
//! ```

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity};

// Macros are exported at the crate root via #[macro_export].
pub use crate::compose;
pub use crate::pipe;
