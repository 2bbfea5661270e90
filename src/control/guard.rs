//! The require-non-null guard.
//!
//! Closures can never be null in Rust, so the guard is only needed where an
//! API accepts an `Option` for a value that must be present.

use super::error::ArgumentNullError;

/// Returns the contained value, or an [`ArgumentNullError`] naming
/// `parameter` when the value is absent.
///
/// # Errors
///
/// Returns [`ArgumentNullError`] if `value` is `None`.
///
/// # Examples
///
/// ```rust
/// use biased::control::{require_non_null, ArgumentNullError};
///
/// assert_eq!(require_non_null(Some(3), "count"), Ok(3));
/// assert_eq!(
///     require_non_null::<i32>(None, "count"),
///     Err(ArgumentNullError::new("count"))
/// );
/// ```
#[inline]
pub fn require_non_null<T>(
    value: Option<T>,
    parameter: &'static str,
) -> Result<T, ArgumentNullError> {
    value.ok_or(ArgumentNullError::new(parameter))
}
