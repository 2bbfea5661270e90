//! Error types for the biased containers.
//!
//! Absence and failure are ordinary values in this crate (`Nothing`, `Left`,
//! `Failure`). The types in this module cover the remaining cases:
//!
//! - [`NullError`]: the payload synthesized when absence is converted into a
//!   container that needs an error value (`Nothing` into `Left`).
//! - [`PanicError`]: a panic captured by `attempt` or `checked_map`.
//! - [`ArgumentNullError`]: a required value was passed as `None`.
//! - [`VariantError`]: an escape hatch such as `from_just` was called on the
//!   wrong variant.

/// The reason a [`NullError`] was synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NullReason {
    /// A raw value was absent.
    Value,
    /// A sequence was absent.
    NullList,
    /// A sequence was present but empty.
    EmptyList,
}

impl NullReason {
    const fn message(self) -> &'static str {
        match self {
            Self::Value => "value is null",
            Self::NullList => "list is null",
            Self::EmptyList => "list is empty",
        }
    }
}

/// The failure payload standing in for an absent value.
///
/// Produced by `Maybe::to_either`, `Either::of_nullable`,
/// `Validation::from_maybe` and the sequence constructors.
///
/// # Examples
///
/// ```rust
/// use biased::control::{Either, Maybe, NullError};
///
/// let nothing: Maybe<i32> = Maybe::nothing();
/// assert_eq!(nothing.to_either(), Either::Left(NullError::value()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NullError {
    reason: NullReason,
}

impl NullError {
    /// A raw value was absent.
    #[must_use]
    pub const fn value() -> Self {
        Self::new(NullReason::Value)
    }

    /// A sequence was absent.
    #[must_use]
    pub const fn null_list() -> Self {
        Self::new(NullReason::NullList)
    }

    /// A sequence was empty.
    #[must_use]
    pub const fn empty_list() -> Self {
        Self::new(NullReason::EmptyList)
    }

    /// Creates an error with the given reason.
    #[must_use]
    pub const fn new(reason: NullReason) -> Self {
        Self { reason }
    }

    /// Returns why the error was synthesized.
    #[must_use]
    pub const fn reason(&self) -> NullReason {
        self.reason
    }
}

impl std::fmt::Display for NullError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.reason.message())
    }
}

impl std::error::Error for NullError {}

/// A panic raised by user code and captured at an `attempt` boundary.
///
/// Only the panic message is kept; payloads that are neither `&str` nor
/// `String` are reported as `"unknown panic"`.
///
/// # Examples
///
/// ```rust
/// use biased::control::Either;
///
/// let result: Either<_, i32> = Either::attempt(|| panic!("boom"));
/// assert_eq!(result.get_left().map(|error| error.message()), Some("boom"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Creates a captured panic with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for PanicError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "panicked: {}", self.message)
    }
}

impl std::error::Error for PanicError {}

/// A required argument was passed as `None`.
///
/// # Examples
///
/// ```rust
/// use biased::control::{ArgumentNullError, Maybe};
///
/// let error = Maybe::<i32>::try_just(None).unwrap_err();
/// assert_eq!(error, ArgumentNullError::new("value"));
/// assert_eq!(error.to_string(), "value must not be null");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgumentNullError {
    /// The name of the offending parameter.
    pub parameter: &'static str,
}

impl ArgumentNullError {
    /// Creates an error naming the given parameter.
    #[must_use]
    pub const fn new(parameter: &'static str) -> Self {
        Self { parameter }
    }
}

impl std::fmt::Display for ArgumentNullError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} must not be null", self.parameter)
    }
}

impl std::error::Error for ArgumentNullError {}

/// An escape hatch was used against the wrong variant.
///
/// # Examples
///
/// ```rust
/// use biased::control::{Maybe, VariantError};
///
/// let error = Maybe::<i32>::nothing().from_just().unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "Maybe::from_just: expected Just, found Nothing"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantError {
    /// The container type, e.g. `"Maybe"`.
    pub container: &'static str,
    /// The escape hatch that was called, e.g. `"from_just"`.
    pub operation: &'static str,
    /// The variant the operation requires.
    pub expected: &'static str,
    /// The variant that was actually present.
    pub found: &'static str,
}

impl std::fmt::Display for VariantError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}::{}: expected {}, found {}",
            self.container, self.operation, self.expected, self.found
        )
    }
}

impl std::error::Error for VariantError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NullError::value(), "value is null")]
    #[case(NullError::null_list(), "list is null")]
    #[case(NullError::empty_list(), "list is empty")]
    fn null_error_display(#[case] error: NullError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn null_errors_with_same_reason_are_equal() {
        assert_eq!(NullError::value(), NullError::new(NullReason::Value));
        assert_ne!(NullError::value(), NullError::empty_list());
    }

    #[rstest]
    fn argument_null_error_display() {
        let error = ArgumentNullError::new("mapper");
        assert_eq!(format!("{error}"), "mapper must not be null");
    }

    #[rstest]
    fn variant_error_display() {
        let error = VariantError {
            container: "Either",
            operation: "from_right",
            expected: "Right",
            found: "Left",
        };
        assert_eq!(
            format!("{error}"),
            "Either::from_right: expected Right, found Left"
        );
    }

    #[rstest]
    fn panic_error_keeps_message() {
        let error = PanicError::new("boom");
        assert_eq!(error.message(), "boom");
        assert_eq!(error.to_string(), "panicked: boom");
    }
}
