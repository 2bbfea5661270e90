//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`. Every function is called exactly
/// once, so [`FnOnce`] closures are accepted.
///
/// # Examples
///
/// ```
/// use biased::pipe;
/// use biased::control::{Either, Maybe};
///
/// let result = pipe!(
///     Some(21),
///     Maybe::of_nullable,
///     |maybe: Maybe<i32>| maybe.map(|n| n * 2),
///     Maybe::to_either
/// );
/// assert_eq!(result, Either::right(42));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
