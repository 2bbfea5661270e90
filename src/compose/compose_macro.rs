//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)` builds `move |x| f(g(h(x)))`. The result is a new
/// closure; use [`pipe!`](crate::pipe!) to apply functions to a value
/// immediately.
///
/// # Examples
///
/// ```
/// use biased::compose;
/// use biased::control::Maybe;
///
/// let parse_and_double = compose!(
///     |maybe: Maybe<i32>| maybe.map(|n| n * 2),
///     |text: &str| Maybe::of_nullable(text.parse::<i32>().ok())
/// );
/// assert_eq!(parse_and_double("21"), Maybe::just(42));
/// assert_eq!(parse_and_double("x"), Maybe::nothing());
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
