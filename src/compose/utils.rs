//! Combinators used by the containers' default implementations.
//!
//! - [`identity`]: returns its argument (I combinator)
//! - [`constant`]: ignores its argument and returns a fixed value (K combinator,
//!   also known as `always`)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//!
//! `Bifunctor::first` and `Bifunctor::second` are `bimap` with [`identity`]
//! on the untouched side.

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use biased::compose::identity;
/// use biased::control::Maybe;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(Maybe::just(3).map(identity), Maybe::just(3));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns `value`, ignoring its input.
///
/// # Examples
///
/// ```
/// use biased::compose::constant;
/// use biased::control::Either;
///
/// let always_zero = constant::<_, &str>(0);
/// assert_eq!(always_zero("ignored"), 0);
///
/// let right: Either<String, i32> = Either::right(7);
/// assert_eq!(right.map(constant(0)), Either::right(0));
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(a, b) == f(b, a)` and `flip(flip(f)) == f`.
///
/// # Examples
///
/// ```
/// use biased::compose::flip;
/// use biased::control::Maybe;
///
/// fn prepend(accumulator: String, element: &str) -> String {
///     format!("{element}{accumulator}")
/// }
///
/// // fold_right hands the element first; flip adapts a left-style reducer.
/// let folded = Maybe::just("a").fold_right(String::from("b"), flip(prepend));
/// assert_eq!(folded, "ab");
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-5)]
    #[case(i32::MAX)]
    fn identity_returns_input(#[case] value: i32) {
        assert_eq!(identity(value), value);
    }

    #[rstest]
    fn constant_ignores_input() {
        let always = constant::<_, String>("fixed");
        assert_eq!(always("one".to_string()), "fixed");
        assert_eq!(always("two".to_string()), "fixed");
    }

    #[rstest]
    fn flip_swaps_arguments() {
        let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
        let flipped = flip(subtract);
        assert_eq!(flipped(3, 10), 7);
    }

    #[rstest]
    fn double_flip_is_identity() {
        let concat = |left: String, right: &str| left + right;
        let twice = flip(flip(concat));
        assert_eq!(twice("a".to_string(), "b"), "ab");
    }
}
