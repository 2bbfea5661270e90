//! Either type - a right-biased disjunction.
//!
//! `Either<L, R>` is either a `Left(L)` or a `Right(R)`. By convention `Left`
//! carries a failure and `Right` the success value; every biased operation
//! (`map`, `chain`, `ap`, `filter`, ...) acts on the `Right` arm and passes a
//! `Left` through untouched.
//!
//! # Examples
//!
//! ```rust
//! use biased::control::Either;
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse::<i32>()
//!         .map_err(|error| error.to_string())
//!         .into()
//! }
//!
//! let total = parse("40").chain(|n| parse("2").map(|m| n + m));
//! assert_eq!(total, Either::right(42));
//!
//! let failed = parse("x").chain(|n| parse("2").map(|m| n + m));
//! assert!(failed.is_left());
//!
//! let message = failed.fold(|error| format!("error: {error}"), |n| n.to_string());
//! assert!(message.starts_with("error:"));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::attempt::capture;
use super::error::{NullError, PanicError, VariantError};
use super::maybe::Maybe;

/// A value that is either a `Left(L)` or a `Right(R)`.
///
/// `Left` and `Right` are never equal to each other, whatever they hold.
/// `Left(l)` hashes exactly as `l`, and `Right(r)` as `r`.
///
/// # Examples
///
/// ```rust
/// use biased::control::Either;
///
/// let success: Either<String, i32> = Either::right(42);
/// assert_eq!(success.map(|x| x * 2), Either::right(84));
///
/// let failure: Either<String, i32> = Either::left("error".to_string());
/// assert_eq!(failure.map(|x| x * 2), Either::left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally a failure.
    Left(L),
    /// The right variant, conventionally a success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left`.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right`.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Right-biased constructor: `Right(right)` when `right` is present,
    /// otherwise `Left(left)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Either;
    ///
    /// assert_eq!(Either::of("missing", Some(1)), Either::right(1));
    /// assert_eq!(Either::<_, i32>::of("missing", None), Either::left("missing"));
    /// ```
    #[inline]
    pub fn of(left: L, right: Option<R>) -> Self {
        right.map_or(Self::Left(left), Self::Right)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Consumes the either, returning the left value if present.
    #[inline]
    pub fn left_value(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Consumes the either, returning the right value if present.
    #[inline]
    pub fn right_value(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value, or `None` for a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.get_left(), Some(&42));
    /// assert_eq!(left.get_right(), None);
    /// ```
    #[inline]
    pub const fn get_left(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value, or `None` for a `Left`.
    #[inline]
    pub const fn get_right(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Functor / Apply / Chain
    // =========================================================================

    /// Functor `map` over the `Right` value.
    #[inline]
    pub fn map<T, F>(self, mapper: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(mapper(value)),
        }
    }

    /// Apply `ap`: applies the function held by `other` to this value.
    ///
    /// If `self` is a `Left`, its left value wins; otherwise a `Left` in
    /// `other` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Either;
    ///
    /// let this: Either<&str, i32> = Either::left("L");
    /// let function: Either<&str, fn(i32) -> i32> = Either::left("R");
    /// assert_eq!(this.ap(function), Either::left("L"));
    ///
    /// let add_one: Either<&str, fn(i32) -> i32> = Either::right(|n| n + 1);
    /// assert_eq!(Either::right(1).ap(add_one), Either::right(2));
    /// ```
    #[inline]
    pub fn ap<T, G>(self, other: Either<L, G>) -> Either<L, T>
    where
        G: FnOnce(R) -> T,
    {
        match (self, other) {
            (Self::Left(value), _) | (Self::Right(_), Either::Left(value)) => Either::Left(value),
            (Self::Right(value), Either::Right(function)) => Either::Right(function(value)),
        }
    }

    /// Chain `chain` (a.k.a. `bind`, `flat_map`).
    ///
    /// A `Left` is propagated unchanged without calling `mapper`.
    #[inline]
    pub fn chain<T, F>(self, mapper: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => mapper(value),
        }
    }

    /// Alias for [`chain`](Self::chain).
    #[inline]
    pub fn bind<T, F>(self, mapper: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.chain(mapper)
    }

    /// Alias for [`chain`](Self::chain).
    #[inline]
    pub fn flat_map<T, F>(self, mapper: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.chain(mapper)
    }

    // =========================================================================
    // Alt / Extend
    // =========================================================================

    /// Alt `alt`: returns `self` if it is a `Right`, otherwise `other`.
    #[inline]
    pub fn alt(self, other: Self) -> Self {
        match self {
            Self::Left(_) => other,
            Self::Right(_) => self,
        }
    }

    /// Alias for [`alt`](Self::alt).
    #[inline]
    pub fn coalesce(self, other: Self) -> Self {
        self.alt(other)
    }

    /// Like [`alt`](Self::alt), producing the alternative lazily.
    #[inline]
    pub fn alt_with<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Left(_) => supplier(),
            Self::Right(_) => self,
        }
    }

    /// Like [`alt_with`](Self::alt_with), passing the left value to the
    /// supplier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Either;
    ///
    /// let retried: Either<u32, &str> =
    ///     Either::left(1).alt_with_left(|attempts| Either::left(attempts + 1));
    /// assert_eq!(retried, Either::left(2));
    /// ```
    #[inline]
    pub fn alt_with_left<F>(self, supplier: F) -> Self
    where
        F: FnOnce(L) -> Self,
    {
        match self {
            Self::Left(value) => supplier(value),
            Self::Right(_) => self,
        }
    }

    /// Extend `extend`: passes the whole either to `mapper` when it is a
    /// `Right`. A `Left` passes through.
    pub fn extend<T, F>(self, mapper: F) -> Either<L, T>
    where
        F: FnOnce(Self) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            right @ Self::Right(_) => Either::Right(mapper(right)),
        }
    }

    // =========================================================================
    // Bifunctor
    // =========================================================================

    /// Applies one of two functions depending on which side is populated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::left(84));
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_mapper: F, right_mapper: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_mapper(value)),
            Self::Right(value) => Either::Right(right_mapper(value)),
        }
    }

    /// Bifunctor `first`: maps the left value.
    #[inline]
    pub fn first<T, F>(self, mapper: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.bimap(mapper, crate::compose::identity)
    }

    /// Alias for [`first`](Self::first).
    #[inline]
    pub fn left_map<T, F>(self, mapper: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.first(mapper)
    }

    /// Bifunctor `second`: maps the right value.
    #[inline]
    pub fn second<U, G>(self, mapper: G) -> Either<L, U>
    where
        G: FnOnce(R) -> U,
    {
        self.bimap(crate::compose::identity, mapper)
    }

    /// Alias for [`second`](Self::second).
    #[inline]
    pub fn right_map<U, G>(self, mapper: G) -> Either<L, U>
    where
        G: FnOnce(R) -> U,
    {
        self.second(mapper)
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps the right value only if `predicate` holds. A `Left` yields
    /// `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::{Either, Maybe};
    ///
    /// let right: Either<&str, i32> = Either::right(4);
    /// assert_eq!(right.filter(|n| n % 2 == 0), Maybe::just(4));
    /// assert_eq!(right.filter(|n| n % 2 == 1), Maybe::nothing());
    /// ```
    pub fn filter<P>(self, predicate: P) -> Maybe<R>
    where
        P: FnOnce(&R) -> bool,
    {
        self.right_value().map_or(Maybe::Nothing, |value| Maybe::just(value).filter(predicate))
    }

    /// Keeps a `Right` only if `predicate` holds, turning it into
    /// `Left(left)` otherwise. A `Left` is returned unchanged.
    pub fn filter_or<P>(self, predicate: P, left: L) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        self.filter_or_else(predicate, move || left)
    }

    /// Like [`filter_or`](Self::filter_or), building the left value lazily.
    pub fn filter_or_else<P, F>(self, predicate: P, supplier: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce() -> L,
    {
        match self {
            Self::Right(value) if !predicate(&value) => Self::Left(supplier()),
            other => other,
        }
    }

    // =========================================================================
    // Foldable
    // =========================================================================

    /// Eliminates the either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_mapper: F, right_mapper: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_mapper(value),
            Self::Right(value) => right_mapper(value),
        }
    }

    /// Alias for [`fold`](Self::fold).
    #[inline]
    pub fn reduce<T, F, G>(self, left_mapper: F, right_mapper: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.fold(left_mapper, right_mapper)
    }

    /// Left-associative fold over the right value. A `Left` returns
    /// `initial`.
    #[inline]
    pub fn fold_left<B, F>(self, initial: B, morphism: F) -> B
    where
        F: FnOnce(B, R) -> B,
    {
        match self {
            Self::Left(_) => initial,
            Self::Right(value) => morphism(initial, value),
        }
    }

    /// Right-associative fold over the right value. A `Left` returns
    /// `initial`.
    #[inline]
    pub fn fold_right<B, F>(self, initial: B, morphism: F) -> B
    where
        F: FnOnce(R, B) -> B,
    {
        match self {
            Self::Left(_) => initial,
            Self::Right(value) => morphism(value, initial),
        }
    }

    // =========================================================================
    // Recovery and escape hatches
    // =========================================================================

    /// Replaces a `Left` with `Right(value)`.
    #[inline]
    pub fn recover(self, value: R) -> Self {
        match self {
            Self::Left(_) => Self::Right(value),
            Self::Right(_) => self,
        }
    }

    /// Replaces a `Left` with `Right(supplier())`.
    #[inline]
    pub fn recover_with<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => Self::Right(supplier()),
            Self::Right(_) => self,
        }
    }

    /// Replaces a `Left` with a `Right` computed from the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Either;
    ///
    /// let recovered = Either::<&str, usize>::left("oops").recover_with_left(str::len);
    /// assert_eq!(recovered, Either::right(4));
    /// ```
    #[inline]
    pub fn recover_with_left<F>(self, mapper: F) -> Self
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => Self::Right(mapper(value)),
            Self::Right(_) => self,
        }
    }

    /// Returns the right value, or `other` for a `Left`.
    #[inline]
    pub fn get_or_else(self, other: R) -> R {
        match self {
            Self::Left(_) => other,
            Self::Right(value) => value,
        }
    }

    /// Returns the right value, or one computed from the left value.
    #[inline]
    pub fn get_or_else_get<F>(self, mapper: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => mapper(value),
            Self::Right(value) => value,
        }
    }

    /// Returns the right value, or the result of `supplier` for a `Left`.
    #[inline]
    pub fn get_or_else_get_with<F>(self, supplier: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => supplier(),
            Self::Right(value) => value,
        }
    }

    /// Returns the right value, or an error built from the left value.
    ///
    /// # Errors
    ///
    /// Returns `Err(mapper(left))` if this is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(404);
    /// assert_eq!(left.get_or_else_throw(|code| format!("status {code}")), Err("status 404".to_string()));
    /// ```
    #[inline]
    pub fn get_or_else_throw<E, F>(self, mapper: F) -> Result<R, E>
    where
        F: FnOnce(L) -> E,
    {
        match self {
            Self::Left(value) => Err(mapper(value)),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the left value.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError`] if this is a `Right`.
    pub fn from_left(self) -> Result<L, VariantError> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(VariantError {
                container: "Either",
                operation: "from_left",
                expected: "Left",
                found: "Right",
            }),
        }
    }

    /// Returns the right value.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError`] if this is a `Left`.
    pub fn from_right(self) -> Result<R, VariantError> {
        match self {
            Self::Left(_) => Err(VariantError {
                container: "Either",
                operation: "from_right",
                expected: "Right",
                found: "Left",
            }),
            Self::Right(value) => Ok(value),
        }
    }

    // =========================================================================
    // Side effects
    // =========================================================================

    /// Calls `consumer` with the left value if present.
    pub fn if_left<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            consumer(value);
        }
        self
    }

    /// Calls `consumer` with the right value if present.
    pub fn if_right<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            consumer(value);
        }
        self
    }

    /// Calls whichever consumer matches the populated side.
    pub fn tap<F, G>(self, left_consumer: F, right_consumer: G) -> Self
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        self.if_left(left_consumer).if_right(right_consumer)
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Swaps the `Left` and `Right` variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns a one-element `Vec` for a `Right`, an empty one otherwise.
    pub fn to_list(self) -> Vec<R> {
        self.right_value().into_iter().collect()
    }

    /// Converts into a `Result`: `Right` is `Ok`, `Left` is `Err`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Constructors that synthesize their own failure
// =============================================================================

impl<R> Either<NullError, R> {
    /// `Right(value)` when present, `Left(NullError::value())` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::{Either, NullError};
    ///
    /// assert_eq!(Either::of_nullable(Some(1)), Either::right(1));
    /// assert_eq!(Either::<_, i32>::of_nullable(None), Either::left(NullError::value()));
    /// ```
    #[inline]
    pub fn of_nullable(value: Option<R>) -> Self {
        Either::of(NullError::value(), value)
    }

    /// `Right` of the first element, or `Left(NullError::empty_list())` for
    /// an empty sequence.
    pub fn from_first<I>(values: I) -> Self
    where
        I: IntoIterator<Item = R>,
    {
        Either::of(NullError::empty_list(), values.into_iter().next())
    }

    /// Like [`from_first`](Self::from_first), with
    /// `Left(NullError::null_list())` for an absent sequence.
    pub fn from_nullable_first<I>(values: Option<I>) -> Self
    where
        I: IntoIterator<Item = R>,
    {
        values.map_or(Self::Left(NullError::null_list()), Self::from_first)
    }
}

impl<R> Either<PanicError, R> {
    /// Runs `supplier`, capturing a panic as `Left(PanicError)`.
    pub fn attempt<F>(supplier: F) -> Self
    where
        F: FnOnce() -> R,
    {
        capture("Either::attempt", supplier).into()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<L: Hash, R: Hash> Hash for Either<L, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Left(value) => value.hash(state),
            Self::Right(value) => value.hash(state),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_ap_prefers_own_left() {
        let this: Either<&str, i32> = Either::left("L");
        let other: Either<&str, fn(i32) -> i32> = Either::left("R");
        assert_eq!(this.ap(other), Either::left("L"));
    }

    #[rstest]
    fn test_ap_falls_back_to_function_left() {
        let this: Either<&str, i32> = Either::right(1);
        let other: Either<&str, fn(i32) -> i32> = Either::left("R");
        assert_eq!(this.ap(other), Either::left("R"));
    }

    #[rstest]
    #[case(Either::right(4), Either::right(4))]
    #[case(Either::right(3), Either::left("odd"))]
    #[case(Either::left("early"), Either::left("early"))]
    fn test_filter_or(#[case] input: Either<&str, i32>, #[case] expected: Either<&str, i32>) {
        assert_eq!(input.filter_or(|n| n % 2 == 0, "odd"), expected);
    }

    #[rstest]
    fn test_filter_on_left_is_nothing() {
        let left: Either<&str, i32> = Either::left("e");
        assert_eq!(left.filter(|_| true), Maybe::nothing());
    }

    #[rstest]
    fn test_from_first_distinguishes_empty_and_absent() {
        assert_eq!(Either::from_first(vec![1, 2]), Either::right(1));
        assert_eq!(
            Either::<_, i32>::from_first(Vec::new()),
            Either::left(NullError::empty_list())
        );
        assert_eq!(
            Either::<_, i32>::from_nullable_first(None::<Vec<i32>>),
            Either::left(NullError::null_list())
        );
    }

    #[rstest]
    fn test_from_right_on_left_reports_variant() {
        let left: Either<&str, i32> = Either::left("e");
        let error = left.from_right().unwrap_err();
        assert_eq!(error.to_string(), "Either::from_right: expected Right, found Left");
    }

    #[rstest]
    fn test_tap_only_calls_populated_side() {
        let seen = std::cell::RefCell::new(Vec::new());
        let _ = Either::<i32, i32>::right(7).tap(
            |l| seen.borrow_mut().push(-*l),
            |r| seen.borrow_mut().push(*r),
        );
        assert_eq!(seen.into_inner(), vec![7]);
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Either::<i32, &str>::left(1).to_string(), "Left(1)");
        assert_eq!(Either::<i32, &str>::right("r").to_string(), "Right(r)");
    }
}
