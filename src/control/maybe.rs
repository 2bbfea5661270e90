//! Maybe type - an optional value.
//!
//! `Maybe<V>` is either `Just(V)` or `Nothing`. It carries the same
//! capability set as [`Either`](super::Either) and
//! [`Validation`](super::Validation): map, ap, chain, alt, extend, filter,
//! fold and recover. Absence is a first-class value here, never an error.
//!
//! # Examples
//!
//! ```rust
//! use biased::control::Maybe;
//!
//! let port = Maybe::of_nullable(Some("8080"))
//!     .chain(|text| Maybe::of_nullable(text.parse::<u16>().ok()))
//!     .filter(|port| *port >= 1024);
//! assert_eq!(port, Maybe::just(8080));
//!
//! let missing: Maybe<u16> = Maybe::of_nullable(None);
//! assert_eq!(missing.get_or_else(80), 80);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::attempt::capture;
use super::error::{ArgumentNullError, VariantError};
use super::guard::require_non_null;

/// An optional value: `Just(V)` or `Nothing`.
///
/// # Equality and hashing
///
/// Two values are equal when both are `Nothing`, or both are `Just` with
/// equal contents. `Nothing` hashes as the integer `1`; `Just(v)` hashes
/// exactly as `v` does.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<V> {
    /// No value.
    Nothing,
    /// A present value.
    Just(V),
}

impl<V> Maybe<V> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Just` holding `value`.
    #[inline]
    pub const fn just(value: V) -> Self {
        Self::Just(value)
    }

    /// Creates a `Nothing`.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Alternative `empty`: the identity of [`alt`](Self::alt).
    #[inline]
    pub const fn empty() -> Self {
        Self::Nothing
    }

    /// Applicative `of`. Same as [`just`](Self::just).
    #[inline]
    pub const fn of(value: V) -> Self {
        Self::Just(value)
    }

    /// Creates a `Just`, rejecting an absent value.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentNullError`] for the `value` parameter when `value`
    /// is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Maybe;
    ///
    /// assert_eq!(Maybe::try_just(Some(1)), Ok(Maybe::just(1)));
    /// assert!(Maybe::<i32>::try_just(None).is_err());
    /// ```
    pub fn try_just(value: Option<V>) -> Result<Self, ArgumentNullError> {
        require_non_null(value, "value").map(Self::Just)
    }

    /// Creates a `Just` for a present value and `Nothing` for an absent one.
    #[inline]
    pub fn of_nullable(value: Option<V>) -> Self {
        value.map_or(Self::Nothing, Self::Just)
    }

    /// Creates a `Maybe` from the first element of a sequence.
    ///
    /// An empty sequence yields `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_first(vec![3, 4]), Maybe::just(3));
    /// assert_eq!(Maybe::from_first(Vec::<i32>::new()), Maybe::nothing());
    /// ```
    pub fn from_first<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::of_nullable(values.into_iter().next())
    }

    /// Like [`from_first`](Self::from_first), treating an absent sequence
    /// as empty.
    pub fn from_nullable_first<I>(values: Option<I>) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        values.map_or(Self::Nothing, Self::from_first)
    }

    /// Runs `supplier`, returning `Nothing` if it panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Maybe;
    ///
    /// assert_eq!(Maybe::attempt(|| 5), Maybe::just(5));
    /// assert_eq!(Maybe::<i32>::attempt(|| panic!("boom")), Maybe::nothing());
    /// ```
    pub fn attempt<F>(supplier: F) -> Self
    where
        F: FnOnce() -> V,
    {
        capture("Maybe::attempt", supplier).map_or(Self::Nothing, Self::Just)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns a reference to the value, or `None` for `Nothing`.
    #[inline]
    pub const fn get(&self) -> Option<&V> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts `&Maybe<V>` into `Maybe<&V>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&V> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Functor / Apply / Chain
    // =========================================================================

    /// Functor `map`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).map(|n| n + 1), Maybe::just(3));
    /// assert_eq!(Maybe::<i32>::nothing().map(|n| n + 1), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<R, F>(self, mapper: F) -> Maybe<R>
    where
        F: FnOnce(V) -> R,
    {
        match self {
            Self::Just(value) => Maybe::Just(mapper(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Maps with a function that may produce an absent value; absence
    /// collapses to `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Maybe;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
    /// assert_eq!(Maybe::just(4).map_nullable(halve), Maybe::just(2));
    /// assert_eq!(Maybe::just(3).map_nullable(halve), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map_nullable<R, F>(self, mapper: F) -> Maybe<R>
    where
        F: FnOnce(V) -> Option<R>,
    {
        match self {
            Self::Just(value) => Maybe::of_nullable(mapper(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Like [`map`](Self::map), but a panic inside `mapper` yields
    /// `Nothing` instead of unwinding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Maybe;
    ///
    /// let result: Maybe<i32> = Maybe::just(0).checked_map(|n| 10 / n);
    /// assert_eq!(result, Maybe::nothing());
    /// ```
    pub fn checked_map<R, F>(self, mapper: F) -> Maybe<R>
    where
        F: FnOnce(V) -> R,
    {
        match self {
            Self::Just(value) => capture("Maybe::checked_map", move || mapper(value))
                .map_or(Maybe::Nothing, Maybe::Just),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Apply `ap`: applies the function held by `other` to this value.
    ///
    /// Both must be `Just`; otherwise the result is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Maybe;
    ///
    /// let add_one = Maybe::just(|n: i32| n + 1);
    /// assert_eq!(Maybe::just(1).ap(add_one), Maybe::just(2));
    /// ```
    #[inline]
    pub fn ap<R, G>(self, other: Maybe<G>) -> Maybe<R>
    where
        G: FnOnce(V) -> R,
    {
        match (self, other) {
            (Self::Just(value), Maybe::Just(function)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }

    /// Chain `chain` (a.k.a. `bind`, `flat_map`).
    ///
    /// `Nothing` short-circuits without calling `mapper`.
    #[inline]
    pub fn chain<R, F>(self, mapper: F) -> Maybe<R>
    where
        F: FnOnce(V) -> Maybe<R>,
    {
        match self {
            Self::Just(value) => mapper(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Alias for [`chain`](Self::chain).
    #[inline]
    pub fn bind<R, F>(self, mapper: F) -> Maybe<R>
    where
        F: FnOnce(V) -> Maybe<R>,
    {
        self.chain(mapper)
    }

    /// Alias for [`chain`](Self::chain).
    #[inline]
    pub fn flat_map<R, F>(self, mapper: F) -> Maybe<R>
    where
        F: FnOnce(V) -> Maybe<R>,
    {
        self.chain(mapper)
    }

    // =========================================================================
    // Alt / Extend / Filter
    // =========================================================================

    /// Alt `alt`: returns `self` if it is a `Just`, otherwise `other`.
    #[inline]
    pub fn alt(self, other: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => other,
        }
    }

    /// Like [`alt`](Self::alt), producing the alternative lazily.
    #[inline]
    pub fn alt_with<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => supplier(),
        }
    }

    /// Alias for [`alt`](Self::alt).
    #[inline]
    pub fn coalesce(self, other: Self) -> Self {
        self.alt(other)
    }

    /// Extend `extend`: passes the whole container to `mapper` and wraps the
    /// result. `Nothing` stays `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Maybe;
    ///
    /// let described = Maybe::just(3).extend(|maybe| format!("{maybe}"));
    /// assert_eq!(described, Maybe::just("Just(3)".to_string()));
    /// ```
    pub fn extend<R, F>(self, mapper: F) -> Maybe<R>
    where
        F: FnOnce(Self) -> R,
    {
        match self {
            just @ Self::Just(_) => Maybe::Just(mapper(just)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps a `Just` only if `predicate` holds for its value.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    // =========================================================================
    // Foldable
    // =========================================================================

    /// Left-associative fold. `Nothing` returns `initial` unchanged.
    #[inline]
    pub fn fold_left<B, F>(self, initial: B, morphism: F) -> B
    where
        F: FnOnce(B, V) -> B,
    {
        match self {
            Self::Just(value) => morphism(initial, value),
            Self::Nothing => initial,
        }
    }

    /// Right-associative fold. `Nothing` returns `initial` unchanged.
    #[inline]
    pub fn fold_right<B, F>(self, initial: B, morphism: F) -> B
    where
        F: FnOnce(V, B) -> B,
    {
        match self {
            Self::Just(value) => morphism(value, initial),
            Self::Nothing => initial,
        }
    }

    /// Returns `mapper(value)` for a `Just`, otherwise `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Maybe;
    ///
    /// assert_eq!(Maybe::just("abc").maybe_map(0, str::len), 3);
    /// assert_eq!(Maybe::<&str>::nothing().maybe_map(0, str::len), 0);
    /// ```
    #[inline]
    pub fn maybe_map<R, F>(self, default: R, mapper: F) -> R
    where
        F: FnOnce(V) -> R,
    {
        match self {
            Self::Just(value) => mapper(value),
            Self::Nothing => default,
        }
    }

    // =========================================================================
    // Recovery and escape hatches
    // =========================================================================

    /// Replaces `Nothing` with `Just(value)`.
    #[inline]
    pub fn recover(self, value: V) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => Self::Just(value),
        }
    }

    /// Replaces `Nothing` with `Just(supplier())`.
    #[inline]
    pub fn recover_with<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => Self::Just(supplier()),
        }
    }

    /// Returns the value, or `other` for `Nothing`.
    #[inline]
    pub fn get_or_else(self, other: V) -> V {
        match self {
            Self::Just(value) => value,
            Self::Nothing => other,
        }
    }

    /// Returns the value, or the result of `supplier` for `Nothing`.
    #[inline]
    pub fn get_or_else_get<F>(self, supplier: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => supplier(),
        }
    }

    /// Returns the value, or the error built by `supplier` for `Nothing`.
    ///
    /// # Errors
    ///
    /// Returns `Err(supplier())` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Maybe;
    ///
    /// let missing: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(missing.get_or_else_throw(|| "missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn get_or_else_throw<E, F>(self, supplier: F) -> Result<V, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(supplier()),
        }
    }

    /// Returns the value held by a `Just`.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError`] if this is `Nothing`.
    pub fn from_just(self) -> Result<V, VariantError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(VariantError {
                container: "Maybe",
                operation: "from_just",
                expected: "Just",
                found: "Nothing",
            }),
        }
    }

    // =========================================================================
    // Side effects
    // =========================================================================

    /// Calls `consumer` with the value if this is a `Just`.
    pub fn if_just<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Just(value) = &self {
            consumer(value);
        }
        self
    }

    /// Calls `runnable` if this is `Nothing`.
    pub fn if_nothing<F>(self, runnable: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_nothing() {
            runnable();
        }
        self
    }

    /// Calls `runnable` for `Nothing` or `consumer` for a `Just`.
    pub fn tap<N, J>(self, runnable: N, consumer: J) -> Self
    where
        N: FnOnce(),
        J: FnOnce(&V),
    {
        self.if_nothing(runnable).if_just(consumer)
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Returns a one-element `Vec` for a `Just`, an empty one otherwise.
    pub fn to_list(self) -> Vec<V> {
        match self {
            Self::Just(value) => vec![value],
            Self::Nothing => Vec::new(),
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn to_option(self) -> Option<V> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

/// `Nothing`, without requiring `V: Default`.
impl<V> Default for Maybe<V> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<V: Hash> Hash for Maybe<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Just(value) => value.hash(state),
            Self::Nothing => 1_i32.hash(state),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Maybe<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<V: fmt::Display> fmt::Display for Maybe<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<V> IntoIterator for Maybe<V> {
    type Item = V;
    type IntoIter = std::option::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}
