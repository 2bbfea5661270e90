//! Validation type - a success-biased, failure-accumulating result.
//!
//! `Validation<F, S>` is either a `Success(S)` or a `Failure` holding a
//! non-empty, ordered [`Failures<F>`] sequence. The biased operations
//! (`map`, `chain`, `ap`) are fail-fast exactly like
//! [`Either`](super::Either); accumulation happens only through
//! [`concat`](Validation::concat), which merges the failures of independent
//! validations of the same value.
//!
//! # Examples
//!
//! ```rust
//! use biased::control::{Failures, Validation};
//!
//! fn non_empty(name: &str) -> Validation<&'static str, &str> {
//!     if name.is_empty() { Validation::fail("empty") } else { Validation::pass(name) }
//! }
//!
//! fn short(name: &str) -> Validation<&'static str, &str> {
//!     if name.len() > 3 { Validation::fail("too long") } else { Validation::pass(name) }
//! }
//!
//! assert_eq!(non_empty("bob").concat(short("bob")), Validation::pass("bob"));
//! assert_eq!(
//!     non_empty("").concat(short("").concat(Validation::fail("reserved"))),
//!     Validation::fail_all(Failures::new("empty", ["reserved"]))
//! );
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use super::attempt::capture;
use super::error::{ArgumentNullError, NullError, PanicError, VariantError};
use super::maybe::Maybe;

/// Failures kept inline before the tail spills to the heap.
const INLINE_FAILURES: usize = 4;

// =============================================================================
// Failures
// =============================================================================

/// A non-empty, ordered sequence of failures.
///
/// The first failure is stored apart from the rest, so an empty `Failures`
/// cannot be represented.
///
/// # Examples
///
/// ```rust
/// use biased::control::Failures;
///
/// let failures = Failures::new("e1", ["e2", "e3"]);
/// assert_eq!(*failures.first(), "e1");
/// assert_eq!(failures.len(), 3);
/// assert_eq!(failures.to_string(), "[e1, e2, e3]");
///
/// assert!(Failures::<&str>::try_from_vec(Vec::new()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Failures<F> {
    head: F,
    tail: SmallVec<[F; INLINE_FAILURES]>,
}

impl<F> Failures<F> {
    /// A sequence holding exactly one failure.
    #[inline]
    pub fn single(failure: F) -> Self {
        Self {
            head: failure,
            tail: SmallVec::new(),
        }
    }

    /// A sequence of `head` followed by `tail`.
    pub fn new<I>(head: F, tail: I) -> Self
    where
        I: IntoIterator<Item = F>,
    {
        Self {
            head,
            tail: tail.into_iter().collect(),
        }
    }

    /// Builds a sequence from a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentNullError`] for the `failures` parameter if the
    /// vector is empty.
    pub fn try_from_vec(failures: Vec<F>) -> Result<Self, ArgumentNullError> {
        Self::try_from_iter(failures)
    }

    /// Builds a sequence from any iterator.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentNullError`] for the `failures` parameter if the
    /// iterator yields nothing.
    pub fn try_from_iter<I>(failures: I) -> Result<Self, ArgumentNullError>
    where
        I: IntoIterator<Item = F>,
    {
        let mut failures = failures.into_iter();
        match failures.next() {
            Some(head) => Ok(Self::new(head, failures)),
            None => Err(ArgumentNullError::new("failures")),
        }
    }

    /// The first failure.
    #[inline]
    pub const fn first(&self) -> &F {
        &self.head
    }

    /// Consumes the sequence, keeping only the first failure.
    #[inline]
    pub fn into_first(self) -> F {
        self.head
    }

    /// Number of failures; always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the failures in order.
    pub fn iter(&self) -> std::iter::Chain<std::iter::Once<&F>, std::slice::Iter<'_, F>> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Converts into a `Vec`, preserving order.
    pub fn into_vec(self) -> Vec<F> {
        self.into_iter().collect()
    }

    /// Maps every failure, preserving order.
    pub fn map<G, M>(self, mut mapper: M) -> Failures<G>
    where
        M: FnMut(F) -> G,
    {
        let head = mapper(self.head);
        Failures {
            head,
            tail: self.tail.into_iter().map(mapper).collect(),
        }
    }

    /// Appends `other` after `self`.
    pub fn concat(mut self, other: Self) -> Self {
        self.tail.extend(other);
        self
    }
}

impl<F: Clone> Failures<F> {
    /// Copies the failures into a `Vec`.
    pub fn to_vec(&self) -> Vec<F> {
        self.iter().cloned().collect()
    }
}

impl<F> IntoIterator for Failures<F> {
    type Item = F;
    type IntoIter = std::iter::Chain<std::iter::Once<F>, smallvec::IntoIter<[F; INLINE_FAILURES]>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, F> IntoIterator for &'a Failures<F> {
    type Item = &'a F;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a F>, std::slice::Iter<'a, F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<F: Hash> Hash for Failures<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for failure in self {
            failure.hash(state);
        }
    }
}

impl<F: fmt::Debug> fmt::Debug for Failures<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<F: fmt::Display> fmt::Display for Failures<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (index, failure) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{failure}")?;
        }
        formatter.write_str("]")
    }
}

#[cfg(feature = "serde")]
impl<F: serde::Serialize> serde::Serialize for Failures<F> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, F: serde::Deserialize<'de>> serde::Deserialize<'de> for Failures<F> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let failures = Vec::<F>::deserialize(deserializer)?;
        Self::try_from_vec(failures).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Validation
// =============================================================================

/// A `Success(S)` or a `Failure` of one or more `F`.
///
/// `Success(s)` hashes exactly as `s`; `Failure(fs)` hashes as its failure
/// sequence.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<F, S> {
    /// One or more failures, in the order they were recorded.
    Failure(Failures<F>),
    /// A successful value.
    Success(S),
}

impl<F, S> Validation<F, S> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Success`.
    #[inline]
    pub const fn pass(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure` holding a single failure.
    #[inline]
    pub fn fail(failure: F) -> Self {
        Self::Failure(Failures::single(failure))
    }

    /// Creates a `Failure` holding `failures`.
    #[inline]
    pub const fn fail_all(failures: Failures<F>) -> Self {
        Self::Failure(failures)
    }

    /// Creates a `Failure` from a sequence of failures.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentNullError`] if the sequence is empty.
    pub fn try_fail_all<I>(failures: I) -> Result<Self, ArgumentNullError>
    where
        I: IntoIterator<Item = F>,
    {
        Failures::try_from_iter(failures).map(Self::Failure)
    }

    /// `Success(value)` when present, otherwise `Failure(failure)`.
    #[inline]
    pub fn of(failure: F, value: Option<S>) -> Self {
        value.map_or_else(|| Self::fail(failure), Self::Success)
    }

    /// `Success(value)` when present, otherwise `Failure(failures)`.
    #[inline]
    pub fn of_all(failures: Failures<F>, value: Option<S>) -> Self {
        value.map_or(Self::Failure(failures), Self::Success)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value, or `None` for a `Failure`.
    #[inline]
    pub const fn get_success(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure sequence, or `None` for a `Success`.
    #[inline]
    pub const fn get_failures(&self) -> Option<&Failures<F>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failures) => Some(failures),
        }
    }

    // =========================================================================
    // Functor / Apply / Chain
    // =========================================================================

    /// Functor `map` over the success value.
    #[inline]
    pub fn map<T, M>(self, mapper: M) -> Validation<F, T>
    where
        M: FnOnce(S) -> T,
    {
        match self {
            Self::Success(value) => Validation::Success(mapper(value)),
            Self::Failure(failures) => Validation::Failure(failures),
        }
    }

    /// Apply `ap`, fail-fast.
    ///
    /// If `self` is a `Failure`, its failures win; otherwise a `Failure` in
    /// `other` is returned. Failures are never merged here; use
    /// [`concat`](Self::concat) for that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Validation;
    ///
    /// let this: Validation<&str, i32> = Validation::fail("L");
    /// let function: Validation<&str, fn(i32) -> i32> = Validation::fail("R");
    /// assert_eq!(this.ap(function), Validation::fail("L"));
    /// ```
    #[inline]
    pub fn ap<T, G>(self, other: Validation<F, G>) -> Validation<F, T>
    where
        G: FnOnce(S) -> T,
    {
        match (self, other) {
            (Self::Failure(failures), _) | (Self::Success(_), Validation::Failure(failures)) => {
                Validation::Failure(failures)
            }
            (Self::Success(value), Validation::Success(function)) => {
                Validation::Success(function(value))
            }
        }
    }

    /// Chain `chain` (a.k.a. `bind`, `flat_map`). A `Failure` is propagated
    /// unchanged without calling `mapper`.
    #[inline]
    pub fn chain<T, M>(self, mapper: M) -> Validation<F, T>
    where
        M: FnOnce(S) -> Validation<F, T>,
    {
        match self {
            Self::Success(value) => mapper(value),
            Self::Failure(failures) => Validation::Failure(failures),
        }
    }

    /// Alias for [`chain`](Self::chain).
    #[inline]
    pub fn bind<T, M>(self, mapper: M) -> Validation<F, T>
    where
        M: FnOnce(S) -> Validation<F, T>,
    {
        self.chain(mapper)
    }

    /// Alias for [`chain`](Self::chain).
    #[inline]
    pub fn flat_map<T, M>(self, mapper: M) -> Validation<F, T>
    where
        M: FnOnce(S) -> Validation<F, T>,
    {
        self.chain(mapper)
    }

    // =========================================================================
    // Alt / Semigroup / Extend
    // =========================================================================

    /// Alt `alt`: returns `self` if it is a `Success`, otherwise `other`.
    #[inline]
    pub fn alt(self, other: Self) -> Self {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => other,
        }
    }

    /// Alias for [`alt`](Self::alt).
    #[inline]
    pub fn coalesce(self, other: Self) -> Self {
        self.alt(other)
    }

    /// Like [`alt`](Self::alt), producing the alternative lazily.
    #[inline]
    pub fn alt_with<M>(self, supplier: M) -> Self
    where
        M: FnOnce() -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => supplier(),
        }
    }

    /// Semigroup `concat`, the one accumulating operation.
    ///
    /// Two successes keep the left success; two failures concatenate in
    /// order; a mix keeps the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::{Failures, Validation};
    ///
    /// let both: Validation<&str, bool> = Validation::fail("e1").concat(Validation::fail("e2"));
    /// assert_eq!(both, Validation::fail_all(Failures::new("e1", ["e2"])));
    ///
    /// let mixed: Validation<&str, bool> = Validation::pass(true).concat(Validation::fail("e"));
    /// assert_eq!(mixed, Validation::fail("e"));
    ///
    /// let successes: Validation<&str, bool> = Validation::pass(true).concat(Validation::pass(false));
    /// assert_eq!(successes, Validation::pass(true));
    /// ```
    pub fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Self::Failure(this), Self::Failure(that)) => Self::Failure(this.concat(that)),
            (this @ Self::Failure(_), Self::Success(_)) | (this @ Self::Success(_), Self::Success(_)) => this,
            (Self::Success(_), that @ Self::Failure(_)) => that,
        }
    }

    /// [`concat`](Self::concat) with a possibly absent right operand; an
    /// absent operand leaves `self` unchanged.
    #[inline]
    pub fn concat_nullable(self, other: Option<Self>) -> Self {
        match other {
            Some(other) => self.concat(other),
            None => self,
        }
    }

    /// Extend `extend`: passes the whole validation to `mapper` when it is a
    /// `Success`. A `Failure` passes through.
    pub fn extend<T, M>(self, mapper: M) -> Validation<F, T>
    where
        M: FnOnce(Self) -> T,
    {
        match self {
            success @ Self::Success(_) => Validation::Success(mapper(success)),
            Self::Failure(failures) => Validation::Failure(failures),
        }
    }

    // =========================================================================
    // Bifunctor
    // =========================================================================

    /// Maps the failure sequence or the success value.
    ///
    /// The failure mapper receives the whole sequence, so it may reshape it.
    /// This is why `Validation` does not implement the per-element
    /// [`Bifunctor`](crate::typeclass::Bifunctor) trait.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::{Failures, Validation};
    ///
    /// let failed: Validation<&str, i32> = Validation::fail_all(Failures::new("a", ["bc"]));
    /// let lengths = failed.bimap(|failures| failures.map(str::len), |n| n + 1);
    /// assert_eq!(lengths, Validation::fail_all(Failures::new(1, [2])));
    /// ```
    #[inline]
    pub fn bimap<G, T, FM, SM>(self, failure_mapper: FM, success_mapper: SM) -> Validation<G, T>
    where
        FM: FnOnce(Failures<F>) -> Failures<G>,
        SM: FnOnce(S) -> T,
    {
        match self {
            Self::Success(value) => Validation::Success(success_mapper(value)),
            Self::Failure(failures) => Validation::Failure(failure_mapper(failures)),
        }
    }

    /// Bifunctor `first`: maps the failure sequence.
    #[inline]
    pub fn first<G, FM>(self, mapper: FM) -> Validation<G, S>
    where
        FM: FnOnce(Failures<F>) -> Failures<G>,
    {
        self.bimap(mapper, crate::compose::identity)
    }

    /// Alias for [`first`](Self::first).
    #[inline]
    pub fn failure_map<G, FM>(self, mapper: FM) -> Validation<G, S>
    where
        FM: FnOnce(Failures<F>) -> Failures<G>,
    {
        self.first(mapper)
    }

    /// Bifunctor `second`: maps the success value.
    #[inline]
    pub fn second<T, SM>(self, mapper: SM) -> Validation<F, T>
    where
        SM: FnOnce(S) -> T,
    {
        self.bimap(crate::compose::identity, mapper)
    }

    /// Alias for [`second`](Self::second).
    #[inline]
    pub fn success_map<T, SM>(self, mapper: SM) -> Validation<F, T>
    where
        SM: FnOnce(S) -> T,
    {
        self.second(mapper)
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps the success value only if `predicate` holds. A `Failure`
    /// yields `Nothing`.
    pub fn filter<P>(self, predicate: P) -> Maybe<S>
    where
        P: FnOnce(&S) -> bool,
    {
        match self {
            Self::Success(value) => Maybe::just(value).filter(predicate),
            Self::Failure(_) => Maybe::Nothing,
        }
    }

    /// Keeps a `Success` only if `predicate` holds, turning it into
    /// `Failure(failure)` otherwise. A `Failure` is returned unchanged.
    pub fn filter_or<P>(self, predicate: P, failure: F) -> Self
    where
        P: FnOnce(&S) -> bool,
    {
        self.filter_or_else(predicate, move || failure)
    }

    /// Like [`filter_or`](Self::filter_or), building the failure lazily.
    pub fn filter_or_else<P, M>(self, predicate: P, supplier: M) -> Self
    where
        P: FnOnce(&S) -> bool,
        M: FnOnce() -> F,
    {
        match self {
            Self::Success(value) if !predicate(&value) => Self::fail(supplier()),
            other => other,
        }
    }

    // =========================================================================
    // Foldable
    // =========================================================================

    /// Eliminates the validation by applying one of two functions.
    #[inline]
    pub fn fold<T, FM, SM>(self, failure_mapper: FM, success_mapper: SM) -> T
    where
        FM: FnOnce(Failures<F>) -> T,
        SM: FnOnce(S) -> T,
    {
        match self {
            Self::Success(value) => success_mapper(value),
            Self::Failure(failures) => failure_mapper(failures),
        }
    }

    /// Alias for [`fold`](Self::fold).
    #[inline]
    pub fn reduce<T, FM, SM>(self, failure_mapper: FM, success_mapper: SM) -> T
    where
        FM: FnOnce(Failures<F>) -> T,
        SM: FnOnce(S) -> T,
    {
        self.fold(failure_mapper, success_mapper)
    }

    /// Left-associative fold over the success value. A `Failure` returns
    /// `initial`.
    #[inline]
    pub fn fold_left<B, M>(self, initial: B, morphism: M) -> B
    where
        M: FnOnce(B, S) -> B,
    {
        match self {
            Self::Success(value) => morphism(initial, value),
            Self::Failure(_) => initial,
        }
    }

    /// Right-associative fold over the success value. A `Failure` returns
    /// `initial`.
    #[inline]
    pub fn fold_right<B, M>(self, initial: B, morphism: M) -> B
    where
        M: FnOnce(S, B) -> B,
    {
        match self {
            Self::Success(value) => morphism(value, initial),
            Self::Failure(_) => initial,
        }
    }

    // =========================================================================
    // Recovery and escape hatches
    // =========================================================================

    /// Replaces a `Failure` with `Success(value)`.
    #[inline]
    pub fn recover(self, value: S) -> Self {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => Self::Success(value),
        }
    }

    /// Replaces a `Failure` with `Success(supplier())`.
    #[inline]
    pub fn recover_with<M>(self, supplier: M) -> Self
    where
        M: FnOnce() -> S,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => Self::Success(supplier()),
        }
    }

    /// Returns the success value, or `other` for a `Failure`.
    #[inline]
    pub fn get_or_else(self, other: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => other,
        }
    }

    /// Returns the success value, or one computed from the failures.
    #[inline]
    pub fn get_or_else_get<M>(self, mapper: M) -> S
    where
        M: FnOnce(Failures<F>) -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(failures) => mapper(failures),
        }
    }

    /// Returns the success value, or the result of `supplier`.
    #[inline]
    pub fn get_or_else_get_with<M>(self, supplier: M) -> S
    where
        M: FnOnce() -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => supplier(),
        }
    }

    /// Returns the success value, or an error built from the failures.
    ///
    /// # Errors
    ///
    /// Returns `Err(mapper(failures))` if this is a `Failure`.
    #[inline]
    pub fn get_or_else_throw<E, M>(self, mapper: M) -> Result<S, E>
    where
        M: FnOnce(Failures<F>) -> E,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failures) => Err(mapper(failures)),
        }
    }

    /// Returns the success value.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError`] if this is a `Failure`.
    pub fn from_success(self) -> Result<S, VariantError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(VariantError {
                container: "Validation",
                operation: "from_success",
                expected: "Success",
                found: "Failure",
            }),
        }
    }

    /// Returns the failure sequence.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError`] if this is a `Success`.
    pub fn from_failure(self) -> Result<Failures<F>, VariantError> {
        match self {
            Self::Success(_) => Err(VariantError {
                container: "Validation",
                operation: "from_failure",
                expected: "Failure",
                found: "Success",
            }),
            Self::Failure(failures) => Ok(failures),
        }
    }

    // =========================================================================
    // Side effects
    // =========================================================================

    /// Calls `consumer` with the failures if this is a `Failure`.
    pub fn if_failure<M>(self, consumer: M) -> Self
    where
        M: FnOnce(&Failures<F>),
    {
        if let Self::Failure(failures) = &self {
            consumer(failures);
        }
        self
    }

    /// Calls `consumer` with the success value if this is a `Success`.
    pub fn if_success<M>(self, consumer: M) -> Self
    where
        M: FnOnce(&S),
    {
        if let Self::Success(value) = &self {
            consumer(value);
        }
        self
    }

    /// Calls whichever consumer matches the populated side.
    pub fn tap<FC, SC>(self, failure_consumer: FC, success_consumer: SC) -> Self
    where
        FC: FnOnce(&Failures<F>),
        SC: FnOnce(&S),
    {
        self.if_failure(failure_consumer).if_success(success_consumer)
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Returns a one-element `Vec` for a `Success`, an empty one otherwise.
    pub fn to_list(self) -> Vec<S> {
        match self {
            Self::Success(value) => vec![value],
            Self::Failure(_) => Vec::new(),
        }
    }

    /// Converts into a `Result` carrying every failure.
    #[inline]
    pub fn into_result(self) -> Result<S, Failures<F>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failures) => Err(failures),
        }
    }
}

impl<F: Clone, S: Clone> Validation<F, S> {
    /// [`concat`](Self::concat) by reference. Concatenating a validation
    /// with itself (the same instance) returns a copy of it unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::{Failures, Validation};
    ///
    /// let failed: Validation<&str, i32> = Validation::fail("e");
    /// assert_eq!(failed.concat_ref(&failed), Validation::fail("e"));
    ///
    /// let other: Validation<&str, i32> = Validation::fail("e");
    /// assert_eq!(failed.concat_ref(&other), Validation::fail_all(Failures::new("e", ["e"])));
    /// ```
    pub fn concat_ref(&self, other: &Self) -> Self {
        if std::ptr::eq(self, other) {
            self.clone()
        } else {
            self.clone().concat(other.clone())
        }
    }
}

// =============================================================================
// Constructors that synthesize their own failure
// =============================================================================

impl<S> Validation<NullError, S> {
    /// `Success(value)` when present, `Failure(NullError::value())`
    /// otherwise.
    #[inline]
    pub fn of_nullable(value: Option<S>) -> Self {
        Self::of(NullError::value(), value)
    }

    /// `Success` of the first element, or `Failure(NullError::empty_list())`
    /// for an empty sequence.
    pub fn from_first<I>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self::of(NullError::empty_list(), values.into_iter().next())
    }

    /// Like [`from_first`](Self::from_first), with
    /// `Failure(NullError::null_list())` for an absent sequence.
    pub fn from_nullable_first<I>(values: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        values.map_or_else(|| Self::fail(NullError::null_list()), Self::from_first)
    }
}

impl<S> Validation<PanicError, S> {
    /// Runs `supplier`, capturing a panic as a single `PanicError` failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use biased::control::Validation;
    ///
    /// let failed: Validation<_, i32> = Validation::attempt(|| panic!("bad input"));
    /// assert_eq!(failed.get_failures().map(|failures| failures.first().message()), Some("bad input"));
    /// ```
    pub fn attempt<M>(supplier: M) -> Self
    where
        M: FnOnce() -> S,
    {
        match capture("Validation::attempt", supplier) {
            Ok(value) => Self::Success(value),
            Err(error) => Self::fail(error),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<F: Hash, S: Hash> Hash for Validation<F, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Success(value) => value.hash(state),
            Self::Failure(failures) => failures.hash(state),
        }
    }
}

impl<F: fmt::Debug, S: fmt::Debug> fmt::Debug for Validation<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(failures) => formatter.debug_tuple("Failure").field(failures).finish(),
        }
    }
}

impl<F: fmt::Display, S: fmt::Display> fmt::Display for Validation<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(failures) => write!(formatter, "Failure({failures})"),
        }
    }
}

impl<F, S> From<Result<S, Failures<F>>> for Validation<F, S> {
    fn from(result: Result<S, Failures<F>>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failures) => Self::Failure(failures),
        }
    }
}

impl<F, S> From<Validation<F, S>> for Result<S, Failures<F>> {
    fn from(validation: Validation<F, S>) -> Self {
        validation.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_failures_concat_preserves_order() {
        let left = Failures::new(1, [2]);
        let right = Failures::new(3, [4, 5, 6, 7]);
        assert_eq!(left.concat(right).into_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[rstest]
    fn test_failures_try_from_empty_names_parameter() {
        let error = Failures::<i32>::try_from_iter(std::iter::empty()).unwrap_err();
        assert_eq!(error.parameter, "failures");
    }

    #[rstest]
    fn test_failures_display_and_debug() {
        let failures = Failures::new("a", ["b"]);
        assert_eq!(failures.to_string(), "[a, b]");
        assert_eq!(format!("{failures:?}"), "[\"a\", \"b\"]");
    }

    #[rstest]
    fn test_failures_map_keeps_length() {
        let failures = Failures::new("a", ["bb", "ccc"]).map(str::len);
        assert_eq!(failures.to_vec(), vec![1, 2, 3]);
        assert_eq!(failures.len(), 3);
        assert!(!failures.is_empty());
    }

    #[rstest]
    #[case(Validation::fail("e1"), Validation::fail("e2"), Validation::fail_all(Failures::new("e1", ["e2"])))]
    #[case(Validation::pass(true), Validation::fail("e"), Validation::fail("e"))]
    #[case(Validation::fail("e"), Validation::pass(true), Validation::fail("e"))]
    #[case(Validation::pass(true), Validation::pass(false), Validation::pass(true))]
    fn test_concat_priority(
        #[case] this: Validation<&'static str, bool>,
        #[case] other: Validation<&'static str, bool>,
        #[case] expected: Validation<&'static str, bool>,
    ) {
        assert_eq!(this.concat(other), expected);
    }

    #[rstest]
    fn test_concat_nullable_none_is_identity() {
        let this: Validation<&str, i32> = Validation::fail("e");
        assert_eq!(this.clone().concat_nullable(None), this);
    }

    #[rstest]
    fn test_ap_prefers_own_failures() {
        let this: Validation<&str, i32> = Validation::fail("L");
        let other: Validation<&str, fn(i32) -> i32> = Validation::fail("R");
        assert_eq!(this.ap(other), Validation::fail("L"));
    }

    #[rstest]
    fn test_from_failure_on_success_reports_variant() {
        let success: Validation<&str, i32> = Validation::pass(1);
        let error = success.from_failure().unwrap_err();
        assert_eq!(error.expected, "Failure");
        assert_eq!(error.found, "Success");
    }

    #[rstest]
    fn test_filter_or_else_on_failure_keeps_failures() {
        let failed: Validation<&str, i32> = Validation::fail("first");
        assert_eq!(failed.filter_or_else(|_| false, || "second"), Validation::fail("first"));
    }

    #[rstest]
    fn test_display() {
        let failed: Validation<&str, i32> = Validation::fail_all(Failures::new("a", ["b"]));
        assert_eq!(failed.to_string(), "Failure([a, b])");
        assert_eq!(Validation::<&str, i32>::pass(3).to_string(), "Success(3)");
    }
}
