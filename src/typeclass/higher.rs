//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] names the type currently held (`Inner`) and the same
//! constructor applied to another type (`WithType<B>`), which is enough to
//! state `Functor`, `Apply` and `Chain` once for all three containers.
//!
//! For the two-parameter containers, the biased parameter is the one that
//! varies: `Either<L, R>` abstracts over `R`, `Validation<F, S>` over `S`.
//!
//! # Example
//!
//! ```rust
//! use biased::control::{Either, Maybe};
//! use biased::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let cleared: Maybe<String> = reset(Maybe::just(42));
//! assert_eq!(cleared, Maybe::nothing());
//! ```

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(feature = "control")]
mod containers {
    use super::TypeConstructor;
    use crate::control::{Either, Maybe, Validation};

    impl<V> TypeConstructor for Maybe<V> {
        type Inner = V;
        type WithType<B> = Maybe<B>;
    }

    impl<L, R> TypeConstructor for Either<L, R> {
        type Inner = R;
        type WithType<B> = Either<L, B>;
    }

    impl<F, S> TypeConstructor for Validation<F, S> {
        type Inner = S;
        type WithType<B> = Validation<F, B>;
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Either, Maybe, Validation};

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn either_varies_the_right_parameter() {
        fn assert_with_type<L, R, B>()
        where
            Either<L, R>: TypeConstructor<Inner = R, WithType<B> = Either<L, B>>,
        {
        }

        assert_with_type::<String, i32, bool>();
        assert_with_type::<(), Vec<u8>, String>();
    }

    #[test]
    fn validation_varies_the_success_parameter() {
        fn assert_with_type<F, S, B>()
        where
            Validation<F, S>: TypeConstructor<Inner = S, WithType<B> = Validation<F, B>>,
        {
        }

        assert_with_type::<&str, i32, char>();
    }

    #[test]
    fn with_type_round_trips_to_self() {
        fn same<T, I>()
        where
            T: TypeConstructor<Inner = I, WithType<I> = T>,
        {
        }

        same::<Maybe<String>, String>();
        same::<Either<u8, i64>, i64>();
        same::<Validation<String, u32>, u32>();
    }
}
