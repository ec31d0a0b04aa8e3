//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>`
//! directly. [`TypeConstructor`] works around this with a GAT: a type names
//! its current parameter (`Inner`) and how to rebuild itself around another
//! one (`WithType<B>`). [`Functor`](super::Functor),
//! [`Applicative`](super::Applicative) and [`Monad`](super::Monad) are all
//! expressed in terms of it.
//!
//! # Example
//!
//! ```rust
//! use optional_fp::optional::Optional;
//! use optional_fp::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Optional<String> = reset(Optional::Present(42));
//! assert_eq!(emptied, Optional::Absent);
//! ```

use crate::optional::Optional;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: the type the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Optional<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The bound keeps the result a type constructor too, so
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}
