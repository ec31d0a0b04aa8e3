//! Type class traits for functional programming abstractions.
//!
//! The free functions in [`optional`](crate::optional) are the primary API.
//! This module offers the same operations in method form, as the classic
//! type-class hierarchy:
//!
//! - [`Functor`]: mapping over the contained value (`fmap`)
//! - [`Applicative`]: lifting values and combining contexts (`pure`, `apply`, `map2`)
//! - [`Monad`]: sequencing dependent computations (`flat_map`)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] emulates them
//! with Generic Associated Types so the traits can name "the same container
//! around a different type".
//!
//! # Examples
//!
//! ```rust
//! use optional_fp::optional::Optional;
//! use optional_fp::typeclass::{Applicative, Functor, Monad};
//!
//! let total = Optional::Present(2)
//!     .fmap(|n| n * 10)
//!     .map2(Optional::Present(1), |a, b| a + b)
//!     .flat_map(|n| if n > 20 { Optional::Present(n) } else { Optional::Absent });
//! assert_eq!(total, Optional::Present(21));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
