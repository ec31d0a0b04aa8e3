//! Function composition utilities.
//!
//! The combinators in [`optional`](crate::optional) take the function first
//! and the container last. The macros here build those function arguments
//! out of ordinary Rust functions.
//!
//! - [`compose!`]: right-to-left composition, `compose!(f, g)(x) == f(g(x))`
//! - [`pipe!`]: left-to-right data flow, `pipe!(x, f, g) == g(f(x))`
//! - [`partial!`]: partial application with the `__` placeholder
//! - [`curry2!`] and [`curry3!`]: curried forms for [`lift2`](crate::optional::lift2)
//!   and [`apply`](crate::optional::apply)
//!
//! Helper functions: [`identity`], [`constant`] and [`flip`].
//!
//! # Examples
//!
//! ```
//! use optional_fp::{compose, curry2, partial, pipe};
//! use optional_fp::optional::{lift2, mapping, Optional};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // Composition
//! assert_eq!(compose!(double, partial!(add, 1, __))(4), 10);
//!
//! // Pipeline over an Optional
//! assert_eq!(pipe!(Optional::Present(4), mapping(double)), Optional::Present(8));
//!
//! // Currying for lift2
//! assert_eq!(
//!     lift2(curry2!(add), Optional::Present(2), Optional::Present(3)),
//!     Optional::Present(5)
//! );
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Double flip**: `flip(flip(f)) == f`

mod compose_macro;
mod curry_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use utils::{__, Placeholder, constant, flip, identity};

pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::partial;
pub use crate::pipe;
