//! The canonical optional-value type and its combinators.
//!
//! This module provides:
//!
//! - [`Optional`]: a value that is either `Present(T)` or `Absent`
//! - [`map`], [`of`], [`apply`], [`bind`], [`lift2`]: the core combinators
//! - [`lift2_with`], [`lift3`], [`flatten`], [`kleisli`], [`sequence`],
//!   [`traverse`]: combinators derived from the core
//! - [`mapping`], [`binding`]: `map` and `bind` with the function fixed, for pipelines
//! - [`maybe!`](crate::maybe): do-notation built on [`bind`]
//! - [`AbsentValue`]: the error for demanding a value from `Absent`
//!
//! Absence is ordinary data here. None of the combinators can fail; they
//! return `Absent` instead of calling the supplied function.
//!
//! # Examples
//!
//! ## Functor: lifting a plain function
//!
//! ```rust
//! use optional_fp::optional::{map, Optional};
//!
//! assert_eq!(map(|x| x + 1, Optional::Present(1)), Optional::Present(2));
//! ```
//!
//! ## Applicative: functions of several arguments
//!
//! ```rust
//! use optional_fp::optional::{apply, of, Optional};
//!
//! let add = |x: i32| move |y: i32| x + y;
//! let sum = apply(apply(of(add), Optional::Present(1)), Optional::Present(1));
//! assert_eq!(sum, Optional::Present(2));
//! ```
//!
//! ## Monad: chaining steps that may produce nothing
//!
//! ```rust
//! use optional_fp::optional::{bind, Optional};
//!
//! fn parse(text: &str) -> Optional<i32> {
//!     text.parse::<i32>().ok().into()
//! }
//!
//! fn positive(n: i32) -> Optional<i32> {
//!     if n > 0 { Optional::Present(n) } else { Optional::Absent }
//! }
//!
//! assert_eq!(bind(positive, parse("42")), Optional::Present(42));
//! assert_eq!(bind(positive, parse("-1")), Optional::Absent);
//! assert_eq!(bind(positive, parse("?")), Optional::Absent);
//! ```

mod combinators;
mod error;
mod maybe_macro;
mod value;

pub use combinators::{
    apply, bind, binding, flatten, kleisli, lift2, lift2_with, lift3, map, mapping, of, sequence,
    traverse,
};
pub use error::AbsentValue;
pub use value::Optional;

pub use crate::maybe;
