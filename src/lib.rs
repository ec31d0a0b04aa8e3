//! # optional-fp
//!
//! An explicit optional-value type for Rust, with the functor, applicative
//! and monad operations that make "no value" an ordinary part of the data
//! flow instead of a special case.
//!
//! ## Overview
//!
//! - **Optional**: [`Optional<T>`](optional::Optional) is either `Present(T)`
//!   or `Absent`. The free functions [`map`](optional::map),
//!   [`of`](optional::of), [`apply`](optional::apply),
//!   [`bind`](optional::bind) and [`lift2`](optional::lift2) move ordinary
//!   functions into that world.
//! - **Type Classes**: `Functor`, `Applicative` and `Monad` in method form.
//! - **Function Composition**: `compose!`, `pipe!`, `partial!`, `curry2!`,
//!   `curry3!` for building the functions the combinators take.
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits (default)
//! - `compose`: function composition utilities (default)
//! - `serde`: `Serialize`/`Deserialize` for `Optional`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use optional_fp::prelude::*;
//!
//! let add = |x: i32| move |y: i32| x + y;
//!
//! assert_eq!(map(|x| x + 1, Optional::Present(1)), Optional::Present(2));
//! assert_eq!(lift2(add, Optional::Present(1), Optional::Absent), Optional::Absent);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the [`optional`] module and every enabled feature module.
///
/// ```rust
/// use optional_fp::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optional::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;
