//! The `maybe!` macro: do-notation for [`Optional`](super::Optional).
//!
//! `maybe!` lets a chain of [`bind`](super::bind) calls be written as a flat
//! sequence of steps. Every step that binds with `<=` runs only when the
//! previous steps produced values, so the whole block stops at the first
//! `Absent`.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind: take the value out of an `Optional`
//! - `let pattern = expression;` - Pure let binding
//! - `yield expression` - Final plain value, wrapped with [`of`](super::of)
//! - `expression` - Final expression, already an `Optional`
//!
//! `<-` is not a single token in `macro_rules!`, so `<=` stands in for it.
//!
//! # Examples
//!
//! ```rust
//! use optional_fp::maybe;
//! use optional_fp::optional::Optional;
//!
//! let result = maybe! {
//!     x <= Optional::Present(5);
//!     y <= Optional::Present(10);
//!     let z = x + y;
//!     yield z * 2
//! };
//! assert_eq!(result, Optional::Present(30));
//! ```

/// Do-notation over `Optional`, desugaring each `<=` step to `bind`.
///
/// # Examples
///
/// ```rust
/// use optional_fp::maybe;
/// use optional_fp::optional::Optional;
///
/// let result = maybe! {
///     x <= Optional::Present(5);
///     y <= Optional::Present(10);
///     Optional::Present(x + y)
/// };
/// assert_eq!(result, Optional::Present(15));
///
/// // Short-circuit on Absent
/// let result: Optional<i32> = maybe! {
///     x <= Optional::Present(5);
///     y <= Optional::<i32>::Absent;
///     Optional::Present(x + y)
/// };
/// assert_eq!(result, Optional::Absent);
/// ```
#[macro_export]
macro_rules! maybe {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    (yield $result:expr) => {
        $crate::optional::of($result)
    };

    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind: pattern <= optional; rest
    // ==========================================================================

    ($pattern:ident <= $optional:expr ; $($rest:tt)+) => {
        $crate::optional::bind(move |$pattern| {
            $crate::maybe!($($rest)+)
        }, $optional)
    };

    (($($pattern:tt)*) <= $optional:expr ; $($rest:tt)+) => {
        $crate::optional::bind(move |($($pattern)*)| {
            $crate::maybe!($($rest)+)
        }, $optional)
    };

    (_ <= $optional:expr ; $($rest:tt)+) => {
        $crate::optional::bind(move |_| {
            $crate::maybe!($($rest)+)
        }, $optional)
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::maybe!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::maybe!($($rest)+)
        }
    };
}
