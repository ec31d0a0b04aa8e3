//! Small combinators that show up around `Optional` pipelines.
//!
//! - [`identity`]: the I combinator, the unit of composition and of `map`
//! - [`constant`]: the K combinator, ignores its input
//! - [`flip`]: the C combinator, swaps the two arguments of a function

/// Returns the value unchanged.
///
/// `map(identity, opt) == opt` is the functor identity law, and
/// `bind(identity, nested)` flattens one level of nesting.
///
/// # Examples
///
/// ```
/// use optional_fp::compose::identity;
/// use optional_fp::optional::{bind, map, Optional};
///
/// assert_eq!(map(identity, Optional::Present(3)), Optional::Present(3));
///
/// let nested = Optional::Present(Optional::Present("x"));
/// assert_eq!(bind(identity, nested), Optional::Present("x"));
/// ```
#[must_use]
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use optional_fp::compose::constant;
/// use optional_fp::optional::{map, Optional};
///
/// assert_eq!(map(constant::<_, i32>("seen"), Optional::Present(1)), Optional::Present("seen"));
/// assert_eq!(map(constant::<_, i32>("seen"), Optional::Absent), Optional::Absent);
/// ```
#[must_use]
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function: `flip(f)(b, a) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use optional_fp::compose::flip;
/// use optional_fp::optional::{lift2_with, Optional};
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let result = lift2_with(flip(subtract), Optional::Present(3), Optional::Present(10));
/// assert_eq!(result, Optional::Present(7));
/// ```
#[must_use]
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Marker type behind the [`__`] constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// Placeholder token for [`partial!`](crate::partial).
///
/// The macro matches `__` literally, so this constant must not be imported
/// where `partial!` is used. A single `_` cannot be matched by `macro_rules!`.
///
/// # Examples
///
/// ```
/// use optional_fp::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_to_ten = partial!(add, __, 10);
/// assert_eq!(add_to_ten(3), 13);
/// ```
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;
