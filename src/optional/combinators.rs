//! Free-function combinators over [`Optional`].
//!
//! The function argument comes first and the container last, so the
//! combinators read like the curried `map f opt` form and compose well
//! with [`pipe!`](crate::pipe) and partial application.
//!
//! | Combinator | Shape |
//! |---|---|
//! | [`map`] | `(T -> U, Optional<T>) -> Optional<U>` |
//! | [`of`] | `T -> Optional<T>` |
//! | [`apply`] | `(Optional<T -> U>, Optional<T>) -> Optional<U>` |
//! | [`bind`] | `(T -> Optional<U>, Optional<T>) -> Optional<U>` |
//! | [`lift2`] | `(T -> U -> V, Optional<T>, Optional<U>) -> Optional<V>` |
//!
//! [`mapping`] and [`binding`] fix the function argument ahead of time so a
//! step can be handed to [`pipe!`](crate::pipe).
//!
//! All of them are total. A caller-supplied function is invoked at most once
//! and never for an `Absent` input; if it panics, the panic reaches the caller
//! untouched.

use super::Optional;

// =============================================================================
// Core Combinators
// =============================================================================

/// Lifts an ordinary function into `Optional`.
///
/// Returns `Present(function(x))` for `Present(x)` and `Absent` otherwise.
/// `function` is not called for `Absent`.
///
/// # Laws
///
/// ```text
/// map(identity, opt) == opt
/// map(|x| g(f(x)), opt) == map(g, map(f, opt))
/// ```
///
/// # Examples
///
/// ```rust
/// use optional_fp::optional::{map, Optional};
///
/// assert_eq!(map(|x| x + 1, Optional::Present(1)), Optional::Present(2));
/// assert_eq!(map(|x: i32| x + 1, Optional::Absent), Optional::Absent);
/// ```
#[must_use]
#[inline]
pub fn map<T, U, F>(function: F, optional: Optional<T>) -> Optional<U>
where
    F: FnOnce(T) -> U,
{
    match optional {
        Optional::Present(value) => Optional::Present(function(value)),
        Optional::Absent => Optional::Absent,
    }
}

/// Wraps a bare value: always `Present(value)`.
///
/// Also known as `return` or `pure`.
///
/// # Examples
///
/// ```rust
/// use optional_fp::optional::{of, Optional};
///
/// assert_eq!(of("hello"), Optional::Present("hello"));
/// ```
#[must_use]
#[inline]
pub const fn of<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Applies a contained function to a contained argument.
///
/// The result is present only when both the function and the argument are.
/// Applying repeatedly to a curried function gives functions of any arity
/// the same all-or-nothing behaviour.
///
/// # Examples
///
/// ```rust
/// use optional_fp::optional::{apply, of, Optional};
///
/// let add = |x: i32| move |y: i32| x + y;
///
/// let sum = apply(apply(of(add), Optional::Present(1)), Optional::Present(1));
/// assert_eq!(sum, Optional::Present(2));
///
/// let missing = apply(apply(of(add), Optional::Absent), Optional::Present(1));
/// assert_eq!(missing, Optional::Absent);
/// ```
#[must_use]
#[inline]
pub fn apply<T, U, F>(function: Optional<F>, argument: Optional<T>) -> Optional<U>
where
    F: FnOnce(T) -> U,
{
    match (function, argument) {
        (Optional::Present(function), Optional::Present(value)) => {
            Optional::Present(function(value))
        }
        _ => Optional::Absent,
    }
}

/// Sequences a world-crossing function, flattening the result.
///
/// For `Present(x)` this returns `function(x)` as is, without wrapping it
/// again; for `Absent` it returns `Absent` and `function` is not called.
/// Chains of `bind` stop at the first `Absent`.
///
/// # Laws
///
/// ```text
/// bind(f, of(x)) == f(x)
/// bind(of, opt) == opt
/// bind(g, bind(f, opt)) == bind(|x| bind(g, f(x)), opt)
/// ```
///
/// # Examples
///
/// ```rust
/// use optional_fp::optional::{bind, Optional};
///
/// let non_zero = |i: i32| if i == 0 { Optional::Absent } else { Optional::Present(i) };
///
/// assert_eq!(bind(non_zero, Optional::Present(0)), Optional::Absent);
/// assert_eq!(bind(non_zero, Optional::Present(3)), Optional::Present(3));
/// ```
#[must_use]
#[inline]
pub fn bind<T, U, F>(function: F, optional: Optional<T>) -> Optional<U>
where
    F: FnOnce(T) -> Optional<U>,
{
    match optional {
        Optional::Present(value) => function(value),
        Optional::Absent => Optional::Absent,
    }
}

/// Applies a curried two-argument function across two `Optional` values.
///
/// Defined as `apply(map(function, first), second)`.
///
/// # Examples
///
/// ```rust
/// use optional_fp::optional::{lift2, Optional};
///
/// let add = |x: i32| move |y: i32| x + y;
///
/// assert_eq!(lift2(add, Optional::Present(1), Optional::Present(1)), Optional::Present(2));
/// assert_eq!(lift2(add, Optional::Present(1), Optional::Absent), Optional::Absent);
/// ```
#[must_use]
#[inline]
pub fn lift2<T, U, V, F, G>(function: F, first: Optional<T>, second: Optional<U>) -> Optional<V>
where
    F: FnOnce(T) -> G,
    G: FnOnce(U) -> V,
{
    apply(map(function, first), second)
}

// =============================================================================
// Derived Combinators
// =============================================================================

/// Like [`lift2`], but takes an ordinary two-argument function.
///
/// # Examples
///
/// ```rust
/// use optional_fp::optional::{lift2_with, Optional};
///
/// let total = lift2_with(std::ops::Add::add, Optional::Present(20), Optional::Present(22));
/// assert_eq!(total, Optional::Present(42));
/// ```
#[must_use]
#[inline]
pub fn lift2_with<T, U, V, F>(function: F, first: Optional<T>, second: Optional<U>) -> Optional<V>
where
    F: FnOnce(T, U) -> V,
{
    match (first, second) {
        (Optional::Present(first), Optional::Present(second)) => {
            Optional::Present(function(first, second))
        }
        _ => Optional::Absent,
    }
}

/// Applies a curried three-argument function across three `Optional` values.
///
/// # Examples
///
/// ```rust
/// use optional_fp::optional::{lift3, Optional};
///
/// let volume = |w: u32| move |h: u32| move |d: u32| w * h * d;
///
/// assert_eq!(
///     lift3(volume, Optional::Present(2), Optional::Present(3), Optional::Present(4)),
///     Optional::Present(24)
/// );
/// assert_eq!(
///     lift3(volume, Optional::Present(2), Optional::Absent, Optional::Present(4)),
///     Optional::Absent
/// );
/// ```
#[inline]
pub fn lift3<T, U, V, W, F, G, H>(
    function: F,
    first: Optional<T>,
    second: Optional<U>,
    third: Optional<V>,
) -> Optional<W>
where
    F: FnOnce(T) -> G,
    G: FnOnce(U) -> H,
    H: FnOnce(V) -> W,
{
    apply(apply(map(function, first), second), third)
}

/// Removes one level of nesting. Equivalent to `bind(identity, nested)`.
#[must_use]
#[inline]
pub fn flatten<T>(nested: Optional<Optional<T>>) -> Optional<T> {
    bind(|inner| inner, nested)
}

/// Composes two world-crossing functions left to right.
///
/// The returned function runs `first`, and only if it produced a value,
/// feeds that value to `second`.
///
/// # Examples
///
/// ```rust
/// use optional_fp::optional::{kleisli, Optional};
///
/// let parse = |text: &str| Optional::from(text.parse::<i32>().ok());
/// let reciprocal = |n: i32| if n == 0 { Optional::Absent } else { Optional::Present(100 / n) };
///
/// let parse_then_divide = kleisli(parse, reciprocal);
///
/// assert_eq!(parse_then_divide("4"), Optional::Present(25));
/// assert_eq!(parse_then_divide("0"), Optional::Absent);
/// assert_eq!(parse_then_divide("four"), Optional::Absent);
/// ```
#[must_use]
#[inline]
pub fn kleisli<T, U, V, F, G>(first: F, second: G) -> impl Fn(T) -> Optional<V>
where
    F: Fn(T) -> Optional<U>,
    G: Fn(U) -> Optional<V>,
{
    move |value| bind(&second, first(value))
}

/// Turns a sequence of `Optional` values into an `Optional` sequence.
///
/// Returns `Present` with every value in order when all elements are
/// present, or `Absent` as soon as one element is absent. Elements after
/// the first `Absent` are not pulled from the iterator.
///
/// # Examples
///
/// ```rust
/// use optional_fp::optional::{sequence, Optional};
///
/// let all = vec![Optional::Present(1), Optional::Present(2)];
/// assert_eq!(sequence(all), Optional::Present(vec![1, 2]));
///
/// let gap = vec![Optional::Present(1), Optional::Absent];
/// assert_eq!(sequence(gap), Optional::Absent);
/// ```
#[must_use]
pub fn sequence<T, I>(optionals: I) -> Optional<Vec<T>>
where
    I: IntoIterator<Item = Optional<T>>,
{
    let iterator = optionals.into_iter();
    let mut values = Vec::with_capacity(iterator.size_hint().0);
    for optional in iterator {
        match optional {
            Optional::Present(value) => values.push(value),
            Optional::Absent => return Optional::Absent,
        }
    }
    Optional::Present(values)
}

/// Maps a world-crossing function over a sequence and collects the results.
///
/// `function` is not called again after it first returns `Absent`.
///
/// # Examples
///
/// ```rust
/// use optional_fp::optional::{traverse, Optional};
///
/// let parse = |text: &str| Optional::from(text.parse::<i32>().ok());
///
/// assert_eq!(traverse(parse, ["1", "2", "3"]), Optional::Present(vec![1, 2, 3]));
/// assert_eq!(traverse(parse, ["1", "x", "3"]), Optional::Absent);
/// ```
#[must_use]
pub fn traverse<T, U, I, F>(function: F, values: I) -> Optional<Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Optional<U>,
{
    sequence(values.into_iter().map(function))
}

// =============================================================================
// Pipeline Adapters
// =============================================================================

/// Fixes the function argument of [`map`], leaving a step for [`pipe!`](crate::pipe).
///
/// # Examples
///
/// ```rust
/// use optional_fp::optional::{mapping, Optional};
///
/// let increment = mapping(|x: i32| x + 1);
/// assert_eq!(increment(Optional::Present(1)), Optional::Present(2));
/// ```
#[must_use]
#[inline]
pub fn mapping<T, U, F>(function: F) -> impl FnOnce(Optional<T>) -> Optional<U>
where
    F: FnOnce(T) -> U,
{
    move |optional| map(function, optional)
}

/// Fixes the function argument of [`bind`], leaving a step for [`pipe!`](crate::pipe).
#[must_use]
#[inline]
pub fn binding<T, U, F>(function: F) -> impl FnOnce(Optional<T>) -> Optional<U>
where
    F: FnOnce(T) -> Optional<U>,
{
    move |optional| bind(function, optional)
}
