//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, which lets each step
//! decide the next one from the previous result. For [`Optional`] this is the
//! method form of [`optional::bind`]: a step that produces `Absent` ends the
//! chain.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optional_fp::optional::Optional;
//! use optional_fp::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Optional<i32> {
//!     Optional::from(text.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Optional::Present("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Optional::Present(n * 2));
//! assert_eq!(result, Optional::Present(84));
//! ```

use super::applicative::Applicative;
use crate::optional::{self, Optional};

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    /// use optional_fp::typeclass::Monad;
    ///
    /// let doubled = Optional::Present(5).flat_map(|n| Optional::Present(n * 2));
    /// assert_eq!(doubled, Optional::Present(10));
    ///
    /// let rejected = Optional::Present(5).flat_map(|n| {
    ///     if n > 10 { Optional::Present(n) } else { Optional::Absent }
    /// });
    /// assert_eq!(rejected, Optional::Absent);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`, following `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// If `self` is `Absent` the result is `Absent` and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    /// use optional_fp::typeclass::Monad;
    ///
    /// assert_eq!(
    ///     Optional::Present(5).then(Optional::Present("hello")),
    ///     Optional::Present("hello")
    /// );
    /// assert_eq!(Optional::<i32>::Absent.then(Optional::Present("hello")), Optional::Absent);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        optional::bind(function, self)
    }
}
