//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - Lifting a plain value into the context (`pure`, the method form of
//!   [`optional::of`])
//! - Combining several independent values (`map2`, `map3`, `product`)
//! - Applying a contained function to a contained value (`apply`)
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optional_fp::optional::Optional;
//! use optional_fp::typeclass::Applicative;
//!
//! let x: Optional<i32> = <Optional<()>>::pure(42);
//! assert_eq!(x, Optional::Present(42));
//!
//! let sum = Optional::Present(1).map2(Optional::Present(2), |x, y| x + y);
//! assert_eq!(sum, Optional::Present(3));
//!
//! assert_eq!(
//!     Optional::Present(1).product(Optional::Present("hello")),
//!     Optional::Present((1, "hello"))
//! );
//! ```

use super::functor::Functor;
use crate::optional::{self, Optional};

/// A type class for types that support lifting values and combining contexts.
///
/// For `Optional`, every combination is all-or-nothing: the result is
/// present only if every input is present.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    /// use optional_fp::typeclass::Applicative;
    ///
    /// let x: Optional<i32> = <Optional<()>>::pure(42);
    /// assert_eq!(x, Optional::Present(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    /// use optional_fp::typeclass::Applicative;
    ///
    /// let sum = Optional::Present(1).map2(Optional::Present(2), |x, y| x + y);
    /// assert_eq!(sum, Optional::Present(3));
    ///
    /// let missing = Optional::Present(1).map2(Optional::<i32>::Absent, |x, y| x + y);
    /// assert_eq!(missing, Optional::Absent);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two applicatives, keeping the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    /// use optional_fp::typeclass::Applicative;
    ///
    /// assert_eq!(Optional::Present(1).product_left(Optional::Present(2)), Optional::Present(1));
    /// assert_eq!(Optional::Present(1).product_left(Optional::<i32>::Absent), Optional::Absent);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two applicatives, keeping the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// The method form of [`optional::apply`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    /// use optional_fp::typeclass::Applicative;
    ///
    /// let function: Optional<fn(i32) -> i32> = Optional::Present(|x| x + 1);
    /// assert_eq!(function.apply(Optional::Present(5)), Optional::Present(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        optional::of(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        optional::lift2_with(function, self, other)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Optional<B>, third: Optional<C>, function: F) -> Optional<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Optional::Present(a), Optional::Present(b), Optional::Present(c)) => {
                Optional::Present(function(a, b, c))
            }
            _ => Optional::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        optional::apply(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn optional_pure_creates_present() {
        let result: Optional<String> = <Optional<()>>::pure("hello".to_string());
        assert_eq!(result, Optional::Present("hello".to_string()));
    }

    #[rstest]
    #[case(Optional::Present(1), Optional::Present(2), Optional::Present(3))]
    #[case(Optional::Present(1), Optional::Absent, Optional::Absent)]
    #[case(Optional::Absent, Optional::Present(2), Optional::Absent)]
    #[case(Optional::Absent, Optional::Absent, Optional::Absent)]
    fn optional_map2(
        #[case] first: Optional<i32>,
        #[case] second: Optional<i32>,
        #[case] expected: Optional<i32>,
    ) {
        assert_eq!(first.map2(second, |x, y| x + y), expected);
    }

    #[rstest]
    fn optional_map3_all_present() {
        let result = Optional::Present(1).map3(
            Optional::Present(2),
            Optional::Present(3),
            |x, y, z| x + y + z,
        );
        assert_eq!(result, Optional::Present(6));
    }

    #[rstest]
    fn optional_map3_with_absent() {
        let result = Optional::Present(1).map3(
            Optional::<i32>::Absent,
            Optional::Present(3),
            |x, y, z| x + y + z,
        );
        assert_eq!(result, Optional::Absent);
    }

    #[rstest]
    fn optional_product_right_with_absent() {
        let result = Optional::<i32>::Absent.product_right(Optional::Present(2));
        assert_eq!(result, Optional::Absent);
    }

    #[rstest]
    fn optional_apply_absent_function() {
        let function: Optional<fn(i32) -> i32> = Optional::Absent;
        assert_eq!(function.apply(Optional::Present(5)), Optional::Absent);
    }

    #[rstest]
    fn optional_apply_chain_with_curried_function() {
        let add = |x: i32| move |y: i32| x + y;
        let result = <Optional<()>>::pure(add)
            .apply(Optional::Present(1))
            .apply(Optional::Present(1));
        assert_eq!(result, Optional::Present(2));
    }

    // =========================================================================
    // Law Tests
    // =========================================================================

    /// Identity law: pure(id).apply(v) == v
    #[rstest]
    #[case(Optional::Present(42))]
    #[case(Optional::Absent)]
    fn optional_identity_law(#[case] value: Optional<i32>) {
        let identity = <Optional<()>>::pure(|x: i32| x);
        assert_eq!(identity.apply(value), value);
    }

    /// Homomorphism law: pure(f).apply(pure(x)) == pure(f(x))
    #[rstest]
    fn optional_homomorphism_law() {
        let function = |x: i32| x * 2;
        let left = <Optional<()>>::pure(function).apply(<Optional<()>>::pure(21));
        let right: Optional<i32> = <Optional<()>>::pure(function(21));
        assert_eq!(left, right);
    }

    /// Interchange law: u.apply(pure(y)) == pure(|f| f(y)).apply(u)
    #[rstest]
    fn optional_interchange_law() {
        let function: Optional<fn(i32) -> i32> = Optional::Present(|x| x + 10);
        let left = function.apply(<Optional<()>>::pure(5));
        let right = <Optional<()>>::pure(|f: fn(i32) -> i32| f(5)).apply(function);
        assert_eq!(left, right);
    }

    #[rstest]
    #[case(Optional::Present(4), Optional::Present(5))]
    #[case(Optional::Present(4), Optional::Absent)]
    #[case(Optional::Absent, Optional::Present(5))]
    fn map2_agrees_with_lift2(#[case] first: Optional<i32>, #[case] second: Optional<i32>) {
        assert_eq!(
            first.map2(second, |x, y| x * y),
            optional::lift2(|x: i32| move |y: i32| x * y, first, second)
        );
    }
}
