//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to its contents without changing
//! its shape. For [`Optional`] that means `Present` stays `Present` and
//! `Absent` stays `Absent`; the function only ever sees a present value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optional_fp::optional::Optional;
//! use optional_fp::typeclass::Functor;
//!
//! let present: Optional<i32> = Optional::Present(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Optional::Present("5".to_string()));
//!
//! let absent: Optional<i32> = Optional::Absent;
//! assert_eq!(absent.fmap(|n| n.to_string()), Optional::Absent);
//! ```

use super::higher::TypeConstructor;
use crate::optional::{self, Optional};

/// A type class for types that can have a function mapped over their contents.
///
/// The method form of [`optional::map`]: `opt.fmap(f) == map(f, opt)`.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    /// use optional_fp::typeclass::Functor;
    ///
    /// assert_eq!(Optional::Present(5).fmap(|n| n * 2), Optional::Present(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Leaves `self` usable, which matters when the inner type is not `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    /// use optional_fp::typeclass::Functor;
    ///
    /// let text = Optional::Present("hello".to_string());
    /// assert_eq!(text.fmap_ref(|s| s.len()), Optional::Present(5));
    /// assert!(text.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    /// use optional_fp::typeclass::Functor;
    ///
    /// assert_eq!(Optional::Present(5).replace("replaced"), Optional::Present("replaced"));
    /// assert_eq!(Optional::<i32>::Absent.replace("replaced"), Optional::Absent);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        optional::map(function, self)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        optional::map(function, self.as_ref())
    }
}
