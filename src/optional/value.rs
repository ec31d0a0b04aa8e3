//! The `Optional<T>` type - a value that may be absent.
//!
//! `Optional<T>` is either `Present(T)` or `Absent`. It is the single
//! container every combinator in this crate works against. Conversions to
//! and from [`Option`] are provided so it interoperates with the standard
//! library, but the combinators never operate on `Option` directly.
//!
//! # Examples
//!
//! ```rust
//! use optional_fp::optional::Optional;
//!
//! let present: Optional<i32> = Optional::Present(42);
//! let absent: Optional<i32> = Optional::Absent;
//!
//! match present {
//!     Optional::Present(value) => assert_eq!(value, 42),
//!     Optional::Absent => unreachable!(),
//! }
//!
//! assert_eq!(absent.value_or(0), 0);
//! ```

use std::fmt;

use super::error::AbsentValue;

/// A value that may or may not be present.
///
/// Every instance is in exactly one of the two variants and is never
/// mutated by the operations of this crate: each combinator consumes or
/// borrows its input and returns a new `Optional`.
///
/// `Absent` orders before any `Present` value.
///
/// # Examples
///
/// ```rust
/// use optional_fp::optional::Optional;
///
/// let name = Optional::present("Ada");
/// assert!(name.is_present());
/// assert_eq!(name.into_option(), Some("Ada"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Optional<T> {
    /// No value.
    #[default]
    Absent,
    /// A value is present.
    Present(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value as `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    ///
    /// assert_eq!(Optional::present(1), Optional::Present(1));
    /// ```
    #[must_use]
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Constructs the absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    ///
    /// let nothing: Optional<i32> = Optional::absent();
    /// assert!(nothing.is_absent());
    /// ```
    #[must_use]
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[must_use]
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[must_use]
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if a value is present and it satisfies `predicate`.
    ///
    /// The predicate is not called for `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    ///
    /// assert!(Optional::Present(4).is_present_and(|n| n % 2 == 0));
    /// assert!(!Optional::Present(3).is_present_and(|n| n % 2 == 0));
    /// assert!(!Optional::<i32>::Absent.is_present_and(|n| n % 2 == 0));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_present_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    /// Borrows the contained value, producing an `Optional<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    ///
    /// let text = Optional::Present(String::from("hello"));
    /// assert_eq!(text.as_ref(), Optional::Present(&String::from("hello")));
    /// // `text` is still usable here
    /// assert!(text.is_present());
    /// ```
    #[must_use]
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns an iterator over the zero or one contained value.
    #[must_use]
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts into the standard library `Option`.
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns the contained value or `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(3).value_or(0), 3);
    /// assert_eq!(Optional::Absent.value_or(0), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value or computes one from `default`.
    ///
    /// `default` is only called for `Absent`.
    #[must_use]
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    /// Converts into a `Result`, reporting absence as [`AbsentValue`].
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValue`] when `self` is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::{AbsentValue, Optional};
    ///
    /// assert_eq!(Optional::Present(1).into_result(), Ok(1));
    /// assert_eq!(Optional::<i32>::Absent.into_result(), Err(AbsentValue));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, AbsentValue> {
        self.ok_or(AbsentValue)
    }

    /// Converts into a `Result`, reporting absence as `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` when `self` is `Absent`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error),
        }
    }

    // =========================================================================
    // Alternatives
    // =========================================================================

    /// Returns `self` if present, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(1).or(Optional::Present(2)), Optional::Present(1));
    /// assert_eq!(Optional::Absent.or(Optional::Present(2)), Optional::Present(2));
    /// ```
    #[must_use]
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => alternative,
        }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    ///
    /// `alternative` is only called for `Absent`.
    #[must_use]
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => alternative(),
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(4).filter(|n| *n > 3), Optional::Present(4));
    /// assert_eq!(Optional::Present(2).filter(|n| *n > 3), Optional::Absent);
    /// ```
    #[must_use]
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    /// Pairs two values when both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    ///
    /// assert_eq!(
    ///     Optional::Present(1).zip(Optional::Present("one")),
    ///     Optional::Present((1, "one"))
    /// );
    /// assert_eq!(Optional::Present(1).zip(Optional::<&str>::Absent), Optional::Absent);
    /// ```
    #[must_use]
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Self::Present(first), Optional::Present(second)) => Optional::Present((first, second)),
            _ => Optional::Absent,
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional_fp::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(Optional::Present(1)).flatten(), Optional::Present(1));
    /// assert_eq!(Optional::Present(Optional::<i32>::Absent).flatten(), Optional::Absent);
    /// assert_eq!(Optional::<Optional<i32>>::Absent.flatten(), Optional::Absent);
    /// ```
    #[must_use]
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Optional::Absent,
        }
    }
}

// =============================================================================
// Display
// =============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// `Some(x)` becomes `Present(x)`, `None` becomes `Absent`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

// Optional<T> is Send/Sync exactly when T is.
static_assertions::assert_impl_all!(Optional<i32>: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(Optional<String>: Clone, Send, Sync);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_present_construction() {
        let value = Optional::present(42);
        assert!(value.is_present());
        assert!(!value.is_absent());
    }

    #[rstest]
    fn test_absent_construction() {
        let value: Optional<i32> = Optional::absent();
        assert!(value.is_absent());
        assert!(!value.is_present());
    }

    #[rstest]
    fn test_default_is_absent() {
        assert_eq!(Optional::<String>::default(), Optional::Absent);
    }

    #[rstest]
    #[case(Some(1), Optional::Present(1))]
    #[case(None, Optional::Absent)]
    fn test_option_conversion_roundtrip(
        #[case] option: Option<i32>,
        #[case] expected: Optional<i32>,
    ) {
        let optional: Optional<i32> = option.into();
        assert_eq!(optional, expected);
        let back: Option<i32> = optional.into();
        assert_eq!(back, option);
    }

    #[rstest]
    fn test_absent_orders_before_present() {
        assert!(Optional::Absent < Optional::Present(i32::MIN));
        assert!(Optional::Present(1) < Optional::Present(2));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Optional::Present(42).to_string(), "Present(42)");
        assert_eq!(Optional::<i32>::Absent.to_string(), "Absent");
    }

    #[rstest]
    fn test_value_or_else_not_called_when_present() {
        let mut calls = 0;
        let value = Optional::Present(1).value_or_else(|| {
            calls += 1;
            0
        });
        assert_eq!(value, 1);
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_or_else_called_once_when_absent() {
        let mut calls = 0;
        let value = Optional::Absent.or_else(|| {
            calls += 1;
            Optional::Present(7)
        });
        assert_eq!(value, Optional::Present(7));
        assert_eq!(calls, 1);
    }

    #[rstest]
    fn test_into_result_and_error_message() {
        let error = Optional::<u8>::Absent.into_result().unwrap_err();
        assert_eq!(error.to_string(), "expected a present value, found Absent");
        assert_eq!(Optional::Present(3_u8).ok_or("missing"), Ok(3));
    }

    #[rstest]
    fn test_iteration_yields_zero_or_one() {
        assert_eq!(
            Optional::Present(3).into_iter().collect::<Vec<_>>(),
            vec![3]
        );
        assert_eq!(Optional::<i32>::Absent.into_iter().count(), 0);

        let borrowed = Optional::Present(String::from("x"));
        let lengths: Vec<usize> = (&borrowed).into_iter().map(String::len).collect();
        assert_eq!(lengths, vec![1]);
    }

    #[rstest]
    fn test_as_ref_does_not_consume() {
        let text = Optional::Present(String::from("hello"));
        let length = match text.as_ref() {
            Optional::Present(value) => value.len(),
            Optional::Absent => 0,
        };
        assert_eq!(length, 5);
        assert_eq!(text, Optional::Present(String::from("hello")));
    }

    #[rstest]
    fn test_flatten_nested() {
        let nested: Optional<Optional<i32>> = Optional::Present(Optional::Present(9));
        assert_eq!(nested.flatten(), Optional::Present(9));
    }
}
