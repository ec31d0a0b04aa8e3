//! Error type for demanding a value from an `Absent`.

use thiserror::Error;

/// Returned when a caller requires the value of an `Optional` that is `Absent`.
///
/// The combinators never produce this error; absence is ordinary data for
/// them. It only appears at the boundary where a caller converts an
/// `Optional` into a `Result` with [`Optional::into_result`](super::Optional::into_result).
///
/// # Examples
///
/// ```rust
/// use optional_fp::optional::AbsentValue;
///
/// assert_eq!(AbsentValue.to_string(), "expected a present value, found Absent");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("expected a present value, found Absent")]
pub struct AbsentValue;
