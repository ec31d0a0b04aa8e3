//! The `pipe!` macro for left-to-right data flow.

/// Threads a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`, the `x |> f |> g |> h` of ML-family
/// languages. Together with [`mapping`](crate::optional::mapping) and
/// [`binding`](crate::optional::binding) it gives `Optional` pipelines that
/// read top to bottom.
///
/// # Examples
///
/// ```
/// use optional_fp::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// assert_eq!(pipe!(3, square, double, add_one), 19);
/// ```
///
/// ## Optional pipeline
///
/// ```
/// use optional_fp::pipe;
/// use optional_fp::optional::{binding, mapping, Optional};
///
/// let halve = |n: i32| if n % 2 == 0 { Optional::Present(n / 2) } else { Optional::Absent };
///
/// let result = pipe!(
///     Optional::Present(20),
///     mapping(|n: i32| n + 2),
///     binding(halve),
///     mapping(|n: i32| n.to_string())
/// );
/// assert_eq!(result, Optional::Present("11".to_string()));
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use optional_fp::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(pipe!(10, f, g, h), compose!(h, g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}

#[cfg(test)]
mod tests {
    use crate::optional::{Optional, binding, mapping};

    #[test]
    fn test_pipe_value_only() {
        assert_eq!(pipe!(42), 42);
    }

    #[test]
    fn test_pipe_two() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        assert_eq!(pipe!(5, double, add_one), 11);
    }

    #[test]
    fn test_pipe_through_absent_short_circuits() {
        let mut calls = 0;
        let result = pipe!(
            Optional::<i32>::Absent,
            mapping(|n: i32| n + 1),
            binding(|n: i32| {
                calls += 1;
                Optional::Present(n)
            })
        );
        assert_eq!(result, Optional::Absent);
        assert_eq!(calls, 0);
    }
}
