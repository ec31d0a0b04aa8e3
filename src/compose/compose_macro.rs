//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs first,
/// as in the mathematical `f ∘ g ∘ h`.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Examples
///
/// ```
/// use optional_fp::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
///
/// Composing inside `map` is the same as mapping twice:
///
/// ```
/// use optional_fp::compose;
/// use optional_fp::optional::{map, Optional};
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let once = map(compose!(add_one, double), Optional::Present(5));
/// let twice = map(add_one, map(double, Optional::Present(5)));
/// assert_eq!(once, twice);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    // compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
