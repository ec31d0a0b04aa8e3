//! The `partial!` macro for partial function application.

/// Partially applies arguments to a function.
///
/// `__` (double underscore) marks an argument that stays open in the
/// resulting closure. It is matched as a literal token, so do not import
/// [`compose::__`](crate::compose::__) at the call site.
///
/// For a 2-argument function `f(a, b)`:
/// - `partial!(f, value, __)` creates `|b| f(value, b)`
/// - `partial!(f, __, value)` creates `|a| f(a, value)`
/// - `partial!(f, v1, v2)` creates `|| f(v1, v2)` (thunk)
/// - `partial!(f, __, __)` creates `|a, b| f(a, b)`
///
/// 3-argument functions accept every combination of fixed values and `__`.
/// Fixed values must be `Clone`, since the result may be called many times.
///
/// # Examples
///
/// ```
/// use optional_fp::partial;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = partial!(divide, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
///
/// ## Partially applied combinators
///
/// ```
/// use optional_fp::partial;
/// use optional_fp::optional::{map, Optional};
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(map(add_five, Optional::Present(3)), Optional::Present(8));
/// ```
///
/// ## Three-argument function
///
/// ```
/// use optional_fp::partial;
///
/// fn format_greeting(greeting: &str, name: &str, punctuation: &str) -> String {
///     format!("{greeting}, {name}{punctuation}")
/// }
///
/// let hello = partial!(format_greeting, "Hello", __, "!");
/// assert_eq!(hello("Alice"), "Hello, Alice!");
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 3-argument functions (more specific than the 2-argument patterns)
    // =========================================================================

    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3)
    }};

    ($function:expr, $arg1:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3| function(arg1.clone(), arg2, arg3)
    }};

    ($function:expr, __, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1, arg3| function(arg1, arg2.clone(), arg3)
    }};

    ($function:expr, __, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        move |arg1, arg2| function(arg1, arg2, arg3.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3| function(arg1.clone(), arg2.clone(), arg3)
    }};

    ($function:expr, $arg1:expr, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg3 = $arg3;
        move |arg2| function(arg1.clone(), arg2, arg3.clone())
    }};

    ($function:expr, __, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg1| function(arg1, arg2.clone(), arg3.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move || function(arg1.clone(), arg2.clone(), arg3.clone())
    }};

    // =========================================================================
    // 2-argument functions
    // =========================================================================

    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2| function(arg1, arg2)
    }};

    ($function:expr, $arg1:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2| function(arg1.clone(), arg2)
    }};

    ($function:expr, __, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1| function(arg1, arg2.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move || function(arg1.clone(), arg2.clone())
    }};
}
