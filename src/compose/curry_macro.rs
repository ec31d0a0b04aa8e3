//! The `curry2!` and `curry3!` macros.
//!
//! Currying turns `f(a, b)` into `f(a)(b)`. Curried functions are what
//! [`apply`](crate::optional::apply), [`lift2`](crate::optional::lift2) and
//! [`lift3`](crate::optional::lift3) expect, so these macros are the bridge
//! from ordinary multi-argument functions to the applicative style.
//!
//! The function and the already-supplied arguments are shared through
//! `std::rc::Rc`, so a partially applied closure can be called more than
//! once and arguments only need to be `Clone`, not `Copy`.

/// Converts a 2-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use optional_fp::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
///
/// ## Feeding `lift2`
///
/// ```
/// use optional_fp::curry2;
/// use optional_fp::optional::{lift2, Optional};
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// assert_eq!(
///     lift2(curry2!(add), Optional::Present(1), Optional::Present(1)),
///     Optional::Present(2)
/// );
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use optional_fp::curry3;
/// use optional_fp::optional::{apply, of, Optional};
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 { value.max(low).min(high) }
///
/// let curried = curry3!(clamp);
/// assert_eq!(curried(0)(10)(42), 10);
///
/// let clamped = apply(
///     apply(apply(of(curried), Optional::Present(0)), Optional::Present(10)),
///     Optional::Present(-3),
/// );
/// assert_eq!(clamped, Optional::Present(0));
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}
