//! The tour: one small, deterministic demonstration per language feature.
//!
//! Every demonstration evaluates a fixed expression once and records the
//! printed outcome, so the tour reads the same on every run.

use std::f64::consts::PI;
use std::fmt;

use optional_fp::optional::{
    Optional, apply, bind, binding, lift2, map, mapping, of, sequence, traverse,
};
use optional_fp::typeclass::{Applicative, Functor, Monad};
use optional_fp::{compose, curry2, maybe, partial, pipe};

// =============================================================================
// Demonstration
// =============================================================================

/// A single evaluated example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demonstration {
    /// The language feature being shown.
    pub topic: &'static str,
    /// The expression as a reader would write it.
    pub expression: &'static str,
    /// What the expression evaluated to.
    pub outcome: String,
}

impl Demonstration {
    fn new(topic: &'static str, expression: &'static str, outcome: impl Into<String>) -> Self {
        Self {
            topic,
            expression,
            outcome: outcome.into(),
        }
    }
}

impl fmt::Display for Demonstration {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}] {} => {}", self.topic, self.expression, self.outcome)
    }
}

/// Runs every demonstration in tour order.
pub fn all() -> Vec<Demonstration> {
    vec![
        currying(),
        partial_application(),
        composition(),
        pipelines(),
        discriminated_unions(),
        records(),
        options(),
        results(),
        functor_map(),
        applicative_apply(),
        monadic_bind(),
        traversal(),
    ]
}

// =============================================================================
// Functions
// =============================================================================

const fn add(first: i32, second: i32) -> i32 {
    first + second
}

const fn add_one(value: i32) -> i32 {
    value + 1
}

const fn double(value: i32) -> i32 {
    value * 2
}

fn parse(text: &str) -> Optional<i32> {
    text.trim().parse::<i32>().ok().into()
}

const fn non_zero(value: i32) -> Optional<i32> {
    if value == 0 {
        Optional::Absent
    } else {
        Optional::Present(value)
    }
}

/// `curry2!(add)(1)(2)`: one argument at a time.
pub fn currying() -> Demonstration {
    let curried = curry2!(add);
    let increment = curried(1);
    Demonstration::new(
        "currying",
        "curry2!(add)(1)(2), curry2!(add)(1)(41)",
        format!("{}, {}", increment(2), increment(41)),
    )
}

/// Fixing some arguments with `partial!`.
pub fn partial_application() -> Demonstration {
    let add_ten = partial!(add, 10, __);
    let clamp = |low: i32, value: i32, high: i32| value.clamp(low, high);
    let percent = partial!(clamp, 0, __, 100);
    Demonstration::new(
        "partial application",
        "partial!(add, 10, __)(5), partial!(clamp, 0, __, 100)(120)",
        format!("{}, {}", add_ten(5), percent(120)),
    )
}

/// Right-to-left composition.
pub fn composition() -> Demonstration {
    let double_then_add_one = compose!(add_one, double);
    let add_one_then_double = compose!(double, add_one);
    Demonstration::new(
        "composition",
        "compose!(add_one, double)(5), compose!(double, add_one)(5)",
        format!("{}, {}", double_then_add_one(5), add_one_then_double(5)),
    )
}

/// Left-to-right pipelines, plain and over `Optional`.
pub fn pipelines() -> Demonstration {
    let plain = pipe!(3, add_one, double);
    let lifted = pipe!(
        parse("20"),
        mapping(add_one),
        binding(non_zero),
        mapping(double)
    );
    Demonstration::new(
        "pipelines",
        "pipe!(3, add_one, double), pipe!(parse(\"20\"), mapping(add_one), binding(non_zero), mapping(double))",
        format!("{plain}, {lifted}"),
    )
}

// =============================================================================
// Data
// =============================================================================

/// A closed set of shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A circle with the given radius.
    Circle {
        /// Radius.
        radius: f64,
    },
    /// An axis-aligned rectangle.
    Rectangle {
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
}

impl Shape {
    /// Area of the shape; every variant is handled.
    pub const fn area(self) -> f64 {
        match self {
            Self::Circle { radius } => PI * radius * radius,
            Self::Rectangle { width, height } => width * height,
        }
    }
}

/// A plain record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Given name.
    pub name: &'static str,
    /// Age in years.
    pub age: u32,
}

/// Matching over a sum type.
pub fn discriminated_unions() -> Demonstration {
    let shapes = [
        Shape::Circle { radius: 1.0 },
        Shape::Rectangle {
            width: 2.0,
            height: 3.0,
        },
    ];
    let areas: Vec<String> = shapes
        .iter()
        .map(|shape| format!("{:.2}", shape.area()))
        .collect();
    Demonstration::new(
        "discriminated unions",
        "[Circle { radius: 1.0 }, Rectangle { width: 2.0, height: 3.0 }].map(area)",
        areas.join(", "),
    )
}

/// Copy-and-update of an immutable record.
pub fn records() -> Demonstration {
    let ada = Person {
        name: "Ada",
        age: 36,
    };
    let older = Person {
        age: ada.age + 1,
        ..ada
    };
    Demonstration::new(
        "records",
        "Person { age: ada.age + 1, ..ada }",
        format!("{ada:?} -> {older:?}"),
    )
}

// =============================================================================
// Optional and Result
// =============================================================================

/// Optional values and defaults.
pub fn options() -> Demonstration {
    let parsed = parse("42").value_or(0);
    let fallback = parse("forty-two").value_or(0);
    let zipped = parse("1").zip(parse("2"));
    Demonstration::new(
        "options",
        "parse(\"42\").value_or(0), parse(\"forty-two\").value_or(0), parse(\"1\").zip(parse(\"2\"))",
        format!("{parsed}, {fallback}, {zipped:?}"),
    )
}

fn divide(numerator: i32, denominator: i32) -> Result<i32, String> {
    if denominator == 0 {
        Err("division by zero".to_string())
    } else {
        Ok(numerator / denominator)
    }
}

/// Results carry a reason for failure; `Optional` converts to one.
pub fn results() -> Demonstration {
    let quotient = divide(10, 2);
    let failure = divide(1, 0);
    let demanded = Optional::<i32>::Absent
        .into_result()
        .map_err(|error| error.to_string());
    Demonstration::new(
        "results",
        "divide(10, 2), divide(1, 0), Absent.into_result()",
        format!("{quotient:?}, {failure:?}, {demanded:?}"),
    )
}

/// Lifting an ordinary function with `map`.
pub fn functor_map() -> Demonstration {
    let present = map(|x| x + 1, Optional::Present(1));
    let absent = map(|x: i32| x + 1, Optional::Absent);
    let method = Optional::Present(20).fmap(double);
    Demonstration::new(
        "functor map",
        "map(x + 1, Present(1)), map(x + 1, Absent), Present(20).fmap(double)",
        format!("{present}, {absent}, {method}"),
    )
}

/// Functions of several arguments with `apply` and `lift2`.
pub fn applicative_apply() -> Demonstration {
    let curried = |x: i32| move |y: i32| x + y;
    let applied = apply(apply(of(curried), Optional::Present(1)), Optional::Present(1));
    let lifted = lift2(curry2!(add), Optional::Present(1), Optional::Present(1));
    let missing = lift2(curry2!(add), Optional::Present(1), Optional::Absent);
    let method = Optional::Present(2).map2(Optional::Present(3), |a, b| a * b);
    Demonstration::new(
        "applicative apply",
        "apply(apply(of(add), Present(1)), Present(1)), lift2(add, Present(1), Present(1)), lift2(add, Present(1), Absent), Present(2).map2(Present(3), *)",
        format!("{applied}, {lifted}, {missing}, {method}"),
    )
}

fn hundred_over(text: &str) -> Optional<i32> {
    maybe! {
        number <= parse(text);
        divisor <= non_zero(number);
        yield 100 / divisor
    }
}

/// Chaining world-crossing functions with `bind`.
pub fn monadic_bind() -> Demonstration {
    let zero = bind(non_zero, Optional::Present(0));
    let chained = Optional::Present(4).flat_map(non_zero).fmap(double);
    let outcomes: Vec<String> = ["4", "0", "four"]
        .into_iter()
        .map(|text| hundred_over(text).to_string())
        .collect();
    Demonstration::new(
        "monadic bind",
        "bind(non_zero, Present(0)), Present(4).flat_map(non_zero).fmap(double), maybe! { n <= parse(text); d <= non_zero(n); yield 100 / d } for 4, 0, four",
        format!("{zero}, {chained}, {}", outcomes.join(", ")),
    )
}

/// Collecting many optional results at once.
pub fn traversal() -> Demonstration {
    let all_parsed = traverse(parse, ["1", "2", "3"]);
    let one_missing = sequence([parse("1"), parse("two"), parse("3")]);
    Demonstration::new(
        "traversal",
        "traverse(parse, [\"1\", \"2\", \"3\"]), sequence([parse(\"1\"), parse(\"two\"), parse(\"3\")])",
        format!("{all_parsed:?}, {one_missing:?}"),
    )
}
