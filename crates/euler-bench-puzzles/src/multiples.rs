//! Sum of all multiples of 3 or 5 below 1000.

use euler_bench_core::Suite;
use std::iter::StepBy;
use std::ops::Range;

/// Exclusive upper bound.
pub const LIMIT: i32 = 1000;
/// First divisor.
pub const X: i32 = 3;
/// Second divisor.
pub const Y: i32 = 5;
/// Known answer for the fixed inputs.
pub const ANSWER: i32 = 233_168;

/// Whether `dividend` is a multiple of `x` or of `y`.
#[must_use]
pub fn is_multiple_of_either(dividend: i32, x: i32, y: i32) -> bool {
    dividend % x == 0 || dividend % y == 0
}

/// Walk `[1, limit)` and add every multiple of `x` or `y`.
#[must_use]
pub fn filter_imperative(limit: i32, x: i32, y: i32) -> i32 {
    let mut sum = 0;
    for i in 1..limit {
        if is_multiple_of_either(i, x, y) {
            sum += i;
        }
    }
    sum
}

/// Add multiples of `x`, multiples of `y`, then remove the multiples of `x * y` counted twice.
#[must_use]
pub fn generate_multiples_imperative(limit: i32, x: i32, y: i32) -> i32 {
    let mut sum = 0;
    let mut i = x;
    while i < limit {
        sum += i;
        i += x;
    }
    i = y;
    while i < limit {
        sum += i;
        i += y;
    }
    let xy = x * y;
    i = xy;
    while i < limit {
        sum -= i;
        i += xy;
    }
    sum
}

/// Sum of `[x, limit)` stepping by `x`, as `x` times a triangular number.
#[must_use]
pub fn sum_of_multiples_of(x: i32, limit: i32) -> i32 {
    let p = (limit - 1) / x;
    x * p * (p + 1) / 2
}

/// Closed form: inclusion-exclusion over triangular numbers.
#[must_use]
pub fn sum_of_multiples(limit: i32, x: i32, y: i32) -> i32 {
    sum_of_multiples_of(x, limit) + sum_of_multiples_of(y, limit) - sum_of_multiples_of(x * y, limit)
}

/// Range adaptor pipeline over `[1, limit)`.
#[must_use]
pub fn filter_functional(limit: i32, x: i32, y: i32) -> i32 {
    (1..limit).filter(|&i| is_multiple_of_either(i, x, y)).sum()
}

/// Multiples of a positive `x` below `limit`.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn multiples_of(x: i32, limit: i32) -> StepBy<Range<i32>> {
    (x..limit).step_by(x as usize)
}

/// Inclusion-exclusion over stepped ranges.
#[must_use]
pub fn generate_multiples_functional(limit: i32, x: i32, y: i32) -> i32 {
    multiples_of(x, limit).sum::<i32>() + multiples_of(y, limit).sum::<i32>()
        - multiples_of(x * y, limit).sum::<i32>()
}

/// Every variant, bound to the fixed inputs.
#[must_use]
pub fn suite() -> Suite {
    let inputs = (LIMIT, X, Y);
    Suite::new("Multiples of 3 or 5 below 1000")
        .register_with("filter_imperative", |(l, x, y)| filter_imperative(l, x, y), inputs)
        .register_with(
            "generate_multiples_imperative",
            |(l, x, y)| generate_multiples_imperative(l, x, y),
            inputs,
        )
        .register_with("sum_of_multiples", |(l, x, y)| sum_of_multiples(l, x, y), inputs)
        .register_with("filter_functional", |(l, x, y)| filter_functional(l, x, y), inputs)
        .register_with(
            "generate_multiples_functional",
            |(l, x, y)| generate_multiples_functional(l, x, y),
            inputs,
        )
}
