//! Sum of the even Fibonacci terms not exceeding four million.
//!
//! Every third Fibonacci term is even, and the even terms satisfy
//! `E(n) = E(n-2) + 4 * E(n-1)` starting from 2, 8, so the "no filter"
//! variants never produce an odd term at all.

use euler_bench_core::Suite;

/// First term.
pub const A: i32 = 1;
/// Second term.
pub const B: i32 = 2;
/// Inclusive upper bound on the terms.
pub const BOUND: i32 = 4_000_000;
/// Known answer for the fixed inputs.
pub const ANSWER: i32 = 4_613_732;

type Step = fn(i32, i32) -> (i32, i32);

/// Next pair of the Fibonacci recurrence.
#[must_use]
pub fn next_fibonacci(a: i32, b: i32) -> (i32, i32) {
    (b, a + b)
}

/// Next pair of the even-term recurrence.
#[must_use]
pub fn next_even_fibonacci(a: i32, b: i32) -> (i32, i32) {
    (b, a + 4 * b)
}

/// Whether `x` is even.
#[must_use]
pub fn is_even(x: i32) -> bool {
    x & 1 == 0
}

/// Terms of a second-order recurrence, up to and including `bound`.
#[derive(Debug, Clone)]
pub struct Sequence {
    a: i32,
    b: i32,
    bound: i32,
    step: Step,
}

impl Iterator for Sequence {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.a > self.bound {
            return None;
        }
        let term = self.a;
        (self.a, self.b) = (self.step)(self.a, self.b);
        Some(term)
    }
}

/// Fibonacci terms starting at `a, b`, not exceeding `bound`.
#[must_use]
pub fn fibonacci(a: i32, b: i32, bound: i32) -> Sequence {
    Sequence {
        a,
        b,
        bound,
        step: next_fibonacci,
    }
}

/// Even Fibonacci terms starting at `a, b`, not exceeding `bound`.
#[must_use]
pub fn even_fibonacci(a: i32, b: i32, bound: i32) -> Sequence {
    Sequence {
        a,
        b,
        bound,
        step: next_even_fibonacci,
    }
}

/// Loop over every term, adding the even ones.
#[must_use]
pub fn filter_imperative(a: i32, b: i32, bound: i32) -> i32 {
    let (mut a, mut b) = (a, b);
    let mut total = 0;
    while a <= bound {
        if is_even(a) {
            total += a;
        }
        (a, b) = next_fibonacci(a, b);
    }
    total
}

/// Loop over the even-term recurrence only. The seed terms are ignored.
#[must_use]
pub fn no_filter_imperative(_a: i32, _b: i32, bound: i32) -> i32 {
    let (mut a, mut b) = (2, 8);
    let mut total = 0;
    while a <= bound {
        total += a;
        (a, b) = next_even_fibonacci(a, b);
    }
    total
}

/// Iterator pipeline with an inline predicate.
#[must_use]
pub fn filter_functional(a: i32, b: i32, bound: i32) -> i32 {
    fibonacci(a, b, bound).filter(|x| x % 2 == 0).sum()
}

/// Iterator pipeline calling a named predicate.
#[must_use]
pub fn filter_function_call_functional(a: i32, b: i32, bound: i32) -> i32 {
    fibonacci(a, b, bound).filter(|&x| is_even(x)).sum()
}

/// Sum of the even-term iterator. The seed terms are ignored.
#[must_use]
pub fn no_filter_functional(_a: i32, _b: i32, bound: i32) -> i32 {
    even_fibonacci(2, 8, bound).sum()
}

/// Every variant, bound to the fixed inputs.
#[must_use]
pub fn suite() -> Suite {
    let inputs = (A, B, BOUND);
    Suite::new("Even Fibonacci terms not exceeding four million")
        .register_with("filter_functional", |(a, b, n)| filter_functional(a, b, n), inputs)
        .register_with("filter_imperative", |(a, b, n)| filter_imperative(a, b, n), inputs)
        .register_with(
            "filter_function_call_functional",
            |(a, b, n)| filter_function_call_functional(a, b, n),
            inputs,
        )
        .register_with("no_filter_functional", |(a, b, n)| no_filter_functional(a, b, n), inputs)
        .register_with("no_filter_imperative", |(a, b, n)| no_filter_imperative(a, b, n), inputs)
}
