//! Smallest number evenly divisible by every integer from 1 to 20.

use euler_bench_core::Suite;

/// Largest divisor in the range.
pub const UPPER: i32 = 20;
/// Known answer.
pub const ANSWER: i32 = 232_792_560;

/// Euclid's algorithm.
#[must_use]
pub fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Binary GCD (Stein's algorithm) for non-negative inputs.
#[must_use]
pub fn stein_gcd(mut m: i32, mut n: i32) -> i32 {
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }
    let shift = (m | n).trailing_zeros();
    m >>= m.trailing_zeros();
    loop {
        n >>= n.trailing_zeros();
        if m > n {
            std::mem::swap(&mut m, &mut n);
        }
        n -= m;
        if n == 0 {
            return m << shift;
        }
    }
}

/// Least common multiple, dividing before multiplying to stay in range.
#[must_use]
pub fn lcm(a: i32, b: i32) -> i32 {
    a.abs() / gcd(a, b) * b.abs()
}

/// Least common multiple over [`stein_gcd`].
#[must_use]
pub fn stein_lcm(a: i32, b: i32) -> i32 {
    a.abs() / stein_gcd(a, b) * b.abs()
}

/// Accumulate the LCM in a loop.
#[must_use]
pub fn imperative(upper: i32) -> i32 {
    let mut result = 1;
    for i in 2..=upper {
        result = lcm(result, i);
    }
    result
}

/// Fold the range with [`lcm`].
#[must_use]
pub fn functional(upper: i32) -> i32 {
    (2..=upper).fold(1, lcm)
}

/// Fold the range with [`stein_lcm`].
#[must_use]
pub fn stein(upper: i32) -> i32 {
    (2..=upper).fold(1, stein_lcm)
}

/// Test multiples of `upper` until one is divisible by everything below it.
#[must_use]
pub fn brute_force(upper: i32) -> i32 {
    let upper = upper.max(1);
    let mut candidate = upper;
    loop {
        if (2..upper).all(|d| candidate % d == 0) {
            return candidate;
        }
        candidate += upper;
    }
}

/// Every variant, bound to the fixed input.
#[must_use]
pub fn suite() -> Suite {
    Suite::new("Least common multiple of 1..20")
        .register_with("imperative", imperative, UPPER)
        .register_with("functional", functional, UPPER)
        .register_with("stein", stein, UPPER)
        .register_with("brute_force", brute_force, UPPER)
}
