//! Largest palindrome made from the product of two 3-digit numbers.

use euler_bench_core::Suite;

/// Smallest 3-digit factor.
pub const MIN_FACTOR: i32 = 100;
/// One past the largest 3-digit factor.
pub const MAX_FACTOR: i32 = 1000;
/// Known answer.
pub const ANSWER: i32 = 906_609;

/// Palindrome check on the decimal string.
#[must_use]
pub fn is_palindrome_string(x: i32) -> bool {
    let s = x.to_string();
    s.bytes().eq(s.bytes().rev())
}

/// Decimal digits of a non-negative `x` in reverse order.
#[must_use]
pub fn reverse(mut x: i32) -> i32 {
    let mut result = 0;
    while x > 0 {
        result = 10 * result + x % 10;
        x /= 10;
    }
    result
}

/// Palindrome check by arithmetic reversal.
#[must_use]
pub fn is_palindrome(x: i32) -> bool {
    x == reverse(x)
}

/// Every product `i * j` with `i <= j`, checked as a string.
#[must_use]
pub fn iterative_string() -> i32 {
    let mut maximum = 0;
    for i in MIN_FACTOR..MAX_FACTOR {
        for j in i..MAX_FACTOR {
            let product = i * j;
            if is_palindrome_string(product) && product > maximum {
                maximum = product;
            }
        }
    }
    maximum
}

/// Every product `i * j` with `i <= j`, checked arithmetically.
#[must_use]
pub fn iterative_math() -> i32 {
    let mut maximum = 0;
    for i in MIN_FACTOR..MAX_FACTOR {
        for j in i..MAX_FACTOR {
            let product = i * j;
            if is_palindrome(product) && product > maximum {
                maximum = product;
            }
        }
    }
    maximum
}

/// Descend from the top and stop each row once products cannot beat the best so far.
#[must_use]
pub fn iterative_math_pruned() -> i32 {
    let mut maximum = 0;
    for i in (MIN_FACTOR..MAX_FACTOR).rev() {
        for j in (i + 1..MAX_FACTOR).rev() {
            let product = i * j;
            if product <= maximum {
                break;
            }
            if is_palindrome(product) {
                maximum = product;
            }
        }
    }
    maximum
}

/// Flat-mapped product pairs, filtered and maximized.
#[must_use]
pub fn functional() -> i32 {
    (MIN_FACTOR..MAX_FACTOR)
        .flat_map(|i| (i..MAX_FACTOR).map(move |j| i * j))
        .filter(|&product| is_palindrome_string(product))
        .max()
        .unwrap_or(0)
}

/// Every variant.
#[must_use]
pub fn suite() -> Suite {
    Suite::new("Largest palindrome product of two 3-digit numbers")
        .register("iterative_string", iterative_string)
        .register("iterative_math", iterative_math)
        .register("iterative_math_pruned", iterative_math_pruned)
        .register("functional", functional)
}
