//! Largest prime factor of 600851475143.
//!
//! The variants differ only in which trial divisors they visit and when they
//! stop. Inputs are `i64`; the product of any two visited divisors stays far
//! below `i64::MAX` for the fixed input.

use euler_bench_core::Suite;

/// Number to factor.
pub const N: i64 = 600_851_475_143;
/// Known answer for the fixed input.
pub const ANSWER: i64 = 6857;

/// Gaps between candidates coprime to 30, starting after 7.
const WHEEL30_GAPS: [i64; 8] = [4, 2, 4, 2, 4, 6, 2, 6];

/// Divide by every integer from 2 until nothing is left.
#[must_use]
pub fn largest_prime_factor(mut n: i64) -> i64 {
    let mut divisor = 2;
    let mut result = 1;
    while n > 1 {
        while n % divisor == 0 {
            result = divisor;
            n /= divisor;
        }
        divisor += 1;
    }
    result
}

/// Like [`largest_prime_factor`], skipping even divisors after 2.
#[must_use]
pub fn largest_prime_factor_odd(mut n: i64) -> i64 {
    let mut divisor = 2;
    let mut result = 1;
    while n > 1 {
        while n % divisor == 0 {
            result = divisor;
            n /= divisor;
        }
        divisor = if divisor == 2 { 3 } else { divisor + 2 };
    }
    result
}

/// Odd divisors, stopping once `divisor²` exceeds what is left.
#[must_use]
pub fn largest_prime_factor_sqrt(mut n: i64) -> i64 {
    let mut divisor = 2;
    let mut result = 1;
    while n > 1 && divisor * divisor <= n {
        while n % divisor == 0 {
            result = divisor;
            n /= divisor;
        }
        divisor += if divisor == 2 { 1 } else { 2 };
    }
    if n == 1 {
        result
    } else {
        n
    }
}

/// 2, 3, then the 6k±1 wheel, stopping at the square root.
#[must_use]
pub fn largest_prime_factor_wheel6(mut n: i64) -> i64 {
    let mut divisor = 2;
    let mut result = 1;
    let mut addend = 2;
    while n > 1 && divisor * divisor <= n {
        while n % divisor == 0 {
            result = divisor;
            n /= divisor;
        }
        match divisor {
            2 => divisor = 3,
            3 => divisor = 5,
            _ => {
                divisor += addend;
                addend = if addend == 2 { 4 } else { 2 };
            }
        }
    }
    if n == 1 {
        result
    } else {
        n
    }
}

/// 2, 3, 5, 7, then the wheel of candidates coprime to 30.
#[must_use]
pub fn largest_prime_factor_wheel30(mut n: i64) -> i64 {
    let mut divisor = 2;
    let mut result = 1;
    let mut gap = 0;
    while n > 1 && divisor * divisor <= n {
        while n % divisor == 0 {
            result = divisor;
            n /= divisor;
        }
        match divisor {
            2 => divisor = 3,
            3 => divisor = 5,
            5 => divisor = 7,
            _ => {
                divisor += WHEEL30_GAPS[gap];
                gap = (gap + 1) % WHEEL30_GAPS.len();
            }
        }
    }
    if n == 1 {
        result
    } else {
        n
    }
}

/// Prime factors of `n` in ascending order, with multiplicity.
#[derive(Debug, Clone)]
pub struct Factors<I> {
    n: i64,
    candidates: I,
    divisor: Option<i64>,
}

impl<I: Iterator<Item = i64>> Iterator for Factors<I> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.n <= 1 {
            return None;
        }
        loop {
            let d = match self.divisor {
                Some(d) => d,
                None => {
                    let d = self.candidates.next()?;
                    self.divisor = Some(d);
                    d
                }
            };
            if d * d > self.n {
                let last = self.n;
                self.n = 1;
                return Some(last);
            }
            if self.n % d == 0 {
                self.n /= d;
                return Some(d);
            }
            self.divisor = None;
        }
    }
}

/// 2 followed by every odd number.
pub fn odd_candidates() -> impl Iterator<Item = i64> + Clone {
    std::iter::successors(Some(2_i64), |&d| Some(if d == 2 { 3 } else { d + 2 }))
}

/// Lazily factor `n` by trial division over `candidates`.
pub fn factors<I>(n: i64, candidates: I) -> Factors<I>
where
    I: Iterator<Item = i64>,
{
    Factors {
        n,
        candidates,
        divisor: None,
    }
}

/// Last element of the lazy factor stream.
#[must_use]
pub fn largest_prime_factor_functional(n: i64) -> i64 {
    factors(n, odd_candidates()).last().unwrap_or(1)
}

/// Every variant, bound to the fixed input.
#[must_use]
pub fn suite() -> Suite {
    Suite::new("Largest prime factor of 600851475143")
        .register_with("largest_prime_factor", largest_prime_factor, N)
        .register_with("largest_prime_factor_odd", largest_prime_factor_odd, N)
        .register_with("largest_prime_factor_sqrt", largest_prime_factor_sqrt, N)
        .register_with("largest_prime_factor_wheel6", largest_prime_factor_wheel6, N)
        .register_with("largest_prime_factor_wheel30", largest_prime_factor_wheel30, N)
        .register_with(
            "largest_prime_factor_functional",
            largest_prime_factor_functional,
            N,
        )
}
