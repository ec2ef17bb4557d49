//! Imperative and functional variants of five small numeric puzzles.
//!
//! Each module exposes its variants as plain functions plus a `suite()` that
//! registers them, with the puzzle's fixed inputs, for the timing harness.
//!
//! # Example
//!
//! ```
//! use euler_bench_puzzles::Puzzle;
//!
//! for (name, answer) in Puzzle::Multiples.suite().answers() {
//!     assert_eq!(answer, Puzzle::Multiples.answer(), "{name}");
//! }
//! ```

#![deny(missing_docs)]
#![deny(clippy::panic)]
#![warn(clippy::all, clippy::pedantic)]

pub mod even_fibonacci;
pub mod lcm;
pub mod multiples;
pub mod palindrome;
pub mod prime_factor;

use euler_bench_core::Suite;

/// One of the benchmarked puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    /// Sum of multiples of 3 or 5 below 1000.
    Multiples,
    /// Sum of even Fibonacci terms not exceeding four million.
    EvenFibonacci,
    /// Largest prime factor of 600851475143.
    PrimeFactor,
    /// Largest palindrome product of two 3-digit numbers.
    Palindrome,
    /// Least common multiple of 1..20.
    Lcm,
}

impl Puzzle {
    /// Every puzzle, in the order they are run.
    pub const ALL: [Self; 5] = [
        Self::Multiples,
        Self::EvenFibonacci,
        Self::PrimeFactor,
        Self::Palindrome,
        Self::Lcm,
    ];

    /// Suite of variants for this puzzle.
    #[must_use]
    pub fn suite(self) -> Suite {
        match self {
            Self::Multiples => multiples::suite(),
            Self::EvenFibonacci => even_fibonacci::suite(),
            Self::PrimeFactor => prime_factor::suite(),
            Self::Palindrome => palindrome::suite(),
            Self::Lcm => lcm::suite(),
        }
    }

    /// Known correct answer for the fixed inputs.
    #[must_use]
    pub fn answer(self) -> i64 {
        match self {
            Self::Multiples => multiples::ANSWER.into(),
            Self::EvenFibonacci => even_fibonacci::ANSWER.into(),
            Self::PrimeFactor => prime_factor::ANSWER,
            Self::Palindrome => palindrome::ANSWER.into(),
            Self::Lcm => lcm::ANSWER.into(),
        }
    }
}

/// Suites for every puzzle, in run order.
#[must_use]
pub fn suites() -> Vec<Suite> {
    Puzzle::ALL.iter().map(|p| p.suite()).collect()
}
