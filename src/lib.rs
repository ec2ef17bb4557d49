//! # euler-bench
//!
//! Imperative versus functional micro-benchmarks for small numeric puzzles.
//!
//! This is the workspace root crate that re-exports the member crates:
//!
//! - [`euler-bench-core`] - Timing harness (clock, optimizer barrier, runner, ranked table)
//! - [`euler-bench-puzzles`] - Puzzle variants and their suites
//! - [`euler-bench-cli`] - CLI tool (`euler-bench` binary)

pub use euler_bench_core as core;
pub use euler_bench_puzzles as puzzles;
