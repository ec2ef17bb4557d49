//! Runs puzzle suites and prints their ranked tables.

use crate::output;
use anyhow::{Context, Result};
use euler_bench_core::BenchmarkRunner;
use euler_bench_puzzles::Puzzle;

/// Measure each puzzle's suite in turn and print its table once it completes.
pub fn run(puzzles: &[Puzzle]) -> Result<()> {
    let runner = BenchmarkRunner::new().context("cannot start benchmark runner")?;

    tracing::info!(
        suites = puzzles.len(),
        iterations = runner.policy().iterations(),
        warm_up = runner.policy().warm_up(),
        timer_hz = runner.clock().frequency(),
        "Starting benchmarks"
    );

    let mut stdout = std::io::stdout().lock();
    for puzzle in puzzles {
        let suite = puzzle.suite();
        let table = suite
            .run(&runner)
            .with_context(|| format!("suite `{}` failed", suite.title()))?;

        for experiment in table.experiments() {
            if experiment.answer() != puzzle.answer() {
                tracing::warn!(
                    experiment = experiment.name(),
                    answer = experiment.answer(),
                    expected = puzzle.answer(),
                    "Variant disagrees with the known answer"
                );
            }
        }

        output::write_table(&mut stdout, suite.title(), &table)?;
    }

    Ok(())
}
