//! Named experiments, ranked by elapsed time.

use crate::opaque::Opaque;
use crate::runner::BenchmarkRunner;
use crate::Result;

/// One named computation's answer and measured time.
#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    name: String,
    answer: i64,
    elapsed_ms: f64,
}

impl Experiment {
    /// Build an experiment from an already-measured result.
    #[must_use]
    pub fn new(name: impl Into<String>, answer: i64, elapsed_ms: f64) -> Self {
        Self {
            name: name.into(),
            answer,
            elapsed_ms,
        }
    }

    /// Label the computation was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value the computation produced.
    #[must_use]
    pub fn answer(&self) -> i64 {
        self.answer
    }

    /// Total time of the timed loop in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}

/// Collects experiments for one run and renders them fastest first.
#[derive(Debug)]
pub struct ExperimentTable<'r> {
    runner: &'r BenchmarkRunner,
    experiments: Vec<Experiment>,
}

impl<'r> ExperimentTable<'r> {
    /// Create an empty table measuring with `runner`.
    #[must_use]
    pub fn new(runner: &'r BenchmarkRunner) -> Self {
        Self {
            runner,
            experiments: Vec::new(),
        }
    }

    /// Compute the answer once, then time the same computation and append the result.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Experiment`] naming this experiment if measurement fails.
    pub fn record<A, F>(&mut self, name: &str, computation: F) -> Result<&Experiment>
    where
        A: Into<i64>,
        F: Fn() -> A,
    {
        let answer = computation().into();
        let wrapped = Opaque::new(&computation);
        let elapsed_ms = self
            .runner
            .measure(&wrapped)
            .map_err(|e| e.in_experiment(name))?;

        tracing::debug!(experiment = name, answer, elapsed_ms, "Recorded experiment");
        Ok(self.push(Experiment::new(name, answer, elapsed_ms)))
    }

    /// Append an already-measured experiment.
    pub fn push(&mut self, experiment: Experiment) -> &Experiment {
        self.experiments.push(experiment);
        &self.experiments[self.experiments.len() - 1]
    }

    /// Experiments in the order they were recorded.
    #[must_use]
    pub fn experiments(&self) -> &[Experiment] {
        &self.experiments
    }

    /// Number of recorded experiments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    /// Experiments ordered by elapsed time, fastest first.
    ///
    /// The sort is stable: equal times keep their recording order.
    #[must_use]
    pub fn ranked_by_time(&self) -> Vec<&Experiment> {
        let mut ranked: Vec<&Experiment> = self.experiments.iter().collect();
        ranked.sort_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms));
        ranked
    }

    /// One formatted line per experiment, fastest first.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let width = self
            .experiments
            .iter()
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(self.runner.policy().name_width());

        self.ranked_by_time()
            .into_iter()
            .map(|e| render_line(e, width))
            .collect()
    }
}

fn render_line(experiment: &Experiment, width: usize) -> String {
    format!(
        "{:<width$} {} {:.4}",
        experiment.name, experiment.answer, experiment.elapsed_ms
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RunPolicy;
    use std::cell::Cell;

    fn runner() -> BenchmarkRunner {
        let policy = RunPolicy::builder().iterations(10).build().unwrap();
        BenchmarkRunner::with_policy(policy).unwrap()
    }

    #[test]
    fn test_ranking_is_stable() {
        let runner = runner();
        let mut table = ExperimentTable::new(&runner);
        for (i, ms) in [5.0, 2.0, 5.0, 1.0].into_iter().enumerate() {
            table.push(Experiment::new(format!("e{i}"), 0, ms));
        }

        let names: Vec<&str> = table.ranked_by_time().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["e3", "e1", "e0", "e2"]);
    }

    #[test]
    fn test_ranking_does_not_reorder_storage() {
        let runner = runner();
        let mut table = ExperimentTable::new(&runner);
        table.push(Experiment::new("slow", 1, 9.0));
        table.push(Experiment::new("fast", 1, 1.0));
        let _ = table.ranked_by_time();
        assert_eq!(table.experiments()[0].name(), "slow");
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_render_format() {
        let runner = runner();
        let mut table = ExperimentTable::new(&runner);
        table.push(Experiment::new("foo", 42, 3.14159));

        let lines = table.render();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], format!("{:<30} 42 3.1416", "foo"));
    }

    #[test]
    fn test_render_widens_for_long_names() {
        let runner = runner();
        let mut table = ExperimentTable::new(&runner);
        let long = "largest_prime_factor_functional_recursive";
        table.push(Experiment::new(long, 6857, 0.5));
        table.push(Experiment::new("short", 6857, 0.25));

        let lines = table.render();
        assert!(lines[0].starts_with(&format!("{:<width$} ", "short", width = long.len())));
        assert!(lines[1].starts_with(&format!("{long} 6857")));
    }

    #[test]
    fn test_render_pads_non_ascii_names_by_chars() {
        let runner = runner();
        let mut table = ExperimentTable::new(&runner);
        let long = "fibonacci_φ_".repeat(3);
        table.push(Experiment::new(long.as_str(), 1, 0.5));
        table.push(Experiment::new("short", 1, 0.25));

        let lines = table.render();
        let width = long.chars().count();
        assert_eq!(lines[0], format!("{:<width$} 1 0.2500", "short"));
        assert_eq!(lines[1], format!("{long} 1 0.5000"));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn test_render_is_ranked() {
        let runner = runner();
        let mut table = ExperimentTable::new(&runner);
        table.push(Experiment::new("b", 2, 2.0));
        table.push(Experiment::new("a", 1, 1.0));

        let lines = table.render();
        assert!(lines[0].starts_with('a'));
        assert!(lines[1].starts_with('b'));
    }

    #[test]
    fn test_record_computes_answer_and_time() {
        let runner = runner();
        let mut table = ExperimentTable::new(&runner);
        let experiment = table
            .record("sum", || (1..1000).filter(|i| i % 3 == 0 || i % 5 == 0).sum::<i32>())
            .unwrap();
        assert_eq!(experiment.answer(), 233_168);
        assert!(experiment.elapsed_ms() >= 0.0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_record_widens_i32_answers() {
        let runner = runner();
        let mut table = ExperimentTable::new(&runner);
        let answer = table.record("max", || i32::MAX).unwrap().answer();
        assert_eq!(answer, i64::from(i32::MAX));
    }

    #[test]
    fn test_record_invokes_once_untimed_plus_measured_loop() {
        let runner = runner();
        let calls = Cell::new(0i64);
        let mut table = ExperimentTable::new(&runner);
        table
            .record("count", || {
                calls.set(calls.get() + 1);
                calls.get()
            })
            .unwrap();
        // answer + warm-up + 10 timed
        assert_eq!(calls.get(), 12);
        assert_eq!(table.experiments()[0].answer(), 1);
    }

    #[test]
    fn test_empty_table() {
        let runner = runner();
        let table = ExperimentTable::new(&runner);
        assert!(table.is_empty());
        assert!(table.render().is_empty());
        assert!(table.ranked_by_time().is_empty());
    }
}
