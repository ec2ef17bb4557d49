//! Named groups of computations that answer the same question.

use crate::experiment::ExperimentTable;
use crate::runner::BenchmarkRunner;
use crate::Result;
use std::fmt;
use std::hint::black_box;

struct Entry {
    name: &'static str,
    compute: Box<dyn Fn() -> i64>,
}

/// An ordered list of named computations, measured together.
pub struct Suite {
    title: &'static str,
    entries: Vec<Entry>,
}

impl Suite {
    /// Create an empty suite.
    #[must_use]
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            entries: Vec::new(),
        }
    }

    /// Register a zero-argument computation.
    #[must_use]
    pub fn register<A, F>(mut self, name: &'static str, f: F) -> Self
    where
        A: Into<i64>,
        F: Fn() -> A + 'static,
    {
        self.entries.push(Entry {
            name,
            compute: Box::new(move || f().into()),
        });
        self
    }

    /// Register a computation with its input bound now.
    ///
    /// The input is passed through [`black_box`] on every call so it is never
    /// folded into the computation as a constant.
    #[must_use]
    pub fn register_with<T, A, F>(self, name: &'static str, f: F, args: T) -> Self
    where
        T: Copy + 'static,
        A: Into<i64>,
        F: Fn(T) -> A + 'static,
    {
        self.register(name, move || f(black_box(args)))
    }

    /// Title printed above the suite's table.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    /// Number of registered computations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Answer of every computation, computed once without timing.
    #[must_use]
    pub fn answers(&self) -> Vec<(&'static str, i64)> {
        self.entries.iter().map(|e| (e.name, (e.compute)())).collect()
    }

    /// Record every computation, in registration order.
    ///
    /// # Errors
    ///
    /// Returns the first failure, attributed to the experiment that caused it.
    pub fn run<'r>(&self, runner: &'r BenchmarkRunner) -> Result<ExperimentTable<'r>> {
        tracing::info!(
            suite = self.title,
            experiments = self.entries.len(),
            iterations = runner.policy().iterations(),
            "Running suite"
        );

        let mut table = ExperimentTable::new(runner);
        for entry in &self.entries {
            table.record(entry.name, || (entry.compute)())?;
        }

        tracing::info!(suite = self.title, "Suite finished");
        Ok(table)
    }
}

impl fmt::Debug for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suite")
            .field("title", &self.title)
            .field("entries", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
