//! Times repeated invocations of a computation.

use crate::clock::HighResolutionClock;
use crate::opaque::Computation;
use crate::policy::RunPolicy;
use crate::{Error, Result};
use std::hint::black_box;

/// Runs a computation back-to-back between two clock readings.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkRunner {
    clock: HighResolutionClock,
    policy: RunPolicy,
}

impl BenchmarkRunner {
    /// Create a runner with the default [`RunPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimerUnavailable`] if the platform timer cannot be used.
    pub fn new() -> Result<Self> {
        Self::with_policy(RunPolicy::default())
    }

    /// Create a runner with an explicit policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimerUnavailable`] if the platform timer cannot be used.
    pub fn with_policy(policy: RunPolicy) -> Result<Self> {
        Ok(Self {
            clock: HighResolutionClock::new()?,
            policy,
        })
    }

    /// Policy this runner measures with.
    #[must_use]
    pub fn policy(&self) -> &RunPolicy {
        &self.policy
    }

    /// Clock this runner reads.
    #[must_use]
    pub fn clock(&self) -> &HighResolutionClock {
        &self.clock
    }

    /// Time `iterations` sequential invocations and return the total in milliseconds.
    ///
    /// When the policy enables warm-up, one extra untimed invocation runs first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIterations`] if `iterations < 1`, without invoking
    /// the computation, or [`Error::TimerUnavailable`] if a clock read fails.
    pub fn run<C>(&self, computation: &C, iterations: i64) -> Result<f64>
    where
        C: Computation + ?Sized,
    {
        if iterations < 1 {
            return Err(Error::InvalidIterations(iterations));
        }

        if self.policy.warm_up() {
            black_box(computation.invoke());
        }

        let start = self.clock.now()?;
        for _ in 0..iterations {
            black_box(computation.invoke());
        }
        let finish = self.clock.now()?;

        let elapsed_ms = self.clock.elapsed_ms(start, finish);
        tracing::debug!(iterations, elapsed_ms, "Timed loop finished");
        Ok(elapsed_ms)
    }

    /// Time a computation with the policy's iteration count.
    ///
    /// # Errors
    ///
    /// Same as [`BenchmarkRunner::run`].
    pub fn measure<C>(&self, computation: &C) -> Result<f64>
    where
        C: Computation + ?Sized,
    {
        self.run(computation, self.policy.iterations())
    }
}
