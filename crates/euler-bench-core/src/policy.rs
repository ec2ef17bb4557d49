//! Harness configuration.

use crate::{Error, Result};

/// Timed invocations per experiment.
pub const DEFAULT_ITERATIONS: i64 = 100;

/// Minimum width of the name column in rendered tables.
pub const DEFAULT_NAME_WIDTH: usize = 30;

/// How experiments are measured and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPolicy {
    iterations: i64,
    warm_up: bool,
    name_width: usize,
}

impl Default for RunPolicy {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            warm_up: true,
            name_width: DEFAULT_NAME_WIDTH,
        }
    }
}

impl RunPolicy {
    /// Start building a policy from the defaults.
    #[must_use]
    pub fn builder() -> RunPolicyBuilder {
        RunPolicyBuilder::new()
    }

    /// Timed invocations per experiment.
    #[must_use]
    pub fn iterations(&self) -> i64 {
        self.iterations
    }

    /// Whether one untimed invocation precedes the timed loop.
    #[must_use]
    pub fn warm_up(&self) -> bool {
        self.warm_up
    }

    /// Minimum width of the name column.
    #[must_use]
    pub fn name_width(&self) -> usize {
        self.name_width
    }
}

/// Builder for [`RunPolicy`].
#[derive(Debug, Clone)]
pub struct RunPolicyBuilder {
    policy: RunPolicy,
}

impl Default for RunPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RunPolicyBuilder {
    /// Create a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: RunPolicy::default(),
        }
    }

    /// Set the number of timed invocations.
    #[must_use]
    pub fn iterations(mut self, iterations: i64) -> Self {
        self.policy.iterations = iterations;
        self
    }

    /// Enable or disable the untimed warm-up invocation.
    #[must_use]
    pub fn warm_up(mut self, warm_up: bool) -> Self {
        self.policy.warm_up = warm_up;
        self
    }

    /// Set the minimum name column width.
    #[must_use]
    pub fn name_width(mut self, width: usize) -> Self {
        self.policy.name_width = width;
        self
    }

    /// Validate and build the policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIterations`] if the iteration count is below one.
    pub fn build(self) -> Result<RunPolicy> {
        if self.policy.iterations < 1 {
            return Err(Error::InvalidIterations(self.policy.iterations));
        }
        Ok(self.policy)
    }
}
