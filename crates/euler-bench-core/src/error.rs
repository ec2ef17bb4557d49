//! Error types for euler-bench-core.

use thiserror::Error;

/// Errors that can occur while timing a computation.
#[derive(Debug, Error)]
pub enum Error {
    /// Iteration count below one. Rejected before any timing begins.
    #[error("invalid iteration count: {0} (must be at least 1)")]
    InvalidIterations(i64),

    /// The monotonic platform timer cannot be read.
    #[error("platform timer unavailable: {0}")]
    TimerUnavailable(String),

    /// A named experiment failed to complete.
    #[error("experiment `{name}` failed")]
    Experiment {
        /// Name the experiment was registered under.
        name: String,
        /// Underlying failure.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attribute this error to the named experiment.
    #[must_use]
    pub fn in_experiment(self, name: impl Into<String>) -> Self {
        Self::Experiment {
            name: name.into(),
            source: Box::new(self),
        }
    }
}

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, Error>;
