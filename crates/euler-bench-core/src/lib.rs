//! Timing harness for comparing implementations of the same computation.
//!
//! The harness reads a monotonic high-resolution clock around a loop of
//! repeated invocations, hides the invoked computation from the optimizer,
//! and ranks the results by elapsed time.
//!
//! # Example
//!
//! ```
//! use euler_bench_core::{BenchmarkRunner, RunPolicy, Suite};
//!
//! fn sum_below(limit: i32) -> i32 {
//!     (1..limit).filter(|i| i % 3 == 0 || i % 5 == 0).sum()
//! }
//!
//! let policy = RunPolicy::builder().iterations(10).build().unwrap();
//! let runner = BenchmarkRunner::with_policy(policy).unwrap();
//!
//! let table = Suite::new("multiples")
//!     .register_with("filter", sum_below, 1000)
//!     .run(&runner)
//!     .unwrap();
//!
//! assert_eq!(table.experiments()[0].answer(), 233_168);
//! for line in table.render() {
//!     println!("{line}");
//! }
//! ```

#![deny(missing_docs)]
#![deny(clippy::panic)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
mod error;
mod experiment;
pub mod opaque;
mod policy;
mod runner;
mod suite;

pub use clock::{HighResolutionClock, Instant};
pub use error::{Error, Result};
pub use experiment::{Experiment, ExperimentTable};
pub use opaque::{Computation, Opaque};
pub use policy::{RunPolicy, RunPolicyBuilder, DEFAULT_ITERATIONS, DEFAULT_NAME_WIDTH};
pub use runner::BenchmarkRunner;
pub use suite::Suite;
