//! Timing facility for searchbench.
//!
//! Wraps a fallible routine in warmup and measurement iterations and reports
//! wall-clock statistics. Per-iteration setup is kept outside the measured
//! interval.
//!
//! # Example
//!
//! ```
//! use searchbench_benchmark::{Benchmark, BenchmarkConfig};
//!
//! let benchmark = Benchmark::new(
//!     BenchmarkConfig::new("sum")
//!         .with_warmup_count(1)
//!         .with_run_count(3),
//! );
//!
//! let result = benchmark
//!     .measure(|| (1..=100u64).collect::<Vec<_>>(), |v| Ok::<_, ()>(v.iter().sum::<u64>()))
//!     .unwrap();
//!
//! assert_eq!(result.run_count(), 3);
//! assert!(result.min() <= result.max());
//! ```

mod config;
mod result;
mod runner;

pub use config::BenchmarkConfig;
pub use result::{BenchmarkResult, BenchmarkRun};
pub use runner::Benchmark;
