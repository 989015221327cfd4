//! Benchmark runner.

use std::time::Instant;

use tracing::trace;

use crate::config::BenchmarkConfig;
use crate::result::{BenchmarkResult, BenchmarkRun};

/// Executes a routine repeatedly and collects wall-clock timings.
///
/// Warmup iterations run first and are not recorded. Each iteration calls
/// `setup` outside the measured interval and hands its value to `routine`,
/// which is the only thing the timer covers.
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: BenchmarkConfig,
}

impl Benchmark {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs the benchmark and returns aggregated results.
    ///
    /// The first routine error, in a warmup or measured iteration, aborts the
    /// benchmark and is returned as is.
    pub fn measure<I, O, E, S, R>(&self, mut setup: S, mut routine: R) -> Result<BenchmarkResult, E>
    where
        S: FnMut() -> I,
        R: FnMut(I) -> Result<O, E>,
    {
        for warmup in 0..self.config.warmup_count() {
            let input = setup();
            routine(input)?;
            trace!(benchmark = self.config.name(), warmup, "warmup done");
        }

        let mut result = BenchmarkResult::new(self.config.name());
        for run_index in 0..self.config.run_count() {
            let input = setup();
            let start = Instant::now();
            let output = routine(input)?;
            let duration = start.elapsed();
            drop(output);

            trace!(
                benchmark = self.config.name(),
                run_index,
                micros = duration.as_micros() as u64,
                "run measured"
            );
            result.add_run(BenchmarkRun {
                run_index,
                duration,
            });
        }

        Ok(result)
    }
}
