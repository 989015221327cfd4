//! Benchmark result types.

use std::time::Duration;

/// One measured iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkRun {
    /// Run index (0-based, warmups excluded).
    pub run_index: usize,
    /// Wall-clock time of the routine alone.
    pub duration: Duration,
}

/// Aggregated timings from the measured runs of one benchmark.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Benchmark name.
    pub name: String,
    /// Individual runs.
    pub runs: Vec<BenchmarkRun>,
}

impl BenchmarkResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs: Vec::new(),
        }
    }

    pub fn add_run(&mut self, run: BenchmarkRun) {
        self.runs.push(run);
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Returns the mean run time.
    ///
    /// # Example
    ///
    /// ```
    /// use searchbench_benchmark::{BenchmarkResult, BenchmarkRun};
    /// use std::time::Duration;
    ///
    /// let mut result = BenchmarkResult::new("Test");
    /// result.add_run(BenchmarkRun { run_index: 0, duration: Duration::from_millis(100) });
    /// result.add_run(BenchmarkRun { run_index: 1, duration: Duration::from_millis(200) });
    ///
    /// assert_eq!(result.mean(), Duration::from_millis(150));
    /// ```
    pub fn mean(&self) -> Duration {
        if self.runs.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.runs.iter().map(|r| r.duration).sum();
        total / self.runs.len() as u32
    }

    pub fn min(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.duration)
            .min()
            .unwrap_or(Duration::ZERO)
    }

    pub fn max(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.duration)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Population standard deviation of the run times.
    pub fn std_dev(&self) -> Duration {
        if self.runs.len() < 2 {
            return Duration::ZERO;
        }
        let mean = self.mean().as_secs_f64();
        let variance = self
            .runs
            .iter()
            .map(|r| {
                let d = r.duration.as_secs_f64() - mean;
                d * d
            })
            .sum::<f64>()
            / self.runs.len() as f64;
        Duration::from_secs_f64(variance.sqrt())
    }
}
