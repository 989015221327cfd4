//! Benchmark configuration.

/// Configuration for timing one combination.
///
/// Controls the number of unmeasured warmup iterations and measured runs.
///
/// # Example
///
/// ```
/// use searchbench_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("a*, h_walldist, rect20a")
///     .with_warmup_count(3)
///     .with_run_count(10);
///
/// assert_eq!(config.name(), "a*, h_walldist, rect20a");
/// assert_eq!(config.warmup_count(), 3);
/// assert_eq!(config.run_count(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    name: String,
    warmup_count: usize,
    run_count: usize,
}

impl BenchmarkConfig {
    pub const DEFAULT_WARMUP_COUNT: usize = 1;
    pub const DEFAULT_RUN_COUNT: usize = 10;

    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - warmup_count: 1
    /// - run_count: 10
    ///
    /// # Example
    ///
    /// ```
    /// use searchbench_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test");
    /// assert_eq!(config.warmup_count(), 1);
    /// assert_eq!(config.run_count(), 10);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warmup_count: Self::DEFAULT_WARMUP_COUNT,
            run_count: Self::DEFAULT_RUN_COUNT,
        }
    }

    /// Sets the number of warmup iterations (not measured).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the number of measurement runs.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count;
        self
    }

    /// Same counts under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    pub fn run_count(&self) -> usize {
        self.run_count
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Benchmark")
    }
}
