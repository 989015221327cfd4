//! Demonstration and timed invocations of one combination.

use searchbench_benchmark::{Benchmark, BenchmarkConfig, BenchmarkResult};
use searchbench_core::{
    Combination, CombinationExecutionError, RunDescriptor, RunPhase, SearchEngine,
};

/// Builds run descriptors and calls the engine.
///
/// Engine failures come back tagged with the combination and phase; the
/// invoker never retries.
#[derive(Debug)]
pub struct RunInvoker<E> {
    engine: E,
    benchmark: BenchmarkConfig,
}

impl<E: SearchEngine> RunInvoker<E> {
    pub fn new(engine: E, benchmark: BenchmarkConfig) -> Self {
        Self { engine, benchmark }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Runs the combination once with its configured verbosity and draw flag.
    pub fn run_demo(
        &self,
        combination: &Combination<'_, E::Problem, E::Heuristic>,
    ) -> Result<E::Output, CombinationExecutionError> {
        let descriptor = RunDescriptor::demo(combination);
        self.engine
            .run(&descriptor)
            .map_err(|source| CombinationExecutionError::new(combination.id(), RunPhase::Demo, source))
    }

    /// Times the combination with silent, undrawn runs.
    ///
    /// Each repetition gets its own descriptor, built outside the measured
    /// interval.
    pub fn run_timed(
        &self,
        combination: &Combination<'_, E::Problem, E::Heuristic>,
    ) -> Result<BenchmarkResult, CombinationExecutionError> {
        let benchmark = Benchmark::new(self.benchmark.renamed(combination.title()));
        benchmark
            .measure(
                || RunDescriptor::timed(combination),
                |descriptor| self.engine.run(&descriptor),
            )
            .map_err(|source| {
                CombinationExecutionError::new(combination.id(), RunPhase::Timed, source)
            })
    }
}
