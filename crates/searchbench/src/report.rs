//! Outcomes collected over a driver run.

use searchbench_benchmark::BenchmarkResult;
use searchbench_core::{CombinationExecutionError, CombinationId};

/// What happened to one combination.
#[derive(Debug)]
pub struct CombinationOutcome {
    pub id: CombinationId,
    /// Display form of the engine output, or the demo failure.
    pub demo: Result<String, CombinationExecutionError>,
    /// `None` when timing is off or the demo run already failed.
    pub timing: Option<Result<BenchmarkResult, CombinationExecutionError>>,
}

impl CombinationOutcome {
    pub fn is_success(&self) -> bool {
        self.demo.is_ok() && self.timing.as_ref().map_or(true, Result::is_ok)
    }

    pub fn error(&self) -> Option<&CombinationExecutionError> {
        match (&self.demo, &self.timing) {
            (Err(e), _) | (_, Some(Err(e))) => Some(e),
            _ => None,
        }
    }
}

/// One outcome per enumerated combination, in emission order.
#[derive(Debug, Default)]
pub struct DriverReport {
    outcomes: Vec<CombinationOutcome>,
}

impl DriverReport {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, outcome: CombinationOutcome) {
        self.outcomes.push(outcome);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut CombinationOutcome> {
        self.outcomes.last_mut()
    }

    pub fn outcomes(&self) -> &[CombinationOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CombinationExecutionError> {
        self.outcomes.iter().filter_map(CombinationOutcome::error)
    }
}
