//! A recording [`SearchEngine`] for driver tests.

use std::sync::Mutex;

use searchbench_core::{EngineError, RunDescriptor, RunPhase, SearchEngine, Strategy, Verbosity};

/// Everything the engine was told for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRun {
    pub phase: RunPhase,
    pub problem: String,
    pub heuristic: String,
    pub strategy: Strategy,
    pub verbosity: Verbosity,
    pub draw: bool,
    pub title: String,
}

type Hook = Box<dyn Fn(&RecordedRun) + Send + Sync>;

/// Records each descriptor it receives and answers with a canned result.
///
/// Runs on problems marked as failing return [`EngineError::Unsolvable`];
/// a failure can be limited to one phase. Demonstration runs on problems
/// marked as interrupted return [`EngineError::Interrupted`], as if the
/// operator pressed Ctrl-C during an engine pause.
#[derive(Default)]
pub struct RecordingEngine {
    calls: Mutex<Vec<RecordedRun>>,
    failures: Vec<(String, Option<RunPhase>)>,
    interrupts: Vec<String>,
    hook: Option<Hook>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails every run on `problem`.
    pub fn failing_on(mut self, problem: impl Into<String>) -> Self {
        self.failures.push((problem.into(), None));
        self
    }

    /// Fails only the `phase` run on `problem`.
    pub fn failing_on_phase(mut self, problem: impl Into<String>, phase: RunPhase) -> Self {
        self.failures.push((problem.into(), Some(phase)));
        self
    }

    /// Interrupts the demonstration run on `problem`.
    pub fn interrupted_on(mut self, problem: impl Into<String>) -> Self {
        self.interrupts.push(problem.into());
        self
    }

    /// Runs `hook` after recording each call.
    pub fn with_hook(mut self, hook: impl Fn(&RecordedRun) + Send + Sync + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Snapshot of every recorded call, in invocation order.
    pub fn calls(&self) -> Vec<RecordedRun> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Recorded calls of one phase.
    pub fn calls_in(&self, phase: RunPhase) -> Vec<RecordedRun> {
        self.calls()
            .into_iter()
            .filter(|run| run.phase == phase)
            .collect()
    }

    /// Titles of the recorded calls of one phase.
    pub fn titles(&self, phase: RunPhase) -> Vec<String> {
        self.calls_in(phase).into_iter().map(|run| run.title).collect()
    }

    fn fails(&self, run: &RecordedRun) -> bool {
        self.failures
            .iter()
            .any(|(problem, phase)| *problem == run.problem && phase.map_or(true, |p| p == run.phase))
    }
}

impl SearchEngine for RecordingEngine {
    type Problem = ();
    type Heuristic = ();
    type Output = String;

    fn run(&self, descriptor: &RunDescriptor<'_, (), ()>) -> Result<String, EngineError> {
        let run = RecordedRun {
            phase: descriptor.phase(),
            problem: descriptor.problem().name().to_string(),
            heuristic: descriptor.heuristic().name().to_string(),
            strategy: descriptor.strategy(),
            verbosity: descriptor.verbosity(),
            draw: descriptor.draw(),
            title: descriptor.title().to_string(),
        };
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(run.clone());
        }
        if let Some(hook) = &self.hook {
            hook(&run);
        }

        if run.phase == RunPhase::Demo && self.interrupts.contains(&run.problem) {
            Err(EngineError::Interrupted)
        } else if self.fails(&run) {
            Err(EngineError::Unsolvable)
        } else {
            Ok(format!("solved {}", run.title))
        }
    }
}
