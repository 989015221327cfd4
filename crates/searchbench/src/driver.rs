//! The top-level run loop.

use std::fmt;
use std::io;
use std::time::{Duration, Instant};

use searchbench_benchmark::{BenchmarkConfig, BenchmarkResult};
use searchbench_core::{
    Combination, CombinationExecutionError, ConfigSpace, ConfigurationError, EngineError,
    SearchEngine,
};
use tracing::{info, warn};

use crate::error::{DriverError, Result};
use crate::interrupt::InterruptController;
use crate::invoker::RunInvoker;
use crate::prompt::OperatorPrompt;
use crate::report::{CombinationOutcome, DriverReport};

/// Lifecycle of a [`Driver`]. There is no way back from `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Initializing,
    Running,
    Terminated,
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverState::Initializing => write!(f, "initializing"),
            DriverState::Running => write!(f, "running"),
            DriverState::Terminated => write!(f, "terminated"),
        }
    }
}

/// Runs every combination of a [`ConfigSpace`] through a [`SearchEngine`].
///
/// Combinations run one after another on the calling thread. For each one the
/// driver performs the demo run, and when timing is enabled also the timed run
/// followed by the operator pause. An engine failure is reported and the loop
/// moves on; only cancellation stops it early. An interrupted engine pause or
/// operator prompt counts as cancellation.
#[derive(Debug)]
pub struct Driver<E, R> {
    invoker: RunInvoker<E>,
    prompt: R,
    interrupt: InterruptController,
    state: DriverState,
}

impl<E, R> Driver<E, R>
where
    E: SearchEngine,
    R: OperatorPrompt,
{
    /// Driver listening for Ctrl-C once [`run`](Self::run) starts.
    pub fn new(engine: E, benchmark: BenchmarkConfig, prompt: R) -> Self {
        Self {
            invoker: RunInvoker::new(engine, benchmark),
            prompt,
            interrupt: InterruptController::new(),
            state: DriverState::Initializing,
        }
    }

    pub fn with_interrupt(mut self, interrupt: InterruptController) -> Self {
        self.interrupt = interrupt;
        self
    }

    pub fn interrupt(&self) -> &InterruptController {
        &self.interrupt
    }

    pub fn engine(&self) -> &E {
        self.invoker.engine()
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Runs all combinations in enumeration order.
    ///
    /// # Errors
    ///
    /// [`DriverError::Cancelled`] if cancellation is observed at a checkpoint,
    /// [`DriverError::Interrupt`] if the handler cannot be installed, and
    /// [`DriverError::Prompt`] if the operator pause fails. In every case the
    /// driver ends up `Terminated`.
    pub fn run(&mut self, space: &ConfigSpace<E::Problem, E::Heuristic>) -> Result<DriverReport> {
        let result = self.run_all(space);
        self.state = DriverState::Terminated;
        result
    }

    fn run_all(&mut self, space: &ConfigSpace<E::Problem, E::Heuristic>) -> Result<DriverReport> {
        if self.state != DriverState::Initializing {
            return Err(DriverError::Config(ConfigurationError::Invalid(format!(
                "driver cannot start while {}",
                self.state
            ))));
        }
        self.interrupt.arm().map_err(DriverError::Interrupt)?;
        self.state = DriverState::Running;

        let total = space.combination_count();
        let modes = space.modes();
        info!(
            event = "run_start",
            total,
            problems = space.problems().len(),
            heuristics = space.heuristics().len(),
            strategies = space.strategies().len(),
            verbosity = modes.verbosity.level(),
            draw = modes.draw,
            timing = modes.timing,
        );

        let started = Instant::now();
        let mut report = DriverReport::with_capacity(total);
        for combination in space.combinations() {
            self.run_combination(&combination, total, &mut report)?;
        }

        info!(
            event = "run_end",
            total,
            succeeded = report.succeeded(),
            failed = report.failed(),
            duration_ms = started.elapsed().as_millis() as u64,
        );
        Ok(report)
    }

    fn run_combination(
        &mut self,
        combination: &Combination<'_, E::Problem, E::Heuristic>,
        total: usize,
        report: &mut DriverReport,
    ) -> Result<()> {
        self.interrupt.checkpoint()?;

        let title = combination.title();
        info!(
            event = "combination_start",
            index = combination.index() + 1,
            total,
            title = %title,
        );

        let demo = match self.invoker.run_demo(combination) {
            Ok(output) => {
                let summary = self.invoker.engine().summarize(&output);
                info!(event = "demo_end", title = %title, summary = %summary);
                Ok(summary)
            }
            Err(error) => {
                self.handle_failure(&error);
                Err(error)
            }
        };
        let demo_ok = demo.is_ok();
        report.push(CombinationOutcome {
            id: combination.id(),
            demo,
            timing: None,
        });
        self.interrupt.checkpoint()?;

        if !combination.modes().timing || !demo_ok {
            return Ok(());
        }

        let timing = self.invoker.run_timed(combination);
        match &timing {
            Ok(result) => report_benchmark(&title, result),
            Err(error) => self.handle_failure(error),
        }
        if let Some(outcome) = report.last_mut() {
            outcome.timing = Some(timing);
        }
        self.interrupt.checkpoint()?;

        match self.prompt.wait_for_continue(&title) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => self.interrupt.request_cancel(),
            result => result.map_err(DriverError::Prompt)?,
        }
        self.interrupt.checkpoint()
    }

    fn handle_failure(&self, error: &CombinationExecutionError) {
        if matches!(error.source, EngineError::Interrupted) {
            self.interrupt.request_cancel();
        } else {
            report_failure(error);
        }
    }
}

fn report_failure(error: &CombinationExecutionError) {
    warn!(
        event = "combination_failed",
        title = %error.combination,
        phase = %error.phase,
        error = %error.source,
    );
}

fn report_benchmark(title: &str, result: &BenchmarkResult) {
    info!(
        event = "benchmark_end",
        title = %title,
        runs = result.run_count(),
        mean_ms = millis(result.mean()),
        min_ms = millis(result.min()),
        max_ms = millis(result.max()),
        std_dev_ms = millis(result.std_dev()),
    );
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
