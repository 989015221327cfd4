//! Run descriptors: the complete parameter set handed to the engine.

use std::fmt;

use crate::enumerate::Combination;
use crate::registry::Named;
use crate::strategy::{Strategy, Verbosity};

/// Builds the human-readable label `"<strategy>, <heuristic>, <problem>"`.
///
/// ```
/// use searchbench_core::{run_title, Strategy};
///
/// assert_eq!(run_title(Strategy::AStar, "h_edist", "rect20a"), "a*, h_edist, rect20a");
/// ```
pub fn run_title(strategy: Strategy, heuristic: &str, problem: &str) -> String {
    format!("{}, {}, {}", strategy.tag(), heuristic, problem)
}

/// Which of the two invocations of a combination is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunPhase {
    /// Configured verbosity and draw flag.
    Demo,
    /// Silent, no drawing, wrapped in the benchmark timer.
    Timed,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPhase::Demo => write!(f, "demo"),
            RunPhase::Timed => write!(f, "timed"),
        }
    }
}

/// Parameters for a single engine invocation.
///
/// Created fresh for every run and consumed by it. There is no way to build a
/// timed descriptor with anything other than silent verbosity and drawing off.
#[derive(Debug)]
pub struct RunDescriptor<'s, P, H> {
    phase: RunPhase,
    problem: &'s Named<P>,
    strategy: Strategy,
    heuristic: &'s Named<H>,
    verbosity: Verbosity,
    draw: bool,
    title: String,
}

impl<'s, P, H> RunDescriptor<'s, P, H> {
    /// Descriptor for the demonstration run, using the configured modes.
    pub fn demo(combination: &Combination<'s, P, H>) -> Self {
        let modes = combination.modes();
        Self::build(RunPhase::Demo, combination, modes.verbosity, modes.draw)
    }

    /// Descriptor for the timed run: verbosity 0 and no drawing, regardless
    /// of the configured modes.
    pub fn timed(combination: &Combination<'s, P, H>) -> Self {
        Self::build(RunPhase::Timed, combination, Verbosity::SILENT, false)
    }

    fn build(
        phase: RunPhase,
        combination: &Combination<'s, P, H>,
        verbosity: Verbosity,
        draw: bool,
    ) -> Self {
        Self {
            phase,
            problem: combination.problem(),
            strategy: combination.strategy(),
            heuristic: combination.heuristic(),
            verbosity,
            draw,
            title: combination.title(),
        }
    }

    #[inline]
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    #[inline]
    pub fn problem(&self) -> &'s Named<P> {
        self.problem
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn heuristic(&self) -> &'s Named<H> {
        self.heuristic
    }

    #[inline]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    #[inline]
    pub fn draw(&self) -> bool {
        self.draw
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }
}
