//! The validated configuration space: three ordered axes plus run modes.

use std::fmt;

use crate::enumerate::Combinations;
use crate::error::{ConfigurationError, Result};
use crate::registry::{Named, Registry};
use crate::strategy::{RunModes, Strategy, Verbosity};

/// One independently enumerable configuration dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Problems,
    Heuristics,
    Strategies,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Problems => write!(f, "problems"),
            Axis::Heuristics => write!(f, "heuristics"),
            Axis::Strategies => write!(f, "strategies"),
        }
    }
}

/// Unresolved, identifier-level selection as read from the CLI or a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisSelection {
    pub problems: Vec<String>,
    pub heuristics: Vec<String>,
    pub strategies: Vec<String>,
    pub verbosity: u8,
    pub draw: bool,
    pub timing: bool,
}

/// Immutable, validated set of axes and run-mode flags.
///
/// Built once at startup; every axis is non-empty and every identifier has
/// already been resolved to its handle.
///
/// # Example
///
/// ```
/// use searchbench_core::{ConfigSpace, Named, RunModes, Strategy};
///
/// let space = ConfigSpace::new(
///     vec![Named::new("p1", ()), Named::new("p2", ())],
///     vec![Named::new("h1", ())],
///     vec![Strategy::GreedyBestFirst, Strategy::AStar],
///     RunModes::default(),
/// )
/// .unwrap();
///
/// assert_eq!(space.combination_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSpace<P, H> {
    problems: Vec<Named<P>>,
    heuristics: Vec<Named<H>>,
    strategies: Vec<Strategy>,
    modes: RunModes,
}

impl<P, H> ConfigSpace<P, H> {
    /// Creates a configuration space from already-resolved axes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyAxis`] for the first empty axis,
    /// checked in declaration order.
    pub fn new(
        problems: Vec<Named<P>>,
        heuristics: Vec<Named<H>>,
        strategies: Vec<Strategy>,
        modes: RunModes,
    ) -> Result<Self> {
        check_non_empty(Axis::Problems, problems.len())?;
        check_non_empty(Axis::Heuristics, heuristics.len())?;
        check_non_empty(Axis::Strategies, strategies.len())?;
        Ok(Self {
            problems,
            heuristics,
            strategies,
            modes,
        })
    }

    /// Resolves a selection against the problem and heuristic registries.
    ///
    /// Emptiness is checked before any identifier is looked up, so an empty
    /// axis is always reported as such.
    pub fn resolve(
        selection: &AxisSelection,
        problems: &Registry<P>,
        heuristics: &Registry<H>,
    ) -> Result<Self>
    where
        P: Clone,
        H: Clone,
    {
        check_non_empty(Axis::Problems, selection.problems.len())?;
        check_non_empty(Axis::Heuristics, selection.heuristics.len())?;
        check_non_empty(Axis::Strategies, selection.strategies.len())?;

        let verbosity = Verbosity::new(selection.verbosity)?;

        let problems = selection
            .problems
            .iter()
            .map(|name| {
                problems
                    .resolve(name)
                    .ok_or_else(|| ConfigurationError::UnknownProblem(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        let heuristics = selection
            .heuristics
            .iter()
            .map(|name| {
                heuristics
                    .resolve(name)
                    .ok_or_else(|| ConfigurationError::UnknownHeuristic(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        let strategies = selection
            .strategies
            .iter()
            .map(|tag| tag.parse::<Strategy>())
            .collect::<Result<Vec<_>>>()?;

        Self::new(
            problems,
            heuristics,
            strategies,
            RunModes::new(verbosity, selection.draw, selection.timing),
        )
    }

    pub fn problems(&self) -> &[Named<P>] {
        &self.problems
    }

    pub fn heuristics(&self) -> &[Named<H>] {
        &self.heuristics
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn modes(&self) -> RunModes {
        self.modes
    }

    /// Number of combinations the enumerator will produce (P × H × S).
    pub fn combination_count(&self) -> usize {
        self.problems.len() * self.heuristics.len() * self.strategies.len()
    }

    /// Enumerates the cartesian product, problems outermost and strategies innermost.
    pub fn combinations(&self) -> Combinations<'_, P, H> {
        Combinations::new(self)
    }
}

fn check_non_empty(axis: Axis, len: usize) -> Result<()> {
    if len == 0 {
        return Err(ConfigurationError::EmptyAxis(axis));
    }
    Ok(())
}
