//! Error types for searchbench

use std::io;

use thiserror::Error;

use crate::descriptor::RunPhase;
use crate::enumerate::CombinationId;
use crate::space::Axis;

/// Raised once at startup, before any run begins.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// One of the three axes has no items
    #[error("the {0} axis is empty")]
    EmptyAxis(Axis),

    /// Verbosity outside `0..=4`
    #[error("verbosity must be between 0 and 4, got {0}")]
    InvalidVerbosity(u8),

    /// Problem identifier not present in the problem registry
    #[error("unknown problem '{0}'")]
    UnknownProblem(String),

    /// Heuristic identifier not present in the heuristic registry
    #[error("unknown heuristic '{0}'")]
    UnknownHeuristic(String),

    /// Strategy tag outside the fixed vocabulary
    #[error("unknown strategy '{0}' (expected one of bf, df, uc, gbf, a*)")]
    UnknownStrategy(String),

    /// Any other malformed setting
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Failure reported by a [`SearchEngine`](crate::SearchEngine) for one invocation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The search exhausted the state space without reaching a goal
    #[error("no solution found")]
    Unsolvable,

    /// The problem definition is structurally invalid
    #[error("malformed problem: {0}")]
    MalformedProblem(String),

    /// The engine cannot run this strategy/heuristic pairing
    #[error("unsupported combination: {0}")]
    Unsupported(String),

    /// The operator interrupted a pause inside the engine
    #[error("interrupted by the operator")]
    Interrupted,

    /// I/O failure while the engine was producing output
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for EngineError {
    fn from(error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::Interrupted {
            EngineError::Interrupted
        } else {
            EngineError::Io(error)
        }
    }
}

/// An [`EngineError`] tagged with the combination that produced it.
///
/// Recovered locally by the driver: the failure is reported and iteration
/// moves on to the next combination.
#[derive(Debug, Error)]
#[error("{phase} run of '{combination}' failed: {source}")]
pub struct CombinationExecutionError {
    pub combination: CombinationId,
    pub phase: RunPhase,
    #[source]
    pub source: EngineError,
}

impl CombinationExecutionError {
    pub fn new(combination: CombinationId, phase: RunPhase, source: EngineError) -> Self {
        Self {
            combination,
            phase,
            source,
        }
    }
}

/// Result type alias for configuration validation.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
