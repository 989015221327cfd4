//! Driver-level errors.

use std::io;

use searchbench_core::ConfigurationError;
use thiserror::Error;

/// Errors that end a driver run.
///
/// Per-combination engine failures never appear here; they are recorded in
/// the [`DriverReport`](crate::DriverReport) instead.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigurationError),

    /// The operator asked to abort the run
    #[error("cancellation requested")]
    Cancelled,

    #[error("operator prompt failed: {0}")]
    Prompt(#[source] io::Error),

    #[error("failed to install interrupt handler: {0}")]
    Interrupt(#[source] io::Error),
}

impl DriverError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DriverError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, DriverError>;
