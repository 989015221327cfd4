use searchbench::DriverError;
use searchbench_config::ConfigError;
use searchbench_core::ConfigurationError;
use searchbench_racetrack::ProblemFileError;
use thiserror::Error;

pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    ProblemFile(#[from] ProblemFileError),

    #[error(transparent)]
    Space(#[from] ConfigurationError),

    #[error(transparent)]
    Driver(#[from] DriverError),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) | CliError::ProblemFile(_) | CliError::Space(_) => EXIT_CONFIG,
            CliError::Driver(DriverError::Config(_)) => EXIT_CONFIG,
            CliError::Driver(DriverError::Cancelled) => searchbench::EXIT_CANCELLED as u8,
            CliError::Driver(_) => EXIT_FAILURE,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, CliError::Driver(e) if e.is_cancelled())
    }
}
