//! searchbench - combinatorial run driver
//!
//! Runs every (problem, heuristic, strategy) combination of a
//! [`ConfigSpace`](searchbench_core::ConfigSpace) through a
//! [`SearchEngine`](searchbench_core::SearchEngine):
//! - `RunInvoker`: demo run with the configured modes, timed run silent and undrawn
//! - `InterruptController`: Ctrl-C handling and cooperative cancellation checkpoints
//! - `OperatorPrompt`: the pause after each timed combination
//! - `Driver`: the loop tying them together

pub mod driver;
pub mod error;
pub mod interrupt;
pub mod invoker;
pub mod prompt;
pub mod report;

#[cfg(test)]
mod driver_tests;

pub use driver::{Driver, DriverState};
pub use error::DriverError;
pub use interrupt::{CancellationToken, InterruptController, InterruptState, EXIT_CANCELLED};
pub use invoker::RunInvoker;
pub use prompt::{wait_for_line, OperatorPrompt, TerminalPrompt};
pub use report::{CombinationOutcome, DriverReport};
