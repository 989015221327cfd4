//! searchbench core - configuration space, enumeration and the engine seam
//!
//! This crate provides the driver-independent abstractions:
//! - Registries mapping identifiers to problem and heuristic handles
//! - The validated configuration space and its combination enumerator
//! - Run descriptors for demonstration and timed invocations
//! - The `SearchEngine` trait implemented by concrete search engines

pub mod descriptor;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod registry;
pub mod space;
pub mod strategy;

#[cfg(test)]
mod space_tests;

pub use descriptor::{run_title, RunDescriptor, RunPhase};
pub use engine::SearchEngine;
pub use enumerate::{enumerate, Combination, CombinationId, Combinations};
pub use error::{CombinationExecutionError, ConfigurationError, EngineError};
pub use registry::{Named, Registry};
pub use space::{Axis, AxisSelection, ConfigSpace};
pub use strategy::{RunModes, Strategy, Verbosity};
