//! Shared test fixtures for searchbench crates.
//!
//! - [`engine`] - A fake search engine that records every invocation
//! - [`space`] - Builders for configuration spaces over unit handles
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! searchbench-test = { workspace = true }
//! ```

pub mod engine;
pub mod space;

pub use engine::{RecordedRun, RecordingEngine};
pub use space::unit_space;
