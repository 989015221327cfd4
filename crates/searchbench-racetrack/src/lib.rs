//! Racetrack search domain for searchbench.
//!
//! A car on an integer grid starts at rest and must come to a stop on the
//! finish line without touching a wall. Each move changes each velocity
//! component by at most one. This crate provides:
//! - The track model and exact wall-crash geometry
//! - The bundled heuristics (`h0`, `h_edist`, `h_esdist`, `h_walldist`, `h_nmoves`)
//! - A graph-search-redo engine for the bf, df, uc, gbf and a* strategies
//! - Bundled problems, TOML problem files and ASCII drawing

pub mod engine;
pub mod geometry;
pub mod heuristic;
pub mod problem_file;
pub mod render;
pub mod samples;
pub mod search;
pub mod track;


pub use engine::RacetrackEngine;
pub use geometry::{Point, Segment};
pub use heuristic::{builtin_heuristics, Heuristic, PreparedHeuristic};
pub use problem_file::{load_problems, parse_problems, ProblemFileError};
pub use render::render;
pub use samples::builtin_problems;
pub use search::{GraphSearch, PauseFn, SearchStats, Solution};
pub use track::{Racetrack, State};
