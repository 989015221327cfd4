//! Configuration spaces whose problem and heuristic handles are `()`.

use searchbench_core::{ConfigSpace, Named, RunModes, Strategy};

/// Builds a space from identifiers alone.
///
/// # Panics
///
/// Panics if any axis is empty.
pub fn unit_space(
    problems: &[&str],
    heuristics: &[&str],
    strategies: &[Strategy],
    modes: RunModes,
) -> ConfigSpace<(), ()> {
    ConfigSpace::new(
        problems.iter().map(|p| Named::new(*p, ())).collect(),
        heuristics.iter().map(|h| Named::new(*h, ())).collect(),
        strategies.to_vec(),
        modes,
    )
    .expect("fixture axes must be non-empty")
}
