//! Heuristic functions for the racetrack domain.
//!
//! A [`Heuristic`] is the cheap, copyable handle stored in the configuration
//! space. Before a search it is prepared against the concrete track, which is
//! where any per-track precomputation (such as the wall-distance grid) lives.
//!
//! Only `h0` and `h_nmoves` are admissible.

mod distance;
mod nmoves;
mod walldist;

use std::fmt;

use searchbench_core::Registry;

use crate::track::{Racetrack, State};

pub use distance::{euclidean_distance, euclidean_stopping_distance};
pub use nmoves::{cruise_distance, move_count, moves_to_finish};
pub use walldist::WallDistanceGrid;

/// Identifier of a racetrack heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Always zero.
    Zero,
    /// Euclidean distance to the nearest finish point, ignoring walls.
    Euclidean,
    /// [`Heuristic::Euclidean`] plus an estimate of the stopping distance.
    EuclideanStopping,
    /// Wall-aware grid distance plus stopping penalties.
    WallDistance,
    /// Exact number of moves needed if there were no walls.
    MoveCount,
}

impl Heuristic {
    pub const ALL: [Heuristic; 5] = [
        Heuristic::Zero,
        Heuristic::Euclidean,
        Heuristic::EuclideanStopping,
        Heuristic::WallDistance,
        Heuristic::MoveCount,
    ];

    /// Registry identifier.
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Zero => "h0",
            Heuristic::Euclidean => "h_edist",
            Heuristic::EuclideanStopping => "h_esdist",
            Heuristic::WallDistance => "h_walldist",
            Heuristic::MoveCount => "h_nmoves",
        }
    }

    pub fn is_admissible(self) -> bool {
        matches!(self, Heuristic::Zero | Heuristic::MoveCount)
    }

    /// Binds the heuristic to `track`, doing any precomputation it needs.
    pub fn prepare(self, track: &Racetrack) -> PreparedHeuristic<'_> {
        let grid = match self {
            Heuristic::WallDistance => Some(WallDistanceGrid::new(track)),
            _ => None,
        };
        PreparedHeuristic {
            heuristic: self,
            track,
            grid,
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A heuristic bound to one track for the duration of a search.
#[derive(Debug)]
pub struct PreparedHeuristic<'t> {
    heuristic: Heuristic,
    track: &'t Racetrack,
    grid: Option<WallDistanceGrid>,
}

impl PreparedHeuristic<'_> {
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Estimated remaining cost from `state`. May be infinite when the grid
    /// finds no way to the finish.
    pub fn estimate(&self, state: &State) -> f64 {
        match (self.heuristic, &self.grid) {
            (Heuristic::Zero, _) => 0.0,
            (Heuristic::Euclidean, _) => euclidean_distance(state, self.track),
            (Heuristic::EuclideanStopping, _) => euclidean_stopping_distance(state, self.track),
            (Heuristic::WallDistance, Some(grid)) => grid.estimate(state, self.track),
            (Heuristic::WallDistance, None) => f64::INFINITY,
            (Heuristic::MoveCount, _) => moves_to_finish(state, self.track) as f64,
        }
    }
}

/// Registry of every bundled heuristic under its identifier.
pub fn builtin_heuristics() -> Registry<Heuristic> {
    Heuristic::ALL.into_iter().map(|h| (h.name(), h)).collect()
}

#[cfg(test)]
mod tests;
