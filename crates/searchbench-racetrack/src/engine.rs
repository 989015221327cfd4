//! The racetrack [`SearchEngine`].

use std::fmt;
use std::sync::Arc;

use searchbench_core::{EngineError, RunDescriptor, SearchEngine};
use tracing::info;

use crate::heuristic::Heuristic;
use crate::render::render;
use crate::search::{GraphSearch, PauseFn, Solution};
use crate::track::Racetrack;

/// Solves racetrack problems with graph-search-redo.
///
/// Diagnostic output is emitted as `tracing` events and only when the
/// descriptor's verbosity or draw flag asks for it. With a pause installed,
/// the engine blocks after every iteration at verbosity 4 and after showing
/// a drawn solution.
#[derive(Clone, Default)]
pub struct RacetrackEngine {
    pause: Option<Arc<PauseFn>>,
}

impl RacetrackEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pause(mut self, pause: Arc<PauseFn>) -> Self {
        self.pause = Some(pause);
        self
    }
}

impl fmt::Debug for RacetrackEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RacetrackEngine")
            .field("pause", &self.pause.is_some())
            .finish()
    }
}

impl SearchEngine for RacetrackEngine {
    type Problem = Arc<Racetrack>;
    type Heuristic = Heuristic;
    type Output = Solution;

    fn run(
        &self,
        descriptor: &RunDescriptor<'_, Self::Problem, Self::Heuristic>,
    ) -> Result<Solution, EngineError> {
        let track: &Racetrack = descriptor.problem().value();
        track.validate()?;

        if descriptor.draw() {
            info!(
                event = "draw",
                title = descriptor.title(),
                picture = %render(track, &[]),
            );
        }

        let heuristic = descriptor.heuristic().value().prepare(track);
        let solution = GraphSearch::new(track, &heuristic, descriptor.strategy())
            .with_verbosity(descriptor.verbosity())
            .with_pause(self.pause.as_deref())
            .run()?;

        if descriptor.draw() {
            info!(
                event = "draw",
                title = descriptor.title(),
                picture = %render(track, &solution.path),
            );
            if let Some(pause) = &self.pause {
                pause(&format!(
                    "Finished running '{}'. Type carriage return to continue:",
                    descriptor.title()
                ))?;
            }
        }

        Ok(solution)
    }

    fn summarize(&self, solution: &Solution) -> String {
        solution.summary()
    }
}
