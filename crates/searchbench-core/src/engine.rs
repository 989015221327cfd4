//! The seam between the driver and the search algorithm.

use std::fmt::Display;

use crate::descriptor::RunDescriptor;
use crate::error::EngineError;

/// A search engine capable of solving one problem under one strategy and
/// heuristic, as described by a [`RunDescriptor`].
///
/// The driver treats the engine as opaque: it never inspects problems or
/// heuristics, and only reports the summary of the returned output.
pub trait SearchEngine {
    /// Problem handle stored in the configuration space.
    type Problem;

    /// Heuristic handle stored in the configuration space.
    type Heuristic;

    /// Result of a successful search.
    type Output: Display;

    /// Runs one search.
    ///
    /// Must honor the descriptor's verbosity and draw flag; with verbosity 0
    /// and drawing off it must not produce any diagnostic output.
    fn run(
        &self,
        descriptor: &RunDescriptor<'_, Self::Problem, Self::Heuristic>,
    ) -> Result<Self::Output, EngineError>;

    /// One-line result summary reported after a demonstration run.
    fn summarize(&self, output: &Self::Output) -> String {
        output.to_string()
    }
}

impl<E: SearchEngine + ?Sized> SearchEngine for &E {
    type Problem = E::Problem;
    type Heuristic = E::Heuristic;
    type Output = E::Output;

    fn run(
        &self,
        descriptor: &RunDescriptor<'_, Self::Problem, Self::Heuristic>,
    ) -> Result<Self::Output, EngineError> {
        (**self).run(descriptor)
    }

    fn summarize(&self, output: &Self::Output) -> String {
        (**self).summarize(output)
    }
}
