//! Cartesian-product enumeration of a [`ConfigSpace`].
//!
//! Emission order is part of the contract: problems vary slowest, heuristics
//! next, strategies fastest. A fresh call to [`enumerate`] always yields the
//! same sequence.

use std::fmt;
use std::iter::FusedIterator;

use crate::descriptor::run_title;
use crate::registry::Named;
use crate::space::ConfigSpace;
use crate::strategy::{RunModes, Strategy};

/// Owned identity of a combination, used when reporting its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombinationId {
    pub problem: String,
    pub heuristic: String,
    pub strategy: Strategy,
}

impl CombinationId {
    /// `"<strategy>, <heuristic>, <problem>"`
    pub fn title(&self) -> String {
        run_title(self.strategy, &self.heuristic, &self.problem)
    }
}

impl fmt::Display for CombinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}

/// One (problem, heuristic, strategy) triple plus the run modes in effect.
///
/// Borrowed from the space it was enumerated from; it lives for a single
/// iteration of the driver loop.
#[derive(Debug)]
pub struct Combination<'s, P, H> {
    index: usize,
    problem: &'s Named<P>,
    heuristic: &'s Named<H>,
    strategy: Strategy,
    modes: RunModes,
}

impl<'s, P, H> Combination<'s, P, H> {
    /// Zero-based position in the emission order.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn problem(&self) -> &'s Named<P> {
        self.problem
    }

    #[inline]
    pub fn heuristic(&self) -> &'s Named<H> {
        self.heuristic
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn modes(&self) -> RunModes {
        self.modes
    }

    pub fn id(&self) -> CombinationId {
        CombinationId {
            problem: self.problem.name().to_string(),
            heuristic: self.heuristic.name().to_string(),
            strategy: self.strategy,
        }
    }

    pub fn title(&self) -> String {
        run_title(self.strategy, self.heuristic.name(), self.problem.name())
    }
}

/// Lazy, finite iterator over every combination of a space.
///
/// Positions are decoded from a single counter, so the iterator knows its
/// exact remaining length.
#[derive(Debug)]
pub struct Combinations<'s, P, H> {
    space: &'s ConfigSpace<P, H>,
    next: usize,
    total: usize,
}

impl<'s, P, H> Combinations<'s, P, H> {
    pub(crate) fn new(space: &'s ConfigSpace<P, H>) -> Self {
        Self {
            space,
            next: 0,
            total: space.combination_count(),
        }
    }
}

impl<'s, P, H> Iterator for Combinations<'s, P, H> {
    type Item = Combination<'s, P, H>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let strategies = self.space.strategies();
        let heuristics = self.space.heuristics();
        let per_problem = strategies.len() * heuristics.len();

        Some(Combination {
            index,
            problem: &self.space.problems()[index / per_problem],
            heuristic: &heuristics[(index / strategies.len()) % heuristics.len()],
            strategy: strategies[index % strategies.len()],
            modes: self.space.modes(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl<P, H> ExactSizeIterator for Combinations<'_, P, H> {}

impl<P, H> FusedIterator for Combinations<'_, P, H> {}

/// Enumerates every combination of `space` in nested axis order.
pub fn enumerate<P, H>(space: &ConfigSpace<P, H>) -> Combinations<'_, P, H> {
    space.combinations()
}
