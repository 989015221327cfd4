//! Strategy tags and run-mode flags.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;

/// Search strategy tag, resolved from the fixed vocabulary accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Breadth-first: frontier ordered by node creation order.
    BreadthFirst,

    /// Depth-first: newest node first.
    DepthFirst,

    /// Uniform-cost: lowest path cost first.
    UniformCost,

    /// Greedy best-first: lowest heuristic value first.
    GreedyBestFirst,

    /// A*: lowest path cost plus heuristic value first.
    AStar,
}

impl Strategy {
    /// Every strategy, in the order they are usually listed.
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
    ];

    /// The short tag used on the command line and in titles.
    pub fn tag(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bf",
            Strategy::DepthFirst => "df",
            Strategy::UniformCost => "uc",
            Strategy::GreedyBestFirst => "gbf",
            Strategy::AStar => "a*",
        }
    }

    /// Whether the frontier ordering consults the heuristic.
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Strategy::GreedyBestFirst | Strategy::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Strategy {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bf" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "df" | "depth-first" => Ok(Strategy::DepthFirst),
            "uc" | "uniform-cost" => Ok(Strategy::UniformCost),
            "gbf" | "greedy-best-first" => Ok(Strategy::GreedyBestFirst),
            "a*" | "astar" => Ok(Strategy::AStar),
            _ => Err(ConfigurationError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Diagnostic output level passed through to the engine.
///
/// - 0: silent
/// - 1: statistics at the end of the search
/// - 2: one line per iteration
/// - 3: additional per-iteration detail
/// - 4: as 3, pausing after every iteration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Verbosity(u8);

impl Verbosity {
    pub const SILENT: Verbosity = Verbosity(0);
    pub const MAX: Verbosity = Verbosity(4);

    pub fn new(level: u8) -> Result<Self, ConfigurationError> {
        if level > Self::MAX.0 {
            return Err(ConfigurationError::InvalidVerbosity(level));
        }
        Ok(Self(level))
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_silent(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = ConfigurationError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Run-mode flags in effect for every combination of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunModes {
    pub verbosity: Verbosity,
    pub draw: bool,
    pub timing: bool,
}

impl RunModes {
    pub fn new(verbosity: Verbosity, draw: bool, timing: bool) -> Self {
        Self {
            verbosity,
            draw,
            timing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_tags_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.tag().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_strategy_long_names() {
        assert_eq!("A*".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!("astar".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!(
            "greedy-best-first".parse::<Strategy>().unwrap(),
            Strategy::GreedyBestFirst
        );
    }

    #[test]
    fn test_strategy_unknown() {
        let err = "dijkstra".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownStrategy(ref s) if s == "dijkstra"));
    }

    #[test]
    fn test_strategy_uses_heuristic() {
        assert!(Strategy::AStar.uses_heuristic());
        assert!(Strategy::GreedyBestFirst.uses_heuristic());
        assert!(!Strategy::UniformCost.uses_heuristic());
    }

    #[test]
    fn test_verbosity_bounds() {
        assert_eq!(Verbosity::new(0).unwrap(), Verbosity::SILENT);
        assert_eq!(Verbosity::new(4).unwrap(), Verbosity::MAX);
        assert!(matches!(
            Verbosity::new(5),
            Err(ConfigurationError::InvalidVerbosity(5))
        ));
    }

    #[test]
    fn test_run_modes_default_is_quiet() {
        let modes = RunModes::default();
        assert!(modes.verbosity.is_silent());
        assert!(!modes.draw);
        assert!(!modes.timing);
    }
}
