//! Graph-search-redo over racetrack states.
//!
//! The frontier is a priority queue ordered by a strategy-specific key, ties
//! broken by node id (creation order). When a newly generated node reaches a
//! state that is already known, the node with the smaller key wins: the new
//! node is discarded if the known one is at least as good, otherwise the known
//! node is pruned and its state reopened. Depth-first never reopens a state,
//! which keeps it from cycling forever.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::io;

use searchbench_core::{EngineError, Strategy, Verbosity};
use tracing::info;

use crate::heuristic::PreparedHeuristic;
use crate::track::{Racetrack, State};

/// Blocking pause between iterations; receives the prompt to show.
pub type PauseFn = dyn Fn(&str) -> io::Result<()> + Send + Sync;

/// Node counters reported at the end of a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every node created, including discarded ones.
    pub generated: u64,
    /// Nodes discarded on creation or removed from the frontier or explored set.
    pub pruned: u64,
    /// Size of the explored set when the search stopped.
    pub explored: u64,
    /// Size of the frontier when the search stopped.
    pub frontier: u64,
    /// Number of nodes taken off the frontier.
    pub iterations: u64,
}

/// A path from the start state to a goal state.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub path: Vec<State>,
    pub cost: u32,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of moves (one less than the number of states).
    pub fn length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// One-line summary of length, cost and counters.
    pub fn summary(&self) -> String {
        format!(
            "path length {}, cost {}; generated {}, pruned {}, explored {}, frontier {}",
            self.length(),
            self.cost,
            self.stats.generated,
            self.stats.pruned,
            self.stats.explored,
            self.stats.frontier
        )
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solution ({} states): [", self.path.len())?;
        for (i, state) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{state}")?;
        }
        f.write_str("]")
    }
}

/// Name of the quantity the frontier is ordered by.
pub fn key_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::BreadthFirst => "id",
        Strategy::DepthFirst => "-id",
        Strategy::UniformCost => "g",
        Strategy::GreedyBestFirst => "h",
        Strategy::AStar => "f",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeStatus {
    Frontier,
    Explored,
    Pruned,
}

#[derive(Debug, Clone)]
struct SearchNode {
    id: u64,
    state: State,
    parent: Option<usize>,
    depth: u32,
    g: u32,
    h: f64,
    status: NodeStatus,
}

/// A node wrapper for priority queue ordering.
struct FrontierEntry {
    key: f64,
    id: u64,
    index: usize,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smaller key = higher priority, then older node
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One graph-search-redo run over a track.
pub struct GraphSearch<'a> {
    track: &'a Racetrack,
    heuristic: &'a PreparedHeuristic<'a>,
    strategy: Strategy,
    verbosity: Verbosity,
    pause: Option<&'a PauseFn>,
}

impl<'a> GraphSearch<'a> {
    pub fn new(
        track: &'a Racetrack,
        heuristic: &'a PreparedHeuristic<'a>,
        strategy: Strategy,
    ) -> Self {
        Self {
            track,
            heuristic,
            strategy,
            verbosity: Verbosity::SILENT,
            pause: None,
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Pause used after every iteration at the highest verbosity.
    pub fn with_pause(mut self, pause: Option<&'a PauseFn>) -> Self {
        self.pause = pause;
        self
    }

    fn key(&self, id: u64, g: u32, h: f64) -> f64 {
        match self.strategy {
            Strategy::BreadthFirst => id as f64,
            Strategy::DepthFirst => -(id as f64),
            Strategy::UniformCost => f64::from(g),
            Strategy::GreedyBestFirst => h,
            Strategy::AStar => f64::from(g) + h,
        }
    }

    fn node_key(&self, node: &SearchNode) -> f64 {
        self.key(node.id, node.g, node.h)
    }

    fn describe(&self, node: &SearchNode) -> String {
        format!(
            "#{}: {} {:.2}, g {}, h {:.2}, d {}, state {}",
            node.id,
            key_name(self.strategy),
            self.node_key(node),
            node.g,
            node.h,
            node.depth,
            node.state
        )
    }

    /// Runs the search to the first goal taken off the frontier.
    pub fn run(&self) -> Result<Solution, EngineError> {
        let level = self.verbosity.level();
        if level >= 2 {
            info!(
                event = "search_start",
                strategy = self.strategy.tag(),
                order = key_name(self.strategy),
            );
        }

        let start = self.track.initial_state();
        let mut nodes = vec![SearchNode {
            id: 1,
            state: start,
            parent: None,
            depth: 0,
            g: 0,
            h: self.heuristic.estimate(&start),
            status: NodeStatus::Frontier,
        }];
        let mut known: HashMap<State, usize> = HashMap::from([(start, 0)]);
        let mut heap = BinaryHeap::from([FrontierEntry {
            key: self.node_key(&nodes[0]),
            id: 1,
            index: 0,
        }]);
        let mut stats = SearchStats {
            generated: 1,
            frontier: 1,
            ..SearchStats::default()
        };

        while let Some(entry) = heap.pop() {
            if nodes[entry.index].status != NodeStatus::Frontier {
                continue;
            }
            nodes[entry.index].status = NodeStatus::Explored;
            stats.frontier -= 1;
            stats.explored += 1;
            stats.iterations += 1;

            let current = nodes[entry.index].clone();
            if level >= 2 {
                info!(
                    event = "expand",
                    iteration = stats.iterations,
                    node = %self.describe(&current),
                );
            }

            if self.track.is_goal(&current.state) {
                let solution = Solution {
                    path: path_to(&nodes, entry.index),
                    cost: current.g,
                    stats,
                };
                if level >= 1 {
                    info!(
                        event = "search_end",
                        path_length = solution.length() as u64,
                        cost = u64::from(solution.cost),
                        generated = stats.generated,
                        pruned = stats.pruned,
                        explored = stats.explored,
                        frontier = stats.frontier,
                    );
                }
                return Ok(solution);
            }

            let mut added = 0u64;
            let mut discarded = 0u64;
            let mut removed = 0u64;
            for state in self.track.successors(&current.state) {
                stats.generated += 1;
                let id = stats.generated;
                let g = current.g + 1;
                let h = self.heuristic.estimate(&state);
                let key = self.key(id, g, h);

                if let Some(&existing) = known.get(&state) {
                    let other = &nodes[existing];
                    if self.strategy == Strategy::DepthFirst || key >= self.node_key(other) {
                        discarded += 1;
                        continue;
                    }
                    match other.status {
                        NodeStatus::Frontier => stats.frontier -= 1,
                        NodeStatus::Explored => stats.explored -= 1,
                        NodeStatus::Pruned => {}
                    }
                    nodes[existing].status = NodeStatus::Pruned;
                    removed += 1;
                }

                let index = nodes.len();
                nodes.push(SearchNode {
                    id,
                    state,
                    parent: Some(entry.index),
                    depth: current.depth + 1,
                    g,
                    h,
                    status: NodeStatus::Frontier,
                });
                known.insert(state, index);
                heap.push(FrontierEntry { key, id, index });
                stats.frontier += 1;
                added += 1;
            }
            stats.pruned += discarded + removed;

            if level >= 3 {
                info!(
                    event = "frontier",
                    added,
                    discarded,
                    removed,
                    size = stats.frontier,
                    head = %self.frontier_head(&nodes, &heap, 10),
                );
            }
            if level >= 4 {
                if let Some(pause) = self.pause {
                    pause("continue > ")?;
                }
            }
        }

        if level >= 1 {
            info!(
                event = "no_solution",
                generated = stats.generated,
                pruned = stats.pruned,
                explored = stats.explored,
            );
        }
        Err(EngineError::Unsolvable)
    }

    // The first `limit` live frontier nodes in priority order.
    fn frontier_head(
        &self,
        nodes: &[SearchNode],
        heap: &BinaryHeap<FrontierEntry>,
        limit: usize,
    ) -> String {
        let mut live: Vec<&FrontierEntry> = heap
            .iter()
            .filter(|e| nodes[e.index].status == NodeStatus::Frontier)
            .collect();
        live.sort_by(|a, b| b.cmp(a));
        live.iter()
            .take(limit)
            .map(|e| self.describe(&nodes[e.index]))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn path_to(nodes: &[SearchNode], mut index: usize) -> Vec<State> {
    let mut path = vec![nodes[index].state];
    while let Some(parent) = nodes[index].parent {
        path.push(nodes[parent].state);
        index = parent;
    }
    path.reverse();
    path
}
