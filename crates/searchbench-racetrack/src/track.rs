//! Racetrack problems and the state transition model.

use std::fmt;

use searchbench_core::EngineError;
use smallvec::SmallVec;

use crate::geometry::{Point, Segment};

/// Position and velocity of the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub position: Point,
    pub velocity: Point,
}

impl State {
    pub const fn new(position: Point, velocity: Point) -> Self {
        Self { position, velocity }
    }

    /// The car at rest at `position`.
    pub const fn at_rest(position: Point) -> Self {
        Self::new(position, Point::ORIGIN)
    }

    pub fn is_stopped(&self) -> bool {
        self.velocity == Point::ORIGIN
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.position, self.velocity)
    }
}

/// Successor states; at most nine per state.
pub type Successors = SmallVec<[State; 9]>;

/// A racetrack problem: where the car starts, the line it must stop on, and
/// the walls it must not touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Racetrack {
    pub start: Point,
    pub finish: Segment,
    pub walls: Vec<Segment>,
}

impl Racetrack {
    pub fn new(start: Point, finish: Segment, walls: Vec<Segment>) -> Self {
        Self {
            start,
            finish,
            walls,
        }
    }

    /// Checks the structural invariants every engine routine relies on.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.finish.is_axis_aligned() {
            return Err(EngineError::MalformedProblem(format!(
                "finish line {} is neither horizontal nor vertical",
                self.finish
            )));
        }
        if self.walls.is_empty() {
            return Err(EngineError::MalformedProblem(
                "track has no walls".to_string(),
            ));
        }
        let negative = std::iter::once(self.start)
            .chain([self.finish.a, self.finish.b])
            .chain(self.walls.iter().flat_map(|w| [w.a, w.b]))
            .find(|p| p.x < 0 || p.y < 0);
        if let Some(p) = negative {
            return Err(EngineError::MalformedProblem(format!(
                "negative coordinate {p}"
            )));
        }
        let outside = [self.start, self.finish.a, self.finish.b]
            .into_iter()
            .find(|&p| !self.in_bounds(p));
        if let Some(p) = outside {
            return Err(EngineError::MalformedProblem(format!(
                "{p} lies outside the box (0, 0)-{} spanned by the walls",
                self.extent()
            )));
        }
        Ok(())
    }

    pub fn initial_state(&self) -> State {
        State::at_rest(self.start)
    }

    /// Largest x and y coordinates touched by any wall.
    pub fn extent(&self) -> Point {
        self.walls.iter().fold(Point::ORIGIN, |acc, w| {
            Point::new(
                acc.x.max(w.a.x).max(w.b.x),
                acc.y.max(w.a.y).max(w.b.y),
            )
        })
    }

    /// Whether `p` lies in the box spanned by the origin and [`extent`](Self::extent).
    pub fn in_bounds(&self, p: Point) -> bool {
        let extent = self.extent();
        (0..=extent.x).contains(&p.x) && (0..=extent.y).contains(&p.y)
    }

    /// Whether the move `segment` touches any wall.
    pub fn crashes(&self, segment: &Segment) -> bool {
        self.walls.iter().any(|wall| segment.intersects(wall))
    }

    /// All states reachable in one move: each velocity component changes by
    /// -1, 0 or +1, then the car moves by the new velocity. Moves that touch
    /// a wall or leave the bounding box are dropped, which keeps the state
    /// space finite even when the walls do not enclose the car.
    pub fn successors(&self, state: &State) -> Successors {
        let mut next = Successors::new();
        for dx in [0, -1, 1] {
            for dy in [0, -1, 1] {
                let (Some(vx), Some(vy)) = (
                    state.velocity.x.checked_add(dx),
                    state.velocity.y.checked_add(dy),
                ) else {
                    continue;
                };
                let (Some(x), Some(y)) = (
                    state.position.x.checked_add(vx),
                    state.position.y.checked_add(vy),
                ) else {
                    continue;
                };
                let position = Point::new(x, y);
                if self.in_bounds(position)
                    && !self.crashes(&Segment::new(state.position, position))
                {
                    next.push(State::new(position, Point::new(vx, vy)));
                }
            }
        }
        next
    }

    /// Stopped on the finish line.
    pub fn is_goal(&self, state: &State) -> bool {
        state.is_stopped() && self.finish.contains(state.position)
    }

    /// Lattice points of the finish line.
    pub fn finish_points(&self) -> impl Iterator<Item = Point> {
        self.finish.lattice_points()
    }
}
