use crate::geometry::{Point, Segment};
use crate::track::{Racetrack, State};

const DIAGONAL: f64 = std::f64::consts::SQRT_2;

/// Approximate wall-aware distance from every grid point to the finish line.
///
/// Seeded with the straight-line distance to each finish point that can be
/// seen without crossing a wall, then relaxed over the 8-neighbourhood until
/// nothing changes.
#[derive(Debug, Clone)]
pub struct WallDistanceGrid {
    width: usize,
    height: usize,
    cells: Vec<f64>,
}

impl WallDistanceGrid {
    pub fn new(track: &Racetrack) -> Self {
        let extent = track.extent();
        let width = extent.x.max(0) as usize + 1;
        let height = extent.y.max(0) as usize + 1;

        let mut grid = Self {
            width,
            height,
            cells: Vec::with_capacity(width * height),
        };
        for x in 0..width as i32 {
            for y in 0..height as i32 {
                grid.cells.push(visible_finish_distance(Point::new(x, y), track));
            }
        }
        grid.relax(track);
        grid
    }

    fn relax(&mut self, track: &Racetrack) {
        let mut changed = true;
        while changed {
            changed = false;
            for x in 0..self.width as i32 {
                for y in 0..self.height as i32 {
                    let here = Point::new(x, y);
                    for nx in (x - 1).max(0)..=(x + 1).min(self.width as i32 - 1) {
                        for ny in (y - 1).max(0)..=(y + 1).min(self.height as i32 - 1) {
                            let there = Point::new(nx, ny);
                            let base = self.get(there);
                            if base.is_infinite() || track.crashes(&Segment::new(here, there)) {
                                continue;
                            }
                            let step = if nx == x || ny == y { 1.0 } else { DIAGONAL };
                            let candidate = base + step;
                            if candidate < self.get(here) {
                                self.set(here, candidate);
                                changed = true;
                            }
                        }
                    }
                }
            }
        }
    }

    /// Grid distance at `p`; infinite outside the grid.
    pub fn get(&self, p: Point) -> f64 {
        self.index(p)
            .map(|i| self.cells[i])
            .unwrap_or(f64::INFINITY)
    }

    fn set(&mut self, p: Point, value: f64) {
        if let Some(i) = self.index(p) {
            self.cells[i] = value;
        }
    }

    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    /// Grid distance plus a penalty for the stopping distance, and a further
    /// one when braking as hard as possible would still hit a wall.
    pub fn estimate(&self, state: &State, track: &Racetrack) -> f64 {
        let Point { x, y } = state.position;
        let Point { x: u, y: v } = state.velocity;
        let (au, av) = (u.abs(), v.abs());
        let sdu = au * (au - 1) / 2;
        let sdv = av * (av - 1) / 2;
        let sd = f64::from(sdu.max(sdv));
        let mut penalty = sd / 10.0;

        let stop = Point::new(x + sdu * u.signum(), y + sdv * v.signum());
        if track.crashes(&Segment::new(state.position, stop)) {
            penalty += f64::from(au).hypot(f64::from(av));
        }
        (self.get(state.position) + penalty).max(sd)
    }
}

// Distance to the nearest finish point reachable in a straight line.
fn visible_finish_distance(p: Point, track: &Racetrack) -> f64 {
    track
        .finish_points()
        .filter(|f| !track.crashes(&Segment::new(p, *f)))
        .map(|f| p.distance(f))
        .fold(f64::INFINITY, f64::min)
}
