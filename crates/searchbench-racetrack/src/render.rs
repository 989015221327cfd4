//! ASCII drawing of a track and, optionally, a path across it.
//!
//! Walls are `#`, the finish line `|` or `=` depending on its orientation,
//! the start `@` and every later position on the path `o`. The y axis grows
//! upwards.

use crate::geometry::Point;
use crate::track::{Racetrack, State};

const EMPTY: char = '.';
const WALL: char = '#';
const START: char = '@';
const PATH: char = 'o';

/// Renders `track` with the positions of `path` marked.
pub fn render(track: &Racetrack, path: &[State]) -> String {
    let extent = [track.start, track.finish.a, track.finish.b]
        .into_iter()
        .fold(track.extent(), |acc, p| {
            Point::new(acc.x.max(p.x), acc.y.max(p.y))
        });
    let width = extent.x as usize + 1;
    let height = extent.y as usize + 1;
    let mut canvas = vec![vec![EMPTY; width]; height];

    let mut plot = |p: Point, c: char| {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < width && (p.y as usize) < height {
            canvas[p.y as usize][p.x as usize] = c;
        }
    };

    for wall in &track.walls {
        wall.lattice_points().for_each(|p| plot(p, WALL));
    }
    let finish = if track.finish.is_vertical() { '|' } else { '=' };
    track.finish_points().for_each(|p| plot(p, finish));
    for state in path.iter().skip(1) {
        plot(state.position, PATH);
    }
    plot(track.start, START);

    let mut out = String::with_capacity((width + 1) * height);
    for row in canvas.iter().rev() {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}
