//! Bundled racetrack problems.

use std::sync::Arc;

use searchbench_core::Registry;

use crate::geometry::{Point, Segment};
use crate::track::Racetrack;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Segment {
    Segment::new(p(x1, y1), p(x2, y2))
}

// Closed polygon through the given corners.
fn outline(corners: &[(i32, i32)]) -> Vec<Segment> {
    corners
        .iter()
        .zip(corners.iter().cycle().skip(1))
        .map(|(&a, &b)| Segment::new(a.into(), b.into()))
        .collect()
}

fn rect(width: i32, height: i32) -> Vec<Segment> {
    outline(&[(0, 0), (width, 0), (width, height), (0, height)])
}

fn with(mut walls: Vec<Segment>, extra: &[Segment]) -> Vec<Segment> {
    walls.extend_from_slice(extra);
    walls
}

/// Registry of every bundled problem under its identifier.
pub fn builtin_problems() -> Registry<Arc<Racetrack>> {
    let tracks = [
        // Open 20x10 box, straight run to a vertical line.
        ("rect20a", Racetrack::new(p(2, 2), line(18, 3, 18, 7), rect(20, 10))),
        // Open 20x20 box, diagonal run to a horizontal line.
        ("rect20b", Racetrack::new(p(1, 18), line(15, 2, 18, 2), rect(20, 20))),
        // One wall to get around.
        (
            "rect20c",
            Racetrack::new(
                p(2, 2),
                line(18, 1, 18, 4),
                with(rect(20, 10), &[line(10, 0, 10, 7)]),
            ),
        ),
        // Slalom between two walls.
        (
            "rect20d",
            Racetrack::new(
                p(2, 8),
                line(18, 1, 18, 3),
                with(rect(20, 10), &[line(7, 10, 7, 3), line(13, 0, 13, 7)]),
            ),
        ),
        // Three-wall slalom in a 20x20 box.
        (
            "rect20e",
            Racetrack::new(
                p(2, 2),
                line(17, 2, 19, 2),
                with(
                    rect(20, 20),
                    &[line(5, 0, 5, 15), line(10, 20, 10, 5), line(15, 0, 15, 15)],
                ),
            ),
        ),
        // Small box split by a wall with a gap at the top.
        (
            "wall8a",
            Racetrack::new(
                p(2, 2),
                line(6, 1, 6, 3),
                with(rect(8, 8), &[line(4, 0, 4, 5)]),
            ),
        ),
        // L-shaped track: down the vertical arm, then along the bottom.
        (
            "lhook16",
            Racetrack::new(
                p(3, 14),
                line(14, 1, 14, 5),
                outline(&[(0, 0), (16, 0), (16, 6), (6, 6), (6, 16), (0, 16)]),
            ),
        ),
        // Spiral inwards to a line near the middle.
        (
            "spiral16",
            Racetrack::new(
                p(2, 2),
                line(10, 5, 10, 7),
                with(
                    rect(16, 16),
                    &[
                        line(4, 0, 4, 12),
                        line(4, 12, 12, 12),
                        line(12, 12, 12, 4),
                        line(12, 4, 8, 4),
                        line(8, 4, 8, 8),
                    ],
                ),
            ),
        ),
    ];

    tracks
        .into_iter()
        .map(|(name, track)| (name, Arc::new(track)))
        .collect()
}
