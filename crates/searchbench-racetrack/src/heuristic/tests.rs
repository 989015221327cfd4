//! Tests for racetrack heuristics.

use super::*;
use crate::geometry::{Point, Segment};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

// 10x6 box, vertical finish line at x=8 from y=1 to y=3, and a wall
// sticking up from the floor at x=5.
fn walled() -> Racetrack {
    Racetrack::new(
        p(1, 1),
        Segment::new(p(8, 1), p(8, 3)),
        vec![
            Segment::new(p(0, 0), p(10, 0)),
            Segment::new(p(10, 0), p(10, 6)),
            Segment::new(p(10, 6), p(0, 6)),
            Segment::new(p(0, 6), p(0, 0)),
            Segment::new(p(5, 0), p(5, 4)),
        ],
    )
}

#[test]
fn test_builtin_names() {
    let registry = builtin_heuristics();
    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, vec!["h0", "h_edist", "h_esdist", "h_walldist", "h_nmoves"]);
    assert_eq!(registry.get("h_walldist"), Some(&Heuristic::WallDistance));
}

#[test]
fn test_zero() {
    let track = walled();
    let h = Heuristic::Zero.prepare(&track);
    assert_eq!(h.estimate(&track.initial_state()), 0.0);
}

#[test]
fn test_euclidean_ignores_walls() {
    let track = walled();
    let h = Heuristic::Euclidean.prepare(&track);
    assert!((h.estimate(&State::at_rest(p(1, 1))) - 7.0).abs() < 1e-12);
    assert!((h.estimate(&State::at_rest(p(8, 5))) - 2.0).abs() < 1e-12);
    assert_eq!(h.estimate(&State::at_rest(p(8, 2))), 0.0);
}

#[test]
fn test_euclidean_stopping_adds_stop_distance() {
    let track = walled();
    let h = Heuristic::EuclideanStopping.prepare(&track);

    // Speed 3: stop distance 3, so 7 + 0.3.
    let moving = State::new(p(1, 1), p(3, 0));
    assert!((h.estimate(&moving) - 7.3).abs() < 1e-9);

    // Near the line the stop distance dominates.
    let fast = State::new(p(8, 2), p(4, 0));
    assert!((h.estimate(&fast) - 6.0).abs() < 1e-9);
}

#[test]
fn test_walldist_goes_around_walls() {
    let track = walled();
    let h = Heuristic::WallDistance.prepare(&track);
    let e = Heuristic::Euclidean.prepare(&track);

    let behind = State::at_rest(p(2, 1));
    assert!(h.estimate(&behind) > e.estimate(&behind));
    assert!(h.estimate(&behind).is_finite());
    assert_eq!(h.estimate(&State::at_rest(p(8, 2))), 0.0);
}

#[test]
fn test_walldist_grid_outside_is_infinite() {
    let track = walled();
    let grid = WallDistanceGrid::new(&track);
    assert!(grid.get(p(11, 2)).is_infinite());
    assert!(grid.get(p(-1, 2)).is_infinite());
    assert_eq!(grid.get(p(8, 1)), 0.0);
}

#[test]
fn test_cruise_distance() {
    assert_eq!(cruise_distance(3, 3), 3);
    assert_eq!(cruise_distance(4, 0), 6);
    assert_eq!(cruise_distance(0, 3), 6);
}

#[test]
fn test_move_count() {
    assert_eq!(move_count(0, 0), 0);
    assert_eq!(move_count(0, 1), 2);
    assert_eq!(move_count(0, 3), 4);
    assert_eq!(move_count(0, 4), 4);
    assert_eq!(move_count(0, -4), 4);
    // Moving away at speed 1: one move to stop, then cover 2.
    assert_eq!(move_count(-1, 2), 1 + move_count(0, 2));
}

#[test]
fn test_nmoves_is_admissible_on_open_track() {
    let track = walled();
    let h = Heuristic::MoveCount.prepare(&track);
    assert!(Heuristic::MoveCount.is_admissible());
    assert_eq!(h.estimate(&State::at_rest(p(8, 2))), 0.0);
    assert_eq!(h.estimate(&State::at_rest(p(6, 2))), 3.0);
}
