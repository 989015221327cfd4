use crate::track::{Racetrack, State};

/// Straight-line distance from the car to the closest finish point.
pub fn euclidean_distance(state: &State, track: &Racetrack) -> f64 {
    track
        .finish_points()
        .map(|p| state.position.distance(p))
        .fold(f64::INFINITY, f64::min)
}

/// [`euclidean_distance`] adjusted by how far the car needs to stop.
pub fn euclidean_stopping_distance(state: &State, track: &Racetrack) -> f64 {
    let speed = f64::from(state.velocity.x).hypot(f64::from(state.velocity.y));
    let stop = speed * (speed - 1.0) / 2.0;
    (euclidean_distance(state, track) + stop / 10.0).max(stop)
}
