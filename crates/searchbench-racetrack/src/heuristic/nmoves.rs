use crate::track::{Racetrack, State};

/// Distance travelled, ignoring walls, while changing speed from `v` to `t`
/// one unit per move, counting the last move at speed `t`.
///
/// Both speeds must be non-negative.
pub fn cruise_distance(v: i64, t: i64) -> i64 {
    debug_assert!(v >= 0 && t >= 0);
    if t == v {
        t
    } else if t < v {
        v * (v - 1) / 2 - t * (t - 1) / 2
    } else {
        t * (t + 1) / 2 - v * (v + 1) / 2
    }
}

/// Fewest moves to travel exactly `d` along one axis, starting at speed `v`
/// and ending at rest, with no walls.
pub fn move_count(mut v: i64, mut d: i64) -> i64 {
    if d < 0 {
        d = -d;
        v = -v;
    }

    if v < 0 {
        // Heading the wrong way: stop, then cover the extra distance.
        let v = -v;
        return v + move_count(0, d + cruise_distance(v, 0));
    }

    let stopping = cruise_distance(v, 0);
    if stopping > d {
        return v + move_count(0, stopping - d);
    }
    if stopping == d {
        return v;
    }

    // Largest top speed whose accelerate-then-brake profile fits in d.
    let mut t = (v - 1).max(0);
    let mut top = t;
    let mut covered = 0;
    while cruise_distance(v, t) + cruise_distance(t, 0) <= d {
        top = t;
        covered = cruise_distance(v, t) + cruise_distance(t, 0);
        t += 1;
    }

    let extra = if covered < d && top > 0 {
        (d - covered + top - 1) / top
    } else {
        0
    };
    (top - v) + top + extra
}

/// Moves needed to stop on the finish line if the track had no walls.
pub fn moves_to_finish(state: &State, track: &Racetrack) -> i64 {
    let (x, y) = (i64::from(state.position.x), i64::from(state.position.y));
    let (u, v) = (i64::from(state.velocity.x), i64::from(state.velocity.y));
    let finish = track.finish;

    let (mx, my) = if finish.is_vertical() {
        let mx = move_count(u, i64::from(finish.a.x) - x);
        let my = track
            .finish_points()
            .map(|p| move_count(v, i64::from(p.y) - y))
            .min()
            .unwrap_or(i64::MAX);
        (mx, my)
    } else {
        let my = move_count(v, i64::from(finish.a.y) - y);
        let mx = track
            .finish_points()
            .map(|p| move_count(u, i64::from(p.x) - x))
            .min()
            .unwrap_or(i64::MAX);
        (mx, my)
    };
    mx.max(my)
}
