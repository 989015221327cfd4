//! Integer lattice geometry: points, segments and exact intersection.

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;

/// A lattice point. Deserializes from `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "[i32; 2]")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A closed line segment between two lattice points. Deserializes from
/// `[[x1, y1], [x2, y2]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "[Point; 2]")]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Degenerate segment covering a single point.
    #[inline]
    pub const fn point(p: Point) -> Self {
        Self { a: p, b: p }
    }

    pub fn is_vertical(&self) -> bool {
        self.a.x == self.b.x
    }

    pub fn is_horizontal(&self) -> bool {
        self.a.y == self.b.y
    }

    pub fn is_axis_aligned(&self) -> bool {
        self.is_vertical() || self.is_horizontal()
    }

    /// Every lattice point the segment passes through, from `a` to `b`.
    pub fn lattice_points(&self) -> impl Iterator<Item = Point> {
        let dx = self.b.x - self.a.x;
        let dy = self.b.y - self.a.y;
        let steps = gcd(dx.unsigned_abs(), dy.unsigned_abs()) as i32;
        let (sx, sy) = if steps == 0 {
            (0, 0)
        } else {
            (dx / steps, dy / steps)
        };
        let a = self.a;
        (0..=steps).map(move |i| Point::new(a.x + i * sx, a.y + i * sy))
    }

    /// Whether the two closed segments share at least one point.
    ///
    /// Exact for integer endpoints: collinear overlaps, touching endpoints and
    /// degenerate (single-point) segments all count as intersecting.
    pub fn intersects(&self, other: &Segment) -> bool {
        let (p1, p2, q1, q2) = (self.a, self.b, other.a, other.b);
        let d1 = orientation(q1, q2, p1);
        let d2 = orientation(q1, q2, p2);
        let d3 = orientation(p1, p2, q1);
        let d4 = orientation(p1, p2, q2);

        if d1 != d2
            && d3 != d4
            && d1 != Ordering::Equal
            && d2 != Ordering::Equal
            && d3 != Ordering::Equal
            && d4 != Ordering::Equal
        {
            return true;
        }

        (d1 == Ordering::Equal && within_bounds(q1, q2, p1))
            || (d2 == Ordering::Equal && within_bounds(q1, q2, p2))
            || (d3 == Ordering::Equal && within_bounds(p1, p2, q1))
            || (d4 == Ordering::Equal && within_bounds(p1, p2, q2))
    }

    /// Whether `p` lies on the segment.
    pub fn contains(&self, p: Point) -> bool {
        orientation(self.a, self.b, p) == Ordering::Equal && within_bounds(self.a, self.b, p)
    }
}

impl From<[Point; 2]> for Segment {
    fn from([a, b]: [Point; 2]) -> Self {
        Self { a, b }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

// Sign of the cross product (b - a) x (c - a).
fn orientation(a: Point, b: Point, c: Point) -> Ordering {
    let cross = i64::from(b.x - a.x) * i64::from(c.y - a.y)
        - i64::from(b.y - a.y) * i64::from(c.x - a.x);
    cross.cmp(&0)
}

// Bounding-box test for a point already known to be collinear with a..b.
fn within_bounds(a: Point, b: Point, p: Point) -> bool {
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
