//! Contains the geometry of the game: the real-valued Point that the
//! chaos game iterates, and a convex hull test for where it may go.
//! The surface is assumed to have its origin at 0,0 in the upper-left
//! corner, with one surface unit per pixel.

use std::ops::{Add, Mul, Sub};

/// A location on the drawing surface, in (fractional) surface units.
/// Both vertices and the current point of the game are Points.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal distance from the left edge.
    pub x: f64,
    /// Vertical distance from the top edge.
    pub y: f64,
}

impl Point {
    /// Constructor.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// The point that lies exactly halfway between this one and
    /// `toward`.  This is the contraction step of the game; no
    /// rounding happens so that the sub-pixel position survives many
    /// iterations.
    pub fn halfway(self, toward: Point) -> Point {
        self + (toward - self) * 0.5
    }

    /// Squared distance between two points.
    pub fn distance_squared(self, other: Point) -> f64 {
        (self.x - other.x) * (self.x - other.x) + (self.y - other.y) * (self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Is `point` inside (or on the edge of, give or take `tolerance`)
/// the convex polygon spanned by `vertices`?  The vertices may come in
/// any order, so the hull is built first.
pub fn in_convex_hull(vertices: &[Point], point: Point, tolerance: f64) -> bool {
    let hull = convex_hull(vertices);
    match hull.len() {
        0 => false,
        1 => hull[0].distance_squared(point) <= tolerance * tolerance,
        2 => on_segment(hull[0], hull[1], point, tolerance),
        n => (0..n).all(|i| {
            let (a, b) = (hull[i], hull[(i + 1) % n]);
            let edge = b - a;
            let cross = edge.x * (point.y - a.y) - edge.y * (point.x - a.x);
            cross >= -tolerance * edge.distance_squared(Point::default()).sqrt()
        }),
    }
}

fn on_segment(a: Point, b: Point, p: Point, tolerance: f64) -> bool {
    let ab = b - a;
    let len2 = ab.distance_squared(Point::default());
    if len2 == 0.0 {
        return a.distance_squared(p) <= tolerance * tolerance;
    }
    let t = (((p.x - a.x) * ab.x + (p.y - a.y) * ab.y) / len2).max(0.0).min(1.0);
    (a + ab * t).distance_squared(p) <= tolerance * tolerance
}

/// Andrew's monotone chain, counter-clockwise in a y-up frame.
/// Collinear points are dropped.
fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(::std::cmp::Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(::std::cmp::Ordering::Equal))
    });
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let cross = |o: Point, a: Point, b: Point| (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x);
    let mut lower: Vec<Point> = vec![];
    for p in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = vec![];
    for p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
