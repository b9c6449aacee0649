//! Planar predicates used to locate points in a [`Triangulation`](super::Triangulation).

/// A point of the plane.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn squared_distance(&self, other: &Point) -> f64 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        dx * dx + dy * dy
    }
}

/// Twice the signed area of the triangle `a b p`: positive when `p` is on the left of `a → b`.
pub fn orientation(a: &Point, b: &Point, p: &Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Whether `p` lies in the closed triangle `abc`, in either orientation.
///
/// ```rust
/// use pc_prographs::triangulation::geometry::*;
/// let [a, b, c] = [Point::new(0., 0.), Point::new(4., 0.), Point::new(0., 4.)];
/// assert!(is_point_in_triangle(&Point::new(1., 1.), [&a, &b, &c]));
/// assert!(is_point_in_triangle(&Point::new(1., 1.), [&a, &c, &b]));
/// assert!(!is_point_in_triangle(&Point::new(3., 3.), [&a, &b, &c]));
/// ```
pub fn is_point_in_triangle(p: &Point, [a, b, c]: [&Point; 3]) -> bool {
    let d = [orientation(a, b, p), orientation(b, c, p), orientation(c, a, p)];
    d.iter().all(|&x| x >= 0.) || d.iter().all(|&x| x <= 0.)
}

/// How far `p` is from the segment `ab`, relative to its length: `(|pa|² + |pb|²) / |ab|²`.
/// `None` for a degenerate segment.
pub fn segment_distance(p: &Point, a: &Point, b: &Point) -> Option<f64> {
    let length = a.squared_distance(b);
    (length > 0.).then(|| (p.squared_distance(a) + p.squared_distance(b)) / length)
}
