use super::Point2;

/// Euclidean distance between two points.
#[must_use]
pub fn distance_2d(a: &Point2, b: &Point2) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Midpoint of the segment `a`-`b`.
#[must_use]
pub fn midpoint_2d(a: &Point2, b: &Point2) -> Point2 {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Returns the perpendicular distance from point `p` to the infinite line
/// through `a` and `b`.
///
/// A degenerate line (`a == b`) yields a non-finite distance.
#[must_use]
pub fn point_to_line_dist_2d(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = (dx * dx + dy * dy).sqrt();
    (dx * (a.y - p.y) - dy * (a.x - p.x)).abs() / len
}

/// Point at distance `dist` from `from`, measured along the direction to `toward`.
#[must_use]
pub fn point_toward_2d(from: &Point2, toward: &Point2, dist: f64) -> Point2 {
    let t = dist / distance_2d(from, toward);
    Point2::new(from.x + t * (toward.x - from.x), from.y + t * (toward.y - from.y))
}
