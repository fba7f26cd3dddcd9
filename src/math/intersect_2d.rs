use super::{Point2, TOLERANCE};

/// Intersection of the infinite line through `p1`, `p2` with the infinite
/// line through `p3`, `p4`.
///
/// Returns `None` when the lines are parallel (the determinant of their
/// direction vectors is below [`TOLERANCE`]).
#[must_use]
pub fn line_line_intersect_2d(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Option<Point2> {
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denom.abs() < TOLERANCE {
        return None;
    }
    let t = ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / denom;
    Some(lerp_2d(p1, p2, t))
}

/// Linear interpolation: `a + (b - a) * t`.
#[must_use]
pub fn lerp_2d(a: &Point2, b: &Point2, t: f64) -> Point2 {
    Point2::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y))
}

/// Point on the line through `a`, `b` whose x coordinate is `x`.
///
/// This is the intersection with the vertical line `X = x`. A vertical
/// input line yields non-finite coordinates.
#[must_use]
pub fn line_at_x_2d(a: &Point2, b: &Point2, x: f64) -> Point2 {
    let t = (x - a.x) / (b.x - a.x);
    Point2::new(x, a.y + t * (b.y - a.y))
}

/// Point on the line through `a`, `b` whose y coordinate is `y`.
///
/// This is the intersection with the horizontal line `Y = y`. A horizontal
/// input line yields non-finite coordinates.
#[must_use]
pub fn line_at_y_2d(a: &Point2, b: &Point2, y: f64) -> Point2 {
    let t = (y - a.y) / (b.y - a.y);
    Point2::new(a.x + t * (b.x - a.x), y)
}

/// Intersection of a circle with the horizontal line `Y = y`.
///
/// Returns `(left, right)`, which coincide when the line is tangent.
/// Returns `None` if the line misses the circle.
#[must_use]
pub fn circle_horizontal_intersect_2d(
    center: &Point2,
    radius: f64,
    y: f64,
) -> Option<(Point2, Point2)> {
    let dy = center.y - y;
    let h_sq = radius * radius - dy * dy;
    if h_sq < -TOLERANCE {
        return None;
    }
    let dx = h_sq.max(0.0).sqrt();
    Some((
        Point2::new(center.x - dx, y),
        Point2::new(center.x + dx, y),
    ))
}
