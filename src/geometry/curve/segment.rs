use crate::math::intersect_2d::lerp_2d;
use crate::math::Point2;

use super::{Curve, CurveDomain};

/// A straight segment between two points.
///
/// The parametric form is `P(t) = start + t * (end - start)` for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }
}

impl Curve for Segment {
    fn evaluate(&self, t: f64) -> Point2 {
        lerp_2d(&self.start, &self.end, t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn evaluates_endpoints_and_middle() {
        let seg = Segment::new(Point2::new(1.0, 2.0), Point2::new(5.0, 10.0));
        assert_abs_diff_eq!(seg.evaluate(0.0), *seg.start(), epsilon = TOLERANCE);
        assert_abs_diff_eq!(seg.evaluate(1.0), *seg.end(), epsilon = TOLERANCE);
        assert_abs_diff_eq!(seg.evaluate(0.5), Point2::new(3.0, 6.0), epsilon = TOLERANCE);
        assert!(!seg.is_closed());
    }
}
