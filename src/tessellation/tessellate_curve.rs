use crate::geometry::{Arc, Circle, Curve, Segment};
use crate::math::Point2;

use super::Polyline;

/// Samples a curve into a polyline of evenly spaced parameter values.
///
/// `segments + 1` points are produced, at `t_min + (i / segments) * (t_max - t_min)`.
/// The sampling is fixed and deterministic; there is no adaptive refinement.
pub struct TessellateCurve<'a, C: Curve> {
    curve: &'a C,
    segments: u32,
}

impl<'a, C: Curve> TessellateCurve<'a, C> {
    /// Creates a new `TessellateCurve` operation. A segment count of zero is
    /// treated as one.
    #[must_use]
    pub fn new(curve: &'a C, segments: u32) -> Self {
        Self {
            curve,
            segments: segments.max(1),
        }
    }

    /// Executes the tessellation, returning a polyline.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        let domain = self.curve.domain();
        let points = (0..=self.segments)
            .map(|i| {
                let s = f64::from(i) / f64::from(self.segments);
                self.curve.evaluate(domain.lerp(s))
            })
            .collect();
        Polyline { points }
    }
}

/// Samples the segment `p1`-`p2`.
#[must_use]
pub fn sample_line(p1: Point2, p2: Point2, segments: u32) -> Vec<Point2> {
    TessellateCurve::new(&Segment::new(p1, p2), segments)
        .execute()
        .into_points()
}

/// Samples an arc from `start_angle` to `end_angle` (radians).
#[must_use]
pub fn sample_arc(
    center: Point2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    segments: u32,
) -> Vec<Point2> {
    TessellateCurve::new(&Arc::new(center, radius, start_angle, end_angle), segments)
        .execute()
        .into_points()
}

/// Samples a full circle starting on the positive x axis.
#[must_use]
pub fn sample_circle(center: Point2, radius: f64, segments: u32) -> Vec<Point2> {
    TessellateCurve::new(&Circle::new(center, radius), segments)
        .execute()
        .into_points()
}
