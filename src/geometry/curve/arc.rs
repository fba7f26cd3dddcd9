use crate::math::Point2;

use super::{Curve, CurveDomain};

/// A circular arc in the construction plane.
///
/// The parameter is the polar angle in radians, measured counter-clockwise
/// from the positive x axis. The arc runs from `start_angle` to `end_angle`;
/// `end_angle < start_angle` sweeps clockwise.
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians
    #[must_use]
    pub fn new(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed angular sweep from start to end.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Point2 {
        Point2::new(
            self.center.x + self.radius * t.cos(),
            self.center.y + self.radius * t.sin(),
        )
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }

    fn is_closed(&self) -> bool {
        (self.sweep().abs() - std::f64::consts::TAU).abs() < crate::math::TOLERANCE
    }
}
