use std::f64::consts::TAU;

use crate::math::Point2;

use super::{Curve, CurveDomain};

/// A full circle in the construction plane.
///
/// The parametric domain is `[0, 2*pi]`, starting on the positive x axis and
/// running counter-clockwise. The first and last evaluated points coincide.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Point2 {
        Point2::new(
            self.center.x + self.radius * t.cos(),
            self.center.y + self.radius * t.sin(),
        )
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
