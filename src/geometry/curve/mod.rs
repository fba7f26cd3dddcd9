mod arc;
mod circle;
mod segment;

pub use arc::Arc;
pub use circle::Circle;
pub use segment::Segment;

use crate::math::Point2;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Parameter at fraction `s` of the way from `t_min` to `t_max`.
    #[must_use]
    pub fn lerp(&self, s: f64) -> f64 {
        self.t_min + s * (self.t_max - self.t_min)
    }
}

/// Trait for parametric curves in the construction plane.
///
/// Curves never fail to evaluate: a zero radius or zero-length segment
/// simply evaluates to a single repeated point.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
