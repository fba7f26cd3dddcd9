mod tessellate_curve;

pub use tessellate_curve::{sample_arc, sample_circle, sample_line, TessellateCurve};

use crate::math::Point2;

/// Segment count for straight construction lines.
pub const LINE_SEGMENTS: u32 = 2;

/// Segment count for construction arcs and semicircles.
///
/// Points R and S are read off the first and last sample of an arc, so
/// changing this moves every point derived from them.
pub const ARC_SEGMENTS: u32 = 30;

/// Segment count for full construction circles.
pub const CIRCLE_SEGMENTS: u32 = 40;

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Consumes the polyline, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}
