use crate::math::Point2;

use super::label::PointLabel;
use super::points::PointSet;
use super::steps::HEIGHT_RATIO;

/// Outline vertices in drawing order.
const OUTLINE: [PointLabel; 5] = [
    PointLabel::A,
    PointLabel::B,
    PointLabel::E,
    PointLabel::G,
    PointLabel::C,
];

/// Placeholder position of an outline vertex that is not derived yet.
fn fallback(label: PointLabel, unit: f64) -> Point2 {
    match label {
        PointLabel::B => Point2::new(unit, 0.0),
        PointLabel::E | PointLabel::G => Point2::new(unit, unit),
        PointLabel::C => Point2::new(0.0, unit * HEIGHT_RATIO),
        _ => Point2::origin(),
    }
}

/// Flag silhouette `A, B, E, G, C`.
///
/// Vertices not yet derived use placeholders, so the outline is a plausible
/// quadrilateral before step 4 and the true pennant once E and G exist.
#[must_use]
pub fn flag_outline(points: &PointSet, unit: f64) -> Vec<Point2> {
    OUTLINE
        .iter()
        .map(|&label| points.get(label).unwrap_or_else(|| fallback(label, unit)))
        .collect()
}
