use serde::Serialize;

use crate::math::Point2;
use crate::tessellation::{sample_line, LINE_SEGMENTS};

/// Colour of construction lines, arcs and circles.
pub const CONSTRUCTION_COLOR: &str = "#666";

/// Colour of point markers.
pub const MARKER_COLOR: &str = "#f00";

/// Kind of a construction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Line,
    Point,
    Arc,
    Circle,
}

/// A renderable artifact emitted by a construction step.
///
/// `points` is an ordered polyline approximation of the primitive (a single
/// point for [`RecordKind::Point`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstructionRecord {
    pub kind: RecordKind,
    pub points: Vec<Point2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub color: &'static str,
    pub dashed: bool,
}

impl ConstructionRecord {
    /// A solid straight line from `from` to `to`.
    #[must_use]
    pub fn line(label: &'static str, from: Point2, to: Point2) -> Self {
        Self {
            kind: RecordKind::Line,
            points: sample_line(from, to, LINE_SEGMENTS),
            label: Some(label),
            color: CONSTRUCTION_COLOR,
            dashed: false,
        }
    }

    /// A point marker.
    #[must_use]
    pub fn point(label: &'static str, at: Point2) -> Self {
        Self {
            kind: RecordKind::Point,
            points: vec![at],
            label: Some(label),
            color: MARKER_COLOR,
            dashed: false,
        }
    }

    /// A dashed arc from pre-sampled points.
    #[must_use]
    pub fn arc(label: &'static str, points: Vec<Point2>) -> Self {
        Self {
            kind: RecordKind::Arc,
            points,
            label: Some(label),
            color: CONSTRUCTION_COLOR,
            dashed: true,
        }
    }

    /// A dashed circle from pre-sampled points.
    #[must_use]
    pub fn circle(label: &'static str, points: Vec<Point2>) -> Self {
        Self {
            kind: RecordKind::Circle,
            points,
            label: Some(label),
            color: CONSTRUCTION_COLOR,
            dashed: true,
        }
    }

    /// Marks the record as dashed.
    #[must_use]
    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}
