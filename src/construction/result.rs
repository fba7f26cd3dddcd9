use serde::Serialize;

use crate::error::Result;
use crate::math::Point2;

use super::decoration::{Decoration, DecorationKind};
use super::record::ConstructionRecord;
use super::steps::HEIGHT_RATIO;

/// Overall flag dimensions in construction units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Dimensions of a flag whose baseline AB has length `unit`.
    #[must_use]
    pub fn for_unit(unit: f64) -> Self {
        Self {
            width: unit,
            height: unit * HEIGHT_RATIO,
        }
    }
}

/// Output of one engine build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryResult {
    /// Flag silhouette as an ordered polygon.
    pub outline: Vec<Point2>,
    pub decorations: Vec<Decoration>,
    pub dimensions: Dimensions,
    /// Records of every executed step, in execution order.
    pub construction_lines: Vec<ConstructionRecord>,
}

impl GeometryResult {
    /// The moon decoration, if eligible.
    #[must_use]
    pub fn moon(&self) -> Option<&Decoration> {
        self.decorations
            .iter()
            .find(|d| matches!(d.kind, DecorationKind::Moon(_)))
    }

    /// The sun decoration, if eligible.
    #[must_use]
    pub fn sun(&self) -> Option<&Decoration> {
        self.decorations
            .iter()
            .find(|d| matches!(d.kind, DecorationKind::Sun(_)))
    }

    /// Serializes the result as pretty-printed JSON for an external renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails. Non-finite coordinates are
    /// written as `null`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
