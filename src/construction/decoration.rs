use serde::Serialize;

use crate::math::Point2;

use super::label::PointLabel;
use super::points::PointSet;
use super::steps::{MOON_STEP, SUN_STEP};

/// Fill colour of the moon and sun.
pub const EMBLEM_COLOR: &str = "#FFFFFF";

/// Rays around the moon.
pub const MOON_RAYS: u32 = 8;

/// Rays around the sun.
pub const SUN_RAYS: u32 = 12;

/// Parameters of the moon emblem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoonParams {
    pub ray_count: u32,
}

/// Parameters of the sun emblem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SunParams {
    pub ray_count: u32,
}

/// Kind of decoration, with its kind-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DecorationKind {
    Moon(MoonParams),
    Sun(SunParams),
}

impl DecorationKind {
    /// Number of triangular rays the renderer draws.
    #[must_use]
    pub fn ray_count(&self) -> u32 {
        match self {
            Self::Moon(params) => params.ray_count,
            Self::Sun(params) => params.ray_count,
        }
    }
}

/// A symbolic emblem anchored at a construction point.
///
/// The emblem's own shape (crescent, rays) is left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Decoration {
    #[serde(flatten)]
    pub kind: DecorationKind,
    pub position: Point2,
    pub size: f64,
    pub color: &'static str,
}

/// Derives the decorations made eligible by the first `executed` steps.
///
/// The moon sits on M from step 18, sized `u/8`; the sun sits on W from
/// step 22, sized `u/6`.
#[must_use]
pub fn flag_decorations(points: &PointSet, executed: usize, unit: f64) -> Vec<Decoration> {
    let mut decorations = Vec::new();

    if executed >= MOON_STEP {
        if let Some(m) = points.get(PointLabel::M) {
            decorations.push(Decoration {
                kind: DecorationKind::Moon(MoonParams {
                    ray_count: MOON_RAYS,
                }),
                position: m,
                size: unit / 8.0,
                color: EMBLEM_COLOR,
            });
        }
    }

    if executed >= SUN_STEP {
        if let Some(w) = points.get(PointLabel::W) {
            decorations.push(Decoration {
                kind: DecorationKind::Sun(SunParams {
                    ray_count: SUN_RAYS,
                }),
                position: w,
                size: unit / 6.0,
                color: EMBLEM_COLOR,
            });
        }
    }

    decorations
}
