//! Flag definitions and the step narration shown alongside a construction.
//!
//! The catalog never drives the engine on its own; a [`FlagDefinition`]
//! pairs display metadata with the builder functions for its geometry.

mod nepal;

use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use crate::construction::GeometryResult;
use crate::error::{CatalogError, Result};

pub use nepal::NEPAL;

/// Every flag the crate knows how to construct.
static FLAGS: [FlagDefinition; 1] = [NEPAL];

/// Rendering hint for a narrated step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Line,
    Point,
    Arc,
    Circle,
    Triangle,
    Custom,
}

/// One narrated construction step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepDescription {
    /// One-based step number.
    pub step: u32,
    pub description: &'static str,
    pub kind: StepKind,
    /// Suggested animation time.
    pub duration: Duration,
    pub visible: bool,
}

impl StepDescription {
    const fn new(step: u32, description: &'static str, kind: StepKind, secs: u64) -> Self {
        Self {
            step,
            description,
            kind,
            duration: Duration::from_secs(secs),
            visible: true,
        }
    }
}

/// General shape of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagShape {
    Pennon,
    Rectangular,
    Triangular,
    Custom,
}

/// Hex colours of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlagColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub border: Option<&'static str>,
}

/// A constructible flag.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FlagDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub shape: FlagShape,
    pub official_source: &'static str,
    pub adopted_date: Option<&'static str>,
    pub colors: FlagColors,
    pub construction_steps: &'static [StepDescription],
    #[serde(skip)]
    build: fn(f64) -> GeometryResult,
    #[serde(skip)]
    build_up_to: fn(f64, i64) -> GeometryResult,
}

impl FlagDefinition {
    /// Full geometry at baseline length `scale`.
    #[must_use]
    pub fn build_geometry(&self, scale: f64) -> GeometryResult {
        (self.build)(scale)
    }

    /// Geometry through narrated step `step`. Steps without geometry of
    /// their own reproduce the last geometric step.
    #[must_use]
    pub fn build_up_to_step(&self, scale: f64, step: i64) -> GeometryResult {
        (self.build_up_to)(scale, step)
    }

    /// The narration for one-based step `step`.
    #[must_use]
    pub fn step(&self, step: u32) -> Option<&StepDescription> {
        self.construction_steps.iter().find(|s| s.step == step)
    }

    /// Number of narrated steps, including finishing steps.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.construction_steps.len()
    }

    /// Number of narrated steps handled by the geometry engine.
    #[must_use]
    pub fn geometric_step_count(&self) -> usize {
        self.construction_steps
            .iter()
            .filter(|s| s.kind != StepKind::Custom)
            .count()
    }

    /// Time to animate every visible step at the suggested durations.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.construction_steps
            .iter()
            .filter(|s| s.visible)
            .map(|s| s.duration)
            .sum()
    }
}

/// Looks up a flag by id.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownFlag`] if no flag has this id.
pub fn get_flag(id: &str) -> Result<&'static FlagDefinition> {
    FLAGS.iter().find(|f| f.id == id).ok_or_else(|| {
        warn!(id, "unknown flag requested");
        CatalogError::UnknownFlag(id.to_owned()).into()
    })
}

/// All known flags.
#[must_use]
pub fn all_flags() -> &'static [FlagDefinition] {
    &FLAGS
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::construction::{self, STEP_COUNT};
    use crate::error::FlagcraftError;

    #[test]
    fn nepal_is_registered() {
        let flag = get_flag("nepal").unwrap();
        assert_eq!(flag.shape, FlagShape::Pennon);
        assert_eq!(all_flags().len(), 1);
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = get_flag("atlantis").unwrap_err();
        assert!(matches!(
            err,
            FlagcraftError::Catalog(CatalogError::UnknownFlag(ref id)) if id == "atlantis"
        ));
        assert_eq!(err.to_string(), "unknown flag: atlantis");
    }

    #[test]
    fn narration_covers_every_geometric_step() {
        let flag = get_flag("nepal").unwrap();
        assert_eq!(flag.total_steps(), 24);
        assert_eq!(flag.geometric_step_count(), STEP_COUNT);
        for (i, s) in flag.construction_steps.iter().enumerate() {
            assert_eq!(usize::try_from(s.step).unwrap(), i + 1);
        }
        assert_eq!(flag.step(18).unwrap().kind, StepKind::Triangle);
        assert!(flag.step(25).is_none());
    }

    #[test]
    fn finishing_steps_add_no_geometry() {
        let flag = get_flag("nepal").unwrap();
        let last = flag.build_up_to_step(100.0, 22);
        assert_eq!(flag.build_up_to_step(100.0, 23), last);
        assert_eq!(flag.build_up_to_step(100.0, 24), last);
        assert_eq!(flag.build_geometry(100.0), construction::build(100.0));
    }

    #[test]
    fn total_duration_sums_steps() {
        let flag = get_flag("nepal").unwrap();
        assert_eq!(flag.total_duration(), Duration::from_secs(44));
    }

    #[test]
    fn definition_serializes_without_builders() {
        let json = serde_json::to_string(&NEPAL).unwrap();
        assert!(json.contains("\"id\":\"nepal\""));
        assert!(json.contains("\"shape\":\"pennon\""));
        assert!(!json.contains("build"));
    }
}
