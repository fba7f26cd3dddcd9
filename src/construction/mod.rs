//! Step-by-step geometric construction of the flag of Nepal.
//!
//! [`ConstructionEngine`] replays the officially specified construction up
//! to a requested step and returns a [`GeometryResult`]: the outline, the
//! moon and sun decorations, and every construction line, arc and circle
//! drawn so far.

mod decoration;
mod engine;
mod label;
mod outline;
mod points;
mod record;
mod result;
mod steps;

pub use decoration::{Decoration, DecorationKind, MoonParams, SunParams};
pub use engine::ConstructionEngine;
pub use label::PointLabel;
pub use points::PointSet;
pub use record::{ConstructionRecord, RecordKind};
pub use result::{Dimensions, GeometryResult};
pub use steps::{StepFn, StepOutput, HEIGHT_RATIO, MOON_STEP, STEPS, STEP_COUNT, SUN_STEP};

/// Builds the complete construction for baseline length `scale`.
#[must_use]
pub fn build(scale: f64) -> GeometryResult {
    ConstructionEngine::new(scale).build()
}

/// Builds the construction through `step`, clamped to `[0, STEP_COUNT]`.
#[must_use]
pub fn build_up_to_step(scale: f64, step: i64) -> GeometryResult {
    ConstructionEngine::new(scale).build_up_to_step(step)
}
