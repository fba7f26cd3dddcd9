use tracing::{debug, trace};

use crate::error::{GeometryError, Result};

use super::decoration::flag_decorations;
use super::outline::flag_outline;
use super::points::PointSet;
use super::record::ConstructionRecord;
use super::result::{Dimensions, GeometryResult};
use super::steps::{StepOutput, STEPS, STEP_COUNT};

/// Replays the construction steps for a fixed scale unit.
///
/// The engine only holds transient state: every build starts from an empty
/// point set and record list, so repeated builds with the same target are
/// identical. Use one engine per concurrent caller.
#[derive(Debug, Clone)]
pub struct ConstructionEngine {
    unit: f64,
    points: PointSet,
    records: Vec<ConstructionRecord>,
    executed: usize,
}

impl ConstructionEngine {
    /// Creates an engine whose baseline AB has length `scale`.
    ///
    /// Any scale is accepted; a non-positive or non-finite scale produces
    /// degenerate geometry. See [`ConstructionEngine::try_new`].
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self {
            unit: scale,
            points: PointSet::new(),
            records: Vec::new(),
            executed: 0,
        }
    }

    /// Creates an engine, rejecting scales that cannot produce a flag.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidScale`] if `scale` is not a positive
    /// finite number.
    pub fn try_new(scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GeometryError::InvalidScale(scale).into());
        }
        Ok(Self::new(scale))
    }

    /// Returns the scale unit (length of AB).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.unit
    }

    /// Points derived by the last build.
    #[must_use]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Number of steps executed by the last build.
    #[must_use]
    pub fn executed_steps(&self) -> usize {
        self.executed
    }

    /// Runs every construction step.
    pub fn build(&mut self) -> GeometryResult {
        self.replay(STEP_COUNT)
    }

    /// Runs construction steps `1..=target_step`.
    ///
    /// The target is clamped to `[0, STEP_COUNT]`: zero or negative targets
    /// run nothing and yield the placeholder outline, targets past the last
    /// geometric step yield the full construction.
    pub fn build_up_to_step(&mut self, target_step: i64) -> GeometryResult {
        let steps = usize::try_from(target_step).map_or(0, |n| n.min(STEP_COUNT));
        self.replay(steps)
    }

    fn replay(&mut self, steps: usize) -> GeometryResult {
        debug!(scale = self.unit, steps, "building flag construction");
        self.points.clear();
        self.records.clear();

        for (index, step) in STEPS.iter().take(steps).enumerate() {
            let StepOutput { points, records } = step(&self.points, self.unit);
            trace!(
                step = index + 1,
                points = points.len(),
                records = records.len(),
                "construction step"
            );
            for (label, point) in points {
                self.points.define(label, point);
            }
            self.records.extend(records);
        }
        self.executed = steps;

        GeometryResult {
            outline: flag_outline(&self.points, self.unit),
            decorations: flag_decorations(&self.points, steps, self.unit),
            dimensions: Dimensions::for_unit(self.unit),
            construction_lines: self.records.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    use super::*;
    use crate::construction::label::PointLabel;
    use crate::construction::steps::{MOON_STEP, SUN_STEP};
    use crate::math::distance_2d::distance_2d;
    use crate::math::Point2;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn assert_results_close(a: &GeometryResult, b: &GeometryResult) {
        assert_eq!(a.outline.len(), b.outline.len());
        for (p, q) in a.outline.iter().zip(&b.outline) {
            assert_abs_diff_eq!(p, q, epsilon = 1e-9);
        }
        assert_eq!(a.construction_lines.len(), b.construction_lines.len());
        for (r, s) in a.construction_lines.iter().zip(&b.construction_lines) {
            assert_eq!(r.kind, s.kind);
            assert_eq!(r.label, s.label);
            assert_eq!(r.points.len(), s.points.len());
            for (p, q) in r.points.iter().zip(&s.points) {
                assert_abs_diff_eq!(p, q, epsilon = 1e-9);
            }
        }
        assert_eq!(a.decorations.len(), b.decorations.len());
    }

    #[test]
    fn c_is_four_thirds_up_the_hoist() {
        init_tracing();
        let mut engine = ConstructionEngine::new(100.0);
        engine.build_up_to_step(2);
        let c = engine.points().get(PointLabel::C).unwrap();
        assert_abs_diff_eq!(c, Point2::new(0.0, 400.0 / 3.0), epsilon = 1e-9);
    }

    #[test]
    fn d_and_e_at_scale_100() {
        let mut engine = ConstructionEngine::new(100.0);
        engine.build_up_to_step(4);
        let pts = engine.points();
        let b = pts.get(PointLabel::B).unwrap();
        let d = pts.get(PointLabel::D).unwrap();
        let e = pts.get(PointLabel::E).unwrap();
        assert_abs_diff_eq!(d, Point2::new(0.0, 100.0), epsilon = 1e-9);
        assert_relative_eq!(distance_2d(&b, &e), 100.0, epsilon = 1e-9);
        // E lies between B and D.
        assert!(e.x > 0.0 && e.x < 100.0);
        assert!(e.y > 0.0 && e.y < 100.0);
    }

    #[test]
    fn step_zero_uses_placeholder_outline() {
        let mut engine = ConstructionEngine::new(100.0);
        let result = engine.build_up_to_step(0);
        assert!(result.construction_lines.is_empty());
        assert!(result.decorations.is_empty());
        assert!(engine.points().is_empty());
        assert_eq!(result.outline.len(), 5);
        let expected = [
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(100.0, 100.0),
            Point2::new(100.0, 100.0),
            Point2::new(0.0, 400.0 / 3.0),
        ];
        for (got, want) in result.outline.iter().zip(&expected) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn negative_and_overshooting_targets_are_clamped() {
        let mut engine = ConstructionEngine::new(50.0);
        let negative = engine.build_up_to_step(-7);
        let zero = engine.build_up_to_step(0);
        assert_eq!(negative, zero);

        let over = engine.build_up_to_step(24);
        assert_eq!(engine.executed_steps(), STEP_COUNT);
        let full = engine.build_up_to_step(22);
        assert_eq!(over, full);
    }

    #[test]
    fn build_equals_last_step() {
        let mut engine = ConstructionEngine::new(73.5);
        let full = engine.build();
        let stepped = engine.build_up_to_step(22);
        assert_eq!(full, stepped);
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let mut engine = ConstructionEngine::new(100.0);
        for step in 0..=22 {
            let first = engine.build_up_to_step(step);
            let second = engine.build_up_to_step(step);
            assert_eq!(first, second, "step {step}");
        }
    }

    #[test]
    fn shorter_build_after_longer_discards_state() {
        let mut engine = ConstructionEngine::new(100.0);
        engine.build();
        let partial = engine.build_up_to_step(3);
        let fresh = ConstructionEngine::new(100.0).build_up_to_step(3);
        assert_eq!(partial, fresh);
        assert!(engine.points().get(PointLabel::E).is_none());
    }

    #[test]
    fn records_grow_as_a_prefix() {
        let mut engine = ConstructionEngine::new(100.0);
        for step in 1..22 {
            let shorter = engine.build_up_to_step(step).construction_lines;
            let longer = engine.build_up_to_step(step + 1).construction_lines;
            assert!(longer.len() >= shorter.len());
            assert_eq!(&longer[..shorter.len()], &shorter[..], "step {step}");
        }
    }

    #[test]
    fn decorations_appear_at_their_steps() {
        let mut engine = ConstructionEngine::new(100.0);
        for step in 0..=24_i64 {
            let result = engine.build_up_to_step(step);
            let executed = engine.executed_steps();
            let moons = result
                .decorations
                .iter()
                .filter(|d| d.kind.ray_count() == 8)
                .count();
            let suns = result
                .decorations
                .iter()
                .filter(|d| d.kind.ray_count() == 12)
                .count();
            assert_eq!(moons, usize::from(executed >= MOON_STEP), "step {step}");
            assert_eq!(suns, usize::from(executed >= SUN_STEP), "step {step}");
        }
    }

    #[test]
    fn emblems_sit_on_m_and_w() {
        let mut engine = ConstructionEngine::new(120.0);
        let result = engine.build();
        let pts = engine.points();
        let moon = result.moon().unwrap();
        let sun = result.sun().unwrap();
        assert_eq!(moon.position, pts.get(PointLabel::M).unwrap());
        assert_eq!(sun.position, pts.get(PointLabel::W).unwrap());
        assert_relative_eq!(moon.size, 15.0);
        assert_relative_eq!(sun.size, 20.0);
    }

    #[test]
    fn full_outline_is_the_pennant() {
        let mut engine = ConstructionEngine::new(100.0);
        let result = engine.build();
        let pts = engine.points();
        let expected: Vec<_> = [
            PointLabel::A,
            PointLabel::B,
            PointLabel::E,
            PointLabel::G,
            PointLabel::C,
        ]
        .iter()
        .map(|&l| pts.get(l).unwrap())
        .collect();
        assert_eq!(result.outline, expected);
        assert_relative_eq!(result.dimensions.width, 100.0);
        assert_relative_eq!(result.dimensions.height, 100.0 * 4.0 / 3.0);
    }

    #[test]
    fn moon_sits_above_sun() {
        let mut engine = ConstructionEngine::new(100.0);
        let result = engine.build();
        assert!(result.moon().unwrap().position.y > result.sun().unwrap().position.y);
    }

    #[test]
    fn full_build_record_count() {
        let result = ConstructionEngine::new(100.0).build();
        assert_eq!(result.construction_lines.len(), 25);
        assert!(result.construction_lines.iter().all(|r| !r.points.is_empty()));
    }

    #[test]
    fn try_new_rejects_bad_scale() {
        assert!(ConstructionEngine::try_new(0.0).is_err());
        assert!(ConstructionEngine::try_new(-1.0).is_err());
        assert!(ConstructionEngine::try_new(f64::NAN).is_err());
        assert!(ConstructionEngine::try_new(f64::INFINITY).is_err());
        assert_relative_eq!(ConstructionEngine::try_new(2.5).unwrap().scale(), 2.5);
    }

    proptest! {
        #[test]
        fn geometry_scales_linearly(scale in 0.5f64..500.0, step in 0i64..=22) {
            let base = ConstructionEngine::new(1.0).build_up_to_step(step);
            let scaled = ConstructionEngine::new(scale).build_up_to_step(step);

            prop_assert_eq!(base.outline.len(), scaled.outline.len());
            for (p, q) in base.outline.iter().zip(&scaled.outline) {
                prop_assert!((p.x * scale - q.x).abs() <= 1e-9 * scale);
                prop_assert!((p.y * scale - q.y).abs() <= 1e-9 * scale);
            }
            prop_assert_eq!(base.construction_lines.len(), scaled.construction_lines.len());
            for (r, s) in base.construction_lines.iter().zip(&scaled.construction_lines) {
                for (p, q) in r.points.iter().zip(&s.points) {
                    prop_assert!((p.x * scale - q.x).abs() <= 1e-9 * scale);
                    prop_assert!((p.y * scale - q.y).abs() <= 1e-9 * scale);
                }
            }
        }

        #[test]
        fn records_are_a_prefix_at_any_scale(scale in 0.5f64..500.0, step in 0i64..22) {
            let mut engine = ConstructionEngine::new(scale);
            let shorter = engine.build_up_to_step(step);
            let longer = engine.build_up_to_step(step + 1);
            prop_assert!(longer.construction_lines.starts_with(&shorter.construction_lines));
        }

        #[test]
        fn independent_engines_agree(scale in 0.5f64..500.0, step in -3i64..30) {
            let a = ConstructionEngine::new(scale).build_up_to_step(step);
            let b = ConstructionEngine::new(scale).build_up_to_step(step);
            assert_results_close(&a, &b);
        }
    }
}
