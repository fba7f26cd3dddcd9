//! The fixed, ordered construction procedure.
//!
//! Each step is a pure function of the points derived by earlier steps and
//! the scale unit `u` (the length of AB). It returns the points it derives
//! and the records that visualise it; the engine folds these into its state.
//! A is the origin, AB runs along +x and AC along +y.

use std::f64::consts::PI;

use crate::math::distance_2d::{distance_2d, midpoint_2d, point_to_line_dist_2d, point_toward_2d};
use crate::math::intersect_2d::{
    circle_horizontal_intersect_2d, line_at_x_2d, line_at_y_2d, line_line_intersect_2d,
};
use crate::math::Point2;
use crate::tessellation::{sample_arc, sample_circle, ARC_SEGMENTS, CIRCLE_SEGMENTS};

use super::label::PointLabel::{self, A, B, C, D, E, F, G, H, I, J, L, M, N, P, Q, S, T, U, W};
use super::points::PointSet;
use super::record::ConstructionRecord;

/// Number of geometry-producing construction steps.
pub const STEP_COUNT: usize = 22;

/// Step after which the moon decoration is drawn.
pub const MOON_STEP: usize = 18;

/// Step after which the sun decoration is drawn.
pub const SUN_STEP: usize = 22;

/// Ratio AC / AB fixing the flag's height.
pub const HEIGHT_RATIO: f64 = 4.0 / 3.0;

/// A construction step procedure.
pub type StepFn = fn(&PointSet, f64) -> StepOutput;

/// Points and records produced by one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutput {
    /// New points, in label order.
    pub points: Vec<(PointLabel, Point2)>,
    /// New records, in drawing order.
    pub records: Vec<ConstructionRecord>,
}

impl StepOutput {
    fn with_point(mut self, label: PointLabel, point: Point2) -> Self {
        self.points.push((label, point));
        self
    }

    fn with_record(mut self, record: ConstructionRecord) -> Self {
        self.records.push(record);
        self
    }
}

/// Step procedures in execution order; `STEPS[n - 1]` is step `n`.
pub static STEPS: [StepFn; STEP_COUNT] = [
    base_line_ab,
    perpendicular_ac,
    mark_d_join_bd,
    mark_e_on_bd,
    parallel_fg,
    quarter_h_vertical_hi,
    bisect_cf_parallel_jk,
    intersect_jk_hi,
    join_jg,
    intersect_jg_hi,
    mark_n_below_m,
    parallel_om,
    semicircle_about_l,
    semicircle_about_m,
    arc_about_n,
    outer_semicircle_about_t,
    inner_arc_about_t,
    moon_triangles,
    bisect_af_parallel_uv,
    outer_circle_about_w,
    inner_circle_about_w,
    sun_triangles,
];

/// Step 1: baseline AB of length `u`.
fn base_line_ab(_pts: &PointSet, u: f64) -> StepOutput {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(u, 0.0);
    StepOutput::default()
        .with_point(A, a)
        .with_point(B, b)
        .with_record(ConstructionRecord::line("AB", a, b))
}

/// Step 2: AC perpendicular to AB, AC = AB + AB/3.
fn perpendicular_ac(pts: &PointSet, u: f64) -> StepOutput {
    let c = Point2::new(0.0, u * HEIGHT_RATIO);
    StepOutput::default()
        .with_point(C, c)
        .with_record(ConstructionRecord::line("AC", pts[A], c))
}

/// Step 3: D on AC with AD = AB, join BD.
fn mark_d_join_bd(pts: &PointSet, u: f64) -> StepOutput {
    let d = Point2::new(0.0, u);
    StepOutput::default()
        .with_point(D, d)
        .with_record(ConstructionRecord::point("D", d))
        .with_record(ConstructionRecord::line("BD", pts[B], d))
}

/// Step 4: E on BD with BE = AB.
fn mark_e_on_bd(pts: &PointSet, u: f64) -> StepOutput {
    let e = point_toward_2d(&pts[B], &pts[D], u);
    StepOutput::default()
        .with_point(E, e)
        .with_record(ConstructionRecord::point("E", e))
}

/// Step 5: FG parallel to AB through E, F on AC, FG = AB.
fn parallel_fg(pts: &PointSet, u: f64) -> StepOutput {
    let y = pts[E].y;
    let f = Point2::new(0.0, y);
    let g = Point2::new(u, y);
    StepOutput::default()
        .with_point(F, f)
        .with_point(G, g)
        .with_record(ConstructionRecord::line("FG", f, g))
}

/// Step 6: AH = AB/4, HI parallel to AC meeting CG at I.
fn quarter_h_vertical_hi(pts: &PointSet, u: f64) -> StepOutput {
    let h = Point2::new(u / 4.0, 0.0);
    let i = line_at_x_2d(&pts[C], &pts[G], h.x);
    StepOutput::default()
        .with_point(H, h)
        .with_point(I, i)
        .with_record(ConstructionRecord::point("H", h))
        .with_record(ConstructionRecord::line("HI", h, i).dashed())
}

/// Step 7: J bisects CF, JK parallel to AB meeting CG at K.
fn bisect_cf_parallel_jk(pts: &PointSet, _u: f64) -> StepOutput {
    let j = midpoint_2d(&pts[C], &pts[F]);
    let k = line_at_y_2d(&pts[C], &pts[G], j.y);
    StepOutput::default()
        .with_point(J, j)
        .with_point(PointLabel::K, k)
        .with_record(ConstructionRecord::point("J", j))
        .with_record(ConstructionRecord::line("JK", j, k).dashed())
}

/// Step 8: L where JK crosses HI. Both lines are axis-aligned.
fn intersect_jk_hi(pts: &PointSet, _u: f64) -> StepOutput {
    let l = Point2::new(pts[H].x, pts[J].y);
    StepOutput::default()
        .with_point(L, l)
        .with_record(ConstructionRecord::point("L", l))
}

/// Step 9: join J and G.
fn join_jg(pts: &PointSet, _u: f64) -> StepOutput {
    StepOutput::default().with_record(ConstructionRecord::line("JG", pts[J], pts[G]).dashed())
}

/// Step 10: M where JG crosses HI.
fn intersect_jg_hi(pts: &PointSet, _u: f64) -> StepOutput {
    let (h, j) = (pts[H], pts[J]);
    let m = line_line_intersect_2d(&j, &pts[G], &h, &pts[I])
        .unwrap_or_else(|| Point2::new(h.x, j.y));
    StepOutput::default()
        .with_point(M, m)
        .with_record(ConstructionRecord::point("M", m))
}

/// Step 11: N on HI below M, at M's perpendicular distance from BD.
fn mark_n_below_m(pts: &PointSet, _u: f64) -> StepOutput {
    let m = pts[M];
    let dist = point_to_line_dist_2d(&m, &pts[B], &pts[D]);
    let n = Point2::new(m.x, m.y - dist);
    StepOutput::default()
        .with_point(N, n)
        .with_record(ConstructionRecord::point("N", n))
}

/// Step 12: OM parallel to AB, O on AC.
fn parallel_om(pts: &PointSet, u: f64) -> StepOutput {
    let m = pts[M];
    let o = Point2::new(0.0, m.y);
    let end = Point2::new(m.x + u / 2.0, m.y);
    StepOutput::default()
        .with_point(PointLabel::O, o)
        .with_record(ConstructionRecord::point("O", o))
        .with_record(ConstructionRecord::line("OM", o, end).dashed())
}

/// Step 13: semicircle about L with radius LN, cutting OM at P and Q.
fn semicircle_about_l(pts: &PointSet, _u: f64) -> StepOutput {
    let (l, m) = (pts[L], pts[M]);
    let radius = distance_2d(&l, &pts[N]);
    let (p, q) = circle_horizontal_intersect_2d(&l, radius, m.y)
        .unwrap_or((Point2::new(l.x, m.y), Point2::new(l.x, m.y)));
    StepOutput::default()
        .with_point(P, p)
        .with_point(Q, q)
        .with_record(ConstructionRecord::arc(
            "L-semicircle",
            sample_arc(l, radius, PI, 0.0, ARC_SEGMENTS),
        ))
}

/// Step 14: semicircle about M with radius MQ.
fn semicircle_about_m(pts: &PointSet, _u: f64) -> StepOutput {
    let m = pts[M];
    let radius = distance_2d(&m, &pts[Q]);
    StepOutput::default().with_record(ConstructionRecord::arc(
        "M-semicircle",
        sample_arc(m, radius, PI, 0.0, ARC_SEGMENTS),
    ))
}

/// Step 15: arc about N with radius NM, swept from the direction of Q to
/// the direction of P.
///
/// R and S are the first and last arc samples rather than exact circle
/// intersections; T lies on HI halfway between their heights.
fn arc_about_n(pts: &PointSet, _u: f64) -> StepOutput {
    let n = pts[N];
    let radius = distance_2d(&n, &pts[M]);
    let angle_p = (pts[P].y - n.y).atan2(pts[P].x - n.x);
    let angle_q = (pts[Q].y - n.y).atan2(pts[Q].x - n.x);
    let arc = sample_arc(n, radius, angle_q, angle_p, ARC_SEGMENTS);

    let r = arc.first().copied().unwrap_or(n);
    let s = arc.last().copied().unwrap_or(n);
    let t = Point2::new(pts[H].x, (r.y + s.y) / 2.0);
    StepOutput::default()
        .with_point(PointLabel::R, r)
        .with_point(S, s)
        .with_point(T, t)
        .with_record(ConstructionRecord::arc("N-arc", arc))
}

/// Step 16: upper semicircle about T with radius TS.
fn outer_semicircle_about_t(pts: &PointSet, _u: f64) -> StepOutput {
    let t = pts[T];
    let radius = distance_2d(&t, &pts[S]);
    StepOutput::default().with_record(ConstructionRecord::arc(
        "T-semicircle-outer",
        sample_arc(t, radius, 0.0, PI, ARC_SEGMENTS),
    ))
}

/// Step 17: upper arc about T with radius TM.
fn inner_arc_about_t(pts: &PointSet, _u: f64) -> StepOutput {
    let t = pts[T];
    let radius = distance_2d(&t, &pts[M]);
    StepOutput::default().with_record(ConstructionRecord::arc(
        "T-arc-inner",
        sample_arc(t, radius, 0.0, PI, ARC_SEGMENTS),
    ))
}

/// Step 18: the moon's eight triangles. Drawn as a decoration.
fn moon_triangles(_pts: &PointSet, _u: f64) -> StepOutput {
    StepOutput::default()
}

/// Step 19: U bisects AF, UV parallel to AB meeting BE at V.
fn bisect_af_parallel_uv(pts: &PointSet, _u: f64) -> StepOutput {
    let u_mid = midpoint_2d(&pts[A], &pts[F]);
    let v = line_at_y_2d(&pts[B], &pts[E], u_mid.y);
    StepOutput::default()
        .with_point(U, u_mid)
        .with_point(PointLabel::V, v)
        .with_record(ConstructionRecord::point("U", u_mid))
        .with_record(ConstructionRecord::line("UV", u_mid, v).dashed())
}

/// Step 20: W where UV crosses HI; circle about W with radius MN.
fn outer_circle_about_w(pts: &PointSet, _u: f64) -> StepOutput {
    let w = Point2::new(pts[H].x, pts[U].y);
    let radius = distance_2d(&pts[M], &pts[N]);
    StepOutput::default()
        .with_point(W, w)
        .with_record(ConstructionRecord::circle(
            "W-outer-circle",
            sample_circle(w, radius, CIRCLE_SEGMENTS),
        ))
}

/// Step 21: circle about W with radius LN.
fn inner_circle_about_w(pts: &PointSet, _u: f64) -> StepOutput {
    let radius = distance_2d(&pts[L], &pts[N]);
    StepOutput::default().with_record(ConstructionRecord::circle(
        "W-inner-circle",
        sample_circle(pts[W], radius, CIRCLE_SEGMENTS),
    ))
}

/// Step 22: the sun's twelve triangles. Drawn as a decoration.
fn sun_triangles(_pts: &PointSet, _u: f64) -> StepOutput {
    StepOutput::default()
}
