// Centralized tolerances. These gate topology (which vertices lie on which
// curve), so the defaults must stay as they are.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const EPS_DET: f64 = 1e-12;               // determinant / discriminant / tangency slack
pub const EPS_ON_LINE: f64 = 1e-6;            // perpendicular distance for on-line membership
pub const EPS_ON_CIRCLE_REL: f64 = 1e-6;      // |dist - r| <= rel * r for on-circle membership
pub const EPS_DEDUP_DERIVED_SQ: f64 = 1e-8;   // squared distance, computed intersections
pub const EPS_DEDUP_RETAINED_SQ: f64 = 1e-10; // squared distance, exact retained points
pub const EPS_BOUNDARY: f64 = 1e-6;           // boundary-inclusive containment
pub const EPS_CLOSE: f64 = 1e-9;              // polyline closure check
pub const EPS_FACE_AREA: f64 = 1e-10;         // degenerate face area
pub const EPS_LEN: f64 = 1e-12;               // zero-length vector

pub const ARC_STEP: f64 = PI / 90.0;          // max angular step when sampling arcs
pub const MIN_ARC_STEP: f64 = 1e-4;           // floor for configured steps, caps samples per arc near 63k
pub const MAX_TRACE_STEPS: usize = 10_000;

pub const TAU: f64 = 2.0 * PI;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    pub det: f64,
    pub on_line: f64,
    pub on_circle_rel: f64,
    pub dedup_derived_sq: f64,
    pub dedup_retained_sq: f64,
    pub boundary: f64,
    pub close: f64,
    pub face_area: f64,
    pub arc_step: f64,
    pub max_trace_steps: usize,
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            det: EPS_DET,
            on_line: EPS_ON_LINE,
            on_circle_rel: EPS_ON_CIRCLE_REL,
            dedup_derived_sq: EPS_DEDUP_DERIVED_SQ,
            dedup_retained_sq: EPS_DEDUP_RETAINED_SQ,
            boundary: EPS_BOUNDARY,
            close: EPS_CLOSE,
            face_area: EPS_FACE_AREA,
            arc_step: ARC_STEP,
            max_trace_steps: MAX_TRACE_STEPS,
        }
    }
}

impl Tolerances {
    /// Replaces every non-finite or non-positive field with its default.
    pub fn sanitized(self) -> Self {
        let d = Tolerances::default();
        let pick = |v: f64, dv: f64| if v.is_finite() && v > 0.0 { v } else { dv };
        Tolerances {
            det: pick(self.det, d.det),
            on_line: pick(self.on_line, d.on_line),
            on_circle_rel: pick(self.on_circle_rel, d.on_circle_rel),
            dedup_derived_sq: pick(self.dedup_derived_sq, d.dedup_derived_sq),
            dedup_retained_sq: pick(self.dedup_retained_sq, d.dedup_retained_sq),
            boundary: pick(self.boundary, d.boundary),
            close: pick(self.close, d.close),
            face_area: pick(self.face_area, d.face_area),
            arc_step: pick(self.arc_step, d.arc_step).clamp(MIN_ARC_STEP, PI),
            max_trace_steps: if self.max_trace_steps == 0 { d.max_trace_steps } else { self.max_trace_steps },
        }
    }
}

#[inline] pub fn near_zero(x: f64, eps: f64) -> bool { x.abs() <= eps }
#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

/// Angle delta going counterclockwise from `from` to `to`, in `[0, 2π)`.
#[inline]
pub fn ccw_delta(from: f64, to: f64) -> f64 {
    let d = (to - from).rem_euclid(TAU);
    if d >= TAU { 0.0 } else { d }
}
