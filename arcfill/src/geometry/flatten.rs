use crate::geometry::math::polar_angle;
use crate::geometry::tolerance::{ccw_delta, MIN_ARC_STEP, TAU};
use crate::model::{Point, Sweep};

/// Angular span of the arc from `from` to `to` about `center` in the given
/// travel direction, in `[0, 2π]`.
pub fn arc_span(from: Point, to: Point, center: Point, sweep: Sweep) -> f64 {
    let delta = ccw_delta(polar_angle(from, center), polar_angle(to, center));
    match sweep {
        Sweep::Ccw => delta,
        Sweep::Cw => TAU - delta,
    }
}

/// Appends samples of the arc after `from`, ending exactly at `to`.
pub fn flatten_arc(points: &mut Vec<Point>,
    from: Point, to: Point, center: Point, radius: f64, sweep: Sweep, step: f64)
{
    let span = arc_span(from, to, center, sweep);
    // NaN or tiny steps fall back to the floor
    let step = step.max(MIN_ARC_STEP);
    let n = ((span / step).ceil() as usize).max(2);
    let a0 = polar_angle(from, center);
    let dir = match sweep { Sweep::Ccw => 1.0, Sweep::Cw => -1.0 };
    for i in 1..n {
        let a = a0 + dir * span * (i as f64) / (n as f64);
        points.push(Point::new(center.x + radius * a.cos(), center.y + radius * a.sin()));
    }
    points.push(to);
}
