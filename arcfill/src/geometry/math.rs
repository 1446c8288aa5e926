use super::tolerance::EPS_LEN;
use crate::model::{Circle, Line, Point};

/// Squared distance from `p` to segment `a`-`b`, and the clamped parameter.
pub fn seg_distance_sq(p: Point, a: Point, b: Point) -> (f64, f64) {
    let vx = b.x - a.x; let vy = b.y - a.y;
    let wx = p.x - a.x; let wy = p.y - a.y;
    let vv = vx*vx + vy*vy;
    let t = if vv > EPS_LEN { ((wx*vx + wy*vy) / vv).clamp(0.0, 1.0) } else { 0.0 };
    let dx = p.x - (a.x + t * vx); let dy = p.y - (a.y + t * vy);
    (dx*dx + dy*dy, t)
}

/// Perpendicular distance from `p` to the infinite line.
pub fn point_line_distance(p: Point, line: &Line) -> f64 {
    let (dx, dy) = line.dir();
    let len = (dx*dx + dy*dy).sqrt();
    if len <= EPS_LEN {
        return p.dist(line.p1);
    }
    ((p.x - line.p1.x) * dy - (p.y - line.p1.y) * dx).abs() / len
}

/// Scalar projection of `p` onto the line direction (unnormalized units of `p1`..`p2`).
pub fn line_projection(p: Point, line: &Line) -> f64 {
    let (dx, dy) = line.dir();
    (p.x - line.p1.x) * dx + (p.y - line.p1.y) * dy
}

/// Distance from `p` to the circle's curve (not its disk).
pub fn point_circle_distance(p: Point, c: &Circle) -> f64 {
    (p.dist(c.center) - c.r).abs()
}

#[inline]
pub fn polar_angle(p: Point, center: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}
