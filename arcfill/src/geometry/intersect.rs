// Intersections between infinite lines and circles in f64 with explicit
// tolerances. Degenerate inputs (parallel, concentric, non-positive radius)
// resolve to `None`, never to an error.

use crate::model::{Circle, Line, Point};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveIntersection {
    None,
    // Single touching point (tangency, or the lone line-line crossing)
    One(Point),
    // Two crossings, in root order (not sorted)
    Two(Point, Point),
}

impl CurveIntersection {
    pub fn points(&self) -> Vec<Point> {
        match *self {
            CurveIntersection::None => Vec::new(),
            CurveIntersection::One(p) => vec![p],
            CurveIntersection::Two(p, q) => vec![p, q],
        }
    }
    pub fn count(&self) -> usize {
        match self {
            CurveIntersection::None => 0,
            CurveIntersection::One(_) => 1,
            CurveIntersection::Two(..) => 2,
        }
    }
}

#[inline]
fn within_eps(x: f64, eps: f64) -> bool { x.abs() <= eps }

pub fn intersect_lines(l1: &Line, l2: &Line, eps_det: f64) -> Option<Point> {
    let (ax, ay) = (l1.p1.x, l1.p1.y);
    let (rx, ry) = l1.dir();
    let (cx, cy) = (l2.p1.x, l2.p1.y);
    let (sx, sy) = l2.dir();
    let det = rx * sy - ry * sx;
    if within_eps(det, eps_det) {
        // Parallel or coincident
        return None;
    }
    let t = ((cx - ax) * sy - (cy - ay) * sx) / det;
    Some(Point::new(ax + t * rx, ay + t * ry))
}

pub fn intersect_line_circle(line: &Line, circle: &Circle, eps_det: f64) -> CurveIntersection {
    if !(circle.r > 0.0) {
        return CurveIntersection::None;
    }
    let (dx, dy) = line.dir();
    let fx = line.p1.x - circle.center.x;
    let fy = line.p1.y - circle.center.y;
    let a = dx * dx + dy * dy;
    if within_eps(a, eps_det) {
        return CurveIntersection::None;
    }
    let b = 2.0 * (fx * dx + fy * dy);
    let c = fx * fx + fy * fy - circle.r * circle.r;
    let disc = b * b - 4.0 * a * c;
    let at = |t: f64| Point::new(line.p1.x + t * dx, line.p1.y + t * dy);
    if disc < -eps_det {
        CurveIntersection::None
    } else if disc.abs() <= eps_det {
        CurveIntersection::One(at(-b / (2.0 * a)))
    } else {
        let sq = disc.sqrt();
        CurveIntersection::Two(at((-b + sq) / (2.0 * a)), at((-b - sq) / (2.0 * a)))
    }
}

pub fn intersect_circles(c1: &Circle, c2: &Circle, eps_det: f64) -> CurveIntersection {
    if !(c1.r > 0.0 && c2.r > 0.0) {
        return CurveIntersection::None;
    }
    let dx = c2.center.x - c1.center.x;
    let dy = c2.center.y - c1.center.y;
    let d = (dx * dx + dy * dy).sqrt();
    if within_eps(d, eps_det) {
        // Concentric
        return CurveIntersection::None;
    }
    if d > c1.r + c2.r + eps_det || d < (c1.r - c2.r).abs() - eps_det {
        return CurveIntersection::None;
    }
    let a = (c1.r * c1.r - c2.r * c2.r + d * d) / (2.0 * d);
    let h2 = c1.r * c1.r - a * a;
    let ux = dx / d;
    let uy = dy / d;
    let base = Point::new(c1.center.x + a * ux, c1.center.y + a * uy);
    if h2 <= eps_det {
        return CurveIntersection::One(base);
    }
    let h = h2.sqrt();
    CurveIntersection::Two(
        Point::new(base.x - h * uy, base.y + h * ux),
        Point::new(base.x + h * uy, base.y - h * ux),
    )
}
