//! Area and point containment for sampled boundary rings.
//!
//! Rings are implicitly closed; a repeated closing point is harmless.

use crate::geometry::math::seg_distance_sq;
use crate::model::Point;

/// Signed shoelace area. Positive = counter-clockwise.
pub fn polyline_area(poly: &[Point]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for i in 0..poly.len() {
        let j = (i + 1) % poly.len();
        a += poly[i].x * poly[j].y - poly[j].x * poly[i].y;
    }
    0.5 * a
}

/// Area centroid; falls back to the vertex mean for degenerate rings.
pub fn polyline_centroid(poly: &[Point]) -> Option<Point> {
    if poly.is_empty() {
        return None;
    }
    let mut cx = 0.0;
    let mut cy = 0.0;
    let mut a = 0.0;
    for i in 0..poly.len() {
        let j = (i + 1) % poly.len();
        let cross = poly[i].x * poly[j].y - poly[j].x * poly[i].y;
        a += cross;
        cx += (poly[i].x + poly[j].x) * cross;
        cy += (poly[i].y + poly[j].y) * cross;
    }
    let a = a * 0.5;
    if a.abs() < 1e-12 {
        let n = poly.len() as f64;
        let sx: f64 = poly.iter().map(|p| p.x).sum();
        let sy: f64 = poly.iter().map(|p| p.y).sum();
        return Some(Point::new(sx / n, sy / n));
    }
    Some(Point::new(cx / (6.0 * a), cy / (6.0 * a)))
}

/// Number of ring edges crossed by the horizontal ray from `p` going right.
pub fn crossing_number(p: Point, poly: &[Point]) -> i32 {
    if poly.len() < 3 {
        return 0;
    }
    let mut crossings = 0i32;
    let n = poly.len();
    for i in 0..n {
        let p1 = poly[i];
        let p2 = poly[(i + 1) % n];
        let y_crosses = (p1.y <= p.y && p2.y > p.y) || (p2.y <= p.y && p1.y > p.y);
        if y_crosses {
            let t = (p.y - p1.y) / (p2.y - p1.y);
            let x_intersect = p1.x + t * (p2.x - p1.x);
            if p.x < x_intersect {
                crossings += 1;
            }
        }
    }
    crossings
}

/// Check if a point lies within `tol` of any ring edge.
pub fn point_on_polyline_edge(p: Point, poly: &[Point], tol: f64) -> bool {
    let n = poly.len();
    if n == 0 {
        return false;
    }
    if n == 1 {
        return p.dist_sq(poly[0]) <= tol * tol;
    }
    let tol_sq = tol * tol;
    (0..n).any(|i| seg_distance_sq(p, poly[i], poly[(i + 1) % n]).0 <= tol_sq)
}

/// Boundary-inclusive containment: on an edge counts as inside, otherwise
/// even-odd ray casting.
pub fn point_in_polyline(p: Point, poly: &[Point], boundary_tol: f64) -> bool {
    if point_on_polyline_edge(p, poly, boundary_tol) {
        return true;
    }
    crossing_number(p, poly) % 2 == 1
}
