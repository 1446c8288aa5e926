use crate::geometry::math::{point_circle_distance, point_line_distance};
use crate::algorithms::paths::path_to_polyline_with;
use crate::algorithms::winding::point_in_polyline;
use crate::model::Point;
use crate::{Diagram, Pick};

/// Hit test in priority order: retained points, lines, circles, then the
/// topmost (most recently filled) region containing the point.
pub fn pick_impl(d: &Diagram, x: f64, y: f64, tol: f64) -> Option<Pick> {
    let q = Point::new(x, y);
    // Points first
    let mut best_point: Option<(u32, f64)> = None;
    for (i, p) in d.points.iter().enumerate() {
        if let Some(p) = p {
            let dist = p.dist(q);
            if dist <= tol && best_point.map_or(true, |(_, bd)| dist < bd) { best_point = Some((i as u32, dist)); }
        }
    }
    if let Some((id, dist)) = best_point { return Some(Pick::Point { id, dist }); }
    // Lines
    let mut best_line: Option<(u32, f64)> = None;
    for (i, l) in d.lines.iter().enumerate() {
        if let Some(l) = l {
            let dist = point_line_distance(q, l);
            if dist <= tol && best_line.map_or(true, |(_, bd)| dist < bd) { best_line = Some((i as u32, dist)); }
        }
    }
    if let Some((id, dist)) = best_line { return Some(Pick::Line { id, dist }); }
    // Circles
    let mut best_circle: Option<(u32, f64)> = None;
    for (i, c) in d.circles.iter().enumerate() {
        if let Some(c) = c {
            let dist = point_circle_distance(q, c);
            if dist <= tol && best_circle.map_or(true, |(_, bd)| dist < bd) { best_circle = Some((i as u32, dist)); }
        }
    }
    if let Some((id, dist)) = best_circle { return Some(Pick::Circle { id, dist }); }
    // Filled regions, newest on top
    let boundary = d.tol.boundary;
    for (i, r) in d.regions.iter().enumerate().rev() {
        if let Some(r) = r {
            let poly = path_to_polyline_with(r, &d.tol);
            if point_in_polyline(q, &poly, boundary) {
                return Some(Pick::Region { id: i as u32 });
            }
        }
    }
    None
}
