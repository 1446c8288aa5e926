use serde::Serialize;

use crate::algorithms::arrangement::{build_arrangement_with, Arrangement};
use crate::algorithms::faces::{trace_loops_with, Loop};
use crate::algorithms::paths::{loop_to_path, path_to_polyline_with};
use crate::algorithms::winding::{point_in_polyline, polyline_area};
use crate::geometry::tolerance::Tolerances;
use crate::model::{Circle, Line, Point, RegionPath, Vertex};

/// Winning face for a query point.
#[derive(Clone, Debug, Serialize)]
pub struct Selection {
    pub loop_index: usize,
    pub area: f64,
}

/// Picks the smallest-area loop whose sampled boundary contains `q`.
/// Loops at or below the degenerate-area threshold never qualify.
pub fn select_region(arr: &Arrangement, loops: &[Loop], q: Point, tol: &Tolerances) -> Option<Selection> {
    let mut best: Option<Selection> = None;
    for (i, lp) in loops.iter().enumerate() {
        let poly = path_to_polyline_with(&loop_to_path(arr, lp), tol);
        let area = polyline_area(&poly).abs();
        if area <= tol.face_area {
            continue;
        }
        if !point_in_polyline(q, &poly, tol.boundary) {
            continue;
        }
        if best.as_ref().map_or(true, |b| area < b.area) {
            best = Some(Selection { loop_index: i, area });
        }
    }
    best
}

/// Full pipeline on one snapshot: arrangement, faces, selection, path.
pub fn region_at(lines: &[Line], circles: &[Circle], vertices: &[Vertex], q: Point) -> Option<RegionPath> {
    region_at_with(lines, circles, vertices, q, &Tolerances::default())
}

pub fn region_at_with(
    lines: &[Line],
    circles: &[Circle],
    vertices: &[Vertex],
    q: Point,
    tol: &Tolerances,
) -> Option<RegionPath> {
    let arr = build_arrangement_with(lines, circles, vertices, tol);
    let loops = trace_loops_with(&arr, tol);
    let sel = select_region(&arr, &loops, q, tol)?;
    Some(loop_to_path(&arr, &loops[sel.loop_index]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::vertices::build_vertices;

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn picks_innermost_half_disk() {
        let lines = [line(-10.0, 0.0, 10.0, 0.0)];
        let circles = [Circle::new(Point::new(0.0, 0.0), 10.0), Circle::new(Point::new(0.0, 0.0), 3.0)];
        let verts = build_vertices(&lines, &circles, &[]);
        let path = region_at(&lines, &circles, &verts, Point::new(1.0, 1.0)).expect("region");
        let area = path.area();
        assert!((area - 4.5 * std::f64::consts::PI).abs() < 0.05, "area {}", area);
    }

    #[test]
    fn query_outside_everything_has_no_region() {
        let lines = [line(0.0, 0.0, 1.0, 0.0), line(0.0, 1.0, 1.0, 1.0), line(0.0, 0.0, 0.0, 1.0), line(1.0, 0.0, 1.0, 1.0)];
        let verts = build_vertices(&lines, &[], &[]);
        assert!(region_at(&lines, &[], &verts, Point::new(3.0, 3.0)).is_none());
        assert!(region_at(&lines, &[], &verts, Point::new(0.5, 0.5)).is_some());
    }

    #[test]
    fn empty_loop_list_selects_nothing() {
        let arr = Arrangement::default();
        assert!(select_region(&arr, &[], Point::new(0.0, 0.0), &Tolerances::default()).is_none());
    }
}
