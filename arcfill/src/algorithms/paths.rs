use crate::algorithms::arrangement::Arrangement;
use crate::algorithms::faces::Loop;
use crate::algorithms::winding::{point_in_polyline, polyline_area};
use crate::geometry::flatten::flatten_arc;
use crate::geometry::tolerance::Tolerances;
use crate::model::{EdgeKind, PathSegment, Point, RegionPath};

/// Lossless boundary of a traced loop: one segment per half-edge.
pub fn loop_to_path(arr: &Arrangement, lp: &Loop) -> RegionPath {
    let start = lp
        .half_edges
        .first()
        .map(|&h| arr.vertex_pos(arr.half_edge(h).from))
        .unwrap_or_default();
    let segments = lp
        .half_edges
        .iter()
        .map(|&h| {
            let he = arr.half_edge(h);
            let to = arr.vertex_pos(he.to);
            match he.kind {
                EdgeKind::Segment => PathSegment::Line { to },
                EdgeKind::Arc { center, radius, sweep, large_arc } => {
                    PathSegment::Arc { to, center, radius, large_arc, sweep }
                }
            }
        })
        .collect();
    RegionPath { start, segments, fill: None }
}

pub fn path_to_polyline(path: &RegionPath) -> Vec<Point> {
    path_to_polyline_with(path, &Tolerances::default())
}

pub fn path_to_polyline_with(path: &RegionPath, tol: &Tolerances) -> Vec<Point> {
    let mut pts = Vec::with_capacity(path.segments.len() * 4 + 2);
    pts.push(path.start);
    let mut cur = path.start;
    for seg in &path.segments {
        match *seg {
            PathSegment::Line { to } => pts.push(to),
            PathSegment::Arc { to, center, radius, sweep, .. } => {
                flatten_arc(&mut pts, cur, to, center, radius, sweep, tol.arc_step);
            }
        }
        cur = seg.end();
    }
    if pts.len() > 1 && pts[pts.len() - 1].dist_sq(pts[0]) > tol.close * tol.close {
        pts.push(pts[0]);
    }
    pts
}

impl RegionPath {
    pub fn to_polyline(&self) -> Vec<Point> {
        path_to_polyline(self)
    }

    /// Unsigned area of the sampled boundary.
    pub fn area(&self) -> f64 {
        polyline_area(&self.to_polyline()).abs()
    }

    pub fn contains(&self, p: Point) -> bool {
        point_in_polyline(p, &self.to_polyline(), Tolerances::default().boundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sweep;
    use std::f64::consts::PI;

    #[test]
    fn half_disk_polyline_area() {
        // upper half of the unit circle, traced counterclockwise
        let path = RegionPath {
            start: Point::new(-1.0, 0.0),
            segments: vec![
                PathSegment::Line { to: Point::new(1.0, 0.0) },
                PathSegment::Arc {
                    to: Point::new(-1.0, 0.0),
                    center: Point::new(0.0, 0.0),
                    radius: 1.0,
                    large_arc: false,
                    sweep: Sweep::Ccw,
                },
            ],
            fill: None,
        };
        let poly = path.to_polyline();
        let a = polyline_area(&poly);
        assert!(a > 0.0);
        assert!((a - PI / 2.0).abs() < 1e-3, "area {}", a);
        assert!(path.contains(Point::new(0.0, 0.5)));
        assert!(!path.contains(Point::new(0.0, -0.5)));
    }

    #[test]
    fn open_path_gets_closing_point() {
        let path = RegionPath {
            start: Point::new(0.0, 0.0),
            segments: vec![PathSegment::Line { to: Point::new(1.0, 0.0) }, PathSegment::Line { to: Point::new(1.0, 1.0) }],
            fill: None,
        };
        let poly = path.to_polyline();
        assert_eq!(poly.len(), 4);
        assert_eq!(poly[3], poly[0]);
    }

    #[test]
    fn clockwise_arc_reverses_area_sign() {
        let path = RegionPath {
            start: Point::new(1.0, 0.0),
            segments: vec![
                PathSegment::Line { to: Point::new(-1.0, 0.0) },
                PathSegment::Arc {
                    to: Point::new(1.0, 0.0),
                    center: Point::new(0.0, 0.0),
                    radius: 1.0,
                    large_arc: false,
                    sweep: Sweep::Cw,
                },
            ],
            fill: None,
        };
        let a = polyline_area(&path.to_polyline());
        assert!(a < 0.0);
        assert!((a.abs() - PI / 2.0).abs() < 1e-3);
    }
}
