use arcfill::algorithms::arrangement::build_arrangement;
use arcfill::algorithms::faces::trace_loops;
use arcfill::algorithms::paths::{loop_to_path, path_to_polyline};
use arcfill::algorithms::regions::region_at;
use arcfill::algorithms::vertices::build_vertices;
use arcfill::algorithms::winding::{point_in_polyline, polyline_area};
use arcfill::geometry::intersect::{intersect_circles, intersect_line_circle};
use arcfill::geometry::tolerance::{EPS_BOUNDARY, EPS_DET};
use arcfill::model::{Circle, Line, PathSegment, Point};
use std::f64::consts::PI;

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new(Point::new(x1, y1), Point::new(x2, y2))
}

fn near(p: Point, x: f64, y: f64) -> bool {
    (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9
}

#[test]
fn line_circle_count() {
    let c = Circle::new(Point::new(0.0, 0.0), 5.0);
    let pts = intersect_line_circle(&line(-10.0, 3.0, 10.0, 3.0), &c, EPS_DET).points();
    assert_eq!(pts.len(), 2);
    assert!(pts.iter().any(|p| near(*p, -4.0, 3.0)));
    assert!(pts.iter().any(|p| near(*p, 4.0, 3.0)));
}

#[test]
fn circle_circle_count() {
    let a = Circle::new(Point::new(0.0, 0.0), 5.0);
    let b = Circle::new(Point::new(8.0, 0.0), 5.0);
    let pts = intersect_circles(&a, &b, EPS_DET).points();
    assert_eq!(pts.len(), 2);
    assert!(pts.iter().any(|p| near(*p, 4.0, 3.0)));
    assert!(pts.iter().any(|p| near(*p, 4.0, -3.0)));
}

#[test]
fn unit_square_area_round_trip() {
    let lines = [line(0.0, 0.0, 1.0, 0.0), line(1.0, 0.0, 1.0, 1.0), line(1.0, 1.0, 0.0, 1.0), line(0.0, 1.0, 0.0, 0.0)];
    let verts = build_vertices(&lines, &[], &[]);
    assert_eq!(verts.len(), 4);
    let arr = build_arrangement(&lines, &[], &verts);
    let loops = trace_loops(&arr);
    assert!(!loops.is_empty());
    let found = loops.iter().any(|lp| {
        let poly = path_to_polyline(&loop_to_path(&arr, lp));
        (polyline_area(&poly).abs() - 1.0).abs() < 1e-9
    });
    assert!(found, "no loop with unit area");
}

#[test]
fn innermost_selection() {
    let lines = [line(-10.0, 0.0, 10.0, 0.0)];
    let circles = [Circle::new(Point::new(0.0, 0.0), 10.0), Circle::new(Point::new(0.0, 0.0), 3.0)];
    let verts = build_vertices(&lines, &circles, &[]);
    let path = region_at(&lines, &circles, &verts, Point::new(1.0, 1.0)).expect("a region");
    // the small upper half-disk: one diameter segment plus one radius-3 arc
    assert_eq!(path.segments.len(), 2);
    for seg in &path.segments {
        if let PathSegment::Arc { radius, .. } = seg {
            assert_eq!(*radius, 3.0);
        }
    }
    assert!((path.area() - 4.5 * PI).abs() < 0.05);
    for seg in &path.segments {
        assert!(seg.end().y >= -1e-9);
    }
}

#[test]
fn outer_ring_query_selects_ring() {
    let lines = [line(-10.0, 0.0, 10.0, 0.0)];
    let circles = [Circle::new(Point::new(0.0, 0.0), 10.0), Circle::new(Point::new(0.0, 0.0), 3.0)];
    let verts = build_vertices(&lines, &circles, &[]);
    let path = region_at(&lines, &circles, &verts, Point::new(0.0, -6.0)).expect("a region");
    let expect = (100.0 - 9.0) * PI / 2.0;
    assert!((path.area() - expect).abs() < 0.5, "area {}", path.area());
    assert_eq!(path.segments.len(), 4);
}

#[test]
fn boundary_inclusivity() {
    let lines = [line(0.0, 0.0, 1.0, 0.0), line(1.0, 0.0, 1.0, 1.0), line(1.0, 1.0, 0.0, 1.0), line(0.0, 1.0, 0.0, 0.0)];
    let verts = build_vertices(&lines, &[], &[]);
    let arr = build_arrangement(&lines, &[], &verts);
    let loops = trace_loops(&arr);
    let poly = path_to_polyline(&loop_to_path(&arr, &loops[0]));
    assert!(point_in_polyline(Point::new(0.5, 0.0), &poly, EPS_BOUNDARY));
    assert!(point_in_polyline(Point::new(1.0, 0.25), &poly, EPS_BOUNDARY));
    assert!(point_in_polyline(Point::new(0.0, 0.0), &poly, EPS_BOUNDARY));
    // and the selector agrees for an on-edge query
    assert!(region_at(&lines, &[], &verts, Point::new(0.5, 1.0)).is_some());
}

#[test]
fn lens_between_two_circles() {
    let circles = [Circle::new(Point::new(0.0, 0.0), 5.0), Circle::new(Point::new(8.0, 0.0), 5.0)];
    let verts = build_vertices(&[], &circles, &[]);
    assert_eq!(verts.len(), 2);
    let lens = region_at(&[], &circles, &verts, Point::new(4.0, 0.0)).expect("lens");
    assert_eq!(lens.segments.len(), 2);
    assert!(lens.segments.iter().all(|s| matches!(s, PathSegment::Arc { large_arc: false, .. })));
    // lens area: 2 r^2 acos(d/2r) - (d/2) sqrt(4r^2 - d^2)
    let expect = 2.0 * 25.0 * (0.8f64).acos() - 4.0 * (100.0f64 - 64.0).sqrt();
    assert!((lens.area() - expect).abs() < 0.05, "area {} vs {}", lens.area(), expect);
    // crescent on the left is the rest of circle A
    let left = region_at(&[], &circles, &verts, Point::new(-2.0, 0.0)).expect("crescent");
    assert!(left.segments.iter().any(|s| matches!(s, PathSegment::Arc { large_arc: true, .. })));
    assert!((left.area() - (25.0 * PI - expect)).abs() < 0.1);
}
