pub mod model;
pub mod geometry {
    pub mod flatten;
    pub mod intersect;
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod arrangement;
    pub mod faces;
    pub mod paths;
    pub mod picking;
    pub mod regions;
    pub mod vertices;
    pub mod winding;
}
mod json;

use algorithms::arrangement::{build_arrangement_with, Arrangement};
use algorithms::faces::{trace_loops_with, Loop};
use algorithms::paths::loop_to_path;
use algorithms::regions::select_region;
use algorithms::vertices::build_vertices_with;
use geometry::limits;
use geometry::tolerance::Tolerances;
use model::{Circle, Color, DrawCommand, Line, Point, RegionPath, Vertex};
use serde::{Deserialize, Serialize};

pub use algorithms::regions::Selection;

/// Lines, circles and retained points plus the regions filled from them.
///
/// Geometry is held as a snapshot and every query rebuilds the arrangement
/// from scratch. Filled regions are frozen copies of their boundary and do
/// not follow later edits.
///
/// Removed ids are never handed out again. The caps count slots, not live
/// entries, so only `clear` gives capacity back.
pub struct Diagram {
    pub(crate) lines: Vec<Option<Line>>,          // id is index
    pub(crate) circles: Vec<Option<Circle>>,      // id is index
    pub(crate) points: Vec<Option<Point>>,        // id is index
    pub(crate) regions: Vec<Option<RegionPath>>,  // id is index, later = on top
    pub(crate) tol: Tolerances,
    pub(crate) geom_ver: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Pick {
    #[serde(rename = "point")]
    Point { id: u32, dist: f64 },
    #[serde(rename = "line")]
    Line { id: u32, dist: f64 },
    #[serde(rename = "circle")]
    Circle { id: u32, dist: f64 },
    #[serde(rename = "region")]
    Region { id: u32 },
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

fn live<T: Copy>(slots: &[Option<T>]) -> Vec<T> {
    slots.iter().filter_map(|s| *s).collect()
}

fn live_ids<T>(slots: &[Option<T>]) -> Vec<u32> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.as_ref().map(|_| i as u32))
        .collect()
}

fn live_count<T>(slots: &[Option<T>]) -> u32 {
    slots.iter().filter(|s| s.is_some()).count() as u32
}

impl Diagram {
    pub fn new() -> Self {
        Diagram {
            lines: Vec::new(),
            circles: Vec::new(),
            points: Vec::new(),
            regions: Vec::new(),
            tol: Tolerances::default(),
            geom_ver: 1,
        }
    }
    pub fn geom_version(&self) -> u64 {
        self.geom_ver
    }
    fn bump(&mut self) {
        self.geom_ver = self.geom_ver.wrapping_add(1);
    }

    pub fn tolerances(&self) -> Tolerances {
        self.tol
    }
    pub fn set_tolerances(&mut self, tol: Tolerances) {
        let tol = tol.sanitized();
        if tol == self.tol {
            return;
        }
        self.tol = tol;
        self.bump();
    }

    // Lines
    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Option<u32> {
        if ![x1, y1, x2, y2].iter().all(|v| limits::in_coord_bounds(*v)) {
            return None;
        }
        if self.lines.len() >= limits::MAX_LINES {
            return None;
        }
        let p1 = Point::new(x1, y1);
        let p2 = Point::new(x2, y2);
        if p1.dist_sq(p2) <= self.tol.dedup_retained_sq {
            return None;
        }
        let id = self.lines.len() as u32;
        self.lines.push(Some(Line::new(p1, p2)));
        self.bump();
        Some(id)
    }
    pub fn get_line(&self, id: u32) -> Option<Line> {
        self.lines.get(id as usize).copied().flatten()
    }
    pub fn remove_line(&mut self, id: u32) -> bool {
        match self.lines.get_mut(id as usize) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                self.bump();
                true
            }
            _ => false,
        }
    }
    pub fn line_ids(&self) -> Vec<u32> {
        live_ids(&self.lines)
    }
    pub fn line_count(&self) -> u32 {
        live_count(&self.lines)
    }

    // Circles
    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64) -> Option<u32> {
        if !limits::in_coord_bounds(cx) || !limits::in_coord_bounds(cy) || !limits::in_radius_bounds(r) {
            return None;
        }
        if self.circles.len() >= limits::MAX_CIRCLES {
            return None;
        }
        let id = self.circles.len() as u32;
        self.circles.push(Some(Circle::new(Point::new(cx, cy), r)));
        self.bump();
        Some(id)
    }
    pub fn get_circle(&self, id: u32) -> Option<Circle> {
        self.circles.get(id as usize).copied().flatten()
    }
    pub fn remove_circle(&mut self, id: u32) -> bool {
        match self.circles.get_mut(id as usize) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                self.bump();
                true
            }
            _ => false,
        }
    }
    pub fn circle_ids(&self) -> Vec<u32> {
        live_ids(&self.circles)
    }
    pub fn circle_count(&self) -> u32 {
        live_count(&self.circles)
    }

    // Retained points
    pub fn add_point(&mut self, x: f64, y: f64) -> Option<u32> {
        if !limits::in_coord_bounds(x) || !limits::in_coord_bounds(y) {
            return None;
        }
        if self.points.len() >= limits::MAX_POINTS {
            return None;
        }
        let id = self.points.len() as u32;
        self.points.push(Some(Point::new(x, y)));
        self.bump();
        Some(id)
    }
    pub fn move_point(&mut self, id: u32, x: f64, y: f64) -> bool {
        if !limits::in_coord_bounds(x) || !limits::in_coord_bounds(y) {
            return false;
        }
        match self.points.get_mut(id as usize) {
            Some(Some(p)) => {
                *p = Point::new(x, y);
                self.bump();
                true
            }
            _ => false,
        }
    }
    pub fn get_point(&self, id: u32) -> Option<Point> {
        self.points.get(id as usize).copied().flatten()
    }
    pub fn remove_point(&mut self, id: u32) -> bool {
        match self.points.get_mut(id as usize) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                self.bump();
                true
            }
            _ => false,
        }
    }
    pub fn point_ids(&self) -> Vec<u32> {
        live_ids(&self.points)
    }
    pub fn point_count(&self) -> u32 {
        live_count(&self.points)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.circles.clear();
        self.points.clear();
        self.regions.clear();
        self.bump();
    }

    // Snapshot + engine
    pub fn lines(&self) -> Vec<Line> {
        live(&self.lines)
    }
    pub fn circles(&self) -> Vec<Circle> {
        live(&self.circles)
    }
    pub fn retained_points(&self) -> Vec<Point> {
        live(&self.points)
    }
    pub fn vertices(&self) -> Vec<Vertex> {
        build_vertices_with(&self.lines(), &self.circles(), &self.retained_points(), &self.tol)
    }
    pub fn arrangement(&self) -> Arrangement {
        build_arrangement_with(&self.lines(), &self.circles(), &self.vertices(), &self.tol)
    }
    pub fn trace(&self) -> (Arrangement, Vec<Loop>) {
        let arr = self.arrangement();
        let loops = trace_loops_with(&arr, &self.tol);
        (arr, loops)
    }
    /// Boundary paths of every traced face, outer faces included.
    pub fn faces(&self) -> Vec<RegionPath> {
        let (arr, loops) = self.trace();
        loops.iter().map(|lp| loop_to_path(&arr, lp)).collect()
    }
    /// Innermost face containing the point, as a fresh unfilled path.
    pub fn region_at(&self, x: f64, y: f64) -> Option<RegionPath> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let (arr, loops) = self.trace();
        let sel = select_region(&arr, &loops, Point::new(x, y), &self.tol)?;
        Some(loop_to_path(&arr, &loops[sel.loop_index]))
    }

    // Filled regions
    pub fn fill_at(&mut self, x: f64, y: f64, color: Color) -> Option<u32> {
        if self.regions.len() >= limits::MAX_REGIONS {
            return None;
        }
        let mut path = self.region_at(x, y)?;
        path.fill = Some(color);
        let id = self.regions.len() as u32;
        tracing::debug!(id, segments = path.segments.len(), "region filled");
        self.regions.push(Some(path));
        Some(id)
    }
    /// False once the region slot cap is reached.
    pub fn can_fill(&self) -> bool {
        self.regions.len() < limits::MAX_REGIONS
    }
    pub fn region(&self, id: u32) -> Option<&RegionPath> {
        self.regions.get(id as usize).and_then(|r| r.as_ref())
    }
    pub fn region_ids(&self) -> Vec<u32> {
        live_ids(&self.regions)
    }
    pub fn region_count(&self) -> u32 {
        live_count(&self.regions)
    }
    pub fn set_region_color(&mut self, id: u32, color: Color) -> bool {
        match self.regions.get_mut(id as usize) {
            Some(Some(r)) => {
                r.fill = Some(color);
                true
            }
            _ => false,
        }
    }
    pub fn remove_region(&mut self, id: u32) -> bool {
        match self.regions.get_mut(id as usize) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                true
            }
            _ => false,
        }
    }
    pub fn region_commands(&self, id: u32) -> Option<Vec<DrawCommand>> {
        self.region(id).map(|r| r.commands())
    }
    pub fn regions_json(&self) -> Vec<serde_json::Value> {
        json::regions_json_impl(self)
    }

    pub fn pick(&self, x: f64, y: f64, tol: f64) -> Option<Pick> {
        if !x.is_finite() || !y.is_finite() || !(tol >= 0.0) {
            return None;
        }
        algorithms::picking::pick_impl(self, x, y, tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };

    #[test]
    fn rejects_invalid_input() {
        let mut d = Diagram::new();
        assert!(d.add_line(0.0, 0.0, 0.0, 0.0).is_none());
        assert!(d.add_line(f64::NAN, 0.0, 1.0, 0.0).is_none());
        assert!(d.add_line(0.0, 0.0, 1e9, 0.0).is_none());
        assert!(d.add_circle(0.0, 0.0, 0.0).is_none());
        assert!(d.add_circle(0.0, 0.0, -2.0).is_none());
        assert!(d.add_point(f64::INFINITY, 0.0).is_none());
        assert_eq!(d.line_count() + d.circle_count() + d.point_count(), 0);
    }

    #[test]
    fn ids_are_stable_across_removal() {
        let mut d = Diagram::new();
        let a = d.add_line(0.0, 0.0, 1.0, 0.0).unwrap();
        let b = d.add_line(0.0, 1.0, 1.0, 1.0).unwrap();
        assert!(d.remove_line(a));
        assert!(!d.remove_line(a));
        assert_eq!(d.get_line(b).unwrap().p1, Point::new(0.0, 1.0));
        let c = d.add_line(0.0, 2.0, 1.0, 2.0).unwrap();
        assert_ne!(c, a);
        assert_eq!(d.line_count(), 2);
        assert_eq!(d.line_ids(), vec![b, c]);
    }

    #[test]
    fn filled_region_is_frozen() {
        let mut d = Diagram::new();
        let l = d.add_line(-10.0, 0.0, 10.0, 0.0).unwrap();
        let c = d.add_circle(0.0, 0.0, 3.0).unwrap();
        let id = d.fill_at(0.0, 1.0, RED).unwrap();
        let before = d.region(id).unwrap().clone();
        assert!(d.remove_line(l));
        assert!(d.remove_circle(c));
        assert_eq!(d.region(id), Some(&before));
        assert!(d.region_at(0.0, 1.0).is_none());
    }

    #[test]
    fn region_commands_start_with_move() {
        let mut d = Diagram::new();
        d.add_line(-10.0, 0.0, 10.0, 0.0).unwrap();
        d.add_circle(0.0, 0.0, 3.0).unwrap();
        let id = d.fill_at(0.0, -1.0, RED).unwrap();
        let cmds = d.region_commands(id).unwrap();
        assert!(matches!(cmds[0], DrawCommand::MoveTo { .. }));
        assert_eq!(cmds.len(), 3);
        assert!(cmds.iter().any(|c| matches!(c, DrawCommand::ArcTo { large_arc: 0, radius, .. } if (*radius - 3.0).abs() < 1e-12)));
        assert!(d.set_region_color(id, Color { r: 0, g: 255, b: 0, a: 128 }));
        assert_eq!(d.region(id).unwrap().fill.unwrap().g, 255);
        assert!(d.remove_region(id));
        assert!(d.region_commands(id).is_none());
        assert_eq!(d.region_count(), 0);
    }

    #[test]
    fn point_on_circle_splits_it() {
        let mut d = Diagram::new();
        d.add_circle(0.0, 0.0, 2.0).unwrap();
        assert!(d.region_at(0.0, 0.0).is_none());
        d.add_point(2.0, 0.0).unwrap();
        let p = d.add_point(-2.0, 0.0).unwrap();
        let r = d.region_at(0.0, 0.0).expect("disk");
        assert!((r.area() - 4.0 * std::f64::consts::PI).abs() < 0.01);
        assert!(d.move_point(p, 0.0, 2.0));
        assert!(d.region_at(0.0, 0.0).is_some());
    }

    #[test]
    fn set_tolerances_sanitizes_and_bumps() {
        let mut d = Diagram::new();
        let v0 = d.geom_version();
        d.set_tolerances(Tolerances { on_line: -1.0, ..Tolerances::default() });
        assert_eq!(d.tolerances(), Tolerances::default());
        assert_eq!(d.geom_version(), v0);
        d.set_tolerances(Tolerances { arc_step: 0.1, ..Tolerances::default() });
        assert_eq!(d.tolerances().arc_step, 0.1);
        assert!(d.geom_version() > v0);
    }
}
