use std::collections::HashMap;

use crate::geometry::intersect::{intersect_circles, intersect_line_circle, intersect_lines};
use crate::geometry::tolerance::Tolerances;
use crate::model::{Circle, Line, Point, Vertex};

// Scaled coordinates past this no longer fit an i64 cell key with room for
// the neighbour offsets; such points go to a linear-scan list.
const GRID_KEY_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Deduplicating vertex collector. First-inserted point wins; later points
/// within the squared threshold map onto it.
#[derive(Clone, Debug)]
pub struct VertexSetBuilder {
    cell: f64,
    verts: Vec<Vertex>,
    grid: HashMap<(i64, i64), Vec<u32>>,
    far: Vec<u32>,
}

impl VertexSetBuilder {
    pub fn new(tol: &Tolerances) -> Self {
        let cell = tol.dedup_derived_sq.max(tol.dedup_retained_sq).sqrt().max(1e-9);
        VertexSetBuilder { cell, verts: Vec::new(), grid: HashMap::new(), far: Vec::new() }
    }

    fn key(&self, p: Point) -> Option<(i64, i64)> {
        let kx = (p.x / self.cell).floor();
        let ky = (p.y / self.cell).floor();
        if kx.abs() < GRID_KEY_LIMIT && ky.abs() < GRID_KEY_LIMIT {
            Some((kx as i64, ky as i64))
        } else {
            None
        }
    }

    pub fn find(&self, p: Point, tol_sq: f64) -> Option<u32> {
        // lowest id wins among matches so that first-inserted is kept
        let mut best: Option<u32> = None;
        let mut consider = |id: u32| {
            if self.verts[id as usize].pos.dist_sq(p) <= tol_sq && best.map_or(true, |b| id < b) {
                best = Some(id);
            }
        };
        match self.key(p) {
            Some((kx, ky)) => {
                for ix in (kx - 1)..=(kx + 1) {
                    for iy in (ky - 1)..=(ky + 1) {
                        if let Some(list) = self.grid.get(&(ix, iy)) {
                            list.iter().for_each(|&id| consider(id));
                        }
                    }
                }
                // grid points near the limit can still be close to far ones
                self.far.iter().for_each(|&id| consider(id));
            }
            None => (0..self.verts.len() as u32).for_each(&mut consider),
        }
        best
    }

    /// Inserts `p` unless an existing vertex lies within `tol_sq`; returns the id either way.
    pub fn insert(&mut self, p: Point, tol_sq: f64) -> u32 {
        if let Some(id) = self.find(p, tol_sq) {
            return id;
        }
        let id = self.verts.len() as u32;
        match self.key(p) {
            Some(key) => self.grid.entry(key).or_default().push(id),
            None => self.far.push(id),
        }
        self.verts.push(Vertex { id, pos: p });
        id
    }

    pub fn len(&self) -> usize { self.verts.len() }
    pub fn is_empty(&self) -> bool { self.verts.is_empty() }

    pub fn finish(self) -> Vec<Vertex> { self.verts }
}

pub fn build_vertices(lines: &[Line], circles: &[Circle], retained: &[Point]) -> Vec<Vertex> {
    build_vertices_with(lines, circles, retained, &Tolerances::default())
}

/// Retained points go in first, then line-line, line-circle and
/// circle-circle intersections in input order.
pub fn build_vertices_with(lines: &[Line], circles: &[Circle], retained: &[Point], tol: &Tolerances) -> Vec<Vertex> {
    let mut b = VertexSetBuilder::new(tol);
    for p in retained {
        if p.is_finite() {
            b.insert(*p, tol.dedup_retained_sq);
        }
    }
    let mut derived: Vec<Point> = Vec::new();
    for i in 0..lines.len() {
        for j in (i + 1)..lines.len() {
            if let Some(p) = intersect_lines(&lines[i], &lines[j], tol.det) {
                derived.push(p);
            }
        }
    }
    for l in lines {
        for c in circles {
            derived.extend(intersect_line_circle(l, c, tol.det).points());
        }
    }
    for i in 0..circles.len() {
        for j in (i + 1)..circles.len() {
            derived.extend(intersect_circles(&circles[i], &circles[j], tol.det).points());
        }
    }
    let derived_count = derived.len();
    for p in derived {
        if p.is_finite() {
            b.insert(p, tol.dedup_derived_sq);
        }
    }
    tracing::debug!(
        retained = retained.len(),
        derived = derived_count,
        vertices = b.len(),
        "vertex set built"
    );
    b.finish()
}
