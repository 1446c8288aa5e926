use serde::Serialize;

use crate::geometry::math::{line_projection, point_line_distance, polar_angle};
use crate::geometry::tolerance::{Tolerances, TAU};
use crate::model::{Circle, EdgeKind, Line, Point, Sweep, Vertex};

/// Which input curve a half-edge was cut from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CurveRef {
    Line(u32),
    Circle(u32),
}

#[derive(Clone, Debug, Serialize)]
pub struct HalfEdge {
    pub from: u32,
    pub to: u32,
    pub kind: EdgeKind,
    /// Direction of travel at `from`, in `(-π, π]`. Used only for ordering.
    pub tangent: f64,
    pub twin: u32,
    pub curve: CurveRef,
}

#[derive(Clone, Debug, Serialize)]
pub struct Node {
    pub vertex: Vertex,
    /// Outgoing half-edges, ascending by `(tangent, index)`.
    pub out: Vec<u32>,
}

/// Planar subdivision for one snapshot of lines, circles and vertices.
/// Rebuilt wholesale; never edited in place.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Arrangement {
    pub nodes: Vec<Node>,
    pub half_edges: Vec<HalfEdge>,
}

#[inline]
fn tangent_of_arc(at: Point, center: Point, sweep: Sweep) -> f64 {
    let rx = at.x - center.x;
    let ry = at.y - center.y;
    match sweep {
        Sweep::Ccw => rx.atan2(-ry),
        Sweep::Cw => (-rx).atan2(ry),
    }
}

impl Arrangement {
    pub fn vertex_pos(&self, id: u32) -> Point {
        self.nodes[id as usize].vertex.pos
    }

    pub fn half_edge(&self, id: u32) -> &HalfEdge {
        &self.half_edges[id as usize]
    }

    /// Direction of travel when the half-edge reaches its terminal vertex.
    pub fn arrival_angle(&self, id: u32) -> f64 {
        let he = self.half_edge(id);
        match he.kind {
            EdgeKind::Segment => he.tangent,
            EdgeKind::Arc { center, sweep, .. } => tangent_of_arc(self.vertex_pos(he.to), center, sweep),
        }
    }

    pub fn vertex_count(&self) -> usize { self.nodes.len() }
    pub fn half_edge_count(&self) -> usize { self.half_edges.len() }

    fn push_pair(&mut self, a: HalfEdge, mut b: HalfEdge) {
        let ia = self.half_edges.len() as u32;
        let ib = ia + 1;
        b.twin = ia;
        self.half_edges.push(HalfEdge { twin: ib, ..a });
        self.half_edges.push(b);
    }
}

pub fn build_arrangement(lines: &[Line], circles: &[Circle], vertices: &[Vertex]) -> Arrangement {
    build_arrangement_with(lines, circles, vertices, &Tolerances::default())
}

pub fn build_arrangement_with(lines: &[Line], circles: &[Circle], vertices: &[Vertex], tol: &Tolerances) -> Arrangement {
    // Node ids are positions in `vertices`; renumber so `vertex.id` matches.
    let mut arr = Arrangement {
        nodes: vertices
            .iter()
            .enumerate()
            .map(|(i, v)| Node { vertex: Vertex { id: i as u32, pos: v.pos }, out: Vec::new() })
            .collect(),
        half_edges: Vec::new(),
    };

    // 1) Lines: consecutive incident vertices by projection
    for (li, line) in lines.iter().enumerate() {
        let (dx, dy) = line.dir();
        if dx == 0.0 && dy == 0.0 {
            continue;
        }
        let mut inc: Vec<(f64, u32)> = arr
            .nodes
            .iter()
            .filter(|n| point_line_distance(n.vertex.pos, line) <= tol.on_line)
            .map(|n| (line_projection(n.vertex.pos, line), n.vertex.id))
            .collect();
        if inc.len() < 2 {
            continue;
        }
        inc.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        let fwd = dy.atan2(dx);
        let back = (-dy).atan2(-dx);
        for w in inc.windows(2) {
            let (u, v) = (w[0].1, w[1].1);
            let curve = CurveRef::Line(li as u32);
            arr.push_pair(
                HalfEdge { from: u, to: v, kind: EdgeKind::Segment, tangent: fwd, twin: 0, curve },
                HalfEdge { from: v, to: u, kind: EdgeKind::Segment, tangent: back, twin: 0, curve },
            );
        }
    }

    // 2) Circles: angularly consecutive incident vertices, wrapping around
    for (ci, circle) in circles.iter().enumerate() {
        if !(circle.r > 0.0) {
            continue;
        }
        let slack = tol.on_circle_rel * circle.r;
        let mut inc: Vec<(f64, u32)> = arr
            .nodes
            .iter()
            .filter(|n| (n.vertex.pos.dist(circle.center) - circle.r).abs() <= slack)
            .map(|n| (polar_angle(n.vertex.pos, circle.center), n.vertex.id))
            .collect();
        if inc.len() < 2 {
            continue;
        }
        inc.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        let n = inc.len();
        for i in 0..n {
            let (ta, a) = inc[i];
            let (tb, b) = inc[(i + 1) % n];
            let span = if i + 1 < n { tb - ta } else { inc[0].0 + TAU - ta };
            let large_arc = span > std::f64::consts::PI;
            let curve = CurveRef::Circle(ci as u32);
            let pa = arr.vertex_pos(a);
            let pb = arr.vertex_pos(b);
            arr.push_pair(
                HalfEdge {
                    from: a,
                    to: b,
                    kind: EdgeKind::Arc { center: circle.center, radius: circle.r, sweep: Sweep::Ccw, large_arc },
                    tangent: tangent_of_arc(pa, circle.center, Sweep::Ccw),
                    twin: 0,
                    curve,
                },
                HalfEdge {
                    from: b,
                    to: a,
                    kind: EdgeKind::Arc { center: circle.center, radius: circle.r, sweep: Sweep::Cw, large_arc },
                    tangent: tangent_of_arc(pb, circle.center, Sweep::Cw),
                    twin: 0,
                    curve,
                },
            );
        }
    }

    // 3) Angular order at each node
    for (i, he) in arr.half_edges.iter().enumerate() {
        arr.nodes[he.from as usize].out.push(i as u32);
    }
    let half_edges = &arr.half_edges;
    for node in &mut arr.nodes {
        node.out.sort_by(|&a, &b| {
            half_edges[a as usize]
                .tangent
                .total_cmp(&half_edges[b as usize].tangent)
                .then(a.cmp(&b))
        });
    }

    tracing::debug!(
        lines = lines.len(),
        circles = circles.len(),
        vertices = arr.nodes.len(),
        half_edges = arr.half_edges.len(),
        "arrangement built"
    );
    arr
}
