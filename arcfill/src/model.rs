use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
    #[inline]
    pub fn dist_sq(self, o: Point) -> f64 {
        let dx = self.x - o.x;
        let dy = self.y - o.y;
        dx * dx + dy * dy
    }
    #[inline]
    pub fn dist(self, o: Point) -> f64 {
        self.dist_sq(o).sqrt()
    }
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Infinite line through two distinct points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Self {
        Line { p1, p2 }
    }
    #[inline]
    pub fn dir(&self) -> (f64, f64) {
        (self.p2.x - self.p1.x, self.p2.y - self.p1.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub r: f64,
}

impl Circle {
    pub fn new(center: Point, r: f64) -> Self {
        Circle { center, r }
    }
}

/// Deduplicated point; `id` is its index in the vertex set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: u32,
    pub pos: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sweep {
    Cw = 0,
    Ccw = 1,
}

impl Sweep {
    #[inline]
    pub fn flag(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EdgeKind {
    Segment,
    Arc {
        center: Point,
        radius: f64,
        sweep: Sweep,
        large_arc: bool,
    },
}

/// One boundary piece of a region path, ending at `to`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PathSegment {
    Line {
        to: Point,
    },
    Arc {
        to: Point,
        center: Point,
        radius: f64,
        large_arc: bool,
        sweep: Sweep,
    },
}

impl PathSegment {
    #[inline]
    pub fn end(&self) -> Point {
        match *self {
            PathSegment::Line { to } | PathSegment::Arc { to, .. } => to,
        }
    }
}

/// Draw command sequence for external vector serializers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd")]
pub enum DrawCommand {
    MoveTo {
        to: Point,
    },
    LineTo {
        to: Point,
    },
    ArcTo {
        to: Point,
        radius: f64,
        large_arc: u8,
        sweep: u8,
        center: Point,
    },
}

/// Frozen boundary of a face: a start point plus line/arc segments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionPath {
    pub start: Point,
    pub segments: Vec<PathSegment>,
    pub fill: Option<Color>,
}

impl RegionPath {
    pub fn commands(&self) -> Vec<DrawCommand> {
        let mut out = Vec::with_capacity(self.segments.len() + 1);
        out.push(DrawCommand::MoveTo { to: self.start });
        for seg in &self.segments {
            out.push(match *seg {
                PathSegment::Line { to } => DrawCommand::LineTo { to },
                PathSegment::Arc {
                    to,
                    center,
                    radius,
                    large_arc,
                    sweep,
                } => DrawCommand::ArcTo {
                    to,
                    radius,
                    large_arc: large_arc as u8,
                    sweep: sweep.flag(),
                    center,
                },
            });
        }
        out
    }
}
