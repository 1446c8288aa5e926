use crate::algorithms::paths::path_to_polyline_with;
use crate::algorithms::winding::{polyline_area, polyline_centroid};
use crate::model::{Color, PathSegment, Point};
use crate::Diagram;
use serde::Serialize;
use serde_json::Value;

pub fn regions_json_impl(d: &Diagram) -> Vec<Value> {
    #[derive(Serialize)]
    struct RegionSer<'a> {
        id: u32,
        start: Point,
        segments: &'a [PathSegment],
        fill: Option<Color>,
        area: f64,
        centroid: Option<Point>,
    }
    let mut out = Vec::new();
    for (id, r) in d.regions.iter().enumerate() {
        let Some(r) = r else { continue };
        let poly = path_to_polyline_with(r, &d.tol);
        let ser = RegionSer {
            id: id as u32,
            start: r.start,
            segments: &r.segments,
            fill: r.fill,
            area: polyline_area(&poly).abs(),
            centroid: polyline_centroid(&poly),
        };
        match serde_json::to_value(&ser) {
            Ok(v) => out.push(v),
            Err(e) => tracing::warn!(id, error = %e, "region not serializable"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::model::Color;
    use crate::Diagram;

    #[test]
    fn regions_json_shape() {
        let mut d = Diagram::new();
        d.add_line(-10.0, 0.0, 10.0, 0.0).unwrap();
        d.add_circle(0.0, 0.0, 2.0).unwrap();
        let id = d.fill_at(0.5, 0.5, Color { r: 1, g: 2, b: 3, a: 255 }).unwrap();
        let regs = d.regions_json();
        assert_eq!(regs.len(), 1);
        let r = &regs[0];
        assert_eq!(r["id"].as_u64(), Some(id as u64));
        assert_eq!(r["fill"]["g"].as_u64(), Some(2));
        let segs = r["segments"].as_array().unwrap();
        assert_eq!(segs.len(), 2);
        assert!(segs.iter().any(|s| s["kind"] == "arc"));
        assert!(segs.iter().any(|s| s["kind"] == "line"));
        let area = r["area"].as_f64().unwrap();
        assert!((area - 2.0 * std::f64::consts::PI).abs() < 0.01);
    }
}
