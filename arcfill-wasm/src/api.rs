use crate::error;
use crate::interop::{arr_f64, arr_u32, new_obj, set_kv, to_js};
use crate::Diagram;
use arcfill::geometry::limits::{self, COORD_MAX, COORD_MIN, RADIUS_MAX};
use arcfill::geometry::tolerance::MIN_ARC_STEP;
use arcfill::model::Color;
use arcfill::Pick;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn check_coord(name: &str, v: f64) -> Result<(), JsValue> {
    if !v.is_finite() {
        return Err(error::non_finite(name));
    }
    if !limits::in_coord_bounds(v) {
        return Err(error::out_of_range(name, COORD_MIN, COORD_MAX, v));
    }
    Ok(())
}

fn check_coords(params: &[(&str, f64)]) -> Result<(), JsValue> {
    for (name, v) in params {
        check_coord(name, *v)?;
    }
    Ok(())
}

fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color { r, g, b, a }
}

#[wasm_bindgen]
impl Diagram {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Diagram {
        crate::Diagram::rs_new()
    }
    pub fn geom_version(&self) -> u64 {
        self.rs_geom_version()
    }
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    // Lines
    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Option<u32> {
        self.inner.add_line(x1, y1, x2, y2)
    }
    pub fn add_line_res(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> JsValue {
        if let Err(e) = check_coords(&[("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)]) {
            return e;
        }
        let (dx, dy) = (x2 - x1, y2 - y1);
        if dx * dx + dy * dy <= self.inner.tolerances().dedup_retained_sq {
            return error::err("invalid_line", "line endpoints coincide", None);
        }
        match self.inner.add_line(x1, y1, x2, y2) {
            Some(id) => error::ok(JsValue::from_f64(id as f64)),
            None => error::limit_exceeded("line", limits::MAX_LINES),
        }
    }
    pub fn remove_line(&mut self, id: u32) -> bool {
        self.inner.remove_line(id)
    }
    pub fn remove_line_res(&mut self, id: u32) -> JsValue {
        if self.inner.get_line(id).is_none() {
            return error::invalid_id("line", id);
        }
        error::ok(JsValue::from_bool(self.inner.remove_line(id)))
    }
    pub fn line_count(&self) -> u32 {
        self.inner.line_count()
    }

    // Circles
    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64) -> Option<u32> {
        self.inner.add_circle(cx, cy, r)
    }
    pub fn add_circle_res(&mut self, cx: f64, cy: f64, r: f64) -> JsValue {
        if let Err(e) = check_coords(&[("cx", cx), ("cy", cy)]) {
            return e;
        }
        if !r.is_finite() {
            return error::non_finite("r");
        }
        if r <= 0.0 {
            return error::err("invalid_circle", "radius must be positive", None);
        }
        if r > RADIUS_MAX {
            return error::out_of_range("r", 0.0, RADIUS_MAX, r);
        }
        match self.inner.add_circle(cx, cy, r) {
            Some(id) => error::ok(JsValue::from_f64(id as f64)),
            None => error::limit_exceeded("circle", limits::MAX_CIRCLES),
        }
    }
    pub fn remove_circle(&mut self, id: u32) -> bool {
        self.inner.remove_circle(id)
    }
    pub fn remove_circle_res(&mut self, id: u32) -> JsValue {
        if self.inner.get_circle(id).is_none() {
            return error::invalid_id("circle", id);
        }
        error::ok(JsValue::from_bool(self.inner.remove_circle(id)))
    }
    pub fn circle_count(&self) -> u32 {
        self.inner.circle_count()
    }

    // Retained points
    pub fn add_point(&mut self, x: f64, y: f64) -> Option<u32> {
        self.inner.add_point(x, y)
    }
    pub fn add_point_res(&mut self, x: f64, y: f64) -> JsValue {
        if let Err(e) = check_coords(&[("x", x), ("y", y)]) {
            return e;
        }
        match self.inner.add_point(x, y) {
            Some(id) => error::ok(JsValue::from_f64(id as f64)),
            None => error::limit_exceeded("point", limits::MAX_POINTS),
        }
    }
    pub fn move_point(&mut self, id: u32, x: f64, y: f64) -> bool {
        self.inner.move_point(id, x, y)
    }
    pub fn move_point_res(&mut self, id: u32, x: f64, y: f64) -> JsValue {
        if let Err(e) = check_coords(&[("x", x), ("y", y)]) {
            return e;
        }
        if self.inner.get_point(id).is_none() {
            return error::invalid_id("point", id);
        }
        error::ok(JsValue::from_bool(self.inner.move_point(id, x, y)))
    }
    pub fn remove_point(&mut self, id: u32) -> bool {
        self.inner.remove_point(id)
    }
    pub fn remove_point_res(&mut self, id: u32) -> JsValue {
        if self.inner.get_point(id).is_none() {
            return error::invalid_id("point", id);
        }
        error::ok(JsValue::from_bool(self.inner.remove_point(id)))
    }
    pub fn point_count(&self) -> u32 {
        self.inner.point_count()
    }

    // Typed array snapshots
    pub fn get_line_data(&self) -> JsValue {
        let mut ids = Vec::new();
        let mut coords = Vec::new();
        for id in self.inner.line_ids() {
            if let Some(l) = self.inner.get_line(id) {
                ids.push(id);
                coords.extend_from_slice(&[l.p1.x, l.p1.y, l.p2.x, l.p2.y]);
            }
        }
        let obj = new_obj();
        set_kv(&obj, "ids", &arr_u32(&ids).into());
        set_kv(&obj, "coords", &arr_f64(&coords).into());
        obj.into()
    }
    pub fn get_circle_data(&self) -> JsValue {
        let mut ids = Vec::new();
        let mut data = Vec::new();
        for id in self.inner.circle_ids() {
            if let Some(c) = self.inner.get_circle(id) {
                ids.push(id);
                data.extend_from_slice(&[c.center.x, c.center.y, c.r]);
            }
        }
        let obj = new_obj();
        set_kv(&obj, "ids", &arr_u32(&ids).into());
        set_kv(&obj, "data", &arr_f64(&data).into());
        obj.into()
    }
    /// Deduplicated vertex positions, `[x0, y0, x1, y1, ..]` in id order.
    pub fn get_vertex_data(&self) -> JsValue {
        let pos: Vec<f64> = self.inner.vertices().iter().flat_map(|v| [v.pos.x, v.pos.y]).collect();
        arr_f64(&pos).into()
    }

    // Regions
    pub fn region_at(&self, x: f64, y: f64) -> JsValue {
        match self.inner.region_at(x, y) {
            Some(path) => to_js(&path),
            None => JsValue::NULL,
        }
    }
    pub fn fill_at(&mut self, x: f64, y: f64, r: u8, g: u8, b: u8, a: u8) -> Option<u32> {
        self.inner.fill_at(x, y, rgba(r, g, b, a))
    }
    pub fn fill_at_res(&mut self, x: f64, y: f64, r: u8, g: u8, b: u8, a: u8) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        if !self.inner.can_fill() {
            return error::limit_exceeded("region", limits::MAX_REGIONS);
        }
        match self.inner.fill_at(x, y, rgba(r, g, b, a)) {
            Some(id) => error::ok(JsValue::from_f64(id as f64)),
            None => error::no_region(x, y),
        }
    }
    pub fn region_ids(&self) -> JsValue {
        arr_u32(&self.inner.region_ids()).into()
    }
    pub fn region_count(&self) -> u32 {
        self.inner.region_count()
    }
    pub fn region_commands(&self, id: u32) -> JsValue {
        match self.inner.region_commands(id) {
            Some(cmds) => to_js(&cmds),
            None => JsValue::NULL,
        }
    }
    pub fn region_commands_res(&self, id: u32) -> JsValue {
        match self.inner.region_commands(id) {
            Some(cmds) => error::ok(to_js(&cmds)),
            None => error::invalid_id("region", id),
        }
    }
    pub fn set_region_color(&mut self, id: u32, r: u8, g: u8, b: u8, a: u8) -> bool {
        self.inner.set_region_color(id, rgba(r, g, b, a))
    }
    pub fn set_region_color_res(&mut self, id: u32, r: u8, g: u8, b: u8, a: u8) -> JsValue {
        if self.inner.region(id).is_none() {
            return error::invalid_id("region", id);
        }
        error::ok(JsValue::from_bool(self.set_region_color(id, r, g, b, a)))
    }
    pub fn remove_region(&mut self, id: u32) -> bool {
        self.inner.remove_region(id)
    }
    pub fn remove_region_res(&mut self, id: u32) -> JsValue {
        if self.inner.region(id).is_none() {
            return error::invalid_id("region", id);
        }
        error::ok(JsValue::from_bool(self.inner.remove_region(id)))
    }
    pub fn regions_json(&self) -> JsValue {
        to_js(&self.inner.regions_json())
    }

    // Picking
    pub fn pick(&self, x: f64, y: f64, tol: f64) -> JsValue {
        let Some(p) = self.inner.pick(x, y, tol) else {
            return JsValue::NULL;
        };
        // Flatten to { kind: 'point'|'line'|'circle'|'region', id, dist? }
        let obj = new_obj();
        let (kind, id, dist) = match p {
            Pick::Point { id, dist } => ("point", id, Some(dist)),
            Pick::Line { id, dist } => ("line", id, Some(dist)),
            Pick::Circle { id, dist } => ("circle", id, Some(dist)),
            Pick::Region { id } => ("region", id, None),
        };
        set_kv(&obj, "kind", &JsValue::from_str(kind));
        set_kv(&obj, "id", &JsValue::from_f64(id as f64));
        if let Some(dist) = dist {
            set_kv(&obj, "dist", &JsValue::from_f64(dist));
        }
        obj.into()
    }
    pub fn pick_res(&self, x: f64, y: f64, tol: f64) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        if !tol.is_finite() {
            return error::non_finite("tol");
        }
        if tol < 0.0 {
            return error::out_of_range("tol", 0.0, f64::INFINITY, tol);
        }
        error::ok(self.pick(x, y, tol))
    }

    // Tolerances
    pub fn set_arc_step_res(&mut self, step: f64) -> JsValue {
        if !step.is_finite() {
            return error::non_finite("step");
        }
        if !(step >= MIN_ARC_STEP && step <= std::f64::consts::PI) {
            return error::out_of_range("step", MIN_ARC_STEP, std::f64::consts::PI, step);
        }
        let mut tol = self.inner.tolerances();
        tol.arc_step = step;
        self.inner.set_tolerances(tol);
        error::ok(JsValue::from_bool(true))
    }

    /// Counts for the current snapshot, also echoed to the browser console.
    pub fn stats(&self) -> JsValue {
        let (arr, loops) = self.inner.trace();
        let obj = new_obj();
        set_kv(&obj, "lines", &JsValue::from_f64(self.inner.line_count() as f64));
        set_kv(&obj, "circles", &JsValue::from_f64(self.inner.circle_count() as f64));
        set_kv(&obj, "points", &JsValue::from_f64(self.inner.point_count() as f64));
        set_kv(&obj, "vertices", &JsValue::from_f64(arr.vertex_count() as f64));
        set_kv(&obj, "half_edges", &JsValue::from_f64(arr.half_edge_count() as f64));
        set_kv(&obj, "faces", &JsValue::from_f64(loops.len() as f64));
        set_kv(&obj, "regions", &JsValue::from_f64(self.inner.region_count() as f64));
        web_sys::console::log_2(&JsValue::from_str("arcfill stats"), &obj);
        obj.into()
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}
