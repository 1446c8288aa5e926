#![cfg(target_arch = "wasm32")]

use arcfill::geometry::tolerance::MIN_ARC_STEP;
use arcfill_wasm::Diagram;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_ok(v: &JsValue) -> bool {
    Reflect::get(v, &JsValue::from_str("ok")).ok().and_then(|x| x.as_bool()).unwrap_or(false)
}

fn is_err(v: &JsValue, code: &str) -> bool {
    if is_ok(v) {
        return false;
    }
    if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
        if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
            return c.as_string().map_or(false, |s| s == code);
        }
    }
    false
}

#[wasm_bindgen_test]
fn invalid_input_returns_typed_errors() {
    let mut d = Diagram::new();
    let ver = d.geom_version();
    assert!(is_err(&d.add_line_res(f64::NAN, 0.0, 1.0, 0.0), "non_finite"));
    assert!(is_err(&d.add_line_res(0.0, 0.0, 1e12, 0.0), "out_of_range"));
    assert!(is_err(&d.add_line_res(1.0, 1.0, 1.0, 1.0), "invalid_line"));
    assert!(is_err(&d.add_circle_res(0.0, 0.0, 0.0), "invalid_circle"));
    assert!(is_err(&d.add_circle_res(0.0, 0.0, f64::INFINITY), "non_finite"));
    assert!(is_err(&d.remove_line_res(3), "invalid_id"));
    assert!(is_err(&d.move_point_res(0, 1.0, 1.0), "invalid_id"));
    assert!(is_err(&d.region_commands_res(0), "invalid_id"));
    assert!(is_err(&d.pick_res(0.0, 0.0, -1.0), "out_of_range"));
    assert!(is_err(&d.set_arc_step_res(0.0), "out_of_range"));
    assert!(is_err(&d.set_arc_step_res(1e-9), "out_of_range"));
    assert_eq!(d.geom_version(), ver, "state mutated on error");
}

#[wasm_bindgen_test]
fn arc_step_floor_is_accepted() {
    let mut d = Diagram::new();
    assert!(is_ok(&d.set_arc_step_res(MIN_ARC_STEP)));
    assert!(is_ok(&d.add_line_res(-10.0, 0.0, 10.0, 0.0)));
    assert!(is_ok(&d.add_circle_res(0.0, 0.0, 3.0)));
    assert!(is_ok(&d.fill_at_res(0.0, 1.0, 0, 0, 0, 255)));
}

#[wasm_bindgen_test]
fn fill_outside_every_face_is_no_region() {
    let mut d = Diagram::new();
    assert!(is_ok(&d.add_line_res(-10.0, 0.0, 10.0, 0.0)));
    assert!(is_ok(&d.add_circle_res(0.0, 0.0, 3.0)));
    assert!(is_err(&d.fill_at_res(20.0, 20.0, 0, 0, 0, 255), "no_region"));
    assert!(is_ok(&d.fill_at_res(0.0, -1.0, 0, 0, 0, 255)));
    assert_eq!(d.region_count(), 1);
}

#[wasm_bindgen_test]
fn fuzz_res_methods_never_abort() {
    let mut d = Diagram::new();
    let mut seed: u64 = 0x1234_5678_ABCD_EF01;
    let mut rnd = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        (seed >> 16) as u32
    };
    for _ in 0..300u32 {
        let op = rnd() % 6;
        let a = f64::from_bits(((rnd() as u64) << 32) | rnd() as u64);
        let b = (rnd() % 200) as f64 - 100.0;
        let res = match op {
            0 => d.add_line_res(a, b, b, a),
            1 => d.add_circle_res(b, b, a),
            2 => d.add_point_res(a, b),
            3 => d.fill_at_res(b, a, 1, 2, 3, 4),
            4 => d.pick_res(a, b, 1.0),
            _ => d.remove_region_res(rnd() % 4),
        };
        assert!(Reflect::has(&res, &JsValue::from_str("ok")).unwrap_or(false));
    }
}
