//! Browser-side checks for the JS boundary (`wasm-pack test --headless`).
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use physisynth_engine::World;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn set_control_accepts_js_numbers_strings_and_null() {
    let mut world = World::new(800.0, 600.0);
    world.set_control("shape".into(), JsValue::from_str("TRIANGLE")).unwrap();
    world.set_control("size".into(), JsValue::from_f64(-4.0)).unwrap();
    world.set_control("material".into(), JsValue::NULL).unwrap();

    let controls: serde_json::Value = serde_json::from_str(&world.controls_json()).unwrap();
    assert_eq!(controls["shape"], "TRIANGLE");
    assert_eq!(controls["size"], -4.0);
    assert_eq!(controls["material"], "WOOD");
}

#[wasm_bindgen_test]
fn bad_input_surfaces_as_js_error() {
    let mut world = World::new(800.0, 600.0);
    assert!(world.set_control("shape".into(), JsValue::from_str("STAR")).is_err());
    assert!(world.set_control("shape".into(), JsValue::TRUE).is_err());
    assert!(world.set_settings("{".into()).is_err());
}

#[wasm_bindgen_test]
fn preview_is_json_with_muted_voice() {
    let world = World::new(800.0, 600.0);
    let preview: serde_json::Value =
        serde_json::from_str(&world.preview_body_json(10.0, 10.0).unwrap()).unwrap();
    assert_eq!(preview["voice"]["muted"], true);
    assert_eq!(preview["voice"]["spec"]["kind"], "MembraneSynth");
}
