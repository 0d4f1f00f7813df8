use wasm_bindgen::prelude::*;

use crate::controls::ControlValue;

use super::perf_stats::PerfStats;
use super::WorldCore;

fn to_js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

/// Slider numbers, toggle tags, or null when a toggle group is cleared
fn control_value_from_js(value: &JsValue) -> Result<ControlValue, String> {
    if value.is_null() || value.is_undefined() {
        return Ok(ControlValue::Empty);
    }
    if let Some(n) = value.as_f64() {
        return Ok(ControlValue::Number(n));
    }
    if let Some(s) = value.as_string() {
        return Ok(ControlValue::Tag(s));
    }
    Err("control value must be a number, a string or null".to_string())
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a room for a canvas of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_x: f32, canvas_y: f32) -> Self {
        Self {
            core: WorldCore::new(canvas_x, canvas_y),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn canvas_x(&self) -> f32 { self.core.canvas_x() }

    #[wasm_bindgen(getter)]
    pub fn canvas_y(&self) -> f32 { self.core.canvas_y() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.is_paused() }

    pub fn resize(&mut self, canvas_x: f32, canvas_y: f32) {
        self.core.resize(canvas_x, canvas_y);
    }

    // === CONTROLS API ===

    /// `handleBodyControls(field, value)`
    pub fn set_control(&mut self, field: String, value: JsValue) -> Result<(), JsValue> {
        let value = control_value_from_js(&value).map_err(to_js_error)?;
        self.core.set_control(&field, value).map_err(to_js_error)
    }

    /// `handleStatic`; returns the new flag
    pub fn toggle_static(&mut self) -> bool {
        self.core.toggle_static()
    }

    /// `handleLoop`; returns the new flag
    pub fn toggle_loop(&mut self) -> bool {
        self.core.toggle_loop()
    }

    /// `handlePause`; returns true when paused
    pub fn toggle_pause(&mut self) -> bool {
        self.core.toggle_pause()
    }

    pub fn controls_json(&self) -> String {
        self.core.controls_json()
    }

    /// Panel description for `"labels"` or `"icons"`
    pub fn controls_manifest_json(&self, variant: String) -> Result<String, JsValue> {
        self.core.controls_manifest_json(&variant).map_err(to_js_error)
    }

    // === BODY API ===

    /// Body the next click would place, voice muted
    pub fn preview_body_json(&self, mouse_x: f32, mouse_y: f32) -> Result<String, JsValue> {
        let body = self.core.preview_body(mouse_x, mouse_y).map_err(to_js_error)?;
        serde_json::to_string(&body).map_err(|e| to_js_error(e.to_string()))
    }

    /// Place a body at the pointer and return its id
    pub fn place_body(&mut self, mouse_x: f32, mouse_y: f32) -> Result<u32, JsValue> {
        self.core.place_body(mouse_x, mouse_y).map_err(to_js_error)
    }

    /// `handleUndo`; id of the removed body
    pub fn undo(&mut self) -> Option<u32> {
        self.core.undo()
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(id)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Sound events since the last call, as a JSON array
    pub fn drain_sound_events_json(&mut self) -> String {
        self.core.drain_sound_events_json()
    }

    pub fn bodies_json(&self) -> String {
        self.core.bodies_json()
    }

    // === CONTENT / SETTINGS ===

    pub fn load_material_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_material_bundle_json(&json)
            .map_err(to_js_error)?;
        Ok(())
    }

    pub fn material_manifest_json(&self) -> String {
        self.core.material_manifest_json()
    }

    pub fn set_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core.set_settings_json(&json).map_err(to_js_error)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
