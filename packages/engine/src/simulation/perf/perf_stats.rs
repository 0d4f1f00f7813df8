use wasm_bindgen::prelude::*;

/// Snapshot of the last step
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) bodies_ms: f64,
    pub(super) body_count: u32,
    pub(super) bodies_integrated: u32,
    pub(super) contacts: u32,
    pub(super) sound_events: u32,
    pub(super) pending_sounds: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies_ms(&self) -> f64 { self.bodies_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn bodies_integrated(&self) -> u32 { self.bodies_integrated }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn sound_events(&self) -> u32 { self.sound_events }
    #[wasm_bindgen(getter)]
    pub fn pending_sounds(&self) -> u32 { self.pending_sounds }
}
