//! World - one simulation room
//!
//! WorldCore only orchestrates:
//! - Controls state lives in controls/
//! - Bodies are built by body_factory and stepped by body_system
//! - Materials come from the registry in domain/content
//!
//! Sound events collected during `step` are queued until JS drains them.

use std::sync::Arc;

use crate::body_system::{BodySystem, StepParams};
use crate::content::MaterialRegistry;
use crate::controls::BodyControls;
use crate::rigid_body::Body;
use crate::voice::SoundEvent;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use settings::WorldSettings;

use perf_timer::PerfTimer;

/// The simulation room
pub struct WorldCore {
    content: Arc<MaterialRegistry>,
    controls: BodyControls,
    bodies: BodySystem,
    settings: WorldSettings,

    canvas_x: f32,
    canvas_y: f32,

    // State
    paused: bool,
    frame: u64,
    pending_sounds: Vec<SoundEvent>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a new room for a canvas of the given size
    pub fn new(canvas_x: f32, canvas_y: f32) -> Self {
        init::create_world_core(canvas_x, canvas_y)
    }

    pub fn load_material_bundle_json(&mut self, json: &str) -> Result<(), String> {
        let registry = MaterialRegistry::from_bundle_json(json)?;
        self.content = Arc::new(registry);
        Ok(())
    }

    pub fn material_manifest_json(&self) -> String {
        self.content.manifest_json()
    }

    pub fn canvas_x(&self) -> f32 { self.canvas_x }

    pub fn canvas_y(&self) -> f32 { self.canvas_y }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.get(id)
    }

    /// Canvas changed size; only bodies placed from now on pick it up
    pub fn resize(&mut self, canvas_x: f32, canvas_y: f32) {
        self.canvas_x = canvas_x;
        self.canvas_y = canvas_y;
    }

    // === SETTINGS ===

    pub fn set_settings_json(&mut self, json: &str) -> Result<(), String> {
        settings::set_settings_json(self, json)
    }

    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === CONTROLS ===

    pub fn controls(&self) -> &BodyControls {
        &self.controls
    }

    /// `handleBodyControls(field, value)`
    pub fn set_control(&mut self, field: &str, value: crate::controls::ControlValue) -> Result<(), String> {
        commands::set_control(self, field, value)
    }

    pub fn toggle_static(&mut self) -> bool {
        self.controls.toggle_static()
    }

    pub fn toggle_loop(&mut self) -> bool {
        self.controls.toggle_loop()
    }

    pub fn controls_json(&self) -> String {
        serde_json::to_string(&self.controls).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn controls_manifest_json(&self, variant: &str) -> Result<String, String> {
        commands::controls_manifest_json(self, variant)
    }

    // === BODIES ===

    /// Build a body from the current controls without placing it
    pub fn preview_body(&self, mouse_x: f32, mouse_y: f32) -> Result<Body, String> {
        commands::preview_body(self, mouse_x, mouse_y)
    }

    /// Place a body at the pointer; returns its id
    pub fn place_body(&mut self, mouse_x: f32, mouse_y: f32) -> Result<u32, String> {
        commands::place_body(self, mouse_x, mouse_y)
    }

    /// Remove the last placed body
    pub fn undo(&mut self) -> Option<u32> {
        commands::undo(self)
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        self.bodies.remove(id)
    }

    /// Remove every body and queued sound
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool { self.paused }

    /// Step the simulation forward (no-op while paused)
    pub fn step(&mut self) {
        step::step(self);
    }

    pub fn pending_sound_count(&self) -> usize {
        self.pending_sounds.len()
    }

    pub fn drain_sound_events(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.pending_sounds)
    }

    pub fn drain_sound_events_json(&mut self) -> String {
        let events = self.drain_sound_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    /// Render snapshot of every body
    pub fn bodies_json(&self) -> String {
        render_extract::bodies_json(self)
    }

    fn step_params(&self) -> StepParams {
        self.settings.step_params()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
