use std::sync::Arc;

use crate::body_system::BodySystem;
use crate::content::MaterialRegistry;
use crate::controls::BodyControls;

use super::perf_stats::PerfStats;
use super::settings::WorldSettings;
use super::WorldCore;

pub(super) fn create_world_core(canvas_x: f32, canvas_y: f32) -> WorldCore {
    WorldCore {
        content: Arc::new(MaterialRegistry::from_generated()),
        controls: BodyControls::default(),
        bodies: BodySystem::new(),
        settings: WorldSettings::default(),
        canvas_x,
        canvas_y,
        paused: false,
        frame: 0,
        pending_sounds: Vec::with_capacity(64),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
