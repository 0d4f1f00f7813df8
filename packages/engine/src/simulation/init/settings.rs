use serde::Deserialize;

use crate::body_system::StepParams;
use crate::rigid_body::Vec2;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Room-wide physics tuning. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldSettings {
    pub gravity_x: f32,
    pub gravity_y: f32,
    pub gravity_scale: f32,
    pub max_speed: f32,
    pub min_sound_velocity: f32,
    /// Upper bound of pending sound events kept between drains
    pub max_pending_sounds: usize,
}

impl Default for WorldSettings {
    fn default() -> Self {
        let params = StepParams::default();
        Self {
            gravity_x: params.gravity.x,
            gravity_y: params.gravity.y,
            gravity_scale: params.gravity_scale,
            max_speed: params.max_speed,
            min_sound_velocity: params.min_sound_velocity,
            max_pending_sounds: 256,
        }
    }
}

impl WorldSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: WorldSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        if !(settings.max_speed > 0.0) {
            return Err(format!("maxSpeed must be positive, got {}", settings.max_speed));
        }
        if settings.min_sound_velocity < 0.0 {
            return Err(format!(
                "minSoundVelocity must not be negative, got {}",
                settings.min_sound_velocity
            ));
        }
        Ok(settings)
    }

    pub(crate) fn step_params(&self) -> StepParams {
        StepParams {
            gravity: Vec2::new(self.gravity_x, self.gravity_y),
            gravity_scale: self.gravity_scale,
            max_speed: self.max_speed,
            min_sound_velocity: self.min_sound_velocity,
        }
    }
}

pub(super) fn set_settings_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    world.settings = WorldSettings::from_json(json)?;
    Ok(())
}

pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) {
    world.settings.gravity_x = x;
    world.settings.gravity_y = y;
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
