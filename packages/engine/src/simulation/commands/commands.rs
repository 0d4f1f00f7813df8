use crate::body_factory::{add_body, BodyRequest};
use crate::controls::{ControlField, ControlValue, ControlsManifest, ControlsVariant};
use crate::rigid_body::Body;

use super::WorldCore;

/// Largest canvas side, bounds the loop size slider
fn max_canvas(world: &WorldCore) -> f64 {
    world.canvas_x.max(world.canvas_y) as f64
}

pub(super) fn set_control(world: &mut WorldCore, field: &str, value: ControlValue) -> Result<(), String> {
    let field = ControlField::from_name(field)?;
    let max = max_canvas(world);
    world.controls.apply(field, value, max)
}

pub(super) fn controls_manifest_json(world: &WorldCore, variant: &str) -> Result<String, String> {
    let variant = ControlsVariant::from_name(variant)?;
    Ok(ControlsManifest::build(variant, &world.controls, max_canvas(world)).to_json())
}

fn request_at(world: &WorldCore, mouse_x: f32, mouse_y: f32) -> BodyRequest {
    BodyRequest::from_controls(&world.controls, mouse_x, mouse_y, world.canvas_x, world.canvas_y)
}

pub(super) fn preview_body(world: &WorldCore, mouse_x: f32, mouse_y: f32) -> Result<Body, String> {
    add_body(&request_at(world, mouse_x, mouse_y), &world.content)
}

pub(super) fn place_body(world: &mut WorldCore, mouse_x: f32, mouse_y: f32) -> Result<u32, String> {
    let mut body = add_body(&request_at(world, mouse_x, mouse_y), &world.content)?;
    // Placement is committed: the voice may sound from the next contact on.
    body.voice.arm();
    Ok(world.bodies.add(body))
}

pub(super) fn undo(world: &mut WorldCore) -> Option<u32> {
    world.bodies.undo()
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    world.pending_sounds.clear();
    world.frame = 0;
}
