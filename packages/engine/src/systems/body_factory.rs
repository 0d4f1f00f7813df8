//! Body factory: controls + pointer position -> one configured body.

use serde::Deserialize;

use crate::content::MaterialRegistry;
use crate::controls::BodyControls;
use crate::materials::MaterialKind;
use crate::rigid_body::{Body, Vec2, WrapRegion};
use crate::shapes::{body_size, ShapeKind};
use crate::voice::Voice;

/// Pitch offset so the smallest slider value maps to 0
const PITCH_OFFSET: f32 = 27.0;

/// Everything the factory needs for one placement
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRequest {
    pub shape: String,
    pub is_static: bool,
    /// Slider value in [-27, 0]. Above 5/3 the body size goes negative and
    /// the body never collides.
    pub size: f32,
    pub material: String,
    pub does_loop: bool,
    pub loop_size: f32,
    pub speed: f32,
    pub mouse_x: f32,
    pub mouse_y: f32,
    pub canvas_x: f32,
    pub canvas_y: f32,
}

impl BodyRequest {
    pub fn from_controls(
        controls: &BodyControls,
        mouse_x: f32,
        mouse_y: f32,
        canvas_x: f32,
        canvas_y: f32,
    ) -> Self {
        Self {
            shape: controls.shape.clone(),
            is_static: controls.is_static,
            size: controls.size as f32,
            material: controls.material.clone(),
            does_loop: controls.does_loop,
            loop_size: controls.loop_size as f32,
            speed: controls.speed as f32,
            mouse_x,
            mouse_y,
            canvas_x,
            canvas_y,
        }
    }
}

/// Build one body. The voice comes back muted; the caller arms it once the
/// placement is committed.
pub fn add_body(request: &BodyRequest, registry: &MaterialRegistry) -> Result<Body, String> {
    let shape = ShapeKind::from_tag(&request.shape)?;
    let s = body_size(request.size);
    let geometry = shape.geometry(s);

    let material = MaterialKind::from_tag(&request.material);
    let props = registry.resolve(&request.material);

    let cloud = shape == ShapeKind::Cloud;

    let mut body = Body {
        id: 0,
        shape,
        material,
        geometry,
        pos: Vec2::new(request.mouse_x, request.mouse_y),
        velocity: Vec2::zero(),
        restitution: props.restitution,
        density: props.density,
        mass: props.density * geometry.area(),
        air_friction: props.air_friction.evaluate(request.size, request.speed),
        is_static: false,
        sensor: cloud,
        wrap: wrap_region(request),
        render: props.render.clone(),
        sprite: shape.sprite(s),
        voice: Voice::new(props.voice),
        pitch: request.size + PITCH_OFFSET,
        cloud,
        is_sounding: false,
        bubble: props.bubble,
    };

    if request.is_static || cloud {
        body.set_static(true);
    }

    Ok(body)
}

fn wrap_region(request: &BodyRequest) -> WrapRegion {
    if request.does_loop {
        WrapRegion::new(
            Vec2::new(request.mouse_x, request.mouse_y),
            Vec2::new(
                request.mouse_x + request.loop_size,
                request.mouse_y + request.loop_size,
            ),
        )
    } else {
        WrapRegion::canvas(request.canvas_x, request.canvas_y)
    }
}

#[cfg(test)]
#[path = "tests/body_factory_tests.rs"]
mod tests;
