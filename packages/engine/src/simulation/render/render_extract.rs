use serde::Serialize;

use crate::materials::RenderStyle;
use crate::rigid_body::Body;
use crate::shapes::{Geometry, Sprite};

use super::WorldCore;

/// What the canvas renderer needs per body
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BodyView<'a> {
    id: u32,
    shape: &'static str,
    geometry: &'a Geometry,
    x: f32,
    y: f32,
    is_static: bool,
    sensor: bool,
    render: &'a RenderStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    sprite: Option<&'a Sprite>,
    muted: bool,
    cloud: bool,
    bubble: bool,
}

impl<'a> From<&'a Body> for BodyView<'a> {
    fn from(body: &'a Body) -> Self {
        Self {
            id: body.id,
            shape: body.shape.tag(),
            geometry: &body.geometry,
            x: body.pos.x,
            y: body.pos.y,
            is_static: body.is_static,
            sensor: body.sensor,
            render: &body.render,
            sprite: body.sprite.as_ref(),
            muted: body.voice.is_muted(),
            cloud: body.cloud,
            bubble: body.bubble,
        }
    }
}

pub(super) fn bodies_json(world: &WorldCore) -> String {
    let views: Vec<BodyView<'_>> = world.bodies.iter().map(BodyView::from).collect();
    serde_json::to_string(&views).unwrap_or_else(|_| "[]".to_string())
}
