use serde::Serialize;

use crate::materials::{MaterialKind, RenderStyle};
use crate::shapes::{Geometry, ShapeKind, Sprite};
use crate::voice::Voice;

use super::vec2::Vec2;

/// Periodic boundary: a body leaving it re-enters on the opposite side
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WrapRegion {
    pub min: Vec2,
    pub max: Vec2,
}

impl WrapRegion {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Full canvas, anchored at the origin
    pub fn canvas(canvas_x: f32, canvas_y: f32) -> Self {
        Self {
            min: Vec2::zero(),
            max: Vec2::new(canvas_x, canvas_y),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Axis-aligned bounds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// Assigned by the body system, 0 until inserted
    pub id: u32,
    pub shape: ShapeKind,
    /// `None` when the fallback profile was used
    pub material: Option<MaterialKind>,
    pub geometry: Geometry,

    // === Physics State ===
    pub pos: Vec2,
    pub velocity: Vec2,
    pub restitution: f32,
    pub density: f32,
    /// density * area
    pub mass: f32,
    pub air_friction: f32,
    pub is_static: bool,
    /// Detects overlaps without collision response
    pub sensor: bool,
    pub wrap: WrapRegion,

    // === Rendering ===
    pub render: RenderStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite: Option<Sprite>,

    // === Sound ===
    pub voice: Voice,
    pub pitch: f32,
    pub cloud: bool,
    /// Cloud is currently sounding for an overlapping body
    pub is_sounding: bool,
    pub bubble: bool,
}

impl Body {
    pub fn half_extents(&self) -> (f32, f32) {
        self.geometry.half_extents()
    }

    pub fn aabb(&self) -> Aabb {
        self.aabb_at(self.pos)
    }

    pub fn aabb_at(&self, pos: Vec2) -> Aabb {
        let (hw, hh) = self.half_extents();
        Aabb {
            min: Vec2::new(pos.x - hw, pos.y - hh),
            max: Vec2::new(pos.x + hw, pos.y + hh),
        }
    }

    /// 0 for static bodies
    pub fn inverse_mass(&self) -> f32 {
        if self.is_static || self.mass <= 0.0 {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// Static bodies never move; switching stops any motion.
    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
        if is_static {
            self.velocity = Vec2::zero();
        }
    }

    pub fn is_dynamic(&self) -> bool {
        !self.is_static
    }
}
