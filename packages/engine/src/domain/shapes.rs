//! Shape tags and the geometry they produce.

use serde::{Deserialize, Serialize};

/// Sprite drawn instead of the outline (cloud only)
pub const CLOUD_TEXTURE: &str =
    "https://static.vecteezy.com/system/resources/previews/001/192/683/original/cloud-png.png";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Hexagon,
    Cloud,
    Wall,
    Floor,
    Chichi,
}

impl ShapeKind {
    /// Order matches the toggle group in the control panel.
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Hexagon,
        ShapeKind::Cloud,
        ShapeKind::Wall,
        ShapeKind::Floor,
        ShapeKind::Chichi,
    ];

    pub fn from_tag(tag: &str) -> Result<Self, String> {
        match tag {
            "CIRCLE" => Ok(ShapeKind::Circle),
            "SQUARE" => Ok(ShapeKind::Square),
            "TRIANGLE" => Ok(ShapeKind::Triangle),
            "HEXAGON" => Ok(ShapeKind::Hexagon),
            "CLOUD" => Ok(ShapeKind::Cloud),
            "WALL" => Ok(ShapeKind::Wall),
            "FLOOR" => Ok(ShapeKind::Floor),
            "CHICHI" => Ok(ShapeKind::Chichi),
            _ => Err(format!("unknown shape: {}", tag)),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Circle => "CIRCLE",
            ShapeKind::Square => "SQUARE",
            ShapeKind::Triangle => "TRIANGLE",
            ShapeKind::Hexagon => "HEXAGON",
            ShapeKind::Cloud => "CLOUD",
            ShapeKind::Wall => "WALL",
            ShapeKind::Floor => "FLOOR",
            ShapeKind::Chichi => "CHICHI",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Cloud => "cloud",
            ShapeKind::Wall => "wall",
            ShapeKind::Floor => "floor",
            ShapeKind::Chichi => "chichi",
        }
    }

    /// Build the geometry for a body of the given engine size
    pub fn geometry(self, body_size: f32) -> Geometry {
        let s = body_size;
        match self {
            ShapeKind::Circle => Geometry::Circle { radius: s },
            ShapeKind::Square => Geometry::Rectangle { width: s, height: s },
            ShapeKind::Hexagon => Geometry::Polygon { sides: 6, radius: s },
            ShapeKind::Triangle | ShapeKind::Chichi => Geometry::Polygon { sides: 3, radius: s },
            ShapeKind::Wall => Geometry::Rectangle { width: s / 4.0, height: s * 10.0 },
            ShapeKind::Floor => Geometry::Rectangle { width: s * 10.0, height: s / 4.0 },
            ShapeKind::Cloud => Geometry::Rectangle { width: s * 2.0, height: s },
        }
    }

    /// Cloud sprite scale, `None` for shapes drawn as outlines
    pub fn sprite(self, body_size: f32) -> Option<Sprite> {
        match self {
            ShapeKind::Cloud => {
                let scale = 0.03 * (body_size / 10.0);
                Some(Sprite {
                    texture: CLOUD_TEXTURE.to_string(),
                    x_scale: scale,
                    y_scale: scale,
                })
            }
            _ => None,
        }
    }
}

/// Slider value -> engine units. The slider runs over a negative range.
#[inline]
pub fn body_size(size: f32) -> f32 {
    size * -3.0 + 5.0
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Geometry {
    Circle { radius: f32 },
    Rectangle { width: f32, height: f32 },
    /// Regular polygon, `radius` is the circumradius
    Polygon { sides: u32, radius: f32 },
}

impl Geometry {
    /// Half extents of the axis-aligned bounds at zero rotation
    pub fn half_extents(&self) -> (f32, f32) {
        match *self {
            Geometry::Circle { radius } => (radius, radius),
            Geometry::Rectangle { width, height } => (width / 2.0, height / 2.0),
            Geometry::Polygon { radius, .. } => (radius, radius),
        }
    }

    pub fn area(&self) -> f32 {
        match *self {
            Geometry::Circle { radius } => std::f32::consts::PI * radius * radius,
            Geometry::Rectangle { width, height } => width * height,
            Geometry::Polygon { sides, radius } => {
                let n = sides.max(3) as f32;
                0.5 * n * radius * radius * (std::f32::consts::TAU / n).sin()
            }
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Geometry::Circle { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprite {
    pub texture: String,
    pub x_scale: f32,
    pub y_scale: f32,
}
