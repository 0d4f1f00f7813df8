use serde::{Deserialize, Serialize};

use crate::materials::MaterialKind;
use crate::shapes::ShapeKind;

pub const TOGGLE_STATIC: &str = "isStatic";
pub const TOGGLE_LOOP: &str = "doesLoop";

pub const SIZE_MIN: f64 = -27.0;
pub const SIZE_MAX: f64 = 0.0;
pub const SPEED_MAX: f64 = 0.5;
pub const LOOP_SIZE_MIN: f64 = 50.0;

/// Lower bound of the air friction slider, tied to the current size
#[inline]
pub fn speed_min(size: f64) -> f64 {
    size / -200.0
}

/// Settings the next placed body is built from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyControls {
    pub shape: String,
    pub material: String,
    pub size: f64,
    pub speed: f64,
    pub is_static: bool,
    pub does_loop: bool,
    pub loop_size: f64,
    pub toggles: Vec<String>,
}

impl Default for BodyControls {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Circle.tag().to_string(),
            material: MaterialKind::Wood.tag().to_string(),
            size: -10.0,
            speed: 0.1,
            is_static: false,
            does_loop: false,
            loop_size: 200.0,
            toggles: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlField {
    Shape,
    Material,
    Size,
    Speed,
    LoopSize,
}

impl ControlField {
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name {
            "shape" => Ok(ControlField::Shape),
            "material" => Ok(ControlField::Material),
            "size" => Ok(ControlField::Size),
            "speed" => Ok(ControlField::Speed),
            "loopSize" => Ok(ControlField::LoopSize),
            _ => Err(format!("unknown control field: {}", name)),
        }
    }
}

/// Value coming from a toggle group or slider
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Tag(String),
    Number(f64),
    /// Exclusive toggle group was deselected
    Empty,
}

impl BodyControls {
    /// Apply one edit from the panel. `max_canvas` bounds the loop size.
    pub fn apply(&mut self, field: ControlField, value: ControlValue, max_canvas: f64) -> Result<(), String> {
        match (field, value) {
            // Deselecting an exclusive group keeps the last choice.
            (ControlField::Shape | ControlField::Material, ControlValue::Empty) => Ok(()),
            (ControlField::Shape, ControlValue::Tag(tag)) => {
                ShapeKind::from_tag(&tag)?;
                self.shape = tag;
                Ok(())
            }
            (ControlField::Material, ControlValue::Tag(tag)) => {
                if MaterialKind::from_tag(&tag).is_none() {
                    return Err(format!("unknown material: {}", tag));
                }
                self.material = tag;
                Ok(())
            }
            (field, ControlValue::Number(v)) if !v.is_finite() => {
                Err(format!("{:?} must be finite, got {}", field, v))
            }
            (ControlField::Size, ControlValue::Number(v)) => {
                // Slider step is 1.
                self.size = v.round().clamp(SIZE_MIN, SIZE_MAX);
                // Speed range follows size.
                self.speed = self.speed.clamp(speed_min(self.size), SPEED_MAX);
                Ok(())
            }
            (ControlField::Speed, ControlValue::Number(v)) => {
                self.speed = v.clamp(speed_min(self.size), SPEED_MAX);
                Ok(())
            }
            (ControlField::LoopSize, ControlValue::Number(v)) => {
                self.loop_size = v.clamp(LOOP_SIZE_MIN, max_canvas.max(LOOP_SIZE_MIN));
                Ok(())
            }
            (field, value) => Err(format!("invalid value {:?} for {:?}", value, field)),
        }
    }

    pub fn toggle_static(&mut self) -> bool {
        self.is_static = !self.is_static;
        self.sync_toggle(TOGGLE_STATIC, self.is_static);
        self.is_static
    }

    pub fn toggle_loop(&mut self) -> bool {
        self.does_loop = !self.does_loop;
        self.sync_toggle(TOGGLE_LOOP, self.does_loop);
        self.does_loop
    }

    fn sync_toggle(&mut self, name: &str, on: bool) {
        self.toggles.retain(|t| t != name);
        if on {
            self.toggles.push(name.to_string());
        }
    }
}
