//! Material definitions
//!
//! Each material fixes how a body responds physically (restitution, density,
//! air friction) and which voice it carries. The built-in table lives in
//! [`generated_materials`]; bundles loaded through
//! [`MaterialRegistry`](crate::domain::content::MaterialRegistry) can
//! override it.

use serde::{Deserialize, Serialize};

use crate::domain::voice::{DecayCurve, Envelope, VoiceKind, VoiceSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialKind {
    Wood,
    Metal,
    Bubble,
    Cloth,
    Rubber,
    Glitter,
    Liquid,
}

impl MaterialKind {
    /// Order matches the toggle group in the control panel.
    pub const ALL: [MaterialKind; 7] = [
        MaterialKind::Wood,
        MaterialKind::Metal,
        MaterialKind::Bubble,
        MaterialKind::Cloth,
        MaterialKind::Rubber,
        MaterialKind::Glitter,
        MaterialKind::Liquid,
    ];

    /// `None` for unknown tags (callers fall back to the generic profile)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "WOOD" => Some(MaterialKind::Wood),
            "METAL" => Some(MaterialKind::Metal),
            "BUBBLE" => Some(MaterialKind::Bubble),
            "CLOTH" => Some(MaterialKind::Cloth),
            "RUBBER" => Some(MaterialKind::Rubber),
            "GLITTER" => Some(MaterialKind::Glitter),
            "LIQUID" => Some(MaterialKind::Liquid),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            MaterialKind::Wood => "WOOD",
            MaterialKind::Metal => "METAL",
            MaterialKind::Bubble => "BUBBLE",
            MaterialKind::Cloth => "CLOTH",
            MaterialKind::Rubber => "RUBBER",
            MaterialKind::Glitter => "GLITTER",
            MaterialKind::Liquid => "LIQUID",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MaterialKind::Wood => "wood",
            MaterialKind::Metal => "metal",
            MaterialKind::Bubble => "bubble",
            MaterialKind::Cloth => "cloth",
            MaterialKind::Rubber => "rubber",
            MaterialKind::Glitter => "glitter",
            MaterialKind::Liquid => "liquid",
        }
    }
}

/// Air friction, either fixed or derived from the controls
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AirFriction {
    Constant { value: f32 },
    /// `base + size / divisor`
    SizeScaled { base: f32, divisor: f32 },
    /// `speed * factor`
    SpeedScaled { factor: f32 },
}

impl AirFriction {
    pub fn evaluate(&self, size: f32, speed: f32) -> f32 {
        match *self {
            AirFriction::Constant { value } => value,
            AirFriction::SizeScaled { base, divisor } => base + size / divisor,
            AirFriction::SpeedScaled { factor } => speed * factor,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStyle {
    /// `None` renders transparent
    #[serde(default)]
    pub fill: Option<String>,
    pub stroke: String,
    pub opacity: f32,
    pub line_width: f32,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl RenderStyle {
    fn solid(color: &str, opacity: f32) -> Self {
        Self {
            fill: Some(color.to_string()),
            stroke: color.to_string(),
            opacity,
            line_width: 5.0,
            visible: true,
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: "#FFFFFF".to_string(),
            opacity: 1.0,
            line_width: 1.0,
            visible: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialProps {
    pub restitution: f32,
    pub density: f32,
    pub air_friction: AirFriction,
    pub render: RenderStyle,
    pub voice: VoiceSpec,
    /// Bodies made of this material are bubbles
    #[serde(default)]
    pub bubble: bool,
}

impl MaterialProps {
    /// Profile for tags outside the table: elastic, dense, plain synth.
    pub fn fallback() -> Self {
        Self {
            restitution: 1.0,
            density: 0.003,
            air_friction: AirFriction::SpeedScaled { factor: 5.0 },
            render: RenderStyle::default(),
            voice: VoiceSpec::plain(VoiceKind::Synth),
            bubble: false,
        }
    }
}

/// Built-in material table
pub fn generated_materials() -> Vec<(MaterialKind, MaterialProps)> {
    vec![
        (
            MaterialKind::Wood,
            MaterialProps {
                restitution: 0.6,
                density: 0.005,
                air_friction: AirFriction::SizeScaled { base: 0.03, divisor: -3000.0 },
                render: RenderStyle::solid("#FFBA7A", 0.7),
                voice: VoiceSpec {
                    kind: VoiceKind::Membrane,
                    envelope: Some(Envelope {
                        attack: 0.1,
                        decay: 0.2,
                        sustain: 0.0,
                        release: 0.4,
                        decay_curve: DecayCurve::Exponential,
                    }),
                    octaves: Some(1.0),
                },
                bubble: false,
            },
        ),
        (
            MaterialKind::Metal,
            MaterialProps {
                restitution: 0.3,
                density: 0.01,
                air_friction: AirFriction::SizeScaled { base: 0.01, divisor: -5000.0 },
                render: RenderStyle::solid("#D4BEEE", 0.7),
                voice: VoiceSpec::plain(VoiceKind::Metal),
                bubble: false,
            },
        ),
        (
            MaterialKind::Rubber,
            MaterialProps {
                restitution: 1.5,
                density: 0.005,
                air_friction: AirFriction::SpeedScaled { factor: 1.0 },
                render: RenderStyle::solid("#FB998E", 0.7),
                voice: VoiceSpec::plain(VoiceKind::Fm),
                bubble: false,
            },
        ),
        (
            MaterialKind::Cloth,
            MaterialProps {
                restitution: 0.001,
                density: 0.001,
                air_friction: AirFriction::SpeedScaled { factor: 1.0 },
                render: RenderStyle::solid("#FFCAD8", 0.8),
                voice: VoiceSpec::plain(VoiceKind::Am),
                bubble: false,
            },
        ),
        (
            MaterialKind::Bubble,
            MaterialProps {
                restitution: 0.0,
                density: 0.000001,
                air_friction: AirFriction::SpeedScaled { factor: 2.0 },
                render: RenderStyle {
                    fill: None,
                    stroke: "#95f9ddff".to_string(),
                    opacity: 0.7,
                    line_width: 5.0,
                    visible: true,
                },
                voice: VoiceSpec::plain(VoiceKind::Pluck),
                bubble: true,
            },
        ),
        (
            MaterialKind::Glitter,
            MaterialProps {
                restitution: 0.0,
                density: 0.001,
                air_friction: AirFriction::Constant { value: 1.0 },
                render: RenderStyle::solid("#FFBA7A", 0.8),
                voice: VoiceSpec::plain(VoiceKind::Synth),
                bubble: false,
            },
        ),
        (
            MaterialKind::Liquid,
            MaterialProps {
                restitution: 0.0,
                density: 0.001,
                air_friction: AirFriction::Constant { value: 1.0 },
                render: RenderStyle::solid("#A3E5FF", 0.5),
                voice: VoiceSpec::plain(VoiceKind::Synth),
                bubble: false,
            },
        ),
    ]
}
