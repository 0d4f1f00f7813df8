use serde::Serialize;

use crate::materials::MaterialKind;
use crate::shapes::ShapeKind;

use super::body_controls::{
    speed_min, BodyControls, LOOP_SIZE_MIN, SIZE_MAX, SIZE_MIN, SPEED_MAX, TOGGLE_LOOP, TOGGLE_STATIC,
};

/// Which flavour of the panel the view renders
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlsVariant {
    /// Text buttons
    Labels,
    /// Image buttons
    Icons,
}

impl ControlsVariant {
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name {
            "labels" => Ok(ControlsVariant::Labels),
            "icons" => Ok(ControlsVariant::Icons),
            _ => Err(format!("unknown controls variant: {}", name)),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleOption {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderSpec {
    pub field: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    pub marks: bool,
}

/// Everything the view needs to draw the panel for the current state
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlsManifest {
    pub variant: ControlsVariant,
    pub shapes: Vec<ToggleOption>,
    pub materials: Vec<ToggleOption>,
    pub sliders: Vec<SliderSpec>,
    pub toggles: Vec<ToggleOption>,
    pub actions: Vec<ToggleOption>,
}

impl ControlsManifest {
    pub fn build(variant: ControlsVariant, controls: &BodyControls, max_canvas: f64) -> Self {
        let option = |value: &str, label: &str| ToggleOption {
            value: value.to_string(),
            label: label.to_string(),
            icon: match variant {
                ControlsVariant::Labels => None,
                ControlsVariant::Icons => Some(format!("icons/{}.png", label)),
            },
        };

        let shapes = ShapeKind::ALL
            .iter()
            .map(|s| option(s.tag(), s.label()))
            .collect();
        let materials = MaterialKind::ALL
            .iter()
            .map(|m| option(m.tag(), m.label()))
            .collect();

        let sliders = vec![
            SliderSpec {
                field: "size".to_string(),
                label: "size".to_string(),
                min: SIZE_MIN,
                max: SIZE_MAX,
                step: Some(1.0),
                marks: true,
            },
            SliderSpec {
                field: "speed".to_string(),
                label: "air Friction".to_string(),
                min: speed_min(controls.size),
                max: SPEED_MAX,
                step: Some(0.01),
                marks: false,
            },
            SliderSpec {
                field: "loopSize".to_string(),
                label: "Loop Size".to_string(),
                min: LOOP_SIZE_MIN,
                max: max_canvas.max(LOOP_SIZE_MIN),
                step: None,
                marks: false,
            },
        ];

        let toggles = vec![option(TOGGLE_LOOP, "loop"), option(TOGGLE_STATIC, "static")];
        let actions = vec![option("undo", "undo"), option("pause", "pause")];

        Self {
            variant,
            shapes,
            materials,
            sliders,
            toggles,
            actions,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_variant_has_no_icons() {
        let manifest = ControlsManifest::build(ControlsVariant::Labels, &BodyControls::default(), 800.0);
        assert_eq!(manifest.shapes.len(), 8);
        assert_eq!(manifest.materials.len(), 7);
        assert!(manifest.shapes.iter().all(|o| o.icon.is_none()));
        assert_eq!(manifest.shapes[7].value, "CHICHI");
    }

    #[test]
    fn icons_variant_points_at_images() {
        let manifest = ControlsManifest::build(ControlsVariant::Icons, &BodyControls::default(), 800.0);
        assert_eq!(manifest.materials[0].icon.as_deref(), Some("icons/wood.png"));
    }

    #[test]
    fn speed_slider_follows_size() {
        let mut controls = BodyControls::default();
        controls.size = -20.0;
        let manifest = ControlsManifest::build(ControlsVariant::Labels, &controls, 640.0);
        let speed = manifest.sliders.iter().find(|s| s.field == "speed").unwrap();
        assert!((speed.min - 0.1).abs() < 1e-9);
        let loop_size = manifest.sliders.iter().find(|s| s.field == "loopSize").unwrap();
        assert_eq!(loop_size.max, 640.0);

        let json: serde_json::Value = serde_json::from_str(&manifest.to_json()).unwrap();
        assert_eq!(json["variant"], "labels");
    }
}
