use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::materials::{generated_materials, MaterialKind, MaterialProps};

/// Lookup of material properties, from the built-in table or a JSON bundle
#[derive(Clone)]
pub struct MaterialRegistry {
    materials: HashMap<MaterialKind, MaterialProps>,
    fallback: MaterialProps,
    manifest: Vec<MaterialManifestEntry>,
}

impl MaterialRegistry {
    pub fn from_generated() -> Self {
        let mut materials = HashMap::new();
        for (kind, props) in generated_materials() {
            materials.insert(kind, props);
        }
        Self::with_table(materials, MaterialProps::fallback())
    }

    /// Load a bundle on top of the built-in table.
    ///
    /// Entries replace the generated row for their tag; tags the bundle
    /// does not mention keep their generated values.
    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn props(&self, kind: MaterialKind) -> &MaterialProps {
        self.materials.get(&kind).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &MaterialProps {
        &self.fallback
    }

    /// Resolve a control tag; unknown tags get the fallback profile.
    pub fn resolve(&self, tag: &str) -> &MaterialProps {
        match MaterialKind::from_tag(tag) {
            Some(kind) => self.props(kind),
            None => {
                engine_warn!("unknown material {:?}, using fallback profile", tag);
                &self.fallback
            }
        }
    }

    pub fn manifest_json(&self) -> String {
        let out = MaterialManifest {
            format_version: 1,
            materials: &self.manifest,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn with_table(materials: HashMap<MaterialKind, MaterialProps>, fallback: MaterialProps) -> Self {
        let manifest = MaterialKind::ALL
            .iter()
            .filter_map(|kind| {
                materials.get(kind).map(|props| MaterialManifestEntry {
                    tag: kind.tag().to_string(),
                    label: kind.label().to_string(),
                    color: props
                        .render
                        .fill
                        .clone()
                        .unwrap_or_else(|| props.render.stroke.clone()),
                    synth: props.voice.kind.synth_name().to_string(),
                })
            })
            .collect();

        Self {
            materials,
            fallback,
            manifest,
        }
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, String> {
        let mut materials: HashMap<MaterialKind, MaterialProps> =
            generated_materials().into_iter().collect();
        let mut seen: Vec<MaterialKind> = Vec::with_capacity(bundle.materials.len());

        for entry in bundle.materials.into_iter() {
            let kind = MaterialKind::from_tag(&entry.tag)
                .ok_or_else(|| format!("unknown material tag: {}", entry.tag))?;
            if seen.contains(&kind) {
                return Err(format!("duplicate material tag: {}", entry.tag));
            }
            validate_props(&entry.tag, &entry.props)?;
            seen.push(kind);
            materials.insert(kind, entry.props);
        }

        let fallback = match bundle.fallback {
            Some(props) => {
                validate_props("fallback", &props)?;
                props
            }
            None => MaterialProps::fallback(),
        };

        Ok(Self::with_table(materials, fallback))
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::from_generated()
    }
}

fn validate_props(tag: &str, props: &MaterialProps) -> Result<(), String> {
    if !(props.density > 0.0) {
        return Err(format!("material {} has non-positive density {}", tag, props.density));
    }
    if !(0.0..=1.0).contains(&props.render.opacity) {
        return Err(format!(
            "material {} has opacity {} outside 0..=1",
            tag, props.render.opacity
        ));
    }
    if !props.restitution.is_finite() || props.restitution < 0.0 {
        return Err(format!("material {} has invalid restitution {}", tag, props.restitution));
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaterialManifest<'a> {
    format_version: u32,
    materials: &'a [MaterialManifestEntry],
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialManifestEntry {
    tag: String,
    label: String,
    color: String,
    synth: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    materials: Vec<BundleMaterial>,
    #[serde(default)]
    fallback: Option<MaterialProps>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleMaterial {
    tag: String,
    #[serde(flatten)]
    props: MaterialProps,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::VoiceKind;

    const METAL_OVERRIDE: &str = r##"{
        "materials": [
            {
                "tag": "METAL",
                "restitution": 0.9,
                "density": 0.02,
                "airFriction": { "kind": "constant", "value": 0.05 },
                "render": { "fill": "#000000", "stroke": "#000000", "opacity": 1.0, "lineWidth": 2 },
                "voice": { "kind": "PluckSynth" }
            }
        ]
    }"##;

    #[test]
    fn bundle_overrides_only_listed_materials() {
        let registry = MaterialRegistry::from_bundle_json(METAL_OVERRIDE).unwrap();
        let metal = registry.props(MaterialKind::Metal);
        assert_eq!(metal.restitution, 0.9);
        assert_eq!(metal.voice.kind, VoiceKind::Pluck);

        let wood = registry.props(MaterialKind::Wood);
        assert_eq!(wood.restitution, 0.6);
        assert_eq!(registry.material_count(), 7);
    }

    #[test]
    fn bundle_rejects_unknown_and_duplicate_tags() {
        let unknown = METAL_OVERRIDE.replace("\"METAL\"", "\"SLIME\"");
        let err = MaterialRegistry::from_bundle_json(&unknown).err().unwrap();
        assert!(err.contains("SLIME"));

        let dup = r##"{"materials": [
            {"tag": "WOOD", "restitution": 0.1, "density": 0.1,
             "airFriction": {"kind": "constant", "value": 0.0},
             "render": {"stroke": "#fff", "opacity": 0.5, "lineWidth": 1},
             "voice": {"kind": "Synth"}},
            {"tag": "WOOD", "restitution": 0.2, "density": 0.1,
             "airFriction": {"kind": "constant", "value": 0.0},
             "render": {"stroke": "#fff", "opacity": 0.5, "lineWidth": 1},
             "voice": {"kind": "Synth"}}
        ]}"##;
        let err = MaterialRegistry::from_bundle_json(dup).err().unwrap();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn bundle_rejects_zero_density() {
        let bad = METAL_OVERRIDE.replace("\"density\": 0.02", "\"density\": 0.0");
        let err = MaterialRegistry::from_bundle_json(&bad).err().unwrap();
        assert!(err.contains("density"));
    }

    #[test]
    fn resolve_unknown_tag_uses_fallback() {
        let registry = MaterialRegistry::from_generated();
        let props = registry.resolve("SLIME");
        assert_eq!(props.restitution, 1.0);
        assert_eq!(props.density, 0.003);
        assert_eq!(props.voice.kind, VoiceKind::Synth);
    }

    #[test]
    fn manifest_lists_materials_in_panel_order() {
        let registry = MaterialRegistry::from_generated();
        let value: serde_json::Value = serde_json::from_str(&registry.manifest_json()).unwrap();
        let tags: Vec<&str> = value["materials"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["tag"].as_str().unwrap())
            .collect();
        assert_eq!(tags, ["WOOD", "METAL", "BUBBLE", "CLOTH", "RUBBER", "GLITTER", "LIQUID"]);
        assert_eq!(value["materials"][2]["color"], "#95f9ddff");
    }
}
