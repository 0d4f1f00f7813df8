use std::fs;

use physisynth_engine::body_factory::{add_body, BodyRequest};
use physisynth_engine::content::MaterialRegistry;
use physisynth_engine::materials::MaterialKind;
use physisynth_engine::voice::{DecayCurve, VoiceKind};

fn load_bundle() -> MaterialRegistry {
    let json = fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/content/materials.json"))
        .expect("content/materials.json should exist");
    MaterialRegistry::from_bundle_json(&json).expect("materials.json should parse")
}

#[test]
fn material_bundle_smoke_parses_and_keeps_full_table() {
    let registry = load_bundle();

    assert_eq!(registry.material_count(), MaterialKind::ALL.len());
    assert_eq!(registry.props(MaterialKind::Metal).restitution, 0.45);
    // Untouched rows keep the built-in values.
    assert_eq!(registry.props(MaterialKind::Wood).restitution, 0.6);

    let bubble = registry.props(MaterialKind::Bubble);
    assert!(bubble.bubble);
    assert!(bubble.render.fill.is_none());
    let env = bubble.voice.envelope.expect("bubble envelope");
    assert_eq!(env.decay_curve, DecayCurve::Linear);
}

#[test]
fn bundle_materials_reach_placed_bodies() {
    let registry = load_bundle();
    let request = BodyRequest {
        shape: "HEXAGON".to_string(),
        is_static: false,
        size: -10.0,
        material: "METAL".to_string(),
        does_loop: false,
        loop_size: 200.0,
        speed: 0.1,
        mouse_x: 50.0,
        mouse_y: 50.0,
        canvas_x: 640.0,
        canvas_y: 480.0,
    };
    let body = add_body(&request, &registry).unwrap();
    assert_eq!(body.restitution, 0.45);
    assert_eq!(body.density, 0.012);
    assert_eq!(body.voice.kind(), VoiceKind::Metal);
    assert!(body.voice.is_muted());
}
