use super::*;
use crate::controls::ControlValue;
use crate::shapes::Geometry;
use crate::voice::VoiceKind;

#[test]
fn preview_keeps_voice_muted_and_place_arms_it() {
    let mut world = WorldCore::new(800.0, 600.0);

    let preview = world.preview_body(100.0, 100.0).unwrap();
    assert!(preview.voice.is_muted());
    assert_eq!(world.body_count(), 0);

    let id = world.place_body(100.0, 100.0).unwrap();
    assert_eq!(id, 1);
    assert!(!world.body(id).unwrap().voice.is_muted());
}

#[test]
fn default_controls_place_reference_wood_circle() {
    let mut world = WorldCore::new(800.0, 600.0);
    let id = world.place_body(100.0, 100.0).unwrap();
    let body = world.body(id).unwrap();

    assert_eq!(body.geometry, Geometry::Circle { radius: 35.0 });
    assert_eq!(body.restitution, 0.6);
    assert_eq!(body.voice.kind(), VoiceKind::Membrane);
    assert_eq!(body.wrap.max.x, 800.0);
    assert_eq!(body.wrap.max.y, 600.0);
}

#[test]
fn controls_flow_into_next_placement() {
    let mut world = WorldCore::new(800.0, 600.0);
    world.set_control("shape", ControlValue::Tag("FLOOR".into())).unwrap();
    world.set_control("material", ControlValue::Tag("METAL".into())).unwrap();
    world.set_control("size", ControlValue::Number(0.0)).unwrap();
    assert!(world.toggle_static());

    let id = world.place_body(400.0, 500.0).unwrap();
    let body = world.body(id).unwrap();
    assert_eq!(body.geometry, Geometry::Rectangle { width: 50.0, height: 1.25 });
    assert!(body.is_static);
    assert_eq!(body.voice.kind(), VoiceKind::Metal);
}

#[test]
fn unknown_control_field_is_an_error() {
    let mut world = WorldCore::new(800.0, 600.0);
    assert!(world.set_control("colour", ControlValue::Number(1.0)).is_err());
    assert!(world.controls_manifest_json("fancy").is_err());
    assert!(world.controls_manifest_json("icons").is_ok());
}

#[test]
fn non_finite_slider_value_is_an_error() {
    let mut world = WorldCore::new(800.0, 600.0);
    assert!(world.set_control("size", ControlValue::Number(f64::NAN)).is_err());
    assert!(world.set_control("speed", ControlValue::Number(f64::INFINITY)).is_err());
    assert_eq!(world.controls().size, -10.0);
    assert_eq!(world.controls().speed, 0.1);
    assert!(world.place_body(100.0, 100.0).is_ok());
}

#[test]
fn liquid_body_drifts_down() {
    let mut world = WorldCore::new(800.0, 600.0);
    world.set_control("material", ControlValue::Tag("LIQUID".into())).unwrap();
    let id = world.place_body(400.0, 100.0).unwrap();

    for _ in 0..60 {
        world.step();
    }
    let body = world.body(id).unwrap();
    assert!(body.pos.y > 100.0);
    assert!(body.velocity.y <= world.settings().step_params().max_speed);
}

#[test]
fn loop_toggle_uses_loop_size() {
    let mut world = WorldCore::new(800.0, 600.0);
    world.set_control("loopSize", ControlValue::Number(120.0)).unwrap();
    world.toggle_loop();

    let id = world.place_body(200.0, 50.0).unwrap();
    let wrap = world.body(id).unwrap().wrap;
    assert_eq!((wrap.min.x, wrap.min.y), (200.0, 50.0));
    assert_eq!((wrap.max.x, wrap.max.y), (320.0, 170.0));
}

#[test]
fn pause_freezes_the_room() {
    let mut world = WorldCore::new(800.0, 600.0);
    let id = world.place_body(400.0, 100.0).unwrap();

    assert!(world.toggle_pause());
    world.step();
    assert_eq!(world.frame(), 0);
    assert_eq!(world.body(id).unwrap().pos.y, 100.0);

    assert!(!world.toggle_pause());
    world.step();
    assert_eq!(world.frame(), 1);
    assert!(world.body(id).unwrap().pos.y > 100.0);
}

#[test]
fn falling_body_hits_floor_and_queues_sound() {
    let mut world = WorldCore::new(800.0, 600.0);

    world.set_control("shape", ControlValue::Tag("FLOOR".into())).unwrap();
    world.toggle_static();
    let floor = world.place_body(400.0, 300.0).unwrap();

    world.set_control("shape", ControlValue::Tag("SQUARE".into())).unwrap();
    world.set_control("material", ControlValue::Tag("METAL".into())).unwrap();
    world.toggle_static();
    let block = world.place_body(400.0, 200.0).unwrap();

    for _ in 0..120 {
        world.step();
    }

    let events = world.drain_sound_events();
    assert!(!events.is_empty());
    assert!(events.iter().any(|e| e.body_id == block));
    assert!(events.iter().any(|e| e.body_id == floor));
    assert_eq!(world.pending_sound_count(), 0);

    let block_y = world.body(block).unwrap().pos.y;
    assert!(block_y < 300.0, "block fell through the floor: {}", block_y);
}

#[test]
fn undo_and_clear() {
    let mut world = WorldCore::new(800.0, 600.0);
    world.place_body(100.0, 100.0).unwrap();
    world.place_body(200.0, 100.0).unwrap();

    assert_eq!(world.undo(), Some(2));
    assert_eq!(world.body_count(), 1);

    world.clear();
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.undo(), None);
    assert_eq!(world.place_body(100.0, 100.0).unwrap(), 1);
}

#[test]
fn settings_json_is_validated() {
    let mut world = WorldCore::new(800.0, 600.0);
    world.set_settings_json(r#"{"gravityY": 0.0, "maxSpeed": 12}"#).unwrap();
    assert_eq!(world.settings().gravity_y, 0.0);
    assert_eq!(world.settings().max_speed, 12.0);
    assert_eq!(world.settings().gravity_scale, 0.25);

    assert!(world.set_settings_json(r#"{"maxSpeed": 0}"#).is_err());
    assert!(world.set_settings_json("not json").is_err());
}

#[test]
fn pending_sounds_are_capped() {
    let mut world = WorldCore::new(800.0, 600.0);
    world.set_settings_json(r#"{"gravityY": 0.0, "maxPendingSounds": 3}"#).unwrap();

    // Two rubber balls rammed together sound every frame they touch.
    world.set_control("material", ControlValue::Tag("RUBBER".into())).unwrap();
    for x in [100.0, 300.0, 500.0] {
        let a = world.place_body(x, 300.0).unwrap();
        let b = world.place_body(x + 60.0, 300.0).unwrap();
        world.bodies.get_mut(a).unwrap().velocity = crate::rigid_body::Vec2::new(10.0, 0.0);
        world.bodies.get_mut(b).unwrap().velocity = crate::rigid_body::Vec2::new(-10.0, 0.0);
    }
    world.step();
    assert!(world.pending_sound_count() <= 3);
}

#[test]
fn bodies_json_lists_render_fields() {
    let mut world = WorldCore::new(800.0, 600.0);
    world.set_control("shape", ControlValue::Tag("CLOUD".into())).unwrap();
    world.place_body(100.0, 100.0).unwrap();

    let value: serde_json::Value = serde_json::from_str(&world.bodies_json()).unwrap();
    let first = &value[0];
    assert_eq!(first["shape"], "CLOUD");
    assert_eq!(first["isStatic"], true);
    assert_eq!(first["cloud"], true);
    assert!(first["sprite"]["texture"].is_string());
    assert_eq!(first["geometry"]["kind"], "rectangle");
}

#[test]
fn perf_stats_record_last_step() {
    let mut world = WorldCore::new(800.0, 600.0);
    world.enable_perf_metrics(true);
    world.place_body(100.0, 100.0).unwrap();
    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 1);
    assert_eq!(stats.bodies_integrated(), 1);
}
