use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Quat, Vec3};

use gallery_engine::scene::SceneConfig;
use gallery_engine::sim::{DoorPhase, MuseumSim};

const DT: f32 = 1.0 / 60.0;

fn walk(sim: &mut MuseumSim, frames: usize) {
    for _ in 0..frames {
        sim.tick(DT);
    }
}

#[test]
fn walks_in_through_the_auto_door() {
    let mut sim = MuseumSim::default();
    sim.key_event("KeyW", true);

    let mut saw_open = false;
    for _ in 0..600 {
        sim.tick(DT);
        saw_open |= sim.door().is_open();
        assert_eq!(sim.camera().position.y, 1.7);
    }

    assert!(saw_open);
    // Ten seconds at 5 u/s is more than enough to reach the back wall.
    assert_eq!(sim.camera().position.z, -9.5);
    // Far from the door again, so it has closed behind us.
    assert_eq!(sim.door().phase(), DoorPhase::Closed);
    assert!(!sim.door_signal().is_open());
}

#[test]
fn walks_back_out_the_same_way() {
    let mut sim = MuseumSim::default();
    sim.key_event("KeyW", true);
    walk(&mut sim, 600);

    sim.camera_mut().yaw += PI;
    walk(&mut sim, 600);

    let pos = sim.camera().position;
    assert_eq!(pos.z, 20.0);
    assert!(pos.x.abs() < 1e-3);
}

#[test]
fn unmounted_door_keeps_the_museum_shut() {
    let mut sim = MuseumSim::default();
    let anchor = sim.door().anchor();
    sim.graph_mut().set_mounted(anchor, false);
    sim.key_event("KeyW", true);

    walk(&mut sim, 300);

    let z = sim.camera().position.z;
    assert!(z >= 10.0 && z < 10.1, "stopped at {z}");
    assert!(!sim.door().is_open());
}

#[test]
fn mounting_later_lets_the_door_work() {
    let mut sim = MuseumSim::default();
    let wall = sim.front_wall();
    sim.graph_mut().set_mounted(wall, false);
    sim.key_event("KeyW", true);
    walk(&mut sim, 200);
    assert!(sim.camera().position.z >= 10.0);

    sim.graph_mut().set_mounted(wall, true);
    walk(&mut sim, 200);
    assert!(sim.camera().position.z < 10.0);
}

#[test]
fn click_far_away_is_undone_next_frame() {
    let mut sim = MuseumSim::default();
    sim.click_door();
    assert!(sim.door().is_open());
    assert!(sim.door_signal().is_open());

    sim.tick(DT);
    assert!(!sim.door().is_open());
}

#[test]
fn narrow_aperture_from_config_blocks_off_center() {
    let cfg = SceneConfig::from_json(r#"{ "bounds": { "aperture_half_width": 0.5 } }"#).unwrap();
    let mut sim = MuseumSim::new(cfg);
    sim.camera_mut().position.x = 1.0;
    sim.key_event("KeyW", true);

    walk(&mut sim, 300);

    assert!(sim.door().is_open());
    assert!(sim.camera().position.z >= 10.0);
}

#[test]
fn frame_rate_does_not_change_distance() {
    let run = |fps: usize| {
        let mut sim = MuseumSim::default();
        sim.key_event("KeyD", true);
        for _ in 0..fps {
            sim.tick(1.0 / fps as f32);
        }
        sim.camera().position
    };

    let slow = run(30);
    let fast = run(144);
    assert!((slow - fast).length() < 1e-3, "{slow} vs {fast}");
    assert!((slow.x - 5.0).abs() < 1e-3);
}

#[test]
fn door_follows_a_moved_front_wall() {
    let mut sim = MuseumSim::default();
    let wall = sim.front_wall();
    let anchor = sim.door().anchor();
    // Swing the wall a quarter turn and slide it well away from the spawn.
    sim.graph_mut().set_local(wall, Vec3::new(50.0, 0.0, 10.0), Quat::from_rotation_y(FRAC_PI_2));
    assert!(sim.graph().is_mounted(anchor));

    let door = sim.graph().world_position(anchor).unwrap();
    assert!((door - Vec3::new(50.0, 0.0, 10.0)).length() < 1e-4, "{door}");

    // Spawn is far from the moved anchor, so proximity never opens it.
    sim.key_event("KeyW", true);
    walk(&mut sim, 300);
    assert!(!sim.door().is_open());
    assert!(sim.camera().position.z >= 10.0);
}
