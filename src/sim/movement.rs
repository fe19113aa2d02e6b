// movement.rs - First-person walking with room collision
//
// Each frame: WASD -> local direction -> normalized, scaled by speed and
// elapsed time -> turned by the camera heading -> added to the camera.
// Then the door wall check and zone clamping run, moving or not.

use glam::Vec3;
use tracing::trace;

use super::{DoorSignal, frame_dt};
use crate::camera::CameraPose;
use crate::input::{Key, KeyState};
use crate::scene::{BoundsConfig, MovementConfig};
use crate::world::{clamp_to_zone, crosses_door_wall, in_aperture};

pub struct MovementController {
    speed: f32,
    eye_height: f32,
    bounds: BoundsConfig,
    door: DoorSignal,

    // Scratch, rebuilt every frame
    direction: Vec3,
    velocity: Vec3,
}

impl MovementController {
    pub fn new(movement: &MovementConfig, bounds: &BoundsConfig, door: DoorSignal) -> Self {
        Self {
            speed: movement.speed,
            eye_height: movement.eye_height,
            bounds: bounds.clone(),
            door,
            direction: Vec3::ZERO,
            velocity: Vec3::ZERO,
        }
    }

    /// Camera-local direction from the pressed keys, not normalized.
    /// Forward is -Z, right is +X.
    pub fn local_direction(keys: &KeyState) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if keys.is_down(Key::Forward) { dir.z -= 1.0; }
        if keys.is_down(Key::Back) { dir.z += 1.0; }
        if keys.is_down(Key::Left) { dir.x -= 1.0; }
        if keys.is_down(Key::Right) { dir.x += 1.0; }
        dir
    }

    /// World-space displacement applied on the last update.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Advance the camera by one frame. A zero, negative or non-finite
    /// `dt` moves nothing but still pins height and clamps.
    pub fn update(&mut self, keys: &KeyState, camera: &mut CameraPose, dt: f32) {
        let dt = frame_dt(dt);
        self.direction = Self::local_direction(keys);
        self.velocity = Vec3::ZERO;

        if self.direction.length_squared() > 0.0 {
            let step = self.direction.normalize() * (self.speed * dt);
            let mut world = camera.heading() * step;
            world.y = 0.0;
            self.velocity = world;
        }

        let prev_z = camera.position.z;
        let mut pos = camera.position + self.velocity;
        pos.y = self.eye_height;

        if crosses_door_wall(&self.bounds, prev_z, pos.z) {
            let open = self.door.is_open();
            if !open || !in_aperture(&self.bounds, pos.x) {
                trace!(x = pos.x, z = pos.z, open, "blocked at door wall");
                pos.z = prev_z;
            }
        }

        camera.position = clamp_to_zone(&self.bounds, pos);
    }
}
