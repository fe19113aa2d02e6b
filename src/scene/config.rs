// config.rs - Scene tuning values
//
// Loaded from JSON (all fields optional, missing ones fall back to the
// museum defaults) and validated once before the simulation is built.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub movement: MovementConfig,
    pub bounds: BoundsConfig,
    pub door: DoorConfig,
    pub camera: CameraConfig,
    pub look: LookConfig,
}

/// Walking parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Units per second.
    pub speed: f32,
    /// Camera height above the floor, pinned every frame.
    pub eye_height: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self { speed: 5.0, eye_height: 1.7 }
    }
}

/// Room geometry on the horizontal plane.
///
/// The interior spans `[-inner, inner]` laterally and runs from `-inner`
/// up to the door wall in depth. Everything past the door wall is the
/// exterior, limited to `[-outer, outer]` on both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    pub inner: f32,
    pub outer: f32,
    pub door_wall_z: f32,
    /// Crossing the door wall is allowed while `|x| < aperture_half_width`.
    pub aperture_half_width: f32,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            inner: 9.5,
            outer: 20.0,
            door_wall_z: 10.0,
            aperture_half_width: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    /// Door position relative to the front wall group.
    pub local_offset: Vec3,
    pub open_distance: f32,
    pub close_distance: f32,
    /// Per-second rate of the exponential ease toward the target angle.
    pub smoothing_rate: f32,
    /// Swing of each leaf when fully open (radians).
    pub leaf_open_angle: f32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            local_offset: Vec3::ZERO,
            open_distance: 5.0,
            close_distance: 6.0,
            smoothing_rate: 4.0,
            leaf_open_angle: FRAC_PI_2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub spawn: Vec3,
    /// Initial yaw (radians), 0 looks down -Z into the museum.
    pub spawn_yaw: f32,
    pub fov_deg: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            spawn: Vec3::new(0.0, 1.7, 18.0),
            spawn_yaw: 0.0,
            fov_deg: 75.0,
        }
    }
}

/// Pointer-lock mouselook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Radians per pixel of mouse movement.
    pub sensitivity: f32,
    pub min_pitch_deg: f32,
    pub max_pitch_deg: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.002,
            min_pitch_deg: -89.0,
            max_pitch_deg: 89.0,
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: SceneConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.check();
        if let Err(e) = &result {
            warn!("rejecting scene config: {e}");
        }
        result
    }

    fn check(&self) -> Result<(), ConfigError> {
        positive("movement.speed", self.movement.speed)?;
        positive("movement.eye_height", self.movement.eye_height)?;
        positive("bounds.inner", self.bounds.inner)?;
        positive("bounds.outer", self.bounds.outer)?;
        positive("bounds.aperture_half_width", self.bounds.aperture_half_width)?;
        positive("door.open_distance", self.door.open_distance)?;
        positive("door.close_distance", self.door.close_distance)?;
        positive("door.smoothing_rate", self.door.smoothing_rate)?;
        positive("look.sensitivity", self.look.sensitivity)?;

        if !self.bounds.door_wall_z.is_finite() {
            return Err(ConfigError::invalid("bounds.door_wall_z", "must be finite"));
        }
        if !self.door.leaf_open_angle.is_finite() {
            return Err(ConfigError::invalid("door.leaf_open_angle", "must be finite"));
        }
        if !self.door.local_offset.is_finite() {
            return Err(ConfigError::invalid("door.local_offset", "must be finite"));
        }
        if !self.camera.spawn.is_finite() {
            return Err(ConfigError::invalid("camera.spawn", "must be finite"));
        }
        if self.door.close_distance <= self.door.open_distance {
            return Err(ConfigError::invalid(
                "door.close_distance",
                format!(
                    "({}) must exceed door.open_distance ({})",
                    self.door.close_distance, self.door.open_distance
                ),
            ));
        }
        if self.bounds.inner >= self.bounds.outer {
            return Err(ConfigError::invalid(
                "bounds.inner",
                format!("({}) must be below bounds.outer ({})", self.bounds.inner, self.bounds.outer),
            ));
        }
        let wall = self.bounds.door_wall_z;
        if wall < self.bounds.inner || wall >= self.bounds.outer {
            return Err(ConfigError::invalid(
                "bounds.door_wall_z",
                format!("({wall}) must lie in [bounds.inner, bounds.outer)"),
            ));
        }
        if self.look.min_pitch_deg > self.look.max_pitch_deg {
            return Err(ConfigError::invalid("look.min_pitch_deg", "must not exceed look.max_pitch_deg"));
        }
        Ok(())
    }
}

fn positive(field: &'static str, v: f32) -> Result<(), ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be finite and > 0, got {v}")))
    }
}
