// camera.rs - First-person camera pose
//
// Owned by the host. Movement mutates it in place every frame.

use glam::{Quat, Vec3};

/// Position plus yaw/pitch orientation (radians).
///
/// Yaw 0 looks down -Z; positive yaw turns left (counter-clockwise seen
/// from above), matching a right-handed Y-up scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self { position: Vec3::ZERO, yaw: 0.0, pitch: 0.0 }
    }
}

impl CameraPose {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw, pitch: 0.0 }
    }

    /// Rotation about the vertical axis only.
    #[inline]
    pub fn heading(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// Full orientation (yaw, then pitch).
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(glam::EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Unit look direction.
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }
}
