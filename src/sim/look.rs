// look.rs - Pointer-lock mouselook
//
// Mouse deltas only turn the camera while the pointer is locked to the
// canvas. Moving right turns right, moving down looks down.

use crate::camera::CameraPose;
use crate::scene::LookConfig;

#[derive(Debug, Clone)]
pub struct Mouselook {
    sensitivity: f32,
    min_pitch: f32,
    max_pitch: f32,
    locked: bool,
}

impl Mouselook {
    pub fn new(cfg: &LookConfig) -> Self {
        Self {
            sensitivity: cfg.sensitivity,
            min_pitch: cfg.min_pitch_deg.to_radians(),
            max_pitch: cfg.max_pitch_deg.to_radians(),
            locked: false,
        }
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Apply a mouse delta in pixels. Returns false if it was ignored.
    pub fn apply(&self, camera: &mut CameraPose, dx: f32, dy: f32) -> bool {
        if !self.locked || !dx.is_finite() || !dy.is_finite() {
            return false;
        }
        camera.yaw -= dx * self.sensitivity;
        camera.pitch = (camera.pitch - dy * self.sensitivity).clamp(self.min_pitch, self.max_pitch);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked(cfg: &LookConfig) -> Mouselook {
        let mut look = Mouselook::new(cfg);
        look.set_locked(true);
        look
    }

    #[test]
    fn ignored_while_unlocked() {
        let look = Mouselook::new(&LookConfig::default());
        let mut cam = CameraPose::default();
        assert!(!look.apply(&mut cam, 100.0, 100.0));
        assert_eq!(cam, CameraPose::default());
    }

    #[test]
    fn pitch_is_clamped() {
        let cfg = LookConfig { min_pitch_deg: -30.0, max_pitch_deg: 30.0, ..Default::default() };
        let look = locked(&cfg);
        let mut cam = CameraPose::default();

        look.apply(&mut cam, 0.0, -10_000.0);
        assert!(cam.pitch <= 30f32.to_radians() + 1e-6);

        look.apply(&mut cam, 0.0, 10_000.0);
        assert!(cam.pitch >= (-30f32).to_radians() - 1e-6);
    }

    #[test]
    fn moving_right_turns_right() {
        let look = locked(&LookConfig::default());
        let mut cam = CameraPose::default();
        look.apply(&mut cam, 50.0, 0.0);
        assert!(cam.yaw < 0.0);
        // Turning right from -Z points toward +X.
        assert!(cam.forward().x > 0.0);
    }
}
