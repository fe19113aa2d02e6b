// render.rs - Encode simulation state to output buffer
//
// One flat f32 packet per frame, read by the JS renderer through a
// pointer into wasm memory:
//   0..3  = camera position (x, y, z)
//   3     = camera yaw
//   4     = camera pitch
//   5     = left leaf angle
//   6     = right leaf angle
//   7     = door open (0 / 1)
//   8     = blocker panels present (0 / 1)
//   9     = field of view (degrees)

use crate::sim::MuseumSim;

pub const CAMERA_X: usize = 0;
pub const CAMERA_Y: usize = 1;
pub const CAMERA_Z: usize = 2;
pub const CAMERA_YAW: usize = 3;
pub const CAMERA_PITCH: usize = 4;
pub const LEFT_LEAF: usize = 5;
pub const RIGHT_LEAF: usize = 6;
pub const DOOR_OPEN: usize = 7;
pub const BLOCKERS: usize = 8;
pub const FOV_DEG: usize = 9;

pub const FRAME_LEN: usize = 10;

pub struct Encoder {
    out: Vec<f32>,
}

impl Encoder {
    pub fn new() -> Self {
        Self { out: vec![0.0; FRAME_LEN] }
    }

    pub fn ptr(&self) -> *const f32 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.out
    }

    /// Encode the current frame
    pub fn encode(&mut self, sim: &MuseumSim) {
        let cam = sim.camera();
        let door = sim.door();
        let (left, right) = door.leaf_angles();

        self.out[CAMERA_X] = cam.position.x;
        self.out[CAMERA_Y] = cam.position.y;
        self.out[CAMERA_Z] = cam.position.z;
        self.out[CAMERA_YAW] = cam.yaw;
        self.out[CAMERA_PITCH] = cam.pitch;
        self.out[LEFT_LEAF] = left;
        self.out[RIGHT_LEAF] = right;
        self.out[DOOR_OPEN] = flag(door.is_open());
        self.out[BLOCKERS] = flag(!door.blockers().is_empty());
        self.out[FOV_DEG] = sim.config().camera.fov_deg;
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn flag(b: bool) -> f32 {
    if b { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packet_reflects_spawn() {
        let sim = MuseumSim::default();
        let mut enc = Encoder::new();
        enc.encode(&sim);

        let out = enc.as_slice();
        assert_eq!(out.len(), FRAME_LEN);
        assert_eq!(&out[CAMERA_X..=CAMERA_Z], &[0.0, 1.7, 18.0]);
        assert_eq!(out[DOOR_OPEN], 0.0);
        assert_eq!(out[BLOCKERS], 1.0);
        assert_eq!(out[FOV_DEG], 75.0);
    }

    #[test]
    fn open_door_clears_blockers() {
        let mut sim = MuseumSim::default();
        sim.click_door();
        let mut enc = Encoder::new();
        enc.encode(&sim);
        assert_eq!(enc.as_slice()[DOOR_OPEN], 1.0);
        assert_eq!(enc.as_slice()[BLOCKERS], 0.0);
    }
}
