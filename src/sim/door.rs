// door.rs - Proximity door with two swinging leaves
//
// Opens when the camera comes within `open_distance` of the door anchor,
// closes once it is farther than `close_distance`. The gap between the two
// keeps the door from flapping while the player lingers at the edge.
//
// Every frame the door publishes its state on the shared signal, then
// eases both leaves toward their target angle.

use glam::Vec3;
use tracing::{debug, info, trace};

use super::{DoorSignal, frame_dt};
use crate::scene::DoorConfig;
use crate::world::{NodeId, SceneGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorPhase {
    Closed,
    Open,
}

/// Invisible panel filling one half of the doorway while the door is
/// closed. Renderer bookkeeping only: the wall check in movement does the
/// actual blocking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockerPanel {
    /// Center, relative to the door anchor.
    pub offset: Vec3,
    pub size: Vec3,
    pub opacity: f32,
}

pub static BLOCKER_PANELS: [BlockerPanel; 2] = [
    BlockerPanel { offset: Vec3::new(-1.3, 1.2, 0.05), size: Vec3::new(1.3, 2.4, 0.1), opacity: 0.0 },
    BlockerPanel { offset: Vec3::new(1.3, 1.2, 0.05), size: Vec3::new(1.3, 2.4, 0.1), opacity: 0.0 },
];

pub struct DoorController {
    anchor: NodeId,
    phase: DoorPhase,

    // Leaf rotations about Y (radians). Left opens positive, right negative.
    left: f32,
    right: f32,

    open_distance: f32,
    close_distance: f32,
    smoothing_rate: f32,
    open_angle: f32,

    signal: DoorSignal,
}

impl DoorController {
    pub fn new(anchor: NodeId, cfg: &DoorConfig, signal: DoorSignal) -> Self {
        Self {
            anchor,
            phase: DoorPhase::Closed,
            left: 0.0,
            right: 0.0,
            open_distance: cfg.open_distance,
            close_distance: cfg.close_distance,
            smoothing_rate: cfg.smoothing_rate,
            open_angle: cfg.leaf_open_angle,
            signal,
        }
    }

    pub fn anchor(&self) -> NodeId {
        self.anchor
    }

    pub fn phase(&self) -> DoorPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == DoorPhase::Open
    }

    /// Current (left, right) leaf angles.
    pub fn leaf_angles(&self) -> (f32, f32) {
        (self.left, self.right)
    }

    /// (left, right) angles the leaves are easing toward.
    pub fn targets(&self) -> (f32, f32) {
        match self.phase {
            DoorPhase::Open => (self.open_angle, -self.open_angle),
            DoorPhase::Closed => (0.0, 0.0),
        }
    }

    /// Blocker panels present this frame: both while closed, none while open.
    pub fn blockers(&self) -> &'static [BlockerPanel] {
        match self.phase {
            DoorPhase::Closed => &BLOCKER_PANELS,
            DoorPhase::Open => &[],
        }
    }

    /// Manual override (a click on a leaf or the door hit area).
    ///
    /// Takes effect now, but the proximity rule still runs next frame and
    /// wins whenever its threshold disagrees.
    pub fn toggle(&mut self) {
        self.phase = match self.phase {
            DoorPhase::Open => DoorPhase::Closed,
            DoorPhase::Closed => DoorPhase::Open,
        };
        self.signal.publish(self.is_open());
        info!(phase = ?self.phase, "door toggled by hand");
    }

    /// Run one frame. Skips entirely if the anchor node isn't mounted.
    /// A zero, negative or non-finite `dt` leaves the leaves where they are.
    pub fn update(&mut self, graph: &SceneGraph, camera: Vec3, dt: f32) {
        let dt = frame_dt(dt);
        let Some(anchor) = graph.world_position(self.anchor) else {
            trace!("door anchor not mounted, skipping frame");
            return;
        };

        self.apply_distance(camera.distance(anchor));
        self.signal.publish(self.is_open());

        let (left_target, right_target) = self.targets();
        let k = (self.smoothing_rate * dt).min(1.0);
        self.left += (left_target - self.left) * k;
        self.right += (right_target - self.right) * k;
    }

    fn apply_distance(&mut self, distance: f32) {
        match self.phase {
            DoorPhase::Closed if distance < self.open_distance => {
                self.phase = DoorPhase::Open;
                debug!(distance, "door opening");
            }
            DoorPhase::Open if distance > self.close_distance => {
                self.phase = DoorPhase::Closed;
                debug!(distance, "door closing");
            }
            _ => {}
        }
    }
}
