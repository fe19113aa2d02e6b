// sim/ - Walkthrough simulation
//
// Two per-frame controllers and the channel between them:
// - DoorController: proximity state machine, leaf animation
// - MovementController: WASD walking, door wall and zone collision
// - DoorSignal: door -> movement, last write wins
//
// MuseumSim owns the camera, the scene graph and the key state, and
// drives both controllers once per tick.

mod door;
mod look;
mod movement;
mod signal;

pub use door::{BLOCKER_PANELS, BlockerPanel, DoorController, DoorPhase};
pub use look::Mouselook;
pub use movement::MovementController;
pub use signal::DoorSignal;

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use tracing::debug;

use crate::camera::CameraPose;
use crate::input::KeyState;
use crate::scene::SceneConfig;
use crate::world::{NodeId, SceneGraph};

pub struct MuseumSim {
    config: SceneConfig,

    camera: CameraPose,
    keys: Rc<RefCell<KeyState>>,

    // Scene nodes the simulation reads
    graph: SceneGraph,
    front_wall: NodeId,

    signal: DoorSignal,
    door: DoorController,
    movement: MovementController,
    look: Mouselook,

    frame: u64,
}

impl MuseumSim {
    /// Build the simulation. `config` is expected to be validated.
    pub fn new(config: SceneConfig) -> Self {
        let mut graph = SceneGraph::new();
        let front_wall = graph.add_at(None, Vec3::new(0.0, 0.0, config.bounds.door_wall_z));
        let door_node = graph.add_at(Some(front_wall), config.door.local_offset);

        let signal = DoorSignal::new();
        let door = DoorController::new(door_node, &config.door, signal.clone());
        let movement = MovementController::new(&config.movement, &config.bounds, signal.clone());
        let look = Mouselook::new(&config.look);
        let camera = CameraPose::new(config.camera.spawn, config.camera.spawn_yaw);

        debug!(spawn = ?camera.position, "museum sim created");

        Self {
            config,
            camera,
            keys: Rc::new(RefCell::new(KeyState::new())),
            graph,
            front_wall,
            signal,
            door,
            movement,
            look,
            frame: 0,
        }
    }

    /// Advance one rendered frame.
    ///
    /// The door runs first, so movement sees this frame's door state while
    /// the door measures against last frame's camera.
    pub fn tick(&mut self, dt: f32) {
        let dt = frame_dt(dt);
        self.frame += 1;

        self.door.update(&self.graph, self.camera.position, dt);

        let keys = self.keys.borrow();
        self.movement.update(&keys, &mut self.camera, dt);
    }

    /// Put the camera back at the spawn pose and release every key.
    /// Door state is left alone.
    pub fn respawn(&mut self) {
        self.camera = CameraPose::new(self.config.camera.spawn, self.config.camera.spawn_yaw);
        self.keys.borrow_mut().release_all();
    }

    // Input

    /// Apply a DOM key event by `KeyboardEvent.code`.
    pub fn key_event(&mut self, code: &str, down: bool) -> bool {
        self.keys.borrow_mut().apply_code(code, down)
    }

    /// Shared handle for listeners that write key state directly.
    pub fn keys_handle(&self) -> Rc<RefCell<KeyState>> {
        Rc::clone(&self.keys)
    }

    pub fn set_pointer_locked(&mut self, locked: bool) {
        self.look.set_locked(locked);
    }

    pub fn mouse_move(&mut self, dx: f32, dy: f32) -> bool {
        self.look.apply(&mut self.camera, dx, dy)
    }

    /// Pointer click on the door.
    pub fn click_door(&mut self) {
        self.door.toggle();
    }

    // Accessors

    pub fn camera(&self) -> &CameraPose {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraPose {
        &mut self.camera
    }

    pub fn door(&self) -> &DoorController {
        &self.door
    }

    pub fn door_signal(&self) -> &DoorSignal {
        &self.signal
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// The host mounts and unmounts scene nodes through this.
    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    pub fn front_wall(&self) -> NodeId {
        self.front_wall
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn is_pointer_locked(&self) -> bool {
        self.look.is_locked()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for MuseumSim {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

/// Elapsed time usable for integration: negative, NaN and infinite
/// readings become zero.
#[inline]
pub fn frame_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}
