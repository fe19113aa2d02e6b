use wasm_bindgen::prelude::*;

// ============================================================================
// MUSEUM WORLD - First-person walkthrough with a proximity door
// ============================================================================

pub mod camera;
pub mod error;
pub mod input;
pub mod render;
pub mod scene;
pub mod sim;
pub mod world;

#[cfg(target_arch = "wasm32")]
mod web;

use render::Encoder;
use scene::SceneConfig;
use sim::MuseumSim;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

#[wasm_bindgen]
pub struct MuseumWorld {
    sim: MuseumSim,
    encoder: Encoder,

    #[cfg(target_arch = "wasm32")]
    keyboard: Option<web::KeyboardBinding>,
}

#[wasm_bindgen]
impl MuseumWorld {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_sim(MuseumSim::default())
    }

    /// Build from a JSON scene config. Missing fields use the defaults.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<MuseumWorld, JsValue> {
        let cfg = SceneConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_sim(MuseumSim::new(cfg)))
    }

    /// Advance one frame. `dt` is seconds since the previous frame.
    pub fn tick(&mut self, dt: f32) {
        self.sim.tick(dt);
        self.encoder.encode(&self.sim);
    }

    pub fn key_down(&mut self, code: &str) -> bool {
        self.sim.key_event(code, true)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.sim.key_event(code, false)
    }

    pub fn mouse_move(&mut self, dx: f32, dy: f32) {
        if self.sim.mouse_move(dx, dy) {
            self.encoder.encode(&self.sim);
        }
    }

    pub fn set_pointer_locked(&mut self, locked: bool) {
        self.sim.set_pointer_locked(locked);
    }

    pub fn click_door(&mut self) {
        self.sim.click_door();
        self.encoder.encode(&self.sim);
    }

    pub fn respawn(&mut self) {
        self.sim.respawn();
        self.encoder.encode(&self.sim);
    }

    /// Mount or unmount the door (e.g. while its model is still loading).
    pub fn set_door_mounted(&mut self, mounted: bool) {
        let anchor = self.sim.door().anchor();
        self.sim.graph_mut().set_mounted(anchor, mounted);
    }

    /// Whether the door and every node above it are in the scene.
    pub fn door_mounted(&self) -> bool {
        let anchor = self.sim.door().anchor();
        self.sim.graph().is_mounted(anchor)
    }

    // Frame packet, see render.rs for the layout
    pub fn output_ptr(&self) -> *const f32 { self.encoder.ptr() }
    pub fn output_len(&self) -> usize { self.encoder.len() }
    pub fn frame(&self) -> js_sys::Float32Array { js_sys::Float32Array::from(self.encoder.as_slice()) }

    pub fn door_open(&self) -> bool { self.sim.door().is_open() }
    pub fn fov_deg(&self) -> f32 { self.sim.config().camera.fov_deg }
}

impl MuseumWorld {
    fn from_sim(sim: MuseumSim) -> Self {
        let mut encoder = Encoder::new();
        encoder.encode(&sim);
        Self {
            sim,
            encoder,
            #[cfg(target_arch = "wasm32")]
            keyboard: None,
        }
    }

    pub fn sim(&self) -> &MuseumSim {
        &self.sim
    }
}

impl Default for MuseumWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl MuseumWorld {
    /// Listen for WASD on the document. Replaces any earlier binding.
    pub fn attach_keyboard(&mut self) -> Result<(), JsValue> {
        self.keyboard = None;
        self.keyboard = Some(web::KeyboardBinding::attach(self.sim.keys_handle())?);
        Ok(())
    }

    pub fn detach_keyboard(&mut self) {
        self.keyboard = None;
    }
}
