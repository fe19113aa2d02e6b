// web.rs - Document keyboard listeners
//
// Listeners are held by a guard: registering returns a KeyboardBinding,
// dropping it removes both listeners. Nothing stays attached to the
// document once the world that owns the binding is gone.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, KeyboardEvent};

use crate::input::KeyState;

type KeyHandler = Closure<dyn FnMut(KeyboardEvent)>;

pub struct KeyboardBinding {
    target: EventTarget,
    on_down: KeyHandler,
    on_up: KeyHandler,
}

impl KeyboardBinding {
    /// Subscribe keydown/keyup on the document, writing into `keys`.
    pub fn attach(keys: Rc<RefCell<KeyState>>) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document to listen on"))?;

        let binding = Self {
            target: document.into(),
            on_down: handler(Rc::clone(&keys), true),
            on_up: handler(keys, false),
        };

        // On error `binding` drops here and removes whatever was added.
        binding
            .target
            .add_event_listener_with_callback("keydown", binding.on_down.as_ref().unchecked_ref())?;
        binding
            .target
            .add_event_listener_with_callback("keyup", binding.on_up.as_ref().unchecked_ref())?;

        debug!("keyboard listeners attached");
        Ok(binding)
    }
}

impl Drop for KeyboardBinding {
    fn drop(&mut self) {
        // Removing a listener that was never added is a no-op.
        let _ = self
            .target
            .remove_event_listener_with_callback("keydown", self.on_down.as_ref().unchecked_ref());
        let _ = self
            .target
            .remove_event_listener_with_callback("keyup", self.on_up.as_ref().unchecked_ref());
        debug!("keyboard listeners released");
    }
}

fn handler(keys: Rc<RefCell<KeyState>>, down: bool) -> KeyHandler {
    Closure::new(move |event: KeyboardEvent| {
        keys.borrow_mut().apply_code(&event.code(), down);
    })
}
