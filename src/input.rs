// input.rs - Keyboard state
//
// Key-down sets a key, key-up clears it. Movement reads the set once per
// frame. Codes follow `KeyboardEvent.code`, so the layout is physical.

const KEY_COUNT: usize = 6;

/// Logical keys the walkthrough listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Forward,
    Back,
    Left,
    Right,
    // Tracked but not bound to any movement.
    Jump,
    Sprint,
}

impl Key {
    pub const ALL: [Key; KEY_COUNT] = [Key::Forward, Key::Back, Key::Left, Key::Right, Key::Jump, Key::Sprint];

    /// Map a DOM `KeyboardEvent.code` to a key.
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "KeyW" => Some(Key::Forward),
            "KeyS" => Some(Key::Back),
            "KeyA" => Some(Key::Left),
            "KeyD" => Some(Key::Right),
            "Space" => Some(Key::Jump),
            "ShiftLeft" => Some(Key::Sprint),
            _ => None,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Pressed-set, all released initially.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    pressed: [bool; KEY_COUNT],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, down: bool) {
        self.pressed[key.index()] = down;
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    #[inline]
    pub fn is_down(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// Apply a DOM key event. Returns false for codes we don't track.
    pub fn apply_code(&mut self, code: &str, down: bool) -> bool {
        match Key::from_code(code) {
            Some(key) => {
                self.set(key, down);
                true
            }
            None => false,
        }
    }

    pub fn release_all(&mut self) {
        self.pressed = [false; KEY_COUNT];
    }
}
