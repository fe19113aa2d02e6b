// signal.rs - Door open/closed channel
//
// The door writes once per frame, movement reads once per frame. Clones
// share one cell: last write wins, no queueing, no locking. Everything
// runs on the host's single frame thread.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct DoorSignal(Rc<Cell<bool>>);

impl DoorSignal {
    /// New channel reporting closed.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn publish(&self, open: bool) {
        self.0.set(open);
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.0.get()
    }
}
