// scene/ - Museum layout and tuning
//
// Everything the simulation needs to know about the room:
// - Spawn pose and field of view
// - Room bounds and the door wall
// - Door anchor and proximity thresholds
// - Walking speed and eye height
//
// Values come from `SceneConfig`; defaults match the shipped museum.

mod config;

pub use config::*;
