// world/ - Geometry queries
//
// Pure functions and plain data describing where things are.
// No per-frame state lives here.

mod graph;
mod zone;

pub use graph::*;
pub use zone::*;
