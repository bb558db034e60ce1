// extensions/mod.rs
//
// Scene-graph helpers that sit on top of the arena: world-transform
// propagation and camera-facing labels. The arena itself stays a plain
// container; these run once per tick from the runner.

pub mod transform;

pub use transform::{look_rotation, orient_billboards, propagate};
