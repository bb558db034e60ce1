pub mod orbit;
pub mod registry;
pub mod rng;
pub mod scene;
pub mod time;
