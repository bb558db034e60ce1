pub mod lighting;
pub mod motion;
pub mod picking;
pub mod render;
pub mod trail;
