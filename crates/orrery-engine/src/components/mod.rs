pub mod mesh;
pub mod node;
pub mod orbital;
pub mod trail;
