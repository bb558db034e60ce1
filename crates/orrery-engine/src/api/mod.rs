pub mod error;
pub mod game;
pub mod options;
pub mod types;
