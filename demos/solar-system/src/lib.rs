use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod bodies;
mod catalog;
mod game;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");

/// Current display options as JSON, for the options panel.
#[wasm_bindgen]
pub fn get_options_json() -> String {
    with_runner(|r| r.game().options().to_json()).unwrap_or_else(|| "{}".to_string())
}
