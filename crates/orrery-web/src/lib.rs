pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
/// use orrery_web::GameRunner;
///
/// mod game;
/// use game::MyGame;
///
/// orrery_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: a type implementing `orrery_engine::Game` with a
///   `fn new(query: &str) -> Self` constructor (the page's query string)
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        /// Run `f` against the runner. `None` before `game_init` has succeeded.
        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
        }

        #[wasm_bindgen]
        pub fn game_init(query: &str) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            web_sys::console::time_with_label($game_name);
            let mut runner = $crate::GameRunner::new(<$game_type>::new(query));
            let result = runner.init();
            web_sys::console::time_end_with_label($game_name);

            if let Err(err) = result {
                log::error!("{}: init failed: {}", $game_name, err);
                return Err(JsValue::from_str(&err.to_string()));
            }

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $game_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.pointer_move(x, y));
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Hover ----

        #[wasm_bindgen]
        pub fn get_hover_node() -> f32 {
            with_runner(|r| r.hover_node()).unwrap_or(-1.0)
        }

        #[wasm_bindgen]
        pub fn get_hover_name() -> String {
            with_runner(|r| r.hover().map(|p| p.target.name.clone()))
                .flatten()
                .unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_hover_details() -> String {
            with_runner(|r| r.hover().map(|p| p.target.detail_text()))
                .flatten()
                .unwrap_or_default()
        }

        // ---- Geometry that does not fit the fixed instance stride ----

        /// Local-space points of a line-loop node (x, y, z triples).
        #[wasm_bindgen]
        pub fn get_line_points(node: u32) -> js_sys::Float32Array {
            let points: Vec<f32> = with_runner(|r| match r.ctx().scene.get(NodeId(node)) {
                Some(SceneNode { mesh: Some(MeshComponent { shape: MeshShape::LineLoop { points }, .. }), .. }) => {
                    points.iter().flat_map(|p| p.to_array()).collect()
                }
                _ => Vec::new(),
            })
            .unwrap_or_default();
            js_sys::Float32Array::from(points.as_slice())
        }

        #[wasm_bindgen]
        pub fn get_label_text(node: u32) -> String {
            with_runner(|r| match r.ctx().scene.get(NodeId(node)) {
                Some(SceneNode { mesh: Some(MeshComponent { shape: MeshShape::Label { text, .. }, .. }), .. }) => {
                    text.clone()
                }
                _ => String::new(),
            })
            .unwrap_or_default()
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_instance_nodes_ptr() -> *const u32 {
            with_runner(|r| r.instance_nodes_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_tick_count() -> f64 {
            with_runner(|r| r.tick_count() as f64).unwrap_or(0.0)
        }

        // ---- Lighting accessors ----

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_ambient() -> js_sys::Float32Array {
            let ambient = with_runner(|r| r.ambient()).unwrap_or([0.0; 3]);
            js_sys::Float32Array::from(&ambient[..])
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
        }
    };
}
