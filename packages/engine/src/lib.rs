//! Physisynth Engine - bodies, collisions and voices for the sound toy in WASM
//!
//! Architecture:
//! - core/        - Logging macros shared by every layer
//! - domain/      - Shapes, materials, voices and the material registry
//! - controls/    - Body controls record and the control panel manifest
//! - systems/     - Body factory, rigid bodies and the collision step loop
//! - simulation/  - WorldCore orchestration and the wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod controls;
pub mod systems;
pub mod simulation;

// Compatibility re-exports
pub use domain::content;
pub use domain::materials;
pub use domain::shapes;
pub use domain::voice;
pub use systems::body_factory;
pub use systems::body_system;
pub use systems::rigid_body;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Physisynth WASM Engine initialized ({})", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use simulation::World;
pub use domain::materials::MaterialKind;
pub use domain::shapes::ShapeKind;
