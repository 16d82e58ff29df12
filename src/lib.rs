//! Physics Stage - a 2D rigid-body world hosted inside a page region
//!
//! Architecture:
//! - core/        - Math, geometry, errors, logging
//! - domain/      - Stage configuration
//! - systems/     - Bodies, engine, walls, debug overlay
//! - simulation/  - The stage host (lifecycle, frame loop, child slots)
//! - api/         - Public wasm-bindgen API

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logging(log::LevelFilter::Info);
    log::info!("physics stage {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::PhysicsStage;
pub use crate::core::{ContainerMetrics, StageError, Vec2};
pub use domain::{StageConfig, WallOptions};
pub use simulation::StageCore;
pub use systems::body::{Body, BodyOptions, Shape};
pub use systems::engine::{Engine, EngineOptions};
