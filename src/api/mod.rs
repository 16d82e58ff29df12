//! Public API: the browser-facing stage

pub mod canvas;
pub mod raf;
pub mod wasm;
