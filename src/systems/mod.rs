//! Systems: bodies, the engine, walls and the debug overlay

pub mod body;
pub mod debug_render;
pub mod engine;
pub mod walls;
