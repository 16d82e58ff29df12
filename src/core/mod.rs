//! Core: math, geometry, errors, logging

pub mod error;
pub mod logging;
pub mod rect;
pub mod vec2;

pub use error::StageError;
pub use rect::{Aabb, ContainerMetrics};
pub use vec2::Vec2;
