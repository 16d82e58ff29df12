//! Body - a rigid shape tracked by the engine world
//!
//! Shapes are axis-aligned for collision purposes. `angle` is integrated
//! from `angular_velocity` and shown by the debug overlay, but does not
//! rotate the collision box.

mod body;
mod shape;

pub use body::{Body, BodyOptions};
pub use shape::Shape;
