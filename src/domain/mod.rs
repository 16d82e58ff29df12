//! Domain: stage configuration

pub mod config;

pub use config::{StageConfig, WallOptions};
