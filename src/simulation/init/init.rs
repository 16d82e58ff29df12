use crate::domain::StageConfig;
use crate::systems::engine::{Engine, EngineOptions, DEFAULT_GRAVITY_SCALE};
use crate::core::Vec2;

use super::frame_loop::FrameLoop;
use super::perf_stats::PerfStats;
use super::slots::ChildSlots;
use super::{Lifecycle, StageCore};

pub(super) fn engine_options(config: &StageConfig) -> EngineOptions {
    // Gravity is handed over as configured, no range checks.
    EngineOptions {
        gravity: Vec2::new(config.grav_x, config.grav_y),
        gravity_scale: DEFAULT_GRAVITY_SCALE,
        enable_sleeping: config.sleeping,
    }
}

pub(super) fn create_stage_core(config: StageConfig) -> StageCore {
    let engine = Engine::create(engine_options(&config));
    log::debug!(
        "stage engine created: gravity=({}, {}) sleeping={} debug={}",
        config.grav_x,
        config.grav_y,
        config.sleeping,
        config.debug
    );
    StageCore {
        config,
        engine,
        renderer: None,
        frame_loop: FrameLoop::new(),
        lifecycle: Lifecycle::Created,
        walls: Vec::new(),
        slots: ChildSlots::default(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
