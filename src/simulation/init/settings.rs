use super::perf_stats::PerfStats;
use super::StageCore;

pub(super) fn enable_perf_metrics(stage: &mut StageCore, enabled: bool) {
    stage.perf_enabled = enabled;
    if !enabled {
        stage.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(stage: &StageCore) -> PerfStats {
    stage.perf_stats.clone()
}

pub(super) fn set_gravity(stage: &mut StageCore, x: f32, y: f32) {
    stage.config.grav_x = x;
    stage.config.grav_y = y;
    stage.engine.set_gravity(x, y);
}
