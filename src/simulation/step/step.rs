use super::{timed, StageCore};

/// One delivered display frame
pub(super) fn tick(stage: &mut StageCore) -> bool {
    if !stage.frame_loop.on_frame() {
        return false;
    }

    if !stage.perf_enabled {
        stage.engine.update();
        if let Some(renderer) = stage.renderer.as_mut() {
            renderer.render(&stage.engine);
        }
        return true;
    }

    stage.perf_stats.reset();
    let ((), step_ms) = timed(|| stage.engine.update());
    stage.perf_stats.step_ms = step_ms;

    if let Some(renderer) = stage.renderer.as_mut() {
        let engine = &stage.engine;
        let ((), render_ms) = timed(|| {
            renderer.render(engine);
        });
        stage.perf_stats.render_ms = render_ms;
    }

    let world = &stage.engine.world;
    stage.perf_stats.bodies = world.len() as u32;
    stage.perf_stats.static_bodies = world.static_count() as u32;
    stage.perf_stats.sleeping_bodies = world.sleeping_count() as u32;
    stage.perf_stats.contacts = stage.engine.last_contacts() as u32;
    stage.perf_stats.frame = stage.engine.steps();

    true
}
