use crate::core::{ContainerMetrics, StageError};
use crate::systems::debug_render::{DebugRenderer, RenderOptions};
use crate::systems::walls::make_walls;

use super::{Lifecycle, StageCore};

pub(super) fn ensure_mountable(stage: &StageCore) -> Result<(), StageError> {
    match stage.lifecycle {
        Lifecycle::Created => Ok(()),
        Lifecycle::Mounted | Lifecycle::Unmounted => Err(StageError::AlreadyMounted),
    }
}

pub(super) fn mount(stage: &mut StageCore, container: Option<ContainerMetrics>) -> Result<bool, StageError> {
    ensure_mountable(stage)?;
    let Some(metrics) = container else {
        log::warn!("stage mount skipped: container not available");
        return Ok(false);
    };

    let walls = make_walls(&metrics, &stage.config.wall_options);
    stage.walls = stage.engine.world.add_all(walls);

    if stage.config.debug {
        let mut renderer = DebugRenderer::create(RenderOptions::overlay(
            metrics.client_width,
            metrics.client_height,
        ));
        renderer.run();
        stage.renderer = Some(renderer);
    }

    stage.frame_loop.start();
    stage.lifecycle = Lifecycle::Mounted;

    log::info!(
        "stage mounted: {}x{} walls={} debug={}",
        metrics.width,
        metrics.height,
        stage.walls.len(),
        stage.renderer.is_some()
    );
    Ok(true)
}

pub(super) fn unmount(stage: &mut StageCore) {
    if stage.lifecycle != Lifecycle::Mounted {
        return;
    }
    stage.frame_loop.cancel();
    if let Some(renderer) = stage.renderer.as_mut() {
        renderer.stop();
    }
    stage.lifecycle = Lifecycle::Unmounted;
    log::info!("stage unmounted after {} steps", stage.engine.steps());
}
