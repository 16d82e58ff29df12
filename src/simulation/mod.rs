//! Stage - hosts one physics world inside a page container
//!
//! Lifecycle: `new` builds the engine from config, `mount` adds the walls
//! for the measured container (plus the debug overlay when asked) and
//! starts the frame loop, `tick` advances one step per delivered frame,
//! `unmount` cancels the loop.
//!
//! Everything here is plain Rust; the browser wiring lives in `api::wasm`.

use crate::core::{ContainerMetrics, StageError};
use crate::domain::StageConfig;
use crate::systems::debug_render::{DebugRenderer, DrawCommand};
use crate::systems::engine::Engine;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "frame/frame_loop.rs"]
mod frame_loop;
#[path = "slots/slots.rs"]
mod slots;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "mount/mount.rs"]
mod mount;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;

pub use frame_loop::{FrameLoop, LoopState};
pub use perf_stats::PerfStats;
pub use render_extract::BODY_STRIDE;
pub use slots::{ChildSlots, SlotTransform, CONTAINER_STYLE, SLOT_STYLE};

use perf_timer::timed;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

/// The simulation host
pub struct StageCore {
    config: StageConfig,
    engine: Engine,
    renderer: Option<DebugRenderer>,
    frame_loop: FrameLoop,
    lifecycle: Lifecycle,
    /// Ids of the boundary walls, in top, bottom, left, right order
    walls: Vec<u32>,
    slots: ChildSlots,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl StageCore {
    /// Build the engine from config. Nothing is added to the world yet.
    pub fn new(config: StageConfig) -> Self {
        init::create_stage_core(config)
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Build walls, attach the debug overlay and start the frame loop.
    ///
    /// Returns `Ok(false)` without touching anything when the container is
    /// not available. A stage mounts at most once.
    pub fn mount(&mut self, container: Option<ContainerMetrics>) -> Result<bool, StageError> {
        mount::mount(self, container)
    }

    /// `Err(AlreadyMounted)` once the stage has been mounted, even after
    /// `unmount`. Callers that prepare the page first check this up front.
    pub fn ensure_mountable(&self) -> Result<(), StageError> {
        mount::ensure_mountable(self)
    }

    /// Cancel the frame loop and stop the overlay. Idempotent.
    pub fn unmount(&mut self) {
        mount::unmount(self)
    }

    /// Body of the frame callback: one engine step per delivered frame.
    /// Returns whether the next frame should be requested.
    pub fn tick(&mut self) -> bool {
        step::tick(self)
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    pub fn renderer(&self) -> Option<&DebugRenderer> {
        self.renderer.as_ref()
    }

    /// Draw list produced by the last tick (empty without a running overlay)
    pub fn debug_commands(&self) -> &[DrawCommand] {
        self.renderer.as_ref().map(|r| r.commands()).unwrap_or(&[])
    }

    pub fn wall_ids(&self) -> &[u32] {
        &self.walls
    }

    /// Completed engine steps
    pub fn frame(&self) -> u64 {
        self.engine.steps()
    }

    pub fn body_count(&self) -> usize {
        self.engine.world.len()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === BODY API ===

    /// Add a dynamic rectangle centred at (x, y); returns its id
    pub fn spawn_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        commands::spawn_rectangle(self, x, y, w, h)
    }

    /// Add a dynamic circle centred at (x, y); returns its id
    pub fn spawn_circle(&mut self, x: f32, y: f32, radius: f32) -> u32 {
        commands::spawn_circle(self, x, y, radius)
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        commands::remove_body(self, id)
    }

    // === CHILD SLOTS ===

    /// Reset the slot table to `count` unbound wrappers
    pub fn set_children(&mut self, count: usize) {
        self.slots = ChildSlots::new(count);
    }

    pub fn slots(&self) -> &ChildSlots {
        &self.slots
    }

    pub fn bind_child(&mut self, slot: usize, body_id: u32) -> bool {
        commands::bind_child(self, slot, body_id)
    }

    pub fn slot_transforms(&self) -> Vec<f32> {
        render_extract::slot_transforms(self)
    }

    pub fn body_transforms(&self) -> Vec<f32> {
        render_extract::body_transforms(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
