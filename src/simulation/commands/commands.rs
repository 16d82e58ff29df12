use crate::systems::body::{Body, BodyOptions};

use super::StageCore;

pub(super) fn spawn_rectangle(stage: &mut StageCore, x: f32, y: f32, w: f32, h: f32) -> u32 {
    stage
        .engine
        .world
        .add(Body::rectangle(x, y, w, h, BodyOptions::default().labelled("rectangle")))
}

pub(super) fn spawn_circle(stage: &mut StageCore, x: f32, y: f32, radius: f32) -> u32 {
    stage
        .engine
        .world
        .add(Body::circle(x, y, radius, BodyOptions::default().labelled("circle")))
}

/// Walls are part of the stage frame and cannot be removed here
pub(super) fn remove_body(stage: &mut StageCore, id: u32) -> bool {
    if stage.walls.contains(&id) {
        return false;
    }
    match stage.engine.world.remove(id) {
        Some(_) => {
            stage.slots.unbind_body(id);
            true
        }
        None => false,
    }
}

pub(super) fn bind_child(stage: &mut StageCore, slot: usize, body_id: u32) -> bool {
    if stage.engine.world.get(body_id).is_none() {
        return false;
    }
    stage.slots.bind(slot, body_id)
}
