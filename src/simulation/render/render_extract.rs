use super::StageCore;

/// Floats per body in the transform buffer: id, x, y, angle
pub const BODY_STRIDE: usize = 4;

/// Flat `[id, x, y, angle]` records of every non-static body
pub(super) fn body_transforms(stage: &StageCore) -> Vec<f32> {
    let bodies = stage.engine.world.bodies();
    let mut out = Vec::with_capacity(bodies.len() * BODY_STRIDE);
    for body in bodies.iter().filter(|b| !b.is_static) {
        out.push(body.id as f32);
        out.push(body.position.x);
        out.push(body.position.y);
        out.push(body.angle);
    }
    out
}

/// Flat `[slot, x, y, angle]` records of every bound slot
pub(super) fn slot_transforms(stage: &StageCore) -> Vec<f32> {
    let transforms = stage.slots.transforms(&stage.engine.world);
    let mut out = Vec::with_capacity(transforms.len() * BODY_STRIDE);
    for t in transforms {
        out.extend_from_slice(&[t.slot as f32, t.x, t.y, t.angle]);
    }
    out
}
