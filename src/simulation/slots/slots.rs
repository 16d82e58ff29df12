use crate::systems::engine::World;

/// Inline style of the stage container
pub const CONTAINER_STYLE: [(&str, &str); 3] = [
    ("height", "100%"),
    ("width", "100%"),
    ("overflow", "hidden"),
];

/// Inline style of every child wrapper. Wrappers stay hidden; a sibling
/// layer positions visible copies from the slot transforms.
pub const SLOT_STYLE: [(&str, &str); 2] = [
    ("position", "absolute"),
    ("visibility", "hidden"),
];

/// Pose of a bound slot's body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotTransform {
    pub slot: u32,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

/// One hidden wrapper per child, optionally bound to a body
#[derive(Debug, Default)]
pub struct ChildSlots {
    bindings: Vec<Option<u32>>,
}

impl ChildSlots {
    pub fn new(count: usize) -> Self {
        Self { bindings: vec![None; count] }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns false when `slot` is out of range
    pub fn bind(&mut self, slot: usize, body_id: u32) -> bool {
        match self.bindings.get_mut(slot) {
            Some(binding) => {
                *binding = Some(body_id);
                true
            }
            None => false,
        }
    }

    pub fn unbind_body(&mut self, body_id: u32) {
        for binding in self.bindings.iter_mut() {
            if *binding == Some(body_id) {
                *binding = None;
            }
        }
    }

    pub fn body_for(&self, slot: usize) -> Option<u32> {
        self.bindings.get(slot).copied().flatten()
    }

    /// Transforms of every bound slot whose body still exists
    pub fn transforms(&self, world: &World) -> Vec<SlotTransform> {
        self.bindings
            .iter()
            .enumerate()
            .filter_map(|(slot, binding)| {
                let body = world.get((*binding)?)?;
                Some(SlotTransform {
                    slot: slot as u32,
                    x: body.position.x,
                    y: body.position.y,
                    angle: body.angle,
                })
            })
            .collect()
    }
}
