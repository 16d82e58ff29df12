use crate::systems::body::Body;

/// All bodies managed by one engine
pub struct World {
    bodies: Vec<Body>,
    next_id: u32,
}

impl World {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Insert a body and return its id
    pub fn add(&mut self, mut body: Body) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Insert a batch of bodies in order
    pub fn add_all(&mut self, bodies: Vec<Body>) -> Vec<u32> {
        self.bodies.reserve(bodies.len());
        bodies.into_iter().map(|body| self.add(body)).collect()
    }

    pub fn remove(&mut self, id: u32) -> Option<Body> {
        let idx = self.bodies.iter().position(|b| b.id == id)?;
        // Keep insertion order: resolution order depends on it.
        Some(self.bodies.remove(idx))
    }

    /// Remove all bodies. Ids keep counting up.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn get(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut Vec<Body> {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn static_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_static).count()
    }

    pub fn sleeping_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_sleeping).count()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
