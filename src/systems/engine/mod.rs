//! Engine - owns the world and advances it one step at a time
//!
//! Step order:
//! 1. sleeping pass (when enabled)
//! 2. gravity as a force on every awake dynamic body
//! 3. integration (air friction, position, angle)
//! 4. contact detection
//! 5. wake sleepers touched by moving bodies (when enabled)
//! 6. positional correction and impulses
//! 7. clear accumulated forces

pub mod collision;
pub mod sleeping;
mod world;

pub use collision::Contact;
pub use world::World;

use crate::core::Vec2;
use crate::systems::body::Body;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Duration of one display frame at 60 Hz, in milliseconds
pub const BASE_DELTA: f32 = 1000.0 / 60.0;
/// Converts configured gravity into acceleration per ms²
pub const DEFAULT_GRAVITY_SCALE: f32 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gravity {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineOptions {
    pub gravity: Vec2,
    pub gravity_scale: f32,
    pub enable_sleeping: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 1.0),
            gravity_scale: DEFAULT_GRAVITY_SCALE,
            enable_sleeping: false,
        }
    }
}

/// Simulation clock
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Timing {
    /// Total simulated time (ms)
    pub timestamp: f64,
    pub last_delta: f32,
}

pub struct Engine {
    pub world: World,
    pub gravity: Gravity,
    enable_sleeping: bool,
    timing: Timing,
    steps: u64,
    last_contacts: usize,
}

impl Engine {
    pub fn create(options: EngineOptions) -> Self {
        Self {
            world: World::new(),
            gravity: Gravity {
                x: options.gravity.x,
                y: options.gravity.y,
                scale: options.gravity_scale,
            },
            enable_sleeping: options.enable_sleeping,
            timing: Timing::default(),
            steps: 0,
            last_contacts: 0,
        }
    }

    pub fn enable_sleeping(&self) -> bool {
        self.enable_sleeping
    }

    /// Turning sleeping off wakes every sleeping body
    pub fn set_enable_sleeping(&mut self, enabled: bool) {
        self.enable_sleeping = enabled;
        if !enabled {
            for body in self.world.bodies_mut().iter_mut() {
                body.set_sleeping(false, sleeping::SLEEP_THRESHOLD);
            }
        }
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.gravity.x = x;
        self.gravity.y = y;
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Number of completed steps
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Contacts found during the last step
    pub fn last_contacts(&self) -> usize {
        self.last_contacts
    }

    /// Advance one step of `BASE_DELTA`
    pub fn update(&mut self) {
        self.update_with_delta(BASE_DELTA);
    }

    pub fn update_with_delta(&mut self, delta: f32) {
        let time_factor = delta / BASE_DELTA;
        let delta_squared = delta * delta;
        let gravity = Vec2::new(self.gravity.x, self.gravity.y) * self.gravity.scale;
        let sleeping_on = self.enable_sleeping;

        let bodies = self.world.bodies_mut();

        if sleeping_on {
            sleeping::update(bodies, time_factor);
        }

        apply_gravity(bodies, gravity);
        integrate_all(bodies, delta_squared, time_factor);

        let contacts = collision::detect(bodies);
        if sleeping_on {
            sleeping::after_collisions(bodies, &contacts, time_factor);
        }
        collision::resolve(bodies, &contacts);

        for body in bodies.iter_mut() {
            body.force = Vec2::zero();
            body.torque = 0.0;
        }

        self.last_contacts = contacts.len();
        self.timing.timestamp += delta as f64;
        self.timing.last_delta = delta;
        self.steps += 1;
    }
}

fn apply_gravity(bodies: &mut [Body], gravity: Vec2) {
    if gravity.is_zero() {
        return;
    }
    for body in bodies.iter_mut() {
        if body.is_frozen() {
            continue;
        }
        body.force += gravity * body.mass;
    }
}

#[cfg(feature = "parallel")]
fn integrate_all(bodies: &mut [Body], delta_squared: f32, time_factor: f32) {
    bodies
        .par_iter_mut()
        .for_each(|body| integrate(body, delta_squared, time_factor));
}

#[cfg(not(feature = "parallel"))]
fn integrate_all(bodies: &mut [Body], delta_squared: f32, time_factor: f32) {
    for body in bodies.iter_mut() {
        integrate(body, delta_squared, time_factor);
    }
}

#[inline]
fn integrate(body: &mut Body, delta_squared: f32, time_factor: f32) {
    if body.is_frozen() {
        return;
    }
    let damping = 1.0 - body.friction_air * time_factor;
    body.velocity = body.velocity * damping + body.force * (body.inverse_mass * delta_squared);
    body.angular_velocity =
        body.angular_velocity * damping + body.torque * body.inverse_inertia * delta_squared;
    body.position += body.velocity;
    body.angle += body.angular_velocity;
}
