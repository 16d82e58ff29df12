use crate::core::{Aabb, Vec2};

use super::shape::Shape;

/// Default material density (mass per square unit)
pub const DEFAULT_DENSITY: f32 = 0.001;

/// Construction options; defaults match a light, slightly bouncy body
#[derive(Clone, Debug)]
pub struct BodyOptions {
    pub is_static: bool,
    pub density: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    pub friction: f32,
    /// Fraction of velocity lost each step
    pub friction_air: f32,
    pub label: String,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            is_static: false,
            density: DEFAULT_DENSITY,
            restitution: 0.0,
            friction: 0.1,
            friction_air: 0.01,
            label: String::from("body"),
        }
    }
}

impl BodyOptions {
    pub fn fixed() -> Self {
        Self { is_static: true, ..Self::default() }
    }

    pub fn labelled(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }
}

/// Rigid body - moves as a unit
#[derive(Clone, Debug)]
pub struct Body {
    /// Unique id, assigned by the world on insertion (0 = not in a world)
    pub id: u32,
    pub label: String,
    pub shape: Shape,

    // === Physics State ===
    /// World position (centre of mass)
    pub position: Vec2,
    /// Units per step
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Radians per step
    pub angular_velocity: f32,
    /// Accumulated force, cleared after every step
    pub force: Vec2,
    pub torque: f32,

    // === Mass ===
    pub mass: f32,
    pub inverse_mass: f32,
    pub inertia: f32,
    pub inverse_inertia: f32,

    // === Material ===
    pub restitution: f32,
    pub friction: f32,
    pub friction_air: f32,

    // === Flags ===
    pub is_static: bool,
    pub is_sleeping: bool,
    /// Consecutive low-motion steps
    pub sleep_counter: u32,
    /// Biased motion estimate used by sleeping
    pub motion: f32,
}

impl Body {
    pub fn new(x: f32, y: f32, shape: Shape, options: BodyOptions) -> Self {
        let mut body = Self {
            id: 0,
            label: options.label,
            shape,
            position: Vec2::new(x, y),
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_velocity: 0.0,
            force: Vec2::zero(),
            torque: 0.0,
            mass: 0.0,
            inverse_mass: 0.0,
            inertia: 0.0,
            inverse_inertia: 0.0,
            restitution: options.restitution.clamp(0.0, 1.0),
            friction: options.friction.max(0.0),
            friction_air: options.friction_air.clamp(0.0, 1.0),
            is_static: false,
            is_sleeping: false,
            sleep_counter: 0,
            motion: 0.0,
        };
        body.set_mass(shape.area() * options.density);
        if options.is_static {
            body.set_static(true);
        }
        body
    }

    /// Create a rectangle centred at (x, y)
    pub fn rectangle(x: f32, y: f32, width: f32, height: f32, options: BodyOptions) -> Self {
        Self::new(x, y, Shape::Rect { width, height }, options)
    }

    /// Create a circle centred at (x, y)
    pub fn circle(x: f32, y: f32, radius: f32, options: BodyOptions) -> Self {
        Self::new(x, y, Shape::Circle { radius }, options)
    }

    pub fn set_mass(&mut self, mass: f32) {
        // Keep a floor so degenerate shapes stay integrable.
        let mass = mass.max(1e-6);
        self.mass = mass;
        self.inverse_mass = 1.0 / mass;
        self.inertia = (mass * self.shape.unit_inertia()).max(1e-6);
        self.inverse_inertia = 1.0 / self.inertia;
    }

    /// Static bodies have infinite mass and never move
    pub fn set_static(&mut self, is_static: bool) {
        if is_static == self.is_static {
            return;
        }
        self.is_static = is_static;
        if is_static {
            self.inverse_mass = 0.0;
            self.inverse_inertia = 0.0;
            self.velocity = Vec2::zero();
            self.angular_velocity = 0.0;
            self.is_sleeping = false;
        } else {
            self.set_mass(self.mass);
        }
    }

    pub fn set_sleeping(&mut self, sleeping: bool, sleep_threshold: u32) {
        if sleeping {
            self.is_sleeping = true;
            self.sleep_counter = sleep_threshold;
            self.velocity = Vec2::zero();
            self.angular_velocity = 0.0;
            self.motion = 0.0;
        } else {
            self.is_sleeping = false;
            self.sleep_counter = 0;
        }
    }

    /// Static or sleeping: takes no part in integration or impulses
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.is_static || self.is_sleeping
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn bounds(&self) -> Aabb {
        self.shape.bounds_at(self.position)
    }

    /// Accumulate a force at the centre of mass for the next step
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    pub fn apply_torque(&mut self, torque: f32) {
        self.torque += torque;
    }

    /// Instant velocity change
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inverse_mass;
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: f32) {
        self.angular_velocity = angular_velocity;
    }

    /// Point on the body edge along its current angle (for angle indicators)
    pub fn heading_point(&self) -> Vec2 {
        let reach = match self.shape {
            Shape::Rect { width, .. } => width * 0.5,
            Shape::Circle { radius } => radius,
        };
        self.position + Vec2::new(reach, 0.0).rotate(self.angle)
    }
}
