use crate::core::{Aabb, Vec2};

/// Collision shape in local coordinates (centred on the body position)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rect { width: f32, height: f32 },
    Circle { radius: f32 },
}

impl Shape {
    pub fn area(&self) -> f32 {
        match *self {
            Shape::Rect { width, height } => (width * height).abs(),
            Shape::Circle { radius } => std::f32::consts::PI * radius * radius,
        }
    }

    /// Half extents of the bounding box; never negative
    pub fn half_extents(&self) -> Vec2 {
        match *self {
            Shape::Rect { width, height } => Vec2::new(width.abs() * 0.5, height.abs() * 0.5),
            Shape::Circle { radius } => Vec2::new(radius.abs(), radius.abs()),
        }
    }

    pub fn bounds_at(&self, pos: Vec2) -> Aabb {
        let half = self.half_extents();
        Aabb {
            min_x: pos.x - half.x,
            min_y: pos.y - half.y,
            max_x: pos.x + half.x,
            max_y: pos.y + half.y,
        }
    }

    /// Moment of inertia for unit mass
    pub fn unit_inertia(&self) -> f32 {
        match *self {
            Shape::Rect { width, height } => (width * width + height * height) / 12.0,
            Shape::Circle { radius } => 0.5 * radius * radius,
        }
    }
}
