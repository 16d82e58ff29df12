//! Collision detection and impulse resolution.
//!
//! Broadphase is an all-pairs AABB test. Narrowphase handles rect/rect,
//! circle/circle and circle/rect. Rotation is ignored for contact geometry.

use crate::core::Vec2;
use crate::systems::body::{Body, Shape};

/// Penetration allowed before positional correction kicks in
const SLOP: f32 = 0.05;
/// Share of the penetration removed per step
const CORRECTION_PERCENT: f32 = 0.8;

/// A touching pair; `normal` points from `a` to `b`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub a: usize,
    pub b: usize,
    pub normal: Vec2,
    pub depth: f32,
}

/// Find all touching pairs. Pairs where neither body can move are skipped.
pub fn detect(bodies: &[Body]) -> Vec<Contact> {
    let mut contacts = Vec::new();
    for i in 0..bodies.len() {
        let a = &bodies[i];
        let bounds_a = a.bounds();
        for (j, b) in bodies.iter().enumerate().skip(i + 1) {
            if a.is_frozen() && b.is_frozen() {
                continue;
            }
            if !bounds_a.overlaps(&b.bounds()) {
                continue;
            }
            if let Some((normal, depth)) = narrowphase(a, b) {
                contacts.push(Contact { a: i, b: j, normal, depth });
            }
        }
    }
    contacts
}

fn narrowphase(a: &Body, b: &Body) -> Option<(Vec2, f32)> {
    match (a.shape, b.shape) {
        (Shape::Rect { .. }, Shape::Rect { .. }) => rect_rect(a, b),
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circle_circle(a.position, ra, b.position, rb)
        }
        (Shape::Rect { .. }, Shape::Circle { radius }) => rect_circle(a, b.position, radius),
        (Shape::Circle { radius }, Shape::Rect { .. }) => {
            rect_circle(b, a.position, radius).map(|(n, d)| (-n, d))
        }
    }
}

#[inline]
fn sign(v: f32) -> f32 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

fn rect_rect(a: &Body, b: &Body) -> Option<(Vec2, f32)> {
    let ha = a.shape.half_extents();
    let hb = b.shape.half_extents();
    let d = b.position - a.position;
    let overlap_x = ha.x + hb.x - d.x.abs();
    let overlap_y = ha.y + hb.y - d.y.abs();
    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return None;
    }
    if overlap_x < overlap_y {
        Some((Vec2::new(sign(d.x), 0.0), overlap_x))
    } else {
        Some((Vec2::new(0.0, sign(d.y)), overlap_y))
    }
}

fn circle_circle(pa: Vec2, ra: f32, pb: Vec2, rb: f32) -> Option<(Vec2, f32)> {
    let d = pb - pa;
    let dist2 = d.length_squared();
    let reach = ra + rb;
    if dist2 >= reach * reach {
        return None;
    }
    let dist = dist2.sqrt();
    let normal = if dist > 0.0001 { d * (1.0 / dist) } else { Vec2::new(0.0, 1.0) };
    Some((normal, reach - dist))
}

/// Normal points from the rectangle to the circle
fn rect_circle(rect: &Body, center: Vec2, radius: f32) -> Option<(Vec2, f32)> {
    let bounds = rect.bounds();
    let closest = Vec2::new(
        center.x.max(bounds.min_x).min(bounds.max_x),
        center.y.max(bounds.min_y).min(bounds.max_y),
    );
    let diff = center - closest;
    let dist2 = diff.length_squared();

    if dist2 > 0.0 {
        if dist2 >= radius * radius {
            return None;
        }
        let dist = dist2.sqrt();
        return Some((diff * (1.0 / dist), radius - dist));
    }

    // Centre inside the rectangle: push out through the nearest side.
    let to_left = center.x - bounds.min_x;
    let to_right = bounds.max_x - center.x;
    let to_top = center.y - bounds.min_y;
    let to_bottom = bounds.max_y - center.y;
    let nearest = to_left.min(to_right).min(to_top).min(to_bottom);
    let normal = if nearest == to_left {
        Vec2::new(-1.0, 0.0)
    } else if nearest == to_right {
        Vec2::new(1.0, 0.0)
    } else if nearest == to_top {
        Vec2::new(0.0, -1.0)
    } else {
        Vec2::new(0.0, 1.0)
    };
    Some((normal, radius + nearest))
}

/// Positional correction plus restitution and friction impulses
pub fn resolve(bodies: &mut [Body], contacts: &[Contact]) {
    for contact in contacts {
        let (a, b) = pair_mut(bodies, contact.a, contact.b);
        let inv_a = if a.is_frozen() { 0.0 } else { a.inverse_mass };
        let inv_b = if b.is_frozen() { 0.0 } else { b.inverse_mass };
        let inv_sum = inv_a + inv_b;
        if inv_sum <= 0.0 {
            continue;
        }
        let n = contact.normal;

        let correction = (contact.depth - SLOP).max(0.0) * CORRECTION_PERCENT / inv_sum;
        a.position -= n * (correction * inv_a);
        b.position += n * (correction * inv_b);

        let rel = b.velocity - a.velocity;
        let vn = rel.dot(n);
        if vn >= 0.0 {
            // Already separating.
            continue;
        }

        let e = a.restitution.min(b.restitution);
        let j = -(1.0 + e) * vn / inv_sum;
        a.velocity -= n * (j * inv_a);
        b.velocity += n * (j * inv_b);

        let rel = b.velocity - a.velocity;
        let tangent = (rel - n * rel.dot(n)).normalize();
        if tangent.is_zero() {
            continue;
        }
        let mu = (a.friction * b.friction).sqrt();
        let jt = (-rel.dot(tangent) / inv_sum).max(-j * mu).min(j * mu);
        a.velocity -= tangent * (jt * inv_a);
        b.velocity += tangent * (jt * inv_b);
    }
}

/// Two distinct mutable bodies; requires `i < j`
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::body::BodyOptions;

    #[test]
    fn static_pairs_are_skipped() {
        let bodies = vec![
            Body::rectangle(0.0, 0.0, 10.0, 10.0, BodyOptions::fixed()),
            Body::rectangle(5.0, 0.0, 10.0, 10.0, BodyOptions::fixed()),
        ];
        assert!(detect(&bodies).is_empty());
    }

    #[test]
    fn rect_rect_picks_shallow_axis() {
        let bodies = vec![
            Body::rectangle(0.0, 0.0, 10.0, 10.0, BodyOptions::default()),
            Body::rectangle(0.0, 9.0, 10.0, 10.0, BodyOptions::fixed()),
        ];
        let contacts = detect(&bodies);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].normal, Vec2::new(0.0, 1.0));
        assert!((contacts[0].depth - 1.0).abs() < 1e-5);
    }

    #[test]
    fn circle_resting_on_rect_points_down_from_circle() {
        let bodies = vec![
            Body::circle(0.0, 0.0, 5.0, BodyOptions::default()),
            Body::rectangle(0.0, 9.0, 40.0, 10.0, BodyOptions::fixed()),
        ];
        let contacts = detect(&bodies);
        assert_eq!(contacts.len(), 1);
        assert!((contacts[0].normal.y - 1.0).abs() < 1e-5);
        assert!((contacts[0].depth - 1.0).abs() < 1e-5);
    }

    #[test]
    fn resolve_stops_approach_into_static() {
        let mut bodies = vec![
            Body::circle(0.0, 0.0, 5.0, BodyOptions::default()),
            Body::rectangle(0.0, 9.0, 40.0, 10.0, BodyOptions::fixed()),
        ];
        bodies[0].velocity = Vec2::new(0.0, 3.0);
        let contacts = detect(&bodies);
        resolve(&mut bodies, &contacts);

        assert!(bodies[0].velocity.y <= 0.0);
        assert!(bodies[0].position.y < 0.0);
        assert_eq!(bodies[1].position, Vec2::new(0.0, 9.0));
    }

    #[test]
    fn negative_width_rect_against_circle_still_resolves() {
        let mut bodies = vec![
            Body::rectangle(100.0, 100.0, -20.0, 20.0, BodyOptions::default()),
            Body::circle(100.0, 100.0, 15.0, BodyOptions::default()),
        ];
        let contacts = detect(&bodies);
        assert_eq!(contacts.len(), 1);
        assert!(contacts[0].depth > 0.0);

        resolve(&mut bodies, &contacts);
        assert!(bodies[0].position.x.is_finite());
        assert!(bodies[1].position.y.is_finite());
    }
}
