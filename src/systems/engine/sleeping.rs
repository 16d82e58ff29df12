//! Body sleeping.
//!
//! A body whose biased motion stays under `MOTION_SLEEP_THRESHOLD` for
//! `SLEEP_THRESHOLD` consecutive steps is frozen until a force or a moving
//! body wakes it.

use crate::systems::body::Body;

use super::collision::Contact;

pub const MOTION_WAKE_THRESHOLD: f32 = 0.18;
pub const MOTION_SLEEP_THRESHOLD: f32 = 0.08;
pub const MIN_BIAS: f32 = 0.9;
/// Low-motion steps before a body sleeps
pub const SLEEP_THRESHOLD: u32 = 60;

/// Pre-step pass: track motion, put quiet bodies to sleep
pub fn update(bodies: &mut [Body], time_factor: f32) {
    for body in bodies.iter_mut() {
        if body.is_static {
            continue;
        }

        // Applied forces always wake.
        if !body.force.is_zero() || body.torque != 0.0 {
            body.set_sleeping(false, SLEEP_THRESHOLD);
            continue;
        }

        let motion = body.velocity.length_squared() + body.angular_velocity * body.angular_velocity;
        let min_motion = motion.min(body.motion);
        let max_motion = motion.max(body.motion);
        body.motion = MIN_BIAS * min_motion + (1.0 - MIN_BIAS) * max_motion;

        if body.motion < MOTION_SLEEP_THRESHOLD * time_factor {
            body.sleep_counter += 1;
            if body.sleep_counter >= SLEEP_THRESHOLD {
                body.set_sleeping(true, SLEEP_THRESHOLD);
            }
        } else if body.sleep_counter > 0 {
            body.sleep_counter -= 1;
        }
    }
}

/// Wake sleeping bodies hit by a moving awake body
pub fn after_collisions(bodies: &mut [Body], contacts: &[Contact], time_factor: f32) {
    for contact in contacts {
        let (a, b) = (&bodies[contact.a], &bodies[contact.b]);
        if (a.is_sleeping && b.is_sleeping) || a.is_static || b.is_static {
            continue;
        }
        if !a.is_sleeping && !b.is_sleeping {
            continue;
        }
        let (sleeper, mover) = if a.is_sleeping { (contact.a, contact.b) } else { (contact.b, contact.a) };
        if bodies[mover].motion > MOTION_WAKE_THRESHOLD * time_factor {
            bodies[sleeper].set_sleeping(false, SLEEP_THRESHOLD);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::systems::body::BodyOptions;

    #[test]
    fn still_body_sleeps_after_threshold() {
        let mut bodies = vec![Body::circle(0.0, 0.0, 5.0, BodyOptions::default())];
        for _ in 0..SLEEP_THRESHOLD - 1 {
            update(&mut bodies, 1.0);
        }
        assert!(!bodies[0].is_sleeping);
        update(&mut bodies, 1.0);
        assert!(bodies[0].is_sleeping);
    }

    #[test]
    fn force_wakes_sleeper() {
        let mut bodies = vec![Body::circle(0.0, 0.0, 5.0, BodyOptions::default())];
        bodies[0].set_sleeping(true, SLEEP_THRESHOLD);
        bodies[0].apply_force(Vec2::new(0.0, -1.0));
        update(&mut bodies, 1.0);
        assert!(!bodies[0].is_sleeping);
    }

    #[test]
    fn fast_body_wakes_sleeping_neighbour() {
        let mut bodies = vec![
            Body::circle(0.0, 0.0, 5.0, BodyOptions::default()),
            Body::circle(8.0, 0.0, 5.0, BodyOptions::default()),
        ];
        bodies[0].set_sleeping(true, SLEEP_THRESHOLD);
        bodies[1].motion = 1.0;
        let contacts = vec![Contact { a: 0, b: 1, normal: Vec2::new(1.0, 0.0), depth: 2.0 }];
        after_collisions(&mut bodies, &contacts, 1.0);
        assert!(!bodies[0].is_sleeping);
    }
}
