//! Controller hit response against dynamic bodies
//!
//! When the character sweeps into a non-kinematic body, the body is shoved
//! along the move direction. Kinematic bodies and static geometry are left
//! alone.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The part of a rigid body the hit response touches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicBody {
    pub velocity: Vec3,
    /// Kinematic bodies are moved by script, not by pushes
    pub kinematic: bool,
}

impl DynamicBody {
    pub fn new(velocity: Vec3) -> Self {
        Self {
            velocity,
            kinematic: false,
        }
    }

    pub fn kinematic() -> Self {
        Self {
            velocity: Vec3::ZERO,
            kinematic: true,
        }
    }
}

/// A single contact reported by the motion resolver
#[derive(Debug)]
pub struct ControllerHit<'a> {
    /// `None` for static colliders
    pub body: Option<&'a mut DynamicBody>,
    /// Direction the controller was moving when it hit
    pub move_direction: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitResponder {
    /// Per-axis push strength
    pub push_force: Vec3,
    /// Feed the body's pre-push velocity back into the character
    pub inherit_body_velocity: bool,
}

impl Default for HitResponder {
    fn default() -> Self {
        Self {
            push_force: Vec3::ONE,
            inherit_body_velocity: false,
        }
    }
}

impl HitResponder {
    /// Apply the push. Returns the velocity the character should inherit, if any.
    pub fn on_controller_hit(&self, hit: ControllerHit<'_>) -> Option<Vec3> {
        let body = hit.body?;
        if body.kinematic {
            return None;
        }

        let inherited = body.velocity;
        body.velocity = hit.move_direction * self.push_force;
        log::trace!("Pushed body to {:?}", body.velocity);

        self.inherit_body_velocity.then_some(inherited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_scales_per_axis() {
        let responder = HitResponder {
            push_force: Vec3::new(2.0, 0.0, 3.0),
            inherit_body_velocity: false,
        };
        let mut body = DynamicBody::new(Vec3::ZERO);
        let inherited = responder.on_controller_hit(ControllerHit {
            body: Some(&mut body),
            move_direction: Vec3::new(1.0, -1.0, 1.0),
        });
        assert_eq!(inherited, None);
        assert_eq!(body.velocity, Vec3::new(2.0, 0.0, 3.0));
    }

    #[test]
    fn test_kinematic_body_ignored() {
        let responder = HitResponder::default();
        let mut body = DynamicBody::kinematic();
        let inherited = responder.on_controller_hit(ControllerHit {
            body: Some(&mut body),
            move_direction: Vec3::X,
        });
        assert_eq!(inherited, None);
        assert_eq!(body.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_static_collider_ignored() {
        let responder = HitResponder::default();
        let inherited = responder.on_controller_hit(ControllerHit {
            body: None,
            move_direction: Vec3::X,
        });
        assert_eq!(inherited, None);
    }

    #[test]
    fn test_inherits_pre_push_velocity() {
        let responder = HitResponder {
            inherit_body_velocity: true,
            ..Default::default()
        };
        let mut body = DynamicBody::new(Vec3::new(0.0, 0.0, 4.0));
        let inherited = responder.on_controller_hit(ControllerHit {
            body: Some(&mut body),
            move_direction: Vec3::X,
        });
        assert_eq!(inherited, Some(Vec3::new(0.0, 0.0, 4.0)));
        assert_eq!(body.velocity, Vec3::X);
    }
}
