//! Per-actor locomotion state and per-tick samples
//!
//! Each actor owns exactly one `LocomotionState`; nothing here is shared.

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Velocity and facing of one actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocomotionState {
    /// Ground-plane velocity, `x` maps to world X and `y` to world Z
    pub horizontal_velocity: Vec2,
    /// Gravity and jump contribution
    pub vertical_velocity: Vec3,
    /// Injected by collision response, applied scaled and never decayed
    pub external_velocity: Vec3,
    pub facing: Quat,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            horizontal_velocity: Vec2::ZERO,
            vertical_velocity: Vec3::ZERO,
            external_velocity: Vec3::ZERO,
            facing: Quat::IDENTITY,
        }
    }
}

impl LocomotionState {
    /// Horizontal velocity lifted into world space (y = 0)
    #[inline]
    pub fn horizontal_velocity_3d(&self) -> Vec3 {
        Vec3::new(self.horizontal_velocity.x, 0.0, self.horizontal_velocity.y)
    }

    /// Combined velocity handed to the motion resolver
    pub fn final_velocity(&self, external_force_multiplier: f32) -> Vec3 {
        self.horizontal_velocity_3d()
            + self.vertical_velocity
            + self.external_velocity * external_force_multiplier
    }
}

/// Player intent for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSample {
    /// Stick/WASD axis, magnitude at most 1
    pub move_axis: Vec2,
    pub jump_held: bool,
}

impl InputSample {
    /// Build a sample, clamping the axis to unit length
    pub fn new(move_axis: Vec2, jump_held: bool) -> Self {
        Self {
            move_axis: move_axis.clamp_length_max(1.0),
            jump_held,
        }
    }

    pub fn idle() -> Self {
        Self::default()
    }
}

/// Ground contact reported by the motion resolver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundProbe {
    pub is_grounded: bool,
}

impl GroundProbe {
    pub const GROUNDED: Self = Self { is_grounded: true };
    pub const AIRBORNE: Self = Self { is_grounded: false };
}

impl From<bool> for GroundProbe {
    fn from(is_grounded: bool) -> Self {
        Self { is_grounded }
    }
}
