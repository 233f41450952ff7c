//! Locomote - fixed-step character locomotion
//!
//! Core modules:
//! - `sim`: Per-tick locomotion (velocity blending, jumps, orientation, displacement)
//! - `config`: Movement tunables and world constants
//! - `world`: Context objects and typed observers for gameplay wiring
//! - `error`: Construction-time error taxonomy

pub mod config;
pub mod error;
pub mod sim;
pub mod world;

pub use config::{JumpPolicy, MovementConfig, ThirdPersonConfig, WorldSettings};
pub use error::LocomotionError;

use glam::{Mat3, Quat, Vec3};

/// Simulation constants
pub mod consts {
    use glam::Vec3;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default world gravity (m/s²)
    pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

    /// Below this input magnitude the actor keeps its facing
    pub const ROTATION_EPSILON: f32 = 0.001;

    /// Upper bound for the coyote jump window (seconds)
    pub const MAX_COYOTE_TOLERANCE: f32 = 0.2;
}

/// Clamp to [0, 1]
#[inline]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Drop the vertical component of a direction
#[inline]
pub fn project_on_ground_plane(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Rotation whose +Z axis points along `forward`, keeping `up` as close to +Y as possible.
///
/// Returns `None` when `forward` is zero-length or parallel to `up`.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let forward = forward.try_normalize()?;
    let right = up.cross(forward).try_normalize()?;
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize())
}
