//! Locomotion integrator
//!
//! One call to [`LocomotionIntegrator::step`] per fixed tick. Stages run in a
//! fixed order and later stages read what earlier ones wrote this tick:
//!
//! 1. horizontal blend toward `relative_input * max_speed`
//! 2. vertical: grounded reset, jump impulse, gravity, downward clamp
//! 3. orientation: slerp toward the move direction
//! 4. displacement: `final_velocity * dt`, executed by the motion resolver

use glam::{Quat, Vec2, Vec3};

use super::coyote::JumpBuffer;
use super::state::{GroundProbe, InputSample, LocomotionState};
use crate::config::{JumpPolicy, MovementConfig, WorldSettings};
use crate::consts::ROTATION_EPSILON;
use crate::error::LocomotionError;
use crate::{clamp01, look_rotation, project_on_ground_plane};

/// Convert a move axis into a normalized world direction on the ground plane.
///
/// With no camera the axis is treated as already world-relative.
pub fn relative_move_input(move_axis: Vec2, camera: Option<Quat>) -> Vec3 {
    let local = Vec3::new(move_axis.x, 0.0, move_axis.y);
    let world = match camera {
        Some(rotation) => rotation * local,
        None => local,
    };
    project_on_ground_plane(world).normalize_or_zero()
}

/// Stateful velocity integrator for a single actor
#[derive(Debug, Clone)]
pub struct LocomotionIntegrator {
    config: MovementConfig,
    gravity: Vec3,
    state: LocomotionState,
    /// Present only under [`JumpPolicy::Buffered`]
    jump_buffer: Option<JumpBuffer>,
    jump_was_held: bool,
    /// Seconds of simulated time seen by this actor
    clock: f64,
    relative_input: Vec3,
    velocity: Vec3,
    warned_no_camera: bool,
}

impl LocomotionIntegrator {
    /// Fails if either the movement config or the world constants are invalid.
    pub fn new(config: MovementConfig, world: WorldSettings) -> Result<Self, LocomotionError> {
        config.validate()?;
        world.validate()?;

        let jump_buffer = match config.jump_policy {
            JumpPolicy::Held => None,
            JumpPolicy::Buffered { tolerance } => Some(JumpBuffer::new(tolerance)),
        };

        Ok(Self {
            config,
            gravity: world.gravity,
            state: LocomotionState::default(),
            jump_buffer,
            jump_was_held: false,
            clock: 0.0,
            relative_input: Vec3::ZERO,
            velocity: Vec3::ZERO,
            warned_no_camera: false,
        })
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    /// Ground-plane move direction computed on the last tick
    pub fn relative_input(&self) -> Vec3 {
        self.relative_input
    }

    /// Velocity handed to the resolver on the last tick
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn jump_buffer(&self) -> Option<&JumpBuffer> {
        self.jump_buffer.as_ref()
    }

    /// Set the externally imposed velocity, replacing the previous one.
    ///
    /// It is applied every tick scaled by `external_force_multiplier` until the
    /// caller replaces or clears it.
    pub fn add_external_velocity(&mut self, velocity: Vec3) {
        self.state.external_velocity = velocity;
    }

    pub fn clear_external_velocity(&mut self) {
        self.state.external_velocity = Vec3::ZERO;
    }

    /// Advance one tick and return the displacement to execute.
    ///
    /// `ground` is what the resolver reported after the previous displacement.
    pub fn step(
        &mut self,
        dt: f32,
        input: &InputSample,
        ground: GroundProbe,
        camera: Option<Quat>,
    ) -> Vec3 {
        if !(dt.is_finite() && dt > 0.0) {
            log::warn!("Ignoring locomotion step with dt = {dt}");
            return Vec3::ZERO;
        }

        if camera.is_none() && !self.warned_no_camera {
            log::warn!("No camera reference, treating move input as world-relative");
            self.warned_no_camera = true;
        }

        self.process_horizontal(dt, input.move_axis, camera);
        self.process_vertical(dt, input.jump_held, ground.is_grounded);
        self.rotate(dt);
        let displacement = self.displacement(dt);

        self.jump_was_held = input.jump_held;
        self.clock += f64::from(dt);
        displacement
    }

    fn process_horizontal(&mut self, dt: f32, move_axis: Vec2, camera: Option<Quat>) {
        self.relative_input = relative_move_input(move_axis, camera);

        let target = self.relative_input * self.config.max_speed;
        let target = Vec2::new(target.x, target.z);
        let t = clamp01(self.config.acceleration * dt);

        self.state.horizontal_velocity = self.state.horizontal_velocity.lerp(target, t);
    }

    fn process_vertical(&mut self, dt: f32, jump_held: bool, grounded: bool) {
        // Resting on a surface must not accumulate gravity across ticks
        if grounded {
            self.state.vertical_velocity = Vec3::ZERO;
        }

        let jump = match self.jump_buffer.as_mut() {
            None => grounded && jump_held,
            Some(buffer) => {
                if jump_held && !self.jump_was_held {
                    buffer.record_press(self.clock);
                }
                if grounded {
                    buffer.record_grounded(self.clock);
                }
                buffer.try_consume(self.clock)
            }
        };

        if jump {
            let speed = self.config.jump_velocity(self.gravity.y);
            self.state.vertical_velocity = Vec3::new(0.0, speed, 0.0);
        }

        self.state.vertical_velocity += self.gravity * dt;

        // Never fall faster than one unit-time of gravity
        self.state.vertical_velocity = self.state.vertical_velocity.max(self.gravity);
    }

    fn rotate(&mut self, dt: f32) {
        if self.relative_input.length() <= ROTATION_EPSILON {
            return;
        }
        let Some(target) = look_rotation(self.relative_input, Vec3::Y) else {
            return;
        };
        let t = clamp01(self.config.rotation_acceleration * dt);
        self.state.facing = self.state.facing.slerp(target, t).normalize();
    }

    fn displacement(&mut self, dt: f32) -> Vec3 {
        self.velocity = self
            .state
            .final_velocity(self.config.external_force_multiplier);
        self.velocity * dt
    }
}
