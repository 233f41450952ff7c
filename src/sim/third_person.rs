//! Third-person controller with sprint, air control and variable-height jumps
//!
//! Unlike [`LocomotionIntegrator`](super::LocomotionIntegrator) this controller
//! works directly in the input plane (x → world X, y → world Z), expresses
//! acceleration as `max_speed / time_to_max_speed`, and holds a fixed upward
//! speed for as long as jump is held (up to `jump_max_time`). Jumps always go
//! through the coyote buffer.

use glam::{Quat, Vec2, Vec3};

use super::coyote::JumpBuffer;
use crate::config::{ThirdPersonConfig, WorldSettings};
use crate::consts::ROTATION_EPSILON;
use crate::error::LocomotionError;
use crate::{clamp01, look_rotation};

#[derive(Debug, Clone)]
pub struct ThirdPersonController {
    config: ThirdPersonConfig,
    gravity_y: f32,

    move_axis: Vec2,
    sprinting: bool,

    horizontal_velocity: Vec2,
    vertical_velocity: f32,
    facing: Quat,

    jump_buffer: JumpBuffer,
    is_jumping: bool,
    jump_timer: f32,
    clock: f64,
}

impl ThirdPersonController {
    pub fn new(config: ThirdPersonConfig, world: WorldSettings) -> Result<Self, LocomotionError> {
        config.validate()?;
        world.validate()?;
        let jump_buffer = JumpBuffer::new(config.coyote_time);

        Ok(Self {
            config,
            gravity_y: world.gravity.y,
            move_axis: Vec2::ZERO,
            sprinting: false,
            horizontal_velocity: Vec2::ZERO,
            vertical_velocity: 0.0,
            facing: Quat::IDENTITY,
            jump_buffer,
            is_jumping: false,
            jump_timer: 0.0,
            clock: 0.0,
        })
    }

    // === Input events ===

    /// Analog axis; magnitude above 1 (keyboard diagonals) is clamped
    pub fn on_move(&mut self, axis: Vec2) {
        self.move_axis = axis.clamp_length_max(1.0);
    }

    pub fn on_sprint(&mut self, pressed: bool) {
        self.sprinting = pressed;
    }

    /// A press is buffered; a release cuts the jump hold short
    pub fn on_jump(&mut self, pressed: bool) {
        if pressed {
            self.jump_buffer.record_press(self.clock);
        } else {
            self.is_jumping = false;
        }
    }

    // === Accessors ===

    pub fn horizontal_velocity(&self) -> Vec2 {
        self.horizontal_velocity
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    pub fn facing(&self) -> Quat {
        self.facing
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn velocity(&self) -> Vec3 {
        Vec3::new(
            self.horizontal_velocity.x,
            self.vertical_velocity,
            self.horizontal_velocity.y,
        )
    }

    /// Advance one tick and return the displacement to execute
    pub fn step(&mut self, dt: f32, grounded: bool) -> Vec3 {
        if !(dt.is_finite() && dt > 0.0) {
            return Vec3::ZERO;
        }

        self.process_vertical(dt, grounded);
        let acceleration = self.process_horizontal(dt, grounded);
        self.rotate(dt, acceleration);

        self.clock += f64::from(dt);
        self.velocity() * dt
    }

    fn process_vertical(&mut self, dt: f32, grounded: bool) {
        if grounded {
            self.is_jumping = false;
            self.jump_buffer.record_grounded(self.clock);
        }

        if self.jump_buffer.try_consume(self.clock) {
            self.is_jumping = true;
            self.jump_timer = 0.0;
            self.vertical_velocity = self.config.jump_velocity;
        }

        if self.is_jumping {
            self.jump_timer += dt;
            if self.jump_timer >= self.config.jump_max_time {
                self.is_jumping = false;
            }
        } else {
            let gravity_step = self.gravity_y * dt;
            self.vertical_velocity += gravity_step;

            // Keep one tick of gravity so the resolver still reports ground contact
            if grounded && self.vertical_velocity < 0.0 {
                self.vertical_velocity = gravity_step;
            }
        }
    }

    /// Returns the acceleration used this tick (also drives the turn rate)
    fn process_horizontal(&mut self, dt: f32, grounded: bool) -> f32 {
        let mut target_speed = self.config.max_speed;
        let mut target_acceleration = self.config.base_acceleration();

        if self.sprinting {
            // Scale by stick deflection so idling with sprint held changes nothing
            let amount = self.move_axis.length();
            target_speed *= lerp(1.0, self.config.sprint_speed_multiplier, amount);
            target_acceleration *= lerp(1.0, self.config.sprint_acceleration_multiplier, amount);
        }

        if !grounded {
            target_speed *= self.config.air_speed_multiplier;
            target_acceleration *= self.config.air_acceleration_multiplier;
        }

        let target = self.move_axis * target_speed;
        let t = clamp01(dt * target_acceleration);
        self.horizontal_velocity = self.horizontal_velocity.lerp(target, t);

        target_acceleration
    }

    fn rotate(&mut self, dt: f32, acceleration: f32) {
        let look = Vec3::new(self.horizontal_velocity.x, 0.0, self.horizontal_velocity.y);
        if look.length() <= ROTATION_EPSILON {
            return;
        }
        if let Some(target) = look_rotation(look, Vec3::Y) {
            let t = clamp01(dt * acceleration);
            self.facing = self.facing.slerp(target, t).normalize();
        }
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * clamp01(t)
}
