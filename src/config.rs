//! Movement configuration
//!
//! Tunables are plain serde structs so they can live in a JSON file next to
//! the game data. Every struct validates itself before a motor accepts it.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GRAVITY, MAX_COYOTE_TOLERANCE};
use crate::error::LocomotionError;

/// How jump input turns into a jump
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum JumpPolicy {
    /// Jump on every grounded tick while the button is held
    #[default]
    Held,
    /// Remember the press and honor it if it lands within `tolerance` seconds
    /// of the last grounded tick (coyote time)
    Buffered { tolerance: f32 },
}

/// Tunables for the locomotion integrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Horizontal target speed at full stick (m/s)
    pub max_speed: f32,
    /// Blend rate toward the target velocity (1/s, not m/s²)
    pub acceleration: f32,
    /// Jump apex height (m), independent of gravity
    pub jump_height: f32,
    /// Facing slerp rate (1/s)
    pub rotation_acceleration: f32,
    /// Scale applied to externally injected velocity
    pub external_force_multiplier: f32,
    pub jump_policy: JumpPolicy,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self::third_person()
    }
}

impl MovementConfig {
    /// Orbit-camera character: turns quickly toward the move direction
    pub fn third_person() -> Self {
        Self {
            max_speed: 5.0,
            acceleration: 10.0,
            jump_height: 1.0,
            rotation_acceleration: 5.0,
            external_force_multiplier: 0.5,
            jump_policy: JumpPolicy::Held,
        }
    }

    /// First-person body: same locomotion, lazier body turn
    pub fn first_person() -> Self {
        Self {
            rotation_acceleration: 1.0,
            ..Self::third_person()
        }
    }

    /// Switch to buffered (coyote) jumping
    pub fn with_coyote_time(mut self, tolerance: f32) -> Self {
        self.jump_policy = JumpPolicy::Buffered { tolerance };
        self
    }

    pub fn validate(&self) -> Result<(), LocomotionError> {
        positive("max_speed", self.max_speed)?;
        positive("acceleration", self.acceleration)?;
        positive("jump_height", self.jump_height)?;
        positive("rotation_acceleration", self.rotation_acceleration)?;
        positive("external_force_multiplier", self.external_force_multiplier)?;

        if let JumpPolicy::Buffered { tolerance } = self.jump_policy {
            coyote_window("jump_policy.tolerance", tolerance)?;
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take the third-person defaults.
    pub fn from_json_str(json: &str) -> Result<Self, LocomotionError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LocomotionError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LocomotionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded movement config from {}", path.display());
        Ok(config)
    }

    /// Launch speed that peaks at exactly `jump_height` under `gravity_y`
    #[inline]
    pub fn jump_velocity(&self, gravity_y: f32) -> f32 {
        (self.jump_height * -2.0 * gravity_y).sqrt()
    }
}

/// World constants shared by every actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub gravity: Vec3,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
        }
    }
}

impl WorldSettings {
    pub fn validate(&self) -> Result<(), LocomotionError> {
        let axes = [
            ("gravity.x", self.gravity.x),
            ("gravity.y", self.gravity.y),
            ("gravity.z", self.gravity.z),
        ];
        if let Some(&(field, value)) = axes.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LocomotionError::config(field, "finite", value));
        }
        if self.gravity.y >= 0.0 {
            return Err(LocomotionError::config(
                "gravity.y",
                "negative",
                self.gravity.y,
            ));
        }
        Ok(())
    }
}

/// Tunables for the sprint/air-control third-person controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThirdPersonConfig {
    /// Top ground speed (m/s)
    pub max_speed: f32,
    /// Seconds to reach `max_speed` from rest
    pub time_to_max_speed: f32,

    // === Sprint ===
    pub sprint_speed_multiplier: f32,
    pub sprint_acceleration_multiplier: f32,

    // === Air control ===
    pub air_speed_multiplier: f32,
    pub air_acceleration_multiplier: f32,

    // === Jump ===
    /// Vertical speed held while the jump button stays down (m/s)
    pub jump_velocity: f32,
    /// Longest time the jump speed is held (s)
    pub jump_max_time: f32,
    /// Coyote window (s)
    pub coyote_time: f32,
}

impl Default for ThirdPersonConfig {
    fn default() -> Self {
        Self {
            max_speed: 6.0,
            time_to_max_speed: 0.5,

            sprint_speed_multiplier: 2.0,
            sprint_acceleration_multiplier: 0.5,

            air_speed_multiplier: 0.5,
            air_acceleration_multiplier: 0.5,

            jump_velocity: 2.0,
            jump_max_time: 0.25,
            coyote_time: 0.1,
        }
    }
}

impl ThirdPersonConfig {
    /// Acceleration implied by top speed and time to reach it (m/s²)
    #[inline]
    pub fn base_acceleration(&self) -> f32 {
        self.max_speed / self.time_to_max_speed
    }

    pub fn validate(&self) -> Result<(), LocomotionError> {
        positive("max_speed", self.max_speed)?;
        positive("time_to_max_speed", self.time_to_max_speed)?;
        non_negative("sprint_speed_multiplier", self.sprint_speed_multiplier)?;
        non_negative(
            "sprint_acceleration_multiplier",
            self.sprint_acceleration_multiplier,
        )?;
        non_negative("air_speed_multiplier", self.air_speed_multiplier)?;
        non_negative("air_acceleration_multiplier", self.air_acceleration_multiplier)?;
        non_negative("jump_velocity", self.jump_velocity)?;
        non_negative("jump_max_time", self.jump_max_time)?;
        coyote_window("coyote_time", self.coyote_time)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), LocomotionError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LocomotionError::config(field, "finite and > 0", value))
    }
}

fn coyote_window(field: &'static str, value: f32) -> Result<(), LocomotionError> {
    if value.is_finite() && value > 0.0 && value <= MAX_COYOTE_TOLERANCE {
        Ok(())
    } else {
        Err(LocomotionError::config(field, "in (0, 0.2] seconds", value))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), LocomotionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LocomotionError::config(field, "finite and >= 0", value))
    }
}
