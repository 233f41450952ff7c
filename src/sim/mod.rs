//! Deterministic locomotion simulation
//!
//! All per-tick movement logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - No collision resolution (delegated to a `MotionResolver`)
//! - No input devices (delegated to an `InputSource`)
//! - One owner per actor state, no shared globals

pub mod coyote;
pub mod integrator;
pub mod motor;
pub mod push;
pub mod resolver;
pub mod state;
pub mod third_person;

pub use coyote::JumpBuffer;
pub use integrator::{LocomotionIntegrator, relative_move_input};
pub use motor::{
    CharacterMotor, CharacterMotorBuilder, InputSource, InputState, MotionResolver, TickOutcome,
};
pub use push::{ControllerHit, DynamicBody, HitResponder};
pub use resolver::FlatGroundResolver;
pub use state::{GroundProbe, InputSample, LocomotionState};
pub use third_person::ThirdPersonController;
