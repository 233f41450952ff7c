//! Character motor: the integrator wired to its collaborators
//!
//! Collaborators are named constructor parameters on [`CharacterMotorBuilder`].
//! A motor cannot exist without a motion resolver and an input source.

use glam::{Quat, Vec2, Vec3};

use super::integrator::LocomotionIntegrator;
use super::push::{ControllerHit, HitResponder};
use super::state::{GroundProbe, InputSample, LocomotionState};
use crate::config::{MovementConfig, WorldSettings};
use crate::error::LocomotionError;

/// Collision-aware mover owned by the host
pub trait MotionResolver {
    /// Sweep the actor by `displacement`; returns whether it ends up on walkable ground.
    fn move_by(&mut self, displacement: Vec3) -> bool;
}

/// Per-tick source of player intent
pub trait InputSource {
    fn sample(&mut self) -> InputSample;
}

/// A fixed sample replays the same intent every tick
impl InputSource for InputSample {
    fn sample(&mut self) -> InputSample {
        *self
    }
}

/// Input fed by discrete device events
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    move_axis: Vec2,
    jump_held: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move axis changed; diagonals are normalized to unit length
    pub fn on_move(&mut self, axis: Vec2) {
        self.move_axis = axis.normalize_or_zero();
    }

    pub fn on_jump(&mut self, pressed: bool) {
        self.jump_held = pressed;
    }
}

impl InputSource for InputState {
    fn sample(&mut self) -> InputSample {
        InputSample::new(self.move_axis, self.jump_held)
    }
}

/// Result of one motor tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub displacement: Vec3,
    pub grounded: bool,
}

/// One actor: integrator plus the resolver and input it drives
#[derive(Debug)]
pub struct CharacterMotor<R, S> {
    integrator: LocomotionIntegrator,
    resolver: R,
    input: S,
    camera: Option<Quat>,
    grounded: bool,
    ticks: u64,
}

impl<R: MotionResolver, S: InputSource> CharacterMotor<R, S> {
    pub fn builder() -> CharacterMotorBuilder<R, S> {
        CharacterMotorBuilder::new()
    }

    /// Sample input, integrate, move, and remember the reported ground state
    pub fn tick(&mut self, dt: f32) -> TickOutcome {
        let sample = self.input.sample();
        let ground = GroundProbe::from(self.grounded);
        let displacement = self.integrator.step(dt, &sample, ground, self.camera);

        let grounded = self.resolver.move_by(displacement);
        if grounded && !self.grounded {
            log::debug!(
                "Landed at tick {} (vertical speed {:.2})",
                self.ticks,
                self.integrator.velocity().y
            );
        }
        self.grounded = grounded;
        self.ticks += 1;

        TickOutcome {
            displacement,
            grounded,
        }
    }

    /// Run collision response for a hit and forward any inherited velocity
    pub fn handle_hit(&mut self, responder: &HitResponder, hit: ControllerHit<'_>) {
        if let Some(inherited) = responder.on_controller_hit(hit) {
            self.integrator.add_external_velocity(inherited);
        }
    }
}

impl<R, S> CharacterMotor<R, S> {
    pub fn add_external_velocity(&mut self, velocity: Vec3) {
        self.integrator.add_external_velocity(velocity);
    }

    pub fn clear_external_velocity(&mut self) {
        self.integrator.clear_external_velocity();
    }

    pub fn set_camera(&mut self, camera: Option<Quat>) {
        self.camera = camera;
    }

    pub fn camera(&self) -> Option<Quat> {
        self.camera
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn state(&self) -> &LocomotionState {
        self.integrator.state()
    }

    pub fn integrator(&self) -> &LocomotionIntegrator {
        &self.integrator
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut R {
        &mut self.resolver
    }

    pub fn input_mut(&mut self) -> &mut S {
        &mut self.input
    }
}

/// Builder naming every collaborator a motor needs
#[derive(Debug)]
pub struct CharacterMotorBuilder<R, S> {
    config: MovementConfig,
    world: WorldSettings,
    resolver: Option<R>,
    input: Option<S>,
    camera: Option<Quat>,
}

impl<R, S> Default for CharacterMotorBuilder<R, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, S> CharacterMotorBuilder<R, S> {
    pub fn new() -> Self {
        Self {
            config: MovementConfig::default(),
            world: WorldSettings::default(),
            resolver: None,
            input: None,
            camera: None,
        }
    }

    pub fn config(mut self, config: MovementConfig) -> Self {
        self.config = config;
        self
    }

    pub fn world(mut self, world: WorldSettings) -> Self {
        self.world = world;
        self
    }

    pub fn resolver(mut self, resolver: R) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn input(mut self, input: S) -> Self {
        self.input = Some(input);
        self
    }

    /// Camera orientation used to make input camera-relative
    pub fn camera(mut self, camera: Quat) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn build(self) -> Result<CharacterMotor<R, S>, LocomotionError> {
        let resolver = self
            .resolver
            .ok_or(LocomotionError::MissingCollaborator("motion resolver"))?;
        let input = self
            .input
            .ok_or(LocomotionError::MissingCollaborator("input source"))?;
        let integrator = LocomotionIntegrator::new(self.config, self.world)?;

        log::info!(
            "Character motor ready (max speed {} m/s, jump {} m, {:?})",
            integrator.config().max_speed,
            integrator.config().jump_height,
            integrator.config().jump_policy,
        );

        Ok(CharacterMotor {
            integrator,
            resolver,
            input,
            camera: self.camera,
            grounded: false,
            ticks: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::FlatGroundResolver;

    fn motor() -> CharacterMotor<FlatGroundResolver, InputState> {
        CharacterMotor::builder()
            .resolver(FlatGroundResolver::at_origin())
            .input(InputState::new())
            .camera(Quat::IDENTITY)
            .build()
            .unwrap()
    }

    #[test]
    fn test_missing_resolver() {
        let result = CharacterMotorBuilder::<FlatGroundResolver, InputState>::new()
            .input(InputState::new())
            .build();
        assert!(matches!(
            result,
            Err(LocomotionError::MissingCollaborator("motion resolver"))
        ));
    }

    #[test]
    fn test_missing_input() {
        let result = CharacterMotorBuilder::<FlatGroundResolver, InputState>::new()
            .resolver(FlatGroundResolver::at_origin())
            .build();
        assert!(matches!(
            result,
            Err(LocomotionError::MissingCollaborator("input source"))
        ));
    }

    #[test]
    fn test_invalid_config_rejected_by_builder() {
        let config = MovementConfig {
            acceleration: 0.0,
            ..Default::default()
        };
        let result = CharacterMotor::builder()
            .config(config)
            .resolver(FlatGroundResolver::at_origin())
            .input(InputState::new())
            .build();
        assert!(matches!(result, Err(LocomotionError::Configuration { .. })));
    }

    #[test]
    fn test_input_state_normalizes_diagonal() {
        let mut input = InputState::new();
        input.on_move(Vec2::new(1.0, 1.0));
        let sample = input.sample();
        assert!((sample.move_axis.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_settles_on_ground() {
        let mut motor = motor();
        assert!(!motor.is_grounded());
        let outcome = motor.tick(SIM_DT);
        assert!(outcome.grounded);
        assert!(motor.is_grounded());
        assert_eq!(motor.resolver().position.y, 0.0);
    }

    #[test]
    fn test_walks_forward() {
        let mut motor = motor();
        motor.input_mut().on_move(Vec2::Y);
        for _ in 0..120 {
            motor.tick(SIM_DT);
        }
        let pos = motor.resolver().position;
        assert!(pos.z > 5.0, "z = {}", pos.z);
        assert!(pos.x.abs() < 1e-4);
        assert!(motor.is_grounded());
    }

    #[test]
    fn test_jump_leaves_ground() {
        let mut motor = motor();
        motor.tick(SIM_DT);
        motor.input_mut().on_jump(true);
        let outcome = motor.tick(SIM_DT);
        assert!(!outcome.grounded);
        assert!(outcome.displacement.y > 0.0);
    }

    #[test]
    fn test_ticks_counted() {
        let mut motor = motor();
        for _ in 0..7 {
            motor.tick(SIM_DT);
        }
        assert_eq!(motor.ticks(), 7);
    }
}
