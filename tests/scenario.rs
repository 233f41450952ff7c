//! End-to-end motor scenarios over a flat floor

use glam::{Quat, Vec2, Vec3};
use locomote::sim::{CharacterMotor, FlatGroundResolver, InputState};
use locomote::{MovementConfig, WorldSettings};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

type Motor = CharacterMotor<FlatGroundResolver, InputState>;

fn motor(config: MovementConfig, start: Vec3) -> Motor {
    CharacterMotor::builder()
        .config(config)
        .resolver(FlatGroundResolver::new(start, 0.0))
        .input(InputState::new())
        .camera(Quat::IDENTITY)
        .build()
        .expect("valid motor")
}

/// Jump once from rest and return the highest altitude reached before landing
fn jump_apex(jump_height: f32, gravity_y: f32, dt: f32) -> f32 {
    let config = MovementConfig {
        jump_height,
        ..Default::default()
    };
    let mut motor = CharacterMotor::builder()
        .config(config)
        .world(WorldSettings {
            gravity: Vec3::new(0.0, gravity_y, 0.0),
        })
        .resolver(FlatGroundResolver::at_origin())
        .input(InputState::new())
        .build()
        .expect("valid motor");

    assert!(motor.tick(dt).grounded);
    motor.input_mut().on_jump(true);
    assert!(!motor.tick(dt).grounded);
    motor.input_mut().on_jump(false);

    let mut apex = motor.resolver().altitude();
    for _ in 0..100_000 {
        if motor.tick(dt).grounded {
            return apex;
        }
        apex = apex.max(motor.resolver().altitude());
    }
    panic!("never landed");
}

#[test]
fn test_jump_apex_matches_jump_height() {
    let dt = 1.0 / 240.0;
    for &(height, gravity) in &[(1.0, -9.81), (2.5, -9.81), (1.0, -20.0), (0.5, -30.0)] {
        let apex = jump_apex(height, gravity, dt);
        let launch_speed = (2.0f32 * -gravity * height).sqrt();
        let tolerance = launch_speed * dt;
        assert!(
            (apex - height).abs() <= tolerance,
            "height {height}, gravity {gravity}: apex {apex} (tolerance {tolerance})"
        );
    }
}

#[test]
fn test_long_fall_speed_is_capped() {
    let mut motor = motor(MovementConfig::default(), Vec3::new(0.0, 200.0, 0.0));
    let dt = 1.0 / 60.0;
    let gravity = motor.integrator().gravity();

    while !motor.tick(dt).grounded {
        assert!(motor.state().vertical_velocity.y >= gravity.y);
    }
    assert_eq!(motor.resolver().position.y, 0.0);
}

#[test]
fn test_camera_relative_walk() {
    let mut motor = motor(MovementConfig::default(), Vec3::ZERO);
    // Camera looking down -X
    motor.set_camera(Some(Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2)));
    motor.input_mut().on_move(Vec2::Y);
    for _ in 0..120 {
        motor.tick(1.0 / 60.0);
    }
    let pos = motor.resolver().position;
    assert!(pos.x < -5.0, "pos = {pos:?}");
    assert!(pos.z.abs() < 1e-3);

    // Facing has turned toward -X
    let forward = motor.state().facing * Vec3::Z;
    assert!(forward.dot(-Vec3::X) > 0.99, "forward = {forward:?}");
}

#[test]
fn test_missing_camera_falls_back_to_world_axes() {
    let mut motor = motor(MovementConfig::default(), Vec3::ZERO);
    motor.set_camera(None);
    motor.input_mut().on_move(Vec2::X);
    for _ in 0..60 {
        motor.tick(1.0 / 60.0);
    }
    let pos = motor.resolver().position;
    assert!(pos.x > 2.0);
    assert!(pos.z.abs() < 1e-4);
}

#[test]
fn test_external_push_moves_character() {
    let mut motor = motor(MovementConfig::default(), Vec3::ZERO);
    motor.add_external_velocity(Vec3::new(0.0, 0.0, 4.0));
    for _ in 0..60 {
        motor.tick(1.0 / 60.0);
    }
    // 4 m/s * 0.5 multiplier for one second
    assert!((motor.resolver().position.z - 2.0).abs() < 1e-3);
}

fn run_seeded(seed: u64, ticks: usize) -> [f32; 3] {
    let mut rng = Pcg32::seed_from_u64(seed);
    let config = MovementConfig::default().with_coyote_time(0.1);
    let mut motor = motor(config, Vec3::ZERO);

    for tick in 0..ticks {
        if tick % 30 == 0 {
            let axis = Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0));
            motor.input_mut().on_move(axis);
        }
        motor.input_mut().on_jump(rng.random_bool(0.05));
        motor.tick(1.0 / 60.0);
    }
    motor.resolver().position.to_array()
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICKS: usize = 2000;

    let first = run_seeded(SEED, TICKS);
    for run in 1..5 {
        assert_eq!(first, run_seeded(SEED, TICKS), "run {run} diverged");
    }
}
