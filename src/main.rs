//! Locomote - headless locomotion demo
//!
//! Usage: `locomote [config.json] [seed]`
//!
//! Drives one character over a flat floor with seeded random stick input,
//! collecting an object on every landing to open a door.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::{Quat, Vec2, Vec3};
    use locomote::consts::SIM_DT;
    use locomote::sim::{
        CharacterMotor, ControllerHit, DynamicBody, FlatGroundResolver, HitResponder, InputState,
    };
    use locomote::world::{GameContext, InventoryDoor};
    use locomote::{LocomotionError, MovementConfig};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    const DEFAULT_SEED: u64 = 0x10c0_4073;
    const DEMO_TICKS: u32 = 20 * 60;
    const CRATE_HIT_TICK: u32 = 300;
    const CRATE_PUSH_TICKS: u32 = 90;

    pub fn run() -> Result<(), LocomotionError> {
        let mut args = std::env::args().skip(1);
        let config = match args.next() {
            Some(path) => MovementConfig::load(path)?,
            None => MovementConfig::default().with_coyote_time(0.1),
        };
        let seed = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED);
        log::info!("Demo seed: {seed}");

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut motor = CharacterMotor::builder()
            .config(config)
            .resolver(FlatGroundResolver::at_origin())
            .input(InputState::new())
            .camera(Quat::IDENTITY)
            .build()?;

        let mut ctx = GameContext::new();
        ctx.add_door(InventoryDoor::new(3));

        let responder = HitResponder {
            inherit_body_velocity: true,
            ..Default::default()
        };
        let mut crate_body = DynamicBody::new(Vec3::new(0.0, 0.0, 2.0));

        let mut was_grounded = false;
        for tick in 0..DEMO_TICKS {
            if tick % 60 == 0 {
                let axis = Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0));
                motor.input_mut().on_move(axis);
            }
            motor.input_mut().on_jump(rng.random_bool(0.02));
            motor.set_camera(Some(Quat::from_rotation_y(tick as f32 * 0.002)));

            if tick == CRATE_HIT_TICK {
                let direction = motor.integrator().relative_input();
                motor.handle_hit(
                    &responder,
                    ControllerHit {
                        body: Some(&mut crate_body),
                        move_direction: direction,
                    },
                );
                log::info!("Bumped a crate, it now moves at {:?}", crate_body.velocity);
            }
            if tick == CRATE_HIT_TICK + CRATE_PUSH_TICKS {
                motor.clear_external_velocity();
            }

            let outcome = motor.tick(SIM_DT);
            if outcome.grounded && !was_grounded && tick > 0 {
                ctx.collect(1);
            }
            was_grounded = outcome.grounded;

            for (door, update) in ctx.update() {
                log::info!("Door {door}: {update:?}");
            }

            if tick % 60 == 0 {
                let pos = motor.resolver().position;
                log::info!(
                    "t={:>5.2}s pos=({:>6.2}, {:>5.2}, {:>6.2}) speed={:.2} grounded={}",
                    tick as f32 * SIM_DT,
                    pos.x,
                    pos.y,
                    pos.z,
                    motor.state().horizontal_velocity.length(),
                    outcome.grounded,
                );
            }
        }

        log::info!(
            "Finished {} ticks, collected {} objects",
            motor.ticks(),
            ctx.inventory.total()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Locomote demo starting...");

    if let Err(e) = demo::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless demo on wasm; the library is driven by the host
}
