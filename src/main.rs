//! Fieldsim headless runner
//!
//! Usage: `fieldsim [config.json] [ticks] [seed]`
//!
//! Spawns the default planet-with-moons scene, runs it at a fixed 60 Hz step
//! and logs momentum, energy and contact counts. Set `RUST_LOG=info` to see
//! the output.

use fieldsim::consts::SIM_DT;
use fieldsim::{PhysicsConfig, Simulation, scene};
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn main() {
    env_logger::init();
    log::info!("Fieldsim (headless) starting...");

    if let Err(err) = run(std::env::args().skip(1).collect()) {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Vec<String>) -> Result<(), fieldsim::Error> {
    let config = match args.first() {
        Some(path) => PhysicsConfig::load(path)?,
        None => PhysicsConfig::default(),
    };
    let ticks: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(600);
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(12345);

    let mut sim = Simulation::new(config)?;
    let mut rng = Pcg32::seed_from_u64(seed);
    sim.clear_and_repopulate(|bodies, config| scene::default_scene(bodies, config, &mut rng))?;
    log::info!("Scene built with seed {seed}: {} bodies", sim.bodies().len());

    let mut collisions = 0;
    for _ in 0..ticks {
        let mut peak_force = 0.0_f32;
        let stats = sim.tick_with(SIM_DT, |bodies| {
            peak_force = bodies
                .iter()
                .map(|b| b.accumulated_force().length() / b.mass())
                .fold(0.0, f32::max);
        });
        collisions += stats.collisions;

        if sim.time_ticks() % 60 == 0 {
            log::info!(
                "t={:.1}s momentum={:?} energy={:.3e} overlaps={} collisions={} peak_accel={:.2}",
                sim.time_ticks() as f32 * SIM_DT,
                sim.total_momentum(),
                sim.total_kinetic_energy(),
                stats.overlaps_corrected,
                collisions,
                peak_force
            );
        }
    }

    let com = sim.center_of_mass();
    println!(
        "{} ticks, {} bodies, {} collisions, center of mass ({:.2}, {:.2})",
        sim.time_ticks(),
        sim.bodies().len(),
        collisions,
        com.x,
        com.y
    );
    Ok(())
}
