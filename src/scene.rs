//! Scene construction
//!
//! Helpers a caller uses to fill a simulation, typically from
//! [`Simulation::clear_and_repopulate`](crate::sim::Simulation::clear_and_repopulate).
//! Randomized scenes take the RNG as a parameter so seeded runs repeat exactly.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use rand::Rng;

use crate::error::BodyError;
use crate::settings::PhysicsConfig;
use crate::sim::{Body, BodyBuilder};
use crate::{circular_orbit_speed, polar_to_cartesian};

/// A rectangular grid of bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareGrid {
    pub top_left: Vec2,
    /// Shared initial velocity
    pub velocity: Vec2,
    pub columns: usize,
    pub rows: usize,
    /// Half the grid spacing. Bodies get radius `spacing_radius + 1`, so
    /// neighbours start slightly overlapping.
    pub spacing_radius: f32,
}

/// Spawn a grid of bodies. `customize` receives the cell (column, row) and
/// the builder, and returns the builder with any extra attributes.
pub fn spawn_square_of_bodies<F>(
    bodies: &mut Vec<Body>,
    config: &PhysicsConfig,
    grid: &SquareGrid,
    mut customize: F,
) -> Result<(), BodyError>
where
    F: FnMut(usize, usize, BodyBuilder) -> BodyBuilder,
{
    let spacing = grid.spacing_radius * 2.0;
    for i in 0..grid.columns {
        for j in 0..grid.rows {
            let position = grid.top_left + Vec2::new(i as f32 * spacing, j as f32 * spacing);
            let builder =
                BodyBuilder::configured(position, grid.velocity, grid.spacing_radius + 1.0, config);
            bodies.push(customize(i, j, builder).build()?);
        }
    }
    log::debug!("spawned {}x{} grid", grid.columns, grid.rows);
    Ok(())
}

/// A central planet orbited by small moons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetWithMoons {
    pub position: Vec2,
    /// Velocity added to the planet and every moon
    pub frame_velocity: Vec2,
    pub planet_radius: f32,
    pub moon_count: usize,
    /// Orbit radius range, measured from the planet's surface
    pub orbit_range: (f32, f32),
    pub moon_radius_range: (f32, f32),
    pub clockwise: bool,
}

/// Spawn a gravitating planet and moons on circular orbits at random angles
pub fn spawn_planet_with_moons<R: Rng + ?Sized>(
    bodies: &mut Vec<Body>,
    config: &PhysicsConfig,
    scene: &PlanetWithMoons,
    rng: &mut R,
) -> Result<(), BodyError> {
    let planet = BodyBuilder::configured(
        scene.position,
        scene.frame_velocity,
        scene.planet_radius,
        config,
    )
    .with_gravity()
    .build()?;
    let planet_mass = planet.mass();
    bodies.push(planet);

    let lerp = |(lo, hi): (f32, f32), t: f32| lo + t * (hi - lo);

    for _ in 0..scene.moon_count {
        let orbit_radius = scene.planet_radius + lerp(scene.orbit_range, rng.random::<f32>());
        let orbit_speed =
            circular_orbit_speed(config.gravitational_constant, planet_mass, orbit_radius);
        // Angle from planet to moon
        let start_angle = rng.random::<f32>() * TAU;
        let velocity_angle = if scene.clockwise {
            start_angle + FRAC_PI_2
        } else {
            start_angle - FRAC_PI_2
        };
        let moon_radius = lerp(scene.moon_radius_range, rng.random::<f32>());

        let moon = BodyBuilder::configured(
            scene.position + polar_to_cartesian(orbit_radius, start_angle),
            scene.frame_velocity + polar_to_cartesian(orbit_speed, velocity_angle),
            moon_radius,
            config,
        )
        .with_gravity()
        .build()?;
        bodies.push(moon);
    }

    log::debug!(
        "spawned planet (mass {planet_mass}) with {} moons",
        scene.moon_count
    );
    Ok(())
}

/// Start state: a planet in the middle of the bounds with 500 moons
pub fn default_scene<R: Rng + ?Sized>(
    bodies: &mut Vec<Body>,
    config: &PhysicsConfig,
    rng: &mut R,
) -> Result<(), BodyError> {
    let scene = PlanetWithMoons {
        position: config.bounds.center(),
        frame_velocity: Vec2::ZERO,
        planet_radius: 50.0,
        moon_count: 500,
        orbit_range: (150.0, 300.0),
        moon_radius_range: (0.5, 3.0),
        clockwise: true,
    };
    spawn_planet_with_moons(bodies, config, &scene, rng)
}
