//! Simulation tick
//!
//! One tick runs five phases in order:
//! 1. every field on every unordered pair (force accumulation)
//! 2. explicit Euler integration, plus wall bounce if enabled
//! 3. overlap correction passes
//! 4. one elastic collision pass
//! 5. force reset
//!
//! Each phase sees all writes of the previous one. The simulation owns its
//! bodies; callers read them between ticks or from the `tick_with` hook.

use glam::Vec2;

use super::body::{Body, pair_mut};
use super::collision::{ContactSolver, PassOrder, for_each_pair};
use super::field::{Charge, Field, Gravity};
use crate::error::ConfigError;
use crate::settings::PhysicsConfig;

/// Counts from the most recent tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Overlap corrections across all passes
    pub overlaps_corrected: usize,
    /// Elastic collisions resolved
    pub collisions: usize,
}

/// Bodies, the fields acting on them and the constants driving them
pub struct Simulation {
    config: PhysicsConfig,
    bodies: Vec<Body>,
    fields: Vec<Box<dyn Field>>,
    contacts: ContactSolver,
    /// Simulation tick counter
    time_ticks: u64,
    last_stats: TickStats,
}

impl Simulation {
    /// Simulation with gravity and charge fields
    pub fn new(config: PhysicsConfig) -> Result<Self, ConfigError> {
        let gravity = Gravity::from_config(&config);
        let charge = Charge::from_config(&config);
        Ok(Self::without_fields(config)?
            .with_field(gravity)
            .with_field(charge))
    }

    /// Simulation with no fields; add them with [`Simulation::with_field`].
    ///
    /// Fails if `config` does not pass [`PhysicsConfig::validate`].
    pub fn without_fields(config: PhysicsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "Simulation created (G={}, k={}, damping={}, walls={})",
            config.gravitational_constant,
            config.coulomb_constant,
            config.collision_damping,
            config.wall_bounce
        );
        Ok(Self {
            contacts: ContactSolver::from_config(&config),
            config,
            bodies: Vec::new(),
            fields: Vec::new(),
            time_ticks: 0,
            last_stats: TickStats::default(),
        })
    }

    /// Add a field
    pub fn with_field<F: Field + 'static>(mut self, field: F) -> Self {
        log::debug!("adding {} field", field.name());
        self.fields.push(Box::new(field));
        self
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Names of the active fields, in application order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name())
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn last_stats(&self) -> TickStats {
        self.last_stats
    }

    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Remove every body
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Discard all bodies and let `populate` spawn a fresh set
    pub fn clear_and_repopulate<F, E>(&mut self, populate: F) -> Result<(), E>
    where
        F: FnOnce(&mut Vec<Body>, &PhysicsConfig) -> Result<(), E>,
    {
        self.bodies.clear();
        self.time_ticks = 0;
        self.last_stats = TickStats::default();
        populate(&mut self.bodies, &self.config)?;
        log::info!("Simulation repopulated with {} bodies", self.bodies.len());
        Ok(())
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> TickStats {
        self.tick_with(dt, |_| {})
    }

    /// Advance by `dt` seconds, calling `inspect` after contacts are resolved
    /// and before forces are reset, so the accumulated forces are still
    /// readable (e.g. for drawing force vectors).
    pub fn tick_with<F: FnOnce(&[Body])>(&mut self, dt: f32, inspect: F) -> TickStats {
        self.time_ticks += 1;

        self.apply_fields();
        self.integrate(dt);

        let stats = TickStats {
            overlaps_corrected: self.contacts.resolve_overlaps(&mut self.bodies),
            collisions: self.contacts.resolve_collisions(&mut self.bodies),
        };

        inspect(&self.bodies);

        for body in &mut self.bodies {
            body.reset_forces();
        }

        self.last_stats = stats;
        stats
    }

    fn apply_fields(&mut self) {
        let fields = &self.fields;
        let bodies = &mut self.bodies;
        for_each_pair(bodies.len(), PassOrder::Ascending, |i, j| {
            let (a, b) = pair_mut(bodies, i, j);
            for field in fields {
                field.apply_force(a, b);
            }
        });
    }

    fn integrate(&mut self, dt: f32) {
        let walls = self.config.walls();
        for body in &mut self.bodies {
            body.step(dt);
            if let Some(bounds) = walls {
                body.bounce_off_walls(bounds);
            }
        }
    }

    // -- Diagnostics --

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Mass-weighted center of all bodies (origin when empty)
    pub fn center_of_mass(&self) -> Vec2 {
        let total_mass: f32 = self.bodies.iter().map(Body::mass).sum();
        if total_mass <= 0.0 {
            return Vec2::ZERO;
        }
        self.bodies
            .iter()
            .map(|b| b.mass() * b.position())
            .sum::<Vec2>()
            / total_mass
    }
}
