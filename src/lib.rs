//! Fieldsim - 2D circular bodies under pairwise force fields
//!
//! Core modules:
//! - `sim`: Physics engine (bodies, attributes, fields, contact resolution, tick driver)
//! - `settings`: Tunable physical constants, loadable from JSON
//! - `scene`: Scene construction helpers used by callers to populate a simulation
//! - `error`: Error types for construction and configuration

pub mod error;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::{BodyError, ConfigError, Error};
pub use settings::{Bounds, PhysicsConfig};
pub use sim::{Body, BodyBuilder, ChargeAttribute, Field, GravityAttribute, Simulation};

use glam::Vec2;

/// Simulation constants (defaults for [`PhysicsConfig`])
pub mod consts {
    /// Nominal frame timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default wall-bounce rectangle, anchored at the origin
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Gravitational constant
    pub const G: f32 = 0.01;
    /// Coulomb constant
    pub const COULOMB: f32 = 7e12;

    /// Density used when a body is built without an explicit mass
    pub const PLANET_DENSITY: f32 = 1000.0;
    /// Fraction of the elastic impulse kept on contact (1.0 = perfectly elastic)
    pub const COLLISION_DAMPING: f32 = 0.925;

    /// Separations below this are clamped when evaluating force fields
    pub const MIN_DISTANCE: f32 = 1e-3;
    /// Overlap correction passes per tick (alternating pair order)
    pub const OVERLAP_PASSES: u32 = 2;

    /// Charge magnitude used by sign-only charge construction
    pub const CHARGE_UNIT: f32 = 1.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Volume of a sphere of the given radius: (4/3)πr³
#[inline]
pub fn volume_of_sphere(radius: f32) -> f32 {
    4.0 / 3.0 * std::f32::consts::PI * radius * radius * radius
}

/// Speed of a circular orbit at `orbit_radius` around a body of `central_mass`
#[inline]
pub fn circular_orbit_speed(g: f32, central_mass: f32, orbit_radius: f32) -> f32 {
    (g * central_mass / orbit_radius).sqrt()
}
