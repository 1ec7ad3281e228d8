//! Physics engine
//!
//! Everything that moves bodies lives here:
//! - Bodies with a fixed set of attributes
//! - Force fields gated on attributes (gravity, charge, user-defined)
//! - Contact resolution (overlap correction, elastic collision)
//! - The per-tick driver
//!
//! No rendering, input or timing dependencies.

pub mod attribute;
pub mod body;
pub mod builder;
pub mod collision;
pub mod field;
pub mod tick;

pub use attribute::{Attribute, AttributeSet, ChargeAttribute, GravityAttribute};
pub use body::{Body, pair_mut};
pub use builder::BodyBuilder;
pub use collision::{ContactSolver, PassOrder, for_each_pair, overlap_pass};
pub use field::{Charge, Field, Gravity, PairRule, inverse_cube};
pub use tick::{Simulation, TickStats};
