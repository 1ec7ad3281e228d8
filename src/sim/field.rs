//! Pairwise force fields
//!
//! A [`Field`] takes two bodies and applies equal and opposite forces to them.
//! Most fields are homogeneous: they only act when both bodies carry the same
//! attribute kind. Those implement [`PairRule`] and get the attribute gating
//! and Newton's third law from the blanket [`Field`] impl.

use glam::Vec2;

use super::attribute::{Attribute, ChargeAttribute, GravityAttribute};
use super::body::Body;
use crate::consts::{COULOMB, G, MIN_DISTANCE};
use crate::settings::PhysicsConfig;

/// A pairwise force rule
pub trait Field: Send + Sync {
    fn name(&self) -> &'static str;

    /// Apply this field's force between `a` and `b`
    fn apply_force(&self, a: &mut Body, b: &mut Body);
}

/// Force rule between two bodies that both carry `Self::Attr`
pub trait PairRule: Send + Sync {
    type Attr: Attribute;

    const NAME: &'static str;

    /// Force on `a` due to `b`. `b` receives the negation.
    fn pair_force(&self, a: &Body, b: &Body, attr_a: &Self::Attr, attr_b: &Self::Attr) -> Vec2;
}

impl<R: PairRule> Field for R {
    fn name(&self) -> &'static str {
        R::NAME
    }

    fn apply_force(&self, a: &mut Body, b: &mut Body) {
        // Both bodies need the attribute, otherwise no force at all
        if !(a.has_attribute::<R::Attr>() && b.has_attribute::<R::Attr>()) {
            return;
        }

        let force = self.pair_force(a, b, a.get_attribute(), b.get_attribute());

        a.apply_force(force);
        b.apply_force(-force);
    }
}

/// `delta / |delta|³`, with |delta| clamped to at least `min_distance`.
///
/// Coincident bodies give a zero vector rather than NaN.
pub fn inverse_cube(delta: Vec2, min_distance: f32) -> Vec2 {
    if delta == Vec2::ZERO {
        return Vec2::ZERO;
    }
    let distance = delta.length();
    let distance = if distance < min_distance {
        log::trace!("clamping separation {distance} to {min_distance}");
        min_distance
    } else {
        distance
    };
    delta / (distance * distance * distance)
}

/// Newtonian gravity: F = G·m_a·m_b·Δ/|Δ|³ (attractive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    /// Gravitational constant
    pub g: f32,
    pub min_distance: f32,
}

impl Gravity {
    pub fn new(g: f32) -> Self {
        Self {
            g,
            min_distance: MIN_DISTANCE,
        }
    }

    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self {
            g: config.gravitational_constant,
            min_distance: config.min_distance,
        }
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(G)
    }
}

impl PairRule for Gravity {
    type Attr = GravityAttribute;

    const NAME: &'static str = "gravity";

    fn pair_force(&self, a: &Body, b: &Body, _: &GravityAttribute, _: &GravityAttribute) -> Vec2 {
        inverse_cube(a.displacement_to(b), self.min_distance) * (self.g * a.mass() * b.mass())
    }
}

/// Coulomb's law: F = k·(-q_a·q_b)·Δ/|Δ|³
///
/// Like charges repel, opposite charges attract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charge {
    /// Coulomb constant
    pub k: f32,
    pub min_distance: f32,
}

impl Charge {
    pub fn new(k: f32) -> Self {
        Self {
            k,
            min_distance: MIN_DISTANCE,
        }
    }

    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self {
            k: config.coulomb_constant,
            min_distance: config.min_distance,
        }
    }
}

impl Default for Charge {
    fn default() -> Self {
        Self::new(COULOMB)
    }
}

impl PairRule for Charge {
    type Attr = ChargeAttribute;

    const NAME: &'static str = "charge";

    fn pair_force(
        &self,
        a: &Body,
        b: &Body,
        ch_a: &ChargeAttribute,
        ch_b: &ChargeAttribute,
    ) -> Vec2 {
        let strength = self.k * ch_a.charge * -ch_b.charge;
        inverse_cube(a.displacement_to(b), self.min_distance) * strength
    }
}
