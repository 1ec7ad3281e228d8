//! Staged body construction
//!
//! Position, velocity and radius are required up front; mass, density and
//! attributes are optional and chained before [`BodyBuilder::build`].

use glam::Vec2;

use super::attribute::{Attribute, AttributeSet, ChargeAttribute, GravityAttribute};
use super::body::Body;
use crate::consts::{CHARGE_UNIT, PLANET_DENSITY};
use crate::error::BodyError;
use crate::settings::PhysicsConfig;

/// Builder for [`Body`]
#[derive(Debug, Clone)]
pub struct BodyBuilder {
    position: Vec2,
    velocity: Vec2,
    radius: f32,
    /// Explicit mass; derived from radius and density when unset
    mass: Option<f32>,
    density: f32,
    charge_unit: f32,
    attributes: AttributeSet,
}

impl BodyBuilder {
    /// Start with the required parameters
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            mass: None,
            density: PLANET_DENSITY,
            charge_unit: CHARGE_UNIT,
            attributes: AttributeSet::new(),
        }
    }

    /// Start with density and charge unit taken from `config`
    pub fn configured(position: Vec2, velocity: Vec2, radius: f32, config: &PhysicsConfig) -> Self {
        Self {
            density: config.density,
            charge_unit: config.charge_unit,
            ..Self::new(position, velocity, radius)
        }
    }

    /// Set mass manually
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Density for the default mass (ignored when a mass is set)
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Add an arbitrary attribute. A second attribute of the same kind
    /// replaces the first.
    pub fn with_attribute<A: Attribute>(mut self, attr: A) -> Self {
        log::debug!("adding {} attribute", attr.name());
        if self.attributes.insert(attr) {
            log::debug!("replaced an existing attribute of the same kind");
        }
        self
    }

    pub fn with_gravity(self) -> Self {
        self.with_attribute(GravityAttribute)
    }

    pub fn with_charge(self, charge: f32) -> Self {
        self.with_attribute(ChargeAttribute::new(charge))
    }

    /// Unit charge, positive or negative
    pub fn with_charge_sign(self, positive: bool) -> Self {
        let unit = self.charge_unit;
        self.with_attribute(ChargeAttribute::from_sign(positive, unit))
    }

    /// Finalise
    pub fn build(self) -> Result<Body, BodyError> {
        let mass = match self.mass {
            Some(mass) => mass,
            None => Body::default_mass(self.radius, self.density)?,
        };
        Body::with_attributes(self.position, self.velocity, self.radius, mass, self.attributes)
    }
}
