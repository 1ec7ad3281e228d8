//! Body state and integration
//!
//! A body is a point-mass disk: position, velocity, the force accumulated this
//! tick, mass, radius and a fixed set of attributes.

use glam::Vec2;

use super::attribute::{Attribute, AttributeSet};
use crate::consts::PLANET_DENSITY;
use crate::error::BodyError;
use crate::settings::Bounds;
use crate::volume_of_sphere;

/// A rigid circular body
#[derive(Debug, Clone)]
pub struct Body {
    pub(super) position: Vec2,
    pub(super) velocity: Vec2,
    /// Force accumulated since the last reset
    pub(super) force: Vec2,
    pub(super) mass: f32,
    pub(super) radius: f32,
    pub(super) attributes: AttributeSet,
}

impl Body {
    /// Body with mass derived from its radius at the default density
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Result<Self, BodyError> {
        let mass = Self::default_mass(radius, PLANET_DENSITY)?;
        Self::with_mass(position, velocity, radius, mass)
    }

    /// Body with an explicit mass
    pub fn with_mass(
        position: Vec2,
        velocity: Vec2,
        radius: f32,
        mass: f32,
    ) -> Result<Self, BodyError> {
        Self::with_attributes(position, velocity, radius, mass, AttributeSet::new())
    }

    pub(super) fn with_attributes(
        position: Vec2,
        velocity: Vec2,
        radius: f32,
        mass: f32,
        attributes: AttributeSet,
    ) -> Result<Self, BodyError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(BodyError::InvalidRadius(radius));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(BodyError::InvalidMass(mass));
        }
        Ok(Self {
            position,
            velocity,
            force: Vec2::ZERO,
            mass,
            radius,
            attributes,
        })
    }

    /// Mass of a solid sphere: (4/3)πr³ × density
    pub fn default_mass(radius: f32, density: f32) -> Result<f32, BodyError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(BodyError::InvalidRadius(radius));
        }
        if !(density.is_finite() && density > 0.0) {
            return Err(BodyError::InvalidDensity(density));
        }
        Ok(volume_of_sphere(radius) * density)
    }

    // -- Accessors --

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Force accumulated so far this tick
    #[inline]
    pub fn accumulated_force(&self) -> Vec2 {
        self.force
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    // -- Physics --

    /// Explicit Euler step: F = ma, then drift
    pub fn step(&mut self, dt: f32) {
        self.velocity += self.force * dt / self.mass;
        self.position += self.velocity * dt;
    }

    /// Reflect off the walls of `bounds`, clamping the center one radius inside.
    ///
    /// An axis narrower than the body's diameter is left alone.
    pub fn bounce_off_walls(&mut self, bounds: &Bounds) {
        let lo = bounds.min + Vec2::splat(self.radius);
        let hi = bounds.max - Vec2::splat(self.radius);

        if lo.x <= hi.x {
            if self.position.x < lo.x {
                self.velocity.x = -self.velocity.x;
                self.position.x = lo.x;
            } else if self.position.x > hi.x {
                self.velocity.x = -self.velocity.x;
                self.position.x = hi.x;
            }
        }
        if lo.y <= hi.y {
            if self.position.y < lo.y {
                self.velocity.y = -self.velocity.y;
                self.position.y = lo.y;
            } else if self.position.y > hi.y {
                self.velocity.y = -self.velocity.y;
                self.position.y = hi.y;
            }
        }
    }

    /// Add `df` to this tick's force
    #[inline]
    pub fn apply_force(&mut self, df: Vec2) {
        self.force += df;
    }

    #[inline]
    pub fn reset_forces(&mut self) {
        self.force = Vec2::ZERO;
    }

    /// Vector from this body's center to `other`'s
    #[inline]
    pub fn displacement_to(&self, other: &Body) -> Vec2 {
        other.position - self.position
    }

    /// Whether the two disks touch or interpenetrate at `distance`
    #[inline]
    pub fn overlaps(&self, other: &Body, distance: f32) -> bool {
        distance < self.radius + other.radius
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn momentum(&self) -> Vec2 {
        self.mass * self.velocity
    }

    // -- Attributes --

    pub fn has_attribute<A: Attribute>(&self) -> bool {
        self.attributes.contains::<A>()
    }

    /// The attribute of kind `A`.
    ///
    /// # Panics
    ///
    /// If the body does not carry `A`. Check [`Body::has_attribute`] first.
    pub fn get_attribute<A: Attribute>(&self) -> &A {
        match self.attributes.get::<A>() {
            Some(attr) => attr,
            None => panic!(
                "body has no `{}` attribute",
                std::any::type_name::<A>()
            ),
        }
    }
}

/// Mutable borrows of two distinct bodies in one slice
///
/// # Panics
///
/// If `i == j` or either index is out of bounds.
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    assert_ne!(i, j, "a body cannot interact with itself");
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::attribute::{ChargeAttribute, GravityAttribute};

    fn body_at(x: f32, y: f32) -> Body {
        Body::with_mass(Vec2::new(x, y), Vec2::ZERO, 1.0, 2.0).unwrap()
    }

    #[test]
    fn test_default_mass_from_volume() {
        let r = 3.0;
        let body = Body::new(Vec2::ZERO, Vec2::ZERO, r).unwrap();
        let expected = 4.0 / 3.0 * std::f32::consts::PI * r * r * r * PLANET_DENSITY;
        assert!((body.mass() - expected).abs() <= expected * 1e-6);
    }

    #[test]
    fn test_rejects_non_positive_mass_and_radius() {
        assert_eq!(
            Body::with_mass(Vec2::ZERO, Vec2::ZERO, 1.0, 0.0).unwrap_err(),
            BodyError::InvalidMass(0.0)
        );
        assert_eq!(
            Body::with_mass(Vec2::ZERO, Vec2::ZERO, -1.0, 1.0).unwrap_err(),
            BodyError::InvalidRadius(-1.0)
        );
        assert!(Body::new(Vec2::ZERO, Vec2::ZERO, f32::NAN).is_err());
        assert_eq!(
            Body::default_mass(1.0, 0.0).unwrap_err(),
            BodyError::InvalidDensity(0.0)
        );
    }

    #[test]
    fn test_step_integrates_force() {
        let mut body = body_at(0.0, 0.0);
        body.velocity = Vec2::new(1.0, 0.0);
        body.apply_force(Vec2::new(0.0, 4.0));

        body.step(0.5);

        // v += F dt / m = (0, 1); x += v dt
        assert_eq!(body.velocity(), Vec2::new(1.0, 1.0));
        assert_eq!(body.position(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_forces_accumulate_and_reset() {
        let mut body = body_at(0.0, 0.0);
        body.apply_force(Vec2::new(1.0, 2.0));
        body.apply_force(Vec2::new(-3.0, 1.0));
        assert_eq!(body.accumulated_force(), Vec2::new(-2.0, 3.0));

        body.reset_forces();
        assert_eq!(body.accumulated_force(), Vec2::ZERO);
    }

    #[test]
    fn test_displacement_to() {
        let a = body_at(1.0, 1.0);
        let b = body_at(4.0, 5.0);
        assert_eq!(a.displacement_to(&b), Vec2::new(3.0, 4.0));
        assert_eq!(b.displacement_to(&a), Vec2::new(-3.0, -4.0));
        assert!(!a.overlaps(&b, 5.0));
        assert!(a.overlaps(&b, 1.5));
    }

    #[test]
    fn test_wall_bounce() {
        let bounds = Bounds::from_size(100.0, 50.0);

        let mut body = body_at(-3.0, 60.0);
        body.velocity = Vec2::new(-5.0, 2.0);
        body.bounce_off_walls(&bounds);
        assert_eq!(body.position(), Vec2::new(1.0, 49.0));
        assert_eq!(body.velocity(), Vec2::new(5.0, -2.0));

        // Inside: untouched
        let mut body = body_at(50.0, 25.0);
        body.velocity = Vec2::new(-5.0, 2.0);
        body.bounce_off_walls(&bounds);
        assert_eq!(body.position(), Vec2::new(50.0, 25.0));
        assert_eq!(body.velocity(), Vec2::new(-5.0, 2.0));
    }

    #[test]
    fn test_wall_bounce_body_wider_than_bounds() {
        let bounds = Bounds::from_size(1000.0, 800.0);
        let mut body = Body::with_mass(Vec2::new(500.0, 400.0), Vec2::new(3.0, -4.0), 600.0, 1.0)
            .unwrap();

        body.bounce_off_walls(&bounds);

        assert_eq!(body.position(), Vec2::new(500.0, 400.0));
        assert_eq!(body.velocity(), Vec2::new(3.0, -4.0));

        // Only the narrow axis is skipped
        let mut body = Body::with_mass(Vec2::new(-10.0, 400.0), Vec2::new(-3.0, 1.0), 450.0, 1.0)
            .unwrap();
        body.bounce_off_walls(&bounds);
        assert_eq!(body.position(), Vec2::new(450.0, 400.0));
        assert_eq!(body.velocity(), Vec2::new(3.0, 1.0));
    }

    #[test]
    fn test_attribute_queries() {
        let mut attributes = AttributeSet::new();
        attributes.insert(ChargeAttribute::new(0.5));
        let body =
            Body::with_attributes(Vec2::ZERO, Vec2::ZERO, 1.0, 1.0, attributes).unwrap();

        assert!(body.has_attribute::<ChargeAttribute>());
        assert!(!body.has_attribute::<GravityAttribute>());
        assert_eq!(body.get_attribute::<ChargeAttribute>().charge, 0.5);
    }

    #[test]
    #[should_panic(expected = "GravityAttribute")]
    fn test_missing_attribute_panics() {
        let body = body_at(0.0, 0.0);
        body.get_attribute::<GravityAttribute>();
    }

    #[test]
    fn test_pair_mut_either_order() {
        let mut bodies = vec![body_at(0.0, 0.0), body_at(1.0, 0.0), body_at(2.0, 0.0)];

        let (a, b) = pair_mut(&mut bodies, 0, 2);
        assert_eq!(a.position().x, 0.0);
        assert_eq!(b.position().x, 2.0);

        let (a, b) = pair_mut(&mut bodies, 2, 1);
        assert_eq!(a.position().x, 2.0);
        assert_eq!(b.position().x, 1.0);
    }

    #[test]
    fn test_energy_and_momentum() {
        let mut body = body_at(0.0, 0.0);
        body.velocity = Vec2::new(3.0, 4.0);
        assert_eq!(body.kinetic_energy(), 25.0);
        assert_eq!(body.momentum(), Vec2::new(6.0, 8.0));
    }
}
