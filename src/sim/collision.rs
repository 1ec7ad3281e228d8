//! Contact resolution between overlapping disks
//!
//! Two independent steps, both run on pairs with `distance < r_a + r_b`:
//! - overlap correction moves interpenetrating bodies apart (positions only)
//! - elastic collision exchanges momentum along the contact normal (velocities only)
//!
//! Overlap correction is run in several passes with alternating pair order.
//! Chains of many overlapping bodies may still overlap after the last pass;
//! the remainder is picked up on the next tick.

use glam::Vec2;

use super::body::{Body, pair_mut};
use crate::consts::COLLISION_DAMPING;
use crate::settings::PhysicsConfig;

impl Body {
    /// Move this body and `other` apart so they just touch.
    ///
    /// The lighter body moves proportionally more, so the mass-weighted center
    /// is unchanged. Coincident bodies are separated along +x.
    pub fn correct_overlap_with(&mut self, other: &mut Body, distance: f32) {
        // Normal to collision
        let normal = self.displacement_to(other).try_normalize().unwrap_or(Vec2::X);
        // Negative when interpenetrating
        let overlap = normal * (distance - self.radius - other.radius);

        let alpha = other.mass / (self.mass + other.mass);
        self.position += alpha * overlap;
        other.position -= (1.0 - alpha) * overlap;
    }

    /// Exchange momentum with `other` along the contact normal.
    ///
    /// `damping` scales both velocity changes; 1.0 is perfectly elastic.
    /// Coincident bodies have no contact normal and are left untouched.
    pub fn elastic_collide_with(&mut self, other: &mut Body, distance: f32, damping: f32) {
        let dist_vec = self.displacement_to(other);
        if distance <= 0.0 || dist_vec == Vec2::ZERO {
            log::trace!("skipping elastic collision of coincident bodies");
            return;
        }

        let v_diff = other.velocity - self.velocity;
        let total_mass = self.mass + other.mass;

        // Relative velocity along the normal, pre-divided by distance once more
        let along_normal = v_diff.dot(dist_vec) / (distance * distance);

        let dv_self = (2.0 * other.mass / total_mass) * along_normal * dist_vec;
        let dv_other = -(2.0 * self.mass / total_mass) * along_normal * dist_vec;

        self.velocity += dv_self * damping;
        other.velocity += dv_other * damping;
    }
}

/// Order in which a pass visits the unordered pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOrder {
    /// (0,1), (0,2), ... (n-2,n-1)
    Ascending,
    /// (n-2,n-1), (n-3,n-1), (n-3,n-2), ... (0,1)
    Descending,
}

impl PassOrder {
    /// Even passes ascend, odd passes descend
    pub fn for_pass(pass: u32) -> Self {
        if pass % 2 == 0 {
            PassOrder::Ascending
        } else {
            PassOrder::Descending
        }
    }
}

/// Runs contact passes over a body collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactSolver {
    /// Elastic impulse multiplier (1.0 = no energy loss)
    pub damping: f32,
    /// Overlap correction passes per tick
    pub overlap_passes: u32,
}

impl Default for ContactSolver {
    fn default() -> Self {
        Self {
            damping: COLLISION_DAMPING,
            overlap_passes: crate::consts::OVERLAP_PASSES,
        }
    }
}

impl ContactSolver {
    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self {
            damping: config.collision_damping,
            overlap_passes: config.overlap_passes,
        }
    }

    /// Every overlap pass, alternating pair order. Returns corrections made.
    pub fn resolve_overlaps(&self, bodies: &mut [Body]) -> usize {
        (0..self.overlap_passes)
            .map(|pass| overlap_pass(bodies, PassOrder::for_pass(pass)))
            .sum()
    }

    /// One elastic collision pass. Returns collisions resolved.
    pub fn resolve_collisions(&self, bodies: &mut [Body]) -> usize {
        let mut count = 0;
        for_each_pair(bodies.len(), PassOrder::Ascending, |i, j| {
            let (a, b) = pair_mut(bodies, i, j);
            let distance = a.displacement_to(b).length();
            if a.overlaps(b, distance) {
                a.elastic_collide_with(b, distance, self.damping);
                count += 1;
            }
        });
        count
    }
}

/// One overlap correction pass. Returns corrections made.
pub fn overlap_pass(bodies: &mut [Body], order: PassOrder) -> usize {
    let mut count = 0;
    for_each_pair(bodies.len(), order, |i, j| {
        let (a, b) = pair_mut(bodies, i, j);
        let distance = a.displacement_to(b).length();
        if a.overlaps(b, distance) {
            a.correct_overlap_with(b, distance);
            count += 1;
        }
    });
    count
}

/// Visit every unordered pair `i < j` of `n` bodies
pub fn for_each_pair(n: usize, order: PassOrder, mut f: impl FnMut(usize, usize)) {
    if n < 2 {
        return;
    }
    match order {
        PassOrder::Ascending => {
            for i in 0..n - 1 {
                for j in i + 1..n {
                    f(i, j);
                }
            }
        }
        PassOrder::Descending => {
            for i in (0..n - 1).rev() {
                for j in (i + 1..n).rev() {
                    f(i, j);
                }
            }
        }
    }
}
