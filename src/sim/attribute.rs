//! Body attributes
//!
//! An attribute is a capability a body carries, optionally with data. Force
//! fields only act on pairs where both bodies carry the field's attribute.
//! New kinds are added by implementing [`Attribute`]; nothing in `Body`
//! changes.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// A capability marker attached to a body
pub trait Attribute: fmt::Debug + Send + Sync + 'static {
    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Object-safe view over any [`Attribute`], used for storage
trait ErasedAttribute: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn name(&self) -> &'static str;
}

impl<A: Attribute> ErasedAttribute for A {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn name(&self) -> &'static str {
        Attribute::name(self)
    }
}

/// The body has gravity (its mass is already on the body)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GravityAttribute;

impl Attribute for GravityAttribute {
    fn name(&self) -> &'static str {
        "gravity"
    }
}

/// The body carries an electric charge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeAttribute {
    /// Signed charge magnitude
    pub charge: f32,
}

impl ChargeAttribute {
    pub fn new(charge: f32) -> Self {
        Self { charge }
    }

    /// Charge of `unit` magnitude, positive or negative
    pub fn from_sign(positive: bool, unit: f32) -> Self {
        Self::new(if positive { unit } else { -unit })
    }
}

impl Attribute for ChargeAttribute {
    fn name(&self) -> &'static str {
        "charge"
    }
}

/// Attributes of one body, at most one per kind
///
/// Kinds are few (usually ≤ 2) so lookups are a linear scan.
#[derive(Debug, Clone, Default)]
pub struct AttributeSet {
    entries: Vec<Arc<dyn ErasedAttribute>>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, replacing any existing one of the same kind.
    /// Returns true if one was replaced.
    pub(crate) fn insert<A: Attribute>(&mut self, attr: A) -> bool {
        let kind = TypeId::of::<A>();
        let attr: Arc<dyn ErasedAttribute> = Arc::new(attr);
        match self
            .entries
            .iter()
            .position(|e| Any::type_id(e.as_any()) == kind)
        {
            Some(index) => {
                self.entries[index] = attr;
                true
            }
            None => {
                self.entries.push(attr);
                false
            }
        }
    }

    /// Whether an attribute of kind `A` is present
    pub fn contains<A: Attribute>(&self) -> bool {
        self.get::<A>().is_some()
    }

    /// The attribute of kind `A`, if present
    pub fn get<A: Attribute>(&self) -> Option<&A> {
        self.entries.iter().find_map(|e| e.as_any().downcast_ref::<A>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the attributes present, in insertion order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name())
    }
}
