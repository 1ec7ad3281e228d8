//! Error types
//!
//! Construction and configuration failures are recoverable and returned as
//! `Result`s. Querying an attribute a body does not carry is a caller bug and
//! panics instead (see [`Body::get_attribute`](crate::sim::Body::get_attribute)).

use thiserror::Error;

/// Rejected body construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("body radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("body mass must be positive and finite, got {0}")]
    InvalidMass(f32),

    #[error("density must be positive and finite, got {0}")]
    InvalidDensity(f32),
}

/// Failure loading, saving or validating a [`PhysicsConfig`](crate::PhysicsConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
}

impl ConfigError {
    /// Creates a validation error for one config field.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            message: message.into(),
        }
    }
}

/// Top-level error for callers driving a whole simulation run
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Body(#[from] BodyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
