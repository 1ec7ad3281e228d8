//! Physics settings
//!
//! Every tunable constant of the engine lives in [`PhysicsConfig`]. Missing
//! keys in a JSON file fall back to the defaults in [`crate::consts`].

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Axis-aligned rectangle bodies bounce off when wall bouncing is enabled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower-left corner
    pub min: Vec2,
    /// Upper-right corner
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from the origin to (width, height)
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::from_size(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

/// Physical constants and engine switches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // === Fields ===
    /// Gravitational constant G
    pub gravitational_constant: f32,
    /// Coulomb constant k
    pub coulomb_constant: f32,
    /// Separations below this are clamped before dividing by distance³
    pub min_distance: f32,

    // === Bodies ===
    /// Density used for default mass (sphere volume × density)
    pub density: f32,
    /// Magnitude given to sign-only charges
    pub charge_unit: f32,

    // === Contacts ===
    /// Fraction of the elastic impulse kept per contact (1.0 = no loss)
    pub collision_damping: f32,
    /// Overlap correction passes per tick, alternating pair order
    pub overlap_passes: u32,

    // === Walls ===
    /// Bounce bodies off `bounds`
    pub wall_bounce: bool,
    /// Wall rectangle
    pub bounds: Bounds,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            coulomb_constant: COULOMB,
            min_distance: MIN_DISTANCE,

            density: PLANET_DENSITY,
            charge_unit: CHARGE_UNIT,

            collision_damping: COLLISION_DAMPING,
            overlap_passes: OVERLAP_PASSES,

            wall_bounce: true,
            bounds: Bounds::default(),
        }
    }
}

impl PhysicsConfig {
    /// Walls to bounce off this tick, if enabled
    pub fn walls(&self) -> Option<&Bounds> {
        self.wall_bounce.then_some(&self.bounds)
    }

    /// Check every value is usable by the engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravitational_constant.is_finite() {
            return Err(ConfigError::invalid("gravitational_constant", "must be finite"));
        }
        if !self.coulomb_constant.is_finite() {
            return Err(ConfigError::invalid("coulomb_constant", "must be finite"));
        }
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return Err(ConfigError::invalid(
                "min_distance",
                format!("must be positive, got {}", self.min_distance),
            ));
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ConfigError::invalid(
                "density",
                format!("must be positive, got {}", self.density),
            ));
        }
        if !self.charge_unit.is_finite() {
            return Err(ConfigError::invalid("charge_unit", "must be finite"));
        }
        if !(0.0..=1.0).contains(&self.collision_damping) {
            return Err(ConfigError::invalid(
                "collision_damping",
                format!("must be within [0, 1], got {}", self.collision_damping),
            ));
        }
        if self.bounds.width() <= 0.0 || self.bounds.height() <= 0.0 {
            return Err(ConfigError::invalid("bounds", "max must exceed min on both axes"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded physics config from {}", path.display());
        Ok(config)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("Physics config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PhysicsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.density, PLANET_DENSITY);
        assert!(config.walls().is_some());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PhysicsConfig::from_json_str(
            r#"{ "gravitational_constant": 1.5, "wall_bounce": false }"#,
        )
        .unwrap();
        assert_eq!(config.gravitational_constant, 1.5);
        assert_eq!(config.coulomb_constant, COULOMB);
        assert!(config.walls().is_none());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PhysicsConfig {
            collision_damping: 1.0,
            bounds: Bounds::new(Vec2::new(-10.0, -10.0), Vec2::new(10.0, 10.0)),
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(PhysicsConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = PhysicsConfig::from_json_str(r#"{ "density": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "density", .. }));

        let err = PhysicsConfig::from_json_str(r#"{ "collision_damping": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "collision_damping", .. }));

        let config = PhysicsConfig {
            bounds: Bounds::new(Vec2::new(5.0, 0.0), Vec2::new(1.0, 10.0)),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = PhysicsConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Serialization(_)));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("fieldsim_config_{}.json", std::process::id()));
        let config = PhysicsConfig {
            overlap_passes: 4,
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = PhysicsConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_bounds_helpers() {
        let bounds = Bounds::default();
        assert_eq!(bounds.width(), SCREEN_WIDTH);
        assert_eq!(bounds.height(), SCREEN_HEIGHT);
        assert_eq!(bounds.center(), Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0));
    }
}
