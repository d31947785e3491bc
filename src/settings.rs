//! Simulation settings
//!
//! Fixed at startup and read-only afterwards. The web build can override the
//! defaults with a JSON blob in LocalStorage; the native build reads a JSON file.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{BALL_RADIUS, GRAVITY, MAX_VELOCITY_PER_DIMENSION};
use crate::error::SimError;
use crate::sim::CanvasBounds;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Invalid(#[from] SimError),
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Constant acceleration applied to every ball (pixels/s²)
    pub gravity: DVec2,
    /// Radius every ball is spawned with
    pub ball_radius: f64,
    /// Spawn velocity is sampled from [-max, max] on each axis
    pub max_velocity_per_dimension: f64,
    /// Canvas edges and whether each one bounces
    pub bounds: CanvasBounds,
    /// Spawn RNG seed; the host picks one from the clock when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            ball_radius: BALL_RADIUS,
            max_velocity_per_dimension: MAX_VELOCITY_PER_DIMENSION,
            bounds: CanvasBounds::default(),
            seed: None,
        }
    }
}

impl Settings {
    /// Reject settings the simulation cannot start with
    pub fn validate(&self) -> Result<(), SimError> {
        self.bounds.validate()?;

        if !self.gravity.is_finite() {
            return Err(SimError::invalid_config(format!(
                "gravity {} is not finite",
                self.gravity
            )));
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(SimError::invalid_config(format!(
                "ball radius {} must be positive",
                self.ball_radius
            )));
        }
        if !(self.max_velocity_per_dimension.is_finite() && self.max_velocity_per_dimension >= 0.0) {
            return Err(SimError::invalid_config(format!(
                "max velocity {} must be zero or positive",
                self.max_velocity_per_dimension
            )));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "ball_drop_settings";

    /// Load settings from LocalStorage, falling back to defaults (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native builds take settings from a file instead
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    /// Read settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Boundary;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.gravity, DVec2::new(0.0, 9.8));
        assert_eq!(settings.ball_radius, 3.0);
        assert_eq!(settings.max_velocity_per_dimension, 50.0);
        assert_eq!(settings.bounds.bottom, Boundary::hard(300.0));
        assert_eq!(settings.bounds.left, Boundary::soft(0.0));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "ball_radius": 5.0, "seed": 42 }"#).unwrap();
        assert_eq!(settings.ball_radius, 5.0);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.gravity, Settings::default().gravity);
    }

    #[test]
    fn test_bounds_json() {
        let json = r#"{
            "gravity": [0.0, 20.0],
            "bounds": {
                "top": { "dim": 0.0, "is_hard": true },
                "right": { "dim": 640.0, "is_hard": true },
                "bottom": { "dim": 480.0, "is_hard": false },
                "left": { "dim": 0.0, "is_hard": true }
            }
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.gravity, DVec2::new(0.0, 20.0));
        assert_eq!(settings.bounds.width(), 640.0);
        assert!(!settings.bounds.bottom.is_hard);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let json = r#"{
            "bounds": {
                "top": { "dim": 300.0, "is_hard": false },
                "right": { "dim": 300.0, "is_hard": false },
                "bottom": { "dim": 0.0, "is_hard": true },
                "left": { "dim": 0.0, "is_hard": false }
            }
        }"#;
        let err = Settings::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid(SimError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_bad_values_rejected() {
        let settings = Settings {
            ball_radius: 0.0,
            ..Settings::default()
        };
        assert!(settings.validate().unwrap_err().is_configuration());

        let settings = Settings {
            max_velocity_per_dimension: -1.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            ..Settings::default()
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
