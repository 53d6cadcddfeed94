//! Scene configuration loaded from JSON.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```json
//! { "radius": 0.8, "policy": { "kind": "velocity_tracking_smoothed", "blend_factor": 0.05 } }
//! ```
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{PATH_RADIUS, SHIP_SCALE, TANGENT_EPSILON, TIME_STEP};
use crate::facing::FacingPolicy;

/// Failure loading or validating a [`SceneConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The contents were not valid config JSON.
    #[error("invalid scene config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value was out of range.
    #[error("{field}: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Tunables for the orbiting ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Radius of the circular path.
    pub radius: f32,
    /// Uniform ship scale.
    pub scale: f32,
    /// Time parameter added per frame.
    pub time_step: f32,
    /// Offset added to the time parameter before evaluating the path.
    pub phase: f32,
    /// Forward step for tangent estimation.
    pub tangent_epsilon: f32,
    /// How the ship turns.
    pub policy: FacingPolicy,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            radius: PATH_RADIUS,
            scale: SHIP_SCALE,
            time_step: TIME_STEP,
            phase: 0.0,
            tangent_epsilon: TANGENT_EPSILON,
            policy: FacingPolicy::default(),
        }
    }
}

impl SceneConfig {
    /// Parses and validates a config from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
    /// same errors as [`from_json_str`](Self::from_json_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        info!("loaded scene config from {}", path.display());
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("radius", self.radius)?;
        check_finite("scale", self.scale)?;
        check_finite("phase", self.phase)?;
        check_positive("time_step", self.time_step)?;
        check_positive("tangent_epsilon", self.tangent_epsilon)?;
        match self.policy {
            FacingPolicy::ContinuousClockwise { rotation_speed } => {
                check_finite("policy.rotation_speed", rotation_speed)
            }
            FacingPolicy::VelocityTrackingSmoothed { blend_factor } => {
                if (0.0..=1.0).contains(&blend_factor) {
                    Ok(())
                } else {
                    Err(ConfigError::Invalid {
                        field: "policy.blend_factor",
                        reason: "must lie in [0, 1]",
                    })
                }
            }
            FacingPolicy::None
            | FacingPolicy::QuantizedFourDirection
            | FacingPolicy::InstantaneousTangent => Ok(()),
        }
    }
}

fn check_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be finite",
        })
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be positive",
        })
    }
}
