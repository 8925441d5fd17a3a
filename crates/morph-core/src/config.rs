//! Runtime configuration for the particle field.
//!
//! Every tunable has a default taken from `constants.rs`. Hosts may override a
//! small subset by key (the web frontend reads them from `data-*` attributes on
//! the canvas); invalid overrides are rejected and the default is kept.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: &'static str, value: String },
    #[error("`{key}` out of range: {reason}")]
    OutOfRange {
        key: &'static str,
        reason: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub morph_duration_sec: f32,
    pub fixed_step_sec: f32,
    pub point_size_px: f32,
    pub wobble_amplitude: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub camera_distance: f32,
    pub spin_y_rad_per_sec: f32,
    pub spin_x_rad_per_sec: f32,
    /// Fixed RNG seed; `None` draws one from the platform entropy source.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            morph_duration_sec: DEFAULT_MORPH_DURATION_SEC,
            fixed_step_sec: FIXED_STEP_SEC,
            point_size_px: DEFAULT_POINT_SIZE_PX,
            wobble_amplitude: WOBBLE_AMPLITUDE,
            fovy_radians: FOVY_DEGREES.to_radians(),
            znear: Z_NEAR,
            zfar: Z_FAR,
            camera_distance: CAMERA_DISTANCE,
            spin_y_rad_per_sec: SPIN_Y_RAD_PER_SEC,
            spin_x_rad_per_sec: SPIN_X_RAD_PER_SEC,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Keys accepted by [`FieldConfig::apply_override`].
    pub const OVERRIDE_KEYS: [&'static str; 4] =
        ["particle-count", "morph-duration", "point-size", "seed"];

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Apply a single textual override. On error `self` is left untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "particle-count" => {
                let count: usize = parse("particle-count", value)?;
                if count == 0 || count > MAX_PARTICLE_COUNT {
                    return Err(ConfigError::OutOfRange {
                        key: "particle-count",
                        reason: "must be between 1 and 1000000",
                    });
                }
                self.particle_count = count;
            }
            "morph-duration" => {
                let secs = parse("morph-duration", value)?;
                self.morph_duration_sec = positive_finite("morph-duration", secs)?;
            }
            "point-size" => {
                let px = parse("point-size", value)?;
                self.point_size_px = positive_finite("point-size", px)?;
            }
            "seed" => {
                self.seed = Some(parse("seed", value)?);
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

fn positive_finite(key: &'static str, v: f32) -> Result<f32, ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(ConfigError::OutOfRange {
            key,
            reason: "must be a positive finite number",
        })
    }
}
