//! Generator configuration
//!
//! A small serde-backed config that decides how a generator is seeded.
//! `seed: None` (or an absent field) means "seed from the system clock".

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{FixedSeed, MersenneTwister, SystemClock};

/// Errors that can occur while loading or saving a config
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid generator config: {0}")]
    InvalidConfig(String),

    #[error("Config serialization failed: {0}")]
    SerializationError(String),
}

/// How to seed a [`MersenneTwister`]
///
/// # Example
/// ```
/// use twister_core::{GeneratorConfig, MersenneTwister};
///
/// let config = GeneratorConfig::from_json(r#"{"seed": 42}"#).unwrap();
/// assert_eq!(config.build(), MersenneTwister::new(42));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Explicit seed; `None` seeds from the clock
    pub seed: Option<u32>,
}

impl GeneratorConfig {
    /// Config with an explicit seed
    pub fn fixed(seed: u32) -> Self {
        Self { seed: Some(seed) }
    }

    /// Config that seeds from the system clock
    pub fn clock() -> Self {
        Self { seed: None }
    }

    /// Parse a config from JSON
    ///
    /// Rejects unknown fields and seeds outside the u32 range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidConfig(e.to_string()))
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::SerializationError(e.to_string()))
    }

    /// True when building from this config is reproducible
    pub fn is_deterministic(&self) -> bool {
        self.seed.is_some()
    }

    /// Build a generator according to this config
    pub fn build(&self) -> MersenneTwister {
        match self.seed {
            Some(seed) => MersenneTwister::from_source(&FixedSeed(seed)),
            None => MersenneTwister::from_source(&SystemClock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_clock_seeded() {
        let config = GeneratorConfig::default();
        assert_eq!(config, GeneratorConfig::clock());
        assert!(!config.is_deterministic());
    }

    #[test]
    fn test_fixed_round_trips_through_json() {
        let config = GeneratorConfig::fixed(9008);
        let json = config.to_json().unwrap();
        assert_eq!(json, r#"{"seed":9008}"#);
        assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = GeneratorConfig::from_json(r#"{"sead": 1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig(_)));
    }
}
