//! Optimizer configuration
//!
//! Defaults reproduce the classic tuning: a 32 entry cache, 0.7 for the vertices of
//! the last emitted triangle, a 1.5 positional falloff and a `2 / sqrt(valence)` boost.

use crate::constants::vertex_cache::{
    CACHE_CAPACITY, CACHE_SCORE_POWER, INITIAL_SCORE, MAX_CACHE_CAPACITY, VALENCE_BOOST_POWER,
    VALENCE_BOOST_SCALE,
};
use crate::error::{OptimizerError, OptimizerResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning parameters for the score model and the simulated cache
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub cache_capacity: usize,
    pub initial_score: f32,
    pub cache_score_power: f32,
    pub valence_boost_scale: f32,
    pub valence_boost_power: f32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            cache_capacity: CACHE_CAPACITY,
            initial_score: INITIAL_SCORE,
            cache_score_power: CACHE_SCORE_POWER,
            valence_boost_scale: VALENCE_BOOST_SCALE,
            valence_boost_power: VALENCE_BOOST_POWER,
        }
    }
}

impl OptimizerConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> OptimizerResult<()> {
        if self.cache_capacity == 0 {
            return Err(invalid("cache_capacity", &self.cache_capacity, "cannot be 0"));
        }

        if self.cache_capacity > MAX_CACHE_CAPACITY {
            return Err(invalid(
                "cache_capacity",
                &self.cache_capacity,
                &format!("exceeds maximum of {}", MAX_CACHE_CAPACITY),
            ));
        }

        let weights = [
            ("initial_score", self.initial_score),
            ("cache_score_power", self.cache_score_power),
            ("valence_boost_scale", self.valence_boost_scale),
            ("valence_boost_power", self.valence_boost_power),
        ];
        for (field, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, &value, "must be finite and non-negative"));
            }
        }

        Ok(())
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let config: OptimizerConfig =
            toml::from_str(source).context("OptimizerConfig: failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("OptimizerConfig: failed to read {}", path.display()))?;
        let config = Self::from_toml_str(&source)
            .with_context(|| format!("OptimizerConfig: invalid config in {}", path.display()))?;

        log::info!(
            "[OptimizerConfig::load_from_file] Loaded {}: cache_capacity={}",
            path.display(),
            config.cache_capacity
        );
        Ok(config)
    }

    /// Render the config as TOML
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        toml::to_string(self).context("OptimizerConfig: failed to serialize TOML")
    }
}

fn invalid(field: &str, value: &dyn std::fmt::Display, reason: &str) -> OptimizerError {
    OptimizerError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = OptimizerConfig::default();
        assert_eq!(config.cache_capacity, 32);
        assert_eq!(config.initial_score, 0.7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = OptimizerConfig {
            cache_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(OptimizerError::InvalidConfig { ref field, .. }) if field == "cache_capacity"
        ));

        let config = OptimizerConfig {
            cache_capacity: MAX_CACHE_CAPACITY + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = OptimizerConfig {
            valence_boost_power: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(OptimizerError::InvalidConfig { ref field, .. }) if field == "valence_boost_power"
        ));

        let config = OptimizerConfig {
            initial_score: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = OptimizerConfig::from_toml_str("cache_capacity = 16\n")
            .expect("partial config should parse");
        assert_eq!(config.cache_capacity, 16);
        assert_eq!(config.cache_score_power, CACHE_SCORE_POWER);
        assert_eq!(config.valence_boost_scale, VALENCE_BOOST_SCALE);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        assert!(OptimizerConfig::from_toml_str("cache_capacity = 0\n").is_err());
        assert!(OptimizerConfig::from_toml_str("cache_capacity = \"lots\"\n").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = OptimizerConfig {
            cache_capacity: 24,
            initial_score: 0.75,
            ..Default::default()
        };
        let text = config.to_toml_string().expect("Failed to serialize config");
        let parsed = OptimizerConfig::from_toml_str(&text).expect("Failed to parse config");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "cache_capacity = 20").expect("Failed to write config");
        writeln!(file, "initial_score = 0.75").expect("Failed to write config");

        let config = OptimizerConfig::load_from_file(file.path()).expect("Failed to load config");
        assert_eq!(config.cache_capacity, 20);
        assert_eq!(config.initial_score, 0.75);

        let missing = file.path().with_extension("missing");
        assert!(OptimizerConfig::load_from_file(missing).is_err());
    }
}
