//! Configuration types for seeding and the demo run.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Largest accepted seed dimension, border included
pub const MAX_DIMENSION: usize = 4096;

/// Largest accepted generation count for a run
pub const MAX_GENERATIONS: u64 = 100_000;

/// Random seed generation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Number of rows, border included
    pub rows: usize,
    /// Number of columns, border included
    pub cols: usize,
    /// Chance that an interior cell starts alive (0.0 to 1.0)
    pub alive_probability: f64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            alive_probability: 0.5,
        }
    }
}

impl SeedConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidConfig(format!(
                "seed dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }

        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(Error::InvalidConfig(format!(
                "seed dimensions must not exceed {}, got {}x{}",
                MAX_DIMENSION, self.rows, self.cols
            )));
        }

        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(Error::InvalidConfig(format!(
                "alive_probability must be within [0, 1], got {}",
                self.alive_probability
            )));
        }

        Ok(())
    }
}

/// Demo run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Random seed for reproducibility (entropy when absent)
    pub rng_seed: Option<u64>,
    /// Parameters of the random pattern
    pub random: SeedConfig,
    /// Generations to step each pattern
    pub generations: u64,
    /// Refuse seeds whose border holds live cells
    pub require_dead_border: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            random: SeedConfig::default(),
            generations: 1,
            require_dead_border: false,
        }
    }
}

impl DemoConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        let config: DemoConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.random.validate()?;

        if self.generations == 0 {
            return Err(Error::InvalidConfig(
                "generations must be at least 1".to_string(),
            ));
        }

        if self.generations > MAX_GENERATIONS {
            return Err(Error::InvalidConfig(format!(
                "generations must not exceed {}, got {}",
                MAX_GENERATIONS, self.generations
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let seed_config = SeedConfig::default();
        assert_eq!(seed_config.rows, 5);
        assert_eq!(seed_config.cols, 5);
        assert_eq!(seed_config.alive_probability, 0.5);

        let demo_config = DemoConfig::default();
        assert_eq!(demo_config.generations, 1);
        assert!(demo_config.rng_seed.is_none());
        assert!(demo_config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "rng_seed": 7, "random": { "rows": 12 } }"#;
        let config: DemoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.random.rows, 12);
        assert_eq!(config.random.cols, 5);
        assert_eq!(config.generations, 1);
    }

    #[test]
    fn test_invalid_configs() {
        let config = SeedConfig {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = SeedConfig {
            alive_probability: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = DemoConfig {
            generations: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_configs_rejected() {
        let config = SeedConfig {
            rows: 1_000_000_000_000,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = SeedConfig {
            cols: MAX_DIMENSION + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SeedConfig {
            rows: MAX_DIMENSION,
            cols: MAX_DIMENSION,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_huge_generations_rejected() {
        let json = r#"{ "generations": 18446744073709551615 }"#;
        let config: DemoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.generations, u64::MAX);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = DemoConfig {
            generations: MAX_GENERATIONS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let path = std::env::temp_dir().join(format!(
            "life-core-malformed-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "generations": "#).unwrap();

        let result = DemoConfig::from_json_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!(
            "life-core-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "generations": 4 }"#).unwrap();

        let config = DemoConfig::from_json_file(&path).unwrap();
        assert_eq!(config.generations, 4);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = DemoConfig::from_json_file("/nonexistent/life/config.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
