//! # Generation Module
//!
//! Builds playable floors from hardcoded room templates and scatters foes
//! over them.
//!
//! Floor −1 is the outdoor approach, floor 0 the entry room and every floor
//! above that a generic room whose stairway moves around the walls.

pub mod dungeon;
pub mod encounters;
pub mod templates;

pub use dungeon::*;
pub use encounters::*;
pub use templates::*;

use crate::config;
use crate::{RrogueError, RrogueResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for level generation.
///
/// Can be loaded from a JSON file; missing fields fall back to the
/// defaults of [`GenerationConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Probability that a free floor tile receives a foe (0.0 to 1.0)
    pub foe_spawn_chance: f64,
    /// Floor the game starts on
    pub starting_floor: i32,
}

impl GenerationConfig {
    /// Creates the standard configuration with the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrogue::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(7);
    /// assert_eq!(config.seed, 7);
    /// assert_eq!(config.starting_floor, -1);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            foe_spawn_chance: config::FOE_SPAWN_CHANCE,
            starting_floor: APPROACH_FLOOR,
        }
    }

    /// Creates a configuration for testing with empty rooms.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            foe_spawn_chance: 0.0,
            starting_floor: APPROACH_FLOOR,
        }
    }

    /// Loads a configuration from a JSON file and validates it.
    pub fn from_json_file(path: impl AsRef<Path>) -> RrogueResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: GenerationConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        log::debug!("Loaded generation config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Checks that the values are usable.
    pub fn validate(&self) -> RrogueResult<()> {
        if !(0.0..=1.0).contains(&self.foe_spawn_chance) {
            return Err(RrogueError::InvalidState(format!(
                "foe_spawn_chance must be between 0 and 1, got {}",
                self.foe_spawn_chance
            )));
        }
        if self.starting_floor < APPROACH_FLOOR {
            return Err(RrogueError::InvalidState(format!(
                "starting_floor must be at least {}, got {}",
                APPROACH_FLOOR, self.starting_floor
            )));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Trait for generators that build content from a configuration.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> RrogueResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> RrogueResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation.
pub mod utils {
    use super::*;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::io::Write;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new(12345);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.foe_spawn_chance, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_testing_config_has_no_foes() {
        let config = GenerationConfig::for_testing(1);
        assert_eq!(config.foe_spawn_chance, 0.0);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut config = GenerationConfig::new(1);
        config.foe_spawn_chance = 1.5;
        assert!(config.validate().is_err());

        let mut config = GenerationConfig::new(1);
        config.starting_floor = -2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "seed": 99, "foe_spawn_chance": 0.2 }}"#).unwrap();

        let config = GenerationConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.foe_spawn_chance, 0.2);
        assert_eq!(config.starting_floor, -1);
    }

    #[test]
    fn test_from_json_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            GenerationConfig::from_json_file(file.path()),
            Err(RrogueError::Serde(_))
        ));

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            GenerationConfig::from_json_file(missing),
            Err(RrogueError::Io(_))
        ));
    }

    #[test]
    fn test_utils_rng_is_seeded() {
        let config = GenerationConfig::new(12345);
        let mut first = utils::create_rng(&config);
        let mut second = utils::create_rng(&config);
        assert_eq!(first.gen::<u64>(), second.gen::<u64>());
    }
}
