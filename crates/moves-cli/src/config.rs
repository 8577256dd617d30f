//! Configuration file loading for the move printer.
//!
//! This module provides types and functions for loading default step counts,
//! the knight convention and the generation strategy from a TOML file.

use moves_core::{
    check_step, Direction, KnightConfig, KnightConfigError, LegOrder, StepCounts, StepError,
};
use moves_engine::StrategyKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A configured step count is negative or above the limit.
    #[error("Invalid config value for steps.{field}: {source}")]
    InvalidStep {
        field: &'static str,
        source: StepError,
    },
    /// The configured knight legs are not perpendicular.
    #[error("Invalid knight configuration: {0}")]
    InvalidKnight(#[from] KnightConfigError),
}

/// Default step counts.
///
/// Values are read as signed integers so that a negative entry is reported
/// as a range error rather than a TOML type error.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StepsConfig {
    #[serde(default = "default_rook")]
    pub rook: i64,
    #[serde(default = "default_bishop")]
    pub bishop: i64,
    #[serde(default = "default_queen")]
    pub queen: i64,
    #[serde(default = "default_knight_vertical")]
    pub knight_vertical: i64,
    #[serde(default = "default_knight_horizontal")]
    pub knight_horizontal: i64,
}

fn default_rook() -> i64 {
    StepCounts::DEFAULT.rook.into()
}

fn default_bishop() -> i64 {
    StepCounts::DEFAULT.bishop.into()
}

fn default_queen() -> i64 {
    StepCounts::DEFAULT.queen.into()
}

fn default_knight_vertical() -> i64 {
    StepCounts::DEFAULT.knight_vertical.into()
}

fn default_knight_horizontal() -> i64 {
    StepCounts::DEFAULT.knight_horizontal.into()
}

impl Default for StepsConfig {
    fn default() -> Self {
        StepsConfig {
            rook: default_rook(),
            bishop: default_bishop(),
            queen: default_queen(),
            knight_vertical: default_knight_vertical(),
            knight_horizontal: default_knight_horizontal(),
        }
    }
}

impl StepsConfig {
    /// Validates the configured counts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStep`] naming the first out-of-range field.
    pub fn to_counts(&self) -> Result<StepCounts, ConfigError> {
        let check = |field: &'static str, value: i64| {
            check_step(value).map_err(|source| ConfigError::InvalidStep { field, source })
        };
        Ok(StepCounts {
            rook: check("rook", self.rook)?,
            bishop: check("bishop", self.bishop)?,
            queen: check("queen", self.queen)?,
            knight_vertical: check("knight_vertical", self.knight_vertical)?,
            knight_horizontal: check("knight_horizontal", self.knight_horizontal)?,
        })
    }
}

/// Knight leg convention. Defaults to up, right, vertical leg first.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct KnightSection {
    #[serde(default = "default_vertical")]
    pub vertical: Direction,
    #[serde(default = "default_horizontal")]
    pub horizontal: Direction,
    #[serde(default)]
    pub order: LegOrder,
}

fn default_vertical() -> Direction {
    KnightConfig::MASTER.vertical()
}

fn default_horizontal() -> Direction {
    KnightConfig::MASTER.horizontal()
}

impl Default for KnightSection {
    fn default() -> Self {
        KnightSection {
            vertical: default_vertical(),
            horizontal: default_horizontal(),
            order: LegOrder::default(),
        }
    }
}

impl KnightSection {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKnight`] if the legs are not perpendicular.
    pub fn to_config(&self) -> Result<KnightConfig, ConfigError> {
        Ok(KnightConfig::new(self.vertical, self.horizontal, self.order)?)
    }
}

/// Main configuration structure.
///
/// Only read when `--config PATH` is given; nothing is picked up implicitly.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct MovesConfig {
    /// Strategy used when `--strategy` is not given.
    #[serde(default)]
    pub strategy: StrategyKind,
    #[serde(default)]
    pub steps: StepsConfig,
    #[serde(default)]
    pub knight: KnightSection,
}

impl MovesConfig {
    /// Loads the configuration from `path`, or returns the built-in
    /// defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(config_path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::ReadError {
                path: config_path.to_path_buf(),
                source,
            })?;
        let config = toml::from_str(&content)?;
        tracing::info!("Loaded config from {}", config_path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
strategy = "recursive"

[steps]
rook = 7
bishop = 0
queen = 3
knight_vertical = 1
knight_horizontal = 1

[knight]
vertical = "down"
horizontal = "left"
order = "horizontal-first"
"#;

        let config: MovesConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.strategy, StrategyKind::Recursive);
        assert_eq!(
            config.steps.to_counts().unwrap(),
            StepCounts {
                rook: 7,
                bishop: 0,
                queen: 3,
                knight_vertical: 1,
                knight_horizontal: 1,
            }
        );
        assert_eq!(
            config.knight.to_config().unwrap(),
            KnightConfig::ADVENTURER.with_order(LegOrder::HorizontalFirst)
        );
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: MovesConfig = toml::from_str("").unwrap();

        assert_eq!(config, MovesConfig::default());
        assert_eq!(config.strategy, StrategyKind::Iterative);
        assert_eq!(config.steps.to_counts().unwrap(), StepCounts::DEFAULT);
        assert_eq!(config.knight.to_config().unwrap(), KnightConfig::MASTER);
    }

    #[test]
    fn test_partial_steps_use_defaults() {
        let config: MovesConfig = toml::from_str("[steps]\nqueen = 2\n").unwrap();
        let counts = config.steps.to_counts().unwrap();
        assert_eq!(counts.queen, 2);
        assert_eq!(counts.rook, 5);
        assert_eq!(counts.knight_horizontal, 1);
    }

    #[test]
    fn test_negative_step_is_rejected() {
        let config: MovesConfig = toml::from_str("[steps]\nbishop = -3\n").unwrap();
        match config.steps.to_counts() {
            Err(ConfigError::InvalidStep { field, .. }) => assert_eq!(field, "bishop"),
            other => panic!("Expected InvalidStep, got {:?}", other),
        }
    }

    #[test]
    fn test_step_above_limit_is_rejected() {
        let config: MovesConfig = toml::from_str("[steps]\nrook = 100001\n").unwrap();
        assert!(matches!(
            config.steps.to_counts(),
            Err(ConfigError::InvalidStep { field: "rook", .. })
        ));
    }

    #[test]
    fn test_parallel_knight_legs_rejected() {
        let config: MovesConfig =
            toml::from_str("[knight]\nvertical = \"left\"\nhorizontal = \"right\"\n").unwrap();
        assert!(matches!(
            config.knight.to_config(),
            Err(ConfigError::InvalidKnight(KnightConfigError::NotVertical(
                Direction::Left
            )))
        ));
    }

    #[test]
    fn test_unknown_strategy_fails_to_parse() {
        let result = toml::from_str::<MovesConfig>("strategy = \"greedy\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[steps]\nrook = 9").unwrap();

        let config = MovesConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.steps.rook, 9);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let result = MovesConfig::load(Some(&missing));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn test_load_without_path_returns_defaults() {
        let config = MovesConfig::load(None).unwrap();
        assert_eq!(config, MovesConfig::default());
        assert_eq!(config.steps.to_counts().unwrap(), StepCounts::DEFAULT);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = MovesConfig {
            strategy: StrategyKind::Recursive,
            steps: StepsConfig {
                rook: 1,
                ..StepsConfig::default()
            },
            knight: KnightSection {
                vertical: Direction::Down,
                horizontal: Direction::Left,
                order: LegOrder::VerticalFirst,
            },
        };

        let serialized = toml::to_string(&config).unwrap();
        let deserialized: MovesConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, config);
    }
}
