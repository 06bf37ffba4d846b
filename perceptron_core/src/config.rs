//! Trainer configuration management via TOML files.
//!
//! This module provides configuration parsing from TOML format with defaults
//! for the digit-recognition experiment: ten classes, 764 pixel intensities
//! per image, fifty epochs, and a fixed learning-rate sequence applied to
//! one shared classifier.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Trainer configuration loaded from a TOML file.
///
/// # Examples
///
/// ```
/// use perceptron_core::TrainerConfig;
///
/// let config = TrainerConfig::load_from_file("config/trainer.toml")
///     .unwrap_or_else(|_| TrainerConfig::default());
///
/// assert!(!config.learning_rates.is_empty());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct TrainerConfig {
    /// Number of classes, one perceptron each
    pub class_count: usize,
    /// Raw feature dimension, bias excluded
    pub feature_count: usize,
    /// Training epochs per learning-rate cycle
    pub epoch_count: usize,
    /// Learning rates, applied in order to the same classifier
    pub learning_rates: Vec<f32>,
    /// Half-width of the uniform weight seeding interval
    pub seed_range: f32,
    /// Seed for the run's pseudorandom generator
    pub seed: u64,
    /// Path of the delimited training dataset
    pub train_path: String,
    /// Path of the delimited test dataset
    pub test_path: String,
    /// Path of the delimited results file
    pub output_path: String,
}

impl TrainerConfig {
    /// Load trainer configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse trainer configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;
        Self::try_from_raw(raw.trainer)
    }

    fn try_from_raw(raw: RawTrainer) -> Result<Self, ConfigError> {
        if raw.class_count < 2 {
            return Err(ConfigError::Parse(
                "trainer.class_count must be at least 2".into(),
            ));
        }
        if raw.feature_count == 0 {
            return Err(ConfigError::Parse(
                "trainer.feature_count must be at least 1".into(),
            ));
        }
        if raw.epoch_count == 0 {
            return Err(ConfigError::Parse(
                "trainer.epoch_count must be at least 1".into(),
            ));
        }
        if raw.learning_rates.is_empty() {
            return Err(ConfigError::Parse(
                "trainer.learning_rates must not be empty".into(),
            ));
        }
        if raw
            .learning_rates
            .iter()
            .any(|rate| !rate.is_finite() || *rate <= 0.0)
        {
            return Err(ConfigError::Parse(
                "trainer.learning_rates entries must be finite and positive".into(),
            ));
        }
        if !raw.seed_range.is_finite() || raw.seed_range <= 0.0 {
            return Err(ConfigError::Parse(
                "trainer.seed_range must be finite and positive".into(),
            ));
        }

        Ok(Self {
            class_count: raw.class_count,
            feature_count: raw.feature_count,
            epoch_count: raw.epoch_count,
            learning_rates: raw.learning_rates,
            seed_range: raw.seed_range,
            seed: raw.seed,
            train_path: raw.train_path,
            test_path: raw.test_path,
            output_path: raw.output_path,
        })
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            class_count: default_class_count(),
            feature_count: default_feature_count(),
            epoch_count: default_epoch_count(),
            learning_rates: default_learning_rates(),
            seed_range: default_seed_range(),
            seed: default_seed(),
            train_path: default_train_path(),
            test_path: default_test_path(),
            output_path: default_output_path(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    trainer: RawTrainer,
}

#[derive(Debug, Deserialize)]
struct RawTrainer {
    #[serde(default = "default_class_count")]
    class_count: usize,
    #[serde(default = "default_feature_count")]
    feature_count: usize,
    #[serde(default = "default_epoch_count")]
    epoch_count: usize,
    #[serde(default = "default_learning_rates")]
    learning_rates: Vec<f32>,
    #[serde(default = "default_seed_range")]
    seed_range: f32,
    #[serde(default = "default_seed")]
    seed: u64,
    #[serde(default = "default_train_path")]
    train_path: String,
    #[serde(default = "default_test_path")]
    test_path: String,
    #[serde(default = "default_output_path")]
    output_path: String,
}

impl Default for RawTrainer {
    fn default() -> Self {
        Self {
            class_count: default_class_count(),
            feature_count: default_feature_count(),
            epoch_count: default_epoch_count(),
            learning_rates: default_learning_rates(),
            seed_range: default_seed_range(),
            seed: default_seed(),
            train_path: default_train_path(),
            test_path: default_test_path(),
            output_path: default_output_path(),
        }
    }
}

fn default_class_count() -> usize {
    10
}

fn default_feature_count() -> usize {
    764
}

fn default_epoch_count() -> usize {
    50
}

fn default_learning_rates() -> Vec<f32> {
    vec![0.001, 0.01, 0.1]
}

fn default_seed_range() -> f32 {
    0.5
}

fn default_seed() -> u64 {
    42
}

fn default_train_path() -> String {
    "mnist_train.csv".to_string()
}

fn default_test_path() -> String {
    "mnist_test.csv".to_string()
}

fn default_output_path() -> String {
    "output.csv".to_string()
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}
