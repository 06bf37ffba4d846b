//! Digit-recognition experiment over delimited image files.
//!
//! Loads a training and a test set, then runs the configured learning-rate
//! sequence against one shared classifier, writing progress to the console
//! and the delimited results file and appending JSONL run logs under `logs/`.
//!
//! Usage: cargo run --example train_digits [-- path/to/trainer.toml]

use std::env;
use std::io;

use anyhow::{Context, Result};
use perceptron_core::{
    logging, ConfusionMatrix, ConsoleReporter, CsvReporter, EpochMetrics, ImageSet,
    MultiClassPerceptron, Reporter, TrainerConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fans every event out to the console, the delimited file, and the JSONL log.
struct RunReporter {
    console: ConsoleReporter,
    csv: CsvReporter,
}

impl Reporter for RunReporter {
    fn cycle_started(&mut self, learning_rate: f32) -> io::Result<()> {
        self.console.cycle_started(learning_rate)?;
        self.csv.cycle_started(learning_rate)
    }

    fn record_epoch(&mut self, learning_rate: f32, metrics: &EpochMetrics) -> io::Result<()> {
        self.console.record_epoch(learning_rate, metrics)?;
        self.csv.record_epoch(learning_rate, metrics)?;
        logging::log_epoch(learning_rate, metrics)
    }

    fn record_matrix(&mut self, learning_rate: f32, matrix: &ConfusionMatrix) -> io::Result<()> {
        self.console.record_matrix(learning_rate, matrix)?;
        self.csv.record_matrix(learning_rate, matrix)
    }
}

fn main() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => TrainerConfig::load_from_file(&path)
            .with_context(|| format!("failed to load trainer config from {path}"))?,
        None => TrainerConfig::default(),
    };

    println!("loading data...");
    let train_set = ImageSet::from_csv(&config.train_path, config.feature_count)
        .with_context(|| format!("failed to load training set from {}", config.train_path))?;
    let test_set = ImageSet::from_csv(&config.test_path, config.feature_count)
        .with_context(|| format!("failed to load test set from {}", config.test_path))?;

    println!(
        "loaded {} training and {} test samples",
        train_set.len(),
        test_set.len()
    );

    let mut classifier = MultiClassPerceptron::new(config.class_count, config.feature_count);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut reporter = RunReporter {
        console: ConsoleReporter::new(config.epoch_count),
        csv: CsvReporter::create(&config.output_path)
            .with_context(|| format!("failed to create {}", config.output_path))?,
    };

    let result = perceptron_core::run_experiment(
        &mut classifier,
        &train_set,
        &test_set,
        &config,
        &mut rng,
        &mut reporter,
    )?;

    for outcome in &result.cycles {
        logging::log_cycle(&outcome.cycle)?;
    }

    Ok(())
}
