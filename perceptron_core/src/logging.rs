use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::learner::training::CycleResult;
use crate::metrics::EpochMetrics;

fn log_dir() -> io::Result<()> {
    fs::create_dir_all("logs")
}

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[derive(Debug, Serialize)]
pub struct EpochLogEntry {
    pub learning_rate: f32,
    pub epoch: usize,
    pub train_accuracy: f32,
    pub test_accuracy: f32,
    pub timestamp_ms: u128,
}

pub fn log_epoch(learning_rate: f32, metrics: &EpochMetrics) -> io::Result<()> {
    log_dir()?;
    let entry = EpochLogEntry {
        learning_rate,
        epoch: metrics.epoch,
        train_accuracy: metrics.train_accuracy,
        test_accuracy: metrics.test_accuracy,
        timestamp_ms: timestamp_ms(),
    };
    append_json_line("logs/training.jsonl", &entry)
}

#[derive(Debug, Serialize)]
pub struct CycleLogEntry {
    pub learning_rate: f32,
    pub epochs: usize,
    pub final_train_accuracy: f32,
    pub final_test_accuracy: f32,
    pub elapsed_ms: u128,
    pub timestamp_ms: u128,
}

pub fn log_cycle(result: &CycleResult) -> io::Result<()> {
    log_dir()?;
    let entry = CycleLogEntry {
        learning_rate: result.learning_rate,
        epochs: result.series.len().saturating_sub(1),
        final_train_accuracy: result.final_train_accuracy(),
        final_test_accuracy: result.final_test_accuracy(),
        elapsed_ms: result.elapsed_ms,
        timestamp_ms: timestamp_ms(),
    };
    append_json_line("logs/cycles.jsonl", &entry)
}
