//! Reporting sinks for accuracy streams and confusion matrices.
//!
//! The training cycle calls a [`Reporter`] once per produced accuracy pair
//! and once per completed matrix, so sinks see results as they happen rather
//! than in one batch at the end. Formatting is entirely the sink's concern.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::metrics::{ConfusionMatrix, EpochMetrics};

/// Receives training results in stream order.
pub trait Reporter {
    /// Called once when a learning-rate cycle begins.
    fn cycle_started(&mut self, _learning_rate: f32) -> io::Result<()> {
        Ok(())
    }

    /// Called once per accuracy pair, as it is measured.
    fn record_epoch(&mut self, learning_rate: f32, metrics: &EpochMetrics) -> io::Result<()>;

    /// Called once per completed confusion matrix.
    fn record_matrix(&mut self, learning_rate: f32, matrix: &ConfusionMatrix) -> io::Result<()>;
}

/// Prints progress to stdout.
///
/// Knows the configured epoch count so the post-training entry is labeled
/// `final` instead of an epoch number.
pub struct ConsoleReporter {
    epoch_count: usize,
}

impl ConsoleReporter {
    pub fn new(epoch_count: usize) -> Self {
        Self { epoch_count }
    }
}

impl Reporter for ConsoleReporter {
    fn cycle_started(&mut self, learning_rate: f32) -> io::Result<()> {
        println!("-----Starting LR={} cycle-----", learning_rate);
        Ok(())
    }

    fn record_epoch(&mut self, _learning_rate: f32, metrics: &EpochMetrics) -> io::Result<()> {
        if metrics.epoch == self.epoch_count {
            println!(
                "final - {:.4} : {:.4}",
                metrics.train_accuracy, metrics.test_accuracy
            );
        } else {
            println!(
                "{} - {:.4} : {:.4}",
                metrics.epoch, metrics.train_accuracy, metrics.test_accuracy
            );
        }
        Ok(())
    }

    fn record_matrix(&mut self, _learning_rate: f32, matrix: &ConfusionMatrix) -> io::Result<()> {
        println!();
        for actual in 0..matrix.class_count() {
            let row: Vec<String> = matrix
                .row(actual)
                .iter()
                .map(|count| count.to_string())
                .collect();
            println!("{}", row.join(" "));
        }
        println!("\n-----DONE-----\n");
        Ok(())
    }
}

/// Appends results to one delimited output file.
///
/// Each accuracy pair becomes a `train,test` line; each matrix becomes one
/// comma-delimited line per actual class (unclassified column last) followed
/// by a blank separator line.
pub struct CsvReporter {
    writer: BufWriter<File>,
}

impl CsvReporter {
    /// Creates (or truncates) the output file.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Reporter for CsvReporter {
    fn record_epoch(&mut self, _learning_rate: f32, metrics: &EpochMetrics) -> io::Result<()> {
        writeln!(
            self.writer,
            "{},{}",
            metrics.train_accuracy, metrics.test_accuracy
        )
    }

    fn record_matrix(&mut self, _learning_rate: f32, matrix: &ConfusionMatrix) -> io::Result<()> {
        for actual in 0..matrix.class_count() {
            let row: Vec<String> = matrix
                .row(actual)
                .iter()
                .map(|count| count.to_string())
                .collect();
            writeln!(self.writer, "{}", row.join(","))?;
        }
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

/// Discards everything; used by tests and benchmarks.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn record_epoch(&mut self, _learning_rate: f32, _metrics: &EpochMetrics) -> io::Result<()> {
        Ok(())
    }

    fn record_matrix(&mut self, _learning_rate: f32, _matrix: &ConfusionMatrix) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learner::Prediction;
    use std::fs;

    #[test]
    fn csv_reporter_writes_stream_in_order() {
        let path = std::env::temp_dir().join("perceptron_core_csv_reporter_test.csv");
        {
            let mut reporter = CsvReporter::create(&path).unwrap();
            reporter
                .record_epoch(
                    0.1,
                    &EpochMetrics {
                        epoch: 0,
                        train_accuracy: 0.25,
                        test_accuracy: 0.5,
                    },
                )
                .unwrap();

            let mut matrix = ConfusionMatrix::new(2);
            matrix.record(0, Prediction::Class(0));
            matrix.record(1, Prediction::Unclassified);
            reporter.record_matrix(0.1, &matrix).unwrap();
        }

        let contents = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "0.25,0.5");
        assert_eq!(lines[1], "1,0,0");
        assert_eq!(lines[2], "0,0,1");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn console_reporter_accepts_all_events() {
        let mut reporter = ConsoleReporter::new(1);
        reporter.cycle_started(0.01).unwrap();
        reporter
            .record_epoch(
                0.01,
                &EpochMetrics {
                    epoch: 0,
                    train_accuracy: 0.1,
                    test_accuracy: 0.1,
                },
            )
            .unwrap();
        reporter
            .record_epoch(
                0.01,
                &EpochMetrics {
                    epoch: 1,
                    train_accuracy: 0.9,
                    test_accuracy: 0.8,
                },
            )
            .unwrap();
        reporter
            .record_matrix(0.01, &ConfusionMatrix::new(2))
            .unwrap();
    }
}
