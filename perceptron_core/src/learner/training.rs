//! Epoch-driven training and evaluation cycles
//!
//! A cycle reseeds the classifier, then alternates evaluation and training
//! for a fixed number of epochs, streaming each accuracy pair to a reporter
//! as it is produced. An experiment runs one cycle per configured learning
//! rate against the same classifier instance; because every cycle starts by
//! reseeding, the runs are independent experiments, not continued training.

use std::fmt;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::config::TrainerConfig;
use crate::data::image_set::ImageSet;
use crate::learner::ensemble::{ImageClassifier, MultiClassPerceptron};
use crate::learner::error::{LearnerError, LearnerResult};
use crate::metrics::{ConfusionMatrix, EpochMetrics};
use crate::report::Reporter;

/// Error type for training cycles
#[derive(Debug)]
pub enum TrainingError {
    /// Classifier or evaluation failure; aborts the cycle rather than
    /// producing misleading metrics
    Learner(LearnerError),
    /// The reporter sink failed
    Report(std::io::Error),
}

impl fmt::Display for TrainingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainingError::Learner(err) => write!(f, "Training aborted: {}", err),
            TrainingError::Report(err) => write!(f, "Failed to emit training report: {}", err),
        }
    }
}

impl std::error::Error for TrainingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrainingError::Learner(err) => Some(err),
            TrainingError::Report(err) => Some(err),
        }
    }
}

impl From<LearnerError> for TrainingError {
    fn from(err: LearnerError) -> Self {
        TrainingError::Learner(err)
    }
}

impl From<std::io::Error> for TrainingError {
    fn from(err: std::io::Error) -> Self {
        TrainingError::Report(err)
    }
}

/// Accuracy series and timing for one completed cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CycleResult {
    /// Learning rate the cycle ran at
    pub learning_rate: f32,
    /// One entry per epoch plus a final post-training entry
    pub series: Vec<EpochMetrics>,
    /// Wall-clock duration of the cycle
    pub elapsed_ms: u128,
}

impl CycleResult {
    /// Training accuracy after the last epoch.
    pub fn final_train_accuracy(&self) -> f32 {
        self.series.last().map(|m| m.train_accuracy).unwrap_or(0.0)
    }

    /// Test accuracy after the last epoch.
    pub fn final_test_accuracy(&self) -> f32 {
        self.series.last().map(|m| m.test_accuracy).unwrap_or(0.0)
    }
}

/// One cycle's result paired with its post-training confusion matrix.
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    pub cycle: CycleResult,
    pub matrix: ConfusionMatrix,
}

/// Results for a full learning-rate sequence.
#[derive(Debug, Clone)]
pub struct ExperimentResult {
    pub cycles: Vec<CycleOutcome>,
}

/// One full pass of stochastic training over the set, in shuffled order.
///
/// Generates a uniformly random permutation of the sample indices, visiting
/// every sample exactly once, then feeds each sample to the classifier. The
/// shuffle is a Fisher-Yates permutation, not sampling with replacement.
pub fn train_epoch<C: ImageClassifier>(
    classifier: &mut C,
    train_set: &ImageSet,
    learning_rate: f32,
    rng: &mut StdRng,
) -> LearnerResult<()> {
    let mut order: Vec<usize> = (0..train_set.len()).collect();
    order.shuffle(rng);

    for index in order {
        classifier.train_sample(&train_set.samples()[index], learning_rate)?;
    }

    Ok(())
}

/// Runs one seeded training cycle at a single learning rate.
///
/// The classifier is reseeded up front, discarding whatever a previous cycle
/// learned; skipping that step would silently turn independent learning-rate
/// runs into continued training. Each epoch's accuracy pair is measured
/// BEFORE training that epoch and streamed to the reporter immediately; one
/// final pair after the last epoch brings the series to `epoch_count + 1`
/// entries.
#[allow(clippy::too_many_arguments)]
pub fn run_cycle<R: Reporter + ?Sized>(
    classifier: &mut MultiClassPerceptron,
    train_set: &ImageSet,
    test_set: &ImageSet,
    epoch_count: usize,
    learning_rate: f32,
    seed_range: f32,
    rng: &mut StdRng,
    reporter: &mut R,
) -> Result<CycleResult, TrainingError> {
    let start = Instant::now();

    classifier.seed_all(rng, seed_range);

    let mut series = Vec::with_capacity(epoch_count + 1);
    for epoch in 0..epoch_count {
        let metrics = measure(classifier, train_set, test_set, epoch)?;
        reporter.record_epoch(learning_rate, &metrics)?;
        series.push(metrics);

        train_epoch(classifier, train_set, learning_rate, rng)?;
    }

    let metrics = measure(classifier, train_set, test_set, epoch_count)?;
    reporter.record_epoch(learning_rate, &metrics)?;
    series.push(metrics);

    Ok(CycleResult {
        learning_rate,
        series,
        elapsed_ms: start.elapsed().as_millis(),
    })
}

/// Runs the configured learning-rate sequence against one classifier.
///
/// For each learning rate, in order: reseed-and-train via [`run_cycle`],
/// then build the test-set confusion matrix and emit it. The same classifier
/// instance is reused throughout; independence between runs comes from the
/// reseed inside each cycle.
pub fn run_experiment<R: Reporter + ?Sized>(
    classifier: &mut MultiClassPerceptron,
    train_set: &ImageSet,
    test_set: &ImageSet,
    config: &TrainerConfig,
    rng: &mut StdRng,
    reporter: &mut R,
) -> Result<ExperimentResult, TrainingError> {
    let mut cycles = Vec::with_capacity(config.learning_rates.len());

    for &learning_rate in &config.learning_rates {
        reporter.cycle_started(learning_rate)?;

        let cycle = run_cycle(
            classifier,
            train_set,
            test_set,
            config.epoch_count,
            learning_rate,
            config.seed_range,
            rng,
            reporter,
        )?;

        let matrix = classifier.confusion_matrix(test_set)?;
        reporter.record_matrix(learning_rate, &matrix)?;

        cycles.push(CycleOutcome { cycle, matrix });
    }

    Ok(ExperimentResult { cycles })
}

fn measure(
    classifier: &MultiClassPerceptron,
    train_set: &ImageSet,
    test_set: &ImageSet,
    epoch: usize,
) -> LearnerResult<EpochMetrics> {
    Ok(EpochMetrics {
        epoch,
        train_accuracy: classifier.accuracy(train_set)?,
        test_accuracy: classifier.accuracy(test_set)?,
    })
}
