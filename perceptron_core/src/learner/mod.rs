//! Learner module - perceptron classifiers and their training loop
//!
//! One binary perceptron per class, orchestrated as a disjoint one-vs-rest
//! bank, plus the epoch/cycle machinery that seeds, trains, and evaluates
//! the bank across a sequence of learning rates.

pub mod ensemble;
pub mod error;
pub mod perceptron;
pub mod training;

pub use ensemble::{ImageClassifier, MultiClassPerceptron, Prediction};
pub use error::{LearnerError, LearnerResult};
pub use perceptron::Perceptron;
pub use training::{
    run_cycle, run_experiment, train_epoch, CycleOutcome, CycleResult, ExperimentResult,
    TrainingError,
};
