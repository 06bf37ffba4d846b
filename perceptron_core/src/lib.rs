//! # Perceptron Core
//!
//! A multi-class linear classifier built from one binary perceptron per
//! class, trained one-vs-rest on fixed-dimension feature vectors derived
//! from labeled images. The engine runs epoch-driven training/evaluation
//! cycles across a sequence of learning rates, streaming per-epoch accuracy
//! and a confusion matrix per cycle to pluggable reporting sinks.
//!
//! ## Quick Start
//!
//! ```rust
//! use perceptron_core::data::{generate_clusters, ClusterConfig};
//! use perceptron_core::learner::{run_cycle, MultiClassPerceptron};
//! use perceptron_core::report::NullReporter;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let dataset = generate_clusters(&ClusterConfig {
//!     class_count: 3,
//!     feature_count: 4,
//!     samples_per_class: 8,
//!     spread: 0.1,
//!     seed: 7,
//! })
//! .unwrap();
//!
//! let mut classifier = MultiClassPerceptron::new(3, 4);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let result = run_cycle(
//!     &mut classifier,
//!     &dataset,
//!     &dataset,
//!     5,
//!     0.1,
//!     0.5,
//!     &mut rng,
//!     &mut NullReporter,
//! )
//! .unwrap();
//!
//! assert_eq!(result.series.len(), 6);
//! ```
//!
//! ## Core Modules
//!
//! - [`config`] - Trainer configuration via TOML
//! - [`data`] - Feature vectors, labeled samples, and dataset loading
//! - [`learner`] - Perceptrons, the multi-class bank, and training cycles
//! - [`report`] - Console, delimited-file, and null reporting sinks
//! - [`logging`] - JSON line-delimited run logs

pub mod config;
pub mod data;
pub mod learner;
pub mod logging;
pub mod metrics;
pub mod report;

pub use config::{ConfigError, TrainerConfig};
pub use data::{
    generate_clusters, ClusterConfig, DataError, FeatureVector, ImageSample, ImageSet,
};
pub use learner::{
    run_cycle, run_experiment, train_epoch, CycleOutcome, CycleResult, ExperimentResult,
    ImageClassifier, LearnerError, MultiClassPerceptron, Perceptron, Prediction, TrainingError,
};
pub use metrics::{ConfusionMatrix, EpochMetrics};
pub use report::{ConsoleReporter, CsvReporter, NullReporter, Reporter};
