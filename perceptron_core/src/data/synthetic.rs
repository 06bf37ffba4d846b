//! Synthetic cluster datasets for demos, tests, and benchmarks.
//!
//! Each class is centered on its own coordinate axis with uniform noise
//! around the centroid, so the classes are linearly separable for small
//! spreads and a perceptron bank is expected to reach full training accuracy
//! on them.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::error::{DataError, DataResult};
use crate::data::image_set::{ImageSample, ImageSet};

/// Distance of each class centroid from the origin along its axis.
const CENTROID_SCALE: f32 = 2.0;

/// Configuration for cluster dataset generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Number of classes (one centroid per class)
    pub class_count: usize,
    /// Raw feature dimension, bias excluded
    pub feature_count: usize,
    /// Number of samples generated per class
    pub samples_per_class: usize,
    /// Magnitude of the uniform noise around each centroid
    pub spread: f32,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            class_count: 10,
            feature_count: 16,
            samples_per_class: 50,
            spread: 0.15,
            seed: 42,
        }
    }
}

/// Generates a shuffled, linearly separable cluster dataset.
///
/// Requires `feature_count >= class_count` so every class gets a distinct
/// axis for its centroid.
pub fn generate_clusters(config: &ClusterConfig) -> DataResult<ImageSet> {
    if config.class_count == 0 {
        return Err(DataError::invalid_parameter(
            "class_count",
            "must be at least 1",
        ));
    }
    if config.feature_count < config.class_count {
        return Err(DataError::invalid_parameter(
            "feature_count",
            "must be at least class_count, one centroid axis per class",
        ));
    }
    if config.samples_per_class == 0 {
        return Err(DataError::invalid_parameter(
            "samples_per_class",
            "must be at least 1",
        ));
    }
    if !config.spread.is_finite() || config.spread < 0.0 {
        return Err(DataError::invalid_parameter(
            "spread",
            "must be finite and non-negative",
        ));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(config.class_count * config.samples_per_class);

    for class in 0..config.class_count {
        for _ in 0..config.samples_per_class {
            let mut features = vec![0.0; config.feature_count];
            features[class] = CENTROID_SCALE;
            for value in features.iter_mut() {
                *value += (rng.gen::<f32>() - 0.5) * 2.0 * config.spread;
            }
            samples.push(ImageSample::new(features, class));
        }
    }

    samples.shuffle(&mut rng);

    ImageSet::new(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_expected_sample_count() {
        let config = ClusterConfig {
            class_count: 3,
            feature_count: 4,
            samples_per_class: 5,
            spread: 0.1,
            seed: 7,
        };

        let set = generate_clusters(&config).unwrap();
        assert_eq!(set.len(), 15);
        assert_eq!(set.dimension(), Some(5));

        for class in 0..3 {
            let count = set.samples().iter().filter(|s| s.label() == class).count();
            assert_eq!(count, 5);
        }
    }

    #[test]
    fn same_seed_reproduces_dataset() {
        let config = ClusterConfig {
            class_count: 2,
            feature_count: 2,
            samples_per_class: 4,
            spread: 0.2,
            seed: 99,
        };

        let a = generate_clusters(&config).unwrap();
        let b = generate_clusters(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_too_few_feature_axes() {
        let config = ClusterConfig {
            class_count: 5,
            feature_count: 3,
            ..Default::default()
        };

        let err = generate_clusters(&config).unwrap_err();
        assert!(matches!(err, DataError::InvalidParameter { .. }));
    }

    #[test]
    fn samples_stay_near_centroids() {
        let config = ClusterConfig {
            class_count: 2,
            feature_count: 2,
            samples_per_class: 10,
            spread: 0.1,
            seed: 1,
        };

        let set = generate_clusters(&config).unwrap();
        for sample in set.samples() {
            let axis = sample.label();
            let along = sample.features().get(axis).unwrap();
            assert!((along - CENTROID_SCALE).abs() <= 0.1 + 1e-6);
        }
    }
}
