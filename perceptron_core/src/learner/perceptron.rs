//! Single binary perceptron
//!
//! One weight vector plus the classic mistake-driven update rule: move the
//! weights toward a misclassified positive sample, away from a misclassified
//! negative one, scaled by the learning rate. A correctly classified sample
//! leaves the weights untouched.

use rand::rngs::StdRng;
use rand::Rng;

use crate::data::error::DataResult;
use crate::data::vector::FeatureVector;

/// A binary one-vs-rest classifier over fixed-dimension feature vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    weights: FeatureVector,
}

impl Perceptron {
    /// Creates a perceptron for `feature_count` raw features.
    ///
    /// The weight vector gets one extra slot for the bias component, matching
    /// the layout produced by [`crate::data::ImageSample::new`]. Weights
    /// start at zero; call [`Perceptron::seed`] before training.
    pub fn new(feature_count: usize) -> Self {
        Self {
            weights: FeatureVector::zeros(feature_count + 1),
        }
    }

    /// Creates a perceptron from an explicit weight vector.
    pub fn from_weights(weights: FeatureVector) -> Self {
        Self { weights }
    }

    /// Current weight vector, bias slot included.
    pub fn weights(&self) -> &FeatureVector {
        &self.weights
    }

    /// Full input dimension, bias slot included.
    pub fn input_dimension(&self) -> usize {
        self.weights.len()
    }

    /// Re-initializes every weight with an independent uniform draw from
    /// `[-range, range]`.
    ///
    /// Callable repeatedly; a reseed discards all prior weights. The RNG is
    /// threaded in explicitly so runs are reproducible from a single seed.
    pub fn seed(&mut self, rng: &mut StdRng, range: f32) {
        for weight in self.weights.values_mut().iter_mut() {
            *weight = (rng.gen::<f32>() - 0.5) * 2.0 * range;
        }
    }

    /// Raw score of a sample vector: the dot product with the weights.
    pub fn score(&self, features: &FeatureVector) -> DataResult<f32> {
        self.weights.dot(features)
    }

    /// One stochastic update from a single sample.
    ///
    /// The perceptron "fires" when the score is strictly positive. The error
    /// term is `+1` when it should have fired but did not, `-1` when it fired
    /// but should not have, and `0` when correct, in which case the weights
    /// are left bit-for-bit unchanged. Returns whether an update occurred.
    pub fn train_one(
        &mut self,
        features: &FeatureVector,
        is_target: bool,
        learning_rate: f32,
    ) -> DataResult<bool> {
        let fired = self.score(features)? > 0.0;
        let error = i32::from(is_target) - i32::from(fired);
        if error == 0 {
            return Ok(false);
        }

        let step = error as f32 * learning_rate;
        for (weight, value) in self
            .weights
            .values_mut()
            .iter_mut()
            .zip(features.values().iter())
        {
            *weight += step * value;
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn sample(values: Vec<f32>) -> FeatureVector {
        FeatureVector::from_values(values)
    }

    #[test]
    fn seed_draws_within_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut perceptron = Perceptron::new(8);
        perceptron.seed(&mut rng, 0.5);

        assert!(perceptron
            .weights()
            .values()
            .iter()
            .all(|w| w.abs() <= 0.5));
        assert!(perceptron.weights().values().iter().any(|&w| w != 0.0));
    }

    #[test]
    fn reseed_discards_prior_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut perceptron = Perceptron::new(4);
        perceptron.seed(&mut rng, 0.5);
        let first = perceptron.weights().clone();

        perceptron.seed(&mut rng, 0.5);
        assert_ne!(perceptron.weights(), &first);
    }

    #[test]
    fn no_mistake_leaves_weights_untouched() {
        let mut perceptron =
            Perceptron::from_weights(sample(vec![1.0, 1.0, 0.0]));
        let before = perceptron.weights().clone();

        // Already scores positive for a positive sample.
        let updated = perceptron
            .train_one(&sample(vec![1.0, 1.0, 1.0]), true, 0.1)
            .unwrap();

        assert!(!updated);
        assert_eq!(perceptron.weights(), &before);
    }

    #[test]
    fn mistake_moves_weights_toward_positive_sample() {
        let mut perceptron =
            Perceptron::from_weights(sample(vec![-1.0, -1.0, 0.0]));

        let updated = perceptron
            .train_one(&sample(vec![1.0, 1.0, 1.0]), true, 0.5)
            .unwrap();

        assert!(updated);
        assert_eq!(perceptron.weights(), &sample(vec![-0.5, -0.5, 0.5]));
    }

    #[test]
    fn converges_on_separable_two_point_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut perceptron = Perceptron::new(2);
        perceptron.seed(&mut rng, 0.5);

        let positive = sample(vec![1.0, 1.0, 1.0]);
        let negative = sample(vec![-1.0, -1.0, 1.0]);

        let mut converged = false;
        for _ in 0..100 {
            let a = perceptron.train_one(&positive, true, 0.1).unwrap();
            let b = perceptron.train_one(&negative, false, 0.1).unwrap();
            if !a && !b {
                converged = true;
                break;
            }
        }

        assert!(converged, "no convergence within the iteration limit");
        assert!(perceptron.score(&positive).unwrap() > 0.0);
        assert!(perceptron.score(&negative).unwrap() <= 0.0);
    }

    #[test]
    fn score_propagates_dimension_mismatch() {
        let perceptron = Perceptron::new(4);
        assert!(perceptron.score(&sample(vec![1.0, 2.0])).is_err());
    }
}
