//! Multi-class classification from a bank of disjoint perceptrons
//!
//! One [`Perceptron`] per class, trained one-vs-rest: every member sees every
//! sample, with only the member whose class matches the sample's label told
//! to treat it as positive. Classification picks the class whose member
//! scores strictly highest above zero; when no member clears zero the sample
//! stays unclassified rather than being forced into a class.

use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::data::image_set::{ImageSample, ImageSet};
use crate::learner::error::{LearnerError, LearnerResult};
use crate::learner::perceptron::Perceptron;
use crate::metrics::ConfusionMatrix;

/// Outcome of classifying one sample.
///
/// `Unclassified` is a first-class outcome, never a sentinel class id, so it
/// can not be mistaken for an array index downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    /// The classifier chose this class id.
    Class(usize),
    /// No member scored above zero.
    Unclassified,
}

impl Prediction {
    /// The chosen class id, if any.
    pub fn class(&self) -> Option<usize> {
        match self {
            Prediction::Class(id) => Some(*id),
            Prediction::Unclassified => None,
        }
    }

    /// Whether this prediction names the given class.
    pub fn is_class(&self, label: usize) -> bool {
        matches!(self, Prediction::Class(id) if *id == label)
    }
}

/// Classifiers that learn from single labeled samples.
///
/// The training loop is generic over this trait so tests can instrument
/// epoch traversal with stub classifiers.
pub trait ImageClassifier {
    /// Performs one stochastic update from a single sample.
    fn train_sample(&mut self, sample: &ImageSample, learning_rate: f32) -> LearnerResult<()>;

    /// Classifies a single sample.
    fn classify(&self, sample: &ImageSample) -> LearnerResult<Prediction>;
}

/// A bank of one-vs-rest perceptrons, one per class, index = class id.
///
/// All members share the same input dimension. Weights persist across
/// training cycles and are only reset by [`MultiClassPerceptron::seed_all`].
#[derive(Debug, Clone, PartialEq)]
pub struct MultiClassPerceptron {
    members: Vec<Perceptron>,
    class_count: usize,
}

impl MultiClassPerceptron {
    /// Creates a bank of `class_count` perceptrons over `feature_count` raw
    /// features (each member gets the extra bias slot).
    pub fn new(class_count: usize, feature_count: usize) -> Self {
        let members = (0..class_count)
            .map(|_| Perceptron::new(feature_count))
            .collect();
        Self {
            members,
            class_count,
        }
    }

    /// Builds a bank from explicit members, validating uniform dimensions.
    pub fn from_members(members: Vec<Perceptron>) -> LearnerResult<Self> {
        let first = members
            .first()
            .ok_or_else(|| LearnerError::empty_set("classifier construction"))?;
        let dimension = first.input_dimension();
        for member in &members {
            if member.input_dimension() != dimension {
                return Err(LearnerError::Data(
                    crate::data::DataError::dimension_mismatch(
                        dimension,
                        member.input_dimension(),
                    ),
                ));
            }
        }

        let class_count = members.len();
        Ok(Self {
            members,
            class_count,
        })
    }

    /// Number of classes.
    pub fn class_count(&self) -> usize {
        self.class_count
    }

    /// Shared input dimension, bias slot included.
    pub fn input_dimension(&self) -> usize {
        self.members[0].input_dimension()
    }

    /// Member for one class, for inspection.
    pub fn member(&self, class: usize) -> Option<&Perceptron> {
        self.members.get(class)
    }

    /// Reseeds every member independently with uniform draws from
    /// `[-range, range]`, discarding all learned weights.
    pub fn seed_all(&mut self, rng: &mut StdRng, range: f32) {
        for member in &mut self.members {
            member.seed(rng, range);
        }
    }

    /// Classifies a sample as the class with the strictly highest score.
    ///
    /// Only scores above zero compete: the running maximum starts at zero,
    /// so a member whose score is zero or negative never wins, and strict
    /// comparison keeps the earliest member on ties. When no member clears
    /// zero the sample is [`Prediction::Unclassified`].
    pub fn classify(&self, sample: &ImageSample) -> LearnerResult<Prediction> {
        let mut best_score = 0.0_f32;
        let mut best = Prediction::Unclassified;

        for (class, member) in self.members.iter().enumerate() {
            let score = member.score(sample.features())?;
            if score > best_score {
                best_score = score;
                best = Prediction::Class(class);
            }
        }

        Ok(best)
    }

    /// Fraction of samples whose predicted class matches their label.
    ///
    /// Fails with [`LearnerError::EmptySet`] on zero samples instead of
    /// dividing by zero. Evaluation never mutates the classifier, so the
    /// per-sample classifications run in parallel.
    pub fn accuracy(&self, set: &ImageSet) -> LearnerResult<f32> {
        if set.is_empty() {
            return Err(LearnerError::empty_set("accuracy"));
        }

        let predictions: LearnerResult<Vec<Prediction>> = set
            .samples()
            .par_iter()
            .map(|sample| self.classify(sample))
            .collect();

        let correct = predictions?
            .iter()
            .zip(set.samples())
            .filter(|(prediction, sample)| prediction.is_class(sample.label()))
            .count();

        Ok(correct as f32 / set.len() as f32)
    }

    /// Builds the (actual, predicted) count grid over an evaluation set.
    ///
    /// Unclassified outcomes land in the matrix's dedicated extra column.
    /// Fails on an empty set and on any label outside the class range.
    pub fn confusion_matrix(&self, set: &ImageSet) -> LearnerResult<ConfusionMatrix> {
        if set.is_empty() {
            return Err(LearnerError::empty_set("confusion matrix"));
        }

        let mut matrix = ConfusionMatrix::new(self.class_count);
        for sample in set.samples() {
            if sample.label() >= self.class_count {
                return Err(LearnerError::label_out_of_range(
                    sample.label(),
                    self.class_count,
                ));
            }
            let prediction = self.classify(sample)?;
            matrix.record(sample.label(), prediction);
        }

        Ok(matrix)
    }
}

impl ImageClassifier for MultiClassPerceptron {
    /// Trains every member on the sample before moving on, so all members
    /// see sample `i` before any member sees sample `i + 1`.
    fn train_sample(&mut self, sample: &ImageSample, learning_rate: f32) -> LearnerResult<()> {
        for (class, member) in self.members.iter_mut().enumerate() {
            member.train_one(sample.features(), sample.label() == class, learning_rate)?;
        }
        Ok(())
    }

    fn classify(&self, sample: &ImageSample) -> LearnerResult<Prediction> {
        MultiClassPerceptron::classify(self, sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FeatureVector;
    use rand::SeedableRng;

    fn bank_with_weights(rows: &[&[f32]]) -> MultiClassPerceptron {
        let members = rows
            .iter()
            .map(|row| Perceptron::from_weights(FeatureVector::from_values(row.to_vec())))
            .collect();
        MultiClassPerceptron::from_members(members).unwrap()
    }

    fn raw_sample(values: Vec<f32>, label: usize) -> ImageSample {
        ImageSample::from_vector(FeatureVector::from_values(values), label)
    }

    #[test]
    fn classify_picks_highest_positive_score() {
        let bank = bank_with_weights(&[&[1.0, 0.0], &[3.0, 0.0], &[2.0, 0.0]]);
        let sample = raw_sample(vec![1.0, 1.0], 0);

        assert_eq!(bank.classify(&sample).unwrap(), Prediction::Class(1));
    }

    #[test]
    fn classify_keeps_earliest_member_on_ties() {
        let bank = bank_with_weights(&[&[2.0, 0.0], &[2.0, 0.0]]);
        let sample = raw_sample(vec![1.0, 1.0], 0);

        assert_eq!(bank.classify(&sample).unwrap(), Prediction::Class(0));
    }

    #[test]
    fn classify_requires_strictly_positive_score() {
        // Highest score is exactly zero, which does not clear the floor.
        let bank = bank_with_weights(&[&[0.0, 0.0], &[-1.0, 0.0]]);
        let sample = raw_sample(vec![1.0, 1.0], 0);

        assert_eq!(bank.classify(&sample).unwrap(), Prediction::Unclassified);
    }

    #[test]
    fn classify_returns_unclassified_when_all_scores_negative() {
        let bank = bank_with_weights(&[&[-1.0, 0.0], &[-2.0, 0.0]]);
        let sample = raw_sample(vec![1.0, 1.0], 1);

        assert_eq!(bank.classify(&sample).unwrap(), Prediction::Unclassified);
    }

    #[test]
    fn accuracy_rejects_empty_set() {
        let bank = MultiClassPerceptron::new(2, 2);
        let set = ImageSet::new(Vec::new()).unwrap();

        assert_eq!(
            bank.accuracy(&set),
            Err(LearnerError::empty_set("accuracy")),
        );
    }

    #[test]
    fn accuracy_counts_exact_matches_only() {
        // Member 0 fires on the first axis, member 1 on the second.
        let bank = bank_with_weights(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]]);
        let set = ImageSet::new(vec![
            raw_sample(vec![1.0, 0.0, 1.0], 0),
            raw_sample(vec![0.0, 1.0, 1.0], 1),
            raw_sample(vec![1.0, 0.0, 1.0], 1),
            raw_sample(vec![-1.0, -1.0, 1.0], 0),
        ])
        .unwrap();

        let accuracy = bank.accuracy(&set).unwrap();
        assert!((accuracy - 0.5).abs() < 1e-6);
    }

    #[test]
    fn confusion_matrix_rejects_out_of_range_label() {
        let bank = MultiClassPerceptron::new(2, 2);
        let set = ImageSet::new(vec![raw_sample(vec![0.0, 0.0, 1.0], 5)]).unwrap();

        assert_eq!(
            bank.confusion_matrix(&set),
            Err(LearnerError::label_out_of_range(5, 2)),
        );
    }

    #[test]
    fn seed_all_reseeds_every_member() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut bank = MultiClassPerceptron::new(3, 4);
        bank.seed_all(&mut rng, 0.5);

        for class in 0..3 {
            let member = bank.member(class).unwrap();
            assert!(member.weights().values().iter().any(|&w| w != 0.0));
            assert!(member.weights().values().iter().all(|w| w.abs() <= 0.5));
        }
    }

    #[test]
    fn train_sample_updates_only_mistaken_members() {
        let bank = bank_with_weights(&[&[1.0, 0.0], &[-1.0, 0.0]]);
        let mut trained = bank.clone();
        let sample = raw_sample(vec![1.0, 1.0], 0);

        // Member 0 fires on its own class, member 1 stays silent: no mistakes.
        trained.train_sample(&sample, 0.1).unwrap();
        assert_eq!(trained, bank);
    }

    #[test]
    fn from_members_rejects_mixed_dimensions() {
        let members = vec![Perceptron::new(2), Perceptron::new(3)];
        assert!(MultiClassPerceptron::from_members(members).is_err());
    }
}
