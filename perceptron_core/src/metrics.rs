//! Evaluation metrics: per-epoch accuracy pairs and confusion matrices.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::learner::ensemble::Prediction;

/// Accuracy measured on the train and test sets at one point in a cycle.
///
/// Entry `epoch` is recorded before training that epoch; the final entry of a
/// cycle carries index `epoch_count` and reflects the fully trained weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    pub epoch: usize,
    pub train_accuracy: f32,
    pub test_accuracy: f32,
}

/// Grid of (actual label, predicted label) counts over an evaluation set.
///
/// The grid has `class_count` rows and `class_count + 1` columns: column
/// `class_count` buckets samples the classifier left unclassified, so the
/// no-class outcome is never used as a raw class index. Every row's total
/// equals the number of evaluated samples with that true label.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix {
    counts: Array2<u32>,
    class_count: usize,
}

impl ConfusionMatrix {
    /// Creates a zeroed matrix for `class_count` classes.
    pub fn new(class_count: usize) -> Self {
        Self {
            counts: Array2::zeros((class_count, class_count + 1)),
            class_count,
        }
    }

    /// Number of classes (rows).
    pub fn class_count(&self) -> usize {
        self.class_count
    }

    /// Records one evaluated sample.
    ///
    /// # Panics
    ///
    /// Panics if `actual` or a predicted class id is out of range; callers
    /// validate labels before recording.
    pub fn record(&mut self, actual: usize, prediction: Prediction) {
        let column = match prediction {
            Prediction::Class(id) => {
                assert!(id < self.class_count, "predicted class out of range");
                id
            }
            Prediction::Unclassified => self.class_count,
        };
        self.counts[[actual, column]] += 1;
    }

    /// Count of samples with true label `actual` predicted as `predicted`.
    pub fn count(&self, actual: usize, predicted: usize) -> u32 {
        self.counts[[actual, predicted]]
    }

    /// Count of samples with true label `actual` left unclassified.
    pub fn unclassified(&self, actual: usize) -> u32 {
        self.counts[[actual, self.class_count]]
    }

    /// Total samples with true label `actual`, unclassified column included.
    pub fn row_total(&self, actual: usize) -> u32 {
        self.counts.row(actual).sum()
    }

    /// Total correctly classified samples.
    pub fn diagonal_total(&self) -> u32 {
        self.counts.diag().sum()
    }

    /// Total misclassified samples, unclassified outcomes included.
    pub fn off_diagonal_total(&self) -> u32 {
        self.total() - self.diagonal_total()
    }

    /// Total recorded samples.
    pub fn total(&self) -> u32 {
        self.counts.sum()
    }

    /// One row of counts, unclassified column last.
    pub fn row(&self, actual: usize) -> Vec<u32> {
        self.counts.row(actual).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_fills_expected_cells() {
        let mut matrix = ConfusionMatrix::new(3);
        matrix.record(0, Prediction::Class(0));
        matrix.record(0, Prediction::Class(2));
        matrix.record(1, Prediction::Unclassified);

        assert_eq!(matrix.count(0, 0), 1);
        assert_eq!(matrix.count(0, 2), 1);
        assert_eq!(matrix.unclassified(1), 1);
        assert_eq!(matrix.total(), 3);
    }

    #[test]
    fn row_total_includes_unclassified_column() {
        let mut matrix = ConfusionMatrix::new(2);
        matrix.record(0, Prediction::Class(1));
        matrix.record(0, Prediction::Unclassified);
        matrix.record(0, Prediction::Class(0));

        assert_eq!(matrix.row_total(0), 3);
        assert_eq!(matrix.row_total(1), 0);
    }

    #[test]
    fn diagonal_and_off_diagonal_split_the_total() {
        let mut matrix = ConfusionMatrix::new(2);
        matrix.record(0, Prediction::Class(0));
        matrix.record(1, Prediction::Class(1));
        matrix.record(1, Prediction::Class(0));
        matrix.record(1, Prediction::Unclassified);

        assert_eq!(matrix.diagonal_total(), 2);
        assert_eq!(matrix.off_diagonal_total(), 2);
    }

    #[test]
    fn row_exposes_unclassified_column_last() {
        let mut matrix = ConfusionMatrix::new(2);
        matrix.record(1, Prediction::Unclassified);

        assert_eq!(matrix.row(1), vec![0, 0, 1]);
    }

    #[test]
    #[should_panic(expected = "predicted class out of range")]
    fn record_rejects_out_of_range_prediction() {
        let mut matrix = ConfusionMatrix::new(2);
        matrix.record(0, Prediction::Class(2));
    }
}
