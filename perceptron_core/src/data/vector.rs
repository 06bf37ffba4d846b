//! Fixed-dimension feature vectors.
//!
//! A [`FeatureVector`] is the numeric representation shared by image samples
//! and perceptron weights. Its dimension is set at construction and never
//! changes afterwards.

use ndarray::Array1;

use crate::data::error::{DataError, DataResult};

/// An owned, fixed-dimension vector of `f32` components.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Array1<f32>,
}

impl FeatureVector {
    /// Creates a vector of `dimension` zeros.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            values: Array1::zeros(dimension),
        }
    }

    /// Creates a vector from existing component values.
    pub fn from_values(values: Vec<f32>) -> Self {
        Self {
            values: Array1::from_vec(values),
        }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has zero components.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Component at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Read access to the underlying components.
    pub fn values(&self) -> &Array1<f32> {
        &self.values
    }

    /// Write access for in-place weight updates.
    pub(crate) fn values_mut(&mut self) -> &mut Array1<f32> {
        &mut self.values
    }

    /// Dot product of two vectors of equal dimension.
    ///
    /// Vectors of different dimension are rejected with
    /// [`DataError::DimensionMismatch`] rather than truncated to the shorter
    /// length, so a shape bug surfaces at the call site instead of skewing
    /// every score downstream.
    pub fn dot(&self, other: &FeatureVector) -> DataResult<f32> {
        if self.len() != other.len() {
            return Err(DataError::dimension_mismatch(self.len(), other.len()));
        }

        Ok(self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum())
    }
}
