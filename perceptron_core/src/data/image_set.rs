//! Labeled image samples and the sets that own them.
//!
//! An [`ImageSet`] is loaded once at startup from a delimited text file and
//! stays read-only for the rest of the run. Each record pairs an integer
//! class label with a fixed number of pixel intensities; intensities are
//! normalized into `[0, 1]` and a constant bias component of `1.0` is
//! appended so that classifiers learn an offset without special-casing it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data::error::{DataError, DataResult};
use crate::data::vector::FeatureVector;

/// Divisor that maps raw 8-bit pixel intensities into `[0, 1]`.
const INTENSITY_SCALE: f32 = 255.0;

/// The constant value of the appended bias component.
const BIAS_VALUE: f32 = 1.0;

/// One labeled image: a feature vector plus its class label.
///
/// The label is immutable after construction, and the final vector component
/// is the bias constant, written once here and never updated by training.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSample {
    features: FeatureVector,
    label: usize,
}

impl ImageSample {
    /// Builds a sample from raw feature values, appending the bias component.
    pub fn new(mut features: Vec<f32>, label: usize) -> Self {
        features.push(BIAS_VALUE);
        Self {
            features: FeatureVector::from_values(features),
            label,
        }
    }

    /// Builds a sample from a complete vector, bias component included.
    ///
    /// The caller is responsible for the final slot; this exists for callers
    /// that construct vectors directly, such as evaluation fixtures.
    pub fn from_vector(features: FeatureVector, label: usize) -> Self {
        Self { features, label }
    }

    /// The sample's feature vector, bias component included.
    pub fn features(&self) -> &FeatureVector {
        &self.features
    }

    /// The sample's class label.
    pub fn label(&self) -> usize {
        self.label
    }

    /// Full vector dimension, bias component included.
    pub fn dimension(&self) -> usize {
        self.features.len()
    }
}

/// An ordered, read-only collection of labeled samples.
///
/// Insertion order matches file order. Every member shares the same vector
/// dimension, enforced at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSet {
    samples: Vec<ImageSample>,
}

impl ImageSet {
    /// Wraps a sample list, verifying the uniform-dimension invariant.
    pub fn new(samples: Vec<ImageSample>) -> DataResult<Self> {
        if let Some(first) = samples.first() {
            let dimension = first.dimension();
            for sample in &samples {
                if sample.dimension() != dimension {
                    return Err(DataError::dimension_mismatch(
                        dimension,
                        sample.dimension(),
                    ));
                }
            }
        }

        Ok(Self { samples })
    }

    /// Loads a set from a delimited text file.
    ///
    /// Each line must hold an integer class label followed by exactly
    /// `feature_count` numeric fields. Intensities are divided by 255 before
    /// storage and the bias component is appended afterwards. Any malformed
    /// record aborts the whole load; the engine never trains on a partially
    /// parsed dataset.
    pub fn from_csv<P: AsRef<Path>>(path: P, feature_count: usize) -> DataResult<Self> {
        let display = path.as_ref().display().to_string();
        let file = File::open(&path).map_err(|err| DataError::io(&display, &err))?;
        Self::from_csv_reader(BufReader::new(file), feature_count, &display)
    }

    /// Loads a set from any buffered reader of delimited records.
    pub fn from_csv_reader<R: BufRead>(
        reader: R,
        feature_count: usize,
        context: &str,
    ) -> DataResult<Self> {
        let mut samples = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|err| DataError::io(context, &err))?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            samples.push(parse_record(trimmed, line_number, feature_count)?);
        }

        if samples.is_empty() {
            return Err(DataError::empty_set(context));
        }

        Self::new(samples)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the set holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&ImageSample> {
        self.samples.get(index)
    }

    /// All samples in insertion order.
    pub fn samples(&self) -> &[ImageSample] {
        &self.samples
    }

    /// Shared vector dimension, or `None` for an empty set.
    pub fn dimension(&self) -> Option<usize> {
        self.samples.first().map(ImageSample::dimension)
    }
}

fn parse_record(line: &str, line_number: usize, feature_count: usize) -> DataResult<ImageSample> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let expected = feature_count + 1;
    if fields.len() != expected {
        return Err(DataError::wrong_field_count(
            line_number,
            expected,
            fields.len(),
        ));
    }

    let label: usize = fields[0].parse().map_err(|_| {
        DataError::malformed_field(line_number, fields[0], "label must be a non-negative integer")
    })?;

    let mut features = Vec::with_capacity(feature_count + 1);
    for field in &fields[1..] {
        let value: f32 = field.parse().map_err(|_| {
            DataError::malformed_field(line_number, *field, "feature must be numeric")
        })?;
        features.push(value / INTENSITY_SCALE);
    }

    Ok(ImageSample::new(features, label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn sample_appends_bias_component() {
        let sample = ImageSample::new(vec![0.2, 0.4], 1);
        assert_eq!(sample.dimension(), 3);
        assert_eq!(sample.features().get(2), Some(1.0));
        assert_eq!(sample.label(), 1);
    }

    #[test]
    fn loads_records_and_normalizes_intensities() {
        let data = "3,0,255\n7,51,102\n";
        let set = ImageSet::from_csv_reader(Cursor::new(data), 2, "test input").unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.dimension(), Some(3));

        let first = set.get(0).unwrap();
        assert_eq!(first.label(), 3);
        assert_eq!(first.features().get(0), Some(0.0));
        assert_eq!(first.features().get(1), Some(1.0));
        assert_eq!(first.features().get(2), Some(1.0));

        let second = set.get(1).unwrap();
        assert_eq!(second.label(), 7);
        assert!((second.features().get(0).unwrap() - 0.2).abs() < 1e-6);
        assert!((second.features().get(1).unwrap() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn skips_blank_lines() {
        let data = "1,10,20\n\n2,30,40\n";
        let set = ImageSet::from_csv_reader(Cursor::new(data), 2, "test input").unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let data = "1,10\n";
        let err = ImageSet::from_csv_reader(Cursor::new(data), 2, "test input").unwrap_err();
        assert_eq!(err, DataError::wrong_field_count(1, 3, 2));
    }

    #[test]
    fn rejects_non_numeric_feature_with_line_context() {
        let data = "1,10,20\n2,oops,40\n";
        let err = ImageSet::from_csv_reader(Cursor::new(data), 2, "test input").unwrap_err();
        match err {
            DataError::MalformedField {
                line_number, field, ..
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(field, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_integer_label() {
        let data = "x,10,20\n";
        let err = ImageSet::from_csv_reader(Cursor::new(data), 2, "test input").unwrap_err();
        assert!(matches!(err, DataError::MalformedField { line_number: 1, .. }));
    }

    #[test]
    fn rejects_empty_input() {
        let err = ImageSet::from_csv_reader(Cursor::new(""), 2, "test input").unwrap_err();
        assert_eq!(err, DataError::empty_set("test input"));
    }

    #[test]
    fn new_rejects_mixed_dimensions() {
        let samples = vec![
            ImageSample::new(vec![0.1, 0.2], 0),
            ImageSample::new(vec![0.1], 1),
        ];
        let err = ImageSet::new(samples).unwrap_err();
        assert_eq!(err, DataError::dimension_mismatch(3, 2));
    }
}
