//! Feature vectors, labeled samples, and dataset loading.

pub mod error;
pub mod image_set;
pub mod synthetic;
pub mod vector;

pub use error::{DataError, DataResult};
pub use image_set::{ImageSample, ImageSet};
pub use synthetic::{generate_clusters, ClusterConfig};
pub use vector::FeatureVector;
