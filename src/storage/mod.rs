//! Dataset loading. The dataset is read once at startup and never written
//! back, so the storage surface is a single load operation.

pub mod json_backend;

pub use json_backend::{default_data_path, load_dataset_from_path, JsonStorage};

use crate::dataset::Dataset;
use crate::errors::InsightsError;

/// Trait that abstracts where the fixed dataset comes from.
pub trait DatasetSource {
    fn load(&self) -> Result<Dataset, InsightsError>;
}
