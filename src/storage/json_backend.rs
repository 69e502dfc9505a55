use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::dataset::Dataset;
use crate::errors::InsightsError;

use super::DatasetSource;

const DATA_PATH_ENV: &str = "INSIGHTS_CORE_DATA";
const DEFAULT_DATA_FILE: &str = "data/db.json";

/// Reads the dataset from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Uses the given path, falling back to the `INSIGHTS_CORE_DATA`
    /// environment variable and then the bundled `data/db.json`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(default_data_path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for JsonStorage {
    fn load(&self) -> Result<Dataset, InsightsError> {
        load_dataset_from_path(&self.path)
    }
}

/// Resolves the dataset path from the environment, or the bundled default.
pub fn default_data_path() -> PathBuf {
    env::var_os(DATA_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

pub fn load_dataset_from_path(path: &Path) -> Result<Dataset, InsightsError> {
    let data = fs::read_to_string(path)?;
    let dataset: Dataset = serde_json::from_str(&data)?;
    for warning in dataset.warnings() {
        tracing::warn!("{warning}");
    }
    tracing::info!(
        transactions = dataset.transactions.len(),
        trends = dataset.trends.len(),
        goals = dataset.goals.len(),
        "dataset loaded from {}",
        path.display()
    );
    Ok(dataset)
}
