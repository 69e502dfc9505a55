//! User preference persistence.
//!
//! The dashboard owns its application state; this module supplies only the
//! storage capability it injects for the pieces that survive restarts
//! (theme, preferred period).

use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::domain::Period;
use crate::errors::InsightsError;

const HOME_ENV: &str = "INSIGHTS_CORE_HOME";
const DEFAULT_DIR_NAME: &str = ".insights_core";
const PREFS_FILE: &str = "preferences.json";
const TMP_SUFFIX: &str = "tmp";

/// Persisted dashboard preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default)]
    pub default_period: Period,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: None,
            default_period: Period::default(),
        }
    }
}

/// Key-value storage capability injected into the presentation layer.
pub trait PreferenceStore {
    fn load(&self) -> Result<Preferences, InsightsError>;
    fn save(&self, preferences: &Preferences) -> Result<(), InsightsError>;
}

/// File-backed store under the application data directory.
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: base.join(PREFS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load(&self) -> Result<Preferences, InsightsError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Preferences::default())
        }
    }

    fn save(&self, preferences: &Preferences) -> Result<(), InsightsError> {
        let json = serde_json::to_string_pretty(preferences)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Application data directory, defaulting to `~/.insights_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), InsightsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
