use serde::{Deserialize, Serialize};

/// Category definition used by the dashboard's filter controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    pub name: String,
    pub color: String,
    pub icon: String,
}

/// Labelled preset for the period selector (`value` is a period token).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangePreset {
    pub label: String,
    pub value: String,
}

/// Static filter metadata served to the dashboard as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCatalog {
    #[serde(default)]
    pub categories: Vec<CategoryFilter>,
    #[serde(default)]
    pub date_range_presets: Vec<DateRangePreset>,
}
