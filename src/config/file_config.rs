use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    /// Directory or base URL that relative dataset locations are joined onto.
    pub data_root: Option<String>,
    pub tracks: Option<String>,
    pub billboard: Option<String>,
    pub pca_loadings: Option<String>,
    pub feature_trends: Option<String>,
    pub min_chart_year: Option<i32>,
    pub fetch_timeout_sec: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
