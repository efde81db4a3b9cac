//! Principal-component loading vectors of the audio features.
//!
//! The source CSV has a header row followed by rows of
//! `feature,pc0,pc1,pc2[,...]`. Only the first three components are read.
//! Fields are split on plain commas, quoted fields are not supported.

use crate::dataset::{DatasetError, DatasetSource, TextFetcher};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadingVector {
    pub pc0: f64,
    pub pc1: f64,
    pub pc2: f64,
}

pub type Loadings = BTreeMap<String, LoadingVector>;

fn parse_component(field: Option<&str>, line: usize, column: &str) -> Result<f64, DatasetError> {
    let raw = field
        .ok_or_else(|| DatasetError::csv(line, format!("missing {} column", column)))?
        .trim();
    raw.parse::<f64>()
        .map_err(|_| DatasetError::csv(line, format!("{} value {:?} is not a number", column, raw)))
}

pub fn parse_loadings(text: &str) -> Result<Loadings, DatasetError> {
    let mut loadings = Loadings::new();

    // The first line is the header.
    for (idx, line) in text.trim().split('\n').enumerate().skip(1) {
        let line_number = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let mut parts = line.trim_end_matches('\r').split(',');
        let feature = parts.next().unwrap_or_default().trim();
        if feature.is_empty() {
            return Err(DatasetError::csv(line_number, "missing feature name"));
        }

        let pc0 = parse_component(parts.next(), line_number, "pc0")?;
        let pc1 = parse_component(parts.next(), line_number, "pc1")?;
        let pc2 = parse_component(parts.next(), line_number, "pc2")?;
        loadings.insert(feature.to_owned(), LoadingVector { pc0, pc1, pc2 });
    }

    Ok(loadings)
}

pub async fn load_loadings(
    fetcher: &dyn TextFetcher,
    source: &DatasetSource,
) -> Result<Loadings, DatasetError> {
    let text = fetcher.fetch_text(source).await?;
    let loadings = parse_loadings(&text)?;
    info!("Loaded {} PCA loading vectors", loadings.len());
    Ok(loadings)
}
