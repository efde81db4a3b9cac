//! Year-by-year averages of audio features, the series behind the helix chart.

use crate::dataset::{DatasetError, DatasetSource, TextFetcher};
use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

const DATE_COLUMN: &str = "date";
const FEATURE_COLUMNS: [&str; 3] = ["energy", "valence", "acousticness"];

/// Mean feature values of every track dated in `year`.
///
/// A feature is `None` when no row of that year carries a numeric value for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyFeatures {
    pub year: i32,
    pub energy: Option<f64>,
    pub valence: Option<f64>,
    pub acousticness: Option<f64>,
}

#[derive(Default)]
struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    fn add(&mut self, raw: Option<&str>) {
        let value = raw.map(str::trim).and_then(|v| v.parse::<f64>().ok());
        if let Some(value) = value.filter(|v| v.is_finite()) {
            self.sum += value;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

fn column_index(header: &StringRecord, name: &str) -> Result<usize, DatasetError> {
    header
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| DatasetError::csv(1, format!("missing {} column", name)))
}

fn year_of(raw_date: &str, line: usize) -> Result<i32, DatasetError> {
    let raw_date = raw_date.trim();
    let year = raw_date
        .get(0..4)
        .filter(|_| raw_date.as_bytes().get(4) == Some(&b'-'))
        .and_then(|y| y.parse::<i32>().ok());
    year.ok_or_else(|| DatasetError::csv(line, format!("invalid date {:?}", raw_date)))
}

fn record_line(record: &StringRecord) -> usize {
    record
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or_default()
}

fn csv_error(err: csv::Error) -> DatasetError {
    let line = err
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or_default();
    DatasetError::csv(line, err.to_string())
}

/// Parse the feature CSV and average each feature per calendar year.
///
/// Fields follow RFC 4180, so quoted values may contain commas.
pub fn parse_feature_trends(text: &str) -> Result<Vec<YearlyFeatures>, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let header = reader.headers().map_err(csv_error)?.clone();
    if header.iter().all(|h| h.trim().is_empty()) {
        return Ok(Vec::new());
    }

    let date_idx = column_index(&header, DATE_COLUMN)?;
    let feature_idxs = FEATURE_COLUMNS
        .iter()
        .map(|name| column_index(&header, name))
        .collect::<Result<Vec<usize>, DatasetError>>()?;

    let mut by_year: BTreeMap<i32, [MeanAccumulator; 3]> = BTreeMap::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let line = record_line(&record);
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let raw_date = record
            .get(date_idx)
            .ok_or_else(|| DatasetError::csv(line, "missing date"))?;
        let year = year_of(raw_date, line)?;

        let accumulators = by_year.entry(year).or_default();
        for (acc, col) in accumulators.iter_mut().zip(&feature_idxs) {
            acc.add(record.get(*col));
        }
    }

    let trends: Vec<YearlyFeatures> = by_year
        .into_iter()
        .map(|(year, [energy, valence, acousticness])| YearlyFeatures {
            year,
            energy: energy.mean(),
            valence: valence.mean(),
            acousticness: acousticness.mean(),
        })
        .collect();
    Ok(trends)
}

pub async fn load_feature_trends(
    fetcher: &dyn TextFetcher,
    source: &DatasetSource,
) -> Result<Vec<YearlyFeatures>, DatasetError> {
    let text = fetcher.fetch_text(source).await?;
    let trends = parse_feature_trends(&text)?;
    info!("Computed feature trends for {} years", trends.len());
    Ok(trends)
}
