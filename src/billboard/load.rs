use super::ChartEntry;
use crate::dataset::{parse_ndjson, DatasetError, DatasetSource, TextFetcher};
use tracing::info;

/// Earliest chart year kept unless configured otherwise.
pub const DEFAULT_MIN_CHART_YEAR: i32 = 1980;

/// Parse chart entries, sort them by date and drop those before `min_year`.
///
/// The sort is stable, so entries sharing a date keep their source order.
pub fn parse_chart_entries(text: &str, min_year: i32) -> Result<Vec<ChartEntry>, DatasetError> {
    let mut entries: Vec<ChartEntry> = parse_ndjson(text)?;
    entries.sort_by(|a, b| a.date.cmp(&b.date));
    let parsed = entries.len();

    entries.retain(|entry| entry.year() >= min_year);
    info!(
        "Parsed {} chart entries, kept {} from {} onwards",
        parsed,
        entries.len(),
        min_year
    );
    Ok(entries)
}

/// Fetch and parse the chart dataset.
pub async fn load_chart_entries(
    fetcher: &dyn TextFetcher,
    source: &DatasetSource,
    min_year: i32,
) -> Result<Vec<ChartEntry>, DatasetError> {
    let text = fetcher.fetch_text(source).await?;
    parse_chart_entries(&text, min_year)
}
