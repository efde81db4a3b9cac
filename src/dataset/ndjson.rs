use super::DatasetError;
use serde::de::DeserializeOwned;

/// Parse newline-delimited JSON into records, keeping source line order.
///
/// Blank lines are skipped. The first malformed line aborts the whole parse,
/// and the error carries its 1-based line number.
pub fn parse_ndjson<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, DatasetError> {
    let mut out = Vec::new();
    for (idx, line) in text.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|source| DatasetError::Json {
            line: idx + 1,
            source,
        })?;
        out.push(record);
    }
    Ok(out)
}
