//! Errors raised while fetching or parsing a dataset.

use thiserror::Error;

/// Failure of a single dataset load.
///
/// Queries never produce these: looking up a year or week with no data
/// simply yields an empty result.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to fetch {location}: {reason}")]
    Fetch { location: String, reason: String },

    #[error("Malformed JSON on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed CSV on line {line}: {reason}")]
    Csv { line: usize, reason: String },
}

impl DatasetError {
    pub fn fetch(location: impl ToString, reason: impl ToString) -> Self {
        DatasetError::Fetch {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn csv(line: usize, reason: impl Into<String>) -> Self {
        DatasetError::Csv {
            line,
            reason: reason.into(),
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, DatasetError::Json { .. } | DatasetError::Csv { .. })
    }
}
