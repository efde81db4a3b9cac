use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw genre labels as they appear in the track dataset: a single string
/// or a list of strings, where individual list entries may be null.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum GenreLabels {
    Single(String),
    Many(Vec<Option<String>>),
}

impl GenreLabels {
    /// Non-blank labels in source order, trimmed.
    pub fn labels(&self) -> Vec<&str> {
        let raw: Vec<&str> = match self {
            GenreLabels::Single(label) => vec![label.as_str()],
            GenreLabels::Many(labels) => labels.iter().flatten().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .collect()
    }
}

/// One record of the track dataset.
///
/// Only `genres` is interpreted; every other field is kept verbatim.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct Track {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<GenreLabels>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Track {
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn genre_labels(&self) -> Vec<&str> {
        self.genres
            .as_ref()
            .map(GenreLabels::labels)
            .unwrap_or_default()
    }
}
