use async_trait::async_trait;
use chartscope_catalog::{DatasetError, DatasetSource, TextFetcher};
use std::collections::HashMap;

/// Serves dataset text from memory; unknown sources fail like a 404.
#[derive(Default)]
pub struct MemoryFetcher {
    files: HashMap<String, String>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, location: &str, text: &str) -> Self {
        self.files.insert(location.to_string(), text.to_string());
        self
    }
}

#[async_trait]
impl TextFetcher for MemoryFetcher {
    async fn fetch_text(&self, source: &DatasetSource) -> Result<String, DatasetError> {
        let key = source.to_string();
        self.files
            .get(&key)
            .cloned()
            .ok_or_else(|| DatasetError::fetch(key, "status 404 Not Found"))
    }
}
