mod error;
mod fetcher;
mod ndjson;
mod source;

pub use error::DatasetError;
pub use fetcher::{HttpFetcher, TextFetcher};
pub use ndjson::parse_ndjson;
pub use source::DatasetSource;
