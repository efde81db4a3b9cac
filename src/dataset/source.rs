use std::fmt;
use std::path::{Path, PathBuf};

/// Where a dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    File(PathBuf),
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

impl DatasetSource {
    /// Resolve a configured location against the data root.
    ///
    /// Absolute URLs and absolute paths are taken as they are, anything else
    /// is joined onto `data_root`, which may itself be a URL or a directory.
    pub fn resolve(location: &str, data_root: &str) -> DatasetSource {
        if is_url(location) {
            return DatasetSource::Url(location.to_string());
        }
        if Path::new(location).is_absolute() {
            return DatasetSource::File(PathBuf::from(location));
        }
        if is_url(data_root) {
            let root = data_root.trim_end_matches('/');
            let relative = location.trim_start_matches("./").trim_start_matches('/');
            return DatasetSource::Url(format!("{}/{}", root, relative));
        }
        DatasetSource::File(Path::new(data_root).join(location))
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Url(url) => write!(f, "{}", url),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
