mod file_config;

pub use file_config::FileConfig;

use crate::billboard::DEFAULT_MIN_CHART_YEAR;
use crate::data_manager::DataSources;
use crate::dataset::DatasetSource;
use anyhow::{bail, Result};

pub const DEFAULT_DATA_ROOT: &str = ".";
pub const DEFAULT_BILLBOARD: &str = "data/processed/billboard.ndjson";
pub const DEFAULT_PCA_LOADINGS: &str = "data/processed/spotify_track_pca_loadings.csv";
pub const DEFAULT_FETCH_TIMEOUT_SEC: u64 = 30;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub data_root: Option<String>,
    pub tracks: Option<String>,
    pub billboard: Option<String>,
    pub pca_loadings: Option<String>,
    pub feature_trends: Option<String>,
    pub min_chart_year: Option<i32>,
    pub fetch_timeout_sec: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_root: String,
    pub tracks: DatasetSource,
    pub billboard: DatasetSource,
    pub pca_loadings: DatasetSource,
    pub feature_trends: Option<DatasetSource>,
    pub min_chart_year: i32,
    pub fetch_timeout_sec: u64,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_root = file
            .data_root
            .or_else(|| cli.data_root.clone())
            .unwrap_or_else(|| DEFAULT_DATA_ROOT.to_string());

        let tracks = file.tracks.or_else(|| cli.tracks.clone()).ok_or_else(|| {
            anyhow::anyhow!("tracks must be specified via --tracks or in config file")
        })?;
        let billboard = file
            .billboard
            .or_else(|| cli.billboard.clone())
            .unwrap_or_else(|| DEFAULT_BILLBOARD.to_string());
        let pca_loadings = file
            .pca_loadings
            .or_else(|| cli.pca_loadings.clone())
            .unwrap_or_else(|| DEFAULT_PCA_LOADINGS.to_string());
        let feature_trends = file
            .feature_trends
            .or_else(|| cli.feature_trends.clone());

        let min_chart_year = file
            .min_chart_year
            .or(cli.min_chart_year)
            .unwrap_or(DEFAULT_MIN_CHART_YEAR);

        let fetch_timeout_sec = file
            .fetch_timeout_sec
            .or(cli.fetch_timeout_sec)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SEC);
        if fetch_timeout_sec == 0 {
            bail!("fetch_timeout_sec must be greater than 0");
        }

        Ok(Self {
            tracks: DatasetSource::resolve(&tracks, &data_root),
            billboard: DatasetSource::resolve(&billboard, &data_root),
            pca_loadings: DatasetSource::resolve(&pca_loadings, &data_root),
            feature_trends: feature_trends.map(|loc| DatasetSource::resolve(&loc, &data_root)),
            data_root,
            min_chart_year,
            fetch_timeout_sec,
        })
    }

    pub fn data_sources(&self) -> DataSources {
        DataSources {
            tracks: self.tracks.clone(),
            billboard: self.billboard.clone(),
            pca_loadings: self.pca_loadings.clone(),
            feature_trends: self.feature_trends.clone(),
            min_chart_year: self.min_chart_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_cli_only() {
        let cli = CliConfig {
            data_root: Some("/srv/site".to_string()),
            tracks: Some("data/tracks.ndjson".to_string()),
            feature_trends: Some("data/trends.csv".to_string()),
            min_chart_year: Some(1990),
            fetch_timeout_sec: Some(5),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(
            config.tracks,
            DatasetSource::File(PathBuf::from("/srv/site/data/tracks.ndjson"))
        );
        assert_eq!(
            config.billboard,
            DatasetSource::File(PathBuf::from("/srv/site").join(DEFAULT_BILLBOARD))
        );
        assert_eq!(
            config.feature_trends,
            Some(DatasetSource::File(PathBuf::from("/srv/site/data/trends.csv")))
        );
        assert_eq!(config.min_chart_year, 1990);
        assert_eq!(config.fetch_timeout_sec, 5);
    }

    #[test]
    fn test_resolve_toml_overrides_cli() {
        let cli = CliConfig {
            data_root: Some("/cli/root".to_string()),
            tracks: Some("cli.ndjson".to_string()),
            min_chart_year: Some(1990),
            fetch_timeout_sec: Some(5),
            ..Default::default()
        };
        let file_config = FileConfig {
            data_root: Some("http://localhost:8000".to_string()),
            tracks: Some("toml.ndjson".to_string()),
            min_chart_year: Some(2000),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, Some(file_config)).unwrap();

        // TOML values should override CLI
        assert_eq!(
            config.tracks,
            DatasetSource::Url("http://localhost:8000/toml.ndjson".to_string())
        );
        assert_eq!(config.min_chart_year, 2000);
        // CLI value used when TOML doesn't specify
        assert_eq!(config.fetch_timeout_sec, 5);
    }

    #[test]
    fn test_resolve_defaults() {
        let cli = CliConfig {
            tracks: Some("t.ndjson".to_string()),
            ..Default::default()
        };
        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.data_root, DEFAULT_DATA_ROOT);
        assert_eq!(config.min_chart_year, 1980);
        assert_eq!(config.fetch_timeout_sec, DEFAULT_FETCH_TIMEOUT_SEC);
        assert!(config.feature_trends.is_none());
        assert_eq!(
            config.pca_loadings,
            DatasetSource::File(PathBuf::from(".").join(DEFAULT_PCA_LOADINGS))
        );
    }

    #[test]
    fn test_resolve_missing_tracks_error() {
        let result = AppConfig::resolve(&CliConfig::default(), None);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("tracks must be specified"));
    }

    #[test]
    fn test_resolve_zero_timeout_error() {
        let cli = CliConfig {
            tracks: Some("t.ndjson".to_string()),
            fetch_timeout_sec: Some(0),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.unwrap_err().to_string().contains("greater than 0"));
    }

    #[test]
    fn test_data_sources() {
        let cli = CliConfig {
            tracks: Some("https://example.com/t.ndjson".to_string()),
            min_chart_year: Some(1985),
            ..Default::default()
        };
        let sources = AppConfig::resolve(&cli, None).unwrap().data_sources();
        assert_eq!(
            sources.tracks,
            DatasetSource::Url("https://example.com/t.ndjson".to_string())
        );
        assert_eq!(sources.min_chart_year, 1985);
        assert!(sources.feature_trends.is_none());
    }
}
