//! Chartscope catalog library
//!
//! Loads the track, Billboard chart, PCA loading and feature trend datasets
//! behind the music storytelling page, and builds the genre taxonomy and
//! chart indexes the visualisations query.

pub mod billboard;
pub mod catalog;
pub mod config;
pub mod data_manager;
pub mod dataset;
pub mod pca;
pub mod trends;

// Re-export commonly used types for convenience
pub use billboard::{ChartEntry, ChartIndex, PeakRanks};
pub use catalog::{SuperGenre, Track};
pub use data_manager::{DataManager, DataSources, DatasetKind, LoadSummary};
pub use dataset::{DatasetError, DatasetSource, HttpFetcher, TextFetcher};
