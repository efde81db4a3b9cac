//! Loads every dataset behind the page and answers the visualisations' queries.
//!
//! The datasets are fetched concurrently and independently: a dataset that
//! fails to load is logged and left empty, the others are unaffected. There
//! is no retry; loading again means calling [`DataManager::load_all`] again.

use crate::billboard::{load_chart_entries, ChartEntry, ChartIndex, PeakRanks};
use crate::catalog::{
    build_genre_distribution, load_tracks, super_genre_of, supergenre_colors, GenreCount,
    SuperGenre, Track, SUPERGENRE_ORDER,
};
use crate::dataset::{DatasetError, DatasetSource, TextFetcher};
use crate::pca::{load_loadings, Loadings};
use crate::trends::{load_feature_trends, YearlyFeatures};
use chrono::NaiveDate;
use std::fmt;
use tracing::{error, info};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Tracks,
    Billboard,
    PcaLoadings,
    FeatureTrends,
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatasetKind::Tracks => "track",
            DatasetKind::Billboard => "Billboard",
            DatasetKind::PcaLoadings => "PCA loadings",
            DatasetKind::FeatureTrends => "feature trends",
        };
        f.write_str(name)
    }
}

/// Locations of every dataset.
#[derive(Debug, Clone)]
pub struct DataSources {
    pub tracks: DatasetSource,
    pub billboard: DatasetSource,
    pub pca_loadings: DatasetSource,
    /// Optional, skipped when unset.
    pub feature_trends: Option<DatasetSource>,
    pub min_chart_year: i32,
}

#[derive(Debug)]
pub struct LoadFailure {
    pub dataset: DatasetKind,
    pub error: DatasetError,
}

/// Outcome of [`DataManager::load_all`].
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub failures: Vec<LoadFailure>,
}

impl LoadSummary {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self, dataset: DatasetKind) -> bool {
        self.failures.iter().any(|f| f.dataset == dataset)
    }
}

pub struct DataManager {
    sources: DataSources,

    tracks: Vec<Track>,
    genres: Vec<GenreCount>,

    chart: ChartIndex,

    loadings: Loadings,
    trends: Vec<YearlyFeatures>,
}

/// Unwrap a dataset result, recording the failure and falling back to empty.
fn settle<T: Default>(
    dataset: DatasetKind,
    result: Result<T, DatasetError>,
    summary: &mut LoadSummary,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            error!("Error loading {} data: {}", dataset, err);
            summary.failures.push(LoadFailure {
                dataset,
                error: err,
            });
            T::default()
        }
    }
}

impl DataManager {
    pub fn new(sources: DataSources) -> DataManager {
        DataManager {
            sources,
            tracks: Vec::new(),
            genres: Vec::new(),
            chart: ChartIndex::default(),
            loadings: Loadings::new(),
            trends: Vec::new(),
        }
    }

    pub fn sources(&self) -> &DataSources {
        &self.sources
    }

    /// Fetch and process all datasets concurrently.
    pub async fn load_all(&mut self, fetcher: &dyn TextFetcher) -> LoadSummary {
        let sources = self.sources.clone();
        let trends_source = sources.feature_trends.as_ref();

        let (tracks, chart, loadings, trends) = tokio::join!(
            load_tracks(fetcher, &sources.tracks),
            load_chart_entries(fetcher, &sources.billboard, sources.min_chart_year),
            load_loadings(fetcher, &sources.pca_loadings),
            async {
                match trends_source {
                    Some(source) => load_feature_trends(fetcher, source).await,
                    None => Ok(Vec::new()),
                }
            }
        );

        let mut summary = LoadSummary::default();
        self.set_tracks(settle(DatasetKind::Tracks, tracks, &mut summary));
        self.set_chart_entries(settle(DatasetKind::Billboard, chart, &mut summary));
        self.loadings = settle(DatasetKind::PcaLoadings, loadings, &mut summary);
        self.trends = settle(DatasetKind::FeatureTrends, trends, &mut summary);

        if summary.is_complete() {
            info!("All datasets loaded");
        } else {
            info!(
                "Loaded with {} failed dataset(s), their views will be empty",
                summary.failures.len()
            );
        }
        summary
    }

    /// Replace the tracks and rebuild the genre distribution.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.genres = build_genre_distribution(&tracks);
        info!("Found {} supergenres", self.genres.len());
        self.tracks = tracks;
    }

    /// Replace the chart entries and rebuild every chart index.
    pub fn set_chart_entries(&mut self, entries: Vec<ChartEntry>) {
        self.chart = ChartIndex::build(entries);
    }

    pub fn track_data(&self) -> &[Track] {
        &self.tracks
    }

    /// Supergenres with their track counts, in canonical order.
    pub fn all_genres(&self) -> &[GenreCount] {
        &self.genres
    }

    pub fn super_genre(&self, track: &Track) -> SuperGenre {
        super_genre_of(track)
    }

    pub fn super_genre_order(&self) -> &'static [SuperGenre] {
        &SUPERGENRE_ORDER
    }

    pub fn super_genre_colors(&self) -> [(SuperGenre, &'static str); 10] {
        supergenre_colors()
    }

    pub fn chart(&self) -> &ChartIndex {
        &self.chart
    }

    pub fn peak_rankings_for_year(&self, year: i32) -> PeakRanks {
        self.chart.peak_ranks_for_year(year)
    }

    /// Best ranks in the year starting at `week`.
    pub fn rankings_in_rolling_year(&self, week: NaiveDate) -> PeakRanks {
        self.chart.peak_ranks_in_rolling_year(week)
    }

    pub fn available_years(&self) -> Vec<i32> {
        self.chart.available_years()
    }

    pub fn available_weeks(&self) -> Vec<NaiveDate> {
        self.chart.available_weeks()
    }

    pub fn pca_loadings(&self) -> &Loadings {
        &self.loadings
    }

    pub fn feature_trends(&self) -> &[YearlyFeatures] {
        &self.trends
    }
}
