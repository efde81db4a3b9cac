use anyhow::{Context, Result};
use chartscope_catalog::catalog::GenreCount;
use chartscope_catalog::config::{AppConfig, CliConfig, FileConfig};
use chartscope_catalog::{DataManager, HttpFetcher, LoadSummary, PeakRanks, SuperGenre};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Absolute form of the `--config` argument.
///
/// An existing file is canonicalized. A missing one is kept as given and only
/// anchored to the working directory, so `FileConfig::load` reports it.
fn config_path(arg: &str) -> Result<PathBuf> {
    let path = Path::new(arg);
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("Cannot resolve config path {}", arg));
    }
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().context("Cannot read working directory")?;
        Ok(cwd.join(path))
    }
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Values in the file override the flags.
    #[clap(long, value_parser = config_path)]
    pub config: Option<PathBuf>,

    /// Directory or base URL that relative dataset locations are resolved against.
    #[clap(long)]
    pub data_root: Option<String>,

    /// Location of the newline-delimited JSON track dataset.
    #[clap(long)]
    pub tracks: Option<String>,

    /// Location of the newline-delimited JSON Billboard chart dataset.
    #[clap(long)]
    pub billboard: Option<String>,

    /// Location of the PCA loadings CSV.
    #[clap(long)]
    pub pca_loadings: Option<String>,

    /// Location of the CSV the yearly feature trends are computed from.
    #[clap(long)]
    pub feature_trends: Option<String>,

    /// Chart entries dated before this year are dropped.
    #[clap(long)]
    pub min_chart_year: Option<i32>,

    /// Timeout in seconds for each HTTP fetch.
    #[clap(long)]
    pub fetch_timeout_sec: Option<u64>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dataset sizes and any datasets that failed to load.
    Summary,
    /// Track counts per supergenre.
    Genres,
    /// Peak chart ranks within a calendar year.
    Year { year: i32 },
    /// Peak chart ranks in the year starting at a week (YYYY-MM-DD).
    Window { week: NaiveDate },
    /// Years with chart data, most recent first.
    Years,
    /// Chart weeks, oldest first.
    Weeks,
    /// PCA loading vectors per audio feature.
    Loadings,
    /// Yearly audio feature averages.
    Trends,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            data_root: self.data_root.clone(),
            tracks: self.tracks.clone(),
            billboard: self.billboard.clone(),
            pca_loadings: self.pca_loadings.clone(),
            feature_trends: self.feature_trends.clone(),
            min_chart_year: self.min_chart_year,
            fetch_timeout_sec: self.fetch_timeout_sec,
        }
    }
}

#[derive(Serialize)]
struct FailureView {
    dataset: String,
    error: String,
}

#[derive(Serialize)]
struct SummaryView {
    tracks: usize,
    supergenres: usize,
    chart_entries: usize,
    chart_years: usize,
    chart_weeks: usize,
    pca_loadings: usize,
    trend_years: usize,
    failures: Vec<FailureView>,
}

#[derive(Serialize)]
struct GenreView {
    genre: SuperGenre,
    color: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct RankedTrack {
    id: String,
    rank: u32,
}

fn ranked(ranks: PeakRanks) -> Vec<RankedTrack> {
    let mut out: Vec<RankedTrack> = ranks
        .into_iter()
        .map(|(id, rank)| RankedTrack { id, rank })
        .collect();
    out.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.id.cmp(&b.id)));
    out
}

fn summary_view(manager: &DataManager, summary: &LoadSummary) -> SummaryView {
    SummaryView {
        tracks: manager.track_data().len(),
        supergenres: manager.all_genres().len(),
        chart_entries: manager.chart().len(),
        chart_years: manager.available_years().len(),
        chart_weeks: manager.available_weeks().len(),
        pca_loadings: manager.pca_loadings().len(),
        trend_years: manager.feature_trends().len(),
        failures: summary
            .failures
            .iter()
            .map(|f| FailureView {
                dataset: f.dataset.to_string(),
                error: f.error.to_string(),
            })
            .collect(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let fetcher = HttpFetcher::new(config.fetch_timeout_sec)?;
    let mut manager = DataManager::new(config.data_sources());
    let summary = manager.load_all(&fetcher).await;

    match cli_args.command {
        Command::Summary => print_json(&summary_view(&manager, &summary)),
        Command::Genres => {
            let genres: Vec<GenreView> = manager
                .all_genres()
                .iter()
                .map(|GenreCount { genre, count }| GenreView {
                    genre: *genre,
                    color: genre.color(),
                    count: *count,
                })
                .collect();
            print_json(&genres)
        }
        Command::Year { year } => print_json(&ranked(manager.peak_rankings_for_year(year))),
        Command::Window { week } => print_json(&ranked(manager.rankings_in_rolling_year(week))),
        Command::Years => print_json(&manager.available_years()),
        Command::Weeks => print_json(&manager.available_weeks()),
        Command::Loadings => print_json(manager.pca_loadings()),
        Command::Trends => print_json(&manager.feature_trends()),
    }
}
