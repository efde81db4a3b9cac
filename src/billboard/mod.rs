mod entry;
mod index;
mod load;
mod window;

pub use entry::{ChartEntry, PeakRanks};
pub use index::ChartIndex;
pub use load::{load_chart_entries, parse_chart_entries, DEFAULT_MIN_CHART_YEAR};
pub use window::{first_entry_on_or_after, peak_ranks_between, rolling_year_end};
