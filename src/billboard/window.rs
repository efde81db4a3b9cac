//! Rolling one-year window queries over the sorted chart entries.

use super::entry::record_peak;
use super::{ChartEntry, ChartIndex, PeakRanks};
use chrono::{Datelike, NaiveDate};

/// Index of the first entry dated on or after `target`.
///
/// `entries` must be sorted by date. Returns `None` when every entry is
/// earlier than `target`, including when there are no entries at all.
pub fn first_entry_on_or_after(entries: &[ChartEntry], target: NaiveDate) -> Option<usize> {
    let idx = entries.partition_point(|entry| entry.date < target);
    (idx < entries.len()).then_some(idx)
}

/// Exclusive end of the one-year window starting at `start`.
///
/// Calendar arithmetic: the same month and day one year later. A window
/// starting on Feb 29 ends on Mar 1 of the following year.
pub fn rolling_year_end(start: NaiveDate) -> NaiveDate {
    let next_year = start.year() + 1;
    start
        .with_year(next_year)
        .or_else(|| NaiveDate::from_ymd_opt(next_year, 3, 1))
        .unwrap_or(NaiveDate::MAX)
}

/// Best rank per track among entries dated in `[start, end)`.
pub fn peak_ranks_between(entries: &[ChartEntry], start: NaiveDate, end: NaiveDate) -> PeakRanks {
    let mut ranks = PeakRanks::new();
    let Some(first) = first_entry_on_or_after(entries, start) else {
        return ranks;
    };

    for entry in &entries[first..] {
        if entry.date >= end {
            break;
        }
        record_peak(&mut ranks, &entry.id, entry.rank);
    }
    ranks
}

impl ChartIndex {
    /// Best rank per track over the year following `start_week`.
    ///
    /// `start_week` does not have to be a chart week; the window covers
    /// `[start_week, start_week + 1 year)`.
    pub fn peak_ranks_in_rolling_year(&self, start_week: NaiveDate) -> PeakRanks {
        peak_ranks_between(self.entries(), start_week, rolling_year_end(start_week))
    }
}
