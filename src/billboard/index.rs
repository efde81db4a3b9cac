//! Lookup structures built over the sorted chart entries.

use super::entry::record_peak;
use super::{ChartEntry, PeakRanks};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::info;

/// The chart entries, sorted by date, plus every index derived from them.
///
/// Indexes are only ever built wholesale from a full entry list; replacing
/// the entries means building a new `ChartIndex`.
#[derive(Debug, Clone, Default)]
pub struct ChartIndex {
    entries: Vec<ChartEntry>,
    by_week: BTreeMap<NaiveDate, PeakRanks>,
    by_year: BTreeMap<i32, PeakRanks>,
}

impl ChartIndex {
    /// Build all indexes in a single pass.
    ///
    /// Entries are sorted by date first if they are not already.
    pub fn build(mut entries: Vec<ChartEntry>) -> ChartIndex {
        if !entries.windows(2).all(|w| w[0].date <= w[1].date) {
            entries.sort_by(|a, b| a.date.cmp(&b.date));
        }

        let mut by_week: BTreeMap<NaiveDate, PeakRanks> = BTreeMap::new();
        let mut by_year: BTreeMap<i32, PeakRanks> = BTreeMap::new();
        for entry in entries.iter() {
            record_peak(
                by_week.entry(entry.date).or_default(),
                &entry.id,
                entry.rank,
            );
            record_peak(
                by_year.entry(entry.year()).or_default(),
                &entry.id,
                entry.rank,
            );
        }

        info!(
            "Indexed {} chart entries: {} years, {} weeks",
            entries.len(),
            by_year.len(),
            by_week.len()
        );

        ChartIndex {
            entries,
            by_week,
            by_year,
        }
    }

    /// Entries in ascending date order.
    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best rank per track over a calendar year; empty for years without data.
    pub fn peak_ranks_for_year(&self, year: i32) -> PeakRanks {
        self.by_year.get(&year).cloned().unwrap_or_default()
    }

    /// Best rank per track for one chart week; empty for unknown weeks.
    pub fn peak_ranks_for_week(&self, week: NaiveDate) -> PeakRanks {
        self.by_week.get(&week).cloned().unwrap_or_default()
    }

    /// Years with chart data, most recent first.
    pub fn available_years(&self) -> Vec<i32> {
        self.by_year.keys().rev().copied().collect()
    }

    /// Chart weeks with data, in chronological order.
    pub fn available_weeks(&self) -> Vec<NaiveDate> {
        self.by_week.keys().copied().collect()
    }
}
