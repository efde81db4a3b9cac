use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// One track's position on the chart for one dated week.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ChartEntry {
    pub date: NaiveDate,
    pub id: String,
    /// Chart position, 1 is the top.
    #[serde(deserialize_with = "positive_rank")]
    pub rank: u32,
}

fn positive_rank<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match u32::deserialize(deserializer)? {
        0 => Err(de::Error::invalid_value(
            de::Unexpected::Unsigned(0),
            &"a chart rank of at least 1",
        )),
        rank => Ok(rank),
    }
}

impl ChartEntry {
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// Track id to the best (numerically lowest) rank it reached.
pub type PeakRanks = HashMap<String, u32>;

/// Keep `rank` for `id` if it beats the rank already recorded.
///
/// Equal ranks never overwrite, so the first one seen is kept.
pub(crate) fn record_peak(ranks: &mut PeakRanks, id: &str, rank: u32) {
    match ranks.get_mut(id) {
        Some(best) if rank < *best => *best = rank,
        Some(_) => {}
        None => {
            ranks.insert(id.to_owned(), rank);
        }
    }
}
