//! Gap-free per-day value index.
//!
//! [`build_index`] turns sparse, arbitrarily-ordered `(date, value)` records
//! into a complete per-day map over a year span: every day from Jan 1 of
//! `start` through Dec 31 of `stop - 1` is present, days without a record
//! hold the [`SENTINEL`] value `-1.0`.
//!
//! The sentinel means "no data" and is distinct from an explicit `0`
//! ("zero activity"); downstream color mapping relies on the distinction.

mod error;
mod record;

pub use error::IndexError;
pub use record::{DateValueRecord, TimeRangeConfig};

use std::collections::BTreeMap;

use tracing::debug;

use nuwe_calendar::{year_days, Date, DatePattern};

/// Reserved value meaning "no data" for a calendar day.
pub const SENTINEL: f64 = -1.0;

/// Builds the per-day value index for a year span.
///
/// Every day in the span starts at [`SENTINEL`]; records are then overlaid
/// in input order, so a later record for the same day wins. Records whose
/// date falls outside the span are dropped silently (logged at debug).
/// A degenerate range (`stop <= start`) yields an empty map.
///
/// # Errors
///
/// Returns [`IndexError::RecordDate`] for the first record whose date
/// string cannot be parsed under `pattern`. Corrupt input fails fast
/// rather than becoming indistinguishable from absent data.
pub fn build_index(
    range: &TimeRangeConfig,
    records: &[DateValueRecord],
    pattern: &DatePattern,
) -> Result<BTreeMap<Date, f64>, IndexError> {
    let mut index = BTreeMap::new();

    let TimeRangeConfig::Range { start, stop } = *range;
    if stop <= start {
        debug!(start, stop, "degenerate time range, index is empty");
        return Ok(index);
    }

    for year in start..stop {
        for date in year_days(year) {
            index.insert(date, SENTINEL);
        }
    }

    let mut dropped = 0usize;
    for (position, record) in records.iter().enumerate() {
        let date = pattern
            .parse(&record.date)
            .map_err(|source| IndexError::RecordDate {
                position,
                date: record.date.clone(),
                source,
            })?;
        match index.get_mut(&date) {
            Some(slot) => *slot = record.value,
            None => {
                dropped += 1;
                debug!(date = %record.date, "record outside configured range dropped");
            }
        }
    }
    if dropped > 0 {
        debug!(dropped, total = records.len(), "out-of-range records dropped");
    }

    Ok(index)
}
