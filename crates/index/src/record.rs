//! Serde-facing record and time-range configuration.

use serde::{Deserialize, Serialize};

/// One sparse input observation: a date string plus its value.
///
/// The date string is interpreted under the chart's `data.scheme.date`
/// pattern. Duplicate dates are legal; the last record in sequence order
/// wins during index construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateValueRecord {
    /// Date string in the configured scheme pattern.
    pub date: String,
    /// The observed value. `0` means "zero activity", which is distinct
    /// from a missing day.
    pub value: f64,
}

/// Year span for the index, tagged `type = "range"` in the config tree.
///
/// `stop` is exclusive: `{start: 2016, stop: 2017}` covers exactly the
/// calendar year 2016.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TimeRangeConfig {
    /// A half-open `[start, stop)` span of calendar years.
    Range {
        /// First year covered.
        start: i32,
        /// First year not covered.
        stop: i32,
    },
}

impl TimeRangeConfig {
    /// Returns the first covered year.
    pub fn start(&self) -> i32 {
        let Self::Range { start, .. } = *self;
        start
    }

    /// Returns the first year past the span.
    pub fn stop(&self) -> i32 {
        let Self::Range { stop, .. } = *self;
        stop
    }

    /// Iterates the covered years; empty when `stop <= start`.
    pub fn years(&self) -> std::ops::Range<i32> {
        self.start()..self.stop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_record() {
        let record: DateValueRecord =
            serde_json::from_str(r#"{ "date": "2016-01-01", "value": 0.35 }"#).unwrap();
        assert_eq!(record.date, "2016-01-01");
        assert_eq!(record.value, 0.35);
    }

    #[test]
    fn deserialize_range() {
        let range: TimeRangeConfig =
            serde_json::from_str(r#"{ "type": "range", "start": 2016, "stop": 2017 }"#).unwrap();
        assert_eq!(range.start(), 2016);
        assert_eq!(range.stop(), 2017);
        assert_eq!(range.years().collect::<Vec<_>>(), vec![2016]);
    }

    #[test]
    fn deserialize_rejects_unknown_range_type() {
        let result =
            serde_json::from_str::<TimeRangeConfig>(r#"{ "type": "list", "years": [2016] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn years_empty_when_degenerate() {
        let range = TimeRangeConfig::Range {
            start: 2017,
            stop: 2016,
        };
        assert!(range.years().next().is_none());
    }
}
