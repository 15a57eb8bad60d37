//! Time-indexed series and the per-ticker price table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered sequence of (time, value) points.
///
/// Invariant: timestamps ascend. `from_points` sorts on construction;
/// `push` appends and assumes the caller feeds points in order (the
/// ingest layer rejects out-of-order input before it gets here).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    points: Vec<(DateTime<Utc>, f64)>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a series from unordered points, sorting by time.
    pub fn from_points(mut points: Vec<(DateTime<Utc>, f64)>) -> Self {
        points.sort_by_key(|&(t, _)| t);
        Self { points }
    }

    pub fn push(&mut self, time: DateTime<Utc>, value: f64) {
        self.points.push((time, value));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(DateTime<Utc>, f64)] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &(DateTime<Utc>, f64)> {
        self.points.iter()
    }

    pub fn last_value(&self) -> Option<f64> {
        self.points.last().map(|&(_, v)| v)
    }
}

/// Per-ticker price series, keyed by ticker symbol.
///
/// BTreeMap so ticker iteration order is deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    series: BTreeMap<String, TimeSeries>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self {
            series: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, ticker: impl Into<String>, series: TimeSeries) {
        self.series.insert(ticker.into(), series);
    }

    pub fn get(&self, ticker: &str) -> Option<&TimeSeries> {
        self.series.get(ticker)
    }

    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn from_points_sorts_by_time() {
        let series = TimeSeries::from_points(vec![(t(3), 30.0), (t(1), 10.0), (t(2), 20.0)]);
        let times: Vec<i64> = series.iter().map(|&(ts, _)| ts.timestamp()).collect();
        assert_eq!(times, vec![1, 2, 3]);
        assert_eq!(series.last_value(), Some(30.0));
    }

    #[test]
    fn price_table_iterates_tickers_in_sorted_order() {
        let mut table = PriceTable::new();
        table.insert("MSFT", TimeSeries::new());
        table.insert("AAPL", TimeSeries::new());
        let tickers: Vec<&str> = table.tickers().collect();
        assert_eq!(tickers, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn series_serialization_roundtrip() {
        let series = TimeSeries::from_points(vec![(t(1), 100.0), (t(2), 101.5)]);
        let json = serde_json::to_string(&series).unwrap();
        let deser: TimeSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(series, deser);
    }
}
