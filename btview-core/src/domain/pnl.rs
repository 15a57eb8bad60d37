//! PnL records and the per-book cumulative PnL table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One PnL observation for one book at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlRecord {
    pub time: DateTime<Utc>,
    pub book: String,
    pub pnl: f64,
}

/// Time-indexed table with one cumulative-PnL column per book.
///
/// Invariant: every column holds exactly `times.len()` values. Columns
/// are NOT guaranteed monotone; cumulative PnL can fall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CumulativePnlTable {
    times: Vec<DateTime<Utc>>,
    columns: BTreeMap<String, Vec<f64>>,
}

impl CumulativePnlTable {
    pub fn new(times: Vec<DateTime<Utc>>) -> Self {
        Self {
            times,
            columns: BTreeMap::new(),
        }
    }

    /// Add a book column. Panics in debug builds if the length does not
    /// match the time index; the ingest layer checks this before calling.
    pub fn insert_column(&mut self, book: impl Into<String>, values: Vec<f64>) {
        debug_assert_eq!(values.len(), self.times.len());
        self.columns.insert(book.into(), values);
    }

    pub fn times(&self) -> &[DateTime<Utc>] {
        &self.times
    }

    pub fn books(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, book: &str) -> Option<&[f64]> {
        self.columns.get(book).map(Vec::as_slice)
    }

    /// Iterate (book, column) pairs in deterministic book order.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .map(|(book, values)| (book.as_str(), values.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
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
    fn columns_keep_book_order_deterministic() {
        let mut table = CumulativePnlTable::new(vec![t(1), t(2)]);
        table.insert_column("B2", vec![5.0, 5.0]);
        table.insert_column("B1", vec![10.0, 20.0]);

        let books: Vec<&str> = table.books().collect();
        assert_eq!(books, vec!["B1", "B2"]);
        assert_eq!(table.column("B1"), Some(&[10.0, 20.0][..]));
    }

    #[test]
    fn table_serialization_roundtrip() {
        let mut table = CumulativePnlTable::new(vec![t(1)]);
        table.insert_column("B1", vec![10.0]);
        let json = serde_json::to_string(&table).unwrap();
        let deser: CumulativePnlTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, deser);
    }
}
