//! CSV ingest for result tables.
//!
//! The engine that produced a result is outside this workspace, so the
//! viewer loads its tables from disk. Expected files:
//!
//! - prices: wide, `time,<ticker>,<ticker>,...` — empty cells allowed
//! - trades: `time,book,ticker,price,units`
//! - pnl: `time,book,pnl`
//! - cumulative per book: wide, `time,<book>,<book>,...`
//! - cumulative total: `time,pnl`
//!
//! Timestamps are RFC 3339 or integer epoch seconds. Time columns must
//! ascend; loaders reject out-of-order rows rather than silently
//! re-sorting someone else's index.

use crate::domain::{CumulativePnlTable, PnlRecord, PriceTable, TimeSeries, Trade};
use chrono::{DateTime, Utc};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("row {row}: bad number in column {column}: {value:?}")]
    BadNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: bad timestamp: {value:?}")]
    BadTimestamp { row: usize, value: String },

    #[error("row {row}: time index not ascending in {table}")]
    OutOfOrderTime { row: usize, table: &'static str },
}

/// Parse RFC 3339 or integer epoch seconds.
fn parse_time(value: &str, row: usize) -> Result<DateTime<Utc>, IngestError> {
    if let Ok(secs) = value.trim().parse::<i64>() {
        return DateTime::from_timestamp(secs, 0).ok_or_else(|| IngestError::BadTimestamp {
            row,
            value: value.to_string(),
        });
    }
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| IngestError::BadTimestamp {
            row,
            value: value.to_string(),
        })
}

fn parse_number(value: &str, row: usize, column: &str) -> Result<f64, IngestError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| IngestError::BadNumber {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
}

/// Locate named columns in a header row.
fn column_indices(
    headers: &csv::StringRecord,
    required: &[&str],
) -> Result<Vec<usize>, IngestError> {
    required
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|h| h.trim() == *name)
                .ok_or_else(|| IngestError::MissingColumn(name.to_string()))
        })
        .collect()
}

pub fn load_trades(path: impl AsRef<Path>) -> Result<Vec<Trade>, IngestError> {
    load_trades_from_reader(std::fs::File::open(path)?)
}

pub fn load_trades_from_reader(reader: impl Read) -> Result<Vec<Trade>, IngestError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let idx = column_indices(&headers, &["time", "book", "ticker", "price", "units"])?;

    let mut trades = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        trades.push(Trade {
            time: parse_time(&record[idx[0]], row)?,
            book: record[idx[1]].trim().to_string(),
            ticker: record[idx[2]].trim().to_string(),
            price: parse_number(&record[idx[3]], row, "price")?,
            units: parse_number(&record[idx[4]], row, "units")?,
        });
    }
    Ok(trades)
}

pub fn load_pnl(path: impl AsRef<Path>) -> Result<Vec<PnlRecord>, IngestError> {
    load_pnl_from_reader(std::fs::File::open(path)?)
}

pub fn load_pnl_from_reader(reader: impl Read) -> Result<Vec<PnlRecord>, IngestError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let idx = column_indices(&headers, &["time", "book", "pnl"])?;

    let mut records = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        records.push(PnlRecord {
            time: parse_time(&record[idx[0]], row)?,
            book: record[idx[1]].trim().to_string(),
            pnl: parse_number(&record[idx[2]], row, "pnl")?,
        });
    }
    Ok(records)
}

pub fn load_prices(path: impl AsRef<Path>) -> Result<PriceTable, IngestError> {
    load_prices_from_reader(std::fs::File::open(path)?)
}

/// Wide format: first column `time`, every other header is a ticker.
/// Empty cells mean "no price at this time" and are skipped.
pub fn load_prices_from_reader(reader: impl Read) -> Result<PriceTable, IngestError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    if headers.get(0).map(str::trim) != Some("time") {
        return Err(IngestError::MissingColumn("time".to_string()));
    }
    let tickers: Vec<String> = headers.iter().skip(1).map(|h| h.trim().to_string()).collect();

    let mut columns: Vec<TimeSeries> = vec![TimeSeries::new(); tickers.len()];
    let mut last_time: Option<DateTime<Utc>> = None;
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let time = parse_time(&record[0], row)?;
        if last_time.is_some_and(|prev| time <= prev) {
            return Err(IngestError::OutOfOrderTime { row, table: "prices" });
        }
        last_time = Some(time);

        for (col, series) in columns.iter_mut().enumerate() {
            let cell = record.get(col + 1).unwrap_or("");
            if cell.trim().is_empty() {
                continue;
            }
            series.push(time, parse_number(cell, row, &tickers[col])?);
        }
    }

    let mut table = PriceTable::new();
    for (ticker, series) in tickers.into_iter().zip(columns) {
        table.insert(ticker, series);
    }
    Ok(table)
}

pub fn load_cumulative_pnl_per_book(
    path: impl AsRef<Path>,
) -> Result<CumulativePnlTable, IngestError> {
    load_cumulative_pnl_per_book_from_reader(std::fs::File::open(path)?)
}

/// Wide format: first column `time`, every other header is a book.
pub fn load_cumulative_pnl_per_book_from_reader(
    reader: impl Read,
) -> Result<CumulativePnlTable, IngestError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    if headers.get(0).map(str::trim) != Some("time") {
        return Err(IngestError::MissingColumn("time".to_string()));
    }
    let books: Vec<String> = headers.iter().skip(1).map(|h| h.trim().to_string()).collect();

    let mut times: Vec<DateTime<Utc>> = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); books.len()];
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let time = parse_time(&record[0], row)?;
        if times.last().is_some_and(|&prev| time <= prev) {
            return Err(IngestError::OutOfOrderTime {
                row,
                table: "cumulative pnl per book",
            });
        }
        times.push(time);
        for (col, values) in columns.iter_mut().enumerate() {
            let cell = record.get(col + 1).unwrap_or("");
            values.push(parse_number(cell, row, &books[col])?);
        }
    }

    let mut table = CumulativePnlTable::new(times);
    for (book, values) in books.into_iter().zip(columns) {
        table.insert_column(book, values);
    }
    Ok(table)
}

pub fn load_cumulative_pnl(path: impl AsRef<Path>) -> Result<TimeSeries, IngestError> {
    load_cumulative_pnl_from_reader(std::fs::File::open(path)?)
}

pub fn load_cumulative_pnl_from_reader(reader: impl Read) -> Result<TimeSeries, IngestError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let idx = column_indices(&headers, &["time", "pnl"])?;

    let mut series = TimeSeries::new();
    let mut last_time: Option<DateTime<Utc>> = None;
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let time = parse_time(&record[idx[0]], row)?;
        if last_time.is_some_and(|prev| time <= prev) {
            return Err(IngestError::OutOfOrderTime {
                row,
                table: "cumulative pnl",
            });
        }
        last_time = Some(time);
        series.push(time, parse_number(&record[idx[1]], row, "pnl")?);
    }
    Ok(series)
}
