//! Synthetic result tables for running the viewer with no input files.
//!
//! A seeded random walk keeps the output stable across runs. The
//! cumulative tables are computed here because this generator plays the
//! engine's role; the viewer itself never derives them.

use btview_core::domain::{CumulativePnlTable, PnlRecord, PriceTable, TimeSeries, Trade};
use btview_core::BacktestTables;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DAYS: usize = 120;
const TICKERS: [(&str, f64); 3] = [("AAPL", 150.0), ("MSFT", 280.0), ("TSLA", 200.0)];
const BOOKS: [&str; 2] = ["trend", "carry"];

pub fn sample_tables() -> BacktestTables {
    let mut rng = StdRng::seed_from_u64(7);
    let start = Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
    let times: Vec<DateTime<Utc>> = (0..DAYS).map(|i| start + Duration::days(i as i64)).collect();

    // Price random walks, one per ticker.
    let mut prices = PriceTable::new();
    let mut walks: Vec<Vec<f64>> = Vec::new();
    for (ticker, base) in TICKERS {
        let mut level = base;
        let mut series = TimeSeries::new();
        let mut walk = Vec::with_capacity(DAYS);
        for &time in &times {
            level *= 1.0 + rng.gen_range(-0.02..0.022);
            series.push(time, level);
            walk.push(level);
        }
        prices.insert(ticker, series);
        walks.push(walk);
    }

    // A round-trip trade pair per book/ticker every ~40 days, entries
    // long for "trend" and short for "carry" so both marker sets show up.
    let mut trades = Vec::new();
    for (b, &book) in BOOKS.iter().enumerate() {
        for (k, (ticker, _)) in TICKERS.iter().enumerate() {
            let mut day = 5 + 7 * (b + k);
            while day + 20 < DAYS {
                let units = if b == 0 { 100.0 } else { -100.0 };
                trades.push(Trade {
                    time: times[day],
                    book: book.to_string(),
                    ticker: ticker.to_string(),
                    units,
                    price: walks[k][day],
                });
                trades.push(Trade {
                    time: times[day + 20],
                    book: book.to_string(),
                    ticker: ticker.to_string(),
                    units: -units,
                    price: walks[k][day + 20],
                });
                day += 40;
            }
        }
    }

    // Daily PnL per book plus the cumulative views the engine would
    // normally hand over.
    let mut pnl = Vec::new();
    let mut per_book = CumulativePnlTable::new(times.clone());
    let mut total = vec![0.0; DAYS];
    for &book in &BOOKS {
        let mut running = 0.0;
        let mut column = Vec::with_capacity(DAYS);
        for (i, &time) in times.iter().enumerate() {
            let daily = rng.gen_range(-400.0..450.0);
            pnl.push(PnlRecord {
                time,
                book: book.to_string(),
                pnl: daily,
            });
            running += daily;
            column.push(running);
            total[i] += running;
        }
        per_book.insert_column(book, column);
    }
    let cumulative_pnl = TimeSeries::from_points(times.into_iter().zip(total).collect());

    BacktestTables {
        prices,
        trades,
        pnl,
        cumulative_pnl_per_book: per_book,
        cumulative_pnl,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btview_core::ResultSource;

    #[test]
    fn sample_is_deterministic() {
        let a = sample_tables();
        let b = sample_tables();
        assert_eq!(a, b);
    }

    #[test]
    fn sample_covers_both_books_and_all_tickers() {
        let tables = sample_tables();
        assert_eq!(tables.prices.len(), 3);
        assert_eq!(tables.books(), vec!["trend", "carry"]);
        assert!(tables.trades.iter().any(|t| t.is_long()));
        assert!(tables.trades.iter().any(|t| t.is_short()));
        assert!(tables.trades.iter().all(|t| t.price > 0.0));
    }

    #[test]
    fn sample_cumulative_tables_share_the_time_index() {
        let tables = sample_tables();
        let table = tables.cumulative_pnl_per_book();
        assert_eq!(table.times().len(), DAYS);
        for (_, column) in table.iter_columns() {
            assert_eq!(column.len(), DAYS);
        }
        assert_eq!(tables.cumulative_pnl().len(), DAYS);
    }
}
