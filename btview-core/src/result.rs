//! Result-source contract and the in-memory table bundle.
//!
//! The backtest engine (external to this workspace) produces all five
//! tables, including both cumulative PnL views. The viewer only reads
//! them; nothing here computes PnL.

use crate::domain::{CumulativePnlTable, PnlRecord, PriceTable, TimeSeries, Trade};
use serde::{Deserialize, Serialize};

/// Typed accessors over a finished backtest result.
pub trait ResultSource {
    /// Per-ticker price series.
    fn prices(&self) -> &PriceTable;

    /// All trade records, one fill per entry.
    fn trades(&self) -> &[Trade];

    /// Per-book PnL observations.
    fn pnl(&self) -> &[PnlRecord];

    /// Cumulative PnL, one column per book, shared time index.
    fn cumulative_pnl_per_book(&self) -> &CumulativePnlTable;

    /// Total cumulative PnL across all books.
    fn cumulative_pnl(&self) -> &TimeSeries;
}

/// In-memory result: the five precomputed tables, nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BacktestTables {
    pub prices: PriceTable,
    pub trades: Vec<Trade>,
    pub pnl: Vec<PnlRecord>,
    pub cumulative_pnl_per_book: CumulativePnlTable,
    pub cumulative_pnl: TimeSeries,
}

impl BacktestTables {
    /// Books in first-appearance order across trades then PnL records.
    pub fn books(&self) -> Vec<String> {
        let mut books: Vec<String> = Vec::new();
        for book in self
            .trades
            .iter()
            .map(|t| &t.book)
            .chain(self.pnl.iter().map(|r| &r.book))
        {
            if !books.iter().any(|b| b == book) {
                books.push(book.clone());
            }
        }
        books
    }
}

impl ResultSource for BacktestTables {
    fn prices(&self) -> &PriceTable {
        &self.prices
    }

    fn trades(&self) -> &[Trade] {
        &self.trades
    }

    fn pnl(&self) -> &[PnlRecord] {
        &self.pnl
    }

    fn cumulative_pnl_per_book(&self) -> &CumulativePnlTable {
        &self.cumulative_pnl_per_book
    }

    fn cumulative_pnl(&self) -> &TimeSeries {
        &self.cumulative_pnl
    }
}
