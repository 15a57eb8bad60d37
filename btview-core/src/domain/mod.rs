//! Domain types consumed by the chart renderer.
//!
//! Everything here is a read-only view of tables the backtest engine
//! already produced: price series, trade records, per-book PnL records,
//! and the two cumulative PnL tables. The renderer owns none of it.

mod pnl;
mod series;
mod trade;

pub use pnl::{CumulativePnlTable, PnlRecord};
pub use series::{PriceTable, TimeSeries};
pub use trade::{Trade, TradeDirection};
