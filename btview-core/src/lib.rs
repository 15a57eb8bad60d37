//! btview core — figure model and chart construction for backtest results.
//!
//! This crate turns a finished backtest result into declarative figures:
//! - Domain types (price table, trades, PnL records, cumulative tables)
//! - `ResultSource` — typed accessors over the precomputed tables
//! - `Figure`/`Trace` — backend-independent chart descriptions
//! - `DisplaySink` — injected display capability (terminal, recording)
//! - `ChartRenderer` — the four chart operations
//! - CSV ingest for loading result tables from disk
//!
//! The crate never computes PnL, matches trades, or mutates the result;
//! the engine that produced the tables lives elsewhere.

pub mod data;
pub mod domain;
pub mod figure;
pub mod render;
pub mod result;
pub mod sink;

pub use figure::{Axis, Figure, MarkerShape, SeriesRole, Trace, TraceKind};
pub use render::ChartRenderer;
pub use result::{BacktestTables, ResultSource};
pub use sink::{DisplaySink, RecordingSink, SinkError};
