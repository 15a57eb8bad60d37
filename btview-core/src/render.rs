//! Chart construction over a result source.
//!
//! `ChartRenderer` holds a borrow of the result source and nothing else.
//! Each operation is one stateless pass: select rows, shape them into a
//! `Figure`, hand the figure to the sink. No caching, no mutation of the
//! source.

use crate::domain::Trade;
use crate::figure::{Axis, Figure, MarkerShape, SeriesRole, Trace};
use crate::result::ResultSource;
use crate::sink::{DisplaySink, SinkError};
use chrono::{DateTime, Utc};

pub struct ChartRenderer<'a, S: ResultSource> {
    source: &'a S,
}

impl<'a, S: ResultSource> ChartRenderer<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Prices and trade markers for one book.
    ///
    /// With `exclude_non_traded` set, only tickers that traded in `book`
    /// are plotted; otherwise every ticker in the price table gets a
    /// line. A book with no trades yields empty marker traces, and a
    /// selected ticker without price data yields an empty line — neither
    /// is an error.
    pub fn render_book_chart(
        &self,
        book: &str,
        exclude_non_traded: bool,
        sink: &mut dyn DisplaySink,
    ) -> Result<(), SinkError> {
        sink.display(self.book_figure(book, exclude_non_traded))
    }

    /// Cumulative PnL, one line per book column.
    pub fn render_cumulative_pnl_per_book(
        &self,
        sink: &mut dyn DisplaySink,
    ) -> Result<(), SinkError> {
        sink.display(self.cumulative_pnl_per_book_figure())
    }

    /// Total cumulative PnL as a single line.
    pub fn render_cumulative_pnl(&self, sink: &mut dyn DisplaySink) -> Result<(), SinkError> {
        sink.display(self.cumulative_pnl_figure())
    }

    /// Raw per-book PnL observations, one line per book.
    pub fn render_individual_pnl_per_book(
        &self,
        sink: &mut dyn DisplaySink,
    ) -> Result<(), SinkError> {
        sink.display(self.individual_pnl_figure())
    }

    pub fn book_figure(&self, book: &str, exclude_non_traded: bool) -> Figure {
        let trades = self.source.trades();
        let tickers = self.select_tickers(book, exclude_non_traded);

        let mut figure = Figure::new(book, Axis::new("Time"), Axis::new("Price"))
            .with_secondary_y_axis(Axis::new("Position"));

        // Price lines first so they sit under the markers.
        for ticker in &tickers {
            let points = self
                .source
                .prices()
                .get(ticker)
                .map(|series| series.points().to_vec())
                .unwrap_or_default();
            figure.add_trace(
                Trace::line(format!("Price {ticker}"), SeriesRole::Price)
                    .with_legend_group(ticker.clone())
                    .with_points(points),
            );
        }

        for ticker in &tickers {
            let longs = marker_points(trades, book, ticker, Trade::is_long);
            let shorts = marker_points(trades, book, ticker, Trade::is_short);

            figure.add_trace(
                Trace::markers(
                    format!("Long Trades {ticker}"),
                    MarkerShape::ArrowUp,
                    SeriesRole::Long,
                )
                .with_legend_group(ticker.clone())
                .with_points(longs),
            );
            figure.add_trace(
                Trace::markers(
                    format!("Short Trades {ticker}"),
                    MarkerShape::ArrowDown,
                    SeriesRole::Short,
                )
                .with_legend_group(ticker.clone())
                .with_points(shorts),
            );
        }

        figure
    }

    pub fn cumulative_pnl_per_book_figure(&self) -> Figure {
        let table = self.source.cumulative_pnl_per_book();
        let mut figure = Figure::new(
            "Cumulative PnL per Book",
            Axis::new("Time"),
            Axis::new("Cumulative PnL"),
        );

        for (book, values) in table.iter_columns() {
            let points: Vec<(DateTime<Utc>, f64)> = table
                .times()
                .iter()
                .copied()
                .zip(values.iter().copied())
                .collect();
            figure.add_trace(
                Trace::line(format!("Book {book}"), SeriesRole::Pnl).with_points(points),
            );
        }

        figure
    }

    pub fn cumulative_pnl_figure(&self) -> Figure {
        let mut figure = Figure::new(
            "Cumulative PnL",
            Axis::new("Time"),
            Axis::new("Cumulative PnL"),
        );
        figure.add_trace(
            Trace::line("Cumulative PnL", SeriesRole::Pnl)
                .with_points(self.source.cumulative_pnl().points().to_vec()),
        );
        figure
    }

    pub fn individual_pnl_figure(&self) -> Figure {
        let mut figure = Figure::new(
            "Individual PnL per Book",
            Axis::new("Time"),
            Axis::new("PnL"),
        );

        // One series per book, books in first-appearance order.
        let mut series: Vec<(String, Vec<(DateTime<Utc>, f64)>)> = Vec::new();
        for record in self.source.pnl() {
            match series.iter_mut().find(|(book, _)| *book == record.book) {
                Some((_, points)) => points.push((record.time, record.pnl)),
                None => series.push((record.book.clone(), vec![(record.time, record.pnl)])),
            }
        }
        for (book, points) in series {
            figure.add_trace(Trace::line(format!("Book {book}"), SeriesRole::Pnl).with_points(points));
        }

        figure
    }

    fn select_tickers(&self, book: &str, exclude_non_traded: bool) -> Vec<String> {
        if !exclude_non_traded {
            return self.source.prices().tickers().map(str::to_owned).collect();
        }
        let mut tickers: Vec<String> = Vec::new();
        for trade in self.source.trades() {
            if trade.book == book && !tickers.iter().any(|t| *t == trade.ticker) {
                tickers.push(trade.ticker.clone());
            }
        }
        tickers
    }
}

fn marker_points(
    trades: &[Trade],
    book: &str,
    ticker: &str,
    side: impl Fn(&Trade) -> bool,
) -> Vec<(DateTime<Utc>, f64)> {
    trades
        .iter()
        .filter(|t| side(t) && t.book == book && t.ticker == ticker)
        .map(|t| (t.time, t.price))
        .collect()
}
