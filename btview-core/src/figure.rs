//! Declarative figure model.
//!
//! A `Figure` describes a chart without committing to a display backend:
//! a list of traces (line or marker series) plus axis declarations.
//! Display backends map `SeriesRole` to concrete colors and `MarkerShape`
//! to glyphs; the renderer only says what each trace *is*.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Axis declaration. Purely descriptive; bounds are derived from data by
/// the display backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
}

impl Axis {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Marker glyph for scatter traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerShape {
    ArrowUp,
    ArrowDown,
}

/// How a trace is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceKind {
    Line,
    Markers(MarkerShape),
}

/// Semantic role of a trace. Backends pick colors per role so long
/// trades always read green-ish and shorts red-ish regardless of theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesRole {
    Price,
    Long,
    Short,
    Pnl,
}

/// One series in a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub name: String,
    /// Traces sharing a legend group toggle together (all series of one
    /// ticker on the book chart share the ticker as group).
    pub legend_group: Option<String>,
    pub kind: TraceKind,
    pub role: SeriesRole,
    pub points: Vec<(DateTime<Utc>, f64)>,
}

impl Trace {
    pub fn line(name: impl Into<String>, role: SeriesRole) -> Self {
        Self {
            name: name.into(),
            legend_group: None,
            kind: TraceKind::Line,
            role,
            points: Vec::new(),
        }
    }

    pub fn markers(name: impl Into<String>, shape: MarkerShape, role: SeriesRole) -> Self {
        Self {
            name: name.into(),
            legend_group: None,
            kind: TraceKind::Markers(shape),
            role,
            points: Vec::new(),
        }
    }

    pub fn with_legend_group(mut self, group: impl Into<String>) -> Self {
        self.legend_group = Some(group.into());
        self
    }

    pub fn with_points(mut self, points: Vec<(DateTime<Utc>, f64)>) -> Self {
        self.points = points;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A complete chart description handed to a display sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Declared secondary value axis. The book chart declares a
    /// "Position" axis that currently carries no traces; the declaration
    /// is part of the observable contract and is kept even though no
    /// series binds to it.
    pub secondary_y_axis: Option<Axis>,
    pub traces: Vec<Trace>,
}

impl Figure {
    pub fn new(title: impl Into<String>, x_axis: Axis, y_axis: Axis) -> Self {
        Self {
            title: title.into(),
            x_axis,
            y_axis,
            secondary_y_axis: None,
            traces: Vec::new(),
        }
    }

    pub fn with_secondary_y_axis(mut self, axis: Axis) -> Self {
        self.secondary_y_axis = Some(axis);
        self
    }

    pub fn add_trace(&mut self, trace: Trace) {
        self.traces.push(trace);
    }

    /// True when no trace has any points.
    pub fn has_no_data(&self) -> bool {
        self.traces.iter().all(Trace::is_empty)
    }

    /// Bounds over all trace points as ((x_min, x_max), (y_min, y_max)),
    /// with x in epoch seconds. None when the figure has no data.
    pub fn data_bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for trace in &self.traces {
            for &(time, value) in &trace.points {
                let x = time.timestamp() as f64;
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(value);
                y_max = y_max.max(value);
            }
        }
        if x_min.is_finite() {
            Some(((x_min, x_max), (y_min, y_max)))
        } else {
            None
        }
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
    fn empty_figure_has_no_data() {
        let mut fig = Figure::new("Test", Axis::new("Time"), Axis::new("Price"));
        assert!(fig.has_no_data());
        assert!(fig.data_bounds().is_none());

        fig.add_trace(Trace::line("Price AAPL", SeriesRole::Price));
        assert!(fig.has_no_data());
    }

    #[test]
    fn data_bounds_cover_all_traces() {
        let mut fig = Figure::new("Test", Axis::new("Time"), Axis::new("Price"));
        fig.add_trace(
            Trace::line("a", SeriesRole::Price).with_points(vec![(t(1), 10.0), (t(5), 20.0)]),
        );
        fig.add_trace(
            Trace::markers("b", MarkerShape::ArrowUp, SeriesRole::Long)
                .with_points(vec![(t(3), 50.0)]),
        );

        let ((x_min, x_max), (y_min, y_max)) = fig.data_bounds().unwrap();
        assert_eq!((x_min, x_max), (1.0, 5.0));
        assert_eq!((y_min, y_max), (10.0, 50.0));
    }

    #[test]
    fn figure_serialization_roundtrip() {
        let mut fig = Figure::new("B1", Axis::new("Time"), Axis::new("Price"))
            .with_secondary_y_axis(Axis::new("Position"));
        fig.add_trace(
            Trace::markers("Long Trades AAPL", MarkerShape::ArrowUp, SeriesRole::Long)
                .with_legend_group("AAPL")
                .with_points(vec![(t(1), 100.0)]),
        );

        let json = serde_json::to_string(&fig).unwrap();
        let deser: Figure = serde_json::from_str(&json).unwrap();
        assert_eq!(fig, deser);
    }
}
