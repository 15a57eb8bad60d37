//! Figure widget — draws a `Figure` into a terminal buffer.
//!
//! Line traces go through ratatui's `Chart`/`Dataset`; marker traces are
//! written directly to the buffer as arrow glyphs after the chart, since
//! `Chart` has no point-annotation support. All traces share the primary
//! axis bounds. A declared secondary axis only contributes its title to
//! the block header.

use btview_core::{Figure, MarkerShape, SeriesRole, Trace, TraceKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use crate::theme::Theme;

/// Y-axis label width reserved on the left of the plot area.
const Y_LABEL_WIDTH: u16 = 8;

pub struct FigureView<'a> {
    figure: &'a Figure,
    theme: &'a Theme,
}

impl<'a> FigureView<'a> {
    pub fn new(figure: &'a Figure, theme: &'a Theme) -> Self {
        Self { figure, theme }
    }

    fn title(&self) -> String {
        match &self.figure.secondary_y_axis {
            Some(axis) => format!(" {} | y2: {} ", self.figure.title, axis.title),
            None => format!(" {} ", self.figure.title),
        }
    }
}

impl Widget for FigureView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(((x_min, x_max), (y_min, y_max))) = self.figure.data_bounds() else {
            let block = Block::default()
                .title(format!(" {} [No Data] ", self.figure.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.muted))
                .style(Style::default().bg(self.theme.background));
            block.render(area, buf);
            return;
        };

        // Pad the Y range so lines don't hug the frame.
        let y_range = y_max - y_min;
        let y_pad = if y_range > 0.0 { y_range * 0.05 } else { 1.0 };
        let y_lower = y_min - y_pad;
        let y_upper = y_max + y_pad;
        // Zero-width x range (single timestamp) would break scaling.
        let x_span = if x_max > x_min { x_max - x_min } else { 1.0 };
        let x_hi = x_min + x_span;

        // Line traces become datasets; the data must outlive the chart.
        let line_traces: Vec<&Trace> = self
            .figure
            .traces
            .iter()
            .filter(|tr| tr.kind == TraceKind::Line && !tr.is_empty())
            .collect();
        let line_data: Vec<Vec<(f64, f64)>> = line_traces
            .iter()
            .map(|tr| {
                tr.points
                    .iter()
                    .map(|&(time, value)| (time.timestamp() as f64, value))
                    .collect()
            })
            .collect();

        let datasets: Vec<Dataset> = line_traces
            .iter()
            .zip(line_data.iter())
            .enumerate()
            .map(|(i, (tr, data))| {
                let color = match tr.role {
                    SeriesRole::Long | SeriesRole::Short => self.theme.role_color(tr.role),
                    _ => self.theme.line_color(i),
                };
                Dataset::default()
                    .name(tr.name.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(color))
                    .data(data)
            })
            .collect();

        let x_labels = vec![
            Span::raw(format_time(x_min)),
            Span::raw(format_time(x_min + x_span / 2.0)),
            Span::raw(format_time(x_hi)),
        ];
        let y_labels = vec![
            Span::raw(format!("{y_lower:.2}")),
            Span::raw(format!("{:.2}", (y_lower + y_upper) / 2.0)),
            Span::raw(format!("{y_upper:.2}")),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(self.title())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent))
                    .style(Style::default().bg(self.theme.background)),
            )
            .x_axis(
                Axis::default()
                    .title(Span::styled(
                        self.figure.x_axis.title.clone(),
                        Style::default().fg(self.theme.text_secondary),
                    ))
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([x_min, x_hi])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(
                        self.figure.y_axis.title.clone(),
                        Style::default().fg(self.theme.text_secondary),
                    ))
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([y_lower, y_upper])
                    .labels(y_labels),
            );

        chart.render(area, buf);

        // Marker traces: arrow glyphs written over the rendered chart.
        // Approximate the plot area the same way the chart lays it out:
        // border + Y labels on the left, border + X labels at the bottom.
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let plot_left = inner.x + Y_LABEL_WIDTH;
        let plot_top = inner.y;
        let plot_width = inner.width.saturating_sub(Y_LABEL_WIDTH);
        let plot_height = inner.height.saturating_sub(2);

        if plot_width == 0 || plot_height == 0 {
            return;
        }

        for trace in &self.figure.traces {
            let TraceKind::Markers(shape) = trace.kind else {
                continue;
            };
            let (glyph, color) = match shape {
                MarkerShape::ArrowUp => ("\u{25B2}", self.theme.role_color(trace.role)), // ▲
                MarkerShape::ArrowDown => ("\u{25BC}", self.theme.role_color(trace.role)), // ▼
            };
            let style = Style::default().fg(color).add_modifier(Modifier::BOLD);

            for &(time, value) in &trace.points {
                let x_frac = (time.timestamp() as f64 - x_min) / x_span;
                let y_frac = if (y_upper - y_lower).abs() > 1e-9 {
                    (value - y_lower) / (y_upper - y_lower)
                } else {
                    0.5
                };

                let px = plot_left
                    + (x_frac.clamp(0.0, 1.0) * plot_width.saturating_sub(1) as f64) as u16;
                // Screen Y grows downward.
                let py = plot_top + plot_height.saturating_sub(1)
                    - (y_frac.clamp(0.0, 1.0) * plot_height.saturating_sub(1) as f64) as u16;

                if px < area.right().saturating_sub(1) && py < plot_top + plot_height {
                    buf.set_string(px, py, glyph, style);
                }
            }
        }
    }
}

fn format_time(epoch_secs: f64) -> String {
    chrono::DateTime::from_timestamp(epoch_secs as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
