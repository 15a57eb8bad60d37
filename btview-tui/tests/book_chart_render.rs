//! End-to-end: sample tables → renderer → figure → terminal buffer.

use btview_core::{ChartRenderer, RecordingSink, ResultSource};
use btview_tui::sample_data::sample_tables;
use btview_tui::{FigureView, Theme};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

fn buffer_content(buf: &Buffer, area: Rect) -> String {
    let mut content = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            content.push_str(buf.cell((x, y)).unwrap().symbol());
        }
    }
    content
}

#[test]
fn all_four_charts_render_from_sample_tables() {
    let tables = sample_tables();
    let renderer = ChartRenderer::new(&tables);
    let mut sink = RecordingSink::new();

    renderer.render_book_chart("trend", false, &mut sink).unwrap();
    renderer.render_cumulative_pnl_per_book(&mut sink).unwrap();
    renderer.render_cumulative_pnl(&mut sink).unwrap();
    renderer.render_individual_pnl_per_book(&mut sink).unwrap();

    let titles: Vec<&str> = sink.figures.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "trend",
            "Cumulative PnL per Book",
            "Cumulative PnL",
            "Individual PnL per Book",
        ]
    );

    let theme = Theme::default();
    let area = Rect::new(0, 0, 120, 36);
    for figure in &sink.figures {
        let mut buf = Buffer::empty(area);
        FigureView::new(figure, &theme).render(area, &mut buf);
        assert!(!buffer_content(&buf, area).trim().is_empty());
    }
}

#[test]
fn book_chart_buffer_shows_prices_and_both_marker_directions() {
    let tables = sample_tables();
    let renderer = ChartRenderer::new(&tables);

    // "trend" enters long and exits short, so both glyphs appear.
    let figure = renderer.book_figure("trend", true);
    let theme = Theme::default();
    let area = Rect::new(0, 0, 140, 40);
    let mut buf = Buffer::empty(area);
    FigureView::new(&figure, &theme).render(area, &mut buf);

    let content = buffer_content(&buf, area);
    assert!(content.contains("trend"));
    assert!(content.contains("y2: Position"));
    assert!(content.contains('\u{25B2}'), "expected long markers");
    assert!(content.contains('\u{25BC}'), "expected short markers");
}

#[test]
fn cumulative_per_book_has_one_trace_per_sample_book() {
    let tables = sample_tables();
    let figure = ChartRenderer::new(&tables).cumulative_pnl_per_book_figure();

    let expected: Vec<String> = tables
        .cumulative_pnl_per_book()
        .books()
        .map(|b| format!("Book {b}"))
        .collect();
    let actual: Vec<&str> = figure.traces.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(actual, expected);
}
