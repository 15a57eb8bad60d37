//! Key bindings for the viewer.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, ChartKind};

/// - `1`..`4` — select chart
/// - `[` / `]` — previous/next book (book chart)
/// - `e` — toggle exclude-non-traded (book chart)
/// - `q` / Esc — quit
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('1') => app.select_chart(ChartKind::Book),
        KeyCode::Char('2') => app.select_chart(ChartKind::CumulativePnlPerBook),
        KeyCode::Char('3') => app.select_chart(ChartKind::CumulativePnl),
        KeyCode::Char('4') => app.select_chart(ChartKind::IndividualPnlPerBook),
        KeyCode::Char(']') => app.next_book(),
        KeyCode::Char('[') => app.prev_book(),
        KeyCode::Char('e') => app.toggle_exclude_non_traded(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btview_core::BacktestTables;
    use crossterm::event::KeyModifiers;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_select_charts() {
        let mut app = App::new(BacktestTables::default());
        handle_key(&mut app, key('3'));
        assert_eq!(app.chart, ChartKind::CumulativePnl);
        handle_key(&mut app, key('1'));
        assert_eq!(app.chart, ChartKind::Book);
    }

    #[test]
    fn q_and_esc_quit() {
        let mut app = App::new(BacktestTables::default());
        handle_key(&mut app, key('q'));
        assert!(!app.running);

        let mut app = App::new(BacktestTables::default());
        handle_key(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.running);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut app = App::new(BacktestTables::default());
        handle_key(&mut app, key('z'));
        assert!(app.running);
        assert_eq!(app.chart, ChartKind::Book);
    }
}
