//! Screen layout: the figure fills the frame, one status line below.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::figure_view::FigureView;
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    frame.render_widget(FigureView::new(&app.figure, theme), chunks[0]);

    let help = format!(
        " 1:book 2:cum/book 3:cum 4:pnl  [ ]:book  e:exclude  q:quit | {}",
        app.status
    );
    let status = Paragraph::new(help).style(
        Style::default()
            .fg(theme.text_secondary)
            .bg(theme.background),
    );
    frame.render_widget(status, chunks[1]);
}
