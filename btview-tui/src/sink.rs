//! Terminal display sink — the `fig.show()` of this workspace.
//!
//! Each `display` call takes over the terminal, draws the figure
//! full-screen, and blocks until any key is pressed. Repeated calls show
//! figures one after another.

use std::io::{self, Stdout};

use btview_core::{DisplaySink, Figure, SinkError};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::figure_view::FigureView;
use crate::theme::Theme;

pub struct TerminalSink {
    theme: Theme,
}

impl TerminalSink {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl DisplaySink for TerminalSink {
    fn display(&mut self, figure: Figure) -> Result<(), SinkError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = wait_dismissed(&mut terminal, &figure, &self.theme);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }
}

fn wait_dismissed(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    figure: &Figure,
    theme: &Theme,
) -> Result<(), SinkError> {
    loop {
        terminal.draw(|f| f.render_widget(FigureView::new(figure, theme), f.area()))?;
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}
