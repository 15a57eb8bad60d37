//! btview TUI — terminal viewer for backtest result figures.
//!
//! Provides:
//! - `FigureView`, a ratatui widget for the core figure model
//! - `TerminalSink`, a blocking full-screen display sink
//! - an interactive app cycling between the four charts
//! - synthetic sample tables for running without input files

pub mod app;
pub mod figure_view;
pub mod input;
pub mod sample_data;
pub mod sink;
pub mod theme;
pub mod ui;

pub use figure_view::FigureView;
pub use sink::TerminalSink;
pub use theme::Theme;

use std::io;
use std::time::Duration;

use anyhow::Result;
use btview_core::BacktestTables;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Run the interactive viewer over a set of result tables.
pub fn run(tables: BacktestTables) -> Result<()> {
    // Restore the terminal before printing any panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = app::App::new(tables);
    let theme = Theme::default();
    let result = run_loop(&mut terminal, &mut app, &theme);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut app::App,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, theme))?;

        // 50ms poll for ~20 FPS responsiveness.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            return Ok(());
        }
    }
}
