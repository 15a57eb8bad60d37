//! Standalone viewer over synthetic sample tables.
//!
//! The `btview` CLI is the file-loading entry point; this binary exists
//! so the TUI can be tried with zero setup.

use anyhow::Result;

fn main() -> Result<()> {
    btview_tui::run(btview_tui::sample_data::sample_tables())
}
