//! btview CLI — load backtest result tables and chart them.
//!
//! Commands:
//! - `view` — interactive TUI over the loaded tables
//! - `show` — render one chart full-screen, dismiss with any key
//! - `export` — write figures as JSON artifacts
//! - `inspect` — print table shapes

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use btview_core::{data, BacktestTables, ChartRenderer, DisplaySink, RecordingSink, ResultSource};
use btview_tui::TerminalSink;

#[derive(Parser)]
#[command(name = "btview", about = "btview — chart a backtest result from the terminal")]
struct Cli {
    #[command(flatten)]
    tables: TableArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Where the result tables come from: CSV files, or built-in sample data.
#[derive(clap::Args)]
struct TableArgs {
    /// Wide price CSV: time,<ticker>,...
    #[arg(long, global = true)]
    prices: Option<PathBuf>,

    /// Trade CSV: time,book,ticker,price,units
    #[arg(long, global = true)]
    trades: Option<PathBuf>,

    /// PnL CSV: time,book,pnl
    #[arg(long, global = true)]
    pnl: Option<PathBuf>,

    /// Wide cumulative-PnL-per-book CSV: time,<book>,...
    #[arg(long, global = true)]
    cum_book: Option<PathBuf>,

    /// Total cumulative PnL CSV: time,pnl
    #[arg(long, global = true)]
    cum_total: Option<PathBuf>,

    /// Use built-in synthetic sample tables instead of files.
    #[arg(long, global = true, default_value_t = false)]
    sample: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive viewer (keys: 1-4 charts, [ ] books, e, q).
    View,
    /// Render a single chart and wait for a key press.
    Show {
        #[arg(value_enum)]
        chart: ChartArg,

        /// Book to chart (book chart only; defaults to the first book).
        #[arg(long)]
        book: Option<String>,

        /// Plot only tickers traded in the selected book.
        #[arg(long, default_value_t = false)]
        exclude_non_traded: bool,
    },
    /// Write figures as JSON artifacts to a directory.
    Export {
        #[arg(value_enum, default_value_t = ChartArg::All)]
        chart: ChartArg,

        /// Book to chart (book chart only; defaults to the first book).
        #[arg(long)]
        book: Option<String>,

        /// Plot only tickers traded in the selected book.
        #[arg(long, default_value_t = false)]
        exclude_non_traded: bool,

        /// Output directory for figure JSON files.
        #[arg(long, default_value = "figures")]
        output_dir: PathBuf,
    },
    /// Print table shapes: tickers, trades, books.
    Inspect,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ChartArg {
    Book,
    CumulativePerBook,
    Cumulative,
    Individual,
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let tables = load_tables(&cli.tables)?;

    match cli.command {
        Commands::View => btview_tui::run(tables),
        Commands::Show {
            chart,
            book,
            exclude_non_traded,
        } => run_show(&tables, chart, book, exclude_non_traded),
        Commands::Export {
            chart,
            book,
            exclude_non_traded,
            output_dir,
        } => run_export(&tables, chart, book, exclude_non_traded, &output_dir),
        Commands::Inspect => run_inspect(&tables),
    }
}

fn load_tables(args: &TableArgs) -> Result<BacktestTables> {
    if args.sample {
        return Ok(btview_tui::sample_data::sample_tables());
    }

    let mut tables = BacktestTables::default();
    let mut loaded_any = false;

    if let Some(path) = &args.prices {
        tables.prices = data::load_prices(path)
            .with_context(|| format!("loading prices from {}", path.display()))?;
        loaded_any = true;
    }
    if let Some(path) = &args.trades {
        tables.trades = data::load_trades(path)
            .with_context(|| format!("loading trades from {}", path.display()))?;
        loaded_any = true;
    }
    if let Some(path) = &args.pnl {
        tables.pnl = data::load_pnl(path)
            .with_context(|| format!("loading pnl from {}", path.display()))?;
        loaded_any = true;
    }
    if let Some(path) = &args.cum_book {
        tables.cumulative_pnl_per_book = data::load_cumulative_pnl_per_book(path)
            .with_context(|| format!("loading cumulative pnl per book from {}", path.display()))?;
        loaded_any = true;
    }
    if let Some(path) = &args.cum_total {
        tables.cumulative_pnl = data::load_cumulative_pnl(path)
            .with_context(|| format!("loading cumulative pnl from {}", path.display()))?;
        loaded_any = true;
    }

    if !loaded_any {
        bail!("no input tables; pass --sample or at least one of --prices/--trades/--pnl/--cum-book/--cum-total");
    }
    Ok(tables)
}

fn resolve_book(tables: &BacktestTables, book: Option<String>) -> Result<String> {
    match book {
        Some(book) => Ok(book),
        None => match tables.books().into_iter().next() {
            Some(book) => Ok(book),
            None => bail!("no books in the loaded tables; pass --book explicitly"),
        },
    }
}

fn render_into(
    tables: &BacktestTables,
    chart: ChartArg,
    book: Option<String>,
    exclude_non_traded: bool,
    sink: &mut dyn DisplaySink,
) -> Result<()> {
    let renderer = ChartRenderer::new(tables);
    match chart {
        ChartArg::Book => {
            let book = resolve_book(tables, book)?;
            renderer.render_book_chart(&book, exclude_non_traded, sink)?;
        }
        ChartArg::CumulativePerBook => renderer.render_cumulative_pnl_per_book(sink)?,
        ChartArg::Cumulative => renderer.render_cumulative_pnl(sink)?,
        ChartArg::Individual => renderer.render_individual_pnl_per_book(sink)?,
        ChartArg::All => {
            let book = resolve_book(tables, book)?;
            renderer.render_book_chart(&book, exclude_non_traded, sink)?;
            renderer.render_cumulative_pnl_per_book(sink)?;
            renderer.render_cumulative_pnl(sink)?;
            renderer.render_individual_pnl_per_book(sink)?;
        }
    }
    Ok(())
}

fn run_show(
    tables: &BacktestTables,
    chart: ChartArg,
    book: Option<String>,
    exclude_non_traded: bool,
) -> Result<()> {
    let mut sink = TerminalSink::default();
    render_into(tables, chart, book, exclude_non_traded, &mut sink)
}

fn run_export(
    tables: &BacktestTables,
    chart: ChartArg,
    book: Option<String>,
    exclude_non_traded: bool,
    output_dir: &PathBuf,
) -> Result<()> {
    let mut sink = RecordingSink::new();
    render_into(tables, chart, book, exclude_non_traded, &mut sink)?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    for figure in &sink.figures {
        let path = output_dir.join(format!("{}.json", artifact_name(&figure.title)));
        let json = serde_json::to_string_pretty(figure)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        println!(
            "wrote {} ({} traces)",
            path.display(),
            figure.traces.len()
        );
    }
    Ok(())
}

fn run_inspect(tables: &BacktestTables) -> Result<()> {
    let tickers: Vec<&str> = tables.prices().tickers().collect();
    println!("tickers: {} ({})", tickers.len(), tickers.join(", "));
    println!("trades:  {}", tables.trades().len());
    println!("pnl:     {} records", tables.pnl().len());
    println!("books:   {}", tables.books().join(", "));
    println!(
        "cumulative: {} books x {} times, total curve {} points",
        tables.cumulative_pnl_per_book().books().count(),
        tables.cumulative_pnl_per_book().times().len(),
        tables.cumulative_pnl().len(),
    );
    Ok(())
}

fn artifact_name(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
