//! Trade Overlay - Main Application Entry Point
//!
//! Replays the builtin trade book of one symbol through the overlay
//! engine as a stream of one-second bars and reports the overlay state
//! it produces.

use std::env;
use std::error::Error;

use tracing::{debug, info};

use trade_overlay::overlay::{LogAlertSink, OverlayEngine, Panel};
use trade_overlay::trader::{
    builtin_book, builtin_symbols, get_file_path, init_logger, BarUpdate, DisplaySettings,
    TimeOfDay, SETTINGS, SETTING_FILENAME,
};

/// Seconds of quiet margin replayed on each side of the book's time range
const REPLAY_MARGIN_SECS: u32 = 60;

/// Parsed command line
struct CliArgs {
    symbol: String,
    preview: bool,
}

/// Parse command line arguments
fn parse_args() -> CliArgs {
    let mut symbol = String::from("NRXS");
    let mut preview = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--preview" => preview = true,
            "--symbol" => {
                if let Some(value) = args.next() {
                    symbol = value;
                }
            }
            other => symbol = other.to_string(),
        }
    }

    CliArgs { symbol, preview }
}

/// List the builtin symbols and their fill counts
fn print_preview() {
    println!("Builtin trade books:");
    for symbol in builtin_symbols() {
        if let Some(book) = builtin_book(symbol) {
            println!("  {}: {} fills", symbol, book.len());
        }
    }
}

/// Replay the book as one-second bars and report what the overlay produced
fn run_replay(engine: &OverlayEngine) {
    let sink = LogAlertSink::new();

    let (start, end) = match engine.book().time_range() {
        Some((first, last)) => (
            first.second_of_day().saturating_sub(REPLAY_MARGIN_SECS),
            (last.second_of_day() + REPLAY_MARGIN_SECS).min(86_399),
        ),
        None => (0, 0),
    };

    let mut final_panel = None;
    for (index, second) in (start..=end).enumerate() {
        let time = match TimeOfDay::from_second_of_day(second) {
            Some(time) => time,
            None => break,
        };
        let bar = BarUpdate::new(engine.symbol().to_string(), index, time, second == end);

        let output = engine.on_bar(&bar);
        engine.notify(&output, &sink);

        for marker in &output.markers {
            info!("Bar {} at {}: {}", index, time, marker.title);
        }
        for label in &output.labels {
            debug!("Bar {} label: {}", index, label.text.replace('\n', " | "));
        }
        if let Some(panel) = output.panel {
            final_panel = Some(panel);
        }
    }

    if let Some(panel) = final_panel {
        print_panel(&panel);
    }
}

/// Print the terminal-bar panel as aligned table text
fn print_panel(panel: &Panel) {
    println!();
    match panel {
        Panel::Summary { symbol, .. } => println!("Trade Summary for {}:", symbol),
        Panel::Warning { .. } => println!("Symbol check failed:"),
    }

    let table = panel.to_table();

    let mut grid = vec![vec![String::new(); table.columns]; table.rows];
    for cell in &table.cells {
        grid[cell.row][cell.col] = cell.text.clone();
    }

    let mut widths = vec![0usize; table.columns];
    for row in &grid {
        for (col, text) in row.iter().enumerate() {
            widths[col] = widths[col].max(text.chars().count());
        }
    }

    for row in &grid {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, text)| format!("{:<width$}", text, width = widths[col]))
            .collect();
        println!("  {}", line.join("  ").trim_end());
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logger();

    let args = parse_args();

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║       Trade Overlay - Execution Chart Engine      ║");
    println!("║                  Version {}                    ║", trade_overlay::VERSION);
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    if args.preview {
        print_preview();
        return Ok(());
    }

    let book = builtin_book(&args.symbol).ok_or_else(|| {
        format!(
            "Unknown symbol {:?}, available: {}",
            args.symbol,
            builtin_symbols().join(", ")
        )
    })?;

    info!("Loaded {} with {} fills", book.symbol(), book.len());

    let settings = DisplaySettings::from_settings(&SETTINGS);

    // Write the merged settings back so the file carries every known key
    SETTINGS.save()?;
    info!("Settings file: {}", get_file_path(SETTING_FILENAME).display());

    let engine = OverlayEngine::new(book, settings);
    run_replay(&engine);

    Ok(())
}
