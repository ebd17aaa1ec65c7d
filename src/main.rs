//! ModuLiving - terminal configurator for modular furniture
//!
//! Pick a configuration, a color scheme, a space-efficiency level and an
//! optional accessory, and see a schematic of the result.

use anyhow::Result;
use clap::Parser;
use moduliving::config::{Config, ThemeMode};
use moduliving::constants::APP_NAME;
use moduliving::{logging, tui};
use std::path::PathBuf;

/// ModuLiving - terminal configurator for modular furniture
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the configured theme mode
    #[arg(long, value_enum, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write log output to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level (requires --log-file)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path, cli.verbose)?;
    }

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = loaded.unwrap_or_else(|e| {
        eprintln!("Warning: {e:#}");
        eprintln!("Continuing with default settings.");
        tracing::warn!(error = %e, "falling back to default configuration");
        Config::default()
    });

    let theme_mode = cli.theme.unwrap_or(config.ui.theme_mode);
    let theme = tui::Theme::from_mode(theme_mode);
    tracing::info!(?theme_mode, marker = ?config.ui.canvas_marker, "starting {APP_NAME}");

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(config, theme);

    // Run main TUI loop
    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore terminal before reporting any loop error
    tui::restore_terminal(terminal)?;
    result
}
