//! Stock Consultant - terminal stock-advisory client
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

use consultant_app::config::{self, LatencySettings};
use consultant_app::MockServices;
use consultant_core::prelude::*;

/// Stock Consultant - portfolio tracking and stock advice in the terminal
#[derive(Parser, Debug)]
#[command(name = "stock-consultant")]
#[command(about = "Portfolio tracking and stock advice in the terminal", long_about = None)]
struct Args {
    /// Config file (defaults to <config_dir>/stock-consultant/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with the dark palette
    #[arg(long)]
    dark: bool,

    /// Remove all simulated network latency
    #[arg(long)]
    fast: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    if args.init_config {
        let path = args
            .config
            .or_else(config::default_config_path)
            .ok_or_else(|| Error::config("No config directory on this platform"))?;
        config::init_config_file(&path)
            .with_context(|| format!("Writing default config to {}", path.display()))?;
        eprintln!("Config written to {}", path.display());
        return Ok(());
    }

    // Logs go to a file since the TUI owns the terminal
    consultant_core::logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref());
    if args.dark {
        settings.ui.dark_mode = true;
    }
    if args.fast {
        settings.latency = LatencySettings::instant();
    }
    info!(
        "Settings: dark_mode={}, latency={:?}",
        settings.ui.dark_mode, settings.latency
    );

    let services = MockServices::mock(settings.latency);
    let result = consultant_tui::run(settings, services).await;

    match &result {
        Err(e) if e.is_fatal() => error!("Fatal error: {:?}", e),
        Err(e) if e.is_recoverable() => warn!("Exited after a recoverable error: {:?}", e),
        Err(e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }
    result
}
