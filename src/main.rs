mod api;
mod catalog;
mod config;
mod consts;
mod draft;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod stats;
mod ui;

use crate::api::{SalesApi, SalesApiClient};
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::exports;
use crate::environment::Environment;
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive dashboard
    Start {
        /// Backend base URL, e.g. http://localhost:5000
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
    /// Upload a csv/xlsx/xls file of event rows without opening the dashboard
    Import {
        /// Path of the file to upload
        file: PathBuf,

        /// Backend base URL, e.g. http://localhost:5000
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
    /// Save default connection settings to the config file
    Configure {
        /// Backend base URL to use by default
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Venue name pre-filled into new event drafts
        #[arg(long, value_name = "VENUE")]
        default_venue: Option<String>,
    },
    /// Download a report without opening the dashboard
    Export {
        /// Report format to download
        #[arg(value_enum)]
        format: ExportFormat,

        /// Backend base URL, e.g. http://localhost:5000
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Copy, Clone, Eq, PartialEq)]
enum ExportFormat {
    Pdf,
    Excel,
    Csv,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG drives both the activity-log display floor and the log facade.
    log::set_max_level(logging::get_rust_log_level().into());

    let environment_str = std::env::var("SALES_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    // The config file is optional; a missing or broken one falls back to
    // the environment defaults.
    let config = get_config_path()
        .ok()
        .filter(|path| path.exists())
        .and_then(|path| Config::load_from_file(&path).ok())
        .unwrap_or_default();

    let resolve_base_url = |cli_value: Option<String>| {
        cli_value
            .or_else(|| config.api_base_url.clone())
            .unwrap_or_else(|| environment.api_base_url())
    };

    let args = Args::parse();
    match args.command {
        Command::Start { base_url } => {
            let base_url = resolve_base_url(base_url);
            let client = SalesApiClient::new(base_url.clone())?;
            start(base_url, config.default_venue.clone(), &client).await
        }
        Command::Import { file, base_url } => {
            let client = SalesApiClient::new(resolve_base_url(base_url))?;
            match client.import_events(&file).await {
                Ok(message) => {
                    println!("{}", message);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Import failed: {}", e);
                    Err(e.into())
                }
            }
        }
        Command::Configure {
            base_url,
            default_venue,
        } => {
            let config_path = get_config_path()?;
            let mut updated = config.clone();
            if base_url.is_some() {
                updated.api_base_url = base_url;
            }
            if default_venue.is_some() {
                updated.default_venue = default_venue;
            }
            updated.save(&config_path)?;
            println!("Configuration saved to {}", config_path.display());
            Ok(())
        }
        Command::Export { format, base_url } => {
            let client = SalesApiClient::new(resolve_base_url(base_url))?;
            let (result, filename) = match format {
                ExportFormat::Pdf => (client.export_pdf().await, exports::PDF_FILENAME),
                ExportFormat::Excel => (client.export_excel().await, exports::EXCEL_FILENAME),
                ExportFormat::Csv => (client.export_csv().await, exports::CSV_FILENAME),
            };
            match result {
                Ok(bytes) => {
                    std::fs::write(filename, &bytes)?;
                    println!("Saved {}", filename);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Export failed: {}", e);
                    Err(e.into())
                }
            }
        }
    }
}

/// Starts the interactive dashboard.
///
/// # Arguments
/// * `base_url` - Backend base URL after config and flag resolution.
/// * `default_venue` - Venue pre-filled into new drafts, if configured.
/// * `api` - Client for the sales backend.
async fn start(
    base_url: String,
    default_venue: Option<String>,
    api: &dyn SalesApi,
) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(base_url, default_venue);
    let res = ui::run(&mut terminal, app, api).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
