//! # artstat CLI
//!
//! Command-line interface for looking up public art records.
//!
//! ## Commands
//!
//! - `artstat status <name>` - Status of one artwork, with fuzzy fallback
//! - `artstat list` - Artworks currently in place
//! - `artstat compare <names>` - Compare a comma-separated list of artworks
//! - `artstat neighborhood <name>` - Every artwork in a neighbourhood
//! - `artstat neighborhoods` - Known neighbourhoods
//! - `artstat check` - Load report and index statistics
//!
//! ## Example Usage
//!
//! ```bash
//! artstat --records-dir ./public_art status "Digital Orca" --details
//! artstat list --neighborhood "Stanley Park" --limit 10
//! artstat compare "Digital Orca, Girl in Wetsuit, The Drop"
//! ```

mod app;
mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

/// artstat - Public art status lookup
#[derive(Parser)]
#[command(name = "artstat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory of record files (overrides the configuration file)
    #[arg(short, long, global = true, env = "ARTSTAT_RECORDS_DIR")]
    records_dir: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether an artwork is still in place
    Status {
        /// Name or title of the artwork
        name: String,

        /// Include location, neighbourhood and description
        #[arg(short, long)]
        details: bool,
    },

    /// List artworks that are currently in place
    List {
        /// Only show artworks in or near this neighbourhood
        #[arg(short, long)]
        neighborhood: Option<String>,

        /// Maximum number of artworks to show
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Compare the status of several artworks
    Compare {
        /// Comma-separated artwork names or titles
        names: String,
    },

    /// List every artwork in a neighbourhood
    #[command(alias = "n")]
    Neighborhood {
        /// Neighbourhood to list
        name: String,

        /// Maximum number of artworks to show
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// List known neighbourhoods
    Neighborhoods,

    /// Show the load report and index statistics
    Check,
}

#[derive(Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging before loading config so config loading is traced
    let cli_level = if cli.quiet {
        Some("error")
    } else {
        match cli.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    };
    let env_filter = EnvFilter::try_from_default_env().ok();
    let level_pinned = env_filter.is_some() || cli_level.is_some();
    let default_level = artstat_core::config::GeneralConfig::default().log_level;
    let initial_filter = env_filter
        .unwrap_or_else(|| EnvFilter::new(cli_level.unwrap_or(default_level.as_str())));

    let (filter, filter_handle) = reload::Layer::new(initial_filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => artstat_core::Config::load_from(path)?,
        None => artstat_core::Config::load()?,
    };

    // RUST_LOG and -v/-q take precedence over the configured level
    if !level_pinned {
        filter_handle.reload(EnvFilter::new(&config.general.log_level))?;
    }

    if let Some(dir) = cli.records_dir {
        config.records.dir = dir;
    }

    let app = app::App::new(config)?;
    let output = cli.output;

    // Execute command
    match cli.command {
        Commands::Status { name, details } => commands::status::run(&app, &name, details, output),
        Commands::List {
            neighborhood,
            limit,
        } => commands::list::run(&app, neighborhood.as_deref(), limit, output),
        Commands::Compare { names } => commands::compare::run(&app, &names, output),
        Commands::Neighborhood { name, limit } => {
            commands::neighborhood::run(&app, &name, limit, output)
        }
        Commands::Neighborhoods => commands::neighborhoods::run(&app, output),
        Commands::Check => commands::check::run(&app, output),
    }
}
