//! # Primer CLI
//!
//! Command-line interface for the Primer learning hub.
//!
//! ## Commands
//!
//! - `primer` / `primer interactive` - Browse and search topics in the TUI
//! - `primer list` - List every topic
//! - `primer search <query>` - Show topics matching a query
//! - `primer show <id | #/topic/id>` - Print a topic
//! - `primer quiz <id> --answer <option>` - Answer a topic's quiz
//!
//! ## Example Usage
//!
//! ```bash
//! # Which topics mention onClick?
//! primer search onclick
//!
//! # Read a topic
//! primer show '#/topic/event-handling'
//!
//! # Use your own catalog
//! primer --catalog ./my-course.toml
//! ```

mod app;
mod commands;
mod render;
mod tui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Primer - A searchable learning hub in your terminal
#[derive(Parser)]
#[command(name = "primer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file to load instead of the configured or bundled one
    #[arg(long, global = true, env = "PRIMER_CATALOG")]
    catalog: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all topics in catalog order
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Show topics whose title, keywords or explanation contain a query
    Search {
        /// Text to look for (case-insensitive, literal)
        query: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Print a topic by id or route (e.g. "#/topic/intro")
    Show {
        /// Topic id or route; "#/" shows the landing page
        target: String,
    },

    /// Print a topic's quiz, optionally grading an answer
    Quiz {
        /// Topic id
        id: String,

        /// Option to answer with (e.g. "b")
        #[arg(short, long)]
        answer: Option<String>,
    },

    /// Start interactive TUI mode (default)
    #[command(alias = "i")]
    Interactive,
}

#[derive(Clone, Debug, Default)]
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
    let command = cli.command.unwrap_or(Commands::Interactive);
    let interactive = matches!(command, Commands::Interactive);

    // Load configuration
    let config = match &cli.config {
        Some(path) => primer_core::Config::load_from(path)?,
        None => primer_core::Config::load()?,
    };

    // Setup logging. The TUI owns the terminal, so keep it quiet there
    // unless asked otherwise.
    let log_level = if cli.quiet {
        "error"
    } else {
        match (cli.verbose, interactive) {
            (0, true) => "warn",
            (0, false) => config.general.log_level.as_str(),
            (1, _) => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();

    let app = app::App::new(config, cli.catalog)?;

    // Execute command
    match command {
        Commands::List { output } => commands::list::run(&app, output),
        Commands::Search { query, output } => commands::search::run(&app, &query, output),
        Commands::Show { target } => commands::show::run(&app, &target),
        Commands::Quiz { id, answer } => commands::quiz::run(&app, &id, answer.as_deref()),
        Commands::Interactive => tui::run(app),
    }
}
