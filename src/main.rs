//! Poozles - Main Binary
//!
//! Serves a puzzle hunt, validates a puzzle tree, exports it as a static
//! site, or answers single guess/hint queries from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use poozles::{
    config::ServerConfig,
    engine::{evaluate_with, resolve_hint, FsSuccessLookup},
    export::export_site,
    server::{
        self,
        api::{GuessResponse, HintResponse},
        AppState,
    },
    Catalog,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Log levels
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser)]
#[command(name = "poozles")]
#[command(about = "Poozles - Puzzle Hunt Server", long_about = None)]
struct Cli {
    /// Directory containing index.html and one directory per puzzle
    #[arg(long, env = "PUZZLES_DIR", default_value = "puzzles", global = true)]
    puzzles: PathBuf,

    /// Log level (RUST_LOG takes precedence when set)
    #[arg(long, env = "LOG_LEVEL", value_enum, default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        #[command(flatten)]
        server: ServerConfig,
    },

    /// Load every puzzle and report problems without serving
    Check {
        /// Output the catalog summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the rendered site to a directory
    Export {
        /// Output directory
        #[arg(long, short = 'o', default_value = "dist")]
        out: PathBuf,
    },

    /// Evaluate a single guess and print the JSON response
    Guess {
        /// Puzzle id
        puzzle: String,
        /// Guess text
        guess: String,
    },

    /// Print a hint as JSON
    Hint {
        /// Puzzle id
        puzzle: String,
        /// Zero-based hint index
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

/// Initialize tracing, logging to stderr
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the catalog or fail with the reason; nothing runs on a broken tree
fn load_catalog(root: &Path) -> Result<Catalog> {
    Catalog::build(root).map_err(|e| {
        error!(error = %e, "Unable to load puzzles");
        e.into()
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    match cli.command {
        Commands::Serve { server } => run_serve(&cli.puzzles, server).await,
        Commands::Check { json } => run_check(&cli.puzzles, json),
        Commands::Export { out } => run_export(&cli.puzzles, &out),
        Commands::Guess { puzzle, guess } => run_guess(&cli.puzzles, puzzle, guess),
        Commands::Hint { puzzle, index } => run_hint(&cli.puzzles, &puzzle, index),
    }
}

async fn run_serve(root: &Path, config: ServerConfig) -> Result<()> {
    let catalog = Arc::new(load_catalog(root)?);

    let store: Arc<dyn poozles::store::GuessStore> = Arc::from(config.db_type.create());
    store.open().context("Failed to open database")?;

    let state = AppState::new(catalog, root.to_path_buf(), Arc::clone(&store));
    let served = server::serve(&config, state).await;

    store.close().context("Failed to close database")?;
    served.context("HTTP server error")
}

/// Per-puzzle line of the `check` report
#[derive(Serialize)]
struct PuzzleSummary<'a> {
    id: &'a str,
    title: &'a str,
    answers: usize,
    hints: usize,
    unlocks: Vec<&'a str>,
    files: &'a [String],
}

fn run_check(root: &Path, json: bool) -> Result<()> {
    let catalog = load_catalog(root)?;
    let summaries: Vec<PuzzleSummary<'_>> = catalog
        .puzzles()
        .iter()
        .map(|p| PuzzleSummary {
            id: &p.id,
            title: p.title(),
            answers: p.metadata.answers.len(),
            hints: p.metadata.hint_count(),
            unlocks: p.metadata.unlocks.keys().map(String::as_str).collect(),
            files: &p.files,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("=== {} puzzles in {} ===\n", catalog.len(), root.display());
    for summary in &summaries {
        println!("{} - {}", summary.id, summary.title);
        println!(
            "  answers: {}  hints: {}  files: {}",
            summary.answers,
            summary.hints,
            summary.files.len()
        );
        if !summary.unlocks.is_empty() {
            println!("  unlocks: {}", summary.unlocks.join(", "));
        }
    }
    Ok(())
}

fn run_export(root: &Path, out: &Path) -> Result<()> {
    let catalog = load_catalog(root)?;
    let summary = export_site(&catalog, root, out)
        .with_context(|| format!("Failed to export site to {}", out.display()))?;
    info!(pages = summary.pages, files = summary.files, "Export complete");
    println!(
        "Exported {} pages and {} files to {}",
        summary.pages,
        summary.files,
        out.display()
    );
    Ok(())
}

fn run_guess(root: &Path, puzzle: String, guess: String) -> Result<()> {
    let catalog = load_catalog(root)?;
    let success = FsSuccessLookup::new(root);
    let outcome = evaluate_with(&catalog, &success, &puzzle, &guess)?;
    let response = GuessResponse::new(puzzle, guess, outcome);
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn run_hint(root: &Path, puzzle: &str, index: i64) -> Result<()> {
    let catalog = load_catalog(root)?;
    let hint = resolve_hint(&catalog, puzzle, index)?;
    let response = HintResponse {
        hint_requested: index,
        hint: hint.to_string(),
    };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
