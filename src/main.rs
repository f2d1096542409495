use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use mapdown::errors::MapdownError;
use mapdown::mapdown::Mapdown;
use mapdown::output::{format_graph, format_stats_as_text};
use mapdown::types::*;
use tracing_subscriber::EnvFilter;

/// Link graphs for markdown notes.
#[derive(Parser)]
#[command(name = "mapdown", about = "Link graphs for markdown notes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration for a document tree
    Init {
        /// Root directory (default: current directory)
        path: Option<String>,
    },
    /// Build the link graph once and print it
    Build {
        /// Root directory (default: current directory)
        path: Option<String>,
        /// Output format (json or dot)
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show graph statistics
    Status {
        /// Root directory (default: current directory)
        path: Option<String>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Rebuild and re-emit the graph whenever the tree changes
    Watch {
        /// Root directory (default: current directory)
        path: Option<String>,
        /// Output format (json or dot)
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Quiet period in milliseconds before a batch of changes triggers a rebuild
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mapdown=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> mapdown::errors::Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let root = resolve_path(path);
            let md = Mapdown::init(&root)?;
            println!("Initialized mapdown at {}", md.root().display());
        }
        Commands::Build {
            path,
            format,
            output,
        } => {
            let format = parse_format(&format)?;
            let md = Mapdown::open(&resolve_path(path))?;
            let graph = md.rebuild()?;
            emit(&format_graph(&graph, format)?, output.as_ref())?;
        }
        Commands::Status { path, json } => {
            let md = Mapdown::open(&resolve_path(path))?;
            let (graph, stats) = md.rebuild_with_stats()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", format_stats_as_text(&graph, &stats));
            }
        }
        Commands::Watch {
            path,
            format,
            output,
            debounce_ms,
        } => {
            let format = parse_format(&format)?;
            let md = Mapdown::open(&resolve_path(path))?;
            let md = match debounce_ms {
                Some(ms) => {
                    let mut config = md.config().clone();
                    config.debounce_ms = ms;
                    Mapdown::with_config(md.root(), config)?
                }
                None => md,
            };
            md.watch(|graph, _stats| emit(&format_graph(graph, format)?, output.as_ref()))?;
        }
    }
    Ok(())
}

fn parse_format(format: &str) -> mapdown::errors::Result<OutputFormat> {
    OutputFormat::from_str(format).ok_or_else(|| MapdownError::Config {
        message: format!("unknown output format '{}' (expected json or dot)", format),
    })
}

/// Prints to stdout, or replaces `output` when given.
fn emit(text: &str, output: Option<&PathBuf>) -> mapdown::errors::Result<()> {
    match output {
        Some(path) => std::fs::write(path, text).map_err(|e| MapdownError::File {
            message: format!("failed to write output: {}", e),
            path: path.display().to_string(),
        }),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

/// Resolves an optional path argument to a `PathBuf`.
///
/// Defaults to the current working directory if no path is provided.
fn resolve_path(path: Option<String>) -> PathBuf {
    match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
