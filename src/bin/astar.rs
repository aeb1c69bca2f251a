use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use astar_engine::algorithm::PathSearch;
use astar_engine::graph::{load_graph, Graph, LoadOptions};
use astar_engine::report::{write_report, ReportFormat};
use astar_engine::{AStar, Error, HeuristicRegistry};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;

/// Exit code for usage errors and unwritable output
const EXIT_USAGE: u8 = 1;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest path between two nodes of a weighted edge-list graph")]
struct Cli {
    /// Edge-list file: one `<from> <to> <weight>` per line
    #[arg(long)]
    graph: PathBuf,

    /// Source node
    #[arg(long)]
    src: String,

    /// Destination node
    #[arg(long)]
    dst: String,

    /// Heuristic name: zero (or none), manhattan, euclidean
    #[arg(long, default_value = "manhattan")]
    heuristic: String,

    /// Insert every edge in both directions
    #[arg(long)]
    undirected: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Give up after expanding this many nodes
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Log search statistics
    #[arg(long)]
    stats: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let default_level = if cli.stats { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

#[derive(thiserror::Error, Debug)]
enum RunError {
    #[error(transparent)]
    Search(#[from] Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl RunError {
    fn exit_code(&self) -> u8 {
        match self {
            RunError::Search(err) => err.exit_code(),
            RunError::Output(_) => EXIT_USAGE,
        }
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let registry = HeuristicRegistry::default();
    let mut engine = AStar::from_registry(&registry, &cli.heuristic)?;
    if let Some(limit) = cli.max_expansions {
        engine = engine.with_expansion_limit(limit);
    }

    let options = LoadOptions {
        undirected: cli.undirected,
    };
    let graph = load_graph(&cli.graph, options)?;
    info!(
        "graph {}: {} nodes, {} edges",
        cli.graph.display(),
        graph.node_count(),
        graph.edge_count()
    );

    let result = engine.shortest_path(&graph, &cli.src, &cli.dst)?;
    info!(
        "{} [{}]: expanded={} relaxed={} pushed={} stale_discarded={}",
        engine.name(),
        engine.heuristic_name(),
        result.stats.expanded,
        result.stats.relaxed,
        result.stats.pushed,
        result.stats.stale_discarded
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &result, engine.heuristic_name(), cli.format.into())?;
    out.flush()?;
    Ok(())
}
