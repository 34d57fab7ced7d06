//! CLI entry point for the `mgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use matrix_graph::cli::commands;
use matrix_graph::format::LoadOptions;
use matrix_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "mgraph",
    about = "mgraph — adjacency-matrix graphs with breadth-first path search"
)]
struct Cli {
    /// Edge lines carry a third weight column
    #[arg(short, long, global = true)]
    weighted: bool,

    /// Treat every edge as two-way
    #[arg(long, global = true)]
    undirected: bool,

    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency listing of a graph
    Show {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Print every cell of the adjacency matrix
    Raw {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Find the fewest-hop path between two vertices (1-based)
    Path {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        #[arg(allow_negative_numbers = true)]
        start: i64,
        /// Goal vertex
        #[arg(allow_negative_numbers = true)]
        goal: i64,
    },
    /// Write the graph to a new edge-list file
    Export {
        /// Path to the edge-list file
        file: PathBuf,
        /// Destination file (overwritten)
        out: PathBuf,
    },
    /// Append a rendered path to a file
    AppendPath {
        /// Path to the edge-list file
        file: PathBuf,
        /// Destination file (appended to)
        out: PathBuf,
        /// Start vertex
        #[arg(allow_negative_numbers = true)]
        start: i64,
        /// Goal vertex
        #[arg(allow_negative_numbers = true)]
        goal: i64,
    },
    /// Run the numbered menu on stdin
    Interactive {
        /// Path to the edge-list file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let options = LoadOptions {
        directed: !cli.undirected,
        weighted: cli.weighted,
    };

    let result = match cli.command {
        Commands::Show { file } => commands::cmd_show(&file, options, json),
        Commands::Raw { file } => commands::cmd_raw(&file, options),
        Commands::Path { file, start, goal } => {
            commands::cmd_path(&file, options, start, goal, json)
        }
        Commands::Export { file, out } => commands::cmd_export(&file, options, &out),
        Commands::AppendPath {
            file,
            out,
            start,
            goal,
        } => commands::cmd_append_path(&file, options, &out, start, goal),
        Commands::Interactive { file } => commands::cmd_interactive(&file, options),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::OutOfRange { .. } | GraphError::EdgeNotFound { .. } => 4,
            GraphError::EmptyQueue => 5,
        };
        process::exit(code);
    }
}
