//! CLI argument parsing for waypath
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config and search caps

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use waypath_core::format::OutputFormat;
use waypath_core::grid::Cell;
use parse::{parse_cell, parse_edge, parse_format};

/// Waypath - shortest paths through transport networks, grids and word ladders
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, trace, or a full directive)
    #[arg(long, global = true, env = "WAYPATH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./waypath.toml, then the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum path length to explore
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,

    /// Maximum number of states to discover
    #[arg(long, global = true)]
    pub max_nodes: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the route with the fewest hops between two cities
    Route(RouteArgs),

    /// Find the shortest path between two cells of an occupancy grid
    Grid(GridArgs),

    /// Find the shortest word ladder between two words
    Ladder(LadderArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// JSON file mapping each city to the cities it connects to
    #[arg(long, conflicts_with = "edge", required_unless_present = "edge")]
    pub network: Option<PathBuf>,

    /// Directed connection FROM=TO (can be specified multiple times)
    #[arg(long, value_parser = parse_edge, action = clap::ArgAction::Append)]
    pub edge: Vec<(String, String)>,

    /// Starting city
    #[arg(long)]
    pub from: String,

    /// Destination city
    #[arg(long)]
    pub to: String,
}

#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Text file with one grid row per line
    #[arg(long, conflicts_with = "row", required_unless_present = "row")]
    pub grid: Option<PathBuf>,

    /// Grid row as marker characters (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    pub row: Vec<String>,

    /// Start cell as row,col
    #[arg(long, value_parser = parse_cell)]
    pub start: Cell,

    /// Goal cell as row,col
    #[arg(long, value_parser = parse_cell)]
    pub goal: Cell,
}

#[derive(Args, Debug, Clone)]
pub struct LadderArgs {
    /// Word list file; words of other lengths than the start word are ignored
    #[arg(long, conflicts_with = "word", required_unless_present = "word")]
    pub dictionary: Option<PathBuf>,

    /// Dictionary word (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    pub word: Vec<String>,

    /// Starting word
    #[arg(long)]
    pub start: String,

    /// Target word
    #[arg(long)]
    pub target: String,

    /// Letters to substitute (overrides the configured alphabet)
    #[arg(long)]
    pub alphabet: Option<String>,
}
