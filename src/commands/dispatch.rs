//! Command dispatch logic for waypath
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{grid, ladder, route, RunContext};
use waypath_core::config::WaypathConfig;
use waypath_core::error::Result;
use waypath_core::graph::SearchOptions;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, source) = WaypathConfig::resolve(cli.config.as_deref(), &cwd)?;
    tracing::debug!(source = ?source, elapsed = ?start.elapsed(), "resolve_config");

    let overrides = SearchOptions {
        max_depth: cli.max_depth,
        max_nodes: cli.max_nodes,
    };
    let ctx = RunContext {
        opts: overrides.or(config.search.into()),
        config,
    };

    let result = match &cli.command {
        Commands::Route(args) => route::execute(cli, &ctx, args),
        Commands::Grid(args) => grid::execute(cli, &ctx, args),
        Commands::Ladder(args) => ladder::execute(cli, &ctx, args),
    };

    tracing::debug!(elapsed = ?start.elapsed(), "command_complete");
    result
}
