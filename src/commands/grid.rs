//! Grid command: fewest moves between two cells
use crate::cli::{Cli, GridArgs};
use crate::commands::render::{output_path, PathView};
use crate::commands::RunContext;
use waypath_core::error::Result;
use waypath_core::grid::{Grid, Move};

/// Execute the grid command
pub fn execute(cli: &Cli, ctx: &RunContext, args: &GridArgs) -> Result<()> {
    let markers = &ctx.config.grid;
    let grid = match &args.grid {
        Some(path) => Grid::load(path, markers)?,
        None => Grid::parse_rows(args.row.iter().map(String::as_str), markers)?,
    };
    tracing::debug!(rows = grid.rows(), cols = grid.cols(), "load_grid");

    let report = grid.find_path(args.start, args.goal, &ctx.opts)?;

    let view = PathView {
        mode: "grid",
        from: args.start.to_string(),
        to: args.goal.to_string(),
        report: &report,
    };
    output_path(cli, &view, |a, b| {
        Move::between(*a, *b).map(|m| m.as_str().to_uppercase())
    })
}
