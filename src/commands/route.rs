//! Route command: fewest hops through a transport network
use crate::cli::{Cli, RouteArgs};
use crate::commands::render::{output_path, PathView};
use crate::commands::RunContext;
use waypath_core::error::Result;
use waypath_core::network::TransportNetwork;

/// Execute the route command
pub fn execute(cli: &Cli, ctx: &RunContext, args: &RouteArgs) -> Result<()> {
    let network = match &args.network {
        Some(path) => TransportNetwork::load(path)?,
        None => TransportNetwork::from_edges(args.edge.iter().cloned()),
    };
    tracing::debug!(
        cities = network.cities().len(),
        edges = network.edge_count(),
        "load_network"
    );

    let report = network.find_route(&args.from, &args.to, &ctx.opts)?;

    let view = PathView {
        mode: "route",
        from: args.from.clone(),
        to: args.to.clone(),
        report: &report,
    };
    output_path(cli, &view, |_, _| None)
}
