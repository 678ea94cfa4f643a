//! Path output in human, JSON and records formats
use std::fmt::Display;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use waypath_core::error::Result;
use waypath_core::format::escape_record_value;
use waypath_core::graph::{PathResult, SearchReport};

/// A finished search, labelled for output
pub struct PathView<'a, S> {
    /// Command that produced the search (`route`, `grid`, `ladder`)
    pub mode: &'static str,
    pub from: String,
    pub to: String,
    pub report: &'a SearchReport<S>,
}

/// Print the view in the format selected on the command line.
///
/// `describe_step` may annotate each step of a found path in human output.
pub fn output_path<S, F>(cli: &Cli, view: &PathView<'_, S>, describe_step: F) -> Result<()>
where
    S: Display + Serialize,
    F: Fn(&S, &S) -> Option<String>,
{
    match cli.format {
        OutputFormat::Human => {
            for line in human_lines(cli.quiet, view, describe_step) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json_value(view)?)?);
        }
        OutputFormat::Records => {
            for line in record_lines(view) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

pub fn human_lines<S, F>(quiet: bool, view: &PathView<'_, S>, describe_step: F) -> Vec<String>
where
    S: Display,
    F: Fn(&S, &S) -> Option<String>,
{
    let mut lines = Vec::new();
    match &view.report.result {
        PathResult::Found { states, length } => {
            let joined: Vec<String> = states.iter().map(ToString::to_string).collect();
            lines.push(format!("Path found: {}", joined.join(" -> ")));
            lines.push(format!("Steps: {}", length));
            if !quiet {
                for (index, pair) in states.windows(2).enumerate() {
                    let detail = describe_step(&pair[0], &pair[1])
                        .map(|d| format!(" ({})", d))
                        .unwrap_or_default();
                    lines.push(format!(
                        "  Step {}: {} -> {}{}",
                        index + 1,
                        pair[0],
                        pair[1],
                        detail
                    ));
                }
            }
        }
        PathResult::NotFound => {
            let suffix = if view.report.stats.truncated {
                " (search limit reached)"
            } else {
                ""
            };
            lines.push(format!(
                "No path found from {} to {}{}",
                view.from, view.to, suffix
            ));
        }
    }
    lines
}

pub fn json_value<S: Serialize>(view: &PathView<'_, S>) -> Result<serde_json::Value> {
    let mut json = serde_json::to_value(&view.report.result)?;
    if let Some(obj) = json.as_object_mut() {
        obj.insert("mode".to_string(), serde_json::json!(view.mode));
        obj.insert("from".to_string(), serde_json::json!(view.from));
        obj.insert("to".to_string(), serde_json::json!(view.to));
        obj.insert("stats".to_string(), serde_json::to_value(view.report.stats)?);
    }
    Ok(json)
}

pub fn record_lines<S: Display>(view: &PathView<'_, S>) -> Vec<String> {
    let stats = view.report.stats;
    let length = view
        .report
        .result
        .length()
        .map(|l| format!(" length={}", l))
        .unwrap_or_default();
    let mut lines = vec![format!(
        "H waypath=1 records=1 mode={} from={} to={} found={}{} expanded={} discovered={} truncated={}",
        view.mode,
        escape_record_value(&view.from),
        escape_record_value(&view.to),
        view.report.result.is_found(),
        length,
        stats.expanded,
        stats.discovered,
        stats.truncated
    )];

    if let Some(states) = view.report.result.path() {
        for (index, state) in states.iter().enumerate() {
            lines.push(format!(
                "S {} {}",
                index,
                escape_record_value(&state.to_string())
            ));
        }
    }
    lines
}
