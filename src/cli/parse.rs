use waypath_core::format::OutputFormat;
use waypath_core::grid::Cell;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a grid cell from `row,col`
pub fn parse_cell(s: &str) -> std::result::Result<Cell, String> {
    s.parse::<Cell>().map_err(|e| e.to_string())
}

/// Parse a directed edge from `FROM=TO`
pub fn parse_edge(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
            Ok((from.trim().to_string(), to.trim().to_string()))
        }
        _ => Err(format!("invalid edge: {} (expected FROM=TO)", s)),
    }
}
