//! Graph search and neighbor generation
//!
//! Provides the breadth-first shortest-path engine shared by every domain:
//! - BFS search with parent back-pointers and optional depth/node caps
//! - `NeighborSource` trait for pluggable connectivity rules
//! - Result and option types consumed by the domain adapters

pub mod bfs;
pub mod source;
pub mod types;

pub use bfs::{search, search_with};
pub use source::NeighborSource;
pub use types::{PathResult, SearchOptions, SearchReport, SearchStats};
