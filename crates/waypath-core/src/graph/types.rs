use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Outcome of a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult<S> {
    /// A minimum-edge-count path, start and goal inclusive.
    Found {
        states: Vec<S>,
        /// Edge count, always `states.len() - 1`
        length: usize,
    },
    /// The goal cannot be reached (or the search was stopped by a cap).
    NotFound,
}

impl<S> PathResult<S> {
    /// Build a `Found` result from a reconstructed path
    pub fn found(states: Vec<S>) -> Self {
        let length = states.len().saturating_sub(1);
        PathResult::Found { states, length }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }

    /// The path, if one was found
    pub fn path(&self) -> Option<&[S]> {
        match self {
            PathResult::Found { states, .. } => Some(states),
            PathResult::NotFound => None,
        }
    }

    /// Edge count of the path, if one was found
    pub fn length(&self) -> Option<usize> {
        match self {
            PathResult::Found { length, .. } => Some(*length),
            PathResult::NotFound => None,
        }
    }
}

/// Serializes as `{"found":true,"path":[..],"length":n}` or `{"found":false}`
impl<S: Serialize> Serialize for PathResult<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        match self {
            PathResult::Found { states, length } => {
                let mut obj = serializer.serialize_struct("PathResult", 3)?;
                obj.serialize_field("found", &true)?;
                obj.serialize_field("path", states)?;
                obj.serialize_field("length", length)?;
                obj.end()
            }
            PathResult::NotFound => {
                let mut obj = serializer.serialize_struct("PathResult", 1)?;
                obj.serialize_field("found", &false)?;
                obj.end()
            }
        }
    }
}

/// Optional caps for bounding a search over very large implicit graphs.
///
/// The default imposes no caps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Maximum path length (edge count) a discovered state may have
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Maximum number of states that may be discovered, start included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_nodes: Option<usize>,
}

impl SearchOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Fill unset caps from `other`
    pub fn or(self, other: SearchOptions) -> Self {
        SearchOptions {
            max_depth: self.max_depth.or(other.max_depth),
            max_nodes: self.max_nodes.or(other.max_nodes),
        }
    }
}

/// Counters describing how much work a search did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States dequeued and expanded through the neighbor source
    pub expanded: usize,
    /// States added to the visited set, start included
    pub discovered: usize,
    /// True when a depth or node cap stopped the search early
    pub truncated: bool,
}

/// A path result together with the statistics of the search that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<S> {
    pub result: PathResult<S>,
    pub stats: SearchStats,
}

impl<S> SearchReport<S> {
    /// Report for a request rejected before any state was expanded
    pub fn short_circuit() -> Self {
        SearchReport {
            result: PathResult::NotFound,
            stats: SearchStats::default(),
        }
    }
}
