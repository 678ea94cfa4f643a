//! Named-city transport network backed by an explicit adjacency list
//!
//! Edges are one-directional. A city that only ever appears as a target has
//! no outgoing entry and simply yields no neighbors.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use crate::error::{Result, WaypathError};
use crate::graph::{search_with, NeighborSource, SearchOptions, SearchReport};

/// Fixed mapping from city to the ordered list of directly connected cities
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportNetwork {
    adjacency: HashMap<String, Vec<String>>,
}

impl TransportNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an adjacency map. Neighbor order is preserved.
    pub fn from_adjacency<I, K, V>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let adjacency: HashMap<String, Vec<String>> = adjacency
            .into_iter()
            .map(|(city, targets)| {
                let targets: Vec<String> = targets.into_iter().map(Into::into).collect();
                (city.into(), targets)
            })
            .collect();
        TransportNetwork { adjacency }
    }

    /// Build from `(from, to)` pairs, appending in the order given
    pub fn from_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        let mut network = TransportNetwork::new();
        for (from, to) in edges {
            network.add_edge(from, to);
        }
        network
    }

    /// Parse a JSON object mapping each city to an array of cities
    pub fn from_json_str(content: &str) -> Result<Self> {
        let adjacency: HashMap<String, Vec<String>> = serde_json::from_str(content)?;
        Ok(TransportNetwork { adjacency })
    }

    /// Load a JSON adjacency file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WaypathError::io_operation("read network", path.display(), e))?;
        Self::from_json_str(&content)
    }

    /// Append a directed edge. The target gains no outgoing entry.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.adjacency
            .entry(from.into())
            .or_default()
            .push(to.into());
    }

    /// Whether the city appears anywhere in the network, as a source or a target
    pub fn contains(&self, city: &str) -> bool {
        self.adjacency.contains_key(city)
            || self
                .adjacency
                .values()
                .any(|targets| targets.iter().any(|t| t == city))
    }

    /// Every city in the network, sorted
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: BTreeSet<&str> = BTreeSet::new();
        for (city, targets) in &self.adjacency {
            cities.insert(city);
            cities.extend(targets.iter().map(String::as_str));
        }
        cities.into_iter().collect()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Find the route with the fewest hops between two cities.
    ///
    /// Both cities must be part of the network; an unknown city is a
    /// configuration error, not an unreachable goal.
    #[tracing::instrument(skip(self, opts), fields(cities = self.adjacency.len()))]
    pub fn find_route(
        &self,
        start: &str,
        goal: &str,
        opts: &SearchOptions,
    ) -> Result<SearchReport<String>> {
        for city in [start, goal] {
            if !self.contains(city) {
                return Err(WaypathError::unknown_state("city", city));
            }
        }

        Ok(search_with(self, &start.to_string(), &goal.to_string(), opts))
    }
}

impl NeighborSource for TransportNetwork {
    type State = String;

    fn neighbors(&self, state: &String) -> Vec<String> {
        self.adjacency.get(state).cloned().unwrap_or_default()
    }
}
