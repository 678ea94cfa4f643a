mod path;

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Instant;

use crate::graph::types::{PathResult, SearchOptions, SearchReport, SearchStats};
use crate::graph::NeighborSource;

/// Whether a state discovered at `depth` edges from the start may be enqueued
fn within_depth(opts: &SearchOptions, depth: usize) -> bool {
    opts.max_depth.is_none_or(|max| depth <= max)
}

fn node_budget_exhausted(opts: &SearchOptions, discovered: usize) -> bool {
    opts.max_nodes.is_some_and(|max| discovered >= max)
}

/// Find a minimum-edge-count path from `start` to `goal`.
///
/// Equivalent to [`search_with`] with no caps, keeping only the result.
pub fn search<N: NeighborSource>(
    source: &N,
    start: &N::State,
    goal: &N::State,
) -> PathResult<N::State> {
    search_with(source, start, goal, &SearchOptions::default()).result
}

/// Breadth-first search from `start` to `goal` under the given caps.
///
/// States are marked visited and assigned their parent the moment they are
/// first discovered, never when dequeued, so each state enters the frontier
/// at most once and the first parent recorded lies on a shortest path.
/// Neighbors are enqueued in the order the source yields them.
#[tracing::instrument(skip(source, opts), fields(start = ?start, goal = ?goal, max_depth = ?opts.max_depth, max_nodes = ?opts.max_nodes))]
pub fn search_with<N: NeighborSource>(
    source: &N,
    start: &N::State,
    goal: &N::State,
    opts: &SearchOptions,
) -> SearchReport<N::State> {
    let started = Instant::now();
    let mut stats = SearchStats::default();

    let mut visited: HashSet<N::State> = HashSet::new();
    let mut predecessors: HashMap<N::State, Option<N::State>> = HashMap::new();
    let mut queue: VecDeque<(N::State, usize)> = VecDeque::new();

    visited.insert(start.clone());
    predecessors.insert(start.clone(), None);
    queue.push_back((start.clone(), 0));

    let mut reached = false;

    while let Some((current, depth)) = queue.pop_front() {
        if current == *goal {
            reached = true;
            break;
        }

        stats.expanded += 1;

        for neighbor in source.neighbors(&current) {
            if visited.contains(&neighbor) {
                continue;
            }

            if !within_depth(opts, depth + 1) {
                stats.truncated = true;
                continue;
            }

            // Stop discovering; states already queued are still dequeued
            if node_budget_exhausted(opts, visited.len()) {
                stats.truncated = true;
                break;
            }

            visited.insert(neighbor.clone());
            predecessors.insert(neighbor.clone(), Some(current.clone()));
            queue.push_back((neighbor, depth + 1));
        }
    }

    stats.discovered = visited.len();

    let result = if reached {
        stats.truncated = false;
        PathResult::found(path::reconstruct_path(goal, &predecessors))
    } else {
        PathResult::NotFound
    };

    tracing::debug!(
        found = result.is_found(),
        length = ?result.length(),
        expanded = stats.expanded,
        discovered = stats.discovered,
        truncated = stats.truncated,
        "search_complete"
    );
    crate::trace_time!(started, "search");

    SearchReport { result, stats }
}

#[cfg(test)]
mod tests;
