use crate::graph::bfs::*;
use crate::graph::types::{PathResult, SearchOptions};
use crate::graph::NeighborSource;
use std::cell::RefCell;
use std::collections::HashMap;

/// Directed graph over `0..n` with ordered adjacency lists
struct Digraph {
    adj: Vec<Vec<usize>>,
}

impl NeighborSource for Digraph {
    type State = usize;

    fn neighbors(&self, state: &usize) -> Vec<usize> {
        self.adj.get(*state).cloned().unwrap_or_default()
    }
}

/// Wraps a source and records every state it is asked to expand
struct Recording<'a, N: NeighborSource> {
    inner: &'a N,
    calls: RefCell<Vec<N::State>>,
}

impl<N: NeighborSource> NeighborSource for Recording<'_, N> {
    type State = N::State;

    fn neighbors(&self, state: &N::State) -> Vec<N::State> {
        self.calls.borrow_mut().push(state.clone());
        self.inner.neighbors(state)
    }
}

fn recording<N: NeighborSource>(inner: &N) -> Recording<'_, N> {
    Recording {
        inner,
        calls: RefCell::new(Vec::new()),
    }
}

/// All-pairs shortest edge counts via Floyd-Warshall, independent of BFS
fn all_pairs_distances(graph: &Digraph) -> Vec<Vec<Option<usize>>> {
    let n = graph.adj.len();
    let mut dist = vec![vec![None; n]; n];
    for (u, row) in dist.iter_mut().enumerate() {
        row[u] = Some(0);
        for &v in &graph.adj[u] {
            if v != u {
                row[v] = Some(1);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].is_none_or(|d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}

fn assert_valid_path(graph: &Digraph, start: usize, goal: usize, result: &PathResult<usize>) {
    let PathResult::Found { states, length } = result else {
        panic!("expected a path from {start} to {goal}");
    };
    assert_eq!(states.first(), Some(&start));
    assert_eq!(states.last(), Some(&goal));
    assert_eq!(*length, states.len() - 1);
    for pair in states.windows(2) {
        assert!(
            graph.adj[pair[0]].contains(&pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_start_equals_goal_is_zero_length_path() {
    let graph = Digraph {
        adj: vec![vec![1], vec![0]],
    };
    let result = search(&graph, &0, &0);
    assert_eq!(
        result,
        PathResult::Found {
            states: vec![0],
            length: 0
        }
    );
}

#[test]
fn test_start_equals_goal_expands_nothing() {
    let graph = Digraph {
        adj: vec![vec![1], vec![0]],
    };
    let rec = recording(&graph);
    let report = search_with(&rec, &1, &1, &SearchOptions::default());
    assert!(rec.calls.borrow().is_empty());
    assert_eq!(report.stats.expanded, 0);
    assert_eq!(report.stats.discovered, 1);
}

#[test]
fn test_unreachable_goal_is_not_found() {
    // 0 -> 1 -> 2, 3 isolated
    let graph = Digraph {
        adj: vec![vec![1], vec![2], vec![], vec![]],
    };
    assert_eq!(search(&graph, &0, &3), PathResult::NotFound);
}

#[test]
fn test_goal_outside_graph_is_not_found() {
    let graph = Digraph {
        adj: vec![vec![1], vec![0]],
    };
    let report = search_with(&graph, &0, &99, &SearchOptions::default());
    assert_eq!(report.result, PathResult::NotFound);
    assert_eq!(report.stats.discovered, 2);
    assert!(!report.stats.truncated);
}

#[test]
fn test_cycles_terminate_and_expand_each_state_once() {
    // Complete digraph on 5 nodes with self loops, goal unreachable
    let graph = Digraph {
        adj: (0..5).map(|_| (0..5).collect()).collect(),
    };
    let rec = recording(&graph);
    let report = search_with(&rec, &0, &42, &SearchOptions::default());
    assert_eq!(report.result, PathResult::NotFound);

    let mut calls = rec.calls.borrow().clone();
    assert_eq!(calls.len(), 5);
    calls.sort_unstable();
    assert_eq!(calls, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_neighbor_order_decides_between_equal_paths() {
    // Diamond: 0 -> {1, 2} -> 3
    let left_first = Digraph {
        adj: vec![vec![1, 2], vec![3], vec![3], vec![]],
    };
    let right_first = Digraph {
        adj: vec![vec![2, 1], vec![3], vec![3], vec![]],
    };
    assert_eq!(search(&left_first, &0, &3).path(), Some(&[0, 1, 3][..]));
    assert_eq!(search(&right_first, &0, &3).path(), Some(&[0, 2, 3][..]));
}

#[test]
fn test_first_discovery_parent_is_never_overwritten() {
    // 0 -> 1 -> 3 and 0 -> 2 -> 3: 3 is first discovered from 1
    let graph = Digraph {
        adj: vec![vec![1, 2], vec![3], vec![3], vec![4], vec![]],
    };
    let result = search(&graph, &0, &4);
    assert_eq!(result.path(), Some(&[0, 1, 3, 4][..]));
    assert_eq!(result.length(), Some(3));
}

#[test]
fn test_repeated_search_is_deterministic() {
    let graph = Digraph {
        adj: vec![vec![2, 1], vec![3, 4], vec![4, 3], vec![5], vec![5], vec![]],
    };
    let first = search(&graph, &0, &5);
    for _ in 0..10 {
        assert_eq!(search(&graph, &0, &5), first);
    }
}

#[test]
fn test_shortest_path_preferred_over_long_chain() {
    // Long chain 0-1-2-3-4-5 plus shortcut 0 -> 4
    let graph = Digraph {
        adj: vec![vec![1, 4], vec![2], vec![3], vec![4], vec![5], vec![]],
    };
    let result = search(&graph, &0, &5);
    assert_eq!(result.path(), Some(&[0, 4, 5][..]));
}

#[test]
fn test_max_depth_stops_before_goal() {
    let graph = Digraph {
        adj: vec![vec![1], vec![2], vec![3], vec![]],
    };
    let opts = SearchOptions::default().with_max_depth(2);
    let report = search_with(&graph, &0, &3, &opts);
    assert_eq!(report.result, PathResult::NotFound);
    assert!(report.stats.truncated);
    assert_eq!(report.stats.discovered, 3);
}

#[test]
fn test_max_depth_allows_goal_at_cap() {
    let graph = Digraph {
        adj: vec![vec![1], vec![2], vec![3], vec![]],
    };
    let opts = SearchOptions::default().with_max_depth(3);
    let report = search_with(&graph, &0, &3, &opts);
    assert_eq!(report.result.length(), Some(3));
    assert!(!report.stats.truncated);
}

#[test]
fn test_max_nodes_caps_discovery() {
    // Star: 0 -> 1..=9, goal 9 discovered last
    let graph = Digraph {
        adj: std::iter::once((1..10).collect())
            .chain((1..10).map(|_| Vec::new()))
            .collect(),
    };
    let opts = SearchOptions::default().with_max_nodes(4);
    let report = search_with(&graph, &0, &9, &opts);
    assert_eq!(report.result, PathResult::NotFound);
    assert!(report.stats.truncated);
    assert_eq!(report.stats.discovered, 4);
}

#[test]
fn test_max_nodes_keeps_goal_discovered_before_cap() {
    // 0 -> 1, 2, 3; the budget runs out while expanding 0, after 1 is queued
    let graph = Digraph {
        adj: vec![vec![1, 2, 3], vec![], vec![], vec![]],
    };
    let opts = SearchOptions::default().with_max_nodes(3);
    let report = search_with(&graph, &0, &1, &opts);
    assert_eq!(report.result, PathResult::found(vec![0, 1]));
    assert_eq!(report.stats.discovered, 3);
    assert!(!report.stats.truncated);
}

#[test]
fn test_max_nodes_goal_in_deeper_layer_after_cap() {
    // 0 -> 1, 2; 1 -> 3. Budget of 3 is spent on 0, 1, 2 so 3 is never discovered.
    let graph = Digraph {
        adj: vec![vec![1, 2], vec![3], vec![], vec![]],
    };
    let opts = SearchOptions::default().with_max_nodes(3);
    let report = search_with(&graph, &0, &3, &opts);
    assert_eq!(report.result, PathResult::NotFound);
    assert!(report.stats.truncated);
    assert_eq!(report.stats.discovered, 3);
    assert_eq!(report.stats.expanded, 3);
}

#[test]
fn test_max_nodes_of_one_or_zero() {
    let graph = Digraph {
        adj: vec![vec![1], vec![]],
    };
    for cap in [0, 1] {
        let opts = SearchOptions::default().with_max_nodes(cap);

        let same = search_with(&graph, &0, &0, &opts);
        assert_eq!(same.result, PathResult::found(vec![0]), "cap {cap}");
        assert!(!same.stats.truncated);

        let report = search_with(&graph, &0, &1, &opts);
        assert_eq!(report.result, PathResult::NotFound, "cap {cap}");
        assert!(report.stats.truncated);
        assert_eq!(report.stats.discovered, 1);
        assert_eq!(report.stats.expanded, 1);
    }
}

#[test]
fn test_string_states() {
    struct Named(HashMap<String, Vec<String>>);
    impl NeighborSource for Named {
        type State = String;
        fn neighbors(&self, state: &String) -> Vec<String> {
            self.0.get(state).cloned().unwrap_or_default()
        }
    }
    let mut adj = HashMap::new();
    adj.insert("x".to_string(), vec!["y".to_string()]);
    let result = search(&Named(adj), &"x".to_string(), &"y".to_string());
    assert_eq!(result.length(), Some(1));
}

/// Every directed graph on four nodes (4096 of them), every start/goal pair:
/// BFS must agree with an independent all-pairs distance computation and
/// return a path made of real edges.
#[test]
fn test_exhaustive_minimality_on_four_node_digraphs() {
    const N: usize = 4;
    let candidate_edges: Vec<(usize, usize)> = (0..N)
        .flat_map(|u| (0..N).filter(move |&v| v != u).map(move |v| (u, v)))
        .collect();

    for mask in 0u32..(1 << candidate_edges.len()) {
        let mut adj = vec![Vec::new(); N];
        for (bit, &(u, v)) in candidate_edges.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                adj[u].push(v);
            }
        }
        let graph = Digraph { adj };
        let dist = all_pairs_distances(&graph);

        for start in 0..N {
            for goal in 0..N {
                let result = search(&graph, &start, &goal);
                match dist[start][goal] {
                    Some(d) => {
                        assert_valid_path(&graph, start, goal, &result);
                        assert_eq!(result.length(), Some(d), "mask {mask:#x} {start}->{goal}");
                    }
                    None => assert_eq!(result, PathResult::NotFound, "mask {mask:#x}"),
                }
            }
        }
    }
}
