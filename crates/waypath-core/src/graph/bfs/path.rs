//! Path reconstruction from parent back-pointers

use std::collections::HashMap;
use std::hash::Hash;

/// Walk the predecessor map from `goal` back to the start (the state whose
/// predecessor is `None`) and return the states in start-to-goal order.
///
/// `goal` must have been discovered; every discovered state has an entry.
pub fn reconstruct_path<S: Clone + Eq + Hash>(
    goal: &S,
    predecessors: &HashMap<S, Option<S>>,
) -> Vec<S> {
    let mut path = vec![goal.clone()];
    let mut current = goal;

    while let Some(Some(pred)) = predecessors.get(current) {
        path.push(pred.clone());
        current = pred;
    }

    path.reverse();
    path
}
