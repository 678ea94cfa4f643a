use std::fmt::Debug;
use std::hash::Hash;

/// Trait for producing the states directly reachable from a given state.
///
/// Implementations must be deterministic: the engine expands neighbors in
/// exactly the order they are returned, and that order decides which of
/// several equally short paths is reported.
pub trait NeighborSource {
    /// A node of the searched graph. Equality is value equality.
    type State: Clone + Eq + Hash + Debug;

    /// States one edge away from `state`, in enumeration order. May be empty.
    fn neighbors(&self, state: &Self::State) -> Vec<Self::State>;
}
