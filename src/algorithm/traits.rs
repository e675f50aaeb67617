use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::{Weight, WeightedGraph};

/// A path found by a shortest path algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<K, V, W> {
    /// Nodes from start to goal, both inclusive
    pub nodes: Vec<K>,

    /// Values of the traversed edges; one fewer than `nodes`
    pub edges: Vec<V>,

    /// Sum of the traversed edge weights
    pub total: W,
}

impl<K, V, W> ShortestPath<K, V, W> {
    /// Splits the path into its node sequence and edge value sequence
    pub fn into_parts(self) -> (Vec<K>, Vec<V>) {
        (self.nodes, self.edges)
    }

    /// Returns the number of edges on the path
    pub fn hops(&self) -> usize {
        self.edges.len()
    }
}

/// Trait for single-pair shortest path algorithms
pub trait ShortestPathAlgorithm<K, V, W>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
    W: Weight,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Find a path from `start` to `goal`, or `None` if `goal` is unreachable
    fn find_path(&self, graph: &WeightedGraph<K, V, W>, start: &K, goal: &K) -> Option<ShortestPath<K, V, W>>;
}

/// Walks `origin` back from `goal` and rebuilds the forward path
///
/// The walk stops at the first node without an origin, which is the start of
/// the search. Edge values and the total are read back from the graph.
pub(crate) fn reconstruct_path<'a, K, V, W>(
    graph: &WeightedGraph<K, V, W>,
    origin: &HashMap<&'a K, &'a K>,
    goal: &'a K,
) -> Option<ShortestPath<K, V, W>>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
    W: Weight,
{
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(&prev) = origin.get(current) {
        // A valid chain visits every recorded node at most once
        if path.len() > origin.len() {
            log::warn!("cycle detected in origin map while reconstructing path to {:?}", goal);
            return None;
        }
        path.push(prev);
        current = prev;
    }

    path.reverse();

    let mut edges = Vec::with_capacity(path.len() - 1);
    let mut total = W::zero();
    for pair in path.windows(2) {
        let edge = graph.edge(pair[0], pair[1])?;
        edges.push(edge.value.clone());
        total = total.accumulate(edge.weight);
    }

    Some(ShortestPath {
        nodes: path.into_iter().cloned().collect(),
        edges,
        total,
    })
}
