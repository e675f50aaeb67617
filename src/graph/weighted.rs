use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use rayon::prelude::*;

use crate::algorithm::{Dijkstra, ShortestPath, ShortestPathAlgorithm};
use crate::graph::Weight;

/// A directed edge: an opaque value plus a non-negative weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<V, W> {
    pub value: V,
    pub weight: W,
}

/// A weighted directed graph keyed by arbitrary node identifiers
///
/// Edges are stored as `from -> to -> Edge`, so there is at most one edge per
/// ordered pair of nodes. Nodes have no identity of their own; a node exists
/// once it appears at either end of an edge.
///
/// # Example
///
/// ```rust
/// use weighted_paths::WeightedGraph;
///
/// let mut graph: WeightedGraph<&str, &str, u32> = WeightedGraph::new();
/// graph.set_edge("a", "b", "ab", 1);
/// graph.set_edge("a", "c", "ac", 2);
/// graph.set_edge("b", "c", "bc", 3);
/// graph.set_edge("b", "d", "bd", 4);
///
/// let (nodes, edges) = graph.shortest_path(&"a", &"d").unwrap().into_parts();
/// assert_eq!(nodes, vec!["a", "b", "d"]);
/// assert_eq!(edges, vec!["ab", "bd"]);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<K, V, W>
where
    K: Eq + Hash,
    W: Weight,
{
    /// Outgoing edges for each node: from -> {to -> edge}
    edges: HashMap<K, HashMap<K, Edge<V, W>>>,
}

impl<K, V, W> WeightedGraph<K, V, W>
where
    K: Eq + Hash,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            edges: HashMap::new(),
        }
    }

    /// Inserts a directed edge, replacing any edge already stored for the pair
    ///
    /// Returns the replaced edge, if there was one.
    pub fn set_edge(&mut self, from: K, to: K, value: V, weight: W) -> Option<Edge<V, W>> {
        self.edges
            .entry(from)
            .or_default()
            .insert(to, Edge { value, weight })
    }

    /// Gets the edge between two nodes if it exists
    pub fn edge(&self, from: &K, to: &K) -> Option<&Edge<V, W>> {
        self.edges.get(from).and_then(|outgoing| outgoing.get(to))
    }

    /// Returns an iterator over the outgoing edges of a node
    pub fn neighbors<'a>(&'a self, node: &K) -> impl Iterator<Item = (&'a K, &'a Edge<V, W>)> + 'a {
        self.edges
            .get(node)
            .into_iter()
            .flat_map(|outgoing| outgoing.iter())
    }

    /// Returns true if the node appears at either end of some edge
    pub fn contains_node(&self, node: &K) -> bool {
        self.edges.contains_key(node)
            || self.edges.values().any(|outgoing| outgoing.contains_key(node))
    }

    /// Returns the number of distinct nodes
    pub fn node_count(&self) -> usize {
        let mut nodes: HashSet<&K> = self.edges.keys().collect();
        for outgoing in self.edges.values() {
            nodes.extend(outgoing.keys());
        }
        nodes.len()
    }

    /// Returns the number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|outgoing| outgoing.len()).sum()
    }
}

impl<K, V, W> WeightedGraph<K, V, W>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
    W: Weight,
{
    /// Finds the minimum-weight path from `start` to `goal` with [`Dijkstra`]
    ///
    /// Returns `None` if `goal` cannot be reached. If `start == goal` the path
    /// holds the single node and no edges.
    pub fn shortest_path(&self, start: &K, goal: &K) -> Option<ShortestPath<K, V, W>> {
        self.shortest_path_with(&Dijkstra::new(), start, goal)
    }

    /// Finds a path from `start` to `goal` with the given algorithm
    pub fn shortest_path_with<A>(&self, algorithm: &A, start: &K, goal: &K) -> Option<ShortestPath<K, V, W>>
    where
        A: ShortestPathAlgorithm<K, V, W>,
    {
        algorithm.find_path(self, start, goal)
    }
}

impl<K, V, W> WeightedGraph<K, V, W>
where
    K: Eq + Hash + Clone + Debug + Send + Sync,
    V: Clone + Send + Sync,
    W: Weight + Send + Sync,
{
    /// Answers a batch of independent `(start, goal)` queries in parallel
    ///
    /// Results are returned in query order. Every query runs its own search
    /// against a shared borrow of the graph.
    pub fn shortest_paths(&self, queries: &[(K, K)]) -> Vec<Option<ShortestPath<K, V, W>>> {
        queries
            .par_iter()
            .map(|(start, goal)| self.shortest_path(start, goal))
            .collect()
    }
}

impl<K, V, W> Default for WeightedGraph<K, V, W>
where
    K: Eq + Hash,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, W> Extend<(K, K, V, W)> for WeightedGraph<K, V, W>
where
    K: Eq + Hash,
    W: Weight,
{
    fn extend<I: IntoIterator<Item = (K, K, V, W)>>(&mut self, iter: I) {
        for (from, to, value, weight) in iter {
            self.set_edge(from, to, value, weight);
        }
    }
}

impl<K, V, W> FromIterator<(K, K, V, W)> for WeightedGraph<K, V, W>
where
    K: Eq + Hash,
    W: Weight,
{
    fn from_iter<I: IntoIterator<Item = (K, K, V, W)>>(iter: I) -> Self {
        let mut graph = WeightedGraph::new();
        graph.extend(iter);
        graph
    }
}
