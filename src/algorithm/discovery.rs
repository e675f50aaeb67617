use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::algorithm::traits::reconstruct_path;
use crate::algorithm::{ShortestPath, ShortestPathAlgorithm};
use crate::data_structures::PriorityQueue;
use crate::graph::{Weight, WeightedGraph};

const NAME: &str = "DiscoveryDijkstra";

/// Dijkstra variant that marks nodes visited when they are first discovered
///
/// Every node is pushed onto the queue at most once, reached through the first
/// edge that discovers it. Later edges into an already discovered node are
/// ignored even when they would be cheaper, so the returned path is not
/// guaranteed to be minimal when a cheaper route is found after a node has
/// been discovered. Use [`Dijkstra`](crate::Dijkstra) for exact results; this
/// variant reproduces the discovery-order behavior of older callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscoveryDijkstra;

impl DiscoveryDijkstra {
    pub fn new() -> Self {
        DiscoveryDijkstra
    }
}

impl<K, V, W> ShortestPathAlgorithm<K, V, W> for DiscoveryDijkstra
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
    W: Weight,
{
    fn name(&self) -> &'static str {
        NAME
    }

    fn find_path(&self, graph: &WeightedGraph<K, V, W>, start: &K, goal: &K) -> Option<ShortestPath<K, V, W>> {
        debug!("{}: searching {:?} -> {:?}", NAME, start, goal);

        let mut visited: HashSet<&K> = HashSet::from([start]);
        let mut distances: HashMap<&K, W> = HashMap::new();
        let mut origin: HashMap<&K, &K> = HashMap::new();

        let mut queue = PriorityQueue::new();
        queue.push(W::zero(), start);

        let mut pops = 0usize;
        while let Some((total, node)) = queue.pop() {
            pops += 1;

            if node == goal {
                debug!("{}: reached {:?} at {:?} after {} pops", NAME, goal, total, pops);
                return reconstruct_path(graph, &origin, goal);
            }

            for (next, edge) in graph.neighbors(node) {
                if !visited.insert(next) {
                    continue;
                }

                let new_total = total.accumulate(edge.weight);
                let improves = match distances.get(next) {
                    None => true,
                    Some(&best) => new_total < best,
                };
                if improves {
                    trace!("discover {:?} -> {:?}: {:?}", node, next, new_total);
                    distances.insert(next, new_total);
                    origin.insert(next, node);
                }
                queue.push(new_total, next);
            }
        }

        debug!("{}: {:?} unreachable from {:?} after {} pops", NAME, goal, start, pops);
        None
    }
}
