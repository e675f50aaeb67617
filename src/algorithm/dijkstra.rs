use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::algorithm::traits::reconstruct_path;
use crate::algorithm::{ShortestPath, ShortestPathAlgorithm};
use crate::data_structures::PriorityQueue;
use crate::graph::{Weight, WeightedGraph};

const NAME: &str = "Dijkstra";

/// Classic Dijkstra's algorithm with lazy deletion
///
/// A node is final when it is popped from the queue for the first time. Later
/// pops of the same node are stale entries left behind by relaxations that
/// were improved upon, and are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<K, V, W> ShortestPathAlgorithm<K, V, W> for Dijkstra
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

        let mut finalized: HashSet<&K> = HashSet::new();
        let mut distances: HashMap<&K, W> = HashMap::new();
        let mut origin: HashMap<&K, &K> = HashMap::new();

        distances.insert(start, W::zero());
        let mut queue = PriorityQueue::new();
        queue.push(W::zero(), start);

        let mut pops = 0usize;
        while let Some((total, node)) = queue.pop() {
            pops += 1;

            if !finalized.insert(node) {
                continue;
            }

            if node == goal {
                debug!("{}: reached {:?} at {:?} after {} pops", NAME, goal, total, pops);
                return reconstruct_path(graph, &origin, goal);
            }

            // Relax all outgoing edges
            for (next, edge) in graph.neighbors(node) {
                if finalized.contains(next) {
                    continue;
                }

                let new_total = total.accumulate(edge.weight);
                let improves = match distances.get(next) {
                    None => true,
                    Some(&best) => new_total < best,
                };

                if improves {
                    trace!("relax {:?} -> {:?}: {:?}", node, next, new_total);
                    distances.insert(next, new_total);
                    origin.insert(next, node);
                    queue.push(new_total, next);
                }
            }
        }

        debug!("{}: {:?} unreachable from {:?} after {} pops", NAME, goal, start, pops);
        None
    }
}
