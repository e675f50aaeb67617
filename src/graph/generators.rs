use rand::prelude::*;

use crate::graph::WeightedGraph;
use crate::{Error, Result};

/// Parameters for [`generate_random`]
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of nodes, identified `0..nodes`
    pub nodes: usize,

    /// Approximate ratio of edges to nodes
    pub edge_factor: f64,

    /// Smallest edge weight (inclusive)
    pub min_weight: u32,

    /// Largest edge weight (inclusive)
    pub max_weight: u32,

    /// Seed for reproducible graphs; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            nodes: 1_000,
            edge_factor: 4.0,
            min_weight: 1,
            max_weight: 100,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.nodes == 0 {
            return Err(Error::InvalidConfig("nodes must be positive".to_string()));
        }
        if !(self.edge_factor.is_finite() && self.edge_factor >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "edge factor must be finite and non-negative, got {}",
                self.edge_factor
            )));
        }
        if self.min_weight > self.max_weight {
            return Err(Error::InvalidConfig(format!(
                "weight range {}..={} is empty",
                self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }
}

/// Generates a random directed graph over `0..config.nodes`
///
/// Each edge carries its `(from, to)` pair as its value. Self-loops are
/// skipped and repeated pairs overwrite each other, so the graph may hold
/// slightly fewer than `edge_factor * nodes` edges.
pub fn generate_random(config: &GeneratorConfig) -> Result<WeightedGraph<usize, (usize, usize), u32>> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let num_edges = (config.edge_factor * config.nodes as f64) as usize;
    let mut graph = WeightedGraph::new();

    for _ in 0..num_edges {
        let u = rng.gen_range(0..config.nodes);
        let v = rng.gen_range(0..config.nodes);
        if u != v {
            let weight = rng.gen_range(config.min_weight..=config.max_weight);
            graph.set_edge(u, v, (u, v), weight);
        }
    }

    log::debug!(
        "generated random graph: {} nodes requested, {} edges",
        config.nodes,
        graph.edge_count()
    );

    Ok(graph)
}

/// Generates a path `0 -> 1 -> ... -> length` with unit weights
pub fn generate_chain(length: usize) -> WeightedGraph<usize, (), u32> {
    (0..length).map(|i| (i, i + 1, (), 1)).collect()
}

/// Generates a `width` x `height` grid with unit-weight edges between
/// orthogonal neighbours in both directions
///
/// Nodes are `(x, y)` coordinates and each edge is labelled with the compass
/// direction it points in (`'N'`, `'E'`, `'S'` or `'W'`, with `y` growing south).
pub fn generate_grid(width: usize, height: usize) -> WeightedGraph<(usize, usize), char, u32> {
    let mut graph = WeightedGraph::new();

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.set_edge((x, y), (x + 1, y), 'E', 1);
                graph.set_edge((x + 1, y), (x, y), 'W', 1);
            }
            if y + 1 < height {
                graph.set_edge((x, y), (x, y + 1), 'S', 1);
                graph.set_edge((x, y + 1), (x, y), 'N', 1);
            }
        }
    }

    graph
}
