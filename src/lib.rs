//! Weighted Paths - generic containers and keyed shortest paths
//!
//! This library provides a binary min-heap priority queue parameterized over an
//! ordered key and an arbitrary payload, two simple sequence containers, and a
//! weighted directed graph keyed by arbitrary hashable node identifiers.
//!
//! The graph answers single-pair shortest path queries with Dijkstra's
//! algorithm and reconstructs both the node path and the sequence of edge
//! values along it. Edge weights are non-negative by construction.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, discovery::DiscoveryDijkstra, ShortestPath, ShortestPathAlgorithm,
};
pub use data_structures::{Deque, PriorityQueue, Sequence, Slice};
/// Re-export main types for convenient use
pub use graph::{Edge, NonNegativeF64, Weight, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Edge weight is not a number")]
    NotANumber,

    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
