pub mod dijkstra;
pub mod discovery;
pub mod traits;

pub use dijkstra::Dijkstra;
pub use discovery::DiscoveryDijkstra;
pub use traits::{ShortestPath, ShortestPathAlgorithm};
