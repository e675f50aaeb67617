use std::time::{Duration, Instant};

use weighted_paths::graph::generators::{generate_chain, generate_random, GeneratorConfig};
use weighted_paths::{
    Deque, Dijkstra, DiscoveryDijkstra, PriorityQueue, Sequence, ShortestPathAlgorithm, Slice, WeightedGraph,
};

type RandomGraph = WeightedGraph<usize, (usize, usize), u32>;

// Pushes `n` elements at the front and pops them all from the front
fn benchmark_front<S: Sequence<usize>>(sequence: &mut S, n: usize) -> Duration {
    let start = Instant::now();
    for i in 0..n {
        sequence.push_front(i);
    }
    while sequence.pop_front().is_some() {}
    start.elapsed()
}

// Pushes keys in descending order so every push sifts to the root
fn benchmark_heap(n: usize) -> Duration {
    let start = Instant::now();
    let mut queue = PriorityQueue::with_capacity(n);
    for i in 0..n {
        queue.push(n - i, i);
    }
    while queue.pop().is_some() {}
    start.elapsed()
}

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &RandomGraph, queries: &[(usize, usize)]) -> (Duration, usize)
where
    A: ShortestPathAlgorithm<usize, (usize, usize), u32>,
{
    println!("Running {} on {} queries...", algorithm.name(), queries.len());

    let start = Instant::now();
    let found = queries
        .iter()
        .filter(|(source, target)| graph.shortest_path_with(algorithm, source, target).is_some())
        .count();
    let duration = start.elapsed();

    println!("  - Found {} of {} paths in {:?}", found, queries.len(), duration);
    (duration, found)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let sizes = vec![1_000, 10_000, 50_000];

    println!("=====================================================");
    println!("Benchmark: sequences and priority queue");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<15}", "Elements", "Slice (ms)", "Deque (ms)", "Heap (ms)");
    println!("-----------------------------------------------------");
    for &n in &sizes {
        let slice_time = benchmark_front(&mut Slice::new(), n);
        let deque_time = benchmark_front(&mut Deque::new(), n);
        let heap_time = benchmark_heap(n);
        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<15.2}",
            n,
            slice_time.as_secs_f64() * 1000.0,
            deque_time.as_secs_f64() * 1000.0,
            heap_time.as_secs_f64() * 1000.0
        );
    }

    println!("\n=====================================================");
    println!("Benchmark: shortest path on a chain");
    println!("=====================================================");
    for &n in &sizes {
        let chain = generate_chain(n);
        let start = Instant::now();
        let hops = chain.shortest_path(&0, &n).map_or(0, |path| path.hops());
        println!("Chain of {} edges: {} hops in {:?}", n, hops, start.elapsed());
    }

    println!("\n=====================================================");
    println!("Benchmark: Dijkstra vs DiscoveryDijkstra");
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &sizes {
        let config = GeneratorConfig {
            nodes: size,
            seed: Some(size as u64),
            ..GeneratorConfig::default()
        };
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = generate_random(&config)?;
        println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

        let queries: Vec<(usize, usize)> = (0..100).map(|i| (i % size, (i * 7919 + 1) % size)).collect();

        let (dijkstra_time, _) = benchmark_algorithm(&Dijkstra::new(), &graph, &queries);
        let (discovery_time, _) = benchmark_algorithm(&DiscoveryDijkstra::new(), &graph, &queries);

        let start = Instant::now();
        let parallel = graph.shortest_paths(&queries);
        let parallel_time = start.elapsed();
        println!("  - Parallel batch answered {} queries in {:?}", parallel.len(), parallel_time);

        results.push((size, dijkstra_time, discovery_time, parallel_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15}",
        "Nodes", "Dijkstra (ms)", "Discovery (ms)", "Parallel (ms)"
    );
    println!("-----------------------------------------------------");
    for (size, dijkstra_time, discovery_time, parallel_time) in &results {
        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<15.2}",
            size,
            dijkstra_time.as_secs_f64() * 1000.0,
            discovery_time.as_secs_f64() * 1000.0,
            parallel_time.as_secs_f64() * 1000.0
        );
    }

    Ok(())
}
