use colored::Colorize;
use weighted_paths::{Dijkstra, DiscoveryDijkstra, ShortestPathAlgorithm, WeightedGraph};

fn show<A>(algorithm: &A, graph: &WeightedGraph<&'static str, &'static str, u32>, start: &'static str, goal: &'static str)
where
    A: ShortestPathAlgorithm<&'static str, &'static str, u32>,
{
    match graph.shortest_path_with(algorithm, &start, &goal) {
        Some(path) => println!(
            "  {} {} -> {}: {} via [{}] (total {})",
            algorithm.name().cyan(),
            start,
            goal,
            path.nodes.join(" -> ").green(),
            path.edges.join(", "),
            path.total.to_string().yellow()
        ),
        None => println!("  {} {} -> {}: {}", algorithm.name().cyan(), start, goal, "unreachable".red()),
    }
}

fn main() {
    env_logger::init();

    // Build a small road map; edge values are road names
    let mut graph: WeightedGraph<&str, &str, u32> = WeightedGraph::new();
    graph.set_edge("a", "b", "ab", 40);
    graph.set_edge("a", "c", "ac", 30);
    graph.set_edge("b", "c", "bc", 1);
    graph.set_edge("b", "d", "bd", 20);
    graph.set_edge("c", "d", "cd", 10);
    graph.set_edge("d", "e", "de", 100);
    graph.set_edge("x", "y", "xy", 100);

    // A cheap detour discovered late
    graph.set_edge("p", "q", "pq", 1);
    graph.set_edge("p", "r", "pr", 10);
    graph.set_edge("q", "r", "qr", 1);

    println!("{}", "--- Testing on a simple graph ---".bold());
    println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

    for (start, goal) in [("a", "e"), ("a", "a"), ("a", "y"), ("p", "r")] {
        show(&Dijkstra::new(), &graph, start, goal);
        show(&DiscoveryDijkstra::new(), &graph, start, goal);
    }
}
