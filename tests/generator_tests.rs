use weighted_paths::graph::generators::{generate_chain, generate_grid, generate_random, GeneratorConfig};
use weighted_paths::Error;

#[test]
fn test_random_graph_respects_config() {
    let config = GeneratorConfig {
        nodes: 100,
        edge_factor: 2.0,
        min_weight: 5,
        max_weight: 9,
        seed: Some(1),
    };
    let graph = generate_random(&config).unwrap();

    assert!(graph.edge_count() <= 200);
    assert!(graph.edge_count() > 0);
    for u in 0..100 {
        for (&v, edge) in graph.neighbors(&u) {
            assert!(v < 100);
            assert_ne!(u, v);
            assert_eq!(edge.value, (u, v));
            assert!((5..=9).contains(&edge.weight));
        }
    }
}

#[test]
fn test_random_graph_is_reproducible_with_seed() {
    let config = GeneratorConfig {
        nodes: 50,
        seed: Some(99),
        ..GeneratorConfig::default()
    };
    let first = generate_random(&config).unwrap();
    let second = generate_random(&config).unwrap();

    assert_eq!(first.edge_count(), second.edge_count());
    for u in 0..50 {
        for (v, edge) in first.neighbors(&u) {
            assert_eq!(second.edge(&u, v), Some(edge));
        }
    }
}

#[test]
fn test_invalid_config_is_rejected() {
    let empty = GeneratorConfig {
        nodes: 0,
        ..GeneratorConfig::default()
    };
    assert!(matches!(generate_random(&empty), Err(Error::InvalidConfig(_))));

    let inverted = GeneratorConfig {
        min_weight: 10,
        max_weight: 1,
        ..GeneratorConfig::default()
    };
    assert!(matches!(inverted.validate(), Err(Error::InvalidConfig(_))));

    let negative = GeneratorConfig {
        edge_factor: -1.0,
        ..GeneratorConfig::default()
    };
    assert!(negative.validate().is_err());
}

#[test]
fn test_chain_and_grid_shapes() {
    let chain = generate_chain(10);
    assert_eq!(chain.edge_count(), 10);
    assert_eq!(chain.node_count(), 11);

    let grid = generate_grid(3, 4);
    assert_eq!(grid.node_count(), 12);
    // Two directed edges per adjacent pair: 2 * (2 * 4 + 3 * 3)
    assert_eq!(grid.edge_count(), 34);
    assert_eq!(grid.edge(&(0, 0), &(1, 0)).map(|edge| edge.value), Some('E'));
    assert_eq!(grid.edge(&(0, 1), &(0, 0)).map(|edge| edge.value), Some('N'));
}
