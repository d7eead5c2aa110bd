use std::collections::BTreeSet;

use dagsched::dag::{Graph, has_cycle, sort};
use proptest::prelude::*;

// Strategy to generate an arbitrary DAG.
// Edges only go from a lower to a higher *rank*; ranks are then shuffled
// onto node indices so the index order says nothing about the edges.
fn dag_strategy(max_nodes: usize) -> impl Strategy<Value = Graph> {
    (1..=max_nodes).prop_flat_map(|n| {
        let ranks = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
        let pairs = proptest::collection::vec((0..n, 0..n), 0..(n * 2));

        (ranks, pairs).prop_map(move |(ranks, pairs)| {
            let edges: BTreeSet<(usize, usize)> = pairs
                .into_iter()
                .filter(|(a, b)| a < b)
                .map(|(a, b)| (ranks[a], ranks[b]))
                .collect();
            Graph::from_edges(n, edges).expect("rank-ordered edges are valid")
        })
    })
}

proptest! {
    #[test]
    fn order_is_a_permutation_respecting_every_edge(graph in dag_strategy(40)) {
        prop_assert!(!has_cycle(&graph));

        let order = sort(&graph).unwrap();
        prop_assert_eq!(order.len(), graph.node_count());

        let mut seen = vec![false; graph.node_count()];
        for node in order.iter() {
            prop_assert!(!seen[node], "node {} appears twice", node);
            seen[node] = true;
        }

        let position: Vec<usize> = {
            let mut pos = vec![0; graph.node_count()];
            for (idx, node) in order.iter().enumerate() {
                pos[node] = idx;
            }
            pos
        };
        for (from, to) in graph.edges() {
            prop_assert!(position[from] < position[to], "edge {} -> {} points backwards", from, to);
        }
        prop_assert!(order.is_consistent_with(&graph));
    }

    #[test]
    fn sorting_twice_gives_the_same_order(graph in dag_strategy(25)) {
        prop_assert_eq!(sort(&graph).unwrap(), sort(&graph).unwrap());
    }
}
