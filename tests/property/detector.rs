use std::collections::BTreeSet;

use dagsched::dag::{Graph, find_cycle, has_cycle, sort};
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::DiGraph;
use proptest::prelude::*;

// Arbitrary simple directed graphs, cyclic or not.
fn digraph_strategy(max_nodes: usize) -> impl Strategy<Value = Graph> {
    (1..=max_nodes).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n), 0..(n * 2)).prop_map(move |pairs| {
            let edges: BTreeSet<(usize, usize)> =
                pairs.into_iter().filter(|(a, b)| a != b).collect();
            Graph::from_edges(n, edges).expect("filtered edges are valid")
        })
    })
}

fn petgraph_of(graph: &Graph) -> DiGraph<(), ()> {
    let mut pg = DiGraph::<(), ()>::new();
    let nodes: Vec<_> = graph.nodes().map(|_| pg.add_node(())).collect();
    for (from, to) in graph.edges() {
        pg.add_edge(nodes[from], nodes[to], ());
    }
    pg
}

proptest! {
    #[test]
    fn detector_agrees_with_petgraph(graph in digraph_strategy(15)) {
        prop_assert_eq!(has_cycle(&graph), is_cyclic_directed(&petgraph_of(&graph)));
    }

    #[test]
    fn detector_is_idempotent(graph in digraph_strategy(15)) {
        prop_assert_eq!(has_cycle(&graph), has_cycle(&graph));
        prop_assert_eq!(find_cycle(&graph), find_cycle(&graph));
    }

    #[test]
    fn reported_cycle_is_a_closed_walk_of_real_edges(graph in digraph_strategy(15)) {
        if let Some(cycle) = find_cycle(&graph) {
            prop_assert!(cycle.len() >= 3);
            prop_assert_eq!(cycle.first(), cycle.last());
            for pair in cycle.windows(2) {
                prop_assert!(graph.contains_edge(pair[0], pair[1]));
            }
        }
    }

    #[test]
    fn sorter_succeeds_exactly_on_acyclic_graphs(graph in digraph_strategy(15)) {
        match sort(&graph) {
            Ok(order) => {
                prop_assert!(!has_cycle(&graph));
                prop_assert!(order.is_consistent_with(&graph));
            }
            Err(_) => prop_assert!(has_cycle(&graph)),
        }
    }
}
