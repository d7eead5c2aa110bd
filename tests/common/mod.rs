#![allow(dead_code)]

use dagsched::dag::Graph;

pub use dagsched_test_utils::init_tracing;

/// Assert the structural invariants every `Graph` must hold.
pub fn assert_simple_graph(graph: &Graph) {
    let mut seen = std::collections::HashSet::new();
    for (from, to) in graph.edges() {
        assert_ne!(from, to, "self-loop on {from}");
        assert!(from < graph.node_count() && to < graph.node_count());
        assert!(seen.insert((from, to)), "duplicate edge ({from}, {to})");
    }
    assert_eq!(seen.len(), graph.edge_count());
}
