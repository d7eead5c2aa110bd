// src/dag/cycle.rs

//! Cycle detection over a [`Graph`].

use std::ops::ControlFlow;

use tracing::trace;

use crate::dag::graph::Graph;
use crate::dag::traversal::{DfsEvent, Traversal};
use crate::types::NodeId;

/// Returns `true` if the graph contains a directed cycle.
///
/// Stops at the first back-edge found.
pub fn has_cycle(graph: &Graph) -> bool {
    find_cycle(graph).is_some()
}

/// First cycle found by the DFS, as a closed path `[a, b, .., a]`.
pub fn find_cycle(graph: &Graph) -> Option<Vec<NodeId>> {
    let mut traversal = Traversal::new(graph);

    let outcome = traversal.run(|event| match event {
        DfsEvent::BackEdge { from, to, cycle } => {
            trace!(from, to, "back-edge found");
            ControlFlow::Break(cycle)
        }
        _ => ControlFlow::Continue(()),
    });

    match outcome {
        ControlFlow::Break(cycle) => Some(cycle),
        ControlFlow::Continue(()) => None,
    }
}

/// Human readable form of a cycle path, e.g. `0 -> 1 -> 0`.
pub fn describe_cycle(cycle: &[NodeId]) -> String {
    cycle
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
