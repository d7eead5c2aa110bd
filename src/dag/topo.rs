// src/dag/topo.rs

//! Depth-first topological sort (reverse post-order).

use std::ops::ControlFlow;

use tracing::debug;

use crate::dag::cycle::describe_cycle;
use crate::dag::graph::Graph;
use crate::dag::traversal::{DfsEvent, Traversal};
use crate::errors::{DagschedError, Result};
use crate::types::NodeId;

/// A linear execution order: every task appears once, and for each edge
/// `u -> v`, `u` comes before `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder(Vec<NodeId>);

impl TopologicalOrder {
    pub fn as_slice(&self) -> &[NodeId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<NodeId> {
        self.0
    }

    /// Check that this order is a permutation of the graph's nodes and that
    /// every edge points forward in it.
    pub fn is_consistent_with(&self, graph: &Graph) -> bool {
        if self.0.len() != graph.node_count() {
            return false;
        }

        let mut position = vec![usize::MAX; graph.node_count()];
        for (idx, &node) in self.0.iter().enumerate() {
            match position.get_mut(node) {
                Some(slot) if *slot == usize::MAX => *slot = idx,
                _ => return false,
            }
        }

        graph.edges().all(|(from, to)| position[from] < position[to])
    }
}

/// Result of a sort pass including the order in which nodes were entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub order: TopologicalOrder,
    /// Nodes in the order the DFS first reached them.
    pub discovered: Vec<NodeId>,
}

/// Topologically sort an acyclic graph.
///
/// The graph is expected to be acyclic already. The pass still watches for
/// back-edges and returns [`DagschedError::CycleDetected`] instead of a
/// bogus order if it meets one.
pub fn sort(graph: &Graph) -> Result<TopologicalOrder> {
    sort_with_trace(graph).map(|outcome| outcome.order)
}

/// Like [`sort`], but also returns the DFS discovery order.
pub fn sort_with_trace(graph: &Graph) -> Result<SortOutcome> {
    let mut finished = Vec::with_capacity(graph.node_count());
    let mut discovered = Vec::with_capacity(graph.node_count());
    let mut traversal = Traversal::new(graph);

    let outcome = traversal.run(|event| match event {
        DfsEvent::Discover(node) => {
            discovered.push(node);
            ControlFlow::Continue(())
        }
        DfsEvent::Finish(node) => {
            finished.push(node);
            ControlFlow::Continue(())
        }
        DfsEvent::BackEdge { cycle, .. } => ControlFlow::Break(cycle),
    });

    if let ControlFlow::Break(cycle) = outcome {
        return Err(DagschedError::CycleDetected(describe_cycle(&cycle)));
    }

    // Last node to finish has nothing left that must precede it.
    finished.reverse();
    debug!(order = ?finished, "topological sort complete");

    Ok(SortOutcome {
        order: TopologicalOrder(finished),
        discovered,
    })
}
