// src/dag/graph.rs

use std::collections::HashSet;

use crate::errors::{DagschedError, Result};
use crate::types::NodeId;

/// Task dependency graph over nodes `0..node_count`.
///
/// Stored as an adjacency list: `successors(u)` lists every `v` with an edge
/// `u -> v`, in insertion order. Traversals visit successors in exactly that
/// order, which is what makes detection and sorting deterministic for a given
/// graph.
///
/// A `Graph` never contains self-loops or duplicate edges. It may contain a
/// cycle when built with [`Graph::from_edges`]; graphs returned by the
/// generator never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl Graph {
    /// Graph with `node_count` nodes and no edges.
    pub fn empty(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Build a graph from an explicit edge list.
    ///
    /// Rejects endpoints outside `0..node_count`, self-loops and repeated
    /// `(u, v)` pairs. Cycles are accepted; ask the cycle detector about
    /// those.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut graph = Self::empty(node_count);
        let mut seen = HashSet::new();

        for (from, to) in edges {
            if from >= node_count || to >= node_count {
                return Err(DagschedError::InvalidEdge(format!(
                    "edge ({from}, {to}) references a task outside 0..{node_count}"
                )));
            }
            if from == to {
                return Err(DagschedError::InvalidEdge(format!(
                    "task {from} cannot depend on itself"
                )));
            }
            if !seen.insert((from, to)) {
                return Err(DagschedError::InvalidEdge(format!(
                    "duplicate edge ({from}, {to})"
                )));
            }
            graph.push_edge(from, to);
        }

        Ok(graph)
    }

    /// Append `to` to the successor list of `from`.
    ///
    /// Callers uphold the no-self-loop / no-duplicate invariants.
    pub(crate) fn push_edge(&mut self, from: NodeId, to: NodeId) {
        debug_assert!(from != to, "self-loop {from} -> {to}");
        self.adjacency[from].push(to);
        self.edge_count += 1;
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Immediate successors of `node` (tasks that depend on it).
    ///
    /// Unknown nodes have no successors.
    pub fn successors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency
            .get(node)
            .map(|s| s.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.successors(from).contains(&to)
    }

    /// Full adjacency list, indexed by node.
    pub fn adjacency(&self) -> &[Vec<NodeId>] {
        &self.adjacency
    }

    /// All nodes in index order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        0..self.adjacency.len()
    }

    /// All edges, grouped by source node in index order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, succ)| succ.iter().map(move |&to| (from, to)))
    }
}
