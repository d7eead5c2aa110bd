// src/report/format.rs

//! Plain-text rendering of graphs and orders.

use std::fmt::Write;

use crate::dag::{Graph, TopologicalOrder};
use crate::types::NodeId;

/// One line per task: `Task 0 -> 1 3 `.
pub fn render_adjacency(graph: &Graph) -> String {
    let mut out = String::new();
    for (node, successors) in graph.adjacency().iter().enumerate() {
        let _ = write!(out, "Task {node} -> ");
        for succ in successors {
            let _ = write!(out, "{succ} ");
        }
        out.push('\n');
    }
    out
}

/// One `Processing Task i` line per discovered node.
pub fn render_trace(discovered: &[NodeId]) -> String {
    discovered
        .iter()
        .map(|node| format!("Processing Task {node}\n"))
        .collect()
}

/// `Task 2 Task 0 Task 1 ` on a single line (no newline).
pub fn render_order(order: &TopologicalOrder) -> String {
    order.iter().map(|node| format!("Task {node} ")).collect()
}
