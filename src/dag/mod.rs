// src/dag/mod.rs

//! Dependency graph model and the algorithms over it.
//!
//! - [`graph`] holds the adjacency-list task graph.
//! - [`traversal`] is the explicit-stack DFS both algorithms share.
//! - [`cycle`] answers "does this graph have a cycle?".
//! - [`topo`] produces a topological execution order.
//! - [`generator`] samples random acyclic graphs.

pub mod cycle;
pub mod generator;
pub mod graph;
pub mod topo;
pub mod traversal;

pub use cycle::{find_cycle, has_cycle};
pub use generator::{Generated, GeneratorOptions, GraphGenerator};
pub use graph::Graph;
pub use topo::{SortOutcome, TopologicalOrder, sort, sort_with_trace};
pub use traversal::{DfsEvent, Traversal, VisitState};
