// src/engine/mod.rs

//! Orchestration around the graph algorithms.
//!
//! - [`core`] is the pure planner: generation followed by sorting.
//! - [`prompt`] reads task/dependency counts from a line reader.
//! - [`runtime`] is the session shell: one-shot or interactive rounds,
//!   console output and the results log.

use crate::dag::{Graph, TopologicalOrder};
use crate::types::{GraphParams, NodeId};

/// Everything one planning round produced.
///
/// Plain data so the output side can render it without calling back into
/// the planner.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub params: GraphParams,
    pub graph: Graph,
    pub order: TopologicalOrder,
    /// DFS discovery order of the sort pass.
    pub discovered: Vec<NodeId>,
    /// Candidate graphs generated before one was accepted.
    pub attempts: u64,
}

pub mod core;
pub mod prompt;
pub mod runtime;

pub use self::core::Planner;
pub use prompt::Prompter;
pub use runtime::Session;
