// src/types.rs

use crate::errors::{DagschedError, Result};

/// Index of a task node; nodes of an `n`-node graph are `0..n`.
pub type NodeId = usize;

/// Largest task count a graph may be generated with.
pub const MAX_TASKS: usize = 1 << 20;

/// Largest dependency count a graph may be generated with.
pub const MAX_DEPENDENCIES: usize = 1 << 24;

/// Validated size of a graph to generate.
///
/// Raw values come from user input or config as signed integers, so the
/// constructor is where "N must be positive, M must not be negative" lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphParams {
    tasks: usize,
    dependencies: usize,
}

impl GraphParams {
    pub fn new(tasks: i64, dependencies: i64) -> Result<Self> {
        if tasks <= 0 || dependencies < 0 {
            return Err(DagschedError::InvalidParameters(format!(
                "tasks must be > 0 and dependencies >= 0 (got tasks = {tasks}, dependencies = {dependencies})"
            )));
        }

        let tasks = usize::try_from(tasks)
            .ok()
            .filter(|&n| n <= MAX_TASKS)
            .ok_or_else(|| {
                DagschedError::InvalidParameters(format!(
                    "tasks = {tasks} exceeds the limit of {MAX_TASKS}"
                ))
            })?;
        let dependencies = usize::try_from(dependencies)
            .ok()
            .filter(|&m| m <= MAX_DEPENDENCIES)
            .ok_or_else(|| {
                DagschedError::InvalidParameters(format!(
                    "dependencies = {dependencies} exceeds the limit of {MAX_DEPENDENCIES}"
                ))
            })?;

        Ok(Self {
            tasks,
            dependencies,
        })
    }

    /// Number of task nodes (N).
    pub fn tasks(&self) -> usize {
        self.tasks
    }

    /// Number of dependency edges (M).
    pub fn dependencies(&self) -> usize {
        self.dependencies
    }

    /// Largest edge count an acyclic graph on `tasks` nodes can carry:
    /// N·(N-1)/2, saturating on overflow.
    pub fn max_dependencies(&self) -> usize {
        max_acyclic_edges(self.tasks)
    }

    /// Whether an acyclic graph with these dimensions exists at all.
    pub fn is_feasible(&self) -> bool {
        self.dependencies <= self.max_dependencies()
    }
}

pub(crate) fn max_acyclic_edges(nodes: usize) -> usize {
    let n = nodes as u128;
    let max = n * n.saturating_sub(1) / 2;
    usize::try_from(max).unwrap_or(usize::MAX)
}
