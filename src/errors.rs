// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DagschedError {
    #[error("Invalid number of tasks or dependencies: {0}")]
    InvalidParameters(String),

    #[error(
        "cannot place {dependencies} dependencies among {tasks} tasks without a cycle (at most {max})"
    )]
    GenerationInfeasible {
        tasks: usize,
        dependencies: usize,
        max: usize,
    },

    #[error("no acyclic dependency graph found after {attempts} attempts")]
    RetryExhausted { attempts: u64 },

    #[error("Cycle detected in dependency graph: {0}")]
    CycleDetected(String),

    #[error("Invalid edge: {0}")]
    InvalidEdge(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DagschedError {
    /// Errors that only spoil the current round; an interactive session
    /// reports them and moves on to the next one.
    pub fn is_round_local(&self) -> bool {
        matches!(
            self,
            DagschedError::InvalidParameters(_)
                | DagschedError::GenerationInfeasible { .. }
                | DagschedError::RetryExhausted { .. }
                | DagschedError::CycleDetected(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DagschedError>;
