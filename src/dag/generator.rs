// src/dag/generator.rs

//! Random acyclic dependency graph generation.
//!
//! Each attempt samples exactly `M` edges by drawing random ordered pairs
//! and rejecting self-loops, repeats and direct reversals of an already
//! chosen edge. The candidate is then handed to the cycle detector; any
//! cycle throws the whole candidate away. The reversal check only filters
//! out 2-cycles early. Acceptance is decided by the detector.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info};

use crate::dag::cycle::has_cycle;
use crate::dag::graph::Graph;
use crate::errors::{DagschedError, Result};
use crate::types::GraphParams;

/// Default cap on candidate edge sets per generation.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Give up after this many rejected candidates. `None` retries forever.
    pub max_attempts: Option<u64>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

/// An accepted graph plus how many candidates it took.
#[derive(Debug, Clone)]
pub struct Generated {
    pub graph: Graph,
    pub attempts: u64,
}

/// Generates random DAGs from an injected random source.
#[derive(Debug)]
pub struct GraphGenerator<R> {
    rng: R,
    options: GeneratorOptions,
}

impl<R: Rng> GraphGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self::with_options(rng, GeneratorOptions::default())
    }

    pub fn with_options(rng: R, options: GeneratorOptions) -> Self {
        Self { rng, options }
    }

    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    /// Generate an acyclic graph with `params.tasks()` nodes and exactly
    /// `params.dependencies()` edges.
    pub fn generate(&mut self, params: GraphParams) -> Result<Generated> {
        if !params.is_feasible() {
            return Err(DagschedError::GenerationInfeasible {
                tasks: params.tasks(),
                dependencies: params.dependencies(),
                max: params.max_dependencies(),
            });
        }

        let mut attempts = 0u64;
        loop {
            if let Some(max) = self.options.max_attempts {
                if attempts >= max {
                    return Err(DagschedError::RetryExhausted { attempts });
                }
            }
            attempts += 1;

            let candidate = self.sample_candidate(params);
            if has_cycle(&candidate) {
                debug!(attempt = attempts, "candidate graph has a cycle; resampling");
                continue;
            }

            info!(
                tasks = params.tasks(),
                dependencies = params.dependencies(),
                attempts,
                "generated acyclic dependency graph"
            );
            return Ok(Generated {
                graph: candidate,
                attempts,
            });
        }
    }

    fn sample_candidate(&mut self, params: GraphParams) -> Graph {
        let n = params.tasks();
        let mut graph = Graph::empty(n);
        let mut chosen = HashSet::with_capacity(params.dependencies());

        while chosen.len() < params.dependencies() {
            let from = self.rng.gen_range(0..n);
            let to = self.rng.gen_range(0..n);

            if from == to || chosen.contains(&(to, from)) {
                continue;
            }
            if chosen.insert((from, to)) {
                graph.push_edge(from, to);
            }
        }

        graph
    }
}
