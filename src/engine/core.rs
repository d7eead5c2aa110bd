// src/engine/core.rs

//! Pure planning core.
//!
//! A [`Planner`] turns validated [`GraphParams`] into a [`Schedule`]:
//! generate an acyclic graph, then sort it. It performs no IO; the session
//! shell in [`super::runtime`] handles prompting, printing and persistence.

use rand::Rng;
use tracing::debug;

use crate::dag::{GraphGenerator, sort_with_trace};
use crate::errors::Result;
use crate::types::GraphParams;

use super::Schedule;

#[derive(Debug)]
pub struct Planner<R> {
    generator: GraphGenerator<R>,
}

impl<R: Rng> Planner<R> {
    pub fn new(generator: GraphGenerator<R>) -> Self {
        Self { generator }
    }

    /// Generate a graph for `params` and compute its execution order.
    pub fn plan(&mut self, params: GraphParams) -> Result<Schedule> {
        let generated = self.generator.generate(params)?;
        let outcome = sort_with_trace(&generated.graph)?;

        debug!(
            tasks = params.tasks(),
            dependencies = params.dependencies(),
            attempts = generated.attempts,
            "planned execution order"
        );

        Ok(Schedule {
            params,
            graph: generated.graph,
            order: outcome.order,
            discovered: outcome.discovered,
            attempts: generated.attempts,
        })
    }
}
