// src/engine/runtime.rs

use std::io::{BufRead, Write};

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::report::{ResultsLog, RunRecord, render_adjacency, render_order, render_trace};
use crate::types::GraphParams;

use super::core::Planner;
use super::prompt::Prompter;
use super::Schedule;

/// How a single interactive round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Completed,
    /// The round hit a round-local error, which was reported to the user.
    Failed,
    /// Input ran out before the round could start.
    EndOfInput,
}

/// Counters for an interactive session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub completed: usize,
    pub failed: usize,
}

/// IO shell around the [`Planner`].
///
/// Owns the prompter (console in/out) and an optional results log. All
/// planning semantics live in the planner; this type only decides what to
/// ask, what to print and what to persist.
#[derive(Debug)]
pub struct Session<R, W, G, F> {
    prompter: Prompter<R, W>,
    planner: Planner<G>,
    log: Option<ResultsLog<F>>,
}

impl<R, W, G, F> Session<R, W, G, F>
where
    R: BufRead,
    W: Write,
    G: Rng,
    F: FileSystem,
{
    pub fn new(prompter: Prompter<R, W>, planner: Planner<G>, log: Option<ResultsLog<F>>) -> Self {
        Self {
            prompter,
            planner,
            log,
        }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Plan a single round for known parameters. Errors propagate.
    pub fn run_once(&mut self, params: GraphParams) -> Result<Schedule> {
        let schedule = self.planner.plan(params)?;
        self.present(&schedule)?;
        Ok(schedule)
    }

    /// Keep asking for N and M until the user declines another round or
    /// input runs out.
    pub fn run_interactive(&mut self) -> Result<SessionSummary> {
        info!("interactive session started");
        let mut summary = SessionSummary::default();

        loop {
            match self.play_round()? {
                RoundOutcome::Completed => summary.completed += 1,
                RoundOutcome::Failed => summary.failed += 1,
                RoundOutcome::EndOfInput => break,
            }
            if !self.prompter.ask_another()? {
                break;
            }
        }

        writeln!(self.prompter.output(), "Exiting the program")?;
        info!(?summary, "interactive session finished");
        Ok(summary)
    }

    /// Ask for N and M, then plan and present one round.
    pub fn play_round(&mut self) -> Result<RoundOutcome> {
        let Some(tasks) = self.prompter.ask_integer("N")? else {
            return Ok(RoundOutcome::EndOfInput);
        };
        let Some(dependencies) = self.prompter.ask_integer("M")? else {
            return Ok(RoundOutcome::EndOfInput);
        };
        debug!(tasks, dependencies, "round parameters read");

        let planned =
            GraphParams::new(tasks, dependencies).and_then(|params| self.planner.plan(params));

        match planned {
            Ok(schedule) => {
                self.present(&schedule)?;
                Ok(RoundOutcome::Completed)
            }
            Err(err) if err.is_round_local() => {
                warn!(%err, "round failed");
                writeln!(self.prompter.output(), "Exception: {err}")?;
                Ok(RoundOutcome::Failed)
            }
            Err(err) => Err(err),
        }
    }

    /// Print the graph, the sort trace and the order, then persist.
    ///
    /// A results log that cannot be written is reported but does not fail
    /// the round; the schedule itself is already valid.
    fn present(&mut self, schedule: &Schedule) -> Result<()> {
        let out = self.prompter.output();
        writeln!(out, "Generated Random Dependency Graph:")?;
        write!(out, "{}", render_adjacency(&schedule.graph))?;
        writeln!(out)?;
        writeln!(out, "Starting Topological Sorting:")?;
        write!(out, "{}", render_trace(&schedule.discovered))?;
        writeln!(out)?;
        writeln!(out, "Topological Order of Execution:")?;
        writeln!(out, "{}", render_order(&schedule.order))?;

        let Some(log) = &self.log else {
            return Ok(());
        };

        let record = RunRecord::new(schedule, Utc::now());
        match log.append(&record) {
            Ok(()) => writeln!(
                out,
                "Results have been saved to '{}'",
                log.path().display()
            )?,
            Err(err) => {
                warn!(path = ?log.path(), %err, "could not write results log");
                writeln!(out, "Error writing results to '{}': {err}", log.path().display())?;
            }
        }
        Ok(())
    }
}
