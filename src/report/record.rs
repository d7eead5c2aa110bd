// src/report/record.rs

//! Results log records.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::engine::Schedule;
use crate::errors::Result;
use crate::fs::FileSystem;

use super::format::{render_adjacency, render_order};

const DELIMITER: &str = "=====================================";

/// One appended block in the results log.
#[derive(Debug, Clone)]
pub struct RunRecord<'a> {
    pub timestamp: DateTime<Utc>,
    pub schedule: &'a Schedule,
}

impl<'a> RunRecord<'a> {
    pub fn new(schedule: &'a Schedule, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            schedule,
        }
    }

    pub fn render(&self) -> String {
        let schedule = self.schedule;
        let mut out = String::new();

        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(&format!(
            "Task Scheduling Attempt: {}\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&format!(
            "Number of Tasks: {}, Number of Dependencies: {}\n",
            schedule.params.tasks(),
            schedule.params.dependencies()
        ));
        out.push_str("Adjacency List:\n");
        out.push_str(&render_adjacency(&schedule.graph));
        out.push_str("Topological Order of Execution:\n");
        out.push_str(&render_order(&schedule.order));
        out.push('\n');
        out.push_str(DELIMITER);
        out.push_str("\n\n");

        out
    }
}

/// Append-only results file behind a [`FileSystem`].
#[derive(Debug)]
pub struct ResultsLog<F> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> ResultsLog<F> {
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &RunRecord<'_>) -> Result<()> {
        let text = record.render();
        debug!(path = ?self.path, bytes = text.len(), "appending run record");
        self.fs.append(&self.path, text.as_bytes())?;
        info!(path = ?self.path, "results saved");
        Ok(())
    }
}
