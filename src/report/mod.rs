// src/report/mod.rs

//! Rendering and persistence of planning results.

pub mod format;
pub mod record;

pub use format::{render_adjacency, render_order, render_trace};
pub use record::{ResultsLog, RunRecord};
