// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod report;
pub mod types;

use std::io;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::{ConfigFile, default_config_path, load_and_validate, load_or_default};
use crate::dag::{GeneratorOptions, GraphGenerator};
use crate::engine::{Planner, Prompter, Session};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::report::ResultsLog;
use crate::types::GraphParams;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading + CLI overrides
/// - the seeded generator and planner
/// - the results log
/// - either a single round (fixed N/M) or the interactive session
pub fn run(args: CliArgs) -> Result<()> {
    let fs = RealFileSystem;
    let mut cfg = load_config(&fs, &args)?;
    apply_cli_overrides(&mut cfg, &args);

    let seed = cfg.generator.seed.unwrap_or_else(rand::random);
    info!(seed, max_attempts = cfg.generator.max_attempts, "generator configured");

    let generator = GraphGenerator::with_options(
        StdRng::seed_from_u64(seed),
        GeneratorOptions {
            max_attempts: Some(cfg.generator.max_attempts),
        },
    );
    let planner = Planner::new(generator);

    let log = cfg
        .output
        .save
        .then(|| ResultsLog::new(fs.clone(), cfg.output.results_file.clone()));

    let prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let mut session = Session::new(prompter, planner, log);

    match fixed_params(&cfg)? {
        Some(params) => {
            session.run_once(params)?;
        }
        None => {
            session.run_interactive()?;
        }
    }

    Ok(())
}

fn load_config(fs: &dyn FileSystem, args: &CliArgs) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => load_and_validate(fs, path),
        None => load_or_default(fs, default_config_path()),
    }
}

/// CLI flags win over the config file.
pub fn apply_cli_overrides(cfg: &mut ConfigFile, args: &CliArgs) {
    if let Some(seed) = args.seed {
        cfg.generator.seed = Some(seed);
    }
    if let Some(max_attempts) = args.max_attempts {
        cfg.generator.max_attempts = max_attempts;
    }
    if let Some(ref path) = args.results_file {
        cfg.output.results_file = path.clone();
    }
    if args.no_save {
        cfg.output.save = false;
    }
    if let (Some(tasks), Some(deps)) = (args.tasks, args.deps) {
        cfg.run.tasks = Some(tasks);
        cfg.run.dependencies = Some(deps);
    }
}

/// Graph size for a non-interactive run, if one is configured.
pub fn fixed_params(cfg: &ConfigFile) -> Result<Option<GraphParams>> {
    match (cfg.run.tasks, cfg.run.dependencies) {
        (Some(tasks), Some(dependencies)) => GraphParams::new(tasks, dependencies).map(Some),
        _ => Ok(None),
    }
}
