// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{DagschedError, Result};
use crate::types::GraphParams;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::DagschedError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.generator, raw.output, raw.run))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_generator(cfg)?;
    validate_output(cfg)?;
    validate_run(cfg)?;
    Ok(())
}

fn validate_generator(cfg: &RawConfigFile) -> Result<()> {
    if cfg.generator.max_attempts == 0 {
        return Err(DagschedError::ConfigError(
            "[generator].max_attempts must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_output(cfg: &RawConfigFile) -> Result<()> {
    if cfg.output.save && cfg.output.results_file.as_os_str().is_empty() {
        return Err(DagschedError::ConfigError(
            "[output].results_file must not be empty when save = true".to_string(),
        ));
    }
    Ok(())
}

fn validate_run(cfg: &RawConfigFile) -> Result<()> {
    match (cfg.run.tasks, cfg.run.dependencies) {
        (None, None) => Ok(()),
        (Some(tasks), Some(dependencies)) => {
            let params = GraphParams::new(tasks, dependencies)
                .map_err(|e| DagschedError::ConfigError(format!("[run]: {e}")))?;
            if !params.is_feasible() {
                return Err(DagschedError::ConfigError(format!(
                    "[run]: {} dependencies cannot form an acyclic graph over {} tasks (at most {})",
                    params.dependencies(),
                    params.tasks(),
                    params.max_dependencies()
                )));
            }
            Ok(())
        }
        _ => Err(DagschedError::ConfigError(
            "[run].tasks and [run].dependencies must be set together".to_string(),
        )),
    }
}
