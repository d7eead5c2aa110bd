// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::dag::generator::DEFAULT_MAX_ATTEMPTS;

/// Configuration exactly as read from TOML, before validation.
///
/// ```toml
/// [generator]
/// max_attempts = 100000
/// seed = 42
///
/// [output]
/// results_file = "task_scheduling_results.txt"
/// save = true
///
/// [run]
/// tasks = 5
/// dependencies = 4
/// ```
///
/// Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub generator: GeneratorSection,

    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub run: RunSection,
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub generator: GeneratorSection,
    pub output: OutputSection,
    pub run: RunSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        generator: GeneratorSection,
        output: OutputSection,
        run: RunSection,
    ) -> Self {
        Self {
            generator,
            output,
            run,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        let raw = RawConfigFile::default();
        Self::new_unchecked(raw.generator, raw.output, raw.run)
    }
}

/// `[generator]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    /// Candidate graphs to try before giving up. Must be >= 1.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u64,

    /// Fixed seed for reproducible graphs; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_attempts() -> u64 {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            seed: None,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Where run records are appended.
    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,

    /// Set to `false` to skip the results log entirely.
    #[serde(default = "default_save")]
    pub save: bool,
}

fn default_results_file() -> PathBuf {
    PathBuf::from("task_scheduling_results.txt")
}

fn default_save() -> bool {
    true
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            results_file: default_results_file(),
            save: default_save(),
        }
    }
}

/// `[run]` section: fixed graph size for non-interactive runs.
///
/// Either both fields are set or neither.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    #[serde(default)]
    pub tasks: Option<i64>,

    #[serde(default)]
    pub dependencies: Option<i64>,
}
