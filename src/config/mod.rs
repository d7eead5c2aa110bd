// src/config/mod.rs

//! Configuration loading and validation.
//!
//! - `model.rs`: TOML-backed data model.
//! - `loader.rs`: reading the file through a [`crate::fs::FileSystem`].
//! - `validate.rs`: raw → validated conversion.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, GeneratorSection, OutputSection, RawConfigFile, RunSection};
