//! Configuration for heft with multi-source loading.
//!
//! Merges settings from CLI args, environment variables and a `heft.json`
//! file. Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod tests;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use crate::cli::OutputFormat;
pub use defaults::*;
pub use loading::ConfigOverrides;
pub use validation::*;

/// heft configuration - loaded from heft.json, `HEFT_*` variables or CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HeftConfig {
    /// Minimum cumulative size for a module to be exported (bytes or "400K")
    #[serde(default = "default_min_size", deserialize_with = "deserialize_size")]
    pub min_size: u64,

    /// Output format for `heft graph` (dot, json)
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Output file for `heft graph`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for HeftConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
