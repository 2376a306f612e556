use crate::config::{CONFIG_FILE_NAME, ENV_PREFIX, HeftConfig, OutputFormat};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Values given explicitly on the command line.
///
/// `None` fields are not serialized, so they never shadow a value from a
/// lower-priority source.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl From<&crate::cli::GraphArgs> for ConfigOverrides {
    fn from(args: &crate::cli::GraphArgs) -> Self {
        Self {
            min_size: args.min_size,
            format: args.format,
            output: args.output.clone(),
        }
    }
}

impl From<&crate::cli::TopArgs> for ConfigOverrides {
    fn from(args: &crate::cli::TopArgs) -> Self {
        Self {
            min_size: args.min_size,
            ..Self::default()
        }
    }
}

impl HeftConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// An explicit `config_path` must exist; the default `heft.json` is only
    /// read when present.
    pub fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        let config_file = match config_path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                default_path.is_file().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = config_file {
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        // HEFT_MIN_SIZE, HEFT_FORMAT, HEFT_OUTPUT
        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        figment = figment.merge(Serialized::defaults(overrides));

        let config: Self = figment.extract().map_err(|e| {
            let field = if e.path.is_empty() {
                "configuration".to_string()
            } else {
                e.path.join(".")
            };
            ConfigError::InvalidValue {
                field,
                value: e.to_string(),
                hint: "Check heft.json and HEFT_* variables: min_size is bytes or a size such as \"400K\", format is 'dot' or 'json'".to_string(),
            }
        })?;

        config.validate()?;
        debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Get default configuration values.
    pub fn default_config() -> Self {
        use crate::config::defaults::*;

        Self {
            min_size: default_min_size(),
            format: default_format(),
            output: None,
        }
    }
}
