use crate::config::OutputFormat;

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "heft.json";

/// Prefix of the environment variables read by the loader.
pub const ENV_PREFIX: &str = "HEFT_";

pub fn default_min_size() -> u64 {
    heft_graph::DEFAULT_MIN_SIZE
}

pub fn default_format() -> OutputFormat {
    OutputFormat::Dot
}
