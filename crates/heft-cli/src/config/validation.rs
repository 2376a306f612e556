use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

use crate::cli::parse_size;
use crate::config::HeftConfig;
use crate::error::{ConfigError, Result};

/// Deserialize a byte size given either as a number or as a suffixed string.
///
/// Accepts everything `--min-size` accepts, so `"400K"` works in heft.json
/// and in `HEFT_MIN_SIZE`.
pub fn deserialize_size<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct SizeVisitor;

    impl Visitor<'_> for SizeVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a byte count or a size such as \"400K\"")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<u64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<u64, E> {
            u64::try_from(value)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<u64, E> {
            parse_size(value).map_err(E::custom)
        }
    }

    deserializer.deserialize_any(SizeVisitor)
}

impl HeftConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        let Some(output) = self.output.as_deref() else {
            return Ok(());
        };

        if output.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output".to_string(),
                value: "\"\"".to_string(),
                hint: "Remove the field or give a file path".to_string(),
            }
            .into());
        }

        if output.is_dir() {
            return Err(ConfigError::InvalidValue {
                field: "output".to_string(),
                value: output.display().to_string(),
                hint: "The output must be a file path, not a directory".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
