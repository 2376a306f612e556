#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::{CliError, ConfigError};
    use figment::Jail;
    use std::path::{Path, PathBuf};

    fn load(overrides: &ConfigOverrides, path: Option<&Path>) -> HeftConfig {
        HeftConfig::load(overrides, path).expect("config should load")
    }

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = load(&ConfigOverrides::default(), None);
            assert_eq!(config.min_size, 409_600);
            assert_eq!(config.format, OutputFormat::Dot);
            assert_eq!(config.output, None);
            Ok(())
        });
    }

    #[test]
    fn test_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "heft.json",
                r#"{ "min_size": "1M", "format": "json", "output": "graph.json" }"#,
            )?;

            let config = load(&ConfigOverrides::default(), None);
            assert_eq!(config.min_size, 1024 * 1024);
            assert_eq!(config.format, OutputFormat::Json);
            assert_eq!(config.output, Some(PathBuf::from("graph.json")));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("heft.json", r#"{ "min_size": 100, "format": "json" }"#)?;
            jail.set_env("HEFT_MIN_SIZE", "2K");
            jail.set_env("HEFT_FORMAT", "dot");

            let config = load(&ConfigOverrides::default(), None);
            assert_eq!(config.min_size, 2048);
            assert_eq!(config.format, OutputFormat::Dot);
            Ok(())
        });
    }

    #[test]
    fn test_numeric_env_value() {
        Jail::expect_with(|jail| {
            jail.set_env("HEFT_MIN_SIZE", "5000");
            assert_eq!(load(&ConfigOverrides::default(), None).min_size, 5000);
            Ok(())
        });
    }

    #[test]
    fn test_cli_overrides_everything() {
        Jail::expect_with(|jail| {
            jail.create_file("heft.json", r#"{ "min_size": 100, "output": "file.gv" }"#)?;
            jail.set_env("HEFT_MIN_SIZE", "200");

            let overrides = ConfigOverrides {
                min_size: Some(300),
                format: Some(OutputFormat::Json),
                output: None,
            };
            let config = load(&overrides, None);
            assert_eq!(config.min_size, 300);
            assert_eq!(config.format, OutputFormat::Json);
            // Unset CLI fields keep the file value.
            assert_eq!(config.output, Some(PathBuf::from("file.gv")));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_config_path() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.json", r#"{ "min_size": 7 }"#)?;
            let config = load(&ConfigOverrides::default(), Some(Path::new("custom.json")));
            assert_eq!(config.min_size, 7);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_config_is_not_found() {
        Jail::expect_with(|_jail| {
            let err = HeftConfig::load(&ConfigOverrides::default(), Some(Path::new("nope.json")))
                .unwrap_err();
            assert!(matches!(err, CliError::Config(ConfigError::NotFound(_))));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_are_reported() {
        Jail::expect_with(|jail| {
            jail.create_file("heft.json", r#"{ "format": "svg" }"#)?;
            let err = HeftConfig::load(&ConfigOverrides::default(), None).unwrap_err();
            assert!(matches!(
                err,
                CliError::Config(ConfigError::InvalidValue { .. })
            ));
            Ok(())
        });

        Jail::expect_with(|jail| {
            jail.set_env("HEFT_MIN_SIZE", "huge");
            let err = HeftConfig::load(&ConfigOverrides::default(), None).unwrap_err();
            assert!(err.to_string().contains("Hint:"));
            Ok(())
        });
    }

    #[test]
    fn test_output_directory_is_rejected() {
        Jail::expect_with(|jail| {
            std::fs::create_dir(jail.directory().join("out")).map_err(|e| e.to_string())?;
            let overrides = ConfigOverrides {
                output: Some(PathBuf::from("out")),
                ..ConfigOverrides::default()
            };
            assert!(HeftConfig::load(&overrides, None).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_serialization_uses_snake_case() {
        let json = serde_json::to_value(HeftConfig::default_config()).unwrap();
        assert!(json.get("min_size").is_some());
        assert_eq!(json.get("format").and_then(|v| v.as_str()), Some("dot"));
        assert!(json.get("output").is_none());
    }
}
