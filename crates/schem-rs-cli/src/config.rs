//! Converter configuration, loaded from an optional TOML file.

use serde::Deserialize;
use std::path::Path;

use crate::error::CliError;

#[derive(Debug, Default, Deserialize)]
pub struct ConverterConfig {
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub stats: StatsSection,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputSection {
    /// Indented JSON. Default: true.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatsSection {
    /// Block identifiers left out of the material summary.
    #[serde(default = "default_skip")]
    pub skip: Vec<String>,
}

fn default_skip() -> Vec<String> {
    vec!["minecraft:air".into()]
}

impl Default for StatsSection {
    fn default() -> Self {
        Self {
            skip: default_skip(),
        }
    }
}

impl ConverterConfig {
    /// Load `path` if it exists, otherwise use defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| CliError::Config {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config() {
        let toml_str = r#"
            [logging]
            level = "debug"

            [output]
            pretty = false

            [stats]
            skip = ["minecraft:air", "minecraft:cave_air"]
        "#;
        let config: ConverterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(!config.output.pretty);
        assert_eq!(config.stats.skip, ["minecraft:air", "minecraft:cave_air"]);
    }

    #[test]
    fn sections_default_when_absent() {
        let config: ConverterConfig = toml::from_str("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.output.pretty);
        assert_eq!(config.stats.skip, ["minecraft:air"]);

        let config: ConverterConfig = toml::from_str("[output]\n").unwrap();
        assert!(config.output.pretty);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConverterConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[output]\npretty = \"yes\"\n").unwrap();
        assert!(matches!(
            ConverterConfig::load_or_default(&path),
            Err(CliError::Config { .. })
        ));
    }
}
