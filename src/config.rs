//! Configuration management for the CSV converter

use crate::error::{ConversorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub conversion: ConversionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConversionConfig {
    /// File name suffix an input entry must carry to be converted.
    pub extension: String,
    /// Lines starting with this prefix are treated as headers and dropped.
    pub header_prefix: String,
    /// Header written as the first line of every output file.
    pub output_header: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

pub const DEFAULT_INPUT_DIR: &str = "./entradas/";
pub const DEFAULT_OUTPUT_DIR: &str = "./saidas/";
pub const DEFAULT_HEADER_PREFIX: &str = "Nome";
pub const DEFAULT_OUTPUT_HEADER: &str = "Nome completo,Data de nascimento,Email,CPF";

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            extension: ".csv".to_string(),
            header_prefix: DEFAULT_HEADER_PREFIX.to_string(),
            output_header: DEFAULT_OUTPUT_HEADER.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or from the default location
    /// when it exists. Falls back to defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConversorError::Configuration(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    Self::load_from(&config_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ConversorError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConversorError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("conversor-csv")
            .join("config.toml")
    }

    /// Apply command line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        input_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        format: Option<OutputFormat>,
        no_color: bool,
    ) -> Self {
        if let Some(dir) = input_dir {
            self.paths.input_dir = dir;
        }
        if let Some(dir) = output_dir {
            self.paths.output_dir = dir;
        }
        if let Some(format) = format {
            self.output.format = format;
        }
        if no_color {
            self.output.color_output = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.paths.input_dir, PathBuf::from("./entradas/"));
        assert_eq!(config.paths.output_dir, PathBuf::from("./saidas/"));
        assert_eq!(config.conversion.header_prefix, "Nome");
        assert_eq!(
            config.conversion.output_header,
            "Nome completo,Data de nascimento,Email,CPF"
        );
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.paths.input_dir = PathBuf::from("/data/in");
        config.output.format = OutputFormat::Json;

        let text = config.to_toml().unwrap();
        let parsed = Config::from_toml(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed = Config::from_toml("[paths]\ninput_dir = \"in\"\n").unwrap();
        assert_eq!(parsed.paths.input_dir, PathBuf::from("in"));
        assert_eq!(parsed.paths.output_dir, PathBuf::from("./saidas/"));
        assert_eq!(parsed.conversion, ConversionConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml("[paths\n");
        assert!(matches!(result, Err(ConversorError::Configuration(_))));
    }

    #[test]
    fn test_missing_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(Some(temp_dir.path().join("missing.toml").as_path()));
        assert!(matches!(result, Err(ConversorError::Configuration(_))));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.color_output = false;
        config.save(&path).unwrap();

        let loaded = Config::load(Some(path.as_path())).unwrap();
        assert!(!loaded.output.color_output);
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::default().with_overrides(
            Some(PathBuf::from("a")),
            None,
            Some(OutputFormat::Json),
            true,
        );
        assert_eq!(config.paths.input_dir, PathBuf::from("a"));
        assert_eq!(config.paths.output_dir, PathBuf::from("./saidas/"));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color_output);
    }
}
