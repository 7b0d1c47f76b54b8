use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error(
        "Invalid key_length {key_length} in config file at {config_path}: expected {min}..={max}",
        min = Config::MIN_KEY_LENGTH,
        max = Config::MAX_KEY_LENGTH
    )]
    InvalidKeyLength {
        config_path: PathBuf,
        key_length: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Length of generated block keys.
    pub key_length: usize,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Default output file when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    /// Log inert `et_pb_*` tags found while converting.
    pub report_inert_tags: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_length: Self::DEFAULT_KEY_LENGTH,
            pretty: false,
            output_path: None,
            report_inert_tags: true,
        }
    }
}

impl Config {
    pub const MIN_KEY_LENGTH: usize = 8;
    pub const DEFAULT_KEY_LENGTH: usize = 12;
    pub const MAX_KEY_LENGTH: usize = 32;

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the output path
        config.output_path = config
            .output_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));
        if !(Self::MIN_KEY_LENGTH..=Self::MAX_KEY_LENGTH).contains(&config.key_length) {
            return Err(ConfigError::InvalidKeyLength {
                config_path: config_path.to_path_buf(),
                key_length: config.key_length,
            });
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/divi-blocks");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
