use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Options for the HTML projection of a parsed document.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub document: DocumentConfig,
    pub links: LinksConfig,
    pub code: CodeConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Wrap the output in an `<article>` element.
    pub wrap: bool,
    pub class: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            wrap: true,
            class: "markdown-body".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub new_tab: bool,
    /// Value of the `rel` attribute; omitted when empty.
    pub rel: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            new_tab: true,
            rel: "noreferrer".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CodeConfig {
    pub class_prefix: String,
    pub lowercase_language: bool,
    /// Emit a `data-language` attribute alongside the class.
    pub data_attribute: bool,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            class_prefix: "language-".to_string(),
            lowercase_language: true,
            data_attribute: true,
        }
    }
}

impl CodeConfig {
    /// Language name as it should appear in the output, or `None` when the
    /// fence had no info string.
    pub fn display_language(&self, language: &str) -> Option<String> {
        if language.is_empty() {
            None
        } else if self.lowercase_language {
            Some(language.to_lowercase())
        } else {
            Some(language.to_string())
        }
    }
}

impl Config {
    /// The config bundled with the crate (`src/default_config.toml`).
    pub fn compiled_default() -> Self {
        match toml::from_str(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                debug_assert!(false, "bundled default_config.toml does not deserialize: {e}");
                log::warn!("bundled default config is invalid, using built-in defaults: {e}");
                Self::default()
            }
        }
    }

    /// Load config from a TOML file. Missing sections and keys take their
    /// default values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            config_path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: path.to_path_buf(),
            source,
        })
    }
}
