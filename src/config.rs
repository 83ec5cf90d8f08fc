//! Demo settings, read from a TOML file. Every field has a default that
//! reproduces the stock demos, so an empty file (or no file) is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::creational::builder::HouseStyle;
use crate::structural::decorator::Layer;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub logging: LoggingSection,
    pub builder: BuilderSection,
    pub factory: FactorySection,
    pub decorator: DecoratorSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderSection {
    pub unique_style: HouseStyle,
    pub shared_style: HouseStyle,
    /// How many directors share the one builder.
    pub shared_directors: usize,
}

impl Default for BuilderSection {
    fn default() -> Self {
        Self {
            unique_style: HouseStyle::Fancy,
            shared_style: HouseStyle::Wooden,
            shared_directors: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactorySection {
    /// Raw names, so unknown ones reach the factory and get rejected there.
    pub requests: Vec<String>,
}

impl Default for FactorySection {
    fn default() -> Self {
        Self {
            requests: vec!["truck".into(), "ship".into(), "plane".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoratorSection {
    pub layers: Vec<Layer>,
    pub message: String,
}

impl Default for DecoratorSection {
    fn default() -> Self {
        Self {
            layers: vec![Layer::Sms, Layer::Facebook, Layer::Slack],
            message: "Hello from the Decorator Pattern!".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Reads `path` if given, otherwise falls back to the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
