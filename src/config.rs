//! Configuration for solution-helper
//!
//! Every stage receives a [`HelperConfig`] instead of reading module-level
//! constants. Values come from three layers, highest precedence first:
//!
//! 1. CLI flags (`--terraform-dir`, `--lambda-dir`, `--output-dir`)
//! 2. An optional TOML file passed with `--config`
//! 3. Built-in defaults matching the solutions repository layout
//!
//! # File format
//!
//! ```toml
//! terraform_dir = "../terraform"
//! lambda_dir = "../source/custom-resource"
//! output_dir = "../deployment/regional-s3-assets"
//!
//! [placeholders]
//! bucket_name = "BUCKET_NAME"
//! solution_name = "SOLUTION_NAME"
//! version = "VERSION"
//! ```

use crate::placeholder::{Placeholder, Placeholders};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_TERRAFORM_DIR: &str = "../terraform";
const DEFAULT_LAMBDA_DIR: &str = "../source/custom-resource";
const DEFAULT_OUTPUT_DIR: &str = "../deployment/regional-s3-assets";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has wrongly typed keys
    #[error("Failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A placeholder name cannot be rendered as a token
    #[error("Invalid placeholder name for {placeholder}: {name:?} (must be non-empty, without '%' or whitespace)")]
    InvalidPlaceholder {
        placeholder: Placeholder,
        name: String,
    },
}

/// Paths and placeholder tokens shared by all pipeline stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperConfig {
    /// Directory containing the `.tf` files to rewrite
    pub terraform_dir: PathBuf,

    /// Directory with one subdirectory per Lambda function
    pub lambda_dir: PathBuf,

    /// Directory receiving generated JSON artifacts
    pub output_dir: PathBuf,

    pub placeholders: Placeholders,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            terraform_dir: PathBuf::from(DEFAULT_TERRAFORM_DIR),
            lambda_dir: PathBuf::from(DEFAULT_LAMBDA_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            placeholders: Placeholders::default(),
        }
    }
}

/// On-disk shape of the config file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    terraform_dir: Option<PathBuf>,
    lambda_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    placeholders: Option<Placeholders>,
}

impl HelperConfig {
    /// Loads a config file and layers it over the defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = Self::default();

        Ok(Self {
            terraform_dir: file.terraform_dir.unwrap_or(defaults.terraform_dir),
            lambda_dir: file.lambda_dir.unwrap_or(defaults.lambda_dir),
            output_dir: file.output_dir.unwrap_or(defaults.output_dir),
            placeholders: file.placeholders.unwrap_or(defaults.placeholders),
        })
    }

    pub fn with_terraform_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.terraform_dir = dir.into();
        self
    }

    pub fn with_lambda_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.lambda_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((placeholder, name)) = self.placeholders.first_invalid() {
            return Err(ConfigError::InvalidPlaceholder {
                placeholder,
                name: name.to_string(),
            });
        }
        Ok(())
    }
}
