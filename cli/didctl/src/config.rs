//! Configuration loading.
//!
//! Handles:
//! - Log level default
//! - Implicit scope table (which dotted name prefixes carry their own scope)
//!
//! The file is TOML:
//!
//! ```toml
//! log_level = "warn"
//!
//! [implicit_scopes]
//! user = 2
//! group = 2
//! ```
//!
//! An `[implicit_scopes]` table replaces the built-in one entirely.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use catalog_did::ImplicitScopes;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.toml";

/// Get the config directory path.
fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "catalog", "did").map(|dirs| dirs.config_dir().to_path_buf())
}

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset and no flag overrides it.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Recognized implicit-scope kinds.
    #[serde(default)]
    pub implicit_scopes: ImplicitScopes,

    /// File the configuration was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            implicit_scopes: ImplicitScopes::default(),
            source: None,
        }
    }
}

impl Config {
    /// Load config from `path`, or from the default location, or return default.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match config_dir().map(|dir| dir.join(CONFIG_FILE)) {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let mut config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
