//! Configuration file support for persistent settings.
//!
//! Settings are loaded from a TOML file at `~/.config/money-fmt/config.toml`
//! (or the platform-specific equivalent). File values serve as defaults that
//! CLI flags override.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [output]
//! json = false
//! verbose = true
//! strict = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can tell which values the file actually
/// sets and layer CLI flags on top.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Output options
    #[serde(default)]
    pub output: FileOutputConfig,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    /// Emit a single JSON document instead of one line per input
    pub json: Option<bool>,

    /// Warn on stderr about empty, non-numeric or non-canonical inputs
    pub verbose: Option<bool>,

    /// Fail when an input is not a number
    pub strict: Option<bool>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// `<config_dir>/money-fmt/config.toml`, where `<config_dir>` is the
    /// platform configuration directory (`~/.config` on Linux, `%APPDATA%` on
    /// Windows). `None` when that directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("money-fmt").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// A missing file yields the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid
    /// TOML for this structure.
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML or
    /// unexpected fields.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })
    }
}
