//! Application configuration management.
//!
//! Settings are layered with figment, later layers winning:
//!
//! 1. built-in defaults
//! 2. TOML file (`--config`, or `config.toml` in the platform config dir)
//! 3. `DUPESORT_*` environment variables
//! 4. CLI flags ([`Config::merge_cli`])

use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "DUPESORT_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report format.
    pub output: OutputFormat,
    /// Print one line per skipped or moved file.
    pub show_details: bool,
    /// Show a progress bar while organizing.
    pub progress: bool,
    /// Colorize terminal output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            show_details: true,
            progress: true,
            color: true,
        }
    }
}

impl Config {
    /// Build the layered figment: defaults, optional TOML file, environment.
    ///
    /// A missing file is not an error; figment skips it.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or an environment variable holds an
    /// invalid value.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).or_else(Self::default_path);
        if let Some(ref p) = path {
            log::debug!("Loading configuration from {}", p.display());
        }

        Self::figment(path.as_deref())
            .extract()
            .context("Invalid configuration")
    }

    /// Apply CLI flags on top of the loaded settings.
    #[must_use]
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(output) = cli.output {
            self.output = output;
        }
        if cli.no_details {
            self.show_details = false;
        }
        if cli.no_progress {
            self.progress = false;
        }
        if cli.no_color {
            self.color = false;
        }
        self
    }

    /// Save the configuration as TOML, creating parent folders as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Platform-specific configuration path, if one can be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "dupesort", "dupesort")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
