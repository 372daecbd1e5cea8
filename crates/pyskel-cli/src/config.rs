//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PYSKEL_` prefix, `__` between sections,
//!    e.g. `PYSKEL_FINALIZE__STRICT=true`, `PYSKEL_DEFAULTS__LINE_LENGTH=88`
//! 3. Config file (`--config`, or the platform config dir when present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use pyskel_core::domain::GenerationConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default generation values, keyed like the answers file.
    #[serde(default)]
    pub defaults: GenerationConfig,
    /// Post-generation lock step.
    #[serde(default)]
    pub finalize: FinalizeConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizeConfig {
    /// Run the lock step after generation.
    pub enabled: bool,
    /// Treat a failed lock step as an error.
    pub strict: bool,
    /// Program and arguments of the lock step.
    pub command: Vec<String>,
}

impl Default for FinalizeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            strict: false,
            command: vec!["poetry".into(), "lock".into()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist; the platform default is only
    /// read when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("failed to build default configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                builder = builder.add_source(File::from(path.as_path()).required(true));
            }
            None => {
                let path = Self::config_path();
                if path.exists() {
                    debug!(path = %path.display(), "loading config file");
                    builder = builder.add_source(File::from(path));
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("PYSKEL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(" ")
                .with_list_parse_key("finalize.command"),
        );

        let config = builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.pyskel.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "pyskel", "pyskel")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".pyskel.toml"))
    }

    /// The file `--config` names, or the platform default.
    pub fn active_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Flatten into dotted `key = value` pairs, sorted by key.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .defaults
            .iter()
            .map(|(k, v)| (format!("defaults.{k}"), v.to_string()))
            .collect();

        entries.push(("finalize.enabled".into(), self.finalize.enabled.to_string()));
        entries.push(("finalize.strict".into(), self.finalize.strict.to_string()));
        entries.push(("finalize.command".into(), self.finalize.command.join(" ")));
        entries.push(("output.no_color".into(), self.output.no_color.to_string()));
        entries.push(("output.format".into(), self.output.format.clone()));

        entries.sort();
        entries
    }

    /// Look up one dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }
}
