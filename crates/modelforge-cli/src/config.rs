//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `MODELFORGE_<SECTION>__<KEY>`, e.g.
//!    `MODELFORGE_DEFAULTS__DATABASE=mysql`
//! 3. `--config FILE` (must exist)
//! 4. `.modelforge.toml` in the current directory
//! 5. The platform config file ([`AppConfig::config_path`])
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use modelforge_core::domain::{Infrastructure, SystemModel};

use crate::cli::TreeFormat;

/// File name of the per-directory config.
pub const LOCAL_CONFIG_FILE: &str = ".modelforge.toml";

const ENV_PREFIX: &str = "MODELFORGE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Infrastructure fallbacks for models that leave them unset.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Where `compile` writes by default.
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub database: String,
    pub font_family: String,
    pub primary_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub tree_format: TreeFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub force: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            database: "postgresql".into(),
            font_family: "Inter".into(),
            primary_color: "#3b82f6".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            tree_format: TreeFormat::Tree,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("generated"),
            force: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from every source, highest priority last.
    ///
    /// `config_file` is the path passed via `--config`; it is required to
    /// exist, the implicit locations are not.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to seed built-in defaults")?,
            )
            .add_source(File::from(Self::config_path()).required(false))
            .add_source(File::new(LOCAL_CONFIG_FILE, FileFormat::Toml).required(false));

        if let Some(path) = config_file {
            debug!(path = %path.display(), "Using explicit config file");
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the platform configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to [`LOCAL_CONFIG_FILE`] in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "modelforge", "modelforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file a user most likely means by "the config": the explicit one,
    /// else a local file if present, else the platform file.
    pub fn active_path(explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None if Path::new(LOCAL_CONFIG_FILE).exists() => PathBuf::from(LOCAL_CONFIG_FILE),
            None => Self::config_path(),
        }
    }
}

impl Defaults {
    /// Fill the model's unset or blank infrastructure choices.
    pub fn apply_to(&self, model: &mut SystemModel) {
        let infra = model.infrastructure.get_or_insert_with(Infrastructure::default);
        fill(&mut infra.database, &self.database);
        fill(&mut infra.font_family, &self.font_family);
        fill(&mut infra.primary_color, &self.primary_color);
    }
}

fn fill(slot: &mut Option<String>, fallback: &str) {
    let unset = slot.as_deref().is_none_or(|v| v.trim().is_empty());
    if unset && !fallback.trim().is_empty() {
        *slot = Some(fallback.to_string());
    }
}
