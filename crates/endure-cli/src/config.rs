//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the plain values the
//! commands pull out of it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables, `ENDURANCE__<SECTION>__<KEY>`
//!    (e.g. `ENDURANCE__TEMPLATES__BASE_DIR`)
//! 2. Config file (`--config FILE`, or the platform default if it exists)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use endure_core::{
    application::ScaffoldOptions,
    domain::{EventSources, LabelInference},
};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the project and module templates live.
    pub templates: TemplateConfig,
    /// Module scaffolding settings.
    pub scaffold: ScaffoldConfig,
    /// Event discovery settings.
    pub events: EventsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory the template paths are relative to.  Defaults to the
    /// directory containing the `endurance` executable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
    pub project: PathBuf,
    pub module: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub placeholder: String,
    pub modules_dir: String,
    pub excluded_files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    pub source_extension: String,
    pub pattern: String,
    pub dependency_dir: String,
    pub core_package: String,
    pub package_prefix: String,
    pub label_inference: LabelInference,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            project: PathBuf::from("node_modules/endurance-template"),
            module: PathBuf::from("node_modules/endurance-template-module"),
        }
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        let options = ScaffoldOptions::default();
        Self {
            placeholder: options.placeholder,
            modules_dir: EventSources::default().modules_dir,
            excluded_files: options.excluded_files,
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        let sources = EventSources::default();
        Self {
            source_extension: ".js".into(),
            pattern: endure_adapters::matcher::DEFAULT_EVENT_PATTERN.into(),
            dependency_dir: sources.dependency_dir,
            core_package: sources.core_package,
            package_prefix: sources.package_prefix,
            label_inference: LabelInference::default(),
        }
    }
}

impl AppConfig {
    /// Environment variable prefix.
    pub const ENV_PREFIX: &'static str = "ENDURANCE";

    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let config = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.endurance.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "endurance", "endurance")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".endurance.toml"))
    }

    /// Directory the template paths are resolved against.
    pub fn template_base_dir(&self) -> CliResult<PathBuf> {
        if let Some(dir) = &self.templates.base_dir {
            return Ok(dir.clone());
        }

        let exe = std::env::current_exe().map_err(|e| CliError::IoError {
            message: "Failed to locate the endurance executable".into(),
            source: e,
        })?;
        exe.parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| CliError::ConfigError {
                message: format!("Executable '{}' has no parent directory", exe.display()),
                source: None,
            })
    }

    /// Absolute location of the project template.
    pub fn project_template(&self) -> CliResult<PathBuf> {
        Ok(self.template_base_dir()?.join(&self.templates.project))
    }

    /// Absolute location of the module template.
    pub fn module_template(&self) -> CliResult<PathBuf> {
        Ok(self.template_base_dir()?.join(&self.templates.module))
    }

    pub fn scaffold_options(&self) -> ScaffoldOptions {
        ScaffoldOptions {
            placeholder: self.scaffold.placeholder.clone(),
            excluded_files: self.scaffold.excluded_files.clone(),
        }
    }

    pub fn event_sources(&self) -> EventSources {
        EventSources {
            modules_dir: self.scaffold.modules_dir.clone(),
            dependency_dir: self.events.dependency_dir.clone(),
            core_package: self.events.core_package.clone(),
            package_prefix: self.events.package_prefix.clone(),
        }
    }
}
