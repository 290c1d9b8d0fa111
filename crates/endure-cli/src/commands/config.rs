//! `endurance config`: inspect the active configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.data(&serialised)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "templates.base_dir" => config.template_base_dir()?.display().to_string(),
        "templates.project" => config.templates.project.display().to_string(),
        "templates.module" => config.templates.module.display().to_string(),
        "scaffold.placeholder" => config.scaffold.placeholder.clone(),
        "scaffold.modules_dir" => config.scaffold.modules_dir.clone(),
        "scaffold.excluded_files" => config.scaffold.excluded_files.join(", "),
        "events.source_extension" => config.events.source_extension.clone(),
        "events.pattern" => config.events.pattern.clone(),
        "events.dependency_dir" => config.events.dependency_dir.clone(),
        "events.core_package" => config.events.core_package.clone(),
        "events.package_prefix" => config.events.package_prefix.clone(),
        "events.label_inference" => config.events.label_inference.to_string(),
        "output.no_color" => config.output.no_color.to_string(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    };
    Ok(value)
}

// ── tests ─────────────────────────────────────────────────────────────────────
