//! `endurance new-module <name>`: scaffold `modules/<name>`.

use std::path::PathBuf;

use endure_adapters::LocalFilesystem;
use endure_core::prelude::*;

use crate::{
    cli::NewModuleArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Scaffold a module from the module template.
///
/// The name is used verbatim for both the directory and the substitution.
pub fn execute(args: NewModuleArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let template = config.module_template()?;
    let dest = module_destination(&config, &args.module_name)?;

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let report = service.scaffold_module(
        &template,
        &dest,
        &args.module_name,
        &config.scaffold_options(),
    )?;

    output.success(&format!(
        "Module \"{}\" created successfully in {}",
        args.module_name,
        report.root().display()
    ))?;

    Ok(())
}

fn module_destination(config: &AppConfig, module_name: &str) -> CliResult<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(&config.scaffold.modules_dir).join(module_name))
}
