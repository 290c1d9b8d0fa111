//! `endurance new-project`: copy the project template into the cwd.

use std::path::Path;

use tracing::error;

use endure_adapters::LocalFilesystem;
use endure_core::prelude::*;

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

/// Bootstrap a project in the current directory.
///
/// Copy failures are reported but do not change the exit status.
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    let template = config.project_template()?;

    match copy_project(&template, &cwd) {
        Ok(_) => output.success("Project created successfully")?,
        Err(e) => {
            error!(template = %template.display(), "Error creating project: {e}");
            output.error(&format!("Error creating project: {e}"))?;
        }
    }

    Ok(())
}

fn copy_project(template: &Path, dest: &Path) -> EndureResult<ScaffoldReport> {
    ScaffoldService::new(Box::new(LocalFilesystem::new())).copy_tree(template, dest)
}
