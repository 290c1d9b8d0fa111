//! `endurance list-events`: print every emitted event in the project.

use std::path::Path;

use tracing::info;

use endure_adapters::{LocalFilesystem, RegexEventMatcher};
use endure_core::prelude::*;

use crate::{
    cli::{EventsFormat, ListEventsArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Scan the current project and print the records.
pub fn execute(args: ListEventsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    let records = collect(&config, &cwd)?;
    info!(count = records.len(), "Event scan finished");

    for line in render(&records, args.format)? {
        output.data(&line)?;
    }
    Ok(())
}

/// Build the scanner from config and run it against `project_root`.
fn collect(config: &AppConfig, project_root: &Path) -> EndureResult<Vec<EventRecord>> {
    let matcher = RegexEventMatcher::new(&config.events.pattern)?;
    let service = EventScanService::new(Box::new(LocalFilesystem::new()), Box::new(matcher))
        .with_extension(config.events.source_extension.as_str())?
        .with_label_inference(config.events.label_inference);

    let roots = service.plan_roots(project_root, &config.event_sources())?;
    service.scan(&roots)
}

fn render(records: &[EventRecord], format: EventsFormat) -> CliResult<Vec<String>> {
    match format {
        EventsFormat::Json => Ok(vec![serde_json::to_string_pretty(records)?]),
        EventsFormat::Text if records.is_empty() => Ok(vec!["No events found.".into()]),
        EventsFormat::Text => Ok(records.iter().map(ToString::to_string).collect()),
    }
}
