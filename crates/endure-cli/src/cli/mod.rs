//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "endurance",
    bin_name = "endurance",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Endurance CLI to bootstrap new projects",
    long_about = "Creates Endurance projects and modules from templates, and \
                  lists the events emitted across a project's modules.",
    after_help = "EXAMPLES:\n\
        \x20 endurance new-project\n\
        \x20 endurance new-module billing\n\
        \x20 endurance list-events",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Copy the project template into the current directory.
    #[command(name = "new-project", about = "Create a new project")]
    NewProject,

    /// Scaffold `modules/<NAME>` from the module template.
    #[command(
        name = "new-module",
        about = "Create a new module",
        after_help = "EXAMPLES:\n\
            \x20 endurance new-module billing   # creates ./modules/billing"
    )]
    NewModule(NewModuleArgs),

    /// Scan modules and Endurance packages for emitted events.
    #[command(
        name = "list-events",
        about = "List all available events across modules and specific node_modules",
        after_help = "EXAMPLES:\n\
            \x20 endurance list-events\n\
            \x20 endurance list-events --format json"
    )]
    ListEvents(ListEventsArgs),

    /// Write a configuration file with the default settings.
    #[command(about = "Initialise configuration")]
    Init(InitArgs),

    /// Inspect the active configuration.
    #[command(about = "Configuration management", subcommand)]
    Config(ConfigCommands),
}

// ── new-module ────────────────────────────────────────────────────────────────

/// Arguments for `endurance new-module`.
#[derive(Debug, Args)]
pub struct NewModuleArgs {
    /// Module name. Used verbatim as directory name and substitution value.
    #[arg(value_name = "MODULE_NAME", help = "Name of the module to create")]
    pub module_name: String,
}

// ── list-events ───────────────────────────────────────────────────────────────

/// Arguments for `endurance list-events`.
#[derive(Debug, Args)]
pub struct ListEventsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    pub format: EventsFormat,
}

/// Output format for the `list-events` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventsFormat {
    /// One `Event: … | File: … | Module: …` line per match.
    Text,
    /// JSON array of records.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `endurance init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `endurance config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scaffold.placeholder`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
