//! One module per subcommand.  Each exposes an `execute` function that
//! `main::run` dispatches to.

pub mod config;
pub mod init;
pub mod list_events;
pub mod new_module;
pub mod new_project;
