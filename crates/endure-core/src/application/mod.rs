//! Application layer for Endurance.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, EventScanService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Services drive the directory walks; the ports do the actual I/O and
//! pattern matching.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{EventScanService, ScaffoldOptions, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{DirEntry, EntryKind, EventMatcher, Filesystem};

pub use error::ApplicationError;
