//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `endure-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory listing, copying, reading and writing files
//!   - `EventMatcher`: Finding event-emission calls in source text

pub mod output;

pub use output::{DirEntry, EntryKind, EventMatcher, Filesystem};

#[cfg(test)]
pub use output::{MockEventMatcher, MockFilesystem};
