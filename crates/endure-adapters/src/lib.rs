//! Infrastructure adapters for Endurance.
//!
//! This crate implements the ports defined in `endure-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod matcher;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use matcher::RegexEventMatcher;
