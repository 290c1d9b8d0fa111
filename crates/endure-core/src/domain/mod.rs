//! Core domain layer for Endurance scaffolding.
//!
//! Pure value objects with no I/O: the placeholder substitution applied to
//! template names and contents, the records produced by the event scanner,
//! and the description of which roots a scan visits. Walking directories and
//! touching files is left to the application services via ports.

pub mod error;
pub mod event;
pub mod report;
pub mod substitution;

pub use error::DomainError;
pub use event::{EventRecord, EventSources, LabelInference, ScanRoot};
pub use report::ScaffoldReport;
pub use substitution::Substitution;
