//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use cases: "copy a template", "scaffold a module" and
//! "list emitted events".

pub mod event_scan_service;
pub mod scaffold_service;

pub use event_scan_service::EventScanService;
pub use scaffold_service::{ScaffoldOptions, ScaffoldService};
