//! Endure Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Endurance
//! module scaffolder and event scanner, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          endure-cli (endurance)         │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, EventScanService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, EventMatcher)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     endure-adapters (Infrastructure)    │
//! │ (LocalFilesystem, RegexEventMatcher...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Substitution, EventRecord, ScanRoot)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use endure_core::prelude::*;
//!
//! # fn demo(fs: Box<dyn Filesystem>) -> EndureResult<()> {
//! let service = ScaffoldService::new(fs);
//! let options = ScaffoldOptions::default();
//! service.scaffold_module(
//!     "node_modules/endurance-template-module".as_ref(),
//!     "modules/billing".as_ref(),
//!     "billing",
//!     &options,
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EventScanService, ScaffoldOptions, ScaffoldService,
        ports::{DirEntry, EntryKind, EventMatcher, Filesystem},
    };
    pub use crate::domain::{
        EventRecord, EventSources, LabelInference, ScaffoldReport, ScanRoot, Substitution,
    };
    pub use crate::error::{EndureError, EndureResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
