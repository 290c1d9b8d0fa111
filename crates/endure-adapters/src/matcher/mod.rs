//! Event matcher adapters.

mod pattern;

pub use pattern::{DEFAULT_EVENT_PATTERN, RegexEventMatcher};
