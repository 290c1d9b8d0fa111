//! Regex-based event matcher.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use endure_core::{
    application::{ApplicationError, ports::EventMatcher},
    error::EndureResult,
};

/// Matches `emitter.emit(eventTypes.NAME` up to the constant name.
///
/// Arguments after the constant are not part of the match.
pub const DEFAULT_EVENT_PATTERN: &str = r"emitter\.emit\((eventTypes\.[\w_]+)";

/// Event matcher backed by a compiled regular expression.
///
/// The full match is the reported event text; the first capture group, if
/// the pattern has one, is the bare event constant.
#[derive(Debug, Clone)]
pub struct RegexEventMatcher {
    regex: Regex,
}

impl RegexEventMatcher {
    /// Compile a custom pattern.
    pub fn new(pattern: &str) -> EndureResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| ApplicationError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Bare event constants (first capture group), e.g. `eventTypes.USER_CREATED`.
    ///
    /// Falls back to the whole match for patterns without a group.
    pub fn event_names(&self, content: &str) -> Vec<String> {
        self.regex
            .captures_iter(content)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for RegexEventMatcher {
    fn default() -> Self {
        Self {
            regex: default_regex().clone(),
        }
    }
}

impl EventMatcher for RegexEventMatcher {
    fn find_events(&self, content: &str) -> Vec<String> {
        let events: Vec<String> = self
            .regex
            .find_iter(content)
            .map(|m| m.as_str().to_string())
            .collect();
        trace!(count = events.len(), "Matched events");
        events
    }
}

fn default_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(DEFAULT_EVENT_PATTERN).expect("Invalid regex"))
}
