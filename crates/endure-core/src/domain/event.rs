//! Event discovery value objects.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// One event-emission call site found by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    /// The matched call text, e.g. `emitter.emit(eventTypes.USER_CREATED`.
    pub event: String,
    /// Path of the file containing the call.
    pub file: PathBuf,
    /// Module the call is attributed to, if one could be resolved.
    pub module: Option<String>,
}

impl EventRecord {
    /// Label shown for records found outside any module directory.
    pub const UNKNOWN_MODULE: &'static str = "Unknown module";

    pub fn new(event: impl Into<String>, file: impl Into<PathBuf>, module: Option<String>) -> Self {
        Self {
            event: event.into(),
            file: file.into(),
            module,
        }
    }

    pub fn module_label(&self) -> &str {
        self.module.as_deref().unwrap_or(Self::UNKNOWN_MODULE)
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event: {} | File: {} | Module: {}",
            self.event,
            self.file.display(),
            self.module_label()
        )
    }
}

/// A directory tree to scan, with an optional pinned module label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRoot {
    pub path: PathBuf,
    /// When set, every record under this root carries this label.
    pub label: Option<String>,
    /// A missing required root aborts the scan; a missing optional one is skipped.
    pub required: bool,
}

impl ScanRoot {
    pub fn required(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            label: None,
            required: true,
        }
    }

    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            label: None,
            required: false,
        }
    }

    /// Pin the module label for everything beneath this root.
    pub fn pinned(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// How an unpinned root derives module labels from directory names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelInference {
    /// Every directory relabels its subtree, so a record carries the name of
    /// the closest directory below the root that contains it.
    #[default]
    Nearest,
    /// The first directory level below the root fixes the label for its
    /// whole subtree.
    TopLevel,
}

impl LabelInference {
    /// Label to use inside `dir_name`, given the label in effect for its parent.
    ///
    /// `pinned` labels are never replaced.
    pub fn descend(self, current: Option<&str>, pinned: bool, dir_name: &str) -> Option<String> {
        if pinned {
            return current.map(str::to_owned);
        }
        match self {
            Self::Nearest => Some(dir_name.to_owned()),
            Self::TopLevel => Some(current.unwrap_or(dir_name).to_owned()),
        }
    }
}

impl fmt::Display for LabelInference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "nearest"),
            Self::TopLevel => write!(f, "top-level"),
        }
    }
}

impl FromStr for LabelInference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "top-level" | "toplevel" | "top_level" => Ok(Self::TopLevel),
            other => Err(DomainError::InvalidLabelInference(other.to_string())),
        }
    }
}

/// Where a project keeps the sources that `plan_roots` turns into scan roots.
///
/// All names are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSources {
    /// Local modules; required, labels inferred from directory names.
    pub modules_dir: String,
    /// Installed dependencies.
    pub dependency_dir: String,
    /// Dependency scanned under its own name when present.
    pub core_package: String,
    /// Dependencies whose directory name starts with this are scanned too.
    pub package_prefix: String,
}

impl Default for EventSources {
    fn default() -> Self {
        Self {
            modules_dir: "modules".into(),
            dependency_dir: "node_modules".into(),
            core_package: "endurance-core".into(),
            package_prefix: "edrm-".into(),
        }
    }
}
