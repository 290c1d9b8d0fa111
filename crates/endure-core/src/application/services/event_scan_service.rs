//! Event Scan Service - finds event-emission calls across a project.
//!
//! A scan visits an ordered list of [`ScanRoot`]s. Each root is walked depth
//! first in file-name order; every source file is handed to the
//! [`EventMatcher`] and each match becomes an [`EventRecord`]. Results keep
//! traversal order and are neither sorted nor deduplicated.

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{DirEntry, EntryKind, EventMatcher, Filesystem},
    domain::{DomainError, EventRecord, EventSources, LabelInference, ScanRoot},
    error::EndureResult,
};

/// Event discovery over the `Filesystem` port.
pub struct EventScanService {
    filesystem: Box<dyn Filesystem>,
    matcher: Box<dyn EventMatcher>,
    extension: String,
    labels: LabelInference,
}

impl EventScanService {
    /// Extension of files that are searched unless configured otherwise.
    pub const DEFAULT_EXTENSION: &'static str = ".js";

    pub fn new(filesystem: Box<dyn Filesystem>, matcher: Box<dyn EventMatcher>) -> Self {
        Self {
            filesystem,
            matcher,
            extension: Self::DEFAULT_EXTENSION.to_string(),
            labels: LabelInference::default(),
        }
    }

    /// Only search files whose name ends with `extension`.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Result<Self, DomainError> {
        let extension = extension.into();
        if extension.is_empty() {
            return Err(DomainError::EmptyExtension);
        }
        self.extension = extension;
        Ok(self)
    }

    pub fn with_label_inference(mut self, labels: LabelInference) -> Self {
        self.labels = labels;
        self
    }

    /// Roots to scan for a project checked out at `project_root`.
    ///
    /// In order: the local modules directory (required, labels inferred),
    /// the core package (optional, pinned to its name), then every dependency
    /// directory starting with the package prefix (optional, each pinned to
    /// its own name). A missing dependency directory contributes nothing.
    pub fn plan_roots(
        &self,
        project_root: &Path,
        sources: &EventSources,
    ) -> EndureResult<Vec<ScanRoot>> {
        let dependencies = project_root.join(&sources.dependency_dir);

        let mut roots = vec![
            ScanRoot::required(project_root.join(&sources.modules_dir)),
            ScanRoot::optional(dependencies.join(&sources.core_package))
                .pinned(sources.core_package.as_str()),
        ];

        if self.filesystem.exists(&dependencies) {
            for entry in self.filesystem.read_dir(&dependencies)? {
                if entry.name.starts_with(&sources.package_prefix)
                    && entry.name != sources.core_package
                    && self.resolves_to_dir(&entry)
                {
                    roots.push(ScanRoot::optional(entry.path).pinned(entry.name));
                }
            }
        } else {
            debug!(path = %dependencies.display(), "No dependency directory");
        }

        Ok(roots)
    }

    /// Linked packages (`npm link`, workspaces, pnpm) show up as symlinks.
    fn resolves_to_dir(&self, entry: &DirEntry) -> bool {
        match entry.kind {
            EntryKind::Directory => true,
            EntryKind::Other => self.filesystem.is_dir(&entry.path),
            EntryKind::File => false,
        }
    }

    /// Scan every root in order and collect the matches.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable directory or file, including a missing
    /// required root. Missing optional roots are skipped.
    #[instrument(skip_all, fields(roots = roots.len()))]
    pub fn scan(&self, roots: &[ScanRoot]) -> EndureResult<Vec<EventRecord>> {
        let mut results = Vec::new();
        for root in roots {
            self.scan_root(root, &mut results)?;
        }

        info!(events = results.len(), "Scan completed");
        Ok(results)
    }

    /// Scan a single root, appending to `results`.
    pub fn scan_root(&self, root: &ScanRoot, results: &mut Vec<EventRecord>) -> EndureResult<()> {
        if !root.required && !self.filesystem.exists(root.path()) {
            debug!(path = %root.path.display(), "Optional root missing, skipped");
            return Ok(());
        }

        debug!(path = %root.path.display(), label = ?root.label, "Scanning root");
        self.scan_dir(
            root.path(),
            root.label.as_deref(),
            root.label.is_some(),
            results,
        )
    }

    fn scan_dir(
        &self,
        dir: &Path,
        label: Option<&str>,
        pinned: bool,
        results: &mut Vec<EventRecord>,
    ) -> EndureResult<()> {
        for entry in self.filesystem.read_dir(dir)? {
            match entry.kind {
                EntryKind::Directory => {
                    let child = self.labels.descend(label, pinned, &entry.name);
                    self.scan_dir(&entry.path, child.as_deref(), pinned, results)?;
                }
                EntryKind::File if entry.name.ends_with(&self.extension) => {
                    let bytes = self.filesystem.read(&entry.path)?;
                    let content = String::from_utf8_lossy(&bytes);
                    for event in self.matcher.find_events(&content) {
                        results.push(EventRecord::new(
                            event,
                            entry.path.clone(),
                            label.map(str::to_owned),
                        ));
                    }
                }
                EntryKind::File | EntryKind::Other => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockEventMatcher, MockFilesystem},
    };

    fn dir(parent: &str, name: &str) -> DirEntry {
        DirEntry::new(name, PathBuf::from(parent).join(name), EntryKind::Directory)
    }

    fn file(parent: &str, name: &str) -> DirEntry {
        DirEntry::new(name, PathBuf::from(parent).join(name), EntryKind::File)
    }

    /// modules/billing/index.js, modules/billing/api/routes.js, modules/README.md
    fn project_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_dir().returning(|p| {
            let entries = match p.to_str().unwrap() {
                "/p/modules" => vec![dir("/p/modules", "billing"), file("/p/modules", "README.md")],
                "/p/modules/billing" => vec![
                    dir("/p/modules/billing", "api"),
                    file("/p/modules/billing", "index.js"),
                ],
                "/p/modules/billing/api" => vec![file("/p/modules/billing/api", "routes.js")],
                _ => vec![],
            };
            Ok(entries)
        });
        fs.expect_read()
            .returning(|_| Ok(b"emitter.emit(eventTypes.X)".to_vec()));
        fs
    }

    fn one_event_matcher() -> MockEventMatcher {
        let mut matcher = MockEventMatcher::new();
        matcher
            .expect_find_events()
            .returning(|_| vec!["emitter.emit(eventTypes.X".to_string()]);
        matcher
    }

    #[test]
    fn nearest_label_follows_innermost_directory() {
        let service = EventScanService::new(Box::new(project_fs()), Box::new(one_event_matcher()));
        let records = service.scan(&[ScanRoot::required("/p/modules")]).unwrap();

        let labels: Vec<_> = records.iter().map(|r| r.module_label()).collect();
        assert_eq!(labels, vec!["api", "billing"]);
        assert_eq!(records[0].file, PathBuf::from("/p/modules/billing/api/routes.js"));
    }

    #[test]
    fn top_level_label_sticks_to_module() {
        let service = EventScanService::new(Box::new(project_fs()), Box::new(one_event_matcher()))
            .with_label_inference(LabelInference::TopLevel);
        let records = service.scan(&[ScanRoot::required("/p/modules")]).unwrap();

        assert!(records.iter().all(|r| r.module_label() == "billing"));
    }

    #[test]
    fn pinned_root_labels_everything() {
        let service = EventScanService::new(Box::new(project_fs()), Box::new(one_event_matcher()));
        let records = service
            .scan(&[ScanRoot::optional("/p/modules").pinned("endurance-core")])
            .unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.module_label() == "endurance-core"));
    }

    #[test]
    fn optional_missing_root_is_skipped() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_read_dir().never();

        let service = EventScanService::new(Box::new(fs), Box::new(MockEventMatcher::new()));
        let records = service
            .scan(&[ScanRoot::optional("/p/node_modules/endurance-core")])
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn required_missing_root_fails_fast() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_read_dir().returning(|p| {
            Err(ApplicationError::NotFound {
                path: p.to_path_buf(),
            }
            .into())
        });

        let service = EventScanService::new(Box::new(fs), Box::new(MockEventMatcher::new()));
        let err = service.scan(&[ScanRoot::required("/p/modules")]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn plan_roots_orders_modules_core_then_prefixed() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_dir().returning(|_| {
            Ok(vec![
                dir("/p/node_modules", "edrm-auth"),
                dir("/p/node_modules", "endurance-core"),
                file("/p/node_modules", "edrm-notes.txt"),
                dir("/p/node_modules", "express"),
            ])
        });

        let service = EventScanService::new(Box::new(fs), Box::new(MockEventMatcher::new()));
        let roots = service
            .plan_roots(Path::new("/p"), &EventSources::default())
            .unwrap();

        assert_eq!(
            roots,
            vec![
                ScanRoot::required("/p/modules"),
                ScanRoot::optional("/p/node_modules/endurance-core").pinned("endurance-core"),
                ScanRoot::optional("/p/node_modules/edrm-auth").pinned("edrm-auth"),
            ]
        );
    }

    #[test]
    fn plan_roots_follows_linked_packages() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_dir().returning(|_| {
            Ok(vec![
                DirEntry::new(
                    "edrm-broken",
                    "/p/node_modules/edrm-broken",
                    EntryKind::Other,
                ),
                DirEntry::new(
                    "edrm-mailer",
                    "/p/node_modules/edrm-mailer",
                    EntryKind::Other,
                ),
            ])
        });
        fs.expect_is_dir()
            .returning(|p| p == Path::new("/p/node_modules/edrm-mailer"));

        let service = EventScanService::new(Box::new(fs), Box::new(MockEventMatcher::new()));
        let roots = service
            .plan_roots(Path::new("/p"), &EventSources::default())
            .unwrap();

        assert_eq!(
            roots.last(),
            Some(&ScanRoot::optional("/p/node_modules/edrm-mailer").pinned("edrm-mailer"))
        );
        assert_eq!(roots.len(), 3);
    }

    #[test]
    fn plan_roots_without_dependency_dir() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_read_dir().never();

        let service = EventScanService::new(Box::new(fs), Box::new(MockEventMatcher::new()));
        let roots = service
            .plan_roots(Path::new("/p"), &EventSources::default())
            .unwrap();
        assert_eq!(roots.len(), 2);
    }

    #[test]
    fn empty_extension_is_rejected() {
        let service = EventScanService::new(
            Box::new(MockFilesystem::new()),
            Box::new(MockEventMatcher::new()),
        );
        assert!(service.with_extension("").is_err());
    }
}
