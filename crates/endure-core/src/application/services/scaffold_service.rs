//! Scaffold Service - copies template trees into a project.
//!
//! Two use cases share one depth-first walk over the `Filesystem` port:
//! 1. `copy_tree`: bootstrap a project by copying a template verbatim
//! 2. `scaffold_module`: copy a module template, substituting the module
//!    name into every path segment and file body
//!
//! Neither checks for existing output. Files at the same destination path are
//! overwritten and a failure part-way leaves whatever was already written.

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{EntryKind, Filesystem},
    domain::{ScaffoldReport, Substitution},
    error::EndureResult,
};

/// Settings for module scaffolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Token replaced by the module name.
    pub placeholder: String,
    /// Template file names that are never copied (compared before substitution).
    pub excluded_files: Vec<String>,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            placeholder: Substitution::DEFAULT_TOKEN.to_string(),
            excluded_files: vec!["package.json".to_string()],
        }
    }
}

impl ScaffoldOptions {
    fn is_excluded(&self, template_name: &str) -> bool {
        self.excluded_files.iter().any(|f| f == template_name)
    }
}

/// Template copying and module scaffolding.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Recursively copy every file and directory of `src` into `dest`.
    ///
    /// `dest` is created if needed. Nothing is renamed, substituted or
    /// excluded.
    #[instrument(skip_all, fields(src = %src.display(), dest = %dest.display()))]
    pub fn copy_tree(&self, src: &Path, dest: &Path) -> EndureResult<ScaffoldReport> {
        let mut report = ScaffoldReport::new(dest);
        self.copy_dir(src, dest, &mut report)?;

        info!(
            files = report.file_count(),
            directories = report.directory_count(),
            "Template copied"
        );
        Ok(report)
    }

    /// Materialise a module named `module_name` from `template_dir` at `dest_root`.
    #[instrument(
        skip_all,
        fields(
            module = %module_name,
            template = %template_dir.display(),
            dest = %dest_root.display()
        )
    )]
    pub fn scaffold_module(
        &self,
        template_dir: &Path,
        dest_root: &Path,
        module_name: &str,
        options: &ScaffoldOptions,
    ) -> EndureResult<ScaffoldReport> {
        let substitution = Substitution::new(options.placeholder.as_str(), module_name)?;

        self.filesystem.create_dir_all(dest_root)?;

        let mut report = ScaffoldReport::new(dest_root);
        self.scaffold_dir(template_dir, dest_root, &substitution, options, &mut report)?;

        info!(
            files = report.file_count(),
            directories = report.directory_count(),
            skipped = report.skipped.len(),
            "Module scaffolded"
        );
        Ok(report)
    }

    /// Replace the placeholder throughout the file at `path`, in place.
    ///
    /// Returns `false` when the file was left alone: either the token does not
    /// occur, or the file is not UTF-8 text and is kept byte-for-byte.
    pub fn render_file(&self, path: &Path, substitution: &Substitution) -> EndureResult<bool> {
        let bytes = self.filesystem.read(path)?;

        let Ok(text) = std::str::from_utf8(&bytes) else {
            warn!(path = %path.display(), "Not UTF-8 text, placeholder left unrendered");
            return Ok(false);
        };

        if !substitution.occurs_in(text) {
            return Ok(false);
        }

        let rendered = substitution.render(text);
        self.filesystem.write(path, rendered.as_bytes())?;
        Ok(true)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn copy_dir(&self, src: &Path, dest: &Path, report: &mut ScaffoldReport) -> EndureResult<()> {
        let entries = self.filesystem.read_dir(src)?;
        self.filesystem.create_dir_all(dest)?;

        for entry in entries {
            let dest_path = dest.join(&entry.name);
            match entry.kind {
                EntryKind::Directory => {
                    self.copy_dir(&entry.path, &dest_path, report)?;
                    report.directories.push(dest_path);
                }
                EntryKind::File => {
                    self.filesystem.copy_file(&entry.path, &dest_path)?;
                    report.files.push(dest_path);
                }
                EntryKind::Other => {
                    debug!(path = %entry.path.display(), "Skipping special file");
                }
            }
        }

        Ok(())
    }

    fn scaffold_dir(
        &self,
        src: &Path,
        dest: &Path,
        substitution: &Substitution,
        options: &ScaffoldOptions,
        report: &mut ScaffoldReport,
    ) -> EndureResult<()> {
        for entry in self.filesystem.read_dir(src)? {
            let dest_path = dest.join(substitution.render_name(&entry.name));

            match entry.kind {
                EntryKind::Directory => {
                    self.filesystem.create_dir_all(&dest_path)?;
                    report.directories.push(dest_path.clone());
                    self.scaffold_dir(&entry.path, &dest_path, substitution, options, report)?;
                }
                EntryKind::File if options.is_excluded(&entry.name) => {
                    debug!(path = %entry.path.display(), "Skipping excluded template file");
                    report.skipped.push(entry.path);
                }
                EntryKind::File => {
                    self.filesystem.copy_file(&entry.path, &dest_path)?;
                    self.render_file(&dest_path, substitution)?;
                    report.files.push(dest_path);
                }
                EntryKind::Other => {
                    debug!(path = %entry.path.display(), "Skipping special file");
                }
            }
        }

        Ok(())
    }
}
