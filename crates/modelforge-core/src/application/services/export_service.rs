//! Export Service - writes compiled output through the [`Filesystem`] port.
//!
//! Two use cases:
//! 1. Write a whole tree under an output directory (`modelforge compile`)
//! 2. Write one artifact to a chosen file (`modelforge export`)

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{FileTree, FsEntry, ProjectStructure},
    error::ForgeResult,
};

/// What a successful tree write produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub root: PathBuf,
    pub files: usize,
    pub directories: usize,
    pub bytes: usize,
}

/// Something created during a write, undone on rollback.
#[derive(Debug)]
enum Created {
    Directory(PathBuf),
    File(PathBuf),
}

pub struct ExportService {
    filesystem: Box<dyn Filesystem>,
}

impl ExportService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Lower a tree for writing under `root` without touching the filesystem.
    pub fn plan(&self, tree: &FileTree, root: impl AsRef<Path>) -> ForgeResult<ProjectStructure> {
        Ok(tree.to_structure(root.as_ref())?)
    }

    /// Write every file of `tree` under `root`.
    ///
    /// Fails with [`ApplicationError::OutputExists`] if `root` exists and
    /// `overwrite` is false. On a write failure everything this call created
    /// is removed again; files that already existed and were overwritten are
    /// left as written.
    #[instrument(skip_all, fields(root = %root.as_ref().display(), overwrite = overwrite))]
    pub fn write_tree(
        &self,
        tree: &FileTree,
        root: impl AsRef<Path>,
        overwrite: bool,
    ) -> ForgeResult<WriteSummary> {
        let structure = self.plan(tree, root)?;

        if self.filesystem.exists(structure.root()) && !overwrite {
            return Err(ApplicationError::OutputExists {
                path: structure.root().to_path_buf(),
            }
            .into());
        }

        let mut journal = Vec::new();
        match self.write_all(&structure, &mut journal) {
            Ok(summary) => {
                info!(files = summary.files, bytes = summary.bytes, "Output written");
                Ok(summary)
            }
            Err(e) => {
                warn!(error = %e, "Write failed, attempting rollback");
                self.rollback(journal);
                Err(e)
            }
        }
    }

    /// Write the content of one artifact to `dest`.
    ///
    /// Returns the number of bytes written.
    #[instrument(skip(self, tree, dest), fields(dest = %dest.as_ref().display()))]
    pub fn export_artifact(
        &self,
        tree: &FileTree,
        artifact_path: &str,
        dest: impl AsRef<Path>,
        overwrite: bool,
    ) -> ForgeResult<usize> {
        let dest = dest.as_ref();
        let content = tree.file_content(artifact_path)?;

        if self.filesystem.exists(dest) && !overwrite {
            return Err(ApplicationError::OutputExists {
                path: dest.to_path_buf(),
            }
            .into());
        }

        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(dest, content)?;

        info!(bytes = content.len(), "Artifact exported");
        Ok(content.len())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_all(
        &self,
        structure: &ProjectStructure,
        journal: &mut Vec<Created>,
    ) -> ForgeResult<WriteSummary> {
        let root = structure.root();
        self.ensure_dir(root, journal)?;

        let mut summary = WriteSummary {
            root: root.to_path_buf(),
            files: 0,
            directories: 0,
            bytes: 0,
        };

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.ensure_dir(&root.join(&dir.path), journal)?;
                    summary.directories += 1;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);
                    if let Some(parent) = path.parent() {
                        self.ensure_dir(parent, journal)?;
                    }
                    let existed = self.filesystem.exists(&path);
                    self.filesystem.write_file(&path, &file.content)?;
                    if !existed {
                        journal.push(Created::File(path));
                    }
                    summary.files += 1;
                    summary.bytes += file.size();
                }
            }
        }

        Ok(summary)
    }

    /// Creates `path` and journals the outermost ancestor that was missing,
    /// so rollback removes every directory this call brought into being.
    fn ensure_dir(&self, path: &Path, journal: &mut Vec<Created>) -> ForgeResult<()> {
        let outermost_missing = path
            .ancestors()
            .take_while(|a| !a.as_os_str().is_empty() && !self.filesystem.exists(a))
            .last();
        let Some(outermost_missing) = outermost_missing else {
            return Ok(());
        };
        self.filesystem.create_dir_all(path)?;
        journal.push(Created::Directory(outermost_missing.to_path_buf()));
        Ok(())
    }

    /// Best-effort rollback, newest first.
    fn rollback(&self, journal: Vec<Created>) {
        let mut failures = 0usize;
        for created in journal.into_iter().rev() {
            let (path, result) = match &created {
                Created::File(path) => (path, self.filesystem.remove_file(path)),
                Created::Directory(path) => (path, self.filesystem.remove_dir_all(path)),
            };
            if let Err(e) = result {
                failures += 1;
                warn!(error = %e, path = %path.display(), "Rollback step failed");
            }
        }

        if failures == 0 {
            info!("Rollback successful");
        }
    }
}
