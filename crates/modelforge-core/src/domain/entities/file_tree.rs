//! The compiler's output: an ordered forest of files and folders.
//!
//! A [`FileTreeItem`] is either a file (content + language label, no
//! children) or a folder (ordered children, no content). Encoding it as an
//! enum makes a node with both shapes unrepresentable.
//!
//! ```text
//! documentation/          Folder
//! ├── vision.md           File { language: "markdown" }
//! └── ...
//! README.md               File
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{entities::project_structure::ProjectStructure, error::DomainError};

/// One node of the generated artifact tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileTreeItem {
    File {
        name: String,
        content: String,
        /// Used only for syntax highlighting by readers.
        language: String,
    },
    Folder {
        name: String,
        children: Vec<FileTreeItem>,
    },
}

impl FileTreeItem {
    pub fn file(
        name: impl Into<String>,
        content: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self::File {
            name: name.into(),
            content: content.into(),
            language: language.into(),
        }
    }

    pub fn folder(name: impl Into<String>, children: Vec<FileTreeItem>) -> Self {
        Self::Folder {
            name: name.into(),
            children,
        }
    }

    pub fn empty_folder(name: impl Into<String>) -> Self {
        Self::folder(name, Vec::new())
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Folder { name, .. } => name,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    /// File content, `None` for folders.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::File { content, .. } => Some(content),
            Self::Folder { .. } => None,
        }
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            Self::File { language, .. } => Some(language),
            Self::Folder { .. } => None,
        }
    }

    /// Children of a folder; empty for files.
    pub fn children(&self) -> &[FileTreeItem] {
        match self {
            Self::Folder { children, .. } => children,
            Self::File { .. } => &[],
        }
    }

    /// Child lookup by exact name.
    pub fn child(&self, name: &str) -> Option<&FileTreeItem> {
        self.children().iter().find(|c| c.name() == name)
    }

    /// Number of files in this subtree (a file counts itself).
    pub fn file_count(&self) -> usize {
        match self {
            Self::File { .. } => 1,
            Self::Folder { children, .. } => children.iter().map(Self::file_count).sum(),
        }
    }
}

/// A complete generated tree (the top-level forest).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileTree {
    items: Vec<FileTreeItem>,
}

impl FileTree {
    pub fn new(items: Vec<FileTreeItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[FileTreeItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<FileTreeItem> {
        self.items
    }

    /// Resolve a `/`-separated path such as `client/app/page.tsx`.
    pub fn find(&self, path: &str) -> Option<&FileTreeItem> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let first = segments.next()?;
        let mut current = self.items.iter().find(|i| i.name() == first)?;
        for segment in segments {
            current = current.child(segment)?;
        }
        Some(current)
    }

    pub fn file_count(&self) -> usize {
        self.items.iter().map(FileTreeItem::file_count).sum()
    }

    /// Content of the file at `path`.
    pub fn file_content(&self, path: &str) -> Result<&str, DomainError> {
        match self.find(path) {
            Some(FileTreeItem::File { content, .. }) => Ok(content),
            Some(FileTreeItem::Folder { .. }) => Err(DomainError::NotAFile {
                path: path.to_string(),
            }),
            None => Err(DomainError::ArtifactNotFound {
                path: path.to_string(),
            }),
        }
    }

    /// Every file with its full `/`-joined path, depth first in tree order.
    pub fn files(&self) -> Vec<(String, &FileTreeItem)> {
        let mut out = Vec::new();
        for item in &self.items {
            collect_files("", item, &mut out);
        }
        out
    }

    /// Every folder path, parents before children.
    pub fn folders(&self) -> Vec<String> {
        let mut out = Vec::new();
        for item in &self.items {
            collect_folders("", item, &mut out);
        }
        out
    }

    /// Lower the tree into a flat [`ProjectStructure`] rooted at `root`.
    ///
    /// Fails if a name would escape the root or two nodes share a path.
    pub fn to_structure(
        &self,
        root: impl Into<std::path::PathBuf>,
    ) -> Result<ProjectStructure, DomainError> {
        let mut structure = ProjectStructure::new(root);

        for dir in self.folders() {
            check_segments(&dir)?;
            structure.add_directory(dir);
        }
        for (path, item) in self.files() {
            check_segments(&path)?;
            structure.add_file(path, item.content().unwrap_or_default().to_string());
        }

        structure.validate()?;
        Ok(structure)
    }
}

impl IntoIterator for FileTree {
    type Item = FileTreeItem;
    type IntoIter = std::vec::IntoIter<FileTreeItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

fn collect_files<'a>(
    prefix: &str,
    item: &'a FileTreeItem,
    out: &mut Vec<(String, &'a FileTreeItem)>,
) {
    let path = join(prefix, item.name());
    match item {
        FileTreeItem::File { .. } => out.push((path, item)),
        FileTreeItem::Folder { children, .. } => {
            for child in children {
                collect_files(&path, child, out);
            }
        }
    }
}

fn collect_folders(prefix: &str, item: &FileTreeItem, out: &mut Vec<String>) {
    if let FileTreeItem::Folder { name, children } = item {
        let path = join(prefix, name);
        out.push(path.clone());
        for child in children {
            collect_folders(&path, child, out);
        }
    }
}

/// Reject names that are empty or would walk out of the output root.
fn check_segments(path: &str) -> Result<(), DomainError> {
    for segment in path.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
            return Err(DomainError::InvalidArtifactPath {
                path: path.to_string(),
            });
        }
    }
    Ok(())
}
