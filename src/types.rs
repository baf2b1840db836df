/*!
 * Core types and data structures for projdoc
 */

use std::path::{Component, Path, PathBuf};

/// Kind of filesystem entry, as seen by the exclusion filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory containing other entries
    Directory,
    /// Regular file
    File,
}

/// Represents a directory in the snapshot
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    /// Directory name
    pub name: String,
    /// Relative path from scan root (empty for the root itself)
    pub path: PathBuf,
    /// Non-excluded children: files first, then subdirectories
    pub contents: Vec<Node>,
}

impl DirectoryNode {
    /// Files directly inside this directory
    pub fn files(&self) -> impl Iterator<Item = &FileNode> {
        self.contents.iter().filter_map(|node| match node {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        })
    }

    /// Subdirectories directly inside this directory
    pub fn directories(&self) -> impl Iterator<Item = &DirectoryNode> {
        self.contents.iter().filter_map(|node| match node {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        })
    }
}

/// Represents a file in the snapshot; content is read on demand
#[derive(Debug, Clone)]
pub struct FileNode {
    /// File name
    pub name: String,
    /// Lowercased extension including the dot, empty when there is none
    pub extension: String,
    /// Relative path from scan root
    pub path: PathBuf,
    /// Absolute path used for reading
    pub abs_path: PathBuf,
}

impl FileNode {
    /// Relative path with `/` separators regardless of platform
    pub fn display_path(&self) -> String {
        slash_path(&self.path)
    }
}

/// A generic filesystem node
#[derive(Debug, Clone)]
pub enum Node {
    /// Directory node
    Directory(DirectoryNode),
    /// File node
    File(FileNode),
}

impl Node {
    /// Name shown for this node
    pub fn name(&self) -> &str {
        match self {
            Node::Directory(dir) => &dir.name,
            Node::File(file) => &file.name,
        }
    }
}

/// Extension of a file name: the part from the last `.` on, lowercased.
///
/// Dot-files count as all extension, so `.gitignore` yields `.gitignore`.
pub fn extension_of(name: &str) -> String {
    name.rfind('.')
        .map(|idx| name[idx..].to_lowercase())
        .unwrap_or_default()
}

/// Join the normal components of `path` with `/`
pub fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
