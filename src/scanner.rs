/*!
 * Directory scanning: builds the filtered, read-only snapshot of a project
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{ProjDocError, Result};
use crate::filter::ExclusionRules;
use crate::types::{extension_of, DirectoryNode, EntryKind, FileNode, Node};

/// Scanner for directory contents
pub struct Scanner {
    /// Rules deciding which entries are visible
    rules: ExclusionRules,
    /// Absolute path never included (the listing being written)
    skip_path: Option<PathBuf>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(rules: ExclusionRules) -> Self {
        Self {
            rules,
            skip_path: None,
        }
    }

    /// Never include the file at `path`, typically the output file
    pub fn skipping(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip_path = Some(path.into());
        self
    }

    /// Scan `root` and return the filtered directory tree.
    ///
    /// Failing to resolve or list the root is fatal; failures below the root
    /// are logged and the affected subtree is left out.
    pub fn scan(&self, root: &Path) -> Result<DirectoryNode> {
        let unreadable = |source: io::Error| ProjDocError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        };

        let abs_root = fs::canonicalize(root).map_err(unreadable)?;
        let name = abs_root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| abs_root.to_string_lossy().to_string());

        self.scan_directory(&abs_root, Path::new(""), name)
            .map_err(unreadable)
    }

    /// Scan a directory and return its node representation
    fn scan_directory(&self, abs_path: &Path, rel_path: &Path, name: String) -> io::Result<DirectoryNode> {
        let (files, dirs) = self.list_directory(abs_path)?;
        let mut contents = Vec::with_capacity(files.len() + dirs.len());

        for entry in files {
            let file_name = entry.file_name().to_string_lossy().to_string();
            debug!("Including file {}", entry.path().display());
            contents.push(Node::File(FileNode {
                extension: extension_of(&file_name),
                path: rel_path.join(&file_name),
                abs_path: entry.path().to_path_buf(),
                name: file_name,
            }));
        }

        for entry in dirs {
            let dir_name = entry.file_name().to_string_lossy().to_string();
            let new_rel_path = rel_path.join(&dir_name);

            match self.scan_directory(entry.path(), &new_rel_path, dir_name) {
                Ok(dir_node) => contents.push(Node::Directory(dir_node)),
                Err(e) => warn!("Skipping directory {}: {}", entry.path().display(), e),
            }
        }

        Ok(DirectoryNode {
            name,
            path: rel_path.to_path_buf(),
            contents,
        })
    }

    /// List the visible files and subdirectories of one directory, sorted by name
    fn list_directory(&self, abs_path: &Path) -> io::Result<(Vec<DirEntry>, Vec<DirEntry>)> {
        let mut files = Vec::new();
        let mut dirs = Vec::new();

        let walker = WalkDir::new(abs_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // The directory itself could not be opened
                Err(e) if e.depth() == 0 || e.path() == Some(abs_path) => {
                    return Err(io::Error::from(e))
                }
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", abs_path.display(), e);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if self.rules.should_exclude(&name, EntryKind::Directory) {
                    debug!("Excluding directory {}", entry.path().display());
                } else {
                    dirs.push(entry);
                }
            } else if file_type.is_file() || self.is_file_link(&entry) {
                if self.rules.should_exclude(&name, EntryKind::File)
                    || self.skip_path.as_deref() == Some(entry.path())
                {
                    debug!("Excluding file {}", entry.path().display());
                } else {
                    files.push(entry);
                }
            } else {
                debug!("Ignoring non-regular entry {}", entry.path().display());
            }
        }

        Ok((files, dirs))
    }

    /// Symlink whose target is a regular file; directory links are never followed
    fn is_file_link(&self, entry: &DirEntry) -> bool {
        if !entry.path_is_symlink() {
            return false;
        }

        match fs::metadata(entry.path()) {
            Ok(target) => target.is_file(),
            Err(e) => {
                debug!("Ignoring dangling link {}: {}", entry.path().display(), e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::tempdir;

    use super::*;

    fn names(dir: &DirectoryNode) -> Vec<&str> {
        dir.contents.iter().map(Node::name).collect()
    }

    #[test]
    fn test_files_before_directories_sorted_by_name() -> Result<()> {
        let temp_dir = tempdir()?;
        fs::create_dir(temp_dir.path().join("beta"))?;
        fs::create_dir(temp_dir.path().join("alpha"))?;
        File::create(temp_dir.path().join("z.cs"))?;
        File::create(temp_dir.path().join("a.cs"))?;

        let root = Scanner::new(ExclusionRules::default()).scan(temp_dir.path())?;
        assert_eq!(names(&root), vec!["a.cs", "z.cs", "alpha", "beta"]);
        assert_eq!(root.path, PathBuf::new());
        Ok(())
    }

    #[test]
    fn test_excluded_directory_is_not_descended() -> Result<()> {
        let temp_dir = tempdir()?;
        fs::create_dir_all(temp_dir.path().join("node_modules").join("lib"))?;
        File::create(temp_dir.path().join("node_modules").join("lib").join("index.js"))?;
        File::create(temp_dir.path().join("main.js"))?;

        let root = Scanner::new(ExclusionRules::default()).scan(temp_dir.path())?;
        assert_eq!(names(&root), vec!["main.js"]);
        Ok(())
    }

    #[test]
    fn test_relative_paths_and_extensions() -> Result<()> {
        let temp_dir = tempdir()?;
        fs::create_dir(temp_dir.path().join("src"))?;
        File::create(temp_dir.path().join("src").join("App.CS"))?;

        let root = Scanner::new(ExclusionRules::default()).scan(temp_dir.path())?;
        let src = root.directories().next().unwrap();
        let file = src.files().next().unwrap();
        assert_eq!(src.path, PathBuf::from("src"));
        assert_eq!(file.display_path(), "src/App.CS");
        assert_eq!(file.extension, ".cs");
        assert!(file.abs_path.is_absolute());
        Ok(())
    }

    #[test]
    fn test_skip_path_is_left_out() -> Result<()> {
        let temp_dir = tempdir()?;
        File::create(temp_dir.path().join("keep.cs"))?;
        File::create(temp_dir.path().join("listing.out"))?;

        let abs = fs::canonicalize(temp_dir.path())?;
        let root = Scanner::new(ExclusionRules::empty())
            .skipping(abs.join("listing.out"))
            .scan(temp_dir.path())?;
        assert_eq!(names(&root), vec!["keep.cs"]);
        Ok(())
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = Scanner::new(ExclusionRules::default())
            .scan(&missing)
            .unwrap_err();
        assert!(matches!(err, ProjDocError::RootUnreadable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_links_listed_directory_links_not() -> Result<()> {
        let outside = tempdir()?;
        fs::write(outside.path().join("shared.cs"), "class Shared {}\n")?;
        fs::create_dir(outside.path().join("lib"))?;

        let temp_dir = tempdir()?;
        File::create(temp_dir.path().join("a.cs"))?;
        std::os::unix::fs::symlink(
            outside.path().join("shared.cs"),
            temp_dir.path().join("shared.cs"),
        )?;
        std::os::unix::fs::symlink(outside.path().join("lib"), temp_dir.path().join("lib"))?;
        std::os::unix::fs::symlink(
            outside.path().join("missing.cs"),
            temp_dir.path().join("dangling.cs"),
        )?;

        let root = Scanner::new(ExclusionRules::default()).scan(temp_dir.path())?;
        assert_eq!(names(&root), vec!["a.cs", "shared.cs"]);

        let shared = root.files().nth(1).unwrap();
        assert_eq!(shared.display_path(), "shared.cs");
        assert_eq!(fs::read_to_string(&shared.abs_path)?, "class Shared {}\n");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_is_left_out() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir()?;
        let locked = temp_dir.path().join("a_locked");
        fs::create_dir(&locked)?;
        File::create(locked.join("hidden.cs"))?;
        fs::create_dir(temp_dir.path().join("b_open"))?;
        File::create(temp_dir.path().join("b_open").join("inner.js"))?;
        File::create(temp_dir.path().join("main.cs"))?;

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;
        // Privileged users read through permission bits; nothing to check then
        let privileged = fs::read_dir(&locked).is_ok();

        let scanned = Scanner::new(ExclusionRules::default()).scan(temp_dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        if privileged {
            return Ok(());
        }

        let root = scanned?;
        assert_eq!(names(&root), vec!["main.cs", "b_open"]);
        let open = root.directories().next().unwrap();
        assert_eq!(names(open), vec!["inner.js"]);
        Ok(())
    }
}
