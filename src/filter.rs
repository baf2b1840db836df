/*!
 * Exclusion rules deciding which entries take part in a listing
 */

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use glob_match::glob_match;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::Result;
use crate::types::{extension_of, EntryKind};

/// Directories skipped by default, with everything below them
pub static DEFAULT_EXCLUDED_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version control & CI
        ".git",
        ".github",
        // Build output
        "bin",
        "obj",
        "dist",
        "artifacts",
        "TestResults",
        "coverage",
        // Dependencies
        "node_modules",
        "packages",
        // Static assets
        "wwwroot",
        "docs",
        "images",
        "resources",
        // IDEs & Editors
        ".vs",
        ".cr",
        ".vscode",
        ".idea",
    ]
});

/// File extensions skipped by default
pub static DEFAULT_EXCLUDED_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Binaries & build products
        ".exe",
        ".dll",
        ".pdb",
        ".class",
        ".jar",
        ".cache",
        // IDE & solution state
        ".suo",
        ".user",
        ".userprefs",
        ".sln",
        // Keys & certificates
        ".snk",
        ".pfx",
        ".cer",
        // VCS & docker metadata
        ".dockerignore",
        ".gitattributes",
        ".gitignore",
        // Documents & logs
        ".pdf",
        ".md",
        ".txt",
        ".log",
        ".tmp",
        ".bak",
        ".swp",
        // Images
        ".png",
        ".jpg",
        ".jpeg",
        ".gif",
        ".bmp",
        ".ico",
        // Archives & disk images
        ".zip",
        ".rar",
        ".7z",
        ".tar",
        ".gz",
        ".iso",
        // Media
        ".mp3",
        ".mp4",
        ".avi",
        ".mov",
        ".wmv",
        ".flv",
    ]
});

/// Exact file names skipped by default
pub static DEFAULT_EXCLUDED_FILES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "launchsettings.json",
        "appsettings.json",
        "appsettings.development.json",
        "appsettings.production.json",
        "appsettings.staging.json",
        "web.config",
        "project.lock.json",
    ]
});

/// Name/extension rules applied to every entry of the walk.
///
/// All comparisons are case-insensitive; values are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    excluded_dirs: BTreeSet<String>,
    excluded_extensions: BTreeSet<String>,
    excluded_files: BTreeSet<String>,
    ignore_patterns: Vec<String>,
}

/// On-disk shape of a rules file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesFile {
    /// Extra directory names
    pub excluded_dirs: Vec<String>,
    /// Extra extensions, with or without the leading dot
    pub excluded_extensions: Vec<String>,
    /// Extra exact file names
    pub excluded_files: Vec<String>,
    /// Extra glob patterns matched against entry names
    pub ignore_patterns: Vec<String>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::empty()
            .with_dirs(DEFAULT_EXCLUDED_DIRS.iter().copied())
            .with_extensions(DEFAULT_EXCLUDED_EXTENSIONS.iter().copied())
            .with_files(DEFAULT_EXCLUDED_FILES.iter().copied())
    }
}

impl ExclusionRules {
    /// Rules that exclude nothing
    pub fn empty() -> Self {
        Self {
            excluded_dirs: BTreeSet::new(),
            excluded_extensions: BTreeSet::new(),
            excluded_files: BTreeSet::new(),
            ignore_patterns: Vec::new(),
        }
    }

    /// Add excluded directory names
    pub fn with_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_dirs
            .extend(dirs.into_iter().map(|d| d.as_ref().to_lowercase()));
        self
    }

    /// Add excluded extensions; a missing leading dot is added
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_extensions
            .extend(extensions.into_iter().map(|e| normalize_extension(e.as_ref())));
        self
    }

    /// Add excluded exact file names
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_files
            .extend(files.into_iter().map(|f| f.as_ref().to_lowercase()));
        self
    }

    /// Add glob patterns matched against entry names
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignore_patterns
            .extend(patterns.into_iter().map(|p| p.as_ref().to_lowercase()));
        self
    }

    /// Extend these rules with the contents of a JSON rules file
    pub fn with_rules_file(self, path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let file: RulesFile = serde_json::from_str(&raw)?;
        Ok(self
            .with_dirs(file.excluded_dirs)
            .with_extensions(file.excluded_extensions)
            .with_files(file.excluded_files)
            .with_patterns(file.ignore_patterns))
    }

    /// Decide whether an entry is hidden from the listing
    pub fn should_exclude(&self, name: &str, kind: EntryKind) -> bool {
        let lowered = name.to_lowercase();

        if self
            .ignore_patterns
            .iter()
            .any(|pattern| glob_match(pattern, &lowered))
        {
            return true;
        }

        match kind {
            EntryKind::Directory => self.excluded_dirs.contains(&lowered),
            EntryKind::File => {
                let extension = extension_of(name);
                (!extension.is_empty() && self.excluded_extensions.contains(&extension))
                    || self.excluded_files.contains(&lowered)
            }
        }
    }
}

fn normalize_extension(extension: &str) -> String {
    let lowered = extension.trim().to_lowercase();
    if lowered.starts_with('.') {
        lowered
    } else {
        format!(".{}", lowered)
    }
}
