/*!
 * File content collection
 *
 * Walks the snapshot a second time, independently of the tree renderer, and
 * reads every listed file into a fenced section. A file that cannot be read
 * is logged and skipped; it never stops the walk.
 */

use std::fs;
use std::io;
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{debug, warn};

use crate::document::FileSection;
use crate::language::Language;
use crate::report::FileReportInfo;
use crate::types::{slash_path, DirectoryNode, FileNode};

/// Counters gathered while collecting file contents
#[derive(Debug, Clone, Default)]
pub struct CollectStats {
    /// Files whose content was included
    pub files_written: usize,
    /// Files skipped because they could not be read
    pub files_skipped: usize,
    /// Total lines across included files
    pub total_lines: usize,
    /// Total characters across included files
    pub total_chars: usize,
    /// Per-file details, keyed by relative path
    pub file_details: Vec<(String, FileReportInfo)>,
}

/// Result of a content walk
#[derive(Debug, Clone, Default)]
pub struct CollectedContent {
    /// One section per readable file, in walk order
    pub sections: Vec<FileSection>,
    /// Counters for the summary
    pub stats: CollectStats,
}

/// Reads the files of a snapshot into document sections
pub struct ContentCollector {
    /// Progress bar, advanced once per file
    progress: Arc<ProgressBar>,
}

impl ContentCollector {
    /// Create a new collector
    pub fn new(progress: Arc<ProgressBar>) -> Self {
        Self { progress }
    }

    /// Collect the sections of every file below `root`
    pub fn collect(&self, root: &DirectoryNode) -> CollectedContent {
        let mut collected = CollectedContent::default();
        self.collect_directory(root, &mut collected);
        collected
    }

    fn collect_directory(&self, dir: &DirectoryNode, collected: &mut CollectedContent) {
        debug!("Collecting directory {}", slash_path(&dir.path));
        for file in dir.files() {
            self.collect_file(file, collected);
        }

        for subdir in dir.directories() {
            self.collect_directory(subdir, collected);
        }
    }

    fn collect_file(&self, file: &FileNode, collected: &mut CollectedContent) {
        let path = file.display_path();
        self.progress.inc(1);
        self.progress.set_message(format!("Reading {}", path));

        match read_text(file) {
            Ok(content) => {
                debug!("Collected {}", path);
                let info = FileReportInfo {
                    lines: content.lines().count(),
                    chars: content.chars().count(),
                };

                let stats = &mut collected.stats;
                stats.files_written += 1;
                stats.total_lines += info.lines;
                stats.total_chars += info.chars;
                stats.file_details.push((path.clone(), info));

                collected.sections.push(FileSection {
                    path,
                    language: Language::from_extension(&file.extension),
                    content,
                });
            }
            Err(e) => {
                warn!("Skipping unreadable file {}: {}", file.abs_path.display(), e);
                collected.stats.files_skipped += 1;
            }
        }
    }
}

/// Read a whole file as UTF-8 text
fn read_text(file: &FileNode) -> io::Result<String> {
    fs::read_to_string(&file.abs_path)
}
