/*!
 * Utility functions for projdoc
 */

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Absolute form of a path that may not exist yet.
///
/// The parent is canonicalized when it exists so the result can be compared
/// with paths produced by a walk over a canonical root.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    if let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) {
        if parent.exists() {
            return Ok(fs::canonicalize(parent)?.join(name));
        }
    }
    Ok(absolute)
}
