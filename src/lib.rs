/*!
 * projdoc - Generate a single Markdown listing of a project
 *
 * This library walks a project directory, renders its filtered structure as
 * an ASCII tree and appends the full text of every included file, producing
 * one Markdown document.
 */

pub mod collector;
pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod language;
pub mod report;
pub mod repo;
pub mod scanner;
pub mod tree;
pub mod types;
pub mod utils;
pub mod writer;


use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::info;

// Re-export main components for easier access
pub use collector::{CollectStats, ContentCollector};
pub use config::Config;
pub use document::{FileSection, RenderedDocument};
pub use error::{ProjDocError, Result};
pub use filter::ExclusionRules;
pub use language::Language;
pub use report::{ListingReport, Reporter};
pub use scanner::Scanner;
pub use tree::{TreeRenderer, TreeStats};
pub use types::{DirectoryNode, EntryKind, FileNode, Node};
pub use writer::MarkdownWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A rendered listing together with the counters of both walks
#[derive(Debug, Clone)]
pub struct Listing {
    /// Document ready to be written
    pub document: RenderedDocument,
    /// Counters from the structure walk
    pub tree: TreeStats,
    /// Counters from the content walk
    pub content: CollectStats,
}

/// Scan the configured project and render its listing.
///
/// The output file is never part of its own listing.
pub fn generate(config: &Config, progress: Arc<ProgressBar>) -> Result<Listing> {
    let skip = utils::absolute_path(&config.output_file)?;
    let scanner = Scanner::new(config.rules.clone()).skipping(skip);
    let root = scanner.scan(&config.target_dir)?;

    let renderer = match &config.root_label {
        Some(label) => TreeRenderer::new().with_root_label(label.as_str()),
        None => TreeRenderer::new(),
    };
    let (structure, tree) = renderer.render(&root);
    info!(
        "Structure: {} directories, {} files",
        tree.directories, tree.files
    );

    progress.set_length(tree.files as u64);
    let collected = ContentCollector::new(progress).collect(&root);
    info!(
        "Contents: {} files written, {} skipped",
        collected.stats.files_written, collected.stats.files_skipped
    );

    Ok(Listing {
        document: RenderedDocument::new(structure, collected.sections),
        tree,
        content: collected.stats,
    })
}
